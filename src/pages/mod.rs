//! Server-rendered HTML: the public site and the admin back-office.

pub mod admin;
pub mod editor;
pub mod public;

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};
use lazy_static::lazy_static;
use maud::{html, Markup, DOCTYPE};
use regex::Regex;

lazy_static! {
    static ref EXECUTABLE_BLOCK: Regex =
        Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>").unwrap();
    static ref EXECUTABLE_TAG: Regex = Regex::new(r"(?i)</?(script|style)\b[^>]*>").unwrap();
}

/// Removes `<script>` and `<style>` elements from editor-authored HTML; everything else is kept as is.
///
/// Passes repeat until nothing changes, so tags reassembled by a removal are removed too.
pub fn strip_executable_html(content: &str) -> String {
    let mut current = content.to_string();
    loop {
        let without_blocks = EXECUTABLE_BLOCK.replace_all(&current, "");
        let stripped = EXECUTABLE_TAG.replace_all(&without_blocks, "").into_owned();
        if stripped == current {
            return stripped;
        }
        current = stripped;
    }
}

pub fn html_response(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(markup.into_string())
}

pub(crate) fn document(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (body) }
        }
    }
}
