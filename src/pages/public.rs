//! Public site pages.
//!
//! Every page loads its blocks by page key and renders them under the shared
//! navigation. Load failures are logged and the page renders as empty.

use actix_web::{http::StatusCode, web, HttpResponse};
use maud::{html, Markup, PreEscaped};

use super::{document, html_response, strip_executable_html};
use crate::models::{NewsItem, PageBlock, PageKey, Quest, Review};
use crate::services::AppServices;

pub const MEDIA_WIDTH: u32 = 300;
pub const MEDIA_HEIGHT: u32 = 200;
pub const EMPTY_PLACEHOLDER: &str = "Content coming soon";

/// Listings some pages show below their blocks.
#[derive(Debug, Clone, Default)]
pub enum PageExtras {
    #[default]
    None,
    Quests(Vec<Quest>),
    News(Vec<NewsItem>),
    Reviews(Vec<Review>),
}

impl PageExtras {
    pub fn is_empty(&self) -> bool {
        match self {
            PageExtras::None => true,
            PageExtras::Quests(quests) => quests.is_empty(),
            PageExtras::News(news) => news.is_empty(),
            PageExtras::Reviews(reviews) => reviews.is_empty(),
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/{slug}").route(web::get().to(page)));
}

async fn home(services: web::Data<AppServices>) -> HttpResponse {
    render_public_page(&services, PageKey::Home).await
}

async fn page(services: web::Data<AppServices>, slug: web::Path<String>) -> HttpResponse {
    match PageKey::from_slug(&slug) {
        Some(page) => render_public_page(&services, page).await,
        None => html_response(StatusCode::NOT_FOUND, render_not_found()),
    }
}

async fn render_public_page(services: &AppServices, page: PageKey) -> HttpResponse {
    let (blocks, extras) = futures::join!(services.content.load(page), load_extras(services, page));
    html_response(StatusCode::OK, render_page(page, &blocks, &extras))
}

async fn load_extras(services: &AppServices, page: PageKey) -> PageExtras {
    let extras = match page {
        PageKey::Quests => services.quests.find_active().await.map(PageExtras::Quests),
        PageKey::News => services.news.find_published().await.map(PageExtras::News),
        PageKey::Reviews => services.reviews.find_approved().await.map(PageExtras::Reviews),
        _ => Ok(PageExtras::None),
    };

    extras.unwrap_or_else(|err| {
        log::error!("Failed to load listings for {}: {}", page.as_str(), err);
        PageExtras::None
    })
}

fn navigation(active: Option<PageKey>) -> Markup {
    html! {
        nav.site-nav {
            ul {
                @for key in PageKey::ALL {
                    li {
                        a.active[Some(key) == active] href=(key.path()) { (key.label()) }
                    }
                }
            }
        }
    }
}

fn render_block(block: &PageBlock) -> Markup {
    html! {
        section.page-block id=(format!("block-{}", block.id)) {
            h2 { (block.title) }
            div.block-content { (PreEscaped(strip_executable_html(&block.content))) }
            @if !block.media.is_empty() {
                div.media-grid {
                    @for media in &block.media {
                        img src=(media.url) alt=(media.alt) width=(MEDIA_WIDTH) height=(MEDIA_HEIGHT) loading="lazy";
                    }
                }
            }
        }
    }
}

fn render_extras(extras: &PageExtras) -> Markup {
    html! {
        @match extras {
            PageExtras::None => {},
            PageExtras::Quests(quests) => {
                @for quest in quests {
                    article.quest-card {
                        h3 { (quest.title) }
                        p { (quest.description) }
                        ul.quest-facts {
                            li { (quest.duration) " min" }
                            li { (quest.min_players) "–" (quest.max_players) " players" }
                            li { (quest.difficulty.label()) }
                            li { "from " (quest.price) }
                        }
                    }
                }
            },
            PageExtras::News(news) => {
                @for item in news {
                    article.news-item {
                        h3 { (item.title) }
                        time datetime=(item.published_at.to_rfc3339()) {
                            (item.published_at.format("%d.%m.%Y").to_string())
                        }
                        @if let Some(image_url) = &item.image_url {
                            img src=(image_url) alt=(item.title) width=(MEDIA_WIDTH) height=(MEDIA_HEIGHT);
                        }
                        div.news-content { (PreEscaped(strip_executable_html(&item.content))) }
                    }
                }
            },
            PageExtras::Reviews(reviews) => {
                @for review in reviews {
                    blockquote.review {
                        p { (review.text) }
                        footer { (review.user_name) ", " (review.rating) "/5" }
                    }
                }
            },
        }
    }
}

/// Renders one public page from already-loaded data.
pub fn render_page(page: PageKey, blocks: &[PageBlock], extras: &PageExtras) -> Markup {
    document(
        page.label(),
        html! {
            (navigation(Some(page)))
            main {
                h1 { (page.label()) }
                @if blocks.is_empty() && extras.is_empty() {
                    p.placeholder { (EMPTY_PLACEHOLDER) }
                } @else {
                    @for block in blocks {
                        (render_block(block))
                    }
                    (render_extras(extras))
                }
            }
        },
    )
}

pub fn render_not_found() -> Markup {
    document(
        "Page not found",
        html! {
            (navigation(None))
            main {
                h1 { "Page not found" }
                p { a href=(PageKey::Home.path()) { "Back to the home page" } }
            }
        },
    )
}
