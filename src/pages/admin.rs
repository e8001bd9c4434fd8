//! Admin back-office pages. Mounted under `/admin` behind the guard, which also reads the login cookie.

use actix_web::{http::StatusCode, web, HttpResponse};
use maud::{html, Markup};
use serde::Deserialize;

use super::editor::{ContentEditor, LoadState};
use super::{document, html_response};
use crate::auth::AuthenticatedEmployee;
use crate::error::AppError;
use crate::models::{AdminMenuItem, Booking, PageKey, Quest, User};
use crate::services::AppServices;

pub const NO_BOOKINGS: &str = "No bookings";
pub const NO_QUESTS: &str = "No quests";
pub const NO_EMPLOYEES: &str = "No employees";
pub const NO_BLOCKS: &str = "No blocks on this page";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/bookings", web::get().to(bookings))
        .route("/content", web::get().to(content))
        .route("/quests", web::get().to(quests))
        .route("/employees", web::get().to(employees));
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPageQuery {
    pub page_key: Option<String>,
}

async fn bookings(
    services: web::Data<AppServices>,
    employee: AuthenticatedEmployee,
) -> HttpResponse {
    let result = services.bookings.find_all().await;
    respond(AdminMenuItem::Bookings, &employee, result, render_bookings_table)
}

async fn quests(services: web::Data<AppServices>, employee: AuthenticatedEmployee) -> HttpResponse {
    let result = services.quests.find_all().await;
    respond(AdminMenuItem::Quests, &employee, result, render_quests_table)
}

async fn employees(
    services: web::Data<AppServices>,
    employee: AuthenticatedEmployee,
) -> HttpResponse {
    let result = services.users.find_all().await;
    respond(AdminMenuItem::Employees, &employee, result, render_users_table)
}

/// Without `pageKey` the editor stays idle; with one it selects the page and loads its blocks.
async fn content(
    services: web::Data<AppServices>,
    employee: AuthenticatedEmployee,
    query: web::Query<ContentPageQuery>,
) -> HttpResponse {
    let mut editor = ContentEditor::default();

    if let Some(page) = query.page_key.as_deref().and_then(PageKey::parse) {
        let loaded = match editor.select(page) {
            Ok(()) => editor.load(&services.content).await,
            Err(err) => Err(err),
        };
        if let Err(err) = loaded {
            log::warn!("Content editor for {} not loaded: {}", page.as_str(), err);
        }
    }

    let status = match editor.state() {
        LoadState::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };
    html_response(
        status,
        admin_layout(
            AdminMenuItem::Content,
            &employee,
            render_content_editor(&editor),
        ),
    )
}

fn respond<T, F>(
    item: AdminMenuItem,
    employee: &AuthenticatedEmployee,
    result: Result<Vec<T>, AppError>,
    render: F,
) -> HttpResponse
where
    F: FnOnce(&[T]) -> Markup,
{
    match result {
        Ok(list) => html_response(
            StatusCode::OK,
            admin_layout(item, employee, render(list.as_slice())),
        ),
        Err(err) => {
            log::error!("Admin {} page failed: {}", item.label(), err);
            html_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                admin_layout(item, employee, error_notice(err.message())),
            )
        }
    }
}

fn error_notice(message: &str) -> Markup {
    html! {
        div.error role="alert" {
            p { "Could not load data: " (message) }
        }
    }
}

pub fn admin_layout(active: AdminMenuItem, employee: &AuthenticatedEmployee, body: Markup) -> Markup {
    document(
        &format!("{} | Admin", active.label()),
        html! {
            header.admin-header {
                span { "Signed in as " (employee.0.email) " (" (employee.0.role.as_str()) ")" }
            }
            aside.admin-menu {
                ul {
                    @for item in AdminMenuItem::ALL {
                        li {
                            a.active[item == active] href=(item.path()) { (item.label()) }
                        }
                    }
                }
            }
            main {
                h1 { (active.label()) }
                (body)
            }
        },
    )
}

pub fn render_bookings_table(bookings: &[Booking]) -> Markup {
    html! {
        @if bookings.is_empty() {
            p.placeholder { (NO_BOOKINGS) }
        } @else {
            table.admin-table {
                thead {
                    tr {
                        th { "#" }
                        th { "Date" }
                        th { "Time" }
                        th { "Type" }
                        th { "Guests" }
                        th { "Status" }
                        th { "Total" }
                        th { "Comment" }
                        th {}
                    }
                }
                tbody {
                    @for booking in bookings {
                        tr {
                            td { (booking.id) }
                            td { (booking.date.format("%d.%m.%Y").to_string()) }
                            td { (booking.time.format("%H:%M").to_string()) }
                            td { (booking.booking_type.label()) }
                            td { (booking.guests_count) }
                            td { (booking.status.label()) }
                            td { (booking.total_price) }
                            td { (booking.comment.as_deref().unwrap_or("")) }
                            td { button type="button" disabled { "Edit" } }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_quests_table(quests: &[Quest]) -> Markup {
    html! {
        @if quests.is_empty() {
            p.placeholder { (NO_QUESTS) }
        } @else {
            table.admin-table {
                thead {
                    tr {
                        th { "#" }
                        th { "Title" }
                        th { "Duration" }
                        th { "Players" }
                        th { "Difficulty" }
                        th { "Price" }
                        th { "Active" }
                    }
                }
                tbody {
                    @for quest in quests {
                        tr {
                            td { (quest.id) }
                            td { (quest.title) }
                            td { (quest.duration) " min" }
                            td { (quest.min_players) "–" (quest.max_players) }
                            td { (quest.difficulty.label()) }
                            td { (quest.price) }
                            td { @if quest.is_active { "Yes" } @else { "No" } }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_users_table(users: &[User]) -> Markup {
    html! {
        @if users.is_empty() {
            p.placeholder { (NO_EMPLOYEES) }
        } @else {
            table.admin-table {
                thead {
                    tr {
                        th { "#" }
                        th { "Name" }
                        th { "Email" }
                        th { "Role" }
                    }
                }
                tbody {
                    @for user in users {
                        tr {
                            td { (user.id) }
                            td { (user.name) }
                            td { (user.email) }
                            td { (user.role.as_str()) }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_content_editor(editor: &ContentEditor) -> Markup {
    html! {
        form.page-selector method="get" action=(AdminMenuItem::Content.path()) {
            label for="pageKey" { "Page" }
            select id="pageKey" name="pageKey" {
                @for key in PageKey::ALL {
                    option value=(key.as_str()) selected[key == editor.page()] { (key.label()) }
                }
            }
            button type="submit" { "Load blocks" }
        }
        @match editor.state() {
            LoadState::Idle => {
                p.hint { "Select a page and press \"Load blocks\"." }
            },
            LoadState::Loading => {
                p.hint { "Loading…" }
            },
            LoadState::Empty => {
                p.placeholder { (NO_BLOCKS) }
            },
            LoadState::Failed(message) => {
                (error_notice(message))
            },
            LoadState::Loaded(blocks) => {
                table.admin-table {
                    thead {
                        tr {
                            th { "#" }
                            th { "Title" }
                            th { "Media" }
                            th {}
                        }
                    }
                    tbody {
                        @for block in blocks {
                            tr {
                                td { (block.id) }
                                td { (block.title) }
                                td { (block.media.len()) }
                                td { button type="button" disabled { "Edit" } }
                            }
                        }
                    }
                }
            },
        }
    }
}
