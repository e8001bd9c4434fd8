mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::json;

use questhouse::app;
use questhouse::auth::ACCESS_TOKEN_COOKIE;
use questhouse::models::PageKey;
use questhouse::pages::admin::{NO_BLOCKS, NO_BOOKINGS};
use questhouse::pages::public::EMPTY_PLACEHOLDER;
use questhouse::store::MemoryStore;

fn body_text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_rt::test]
async fn test_home_page_renders_blocks() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);

    assert!(html.contains("<h2>Welcome</h2>"));
    assert!(html.contains("<p>Welcome body</p>"));
    assert!(html.find("Welcome body").unwrap() < html.find("Opening hours body").unwrap());
    assert!(!html.contains(EMPTY_PLACEHOLDER));
}

#[actix_rt::test]
async fn test_page_without_content_shows_placeholder() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    let req = test::TestRequest::get().uri("/faq").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains(EMPTY_PLACEHOLDER));
    for key in PageKey::ALL {
        assert!(html.contains(&format!(r#"href="{}""#, key.path())));
    }
}

#[actix_rt::test]
async fn test_unknown_slug_is_not_found() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    let req = test::TestRequest::get().uri("/spaceship").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Page not found"));
}

#[actix_rt::test]
async fn test_listing_pages_show_visible_items_only() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    let req = test::TestRequest::get().uri("/quests").to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Haunted Manor"));
    assert!(!html.contains("Retired Room"));

    let req = test::TestRequest::get().uri("/news").to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("New quest opens"));
    assert!(!html.contains("Draft announcement"));

    let req = test::TestRequest::get().uri("/about").to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains(r#"src="/media/hall.jpg""#));
}

#[test_log::test(actix_rt::test)]
async fn test_public_pages_survive_store_failure() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::FailingStore))),
    )
    .await;

    for uri in ["/", "/quests", "/reviews", "/contacts"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
        let html = body_text(&test::read_body(resp).await);
        assert!(html.contains(EMPTY_PLACEHOLDER), "GET {}", uri);
    }
}

#[actix_rt::test]
async fn test_admin_pages_require_token() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    for uri in ["/admin/bookings", "/admin/content", "/admin/quests", "/admin/employees"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "GET {}", uri);
    }
}

#[actix_rt::test]
async fn test_admin_bookings_page() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/admin/bookings")
        .insert_header(("Authorization", common::bearer()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("07.11.2026"));
    assert!(html.contains("Birthday"));
    assert!(!html.contains(NO_BOOKINGS));

    let empty = test::init_service(
        App::new().configure(app::configure(common::services(MemoryStore::new()))),
    )
    .await;
    let req = test::TestRequest::get()
        .uri("/admin/bookings")
        .insert_header(("Authorization", common::bearer()))
        .to_request();
    let html = body_text(&test::call_and_read_body(&empty, req).await);
    assert!(html.contains(NO_BOOKINGS));
}

#[actix_rt::test]
async fn test_admin_content_page_loads_on_request() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/admin/content")
        .insert_header(("Authorization", common::bearer()))
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Load blocks"));
    assert!(!html.contains("Welcome"));

    let req = test::TestRequest::get()
        .uri("/admin/content?pageKey=HOME")
        .insert_header(("Authorization", common::bearer()))
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Welcome"));
    assert!(html.contains("Opening hours"));

    let req = test::TestRequest::get()
        .uri("/admin/content?pageKey=CAFE")
        .insert_header(("Authorization", common::bearer()))
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains(NO_BLOCKS));
}

#[actix_rt::test]
async fn test_admin_content_form_works_with_login_cookie() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/admin/auth/login")
        .set_json(json!({ "email": common::ADMIN_EMAIL, "password": common::PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == ACCESS_TOKEN_COOKIE)
        .expect("login sets the token cookie")
        .into_owned();
    assert_eq!(cookie.path(), Some("/admin"));
    assert_eq!(cookie.http_only(), Some(true));

    // Following the menu link: only the cookie travels, no Authorization header.
    let req = test::TestRequest::get()
        .uri("/admin/content")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains(r#"method="get""#));
    assert!(html.contains(r#"action="/admin/content""#));
    assert!(html.contains(r#"name="pageKey""#));
    assert!(html.contains(r#"value="HOME""#));

    // Submitting the form encodes the selected option into the query string.
    let req = test::TestRequest::get()
        .uri("/admin/content?pageKey=HOME")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Welcome"));
    assert!(html.contains("Opening hours"));
}

#[actix_rt::test]
async fn test_admin_page_shows_error_notice_on_failure() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::FailingStore))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/admin/bookings")
        .insert_header(("Authorization", common::bearer()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Could not load data: database is unreachable"));
}
