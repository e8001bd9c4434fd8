mod common;

use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{test, App};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use questhouse::app;
use questhouse::auth::LoginResponse;
use questhouse::models::Role;

#[test_log::test(actix_rt::test)]
async fn test_login_flow_issues_usable_token() {
    let app = test::init_service(
        App::new()
            .wrap(Logger::default())
            .configure(app::configure(common::services(common::store()))),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/admin/auth/login")
        .set_json(json!({ "email": common::ADMIN_EMAIL, "password": common::PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert_eq!(
        status,
        StatusCode::OK,
        "Login failed. Body: {:?}",
        String::from_utf8_lossy(&body)
    );

    let raw: Value = serde_json::from_slice(&body).unwrap();
    let user = raw["user"].as_object().unwrap();
    let mut keys: Vec<&str> = user.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["email", "fullName", "id", "role"]);

    let login: LoginResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(login.user.id, 1);
    assert_eq!(login.user.role, Role::Admin);

    let claims = common::tokens().verify(&login.access_token).unwrap();
    assert_eq!(claims.sub, 1);
    assert_eq!(claims.email, common::ADMIN_EMAIL);
    assert_eq!(claims.role, Role::Admin);

    let req = test::TestRequest::get()
        .uri("/api/bookings")
        .insert_header(("Authorization", format!("Bearer {}", login.access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_login_failures_are_indistinguishable() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    let attempts = vec![
        (common::ADMIN_EMAIL, "Secret124", "wrong password"),
        ("nobody@questhouse.test", common::PASSWORD, "unknown email"),
        (common::INACTIVE_EMAIL, common::PASSWORD, "inactive employee"),
    ];

    let mut bodies = Vec::new();
    for (email, password, description) in attempts {
        let req = test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(json!({ "email": email, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "Test case failed: {}",
            description
        );
        let body: Value = test::read_body_json(resp).await;
        bodies.push(body);
    }

    assert_eq!(bodies[0], json!({ "error": "Invalid credentials" }));
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}

#[actix_rt::test]
async fn test_login_input_errors() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::store()))),
    )
    .await;

    let test_cases = vec![
        (
            json!({ "password": common::PASSWORD }),
            StatusCode::BAD_REQUEST,
            "missing email",
        ),
        (
            json!({ "email": common::ADMIN_EMAIL }),
            StatusCode::BAD_REQUEST,
            "missing password",
        ),
        (
            json!({ "email": "admin.questhouse.test", "password": common::PASSWORD }),
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid email format",
        ),
        (
            json!({ "email": common::ADMIN_EMAIL, "password": "" }),
            StatusCode::UNPROCESSABLE_ENTITY,
            "empty password",
        ),
    ];

    for (payload, expected_status, description) in test_cases {
        let req = test::TestRequest::post()
            .uri("/api/admin/auth/login")
            .set_json(&payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body_bytes = test::read_body(resp).await;

        assert_eq!(
            status,
            expected_status,
            "Test case failed: {}. Expected {}, got {}. Body: {:?}",
            description,
            expected_status,
            status,
            String::from_utf8_lossy(&body_bytes)
        );

        let body: Value = serde_json::from_slice(&body_bytes)
            .unwrap_or_else(|_| panic!("Test case failed: {}. Body is not JSON", description));
        assert!(
            body["error"].as_str().map_or(false, |msg| !msg.is_empty()),
            "Test case failed: {}. Body: {}",
            description,
            body
        );
    }

    let req = test::TestRequest::post()
        .uri("/api/admin/auth/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn test_login_with_store_down_is_server_error() {
    let app = test::init_service(
        App::new().configure(app::configure(common::services(common::FailingStore))),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/admin/auth/login")
        .set_json(json!({ "email": common::ADMIN_EMAIL, "password": common::PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
