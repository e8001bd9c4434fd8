//! Composition root.
//!
//! Builds the route table for a prepared [`AppServices`]. Used by `main` and by
//! the integration tests, so both run the exact same routing.

use actix_web::{web, Error, HttpRequest};

use crate::auth::AuthMiddleware;
use crate::error::AppError;
use crate::pages;
use crate::routes;
use crate::services::AppServices;

/// Registers every route. Order matters: the public `/{slug}` catch-all goes last.
pub fn configure(services: web::Data<AppServices>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let tokens = services.tokens.clone();

        cfg.app_data(services)
            .app_data(web::JsonConfig::default().error_handler(bad_request))
            .app_data(web::QueryConfig::default().error_handler(bad_request))
            .app_data(web::PathConfig::default().error_handler(bad_request))
            .service(routes::health::health)
            .service(web::scope("/api").configure(|cfg| routes::config(cfg, &tokens)))
            .service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::new(tokens.clone()))
                    .configure(pages::admin::config),
            )
            .configure(pages::public::config);
    }
}

/// Extractor failures (unparseable body, missing query field, malformed path segment)
/// answer with the same JSON error body as every other failure.
fn bad_request<E: std::fmt::Display>(err: E, req: &HttpRequest) -> Error {
    log::debug!("Malformed request to {}: {}", req.path(), err);
    AppError::BadRequest(err.to_string()).into()
}
