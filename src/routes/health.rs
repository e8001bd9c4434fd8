use crate::services::AppServices;
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Health check endpoint
///
/// Pings the store. Answers `200` with `"status": "ok"` when it responds and
/// `503` with `"status": "degraded"` otherwise.
#[get("/health")]
pub async fn health(services: web::Data<AppServices>) -> impl Responder {
    match services.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "timestamp": Utc::now()
        })),
        Err(err) => {
            log::error!("Health check failed: {}", err);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "degraded",
                "timestamp": Utc::now()
            }))
        }
    }
}
