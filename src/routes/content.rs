use crate::{error::AppError, services::AppServices};
use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQuery {
    pub page_key: String,
}

/// Blocks of one page, in display order.
///
/// ## Query Parameters:
/// - `pageKey`: e.g. `HOME`, `FAQ`, `PARTY_GUIDE`. Unknown keys yield an empty array.
///
/// ## Responses:
/// - `200 OK`: A JSON array of `PageBlock` objects.
/// - `400 Bad Request`: `pageKey` is missing.
/// - `500 Internal Server Error`: The store failed.
#[get("/content")]
pub async fn get_content(
    services: web::Data<AppServices>,
    query: web::Query<ContentQuery>,
) -> Result<impl Responder, AppError> {
    let blocks = services.content.fetch(&query.page_key).await?;
    Ok(HttpResponse::Ok().json(blocks))
}
