use crate::{error::AppError, services::AppServices};
use actix_web::{get, web, HttpResponse, Responder};

/// Lists every booking.
///
/// Requires a bearer token; the role claim is not checked.
///
/// ## Responses:
/// - `200 OK`: A JSON array of `Booking` objects ordered by id.
/// - `401 Unauthorized`: Missing or invalid token.
/// - `500 Internal Server Error`: The store failed.
#[get("")]
pub async fn get_bookings(services: web::Data<AppServices>) -> Result<impl Responder, AppError> {
    let bookings = services.bookings.find_all().await?;
    Ok(HttpResponse::Ok().json(bookings))
}
