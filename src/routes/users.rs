use crate::{error::AppError, services::AppServices};
use actix_web::{get, web, HttpResponse, Responder};

/// Lists every user. Requires a bearer token.
#[get("")]
pub async fn get_users(services: web::Data<AppServices>) -> Result<impl Responder, AppError> {
    let users = services.users.find_all().await?;
    Ok(HttpResponse::Ok().json(users))
}
