//! Reference data listings: news, reviews and cafe tables.

use crate::{error::AppError, services::AppServices};
use actix_web::{get, web, HttpResponse, Responder};

#[get("/news")]
pub async fn get_news(services: web::Data<AppServices>) -> Result<impl Responder, AppError> {
    let news = services.news.find_all().await?;
    Ok(HttpResponse::Ok().json(news))
}

#[get("/reviews")]
pub async fn get_reviews(services: web::Data<AppServices>) -> Result<impl Responder, AppError> {
    let reviews = services.reviews.find_all().await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// Cafe tables. Mounted behind the bearer guard.
#[get("")]
pub async fn get_tables(services: web::Data<AppServices>) -> Result<impl Responder, AppError> {
    let tables = services.tables.find_all().await?;
    Ok(HttpResponse::Ok().json(tables))
}
