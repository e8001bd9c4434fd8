use crate::{error::AppError, services::AppServices};
use actix_web::{get, web, HttpResponse, Responder};

/// Lists every quest, active or not. Public.
#[get("/quests")]
pub async fn get_quests(services: web::Data<AppServices>) -> Result<impl Responder, AppError> {
    let quests = services.quests.find_all().await?;
    Ok(HttpResponse::Ok().json(quests))
}

/// Retrieves one quest by id.
///
/// ## Responses:
/// - `200 OK`: The `Quest` object.
/// - `400 Bad Request`: The id is not a number.
/// - `404 Not Found`: No quest has this id.
#[get("/quests/{id}")]
pub async fn get_quest(
    services: web::Data<AppServices>,
    quest_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let quest = services.quests.find_one(quest_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quest))
}
