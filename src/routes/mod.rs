pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod content;
pub mod health;
pub mod quests;
pub mod users;

use actix_web::web;

use crate::auth::{AuthMiddleware, TokenService};

/// The JSON API route table, mounted under `/api`.
///
/// Protected scopes are wrapped in the bearer guard, which always runs before their handlers.
pub fn config(cfg: &mut web::ServiceConfig, tokens: &TokenService) {
    cfg.service(web::scope("/admin/auth").service(auth::login))
        .service(quests::get_quests)
        .service(quests::get_quest)
        .service(catalog::get_news)
        .service(catalog::get_reviews)
        .service(content::get_content)
        .service(
            web::scope("/bookings")
                .wrap(AuthMiddleware::new(tokens.clone()))
                .service(bookings::get_bookings),
        )
        .service(
            web::scope("/users")
                .wrap(AuthMiddleware::new(tokens.clone()))
                .service(users::get_users),
        )
        .service(
            web::scope("/tables")
                .wrap(AuthMiddleware::new(tokens.clone()))
                .service(catalog::get_tables),
        );
}
