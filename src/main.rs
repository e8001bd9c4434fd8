use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;

use questhouse::auth::TokenService;
use questhouse::config::Config;
use questhouse::services::AppServices;
use questhouse::store::PostgresStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e))?;

    let store = PostgresStore::new(pool);
    store
        .migrate()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expiration_hours);
    let services = web::Data::new(AppServices::new(Arc::new(store), tokens));

    log::info!("Starting questhouse server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(questhouse::app::configure(services.clone()))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
