#![doc = "The `questhouse` library crate."]
#![doc = ""]
#![doc = "Domain models, the persistence seam, authentication, services, the JSON API"]
#![doc = "and the server-rendered pages for the quest room and cafe site."]
#![doc = "The binary (`main.rs`) only reads configuration and starts the server."]

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod routes;
pub mod services;
pub mod store;
pub mod validation;

pub use error::AppError;
pub use services::AppServices;
