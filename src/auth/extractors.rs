use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// Extracts the claims `AuthMiddleware` stored in the request extensions.
///
/// Only meaningful on routes behind the guard; elsewhere it fails with 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedEmployee(pub Claims);

impl FromRequest for AuthenticatedEmployee {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>().cloned() {
            Some(claims) => ready(Ok(AuthenticatedEmployee(claims))),
            None => {
                let err = AppError::Unauthorized(
                    "Claims not found in request. Ensure AuthMiddleware is active.".to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}
