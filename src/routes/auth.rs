use crate::{
    auth::{LoginRequest, ACCESS_TOKEN_COOKIE},
    error::AppError,
    services::AppServices,
};
use actix_web::{
    cookie::{Cookie, SameSite},
    post, web, HttpResponse, Responder,
};
use validator::Validate;

/// Login employee
///
/// Authenticates a back-office employee and returns an access token with the
/// sanitized employee record. The token is also set as an `HttpOnly` cookie scoped
/// to `/admin`, so the back-office pages work from plain browser navigation.
///
/// ## Responses:
/// - `200 OK`: `{ "accessToken": ..., "user": { "id", "email", "fullName", "role" } }`.
/// - `400 Bad Request`: If the body is not valid JSON or a field is missing.
/// - `401 Unauthorized`: Unknown email, inactive account or wrong password (one message for all).
/// - `422 Unprocessable Entity`: Empty fields or a malformed email.
#[post("/login")]
pub async fn login(
    services: web::Data<AppServices>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let response = services
        .auth
        .login(&login_data.email, &login_data.password)
        .await?;

    let cookie = Cookie::build(ACCESS_TOKEN_COOKIE, response.access_token.clone())
        .path("/admin")
        .http_only(true)
        .same_site(SameSite::Strict)
        .finish();

    Ok(HttpResponse::Ok().cookie(cookie).json(response))
}
