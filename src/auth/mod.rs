pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::AuthUser;

pub use extractors::AuthenticatedEmployee;
pub use middleware::{AuthMiddleware, ACCESS_TOKEN_COOKIE};
pub use password::{hash_password, hash_password_with_cost, verify_password};
pub use token::{Claims, TokenService};

/// Payload of `POST /api/admin/auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Must look like `local@domain.tld`.
    #[validate(
        length(min = 1, message = "Email is required"),
        custom = "crate::validation::email_shape"
    )]
    pub email: String,
    /// Only presence is checked here; strength rules apply when passwords are set, not at login.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login: the bearer token and the sanitized employee projection.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: AuthUser,
}
