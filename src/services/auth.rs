use std::sync::Arc;

use lazy_static::lazy_static;

use crate::auth::{hash_password, verify_password, LoginResponse, TokenService};
use crate::error::AppError;
use crate::models::AuthUser;
use crate::store::Store;

/// Shared by every credential failure so callers cannot tell which check failed.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

lazy_static! {
    /// Checked instead of a stored hash when no active employee matches the email,
    /// so every rejected login costs one bcrypt verification at the default cost.
    static ref DUMMY_HASH: String = hash_password("questhouse-no-such-employee").unwrap_or_default();
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized(INVALID_CREDENTIALS.into())
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    /// Authenticates an employee and issues an access token.
    ///
    /// Unknown email, inactive account and wrong password all fail with the same
    /// `Unauthorized` message. Nothing is stored on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        let employee = match self.store.find_employee_by_email(email).await? {
            Some(employee) if employee.is_active => employee,
            _ => {
                if let Err(err) = verify_password(password, &DUMMY_HASH) {
                    log::error!("Dummy credential check failed: {}", err);
                }
                log::warn!("Rejected login attempt");
                return Err(invalid_credentials());
            }
        };

        if !verify_password(password, &employee.password_hash)? {
            log::warn!("Rejected login attempt");
            return Err(invalid_credentials());
        }

        let access_token = self.tokens.issue(&employee)?;
        log::info!("Employee {} logged in", employee.id);

        Ok(LoginResponse {
            access_token,
            user: AuthUser::from(&employee),
        })
    }
}
