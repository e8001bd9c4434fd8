//! Shared input validators.
//!
//! Pure functions with no I/O. Request types hook into them through the `validator`
//! derive (see [`email_shape`]); the services themselves never call them.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_PHONE_LENGTH: usize = 10;

lazy_static! {
    // local@domain.tld: one '@', no whitespace, dot-separated non-empty domain labels
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[\d\s\-()]+$").unwrap();
}

/// Outcome of [`validate_password`]: every failing rule is listed, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks length, upper-case, lower-case and digit rules without short-circuiting.
pub fn validate_password(password: &str) -> PasswordValidation {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }
    if !password.chars().any(char::is_uppercase) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(char::is_lowercase) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit".to_string());
    }

    PasswordValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

pub fn validate_phone(phone: &str) -> bool {
    phone.chars().count() >= MIN_PHONE_LENGTH && PHONE_REGEX.is_match(phone)
}

/// `validator` adapter for [`validate_email`].
pub fn email_shape(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        let mut error = ValidationError::new("email");
        error.message = Some("Invalid email format".into());
        Err(error)
    }
}
