use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Back-office role carried in the token claims.
/// Corresponds to the `employee_role` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "employee_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Staff => "staff",
        }
    }
}

/// A platform user as listed by `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An employee record as stored, including the password hash.
///
/// Deliberately not `Serialize`: it leaves the service layer only as an [`AuthUser`].
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The sanitized employee projection returned from login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl From<&Employee> for AuthUser {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            email: employee.email.clone(),
            full_name: employee.full_name.clone(),
            role: employee.role,
        }
    }
}
