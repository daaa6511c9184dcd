use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http_error::AppError;

/// Mock account. Only ever held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both fields must be present and non-empty.
    pub fn validate(self) -> Result<InsertUser, AppError> {
        match (self.username, self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(InsertUser { username, password })
            }
            _ => Err(AppError::invalid_credentials_format()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginUser {
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: LoginUser,
}
