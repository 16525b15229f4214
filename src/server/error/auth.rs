use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("User ID {0:?} stored in session no longer exists")]
    SessionInvalid(i32),
    #[error("Username {0:?} is already taken")]
    UsernameTaken(String),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            // Only reaches a response if a caller forgot to degrade to anonymous
            Self::SessionInvalid(_) => StatusCode::UNAUTHORIZED,
            Self::UsernameTaken(_) => StatusCode::CONFLICT,
            Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
