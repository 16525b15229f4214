use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostError {
    #[error("Post {0} not found")]
    NotFound(i32),
}

impl PostError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}
