//! Error types for the board server.
//!
//! Every failure a handler or pipeline stage can hit is funnelled into [`Error`]. Its
//! `IntoResponse` implementation picks the HTTP status, logs the failure and attaches an
//! [`ErrorReport`] to the response so the error terminator stage can render the error page.

pub mod auth;
pub mod blob;
pub mod config;
pub mod post;

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, blob::BlobError, config::ConfigError, post::PostError},
};

/// Main error type for the board server.
///
/// Aggregates the domain error types and the errors of the libraries the server talks to.
/// `#[from]` conversions let handlers propagate with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (credentials, session identity, registration).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Post lookup error.
    #[error(transparent)]
    PostError(#[from] PostError),
    /// Image upload error.
    #[error(transparent)]
    BlobError(#[from] BlobError),
    /// Request payload could not be parsed.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    /// No route matched the request.
    #[error("{method} {path} route not found")]
    NotFound { method: Method, path: String },
    /// Bug in the server, should never occur in normal operation.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Template rendering error.
    #[error(transparent)]
    TemplateError(#[from] tera::Error),
    /// I/O error (binding the listener, reading files).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// HTTP status carried by this error, 500 unless the error says otherwise.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AuthError(err) => err.status(),
            Self::PostError(err) => err.status(),
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Logs the error, server errors at error level and client errors at debug level.
    pub fn log(&self) {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = %status, "{}", self);
        } else {
            tracing::debug!(status = %status, "{}", self);
        }
    }
}

/// Description of a failed request, attached to the response extensions.
///
/// The error terminator stage uses it to render the error page; `detail` is only shown
/// outside of production.
#[derive(Clone, Debug)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub message: String,
    pub detail: String,
}

/// Converts application errors into HTTP responses.
///
/// The body is a JSON [`ErrorDto`] holding the error message, which is what API clients
/// receive. The error is logged through [`Error::log`].
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        self.log();

        let report = ErrorReport {
            status,
            message: message.clone(),
            detail: format!("{:?}", self),
        };

        let mut response = (status, Json(ErrorDto { error: message })).into_response();
        response.extensions_mut().insert(report);

        response
    }
}
