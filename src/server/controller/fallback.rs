use axum::http::{Method, Uri};

use crate::server::error::Error;

/// Answers every request no route matched with [`Error::NotFound`]
pub async fn not_found(method: Method, uri: Uri) -> Error {
    let path = uri
        .path_and_query()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    Error::NotFound { method, path }
}
