//! Blob storage for uploaded images.
//!
//! A [`BlobStore`] takes the bytes of an upload and returns the URL the image can be fetched
//! from. Posts only ever store that URL. [`local::LocalBlobStore`] writes into a directory
//! served as static files, [`s3::S3BlobStore`] uploads to an S3 compatible bucket.

pub mod local;
pub mod s3;

use async_trait::async_trait;

use crate::server::error::blob::BlobError;

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` under `key` and returns the public URL of the stored object.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String, BlobError>;
}

/// Extensions accepted for uploaded images.
///
/// Uploads are served from the board's own origin with a MIME type guessed from the
/// extension, so anything that could render as a document (`html`, `svg`) stays out.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Reduces a client supplied file name to its last path segment and to ASCII
/// alphanumerics, `.`, `-` and `_`, without leading dots.
fn sanitize_file_name(file_name: &str) -> String {
    let base_name = file_name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let sanitized: String = base_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    sanitized.trim_start_matches('.').to_string()
}

/// Whether an upload may be stored as an image.
///
/// Requires an `image/*` content type and, after sanitizing, one of [`IMAGE_EXTENSIONS`].
pub fn is_image(file_name: &str, content_type: &str) -> bool {
    if !content_type.to_ascii_lowercase().starts_with("image/") {
        return false;
    }

    let sanitized = sanitize_file_name(file_name);
    match sanitized.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| extension.eq_ignore_ascii_case(allowed)),
        _ => false,
    }
}

/// Builds the object key for an uploaded image: `original/{millis}_{file name}`.
///
/// The file name is sanitized the same way [`is_image`] sees it. A name with nothing left
/// after that is replaced by a random one.
pub fn object_key(file_name: &str, now_millis: i64) -> String {
    let sanitized = sanitize_file_name(file_name);

    if sanitized.is_empty() {
        format!("original/{}_{}", now_millis, uuid::Uuid::new_v4().simple())
    } else {
        format!("original/{}_{}", now_millis, sanitized)
    }
}
