use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlobError {
    #[error("Failed to write image to local storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to upload image to S3: {0}")]
    S3(String),
}
