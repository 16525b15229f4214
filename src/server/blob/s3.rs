use async_trait::async_trait;
use aws_sdk_s3::{error::DisplayErrorContext, primitives::ByteStream, Client};

use crate::server::{blob::BlobStore, error::blob::BlobError};

/// Stores uploads in an S3 compatible bucket.
pub struct S3BlobStore {
    client: Client,
    bucket: String,
    base_url: String,
}

impl S3BlobStore {
    /// Builds the S3 client from the default AWS credential chain.
    ///
    /// `endpoint` points the client at S3 compatible storage (path style addressing is used
    /// then). `public_url` overrides the base URL written into posts, otherwise the virtual
    /// hosted bucket URL (or `{endpoint}/{bucket}`) is used.
    pub async fn connect(
        bucket: String,
        region: Option<String>,
        endpoint: Option<String>,
        public_url: Option<String>,
    ) -> Self {
        use aws_sdk_s3::config::Region;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &endpoint {
            s3_config = s3_config.endpoint_url(endpoint).force_path_style(true);
        }
        let client = Client::from_conf(s3_config.build());

        let base_url = match (public_url, &endpoint) {
            (Some(public_url), _) => public_url,
            (None, Some(endpoint)) => format!("{}/{}", endpoint.trim_end_matches('/'), bucket),
            (None, None) => {
                let region = sdk_config
                    .region()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "us-east-1".to_string());
                format!("https://{}.s3.{}.amazonaws.com", bucket, region)
            }
        };

        Self {
            client,
            bucket,
            base_url,
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String, BlobError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| BlobError::S3(DisplayErrorContext(e).to_string()))?;

        tracing::debug!(bucket = %self.bucket, key = %key, "Uploaded image to S3");

        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), key))
    }
}
