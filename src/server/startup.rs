use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    blob::{local::LocalBlobStore, s3::S3BlobStore, BlobStore},
    config::{Config, UploadConfig},
    data::session::DbSessionStore,
    error::Error,
    model::app::AppState,
    service::auth::strategy::LocalStrategy,
    view::Views,
};

/// How often expired sessions are deleted
pub const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the blob store uploads are written to
pub async fn build_blob_store(config: &Config) -> Arc<dyn BlobStore> {
    match &config.upload {
        UploadConfig::Local { dir, url_prefix } => {
            tracing::info!(dir = %dir.display(), "Storing uploads locally");

            Arc::new(LocalBlobStore::new(dir.clone(), url_prefix.clone()))
        }
        UploadConfig::S3 {
            bucket,
            region,
            endpoint,
            public_url,
        } => {
            tracing::info!(bucket = %bucket, "Storing uploads in S3");

            Arc::new(
                S3BlobStore::connect(
                    bucket.clone(),
                    region.clone(),
                    endpoint.clone(),
                    public_url.clone(),
                )
                .await,
            )
        }
    }
}

/// Build the state shared by all requests
pub async fn build_state(config: Config, db: DatabaseConnection) -> Result<AppState, Error> {
    let blob_store = build_blob_store(&config).await;

    Ok(AppState {
        strategy: Arc::new(LocalStrategy::new(db.clone())),
        db,
        config: Arc::new(config),
        views: Arc::new(Views::new()?),
        blob_store,
    })
}

/// Delete expired sessions every [`SESSION_CLEANUP_INTERVAL`] in the background
pub fn spawn_session_cleanup(store: DbSessionStore) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);

        loop {
            interval.tick().await;

            match store.delete_expired().await {
                Ok(0) => {}
                Ok(deleted) => tracing::debug!("Deleted {} expired sessions", deleted),
                Err(e) => tracing::warn!("Failed to delete expired sessions: {}", e),
            }
        }
    })
}
