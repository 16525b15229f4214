use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    blob::BlobStore, config::Config, service::auth::strategy::AuthStrategy, view::Views,
};

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub views: Arc<Views>,
    pub blob_store: Arc<dyn BlobStore>,
    pub strategy: Arc<dyn AuthStrategy>,
}
