//! Session store backed by the `board_session` table.
//!
//! Implements [`SessionStore`] so [`tower_sessions::SessionManagerLayer`] can load and persist
//! sessions in the same database as the domain data. The session map is stored as JSON and
//! the expiry as a unix timestamp. Expired rows are never returned by [`SessionStore::load`]
//! and are removed in bulk by [`DbSessionStore::delete_expired`].

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store, SessionStore,
};

use entity::board_session::{ActiveModel, Column};

#[derive(Clone, Debug)]
pub struct DbSessionStore {
    db: DatabaseConnection,
}

impl DbSessionStore {
    /// Creates a new instance of [`DbSessionStore`]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes every session whose expiry has passed, returning how many were removed
    pub async fn delete_expired(&self) -> session_store::Result<u64> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let result = entity::prelude::BoardSession::delete_many()
            .filter(Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(result.rows_affected)
    }
}

#[async_trait]
impl SessionStore for DbSessionStore {
    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let data = serde_json::to_string(&record.data)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;

        let session = ActiveModel {
            id: ActiveValue::Set(record.id.to_string()),
            data: ActiveValue::Set(data),
            expires_at: ActiveValue::Set(record.expiry_date.unix_timestamp()),
        };

        entity::prelude::BoardSession::insert(session)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::Data, Column::ExpiresAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let session = entity::prelude::BoardSession::find_by_id(session_id.to_string())
            .filter(Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .map_err(backend_error)?;

        let Some(session) = session else {
            return Ok(None);
        };

        let data: HashMap<String, serde_json::Value> = serde_json::from_str(&session.data)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;
        let expiry_date = OffsetDateTime::from_unix_timestamp(session.expires_at)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;

        Ok(Some(Record {
            id: *session_id,
            data,
            expiry_date,
        }))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        entity::prelude::BoardSession::delete_by_id(session_id.to_string())
            .exec(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(())
    }
}

fn backend_error(err: sea_orm::DbErr) -> session_store::Error {
    session_store::Error::Backend(err.to_string())
}
