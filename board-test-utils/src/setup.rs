use std::{path::PathBuf, sync::Arc};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
    /// Directory receiving uploaded images, removed when the setup is dropped
    pub upload_dir: PathBuf,
}

pub struct TestSetup {
    pub state: TestAppState,
    pub session: Session,
    _upload_dir: TempDir,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let upload_dir = tempfile::tempdir()?;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState {
                db,
                upload_dir: upload_dir.path().to_path_buf(),
            },
            session,
            _upload_dir: upload_dir,
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates the user, post and session tables, plus any extra entities provided
#[macro_export]
macro_rules! test_setup_with_board_tables {
    () => {{
        $crate::test_setup_with_tables!(
            entity::prelude::BoardUser,
            entity::prelude::BoardPost,
            entity::prelude::BoardSession,
        )
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::test_setup_with_tables!(
            entity::prelude::BoardUser,
            entity::prelude::BoardPost,
            entity::prelude::BoardSession,
            $($entity,)+
        )
    }};
}
