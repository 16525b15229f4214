pub use sea_orm_migration::prelude::*;

mod m20251017_000001_board_user;
mod m20251017_000002_board_post;
mod m20251017_000003_board_session;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_board_user::Migration),
            Box::new(m20251017_000002_board_post::Migration),
            Box::new(m20251017_000003_board_session::Migration),
        ]
    }
}
