use sea_orm_migration::{prelude::*, schema::*};

static IDX_BOARD_SESSION_EXPIRES_AT: &str = "idx-board_session-expires_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardSession::Table)
                    .if_not_exists()
                    .col(text(BoardSession::Id).primary_key())
                    .col(text(BoardSession::Data))
                    .col(big_integer(BoardSession::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        // Expired session cleanup scans by expiry
        manager
            .create_index(
                Index::create()
                    .name(IDX_BOARD_SESSION_EXPIRES_AT)
                    .table(BoardSession::Table)
                    .col(BoardSession::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardSession::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BoardSession {
    Table,
    Id,
    Data,
    ExpiresAt,
}
