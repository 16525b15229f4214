use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardUser::Id))
                    .col(string_uniq(BoardUser::Username))
                    .col(string(BoardUser::Nickname))
                    .col(string(BoardUser::PasswordHash))
                    .col(timestamp(BoardUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BoardUser {
    Table,
    Id,
    Username,
    Nickname,
    PasswordHash,
    CreatedAt,
}
