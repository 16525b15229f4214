use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_board_user::BoardUser;

static IDX_BOARD_POST_AUTHOR_ID: &str = "idx-board_post-author_id";
static FK_BOARD_POST_AUTHOR_ID: &str = "fk-board_post-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardPost::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardPost::Id))
                    .col(integer(BoardPost::AuthorId))
                    .col(string(BoardPost::Title))
                    .col(text(BoardPost::Content))
                    .col(string_null(BoardPost::ImgUrl))
                    .col(timestamp(BoardPost::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOARD_POST_AUTHOR_ID)
                    .table(BoardPost::Table)
                    .col(BoardPost::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOARD_POST_AUTHOR_ID)
                    .from_tbl(BoardPost::Table)
                    .from_col(BoardPost::AuthorId)
                    .to_tbl(BoardUser::Table)
                    .to_col(BoardUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOARD_POST_AUTHOR_ID)
                    .table(BoardPost::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOARD_POST_AUTHOR_ID)
                    .table(BoardPost::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BoardPost::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BoardPost {
    Table,
    Id,
    AuthorId,
    Title,
    Content,
    ImgUrl,
    CreatedAt,
}
