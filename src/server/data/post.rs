use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    /// Creates a new instance of [`PostRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new post authored by `author_id`
    pub async fn create(
        &self,
        author_id: i32,
        title: &str,
        content: &str,
        img_url: Option<String>,
    ) -> Result<entity::board_post::Model, DbErr> {
        let post = entity::board_post::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(title.to_string()),
            content: ActiveValue::Set(content.to_string()),
            img_url: ActiveValue::Set(img_url),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        post.insert(self.db).await
    }

    /// Gets a post together with its author
    pub async fn get_by_id(
        &self,
        post_id: i32,
    ) -> Result<
        Option<(
            entity::board_post::Model,
            Option<entity::board_user::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::BoardPost::find_by_id(post_id)
            .find_also_related(entity::board_user::Entity)
            .one(self.db)
            .await
    }

    /// Gets the most recent posts with their authors, newest first
    pub async fn get_recent(
        &self,
        limit: u64,
    ) -> Result<
        Vec<(
            entity::board_post::Model,
            Option<entity::board_user::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::BoardPost::find()
            .order_by_desc(entity::board_post::Column::CreatedAt)
            .order_by_desc(entity::board_post::Column::Id)
            .limit(limit)
            .find_also_related(entity::board_user::Entity)
            .all(self.db)
            .await
    }
}
