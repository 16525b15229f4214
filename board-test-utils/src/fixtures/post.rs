use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::PostModel, TestSetup};

impl TestSetup {
    pub fn post<'a>(&'a mut self) -> PostFixtures<'a> {
        PostFixtures { setup: self }
    }
}

pub struct PostFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> PostFixtures<'a> {
    /// Inserts a post without image, its content derived from the title
    pub async fn insert_post(&self, author_id: i32, title: &str) -> Result<PostModel, TestError> {
        Ok(
            entity::prelude::BoardPost::insert(entity::board_post::ActiveModel {
                author_id: ActiveValue::Set(author_id),
                title: ActiveValue::Set(title.to_string()),
                content: ActiveValue::Set(format!("Content of {}", title)),
                img_url: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
