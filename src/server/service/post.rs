//! Post service.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        post::{PostDto, WritePostForm, WritePostResultDto},
        user::UserDto,
    },
    server::{
        blob::{is_image, object_key, BlobStore},
        data::post::PostRepository,
        error::{post::PostError, Error},
        model::db::{PostModel, UserModel},
    },
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
    blob_store: &'a dyn BlobStore,
}

impl<'a> PostService<'a> {
    /// Creates a new instance of [`PostService`]
    pub fn new(db: &'a DatabaseConnection, blob_store: &'a dyn BlobStore) -> Self {
        Self { db, blob_store }
    }

    /// Stores a post submitted by `author_id`, uploading its image first.
    ///
    /// Validation failures (empty title, an attachment that is not an image) are reported
    /// through the returned DTO rather than as an error so the submitting page can show them.
    /// Nothing is stored when the upload fails.
    pub async fn write(
        &self,
        author_id: i32,
        form: WritePostForm,
    ) -> Result<WritePostResultDto, Error> {
        let title = form.title.trim();
        if title.is_empty() {
            return Ok(WritePostResultDto::failure("Title is required"));
        }

        if let Some(img) = &form.img {
            if !is_image(&img.file_name, &img.content_type) {
                return Ok(WritePostResultDto::failure("Only images can be attached"));
            }
        }

        let img_url = match form.img {
            Some(img) => {
                let key = object_key(&img.file_name, Utc::now().timestamp_millis());
                let url = self
                    .blob_store
                    .put(&key, img.bytes, &img.content_type)
                    .await?;

                Some(url)
            }
            None => None,
        };

        let post_repo = PostRepository::new(self.db);
        let post = post_repo
            .create(author_id, title, &form.content, img_url)
            .await?;

        tracing::info!(post_id = post.id, author_id, "Stored post");

        Ok(WritePostResultDto::success(post.id))
    }

    /// Gets the most recent posts, newest first
    pub async fn list_recent(&self, limit: u64) -> Result<Vec<PostDto>, Error> {
        let post_repo = PostRepository::new(self.db);

        post_repo
            .get_recent(limit)
            .await?
            .into_iter()
            .map(|(post, author)| to_dto(post, author))
            .collect()
    }

    pub async fn get(&self, post_id: i32) -> Result<PostDto, Error> {
        let post_repo = PostRepository::new(self.db);

        match post_repo.get_by_id(post_id).await? {
            Some((post, author)) => to_dto(post, author),
            None => Err(PostError::NotFound(post_id).into()),
        }
    }
}

fn to_dto(post: PostModel, author: Option<UserModel>) -> Result<PostDto, Error> {
    // Would only occur if the foreign key constraint on the author is not enforced
    let author = author.ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to find author ID {} of post ID {}",
            post.author_id, post.id
        ))
    })?;

    Ok(PostDto {
        id: post.id,
        title: post.title,
        content: post.content,
        img_url: post.img_url,
        author: UserDto::from(author),
        created_at: post.created_at,
    })
}
