use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub img_url: Option<String>,
    pub author: UserDto,
    pub created_at: NaiveDateTime,
}

/// Image part of a post submission
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart form submitted to `POST /post/write`
#[derive(Clone, Debug, Default, utoipa::ToSchema)]
pub struct WritePostForm {
    pub title: String,
    pub content: String,
    /// Optional image attachment
    #[schema(value_type = Option<String>, format = Binary)]
    pub img: Option<ImageUpload>,
}

/// Result of `POST /post/write`.
///
/// `flag` tells the client whether the post was stored, `message` explains a failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WritePostResultDto {
    pub flag: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// ID of the created post
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl WritePostResultDto {
    pub fn success(id: i32) -> Self {
        Self {
            flag: true,
            message: None,
            id: Some(id),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            flag: false,
            message: Some(message.into()),
            id: None,
        }
    }
}
