use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered user as exposed to handlers and templates.
///
/// Never carries the password hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub nickname: String,
    pub created_at: NaiveDateTime,
}

/// Credentials submitted to `POST /user/login`
#[derive(Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Registration form submitted to `POST /user/join`
#[derive(Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct JoinDto {
    pub username: String,
    /// Display name, defaults to the username when empty
    #[serde(default)]
    pub nickname: String,
    pub password: String,
}

impl From<entity::board_user::Model> for UserDto {
    fn from(user: entity::board_user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            nickname: user.nickname,
            created_at: user.created_at,
        }
    }
}
