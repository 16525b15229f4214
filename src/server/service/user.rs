//! User account service.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{JoinDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::auth::password::hash_password,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// The nickname falls back to the username when empty.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::MalformedBody)` - Empty username or password
    /// - `Err(Error::AuthError(AuthError::UsernameTaken))` - Username already registered
    pub async fn register(&self, join: JoinDto) -> Result<UserDto, Error> {
        let username = join.username.trim();
        let nickname = match join.nickname.trim() {
            "" => username,
            nickname => nickname,
        };

        if username.is_empty() || join.password.is_empty() {
            return Err(Error::MalformedBody(
                "Username and password are required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()).into());
        }

        let password_hash = hash_password(&join.password).await?;

        // The unique index still catches a registration racing this one
        let user = match user_repo.create(username, nickname, &password_hash).await {
            Ok(user) => user,
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    return Err(AuthError::UsernameTaken(username.to_string()).into())
                }
                _ => return Err(err.into()),
            },
        };

        tracing::info!(user_id = user.id, "Registered user {:?}", user.username);

        Ok(UserDto::from(user))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_by_id(user_id).await?.map(UserDto::from))
    }

    /// Resolves the user ID stored in a session back into a user.
    ///
    /// A user that no longer exists is [`AuthError::SessionInvalid`].
    pub async fn deserialize(&self, user_id: i32) -> Result<UserDto, Error> {
        self.get_user(user_id)
            .await?
            .ok_or_else(|| AuthError::SessionInvalid(user_id).into())
    }
}
