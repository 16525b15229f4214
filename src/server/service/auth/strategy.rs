use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::auth::password::verify_password,
    },
};

/// A way of turning submitted credentials into a user.
///
/// The session layer only ever stores the returned user's ID, so a strategy never has to
/// know about sessions.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Returns the user matching `credentials` or [`AuthError::InvalidCredentials`]
    async fn verify(&self, credentials: &LoginDto) -> Result<UserDto, Error>;
}

/// Username and password checked against the user table.
pub struct LocalStrategy {
    db: DatabaseConnection,
}

impl LocalStrategy {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthStrategy for LocalStrategy {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn verify(&self, credentials: &LoginDto) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(&self.db);

        // Unknown user and wrong password are indistinguishable to the caller
        let Some(user) = user_repo.find_by_username(credentials.username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(UserDto::from(user))
    }
}
