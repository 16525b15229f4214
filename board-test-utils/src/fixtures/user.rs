use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestSetup,
}

/// Hashes a password with minimal Argon2 cost so fixtures stay fast.
///
/// Verification reads the parameters from the PHC string, so the application's default
/// verifier accepts these hashes.
pub fn hash_password(password: &str) -> Result<String, TestError> {
    let params = Params::new(Params::MIN_M_COST, 1, 1, None)
        .map_err(|e| TestError::PasswordHash(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| TestError::PasswordHash(e.to_string()))
}

impl<'a> UserFixtures<'a> {
    /// Inserts a user whose nickname equals the username
    pub async fn insert_user(&self, username: &str, password: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::BoardUser::insert(entity::board_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                nickname: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(hash_password(password)?),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Removes a user directly, bypassing the application's services
    pub async fn delete_user(&self, user_id: i32) -> Result<(), TestError> {
        entity::prelude::BoardUser::delete_by_id(user_id)
            .exec(&self.setup.state.db)
            .await?;

        Ok(())
    }
}
