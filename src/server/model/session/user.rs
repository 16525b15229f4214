use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "board:user:id";

/// Identity reference of the logged in user, the only auth state kept in the session.
#[derive(Default, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id);

        Ok(user_id)
    }

    /// Remove user ID from session, returning it if present
    pub async fn remove(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session
            .remove::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id);

        Ok(user_id)
    }
}
