//! Session authentication.
//!
//! The session only ever holds the user's ID ([`SessionUserId`]). [`attach_user`] resolves it
//! into a [`CurrentUser`] for every request, and [`Auth`] is the extractor handlers use to
//! log users in and out.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, UserDto},
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::{auth::strategy::AuthStrategy, user::UserService},
    },
};

/// The user the current request belongs to, `None` when anonymous.
#[derive(Clone, Debug, Default)]
pub struct CurrentUser(pub Option<UserDto>);

/// Resolves the session's user ID into a [`CurrentUser`] request extension.
///
/// An ID whose user no longer exists is removed from the session and the request continues
/// as anonymous.
pub async fn attach_user(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let user = match SessionUserId::get(&session).await? {
        None => None,
        Some(user_id) => match UserService::new(&state.db).deserialize(user_id).await {
            Ok(user) => Some(user),
            Err(Error::AuthError(AuthError::SessionInvalid(user_id))) => {
                SessionUserId::remove(&session).await?;

                tracing::debug!(
                    "Removed user ID {} from session, user no longer exists",
                    user_id
                );

                None
            }
            Err(err) => return Err(err),
        },
    };

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            Error::InternalError("CurrentUser extractor used without attach_user".to_string())
        })
    }
}

/// Login state of the current request, bound to its session and the configured strategy.
pub struct Auth {
    session: Session,
    strategy: Arc<dyn AuthStrategy>,
    user: Option<UserDto>,
}

impl Auth {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserDto> {
        self.user.as_ref()
    }

    /// Verifies `credentials` with the strategy and logs the matching user in.
    pub async fn authenticate(&mut self, credentials: &LoginDto) -> Result<UserDto, Error> {
        let user = self.strategy.verify(credentials).await?;

        self.login(&user).await?;

        tracing::info!(
            user_id = user.id,
            strategy = self.strategy.name(),
            "User logged in"
        );

        Ok(user)
    }

    /// Stores `user` as the session's identity under a fresh session ID.
    pub async fn login(&mut self, user: &UserDto) -> Result<(), Error> {
        self.session.cycle_id().await?;
        SessionUserId::insert(&self.session, user.id).await?;

        self.user = Some(user.clone());

        Ok(())
    }

    /// Destroys the session of a logged in user, does nothing for anonymous requests.
    pub async fn logout(&mut self) -> Result<(), Error> {
        if let Some(user) = self.user.take() {
            self.session.flush().await?;

            tracing::info!(user_id = user.id, "User logged out");
        }

        Ok(())
    }
}

impl FromRequestParts<AppState> for Auth {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| Error::InternalError(message.to_string()))?;
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        Ok(Self {
            session,
            strategy: state.strategy.clone(),
            user,
        })
    }
}
