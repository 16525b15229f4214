use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tera::Context;

use crate::server::{error::ErrorReport, middleware::auth::CurrentUser};

/// Template context shared by every page of a request.
///
/// Holds the logged in user under `user`, absent for anonymous requests.
#[derive(Clone, Debug, Default)]
pub struct Locals(pub Context);

/// Copies the [`CurrentUser`] into the request's [`Locals`].
///
/// Error responses get a copy too, so the error page still shows who is logged in.
pub async fn project_user(mut request: Request, next: Next) -> Response {
    let mut context = Context::new();
    if let Some(CurrentUser(Some(user))) = request.extensions().get::<CurrentUser>() {
        context.insert("user", user);
    }

    let locals = Locals(context);
    request.extensions_mut().insert(locals.clone());

    let mut response = next.run(request).await;
    if response.extensions().get::<ErrorReport>().is_some() {
        response.extensions_mut().insert(locals);
    }

    response
}

impl<S> FromRequestParts<S> for Locals
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Locals>().cloned().unwrap_or_default())
    }
}
