use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::Error;

/// Request body accepted as either JSON or an urlencoded form.
///
/// Any other content type, or a body that does not deserialize into `T`, is
/// [`Error::MalformedBody`].
pub struct Body<T>(pub T);

impl<T, S> FromRequest<S> for Body<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| Error::MalformedBody(rejection.body_text()))?;

            Ok(Body(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| Error::MalformedBody(rejection.body_text()))?;

            Ok(Body(value))
        } else {
            Err(Error::MalformedBody(format!(
                "Unsupported content type {:?}",
                content_type
            )))
        }
    }
}
