//! Assembly of the request pipeline.

use axum::{
    extract::DefaultBodyLimit,
    http::{header::HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    Router,
};
use time::Duration;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tower_sessions::{cookie::Key, cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};

use crate::server::{
    controller,
    error::{config::ConfigError, Error},
    middleware::{
        auth::attach_user, error::render_errors, locals::project_user,
        static_assets::serve_static,
    },
    model::app::AppState,
    router,
};

/// Name of the session cookie
pub static SESSION_COOKIE_NAME: &str = "board.sid";

/// Largest accepted request body, uploads included
pub const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Builds the full application: routes, fallback and every pipeline stage.
///
/// Stages run in this order for a request, outermost first: trace, CORS (when configured),
/// error page rendering, static assets, session, current user, template locals.
///
/// # Returns
/// - `Ok(Router)` - Application ready to be served
/// - `Err(Error::ConfigError)` - The cookie secret cannot be used as a signing key
pub fn build_app<S>(state: AppState, session_store: S) -> Result<Router, Error>
where
    S: SessionStore + Clone,
{
    let config = state.config.clone();

    let key = Key::try_from(config.cookie_secret.as_bytes()).map_err(|e| {
        ConfigError::InvalidEnvValue {
            var: "COOKIE_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    let session = SessionManagerLayer::new(session_store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(config.mode.is_production())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key);

    let assets = ServeDir::new(&config.public_dir);

    let app = router::routes()
        .fallback(controller::fallback::not_found)
        .layer(from_fn(project_user))
        .layer(from_fn_with_state(state.clone(), attach_user))
        .layer(session)
        .layer(from_fn_with_state(assets, serve_static))
        .layer(from_fn_with_state(state.clone(), render_errors))
        .layer(DefaultBodyLimit::max(BODY_LIMIT));

    let app = match &config.cors_origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvValue {
                var: "CORS_ORIGIN".to_string(),
                reason: e.to_string(),
            })?;

            app.layer(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_credentials(true)
                    .allow_methods([Method::GET, Method::POST]),
            )
        }
        None => app,
    };

    Ok(app.layer(TraceLayer::new_for_http()).with_state(state))
}
