use axum::{
    extract::{Request, State},
    http::header::ACCEPT,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::server::{error::ErrorReport, middleware::locals::Locals, model::app::AppState};

/// Renders error responses as the error page.
///
/// Applies to responses carrying an [`ErrorReport`], unless the client asked for JSON in which
/// case the JSON body is kept. The status is preserved, the error detail is left out in
/// production.
pub async fn render_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let wants_json = request
        .headers()
        .get(ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"));

    let response = next.run(request).await;

    if wants_json {
        return response;
    }

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };

    let mut context = response
        .extensions()
        .get::<Locals>()
        .map(|Locals(context)| context.clone())
        .unwrap_or_default();
    context.insert("status", &report.status.as_u16());
    context.insert("message", &report.message);
    if state.config.mode.is_production() {
        context.insert("detail", "");
    } else {
        context.insert("detail", &report.detail);
    }

    match state.views.render("error.html", &context) {
        Ok(html) => (report.status, html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render error page: {}", err);

            (report.status, report.message).into_response()
        }
    }
}
