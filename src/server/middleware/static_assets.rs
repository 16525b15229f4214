use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Serves `GET` and `HEAD` requests from the public directory.
///
/// A file that exists ends the request here. Anything [`ServeDir`] answers with 404 is handed
/// to the next stage untouched, so routes and the fallback see every request that did not
/// name a public file.
pub async fn serve_static(
    State(assets): State<ServeDir>,
    request: Request,
    next: Next,
) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return next.run(request).await;
    }

    // ServeDir consumes its request, probe with a body-less copy
    let mut probe = Request::new(Body::empty());
    *probe.method_mut() = request.method().clone();
    *probe.uri_mut() = request.uri().clone();
    *probe.headers_mut() = request.headers().clone();

    match assets.oneshot(probe).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => {
            response.map(Body::new).into_response()
        }
        _ => next.run(request).await,
    }
}
