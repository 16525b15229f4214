//! Helpers for driving the assembled application with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
        Request, Response, StatusCode,
    },
    Router,
};
use board::server::{
    app::build_app,
    blob::local::LocalBlobStore,
    config::{Config, RunMode, UploadConfig},
    model::app::AppState,
    service::auth::strategy::LocalStrategy,
    view::Views,
};
use board_test_utils::{
    constant::{TEST_COOKIE_SECRET, TEST_UPLOAD_URL_PREFIX},
    TestSetup,
};
use tower::ServiceExt;
use tower_sessions::MemoryStore;

pub static TEST_BOUNDARY: &str = "board-test-boundary";

/// Builds application state and routers on top of a [`TestSetup`].
///
/// The setup's temporary directory doubles as the public directory, uploads land in its
/// `uploads` subdirectory.
pub trait TestSetupExt {
    fn app_state(&self, mode: RunMode) -> AppState;
    fn app(&self) -> Router;
    fn app_in_mode(&self, mode: RunMode) -> Router;
}

impl TestSetupExt for TestSetup {
    fn app_state(&self, mode: RunMode) -> AppState {
        let public_dir = self.state.upload_dir.clone();
        let upload_dir = public_dir.join("uploads");

        let config = Config {
            port: 0,
            cookie_secret: TEST_COOKIE_SECRET.to_string(),
            database_url: "sqlite::memory:".to_string(),
            mode,
            public_dir,
            upload: UploadConfig::Local {
                dir: upload_dir.clone(),
                url_prefix: TEST_UPLOAD_URL_PREFIX.to_string(),
            },
            cors_origin: None,
        };

        AppState {
            db: self.state.db.clone(),
            config: Arc::new(config),
            views: Arc::new(Views::new().unwrap()),
            blob_store: Arc::new(LocalBlobStore::new(upload_dir, TEST_UPLOAD_URL_PREFIX)),
            strategy: Arc::new(LocalStrategy::new(self.state.db.clone())),
        }
    }

    fn app(&self) -> Router {
        self.app_in_mode(RunMode::Development)
    }

    fn app_in_mode(&self, mode: RunMode) -> Router {
        build_app(self.app_state(mode), MemoryStore::default()).unwrap()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` pair of the session cookie set by `response`
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("board.sid="))
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

pub fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

/// A single part of a multipart body
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_request(uri: &str, parts: &[Part], cookie: Option<&str>) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", TEST_BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", TEST_BOUNDARY).as_bytes());

    let mut builder = Request::post(uri).header(
        CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", TEST_BOUNDARY),
    );
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    builder.body(Body::from(body)).unwrap()
}

/// Logs `username` in through `POST /user/login`, returning the session cookie
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = send(
        app,
        form_request(
            "/user/login",
            &format!("username={}&password={}", username, password),
            None,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    session_cookie(&response).unwrap()
}
