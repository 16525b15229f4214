use axum::{
    body::Body,
    http::{header::ACCEPT, header::CONTENT_TYPE, Method, Request, StatusCode},
};
use board::server::config::RunMode;
use board_test_utils::prelude::*;

use crate::{
    util::{body_json, body_string, get_request, send},
    TestSetupExt,
};

/// Expect a JSON 404 naming method and path when JSON is accepted
#[tokio::test]
async fn returns_json_not_found() -> Result<(), TestError> {
    let test = test_setup_with_board_tables!()?;
    let app = test.app();

    let request = Request::delete("/nonexistent?page=2")
        .header(ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "DELETE /nonexistent?page=2 route not found");

    Ok(())
}

/// Expect the error page with the message and detail outside production
#[tokio::test]
async fn renders_error_page_with_detail() -> Result<(), TestError> {
    let test = test_setup_with_board_tables!()?;
    let app = test.app();

    let response = send(&app, get_request("/nonexistent", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = body_string(response).await;
    assert!(html.contains("route not found"));
    assert!(html.contains("<pre class=\"detail\">"));
    assert!(html.contains("NotFound"));

    Ok(())
}

/// Expect the error detail to be hidden in production
#[tokio::test]
async fn hides_detail_in_production() -> Result<(), TestError> {
    let test = test_setup_with_board_tables!()?;
    let app = test.app_in_mode(RunMode::Production);

    let response = send(&app, get_request("/nonexistent", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_string(response).await;
    assert!(html.contains("route not found"));
    assert!(!html.contains("<pre"));

    Ok(())
}

/// Expect handler errors to keep their status through the error page
#[tokio::test]
async fn keeps_status_of_handler_errors() -> Result<(), TestError> {
    let test = test_setup_with_board_tables!()?;
    let app = test.app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/user/login")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("username=ghost&password=password"))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let html = body_string(response).await;
    assert!(html.contains("Invalid username or password"));

    Ok(())
}

/// Expect a 500 with the error page when the database is unusable
#[tokio::test]
async fn renders_internal_errors() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = test.app();

    let response = send(&app, get_request("/", None)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_string(response).await;
    assert!(html.contains("<h1>500</h1>"));

    Ok(())
}
