use axum::http::StatusCode;
use board_test_utils::prelude::*;

use crate::{
    util::{body_string, get_request, send},
    TestSetupExt,
};

/// Expect the front page to list existing posts
#[tokio::test]
async fn lists_latest_posts() -> Result<(), TestError> {
    let mut test = test_setup_with_board_tables!()?;
    let author = test.user().insert_user("alice", "password").await?;
    test.post().insert_post(author.id, "Front page post").await?;
    let app = test.app();

    let response = send(&app, get_request("/", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Front page post"));
    assert!(html.contains("/user/login"));

    Ok(())
}

/// Expect the OpenAPI document to describe the board routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_board_tables!()?;
    let app = test.app();

    let response = send(&app, get_request("/api/docs/openapi.json", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let document = body_string(response).await;
    assert!(document.contains("/post/write"));
    assert!(document.contains("/user/login"));

    Ok(())
}
