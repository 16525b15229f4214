use axum::http::StatusCode;
use board_test_utils::prelude::*;

use crate::{
    util::{body_string, form_request, get_request, send, session_cookie},
    TestSetupExt,
};

/// Expect files from the public directory to be served without a session
#[tokio::test]
async fn serves_public_files() -> Result<(), TestError> {
    let test = test_setup_with_board_tables!()?;
    tokio::fs::create_dir_all(test.state.upload_dir.join("js")).await?;
    tokio::fs::write(test.state.upload_dir.join("js/app.js"), "console.log(1);").await?;
    let app = test.app();

    let response = send(&app, get_request("/js/app.js", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_none());
    assert_eq!(body_string(response).await, "console.log(1);");

    Ok(())
}

/// Expect POST requests to a public file path to reach routing instead
#[tokio::test]
async fn passes_other_methods_through() -> Result<(), TestError> {
    let test = test_setup_with_board_tables!()?;
    tokio::fs::write(test.state.upload_dir.join("robots.txt"), "User-agent: *").await?;
    let app = test.app();

    let response = send(&app, form_request("/robots.txt", "a=b", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
