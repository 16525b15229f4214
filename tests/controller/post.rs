use axum::{
    body::Body,
    http::{
        header::{ACCEPT, CONTENT_TYPE, COOKIE, LOCATION},
        Request, StatusCode,
    },
};
use board::server::data::post::PostRepository;
use board_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    util::{
        body_json, body_string, get_request, login, multipart_request, send, Part,
    },
    TestSetupExt,
};

mod write {
    use super::*;

    /// Expect the submission page for logged in users
    #[tokio::test]
    async fn renders_page_when_logged_in() -> Result<(), TestError> {
        let mut test = test_setup_with_board_tables!()?;
        test.user().insert_user("alice", "password").await?;
        let app = test.app();
        let cookie = login(&app, "alice", "password").await;

        let response = send(&app, get_request("/post/write", Some(&cookie))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("write-form"));
        assert!(html.contains("/js/write.js"));

        Ok(())
    }

    /// Expect anonymous visitors to be sent to the login page
    #[tokio::test]
    async fn redirects_anonymous_to_login() -> Result<(), TestError> {
        let test = test_setup_with_board_tables!()?;
        let app = test.app();

        let response = send(&app, get_request("/post/write", None)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/user/login");

        Ok(())
    }

    /// Expect a stored post without image when the img part is empty
    #[tokio::test]
    async fn stores_post_for_logged_in_user() -> Result<(), TestError> {
        let mut test = test_setup_with_board_tables!()?;
        let user = test.user().insert_user("alice", "password").await?;
        let app = test.app();
        let cookie = login(&app, "alice", "password").await;

        let request = multipart_request(
            "/post/write",
            &[
                Part::Text("title", "Hello"),
                Part::Text("content", "World"),
                Part::File {
                    name: "img",
                    file_name: "",
                    bytes: b"",
                },
            ],
            Some(&cookie),
        );
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result = body_json(response).await;
        assert_eq!(result["flag"], true);
        let post_id = result["id"].as_i64().unwrap() as i32;

        let (post, author) = PostRepository::new(&test.state.db)
            .get_by_id(post_id)
            .await?
            .unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert!(post.img_url.is_none());
        assert_eq!(author.unwrap().id, user.id);

        Ok(())
    }

    /// Expect the uploaded image to be stored and served from the stored URL
    #[tokio::test]
    async fn stores_uploaded_image() -> Result<(), TestError> {
        let mut test = test_setup_with_board_tables!()?;
        test.user().insert_user("alice", "password").await?;
        let app = test.app();
        let cookie = login(&app, "alice", "password").await;

        let request = multipart_request(
            "/post/write",
            &[
                Part::Text("title", "Cat"),
                Part::Text("content", ""),
                Part::File {
                    name: "img",
                    file_name: "cat.png",
                    bytes: b"not really a png",
                },
            ],
            Some(&cookie),
        );
        let response = send(&app, request).await;

        let result = body_json(response).await;
        assert_eq!(result["flag"], true);
        let post_id = result["id"].as_i64().unwrap() as i32;

        let (post, _) = PostRepository::new(&test.state.db)
            .get_by_id(post_id)
            .await?
            .unwrap();
        let img_url = post.img_url.unwrap();
        assert!(img_url.starts_with("/uploads/original/"));
        assert!(img_url.ends_with("_cat.png"));

        let response = send(&app, get_request(&img_url, None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "not really a png");

        Ok(())
    }

    /// Expect a refused HTML attachment to be neither stored nor served
    #[tokio::test]
    async fn refuses_html_attachment() -> Result<(), TestError> {
        let mut test = test_setup_with_board_tables!()?;
        test.user().insert_user("alice", "password").await?;
        let app = test.app();
        let cookie = login(&app, "alice", "password").await;

        let request = multipart_request(
            "/post/write",
            &[
                Part::Text("title", "Evil"),
                Part::Text("content", ""),
                Part::File {
                    name: "img",
                    file_name: "evil.html",
                    bytes: b"<script>alert(1)</script>",
                },
            ],
            Some(&cookie),
        );
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result = body_json(response).await;
        assert_eq!(result["flag"], false);
        assert_eq!(result["message"], "Only images can be attached");

        let count = entity::prelude::BoardPost::find()
            .count(&test.state.db)
            .await?;
        assert_eq!(count, 0);
        assert!(!test.state.upload_dir.join("uploads").exists());

        Ok(())
    }

    /// Expect a malformed body to still answer with `flag` and `message`
    #[tokio::test]
    async fn reports_malformed_body_as_result() -> Result<(), TestError> {
        let mut test = test_setup_with_board_tables!()?;
        test.user().insert_user("alice", "password").await?;
        let app = test.app();
        let cookie = login(&app, "alice", "password").await;

        let request = Request::post("/post/write")
            .header(CONTENT_TYPE, "multipart/form-data")
            .header(ACCEPT, "application/json")
            .header(COOKIE, cookie)
            .body(Body::from("garbage"))
            .unwrap();
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let result = body_json(response).await;
        assert_eq!(result["flag"], false);
        assert!(result["message"]
            .as_str()
            .unwrap()
            .starts_with("Malformed request body"));

        Ok(())
    }

    /// Expect `Login required` and nothing stored for anonymous submissions
    #[tokio::test]
    async fn refuses_anonymous_submission() -> Result<(), TestError> {
        let test = test_setup_with_board_tables!()?;
        let app = test.app();

        let request = multipart_request(
            "/post/write",
            &[Part::Text("title", "Hello"), Part::Text("content", "World")],
            None,
        );
        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result = body_json(response).await;
        assert_eq!(result["flag"], false);
        assert_eq!(result["message"], "Login required");

        let count = entity::prelude::BoardPost::find()
            .count(&test.state.db)
            .await?;
        assert_eq!(count, 0);

        Ok(())
    }

    /// Expect `Title is required` and nothing stored for an empty title
    #[tokio::test]
    async fn refuses_empty_title() -> Result<(), TestError> {
        let mut test = test_setup_with_board_tables!()?;
        test.user().insert_user("alice", "password").await?;
        let app = test.app();
        let cookie = login(&app, "alice", "password").await;

        let request = multipart_request(
            "/post/write",
            &[Part::Text("title", ""), Part::Text("content", "World")],
            Some(&cookie),
        );
        let response = send(&app, request).await;

        let result = body_json(response).await;
        assert_eq!(result["flag"], false);
        assert_eq!(result["message"], "Title is required");

        let count = entity::prelude::BoardPost::find()
            .count(&test.state.db)
            .await?;
        assert_eq!(count, 0);

        Ok(())
    }
}

mod detail {
    use super::*;

    /// Expect the rendered post
    #[tokio::test]
    async fn renders_existing_post() -> Result<(), TestError> {
        let mut test = test_setup_with_board_tables!()?;
        let author = test.user().insert_user("alice", "password").await?;
        let post = test.post().insert_post(author.id, "Detailed").await?;
        let app = test.app();

        let response = send(&app, get_request(&format!("/post/{}", post.id), None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Detailed"));
        assert!(html.contains("Content of Detailed"));

        Ok(())
    }

    /// Expect line breaks as `<br>` and the rest of the content escaped
    #[tokio::test]
    async fn renders_multi_line_content() -> Result<(), TestError> {
        let mut test = test_setup_with_board_tables!()?;
        let author = test.user().insert_user("alice", "password").await?;
        let post = PostRepository::new(&test.state.db)
            .create(author.id, "Lines", "line1\nline2 <b>bold</b>", None)
            .await?;
        let app = test.app();

        let response = send(&app, get_request(&format!("/post/{}", post.id), None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("line1<br>line2 &lt;b&gt;bold&lt;&#x2F;b&gt;"));
        assert!(!html.contains("&lt;br&gt;"));

        Ok(())
    }

    /// Expect 404 for unknown and non-numeric IDs
    #[tokio::test]
    async fn returns_not_found_for_unknown_post() -> Result<(), TestError> {
        let test = test_setup_with_board_tables!()?;
        let app = test.app();

        let response = send(&app, get_request("/post/999", None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, get_request("/post/abc", None)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod list {
    use super::*;

    /// Expect every post title on the list page
    #[tokio::test]
    async fn lists_posts() -> Result<(), TestError> {
        let mut test = test_setup_with_board_tables!()?;
        let author = test.user().insert_user("alice", "password").await?;
        test.post().insert_post(author.id, "First").await?;
        test.post().insert_post(author.id, "Second").await?;
        let app = test.app();

        let response = send(&app, get_request("/post", None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("First"));
        assert!(html.contains("Second"));

        Ok(())
    }
}
