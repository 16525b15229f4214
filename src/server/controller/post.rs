use axum::{
    extract::{multipart::MultipartRejection, rejection::PathRejection, Multipart, Path, State},
    http::{Method, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        post::{WritePostForm, WritePostResultDto},
    },
    server::{
        controller::util::multipart::read_write_form,
        error::Error,
        middleware::{auth::Auth, locals::Locals},
        model::app::AppState,
        service::post::PostService,
    },
};

pub static POST_TAG: &str = "post";

/// Number of posts shown on the post list
const LIST_POSTS: u64 = 50;

/// List of recent posts
#[utoipa::path(
    get,
    path = "/post",
    tag = POST_TAG,
    responses(
        (status = 200, description = "Rendered post list", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Locals(mut context): Locals,
) -> Result<Html<String>, Error> {
    let posts = PostService::new(&state.db, state.blob_store.as_ref())
        .list_recent(LIST_POSTS)
        .await?;

    context.insert("posts", &posts);

    state.views.render("post/list.html", &context)
}

/// Post submission page, anonymous users are sent to the login page
#[utoipa::path(
    get,
    path = "/post/write",
    tag = POST_TAG,
    responses(
        (status = 200, description = "Rendered submission page", content_type = "text/html", body = String),
        (status = 303, description = "Not logged in, redirect to /user/login")
    ),
)]
pub async fn write_page(
    State(state): State<AppState>,
    auth: Auth,
    Locals(context): Locals,
) -> Result<Response, Error> {
    if !auth.is_authenticated() {
        return Ok(Redirect::to("/user/login").into_response());
    }

    Ok(state.views.render("post/write.html", &context)?.into_response())
}

/// Submit a post with an optional image
///
/// Always answers with a [`WritePostResultDto`]. Not being logged in, an empty title or a
/// non-image attachment is a 200 with `flag: false`; other failures keep their status and
/// carry the error message. Nothing is stored unless `flag` is true.
#[utoipa::path(
    post,
    path = "/post/write",
    tag = POST_TAG,
    request_body(content = WritePostForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Submission result", body = WritePostResultDto),
        (status = 400, description = "Malformed multipart body", body = WritePostResultDto),
        (status = 500, description = "Internal server error", body = WritePostResultDto)
    ),
)]
pub async fn write(
    State(state): State<AppState>,
    auth: Auth,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Some(user) = auth.user() else {
        return Json(WritePostResultDto::failure("Login required")).into_response();
    };

    match submit(&state, user.id, multipart).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            err.log();

            (err.status(), Json(WritePostResultDto::failure(err.to_string()))).into_response()
        }
    }
}

async fn submit(
    state: &AppState,
    author_id: i32,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<WritePostResultDto, Error> {
    let form = read_write_form(multipart).await?;

    PostService::new(&state.db, state.blob_store.as_ref())
        .write(author_id, form)
        .await
}

/// A single post
#[utoipa::path(
    get,
    path = "/post/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "ID of the post")),
    responses(
        (status = 200, description = "Rendered post", content_type = "text/html", body = String),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn detail(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    post_id: Result<Path<i32>, PathRejection>,
    Locals(mut context): Locals,
) -> Result<Html<String>, Error> {
    // A non-numeric ID names no post, same as an unknown route
    let Ok(Path(post_id)) = post_id else {
        return Err(Error::NotFound {
            method,
            path: uri.path().to_string(),
        });
    };

    let post = PostService::new(&state.db, state.blob_store.as_ref())
        .get(post_id)
        .await?;

    context.insert("post", &post);

    state.views.render("post/detail.html", &context)
}
