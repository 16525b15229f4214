use axum::{extract::State, response::Html};

use crate::{
    model::api::ErrorDto,
    server::{
        error::Error,
        middleware::locals::Locals,
        model::app::AppState,
        service::post::PostService,
    },
};

pub static INDEX_TAG: &str = "index";

/// Number of posts shown on the front page
const FRONT_PAGE_POSTS: u64 = 10;

/// Front page listing the latest posts
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Rendered front page", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn index(
    State(state): State<AppState>,
    Locals(mut context): Locals,
) -> Result<Html<String>, Error> {
    let posts = PostService::new(&state.db, state.blob_store.as_ref())
        .list_recent(FRONT_PAGE_POSTS)
        .await?;

    context.insert("posts", &posts);

    state.views.render("index.html", &context)
}
