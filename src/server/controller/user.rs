use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{JoinDto, LoginDto, UserDto},
    },
    server::{
        controller::util::body::Body,
        error::Error,
        middleware::{
            auth::{Auth, CurrentUser},
            locals::Locals,
        },
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Registration page
#[utoipa::path(
    get,
    path = "/user/join",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Rendered registration page", content_type = "text/html", body = String)
    ),
)]
pub async fn join_page(
    State(state): State<AppState>,
    Locals(context): Locals,
) -> Result<Html<String>, Error> {
    state.views.render("user/join.html", &context)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/user/join",
    tag = USER_TAG,
    request_body(content = JoinDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Registered, redirect to /user/login"),
        (status = 400, description = "Missing username or password", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join(
    State(state): State<AppState>,
    Body(join): Body<JoinDto>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).register(join).await?;

    Ok(Redirect::to("/user/login"))
}

/// Login page
#[utoipa::path(
    get,
    path = "/user/login",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Rendered login page", content_type = "text/html", body = String)
    ),
)]
pub async fn login_page(
    State(state): State<AppState>,
    Locals(context): Locals,
) -> Result<Html<String>, Error> {
    state.views.render("user/login.html", &context)
}

/// Log in with username and password
#[utoipa::path(
    post,
    path = "/user/login",
    tag = USER_TAG,
    request_body(content = LoginDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to /"),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    mut auth: Auth,
    Body(credentials): Body<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    auth.authenticate(&credentials).await?;

    Ok(Redirect::to("/"))
}

/// Log out the current user
#[utoipa::path(
    get,
    path = "/user/logout",
    tag = USER_TAG,
    responses(
        (status = 303, description = "Logged out, redirect to /"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(mut auth: Auth) -> Result<impl IntoResponse, Error> {
    auth.logout().await?;

    Ok(Redirect::to("/"))
}

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/user/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The logged in user", body = UserDto),
        (status = 404, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn me(CurrentUser(user): CurrentUser) -> impl IntoResponse {
    match user {
        Some(user) => (StatusCode::OK, Json(user)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response(),
    }
}
