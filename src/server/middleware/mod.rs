//! Request pipeline stages.
//!
//! Each stage is an `axum::middleware::from_fn` function. [`crate::server::app::build_app`]
//! wires them together with the tower-http and tower-sessions layers in this order, outermost
//! first: trace, CORS, [`error::render_errors`], [`static_assets::serve_static`], session,
//! [`auth::attach_user`], [`locals::project_user`].

pub mod auth;
pub mod error;
pub mod locals;
pub mod static_assets;
