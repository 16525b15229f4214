//! HTTP handlers.
//!
//! Pages render through [`crate::server::view::Views`] with the request's
//! [`crate::server::middleware::locals::Locals`]; the post submission and `/user/me` answer
//! with JSON. Every handler is registered with utoipa in [`crate::server::router`].

pub mod fallback;
pub mod index;
pub mod post;
pub mod user;
pub mod util;
