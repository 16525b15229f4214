//! Data transfer objects shared between the HTTP layer and its clients.

pub mod api;
pub mod post;
pub mod user;
