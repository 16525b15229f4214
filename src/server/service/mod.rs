//! Service layer.
//!
//! Services hold the business rules and coordinate the repositories in [`crate::server::data`]
//! with the blob store and password hashing. Controllers only translate between HTTP and
//! these services.

pub mod auth;
pub mod post;
pub mod user;
