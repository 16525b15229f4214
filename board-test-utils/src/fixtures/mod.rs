//! Database fixtures inserted during test execution.
//!
//! - `user` - board users with hashed passwords
//! - `post` - posts authored by existing users

pub mod post;
pub mod user;
