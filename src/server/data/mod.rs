//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table. The session store adapter lives here as well
//! since it persists sessions in the same database as the domain data.

pub mod post;
pub mod session;
pub mod user;
