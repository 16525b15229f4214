//! Database model type aliases.
//!
//! Shorter names for the SeaORM models generated in the `entity` crate.

/// Registered user (`board_user` table)
pub type UserModel = entity::board_user::Model;

/// Post written by a user (`board_post` table)
pub type PostModel = entity::board_post::Model;
