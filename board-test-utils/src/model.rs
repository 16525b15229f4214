//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main board crate to keep fixtures and tests consistent.

/// Type alias for board user database model.
pub type UserModel = entity::board_user::Model;

/// Type alias for board post database model.
pub type PostModel = entity::board_post::Model;
