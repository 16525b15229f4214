//! SeaORM entities for the board database.

pub mod prelude;

pub mod board_post;
pub mod board_session;
pub mod board_user;
