pub use super::board_post::Entity as BoardPost;
pub use super::board_session::Entity as BoardSession;
pub use super::board_user::Entity as BoardUser;
