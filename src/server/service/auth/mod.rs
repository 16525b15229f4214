//! Authentication services.
//!
//! Credentials are checked by an [`strategy::AuthStrategy`]; the only built-in strategy is
//! [`strategy::LocalStrategy`], which compares a username and password against the stored
//! Argon2 hash.

pub mod password;
pub mod strategy;
