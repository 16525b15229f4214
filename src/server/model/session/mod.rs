//! Typed session values.
//!
//! Each submodule wraps one key of the tower-sessions map with insert/get/remove helpers so
//! handlers never touch raw session keys.

pub mod user;
