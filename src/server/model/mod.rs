//! Server application models and type definitions.
//!
//! Application state shared by handlers, database model aliases and typed session values.

pub mod app;
pub mod db;
pub mod session;
