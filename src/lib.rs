//! Discussion board backend.
//!
//! [`model`] holds the DTOs exchanged with clients, [`server`] holds everything that runs
//! behind the HTTP listener.

pub mod model;
pub mod server;
