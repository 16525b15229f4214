//! Server application core modules.
//!
//! Everything behind the HTTP surface of the board: configuration, the request pipeline,
//! handlers, services, data access and error handling.

pub mod app;
pub mod blob;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod view;
