//! # GreenCity Server
//!
//! Binds the REST API to in-memory service implementations, loads
//! configuration and runs the HTTP server.

pub mod config;
pub mod services;
pub mod startup;

pub use config::{HttpServerConfig, LoggingConfig, ServerConfig};
pub use services::InMemoryGreenCity;
pub use startup::Server;
