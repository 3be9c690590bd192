//! # GreenCity REST API
//!
//! Handlers, router assembly and request models for the GreenCity
//! habit gateway. Handlers depend only on the service traits from
//! `greencity-interfaces`, so the same router runs against the
//! in-memory services of the server binary and against mocks in tests.

pub mod app;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod validation;

pub use app::{create_app, AppConfig};
pub use context::{AppContext, FactsContext, HabitsContext};
pub use errors::{RestError, RestResult};
