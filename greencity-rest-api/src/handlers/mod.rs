//! REST API handlers

pub mod facts;
pub mod habits;
pub mod health;

pub use facts::*;
pub use habits::*;
pub use health::*;
