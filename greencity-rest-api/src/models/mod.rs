//! Request and response models specific to the REST layer

pub mod common;
pub mod habits;

pub use common::HealthResponse;
pub use habits::HabitSearchFilters;
