pub mod principal;
pub mod query;

// Re-export commonly used extractors
pub use principal::Principal;
pub use query::{Locale, MultiQuery, PageableParams, PageableQuery};
