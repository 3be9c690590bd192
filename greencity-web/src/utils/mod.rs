pub mod response;

pub use response::{created, ok, JsonBody, JSON_CONTENT_TYPE};
