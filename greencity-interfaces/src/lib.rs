//! Service contracts for the GreenCity gateway
//!
//! The gateway never touches persistence directly. Every domain
//! concern sits behind one of these async traits, which the server
//! wires with real implementations and the tests satisfy with mocks
//! (enable the `mocks` feature).

pub mod error;
pub mod facts;
pub mod habits;
pub mod users;

pub use error::{ServiceError, ServiceResult};
pub use facts::{HabitFactService, LanguageService};
pub use habits::{HabitService, TagsService};
pub use users::UserService;

#[cfg(feature = "mocks")]
pub use facts::{MockHabitFactService, MockLanguageService};
#[cfg(feature = "mocks")]
pub use habits::{MockHabitService, MockTagsService};
#[cfg(feature = "mocks")]
pub use users::MockUserService;
