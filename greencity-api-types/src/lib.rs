//! Transfer shapes for the GreenCity habit gateway
//!
//! This crate provides the DTO definitions shared by the web layer,
//! the service interfaces and the server wiring, so that every layer
//! speaks the same serialized vocabulary.

pub mod domain;
pub mod enums;
pub mod errors;
pub mod pagination;

// Re-export main types for convenience
pub use domain::{
    AddCustomHabitDtoRequest, AddCustomHabitDtoResponse, CustomShoppingListItemResponseDto, HabitDto,
    HabitFactDto, HabitFactPostDto, HabitFactTranslationDto, HabitIdDto, HabitTranslationDto, LanguageDto,
    LanguageTranslationDto, ShoppingListItemDto, UserProfilePictureDto, UserVo,
};
pub use enums::FactOfDayStatus;
pub use errors::ApiError;
pub use pagination::{PageRequest, PageableDto};
