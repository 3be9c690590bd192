//! DTO definitions for habits, habit facts, tags and users
//!
//! All shapes serialize with camelCase field names to match the wire
//! format the frontend consumes. Request DTOs ignore unknown fields on
//! deserialization.

use serde::{Deserialize, Serialize};

use crate::enums::FactOfDayStatus;

/// A habit as returned by read endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDto {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habit_translation: Option<HabitTranslationDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_custom_habit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopping_list_items: Option<Vec<ShoppingListItemDto>>,
}

impl HabitDto {
    /// Minimal habit with just an identifier, the rest unset
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// Per-language presentation of a habit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitTranslationDto {
    pub description: String,
    pub habit_item: String,
    pub language_code: String,
    pub name: String,
}

/// A shopping list item attached to a habit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItemDto {
    pub id: i64,
    pub text: String,
    pub status: String,
}

/// A custom shopping list item supplied with a custom habit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomShoppingListItemResponseDto {
    pub id: i64,
    pub text: String,
    pub status: String,
}

/// Reference to a habit by id, used inside fact payloads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitIdDto {
    pub id: i64,
}

/// A habit fact as returned by read endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitFactDto {
    pub id: i64,
    pub habit: HabitIdDto,
    pub content: String,
}

/// Payload for creating or replacing a habit fact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitFactPostDto {
    pub habit: HabitIdDto,
    pub translations: Vec<HabitFactTranslationDto>,
}

/// One per-language translation of a habit fact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitFactTranslationDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub content: String,
    pub fact_of_day_status: FactOfDayStatus,
    pub language: LanguageDto,
}

/// A language known to the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
    pub id: i64,
    pub code: String,
}

/// Language-scoped text, returned by the random fact and fact-of-the-day
/// endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTranslationDto {
    pub language: LanguageDto,
    pub content: String,
}

/// Profile picture projection of a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfilePictureDto {
    pub id: i64,
    pub name: String,
    pub profile_picture_path: String,
}

/// The resolved domain user behind an authenticated principal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Request payload of `POST /habit/custom` (the JSON multipart part)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCustomHabitDtoRequest {
    pub complexity: i32,
    pub default_duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_shopping_list_item_dto: Option<Vec<CustomShoppingListItemResponseDto>>,
    #[serde(default)]
    pub habit_translations: Vec<HabitTranslationDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

/// Response payload of `POST /habit/custom`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCustomHabitDtoResponse {
    pub id: i64,
    pub complexity: i32,
    pub default_duration: i32,
    #[serde(default)]
    pub habit_translations: Vec<HabitTranslationDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}
