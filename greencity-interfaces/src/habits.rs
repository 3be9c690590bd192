//! Habit and tag service contracts

use async_trait::async_trait;
use greencity_api_types::{
    AddCustomHabitDtoRequest, AddCustomHabitDtoResponse, HabitDto, PageRequest, PageableDto,
    ShoppingListItemDto, UserProfilePictureDto, UserVo,
};

use crate::error::ServiceResult;

/// Habit domain operations backing the `/habit` endpoints
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait HabitService: Send + Sync {
    /// Look up a habit, localized to `language`
    async fn get_by_id_and_language(&self, id: i64, language: &str) -> ServiceResult<HabitDto>;

    /// All habits, localized and paginated
    async fn get_all_by_language(
        &self,
        page: PageRequest,
        language: &str,
    ) -> ServiceResult<PageableDto<HabitDto>>;

    /// Habits carrying any of the given tags
    async fn get_all_by_tags(
        &self,
        page: PageRequest,
        tags: Vec<String>,
        language: &str,
    ) -> ServiceResult<PageableDto<HabitDto>>;

    /// Habits matching any combination of optional constraints.
    ///
    /// A `None` constraint matches everything; it must never be
    /// interpreted as an empty match set.
    async fn get_all_by_different_parameters(
        &self,
        user: Option<UserVo>,
        page: PageRequest,
        tags: Option<Vec<String>>,
        is_custom: Option<bool>,
        complexities: Option<Vec<i32>>,
        language: &str,
    ) -> ServiceResult<PageableDto<HabitDto>>;

    /// Shopping list items attached to a habit
    async fn get_shopping_list(
        &self,
        habit_id: i64,
        language: &str,
    ) -> ServiceResult<Vec<ShoppingListItemDto>>;

    /// Create a custom habit owned by `owner_email`
    async fn add_custom_habit(
        &self,
        request: AddCustomHabitDtoRequest,
        image: Option<Vec<u8>>,
        owner_email: &str,
    ) -> ServiceResult<AddCustomHabitDtoResponse>;

    /// Profile pictures of the user's friends assigned to a habit
    async fn get_friends_assigned_to_habit_profile_pictures(
        &self,
        habit_id: i64,
        user_id: i64,
    ) -> ServiceResult<Vec<UserProfilePictureDto>>;
}

/// Tag lookups backing `/habit/tags`
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait TagsService: Send + Sync {
    /// Names of every tag used by habits, localized to `language`
    async fn find_all_habits_tags(&self, language: &str) -> ServiceResult<Vec<String>>;
}
