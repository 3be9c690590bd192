//! Habit fact and language service contracts

use async_trait::async_trait;
use greencity_api_types::{
    HabitFactDto, HabitFactPostDto, LanguageDto, LanguageTranslationDto, PageRequest, PageableDto,
};

use crate::error::ServiceResult;

/// Habit fact operations backing the `/facts` endpoints
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait HabitFactService: Send + Sync {
    /// A random fact for the habit, localized to `language`
    async fn get_random_by_habit_id_and_language(
        &self,
        habit_id: i64,
        language: &str,
    ) -> ServiceResult<LanguageTranslationDto>;

    /// The current fact of the day in the given language
    async fn get_fact_of_the_day(&self, language_id: i64) -> ServiceResult<LanguageTranslationDto>;

    /// All facts, localized and paginated
    async fn get_all(
        &self,
        page: PageRequest,
        language: &str,
    ) -> ServiceResult<PageableDto<LanguageTranslationDto>>;

    /// Delete a fact, returning its id. Fails with `NotFound` when the
    /// fact does not exist.
    async fn delete(&self, fact_id: i64) -> ServiceResult<i64>;

    /// Persist a new fact with its translations
    async fn save(&self, fact: HabitFactPostDto) -> ServiceResult<HabitFactDto>;

    /// Replace an existing fact's content and translations
    async fn update(&self, fact_id: i64, fact: HabitFactPostDto) -> ServiceResult<HabitFactDto>;
}

/// Language lookups used by translation validation
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait LanguageService: Send + Sync {
    /// Every language the platform supports
    async fn find_all_languages(&self) -> ServiceResult<Vec<LanguageDto>>;

    /// Codes of every supported language
    async fn find_all_language_codes(&self) -> ServiceResult<Vec<String>>;
}
