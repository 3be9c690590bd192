//! Context types for dependency injection in REST API handlers
//!
//! Each endpoint group gets a context struct bundling the service
//! traits it needs. Handlers receive them through axum state, which
//! keeps the router generic over real and mock implementations.

use std::sync::Arc;

use greencity_interfaces::{
    HabitFactService, HabitService, LanguageService, TagsService, UserService,
};

/// Context for `/habit` endpoints
#[derive(Clone)]
pub struct HabitsContext {
    /// Habit domain operations
    pub habit_service: Arc<dyn HabitService>,
    /// Tag lookups
    pub tags_service: Arc<dyn TagsService>,
    /// Principal-to-user resolution
    pub user_service: Arc<dyn UserService>,
}

impl HabitsContext {
    pub fn new(
        habit_service: Arc<dyn HabitService>,
        tags_service: Arc<dyn TagsService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            habit_service,
            tags_service,
            user_service,
        }
    }
}

/// Context for `/facts` endpoints
#[derive(Clone)]
pub struct FactsContext {
    /// Habit fact operations
    pub fact_service: Arc<dyn HabitFactService>,
    /// Language lookups for translation validation
    pub language_service: Arc<dyn LanguageService>,
}

impl FactsContext {
    pub fn new(
        fact_service: Arc<dyn HabitFactService>,
        language_service: Arc<dyn LanguageService>,
    ) -> Self {
        Self {
            fact_service,
            language_service,
        }
    }
}

/// Application context containing all endpoint group contexts
#[derive(Clone)]
pub struct AppContext {
    pub habits: HabitsContext,
    pub facts: FactsContext,
}

impl AppContext {
    pub fn new(
        habit_service: Arc<dyn HabitService>,
        tags_service: Arc<dyn TagsService>,
        user_service: Arc<dyn UserService>,
        fact_service: Arc<dyn HabitFactService>,
        language_service: Arc<dyn LanguageService>,
    ) -> Self {
        Self {
            habits: HabitsContext::new(habit_service, tags_service, user_service),
            facts: FactsContext::new(fact_service, language_service),
        }
    }
}
