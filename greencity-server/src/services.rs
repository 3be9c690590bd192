//! In-memory service implementations
//!
//! Backs every service trait with `RwLock`-protected state seeded with
//! a small fixture set, so the binary serves real responses without a
//! database. Lookups fall back to English when a translation for the
//! requested language is missing.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use greencity_api_types::{
    AddCustomHabitDtoRequest, AddCustomHabitDtoResponse, FactOfDayStatus, HabitDto, HabitFactDto,
    HabitFactPostDto, HabitFactTranslationDto, HabitTranslationDto, LanguageDto,
    LanguageTranslationDto, PageRequest, PageableDto, ShoppingListItemDto, UserProfilePictureDto,
    UserVo,
};
use greencity_interfaces::{
    HabitFactService, HabitService, LanguageService, ServiceError, ServiceResult, TagsService,
    UserService,
};
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

const FALLBACK_LANGUAGE: &str = "en";

/// Initialize the tracing subscriber from logging configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.format.as_str() {
        "pretty" => builder.pretty().try_init(),
        _ => builder.compact().try_init(),
    }
    .map_err(|err| anyhow::anyhow!("Failed to initialize logging: {}", err))?;

    Ok(())
}

#[derive(Debug, Clone)]
struct HabitRecord {
    id: i64,
    image: Option<String>,
    complexity: i32,
    default_duration: i32,
    is_custom: bool,
    owner_email: Option<String>,
    tags: Vec<String>,
    translations: Vec<HabitTranslationDto>,
    shopping_list: Vec<ShoppingListItemDto>,
}

#[derive(Debug, Clone)]
struct FactRecord {
    id: i64,
    habit_id: i64,
    translations: Vec<HabitFactTranslationDto>,
}

#[derive(Debug, Clone)]
struct TagRecord {
    translations: Vec<(String, String)>, // (language code, name)
}

#[derive(Debug, Clone)]
struct UserRecord {
    user: UserVo,
    profile_picture_path: String,
    friend_ids: Vec<i64>,
}

#[derive(Debug)]
struct State {
    languages: Vec<LanguageDto>,
    users: Vec<UserRecord>,
    habits: Vec<HabitRecord>,
    facts: Vec<FactRecord>,
    tags: Vec<TagRecord>,
    /// (habit id, user id) pairs
    assignments: Vec<(i64, i64)>,
    next_habit_id: i64,
    next_fact_id: i64,
}

/// All service traits implemented over one shared in-memory state
#[derive(Debug)]
pub struct InMemoryGreenCity {
    state: RwLock<State>,
}

impl InMemoryGreenCity {
    /// A store seeded with the fixture data the gateway ships with
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(seed_state()),
        })
    }
}

fn translation(code: &str, name: &str, description: &str, item: &str) -> HabitTranslationDto {
    HabitTranslationDto {
        description: description.to_string(),
        habit_item: item.to_string(),
        language_code: code.to_string(),
        name: name.to_string(),
    }
}

fn fact_translation(
    id: i64,
    language: LanguageDto,
    content: &str,
    status: FactOfDayStatus,
) -> HabitFactTranslationDto {
    HabitFactTranslationDto {
        id: Some(id),
        content: content.to_string(),
        fact_of_day_status: status,
        language,
    }
}

fn seed_state() -> State {
    let ua = LanguageDto {
        id: 1,
        code: "ua".to_string(),
    };
    let en = LanguageDto {
        id: 2,
        code: "en".to_string(),
    };
    let ru = LanguageDto {
        id: 3,
        code: "ru".to_string(),
    };

    State {
        languages: vec![ua.clone(), en.clone(), ru.clone()],
        users: vec![
            UserRecord {
                user: UserVo {
                    id: 13,
                    name: "Taras".to_string(),
                    email: "user@example.com".to_string(),
                    role: "ROLE_USER".to_string(),
                },
                profile_picture_path: "/pictures/13.png".to_string(),
                friend_ids: vec![7],
            },
            UserRecord {
                user: UserVo {
                    id: 7,
                    name: "Olha".to_string(),
                    email: "olha@example.com".to_string(),
                    role: "ROLE_USER".to_string(),
                },
                profile_picture_path: "/pictures/7.png".to_string(),
                friend_ids: vec![13],
            },
        ],
        habits: vec![
            HabitRecord {
                id: 1,
                image: Some("/images/habits/bag.png".to_string()),
                complexity: 1,
                default_duration: 14,
                is_custom: false,
                owner_email: None,
                tags: vec!["eco".to_string(), "shopping".to_string()],
                translations: vec![
                    translation("en", "Reusable bag", "Take a reusable bag shopping", "bag"),
                    translation("ua", "Еко-торбинка", "Беріть еко-торбинку на закупи", "торбинка"),
                ],
                shopping_list: vec![ShoppingListItemDto {
                    id: 1,
                    text: "Reusable bag".to_string(),
                    status: "ACTIVE".to_string(),
                }],
            },
            HabitRecord {
                id: 2,
                image: None,
                complexity: 2,
                default_duration: 21,
                is_custom: false,
                owner_email: None,
                tags: vec!["eco".to_string(), "recycling".to_string()],
                translations: vec![
                    translation("en", "Sort waste", "Sort household waste", "bins"),
                    translation("ua", "Сортування", "Сортуйте побутові відходи", "баки"),
                ],
                shopping_list: vec![],
            },
            HabitRecord {
                id: 3,
                image: None,
                complexity: 3,
                default_duration: 30,
                is_custom: true,
                owner_email: Some("user@example.com".to_string()),
                tags: vec!["news".to_string()],
                translations: vec![translation(
                    "en",
                    "Read eco news",
                    "Read one ecology article a day",
                    "news",
                )],
                shopping_list: vec![],
            },
        ],
        facts: vec![
            FactRecord {
                id: 1,
                habit_id: 1,
                translations: vec![
                    fact_translation(
                        1,
                        en.clone(),
                        "A plastic bag takes centuries to decompose",
                        FactOfDayStatus::Current,
                    ),
                    fact_translation(
                        2,
                        ua.clone(),
                        "Пластиковий пакет розкладається століттями",
                        FactOfDayStatus::Current,
                    ),
                ],
            },
            FactRecord {
                id: 2,
                habit_id: 2,
                translations: vec![fact_translation(
                    3,
                    en.clone(),
                    "Recycling one can saves enough energy to run a TV for hours",
                    FactOfDayStatus::Potential,
                )],
            },
        ],
        tags: vec![
            TagRecord {
                translations: vec![
                    ("en".to_string(), "eco".to_string()),
                    ("ua".to_string(), "еко".to_string()),
                ],
            },
            TagRecord {
                translations: vec![
                    ("en".to_string(), "news".to_string()),
                    ("ua".to_string(), "новини".to_string()),
                ],
            },
            TagRecord {
                translations: vec![
                    ("en".to_string(), "recycling".to_string()),
                    ("ua".to_string(), "переробка".to_string()),
                ],
            },
        ],
        assignments: vec![(1, 7), (1, 13), (2, 7)],
        next_habit_id: 4,
        next_fact_id: 3,
    }
}

impl HabitRecord {
    fn translation_for(&self, language: &str) -> Option<&HabitTranslationDto> {
        self.translations
            .iter()
            .find(|t| t.language_code == language)
            .or_else(|| {
                self.translations
                    .iter()
                    .find(|t| t.language_code == FALLBACK_LANGUAGE)
            })
            .or_else(|| self.translations.first())
    }

    fn to_dto(&self, language: &str) -> HabitDto {
        HabitDto {
            id: self.id,
            image: self.image.clone(),
            complexity: Some(self.complexity),
            default_duration: Some(self.default_duration),
            habit_translation: self.translation_for(language).cloned(),
            tags: self.tags.clone(),
            is_custom_habit: Some(self.is_custom),
            shopping_list_items: None,
        }
    }

    /// Whether the habit is visible to `user` in search results: stock
    /// habits always are, custom habits only to their owner
    fn visible_to(&self, user: Option<&UserVo>) -> bool {
        if !self.is_custom {
            return true;
        }
        match (user, &self.owner_email) {
            (Some(user), Some(owner)) => user.email == *owner,
            _ => false,
        }
    }
}

impl FactRecord {
    fn translation_for(&self, language: &str) -> Option<&HabitFactTranslationDto> {
        self.translations
            .iter()
            .find(|t| t.language.code == language)
            .or_else(|| {
                self.translations
                    .iter()
                    .find(|t| t.language.code == FALLBACK_LANGUAGE)
            })
            .or_else(|| self.translations.first())
    }
}

#[async_trait]
impl HabitService for InMemoryGreenCity {
    async fn get_by_id_and_language(&self, id: i64, language: &str) -> ServiceResult<HabitDto> {
        let state = self.state.read().await;
        let record = state
            .habits
            .iter()
            .find(|h| h.id == id)
            .ok_or_else(|| ServiceError::not_found("Habit", id))?;

        let mut dto = record.to_dto(language);
        dto.shopping_list_items = Some(record.shopping_list.clone());
        Ok(dto)
    }

    async fn get_all_by_language(
        &self,
        page: PageRequest,
        language: &str,
    ) -> ServiceResult<PageableDto<HabitDto>> {
        let state = self.state.read().await;
        let habits: Vec<HabitDto> = state.habits.iter().map(|h| h.to_dto(language)).collect();
        Ok(PageableDto::paginate(habits, page))
    }

    async fn get_all_by_tags(
        &self,
        page: PageRequest,
        tags: Vec<String>,
        language: &str,
    ) -> ServiceResult<PageableDto<HabitDto>> {
        let state = self.state.read().await;
        let habits: Vec<HabitDto> = state
            .habits
            .iter()
            .filter(|h| h.tags.iter().any(|tag| tags.contains(tag)))
            .map(|h| h.to_dto(language))
            .collect();
        Ok(PageableDto::paginate(habits, page))
    }

    async fn get_all_by_different_parameters(
        &self,
        user: Option<UserVo>,
        page: PageRequest,
        tags: Option<Vec<String>>,
        is_custom: Option<bool>,
        complexities: Option<Vec<i32>>,
        language: &str,
    ) -> ServiceResult<PageableDto<HabitDto>> {
        let state = self.state.read().await;
        let habits: Vec<HabitDto> = state
            .habits
            .iter()
            .filter(|h| h.visible_to(user.as_ref()))
            .filter(|h| match &tags {
                // An absent filter places no constraint
                None => true,
                Some(tags) => h.tags.iter().any(|tag| tags.contains(tag)),
            })
            .filter(|h| is_custom.is_none_or(|flag| h.is_custom == flag))
            .filter(|h| match &complexities {
                None => true,
                Some(complexities) => complexities.contains(&h.complexity),
            })
            .map(|h| h.to_dto(language))
            .collect();
        Ok(PageableDto::paginate(habits, page))
    }

    async fn get_shopping_list(
        &self,
        habit_id: i64,
        _language: &str,
    ) -> ServiceResult<Vec<ShoppingListItemDto>> {
        let state = self.state.read().await;
        let record = state
            .habits
            .iter()
            .find(|h| h.id == habit_id)
            .ok_or_else(|| ServiceError::not_found("Habit", habit_id))?;
        Ok(record.shopping_list.clone())
    }

    async fn add_custom_habit(
        &self,
        request: AddCustomHabitDtoRequest,
        image: Option<Vec<u8>>,
        owner_email: &str,
    ) -> ServiceResult<AddCustomHabitDtoResponse> {
        if request.habit_translations.is_empty() {
            return Err(ServiceError::validation(
                "Custom habit must carry at least one translation",
            ));
        }

        let mut state = self.state.write().await;
        let id = state.next_habit_id;
        state.next_habit_id += 1;

        // The image bytes are not persisted; only their presence shows
        // up as a generated path
        let image_path = image.map(|_| format!("/images/custom/{}.png", id));

        state.habits.push(HabitRecord {
            id,
            image: image_path.clone(),
            complexity: request.complexity,
            default_duration: request.default_duration,
            is_custom: true,
            owner_email: Some(owner_email.to_string()),
            tags: vec![],
            translations: request.habit_translations.clone(),
            shopping_list: vec![],
        });

        tracing::info!(habit_id = id, owner = owner_email, "Created custom habit");

        Ok(AddCustomHabitDtoResponse {
            id,
            complexity: request.complexity,
            default_duration: request.default_duration,
            habit_translations: request.habit_translations,
            image: image_path,
            tag_ids: request.tag_ids,
        })
    }

    async fn get_friends_assigned_to_habit_profile_pictures(
        &self,
        habit_id: i64,
        user_id: i64,
    ) -> ServiceResult<Vec<UserProfilePictureDto>> {
        let state = self.state.read().await;
        let caller = state
            .users
            .iter()
            .find(|u| u.user.id == user_id)
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        let pictures = caller
            .friend_ids
            .iter()
            .filter(|friend_id| state.assignments.contains(&(habit_id, **friend_id)))
            .filter_map(|friend_id| state.users.iter().find(|u| u.user.id == *friend_id))
            .map(|friend| UserProfilePictureDto {
                id: friend.user.id,
                name: friend.user.name.clone(),
                profile_picture_path: friend.profile_picture_path.clone(),
            })
            .collect();

        Ok(pictures)
    }
}

#[async_trait]
impl TagsService for InMemoryGreenCity {
    async fn find_all_habits_tags(&self, language: &str) -> ServiceResult<Vec<String>> {
        let state = self.state.read().await;
        let names = state
            .tags
            .iter()
            .filter_map(|tag| {
                tag.translations
                    .iter()
                    .find(|(code, _)| code == language)
                    .or_else(|| {
                        tag.translations
                            .iter()
                            .find(|(code, _)| code == FALLBACK_LANGUAGE)
                    })
                    .map(|(_, name)| name.clone())
            })
            .collect();
        Ok(names)
    }
}

#[async_trait]
impl HabitFactService for InMemoryGreenCity {
    async fn get_random_by_habit_id_and_language(
        &self,
        habit_id: i64,
        language: &str,
    ) -> ServiceResult<LanguageTranslationDto> {
        let state = self.state.read().await;
        let candidates: Vec<&FactRecord> = state
            .facts
            .iter()
            .filter(|f| f.habit_id == habit_id)
            .collect();

        if candidates.is_empty() {
            return Err(ServiceError::not_found("HabitFact for habit", habit_id));
        }

        // Pseudo-random pick; good enough without an RNG dependency
        let index = Utc::now().timestamp_subsec_micros() as usize % candidates.len();
        let translation = candidates[index]
            .translation_for(language)
            .ok_or_else(|| ServiceError::not_found("HabitFact translation for habit", habit_id))?;

        Ok(LanguageTranslationDto {
            language: translation.language.clone(),
            content: translation.content.clone(),
        })
    }

    async fn get_fact_of_the_day(&self, language_id: i64) -> ServiceResult<LanguageTranslationDto> {
        let state = self.state.read().await;
        state
            .facts
            .iter()
            .flat_map(|fact| fact.translations.iter())
            .find(|t| {
                t.language.id == language_id && t.fact_of_day_status == FactOfDayStatus::Current
            })
            .map(|t| LanguageTranslationDto {
                language: t.language.clone(),
                content: t.content.clone(),
            })
            .ok_or_else(|| ServiceError::not_found("FactOfTheDay for language", language_id))
    }

    async fn get_all(
        &self,
        page: PageRequest,
        language: &str,
    ) -> ServiceResult<PageableDto<LanguageTranslationDto>> {
        let state = self.state.read().await;
        let facts: Vec<LanguageTranslationDto> = state
            .facts
            .iter()
            .filter_map(|fact| fact.translation_for(language))
            .map(|t| LanguageTranslationDto {
                language: t.language.clone(),
                content: t.content.clone(),
            })
            .collect();
        Ok(PageableDto::paginate(facts, page))
    }

    async fn delete(&self, fact_id: i64) -> ServiceResult<i64> {
        let mut state = self.state.write().await;
        let position = state
            .facts
            .iter()
            .position(|f| f.id == fact_id)
            .ok_or_else(|| ServiceError::not_found("HabitFact", fact_id))?;

        state.facts.remove(position);
        tracing::info!(fact_id, "Deleted habit fact");
        Ok(fact_id)
    }

    async fn save(&self, fact: HabitFactPostDto) -> ServiceResult<HabitFactDto> {
        let mut state = self.state.write().await;
        if !state.habits.iter().any(|h| h.id == fact.habit.id) {
            return Err(ServiceError::not_found("Habit", fact.habit.id));
        }

        let id = state.next_fact_id;
        state.next_fact_id += 1;

        let content = fact
            .translations
            .first()
            .map(|t| t.content.clone())
            .unwrap_or_default();

        state.facts.push(FactRecord {
            id,
            habit_id: fact.habit.id,
            translations: fact.translations,
        });

        Ok(HabitFactDto {
            id,
            habit: fact.habit,
            content,
        })
    }

    async fn update(&self, fact_id: i64, fact: HabitFactPostDto) -> ServiceResult<HabitFactDto> {
        let mut state = self.state.write().await;
        let record = state
            .facts
            .iter_mut()
            .find(|f| f.id == fact_id)
            .ok_or_else(|| ServiceError::not_found("HabitFact", fact_id))?;

        record.habit_id = fact.habit.id;
        record.translations = fact.translations;

        let content = record
            .translations
            .first()
            .map(|t| t.content.clone())
            .unwrap_or_default();

        Ok(HabitFactDto {
            id: fact_id,
            habit: fact.habit,
            content,
        })
    }
}

#[async_trait]
impl LanguageService for InMemoryGreenCity {
    async fn find_all_languages(&self) -> ServiceResult<Vec<LanguageDto>> {
        let state = self.state.read().await;
        Ok(state.languages.clone())
    }

    async fn find_all_language_codes(&self) -> ServiceResult<Vec<String>> {
        let state = self.state.read().await;
        Ok(state.languages.iter().map(|l| l.code.clone()).collect())
    }
}

#[async_trait]
impl UserService for InMemoryGreenCity {
    async fn find_by_email(&self, email: &str) -> ServiceResult<UserVo> {
        let state = self.state.read().await;
        state
            .users
            .iter()
            .find(|u| u.user.email == email)
            .map(|u| u.user.clone())
            .ok_or_else(|| ServiceError::not_found("User", email))
    }
}
