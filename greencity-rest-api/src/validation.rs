//! Request payload validation
//!
//! Fact payloads are checked against the supported languages before any
//! fact service interaction; a violation is a 400 and no fact call is
//! made.

use greencity_api_types::HabitFactPostDto;
use greencity_interfaces::LanguageService;

use crate::errors::{RestError, RestResult};

/// Validate a fact create/update payload
pub async fn validate_fact_payload(
    language_service: &dyn LanguageService,
    payload: &HabitFactPostDto,
) -> RestResult<()> {
    if payload.translations.is_empty() {
        return Err(RestError::bad_request(
            "Fact must carry at least one translation",
        ));
    }

    for translation in &payload.translations {
        if translation.content.trim().is_empty() {
            return Err(RestError::bad_request(
                "Fact translation content must not be blank",
            ));
        }
    }

    let known_codes = language_service.find_all_language_codes().await?;
    for translation in &payload.translations {
        if !known_codes.contains(&translation.language.code) {
            return Err(RestError::bad_request(format!(
                "Unsupported translation language: {}",
                translation.language.code
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use greencity_api_types::{
        FactOfDayStatus, HabitFactTranslationDto, HabitIdDto, LanguageDto,
    };
    use greencity_interfaces::MockLanguageService;

    fn payload(language_code: &str, content: &str) -> HabitFactPostDto {
        HabitFactPostDto {
            habit: HabitIdDto { id: 1 },
            translations: vec![HabitFactTranslationDto {
                id: None,
                content: content.to_string(),
                fact_of_day_status: FactOfDayStatus::Potential,
                language: LanguageDto {
                    id: 2,
                    code: language_code.to_string(),
                },
            }],
        }
    }

    fn languages() -> MockLanguageService {
        let mut languages = MockLanguageService::new();
        languages
            .expect_find_all_language_codes()
            .returning(|| Ok(vec!["ua".to_string(), "en".to_string(), "ru".to_string()]));
        languages
    }

    #[tokio::test]
    async fn known_language_passes() {
        let languages = languages();
        let result = validate_fact_payload(&languages, &payload("en", "fact content")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unknown_language_is_rejected() {
        let languages = languages();
        let result = validate_fact_payload(&languages, &payload("de", "fact content")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn empty_translations_are_rejected_without_a_language_lookup() {
        // No expectation set on the mock: a lookup would panic the test
        let languages = MockLanguageService::new();
        let empty = HabitFactPostDto {
            habit: HabitIdDto { id: 1 },
            translations: vec![],
        };
        let result = validate_fact_payload(&languages, &empty).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn blank_content_is_rejected() {
        let languages = MockLanguageService::new();
        let result = validate_fact_payload(&languages, &payload("en", "   ")).await;
        assert!(result.is_err());
    }
}
