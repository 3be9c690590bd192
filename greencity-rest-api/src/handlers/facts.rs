//! Habit fact endpoint handlers

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use greencity_api_types::HabitFactPostDto;
use greencity_web::{created, ok, Locale, PageableParams};
use serde_json::json;

use crate::{context::FactsContext, errors::RestResult, validation::validate_fact_payload};

/// GET /facts/random/{habitId}
///
/// A random fact for the habit, localized to the requested locale.
pub async fn get_random_fact_by_habit_id(
    State(ctx): State<FactsContext>,
    Path(habit_id): Path<i64>,
    locale: Locale,
) -> RestResult<impl IntoResponse> {
    let fact = ctx
        .fact_service
        .get_random_by_habit_id_and_language(habit_id, locale.as_str())
        .await?;

    Ok(ok(fact))
}

/// GET /facts/dayFact/{languageId}
pub async fn get_fact_of_the_day(
    State(ctx): State<FactsContext>,
    Path(language_id): Path<i64>,
) -> RestResult<impl IntoResponse> {
    let fact = ctx.fact_service.get_fact_of_the_day(language_id).await?;

    Ok(ok(fact))
}

/// GET /facts
///
/// All facts, localized and paginated.
pub async fn get_all_facts(
    State(ctx): State<FactsContext>,
    PageableParams(page): PageableParams,
    locale: Locale,
) -> RestResult<impl IntoResponse> {
    let facts = ctx.fact_service.get_all(page, locale.as_str()).await?;

    Ok(ok(facts))
}

/// DELETE /facts/{id}
///
/// Deletes a fact; a missing id is a 404 after exactly one service
/// call.
pub async fn delete_fact(
    State(ctx): State<FactsContext>,
    Path(id): Path<i64>,
) -> RestResult<impl IntoResponse> {
    let deleted_id = ctx.fact_service.delete(id).await?;

    Ok(ok(json!(deleted_id)))
}

/// POST /facts
///
/// Creates a fact after validating its translations against the
/// supported languages.
pub async fn save_fact(
    State(ctx): State<FactsContext>,
    Json(payload): Json<HabitFactPostDto>,
) -> RestResult<impl IntoResponse> {
    validate_fact_payload(ctx.language_service.as_ref(), &payload).await?;

    let fact = ctx.fact_service.save(payload).await?;

    Ok(created(fact))
}

/// PUT /facts/{id}
///
/// Replaces a fact's content and translations. The payload is
/// validated the same way as on create.
pub async fn update_fact(
    State(ctx): State<FactsContext>,
    Path(id): Path<i64>,
    Json(payload): Json<HabitFactPostDto>,
) -> RestResult<impl IntoResponse> {
    validate_fact_payload(ctx.language_service.as_ref(), &payload).await?;

    let fact = ctx.fact_service.update(id, payload).await?;

    Ok(ok(fact))
}
