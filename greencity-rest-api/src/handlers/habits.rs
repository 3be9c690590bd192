//! Habit endpoint handlers

use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
};
use greencity_api_types::AddCustomHabitDtoRequest;
use greencity_web::{created, ok, Locale, MultiQuery, PageableParams, Principal, WebError};

use crate::{
    context::HabitsContext,
    errors::{RestError, RestResult},
    models::HabitSearchFilters,
};

/// GET /habit/{id}
///
/// A single habit localized to the requested locale.
pub async fn get_habit_by_id(
    State(ctx): State<HabitsContext>,
    Path(id): Path<i64>,
    locale: Locale,
) -> RestResult<impl IntoResponse> {
    let habit = ctx
        .habit_service
        .get_by_id_and_language(id, locale.as_str())
        .await?;

    Ok(ok(habit))
}

/// GET /habit
///
/// All habits, localized and paginated.
pub async fn get_all_habits(
    State(ctx): State<HabitsContext>,
    PageableParams(page): PageableParams,
    locale: Locale,
) -> RestResult<impl IntoResponse> {
    let habits = ctx
        .habit_service
        .get_all_by_language(page, locale.as_str())
        .await?;

    Ok(ok(habits))
}

/// GET /habit/{id}/shopping-list
pub async fn get_shopping_list(
    State(ctx): State<HabitsContext>,
    Path(id): Path<i64>,
    locale: Locale,
) -> RestResult<impl IntoResponse> {
    let items = ctx
        .habit_service
        .get_shopping_list(id, locale.as_str())
        .await?;

    Ok(ok(items))
}

/// GET /habit/tags/search?tags=a&tags=b
///
/// Habits carrying any of the given tags. The `tags` parameter is
/// required and may be repeated or comma-joined.
pub async fn get_habits_by_tags(
    State(ctx): State<HabitsContext>,
    PageableParams(page): PageableParams,
    locale: Locale,
    query: MultiQuery,
) -> RestResult<impl IntoResponse> {
    let tags = query
        .list("tags")
        .ok_or_else(|| WebError::bad_request("Missing required parameter 'tags'"))?;

    let habits = ctx
        .habit_service
        .get_all_by_tags(page, tags, locale.as_str())
        .await?;

    Ok(ok(habits))
}

/// GET /habit/search
///
/// Habits matching any combination of tags, custom flag and
/// complexities. Each filter is optional; absence means no constraint.
/// When the caller is authenticated, their user is passed through so
/// the service can include assignment data.
pub async fn search_habits(
    State(ctx): State<HabitsContext>,
    PageableParams(page): PageableParams,
    locale: Locale,
    principal: Option<Principal>,
    query: MultiQuery,
) -> RestResult<impl IntoResponse> {
    let filters = HabitSearchFilters::from_query(&query)?;

    let user = match principal {
        Some(principal) => Some(ctx.user_service.find_by_email(&principal.email).await?),
        None => None,
    };

    let habits = ctx
        .habit_service
        .get_all_by_different_parameters(
            user,
            page,
            filters.tags,
            filters.is_custom_habit,
            filters.complexities,
            locale.as_str(),
        )
        .await?;

    Ok(ok(habits))
}

/// GET /habit/tags
///
/// Names of every tag used by habits.
pub async fn get_habit_tags(
    State(ctx): State<HabitsContext>,
    locale: Locale,
) -> RestResult<impl IntoResponse> {
    let tags = ctx.tags_service.find_all_habits_tags(locale.as_str()).await?;

    Ok(ok(tags))
}

/// POST /habit/custom
///
/// Creates a custom habit from a multipart body: a mandatory `request`
/// part holding the habit JSON and an optional `image` part. The
/// authenticated principal's email becomes the owner key.
pub async fn add_custom_habit(
    State(ctx): State<HabitsContext>,
    principal: Principal,
    mut multipart: Multipart,
) -> RestResult<impl IntoResponse> {
    let mut request: Option<AddCustomHabitDtoRequest> = None;
    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| WebError::bad_request(format!("Malformed multipart body: {}", err)))?
    {
        match field.name() {
            Some("request") => {
                let text = field.text().await.map_err(|err| {
                    WebError::bad_request(format!("Unreadable 'request' part: {}", err))
                })?;
                request = Some(serde_json::from_str(&text).map_err(|err| {
                    WebError::bad_request(format!("Invalid habit payload: {}", err))
                })?);
            }
            Some("image") => {
                let bytes = field.bytes().await.map_err(|err| {
                    WebError::bad_request(format!("Unreadable 'image' part: {}", err))
                })?;
                image = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let request = request
        .ok_or_else(|| RestError::bad_request("Missing required multipart part 'request'"))?;

    let habit = ctx
        .habit_service
        .add_custom_habit(request, image, &principal.email)
        .await?;

    Ok(created(habit))
}

/// GET /habit/{id}/friends/profile-pictures
///
/// Profile pictures of the caller's friends assigned to the habit. The
/// principal is resolved to a domain user first; an unknown user fails
/// the request.
pub async fn get_friends_assigned_to_habit_profile_pictures(
    State(ctx): State<HabitsContext>,
    Path(id): Path<i64>,
    principal: Principal,
) -> RestResult<impl IntoResponse> {
    let user = ctx.user_service.find_by_email(&principal.email).await?;

    let pictures = ctx
        .habit_service
        .get_friends_assigned_to_habit_profile_pictures(id, user.id)
        .await?;

    Ok(ok(pictures))
}
