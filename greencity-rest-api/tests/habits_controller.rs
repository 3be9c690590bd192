//! Integration tests for the `/habit` endpoints
//!
//! Handlers run against the real router with mocked services, driven
//! through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, StatusCode},
    middleware::{self, Next},
    response::Response,
    Router,
};
use greencity_api_types::{
    AddCustomHabitDtoResponse, HabitDto, PageRequest, PageableDto, ShoppingListItemDto,
    UserProfilePictureDto, UserVo,
};
use greencity_interfaces::{
    MockHabitService, MockTagsService, MockUserService, ServiceError,
};
use greencity_rest_api::{app::habit_routes, context::HabitsContext};
use greencity_web::{Principal, JSON_CONTENT_TYPE};
use serde_json::Value;
use tower::ServiceExt;

fn app(habits: MockHabitService, tags: MockTagsService, users: MockUserService) -> Router {
    let context = HabitsContext::new(Arc::new(habits), Arc::new(tags), Arc::new(users));
    habit_routes().with_state(context)
}

/// Simulates the auth middleware by injecting a principal extension
fn with_principal(router: Router, email: &'static str) -> Router {
    router.layer(middleware::from_fn(
        move |mut request: Request, next: Next| async move {
            request.extensions_mut().insert(Principal::new(email));
            next.run(request).await
        },
    ))
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn get_habit_by_id_returns_the_requested_habit() {
    let mut habits = MockHabitService::new();
    habits
        .expect_get_by_id_and_language()
        .withf(|id, language| *id == 1 && language == "en")
        .times(1)
        .returning(|id, _| Ok(HabitDto::with_id(id)));

    let app = app(habits, MockTagsService::new(), MockUserService::new());
    let response = app.oneshot(get("/habit/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        JSON_CONTENT_TYPE
    );
    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn get_habit_by_id_passes_the_locale_through() {
    let mut habits = MockHabitService::new();
    habits
        .expect_get_by_id_and_language()
        .withf(|id, language| *id == 5 && language == "ua")
        .times(1)
        .returning(|id, _| Ok(HabitDto::with_id(id)));

    let app = app(habits, MockTagsService::new(), MockUserService::new());
    let response = app.oneshot(get("/habit/5?locale=ua")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_habit_is_a_404_with_the_error_envelope() {
    let mut habits = MockHabitService::new();
    habits
        .expect_get_by_id_and_language()
        .times(1)
        .returning(|id, _| Err(ServiceError::not_found("Habit", id)));

    let app = app(habits, MockTagsService::new(), MockUserService::new());
    let response = app.oneshot(get("/habit/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["status"], 404);
}

#[tokio::test]
async fn non_numeric_habit_id_is_rejected() {
    let app = app(
        MockHabitService::new(),
        MockTagsService::new(),
        MockUserService::new(),
    );
    let response = app.oneshot(get("/habit/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_defaults_to_page_zero_size_twenty() {
    let mut habits = MockHabitService::new();
    habits
        .expect_get_all_by_language()
        .withf(|page, language| *page == PageRequest::of(0, 20) && language == "en")
        .times(1)
        .returning(|page, _| {
            Ok(PageableDto::new(
                vec![HabitDto::with_id(1)],
                1,
                page.page,
                page.size,
            ))
        });

    let app = app(habits, MockTagsService::new(), MockUserService::new());
    let response = app.oneshot(get("/habit")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["page"][0]["id"], 1);
    assert_eq!(body["totalElements"], 1);
    assert_eq!(body["currentPage"], 0);
    assert_eq!(body["pageSize"], 20);
}

#[tokio::test]
async fn listing_never_returns_more_than_the_page_size() {
    let mut habits = MockHabitService::new();
    habits
        .expect_get_all_by_language()
        .withf(|page, _| *page == PageRequest::of(1, 5))
        .times(1)
        .returning(|page, _| {
            let all: Vec<HabitDto> = (1..=12).map(HabitDto::with_id).collect();
            Ok(PageableDto::paginate(all, page))
        });

    let app = app(habits, MockTagsService::new(), MockUserService::new());
    let response = app.oneshot(get("/habit?page=1&size=5")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let page = body["page"].as_array().unwrap();
    assert!(page.len() <= 5);
    assert_eq!(body["totalElements"], 12);
}

#[tokio::test]
async fn oversized_page_size_is_rejected_before_any_service_call() {
    let app = app(
        MockHabitService::new(),
        MockTagsService::new(),
        MockUserService::new(),
    );
    let response = app.oneshot(get("/habit?size=500")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn shopping_list_is_a_plain_array() {
    let mut habits = MockHabitService::new();
    habits
        .expect_get_shopping_list()
        .withf(|id, language| *id == 1 && language == "en")
        .times(1)
        .returning(|_, _| {
            Ok(vec![ShoppingListItemDto {
                id: 1,
                text: "Reusable bag".to_string(),
                status: "ACTIVE".to_string(),
            }])
        });

    let app = app(habits, MockTagsService::new(), MockUserService::new());
    let response = app.oneshot(get("/habit/1/shopping-list")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[0]["text"], "Reusable bag");
}

#[tokio::test]
async fn tag_search_collects_repeated_tags_parameters() {
    let mut habits = MockHabitService::new();
    habits
        .expect_get_all_by_tags()
        .withf(|page, tags, language| {
            *page == PageRequest::of(0, 20)
                && tags == &["eco".to_string(), "news".to_string()]
                && language == "en"
        })
        .times(1)
        .returning(|page, _, _| Ok(PageableDto::new(vec![], 0, page.page, page.size)));

    let app = app(habits, MockTagsService::new(), MockUserService::new());
    let response = app
        .oneshot(get("/habit/tags/search?tags=eco&tags=news"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn tag_search_without_tags_is_rejected() {
    let app = app(
        MockHabitService::new(),
        MockTagsService::new(),
        MockUserService::new(),
    );
    let response = app.oneshot(get("/habit/tags/search")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_passes_absent_filters_as_no_constraint() {
    let mut habits = MockHabitService::new();
    habits
        .expect_get_all_by_different_parameters()
        .withf(|user, page, tags, is_custom, complexities, language| {
            user.is_none()
                && *page == PageRequest::of(0, 20)
                && tags.is_none()
                && is_custom.is_none()
                && complexities.is_none()
                && language == "en"
        })
        .times(1)
        .returning(|_, page, _, _, _, _| Ok(PageableDto::new(vec![], 0, page.page, page.size)));

    let app = app(habits, MockTagsService::new(), MockUserService::new());
    let response = app.oneshot(get("/habit/search")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_forwards_every_filter_independently() {
    let mut habits = MockHabitService::new();
    habits
        .expect_get_all_by_different_parameters()
        .withf(|user, _, tags, is_custom, complexities, language| {
            user.is_none()
                && tags == &Some(vec!["eco".to_string()])
                && *is_custom == Some(true)
                && complexities == &Some(vec![1, 2, 3])
                && language == "ua"
        })
        .times(1)
        .returning(|_, page, _, _, _, _| Ok(PageableDto::new(vec![], 0, page.page, page.size)));

    let app = app(habits, MockTagsService::new(), MockUserService::new());
    let response = app
        .oneshot(get(
            "/habit/search?tags=eco&isCustomHabit=true&complexities=1,2,3&locale=ua",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_resolves_the_authenticated_caller() {
    let mut users = MockUserService::new();
    users
        .expect_find_by_email()
        .withf(|email| email == "user@example.com")
        .times(1)
        .returning(|email| {
            Ok(UserVo {
                id: 13,
                name: "Taras".to_string(),
                email: email.to_string(),
                role: "ROLE_USER".to_string(),
            })
        });

    let mut habits = MockHabitService::new();
    habits
        .expect_get_all_by_different_parameters()
        .withf(|user, _, _, _, _, _| user.as_ref().map(|u| u.id) == Some(13))
        .times(1)
        .returning(|_, page, _, _, _, _| Ok(PageableDto::new(vec![], 0, page.page, page.size)));

    let app = with_principal(
        app(habits, MockTagsService::new(), users),
        "user@example.com",
    );
    let response = app.oneshot(get("/habit/search")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn habit_tags_lists_localized_tag_names() {
    let mut tags = MockTagsService::new();
    tags.expect_find_all_habits_tags()
        .withf(|language| language == "ua")
        .times(1)
        .returning(|_| Ok(vec!["екологія".to_string(), "новини".to_string()]));

    let app = app(MockHabitService::new(), tags, MockUserService::new());
    let response = app.oneshot(get("/habit/tags?locale=ua")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0], "екологія");
}

fn multipart_request(boundary: &str, include_image: bool) -> Request<Body> {
    let request_json = r#"{"complexity":2,"defaultDuration":30,"tagIds":[1],"habitTranslations":[{"description":"d","habitItem":"i","languageCode":"en","name":"Custom habit"}]}"#;

    let mut body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"request\"\r\nContent-Type: application/json\r\n\r\n{request_json}\r\n"
    );
    if include_image {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"habit.png\"\r\nContent-Type: image/png\r\n\r\nfake-image-bytes\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/habit/custom")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn custom_habit_binds_the_principal_as_owner() {
    let mut habits = MockHabitService::new();
    habits
        .expect_add_custom_habit()
        .withf(|request, image, owner| {
            request.complexity == 2
                && request.default_duration == 30
                && image.as_deref() == Some(b"fake-image-bytes".as_slice())
                && owner == "user@example.com"
        })
        .times(1)
        .returning(|request, _, _| {
            Ok(AddCustomHabitDtoResponse {
                id: 42,
                complexity: request.complexity,
                default_duration: request.default_duration,
                habit_translations: request.habit_translations,
                image: None,
                tag_ids: request.tag_ids,
            })
        });

    let app = with_principal(
        app(habits, MockTagsService::new(), MockUserService::new()),
        "user@example.com",
    );
    let response = app
        .oneshot(multipart_request("test-boundary", true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], 42);
    assert_eq!(body["complexity"], 2);
}

#[tokio::test]
async fn custom_habit_works_without_an_image_part() {
    let mut habits = MockHabitService::new();
    habits
        .expect_add_custom_habit()
        .withf(|_, image, _| image.is_none())
        .times(1)
        .returning(|request, _, _| {
            Ok(AddCustomHabitDtoResponse {
                id: 43,
                complexity: request.complexity,
                default_duration: request.default_duration,
                habit_translations: request.habit_translations,
                image: None,
                tag_ids: request.tag_ids,
            })
        });

    let app = with_principal(
        app(habits, MockTagsService::new(), MockUserService::new()),
        "user@example.com",
    );
    let response = app
        .oneshot(multipart_request("test-boundary", false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn custom_habit_requires_authentication() {
    let app = app(
        MockHabitService::new(),
        MockTagsService::new(),
        MockUserService::new(),
    );
    let response = app
        .oneshot(multipart_request("test-boundary", true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn friends_profile_pictures_resolve_the_caller_first() {
    let mut users = MockUserService::new();
    users
        .expect_find_by_email()
        .withf(|email| email == "user@example.com")
        .times(1)
        .returning(|email| {
            Ok(UserVo {
                id: 7,
                name: "Olha".to_string(),
                email: email.to_string(),
                role: "ROLE_USER".to_string(),
            })
        });

    let mut habits = MockHabitService::new();
    habits
        .expect_get_friends_assigned_to_habit_profile_pictures()
        .withf(|habit_id, user_id| *habit_id == 3 && *user_id == 7)
        .times(1)
        .returning(|_, _| {
            Ok(vec![UserProfilePictureDto {
                id: 21,
                name: "Friend".to_string(),
                profile_picture_path: "/pictures/21.png".to_string(),
            }])
        });

    let app = with_principal(
        app(habits, MockTagsService::new(), users),
        "user@example.com",
    );
    let response = app
        .oneshot(get("/habit/3/friends/profile-pictures"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["id"], 21);
    assert_eq!(body[0]["profilePicturePath"], "/pictures/21.png");
}

#[tokio::test]
async fn unknown_principal_fails_the_whole_request() {
    let mut users = MockUserService::new();
    users
        .expect_find_by_email()
        .times(1)
        .returning(|email| Err(ServiceError::not_found("User", email)));

    let app = with_principal(
        app(MockHabitService::new(), MockTagsService::new(), users),
        "ghost@example.com",
    );
    let response = app
        .oneshot(get("/habit/3/friends/profile-pictures"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
