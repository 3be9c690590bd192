//! Router assembly and application configuration

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use greencity_web::{
    middleware::cors::CorsConfig, middleware::request_id::request_id_middleware, WebError,
};
use tower_http::trace::TraceLayer;

use crate::{
    context::{AppContext, FactsContext, HabitsContext},
    errors::RestError,
    handlers,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable CORS middleware
    pub enable_cors: bool,
    /// CORS settings, used when CORS is enabled
    pub cors: CorsConfig,
    /// Enable request ID tracking
    pub enable_request_id: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors: CorsConfig::default(),
            enable_request_id: true,
            enable_tracing: true,
        }
    }
}

/// Routes under `/habit`
pub fn habit_routes() -> Router<HabitsContext> {
    Router::new()
        .route("/habit", get(handlers::get_all_habits))
        .route("/habit/custom", post(handlers::add_custom_habit))
        .route("/habit/search", get(handlers::search_habits))
        .route("/habit/tags", get(handlers::get_habit_tags))
        .route("/habit/tags/search", get(handlers::get_habits_by_tags))
        .route("/habit/{id}", get(handlers::get_habit_by_id))
        .route("/habit/{id}/shopping-list", get(handlers::get_shopping_list))
        .route(
            "/habit/{id}/friends/profile-pictures",
            get(handlers::get_friends_assigned_to_habit_profile_pictures),
        )
}

/// Routes under `/facts`
pub fn fact_routes() -> Router<FactsContext> {
    Router::new()
        .route("/facts", get(handlers::get_all_facts).post(handlers::save_fact))
        .route("/facts/random/{habit_id}", get(handlers::get_random_fact_by_habit_id))
        .route("/facts/dayFact/{language_id}", get(handlers::get_fact_of_the_day))
        .route(
            "/facts/{id}",
            delete(handlers::delete_fact).put(handlers::update_fact),
        )
}

/// Create the complete gateway application
pub fn create_app(context: AppContext, config: AppConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health_check))
        .merge(habit_routes().with_state(context.habits))
        .merge(fact_routes().with_state(context.facts))
        .fallback(handle_not_found);

    // Layers apply bottom-up: tracing wraps request ids wraps CORS
    if config.enable_cors {
        app = app.layer(greencity_web::middleware::cors::cors_layer(&config.cors));
    }
    if config.enable_request_id {
        app = app.layer(middleware::from_fn(request_id_middleware));
    }
    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

/// Fallback for unknown routes
async fn handle_not_found() -> RestError {
    WebError::not_found("Resource not found").into()
}
