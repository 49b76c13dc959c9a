use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;
use super::types::ApiError;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User store
        .route("/users", post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .fallback(route_not_found)
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn index() -> &'static str {
    "Hello World!"
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
