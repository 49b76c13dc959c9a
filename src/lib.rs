//! User Store Service
//!
//! A small HTTP service exposing create/read/update/delete operations over
//! an in-memory collection of user records.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    id::UuidGenerator,
    user::{InMemoryUserRepository, UserService},
};
use tracing::info;

/// Create the application state with an empty user store
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let user_service = UserService::new(repository, Arc::new(UuidGenerator::new()));

    info!("Using in-memory user store");

    AppState::new(Arc::new(user_service))
}

/// Create the HTTP application with a fresh store
pub fn create_app() -> axum::Router {
    api::create_router(create_app_state())
}
