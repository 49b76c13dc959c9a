//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, IdGenerator, User, UserRepository};
use crate::infrastructure::user::{UserRequest, UserService};

/// Application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: UserRequest) -> Result<User, DomainError>;
    async fn get(&self, id: &str) -> Result<User, DomainError>;
    async fn update(&self, id: &str, request: UserRequest) -> Result<User, DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R, G> UserServiceTrait for UserService<R, G>
where
    R: UserRepository + 'static,
    G: IdGenerator + 'static,
{
    async fn create(&self, request: UserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn get(&self, id: &str) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn update(&self, id: &str, request: UserRequest) -> Result<User, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}
