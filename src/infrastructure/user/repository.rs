//! In-memory user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Records live in a `Vec` so insertion order is preserved. Lookups are
/// linear in the record count.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        match users.iter_mut().find(|u| u.id() == user.id()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        match users.iter().position(|u| u.id() == id) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}
