//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Records keep insertion order. Implementations must make `insert`,
/// `update` and `delete` mutually exclusive.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Append a new user
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user in place; `None` when the ID is unknown
    async fn update(&self, user: &User) -> Result<Option<User>, DomainError>;

    /// Delete a user, returning whether it existed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// List all users in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Count users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a user ID exists
    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
