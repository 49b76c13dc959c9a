//! User service: validation, identifier assignment and store access

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{validate_user_fields, User, UserId, UserRepository};
use crate::domain::{DomainError, IdGenerator};

const USER_NOT_FOUND: &str = "User not found";

/// Request for creating a user or replacing its details
///
/// `None` stands for a field that was missing, null or not a string.
#[derive(Debug, Clone, Default)]
pub struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User service for the store's create/read/update/delete operations
#[derive(Debug)]
pub struct UserService<R: UserRepository, G: IdGenerator> {
    repository: Arc<R>,
    id_generator: Arc<G>,
}

impl<R: UserRepository, G: IdGenerator> UserService<R, G> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, id_generator: Arc<G>) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Create a new user with a freshly generated ID
    pub async fn create(&self, request: UserRequest) -> Result<User, DomainError> {
        let draft = validate_user_fields(request.name.as_deref(), request.email.as_deref())
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let id = UserId::new(self.id_generator.generate())
            .ok_or_else(|| DomainError::validation("Generated user ID is empty"))?;

        let user = self.repository.insert(User::new(id, draft)).await?;
        info!(user_id = %user.id(), "User created");

        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<User, DomainError> {
        let user_id = parse_id(id)?;

        self.repository
            .get(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
    }

    /// Replace a user's name and email
    ///
    /// The payload is validated before the ID is looked up, so an invalid
    /// payload for an unknown ID is a validation error.
    pub async fn update(&self, id: &str, request: UserRequest) -> Result<User, DomainError> {
        let draft = validate_user_fields(request.name.as_deref(), request.email.as_deref())
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let mut user = self.get(id).await?;
        user.replace_details(draft);

        let user = self
            .repository
            .update(&user)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))?;
        info!(user_id = %user.id(), "User updated");

        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let user_id = parse_id(id)?;

        if !self.repository.delete(&user_id).await? {
            return Err(DomainError::not_found(USER_NOT_FOUND));
        }
        info!(user_id = %user_id, "User deleted");

        Ok(())
    }

    /// Count stored users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

/// An empty ID can never match a stored record, so it is reported as not found
fn parse_id(id: &str) -> Result<UserId, DomainError> {
    UserId::new(id).ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
}
