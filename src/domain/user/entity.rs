//! User entity and related types

use serde::{Deserialize, Serialize};

/// User identifier - opaque, non-empty, assigned by the store on creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId, rejecting the empty string
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();

        if id.is_empty() {
            return None;
        }

        Some(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("User ID cannot be empty")
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated and trimmed name/email pair, input to create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

/// A user record held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Create a new user from a validated draft
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace name and email; the identifier is never touched
    pub fn replace_details(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.email = draft.email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_user_id_rejects_empty() {
        assert!(UserId::new("").is_none());
        assert_eq!(UserId::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_user_id_deserialization_rejects_empty() {
        let result: Result<UserId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_replace_details_keeps_id() {
        let id = UserId::new("user-1").unwrap();
        let mut user = User::new(id.clone(), draft("Alice", "a@x.com"));

        user.replace_details(draft("Bob", "b@x.com"));

        assert_eq!(user.id(), &id);
        assert_eq!(user.name(), "Bob");
        assert_eq!(user.email(), "b@x.com");
    }

    #[test]
    fn test_user_serialization_shape() {
        let user = User::new(UserId::new("user-1").unwrap(), draft("Alice", "a@x.com"));
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "user-1", "name": "Alice", "email": "a@x.com"})
        );
    }
}
