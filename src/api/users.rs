//! User endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::User;
use crate::infrastructure::user::UserRequest;

/// Body of POST /users and PUT /users/{id}
///
/// Fields stay untyped here so that a missing, null or non-string value is
/// reported as a validation error instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub email: Value,
}

impl From<UserPayload> for UserRequest {
    fn from(payload: UserPayload) -> Self {
        Self {
            name: payload.name.as_str().map(String::from),
            email: payload.email.as_str().map(String::from),
        }
    }
}

/// User as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!("Creating user");

    let user = state.user_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Getting user");

    let user = state.user_service.get(&user_id).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %user_id, "Updating user");

    let user = state.user_service.update(&user_id, payload.into()).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = %user_id, "Deleting user");

    state.user_service.delete(&user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_deserialization() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"name": "Alice", "email": "a@x.com"}"#).unwrap();
        let request = UserRequest::from(payload);

        assert_eq!(request.name.as_deref(), Some("Alice"));
        assert_eq!(request.email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_payload_missing_fields() {
        let payload: UserPayload = serde_json::from_str("{}").unwrap();
        let request = UserRequest::from(payload);

        assert!(request.name.is_none());
        assert!(request.email.is_none());
    }

    #[test]
    fn test_payload_non_string_fields() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"name": 42, "email": null, "extra": true}"#).unwrap();
        let request = UserRequest::from(payload);

        assert!(request.name.is_none());
        assert!(request.email.is_none());
    }
}
