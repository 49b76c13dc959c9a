//! User validation utilities

use thiserror::Error;

use super::entity::UserDraft;

/// Errors that can occur during user payload validation
///
/// Both variants render the same message so clients cannot tell which field
/// tripped the check.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Name and email are required and must be strings")]
    MissingName,

    #[error("Name and email are required and must be strings")]
    MissingEmail,
}

/// Validate a name/email pair and produce the trimmed draft to store
///
/// Rules:
/// - Both fields must be present strings (`None` covers missing, null and
///   non-string values)
/// - Neither may be empty
///
/// Trimming happens after the check, so a whitespace-only value passes and
/// is stored as the empty string.
pub fn validate_user_fields(
    name: Option<&str>,
    email: Option<&str>,
) -> Result<UserDraft, UserValidationError> {
    let name = name
        .filter(|n| !n.is_empty())
        .ok_or(UserValidationError::MissingName)?;
    let email = email
        .filter(|e| !e.is_empty())
        .ok_or(UserValidationError::MissingEmail)?;

    Ok(UserDraft {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_are_trimmed() {
        let draft = validate_user_fields(Some("  Alice "), Some("a@x.com\n")).unwrap();
        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.email, "a@x.com");
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            validate_user_fields(None, Some("a@x.com")),
            Err(UserValidationError::MissingName)
        );
    }

    #[test]
    fn test_missing_email() {
        assert_eq!(
            validate_user_fields(Some("Alice"), None),
            Err(UserValidationError::MissingEmail)
        );
    }

    #[test]
    fn test_empty_strings_rejected() {
        assert!(validate_user_fields(Some(""), Some("a@x.com")).is_err());
        assert!(validate_user_fields(Some("Alice"), Some("")).is_err());
    }

    #[test]
    fn test_whitespace_only_passes_and_becomes_empty() {
        let draft = validate_user_fields(Some("   "), Some("\t")).unwrap();
        assert_eq!(draft.name, "");
        assert_eq!(draft.email, "");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            UserValidationError::MissingEmail.to_string(),
            "Name and email are required and must be strings"
        );
    }
}
