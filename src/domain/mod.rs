//! Domain layer - Core entities, validation and repository traits

pub mod error;
pub mod id;
pub mod user;

pub use error::DomainError;
pub use id::IdGenerator;
pub use user::{validate_user_fields, User, UserDraft, UserId, UserRepository, UserValidationError};
