//! User domain
//!
//! Domain types for the user store: the `User` record, its identifier,
//! payload validation and the repository trait backing the store.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserDraft, UserId};
pub use repository::UserRepository;
pub use validation::{validate_user_fields, UserValidationError};
