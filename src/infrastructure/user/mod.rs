//! User infrastructure module
//!
//! In-memory user store and the service that validates payloads and
//! assigns identifiers before touching it.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{UserRequest, UserService};
