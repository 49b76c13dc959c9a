//! Identifier generation backed by random v4 UUIDs

use uuid::Uuid;

use crate::domain::IdGenerator;

/// Generates hyphenated v4 UUID strings
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
