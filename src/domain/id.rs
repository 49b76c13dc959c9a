//! Identifier generation seam

#[cfg(test)]
use mockall::automock;

/// Source of fresh, collision-resistant record identifiers
#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier that has not been handed out before
    fn generate(&self) -> String;
}
