//! Knowledge source port: Trait for obtaining the symptom/disease catalog.
//!
//! The engine only ever sees a validated `KnowledgeBase`; where it came from
//! (compiled-in table, JSON file) is an adapter concern.

use crate::domain::{KnowledgeBase, KnowledgeError};

/// Trait for catalog providers.
pub trait KnowledgeSource: Send + Sync {
    /// Short label for logs (e.g. `"builtin"`, a file path).
    fn describe(&self) -> String;

    /// Load and validate the catalog.
    ///
    /// # Errors
    /// Returns `KnowledgeError` if the catalog cannot be read or fails
    /// validation.
    fn load(&self) -> Result<KnowledgeBase, KnowledgeError>;
}
