//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (catalog source, text
//! generation service).

mod advice;
mod knowledge;

pub use advice::{AdviceError, AdviceProvider};
pub use knowledge::KnowledgeSource;
