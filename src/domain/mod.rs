//! Domain layer: Core business types and logic.
//!
//! Pure types plus the matching engine. Nothing here performs I/O.

mod diagnosis;
mod disease;
pub mod engine;
mod knowledge;
mod selection;
mod symptom;

pub use diagnosis::{DiagnosisResult, MatchStrength};
pub use disease::Disease;
pub use engine::diagnose;
pub use knowledge::{KnowledgeBase, KnowledgeError};
pub use selection::SelectedSymptoms;
pub use symptom::Symptom;
