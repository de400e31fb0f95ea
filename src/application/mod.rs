//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the questionnaire session and the advice request.

mod advice;
mod session;

pub use advice::{build_prompt, AdviceService, FALLBACK_ADVICE};
pub use session::{Session, View};

#[cfg(test)]
pub(crate) use advice::tests::MockProvider;

use crate::domain::KnowledgeBase;
use crate::ports::KnowledgeSource;

/// Load the catalog from `source`, logging where it came from.
///
/// # Errors
/// Returns `RespiraError::Knowledge` if the catalog cannot be loaded or is
/// inconsistent.
pub fn load_knowledge(source: &dyn KnowledgeSource) -> crate::Result<KnowledgeBase> {
    let kb = source.load()?;
    tracing::info!(
        source = %source.describe(),
        symptoms = kb.symptoms().len(),
        diseases = kb.diseases().len(),
        "Knowledge base loaded"
    );
    Ok(kb)
}
