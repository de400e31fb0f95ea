//! Symptom catalog entries.

use serde::{Deserialize, Serialize};

/// An observable condition the user can report.
///
/// `code` is the identifier used for matching (e.g. `"B1"`); `id` is only a
/// display/key identifier and never takes part in diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub code: String,
    pub name: String,
}

impl Symptom {
    #[must_use]
    pub fn new(id: impl Into<String>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}
