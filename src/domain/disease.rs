//! Disease catalog entries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A condition suspected when some of its required symptoms are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disease {
    pub id: String,
    pub code: String,
    pub name: String,

    /// Symptom codes that characterise the disease.
    ///
    /// Treated as a set: repeated codes count once, first occurrence wins
    /// for ordering.
    pub required_symptoms: Vec<String>,

    pub description: String,

    /// Standard treatment recommendation shown with the result.
    pub treatment: String,
}

impl Disease {
    /// Required symptom codes with duplicates removed, in first-occurrence order.
    #[must_use]
    pub fn required_set(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.required_symptoms.len());
        self.required_symptoms
            .iter()
            .map(String::as_str)
            .filter(|code| seen.insert(*code))
            .collect()
    }
}
