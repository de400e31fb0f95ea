//! Diagnosis result types.
//!
//! Represents one scored candidate produced by the matching engine.

use serde::{Deserialize, Serialize};

use super::Disease;

/// How strongly a candidate matches the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrength {
    /// Some but at most half of the required symptoms are present
    Partial,
    /// More than half of the required symptoms are present
    Strong,
    /// Every required symptom is present
    Full,
}

impl MatchStrength {
    /// Classify a match percentage.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Full
        } else if percentage > 50.0 {
            Self::Strong
        } else {
            Self::Partial
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Partial => "Partial match - few characteristic symptoms reported",
            Self::Strong => "Strong match - most characteristic symptoms reported",
            Self::Full => "Full match - all characteristic symptoms reported",
        }
    }
}

impl std::fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Partial => write!(f, "PARTIAL"),
            Self::Strong => write!(f, "STRONG"),
            Self::Full => write!(f, "FULL"),
        }
    }
}

/// A disease scored against the user's selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub disease: Disease,

    /// Share of the disease's required symptoms that were selected, 0 to 100
    pub match_percentage: f64,

    /// Required codes that were selected, in the disease's required order
    pub matched_symptoms: Vec<String>,
}

impl DiagnosisResult {
    #[must_use]
    pub fn strength(&self) -> MatchStrength {
        MatchStrength::from_percentage(self.match_percentage)
    }

    /// Percentage rounded to a whole number, as displayed.
    #[must_use]
    pub fn rounded_percentage(&self) -> u16 {
        self.match_percentage.round().clamp(0.0, 100.0) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(percentage: f64) -> DiagnosisResult {
        DiagnosisResult {
            disease: Disease {
                id: "p1".to_string(),
                code: "P1".to_string(),
                name: "Flu".to_string(),
                required_symptoms: vec!["B2".to_string()],
                description: String::new(),
                treatment: String::new(),
            },
            match_percentage: percentage,
            matched_symptoms: vec![],
        }
    }

    #[test]
    fn test_strength_from_percentage() {
        assert_eq!(result(100.0).strength(), MatchStrength::Full);
        assert_eq!(result(66.7).strength(), MatchStrength::Strong);
        assert_eq!(result(50.0).strength(), MatchStrength::Partial);
        assert_eq!(result(20.0).strength(), MatchStrength::Partial);
    }

    #[test]
    fn test_rounded_percentage() {
        assert_eq!(result(100.0 / 3.0).rounded_percentage(), 33);
        assert_eq!(result(200.0 / 3.0).rounded_percentage(), 67);
        assert_eq!(result(100.0).rounded_percentage(), 100);
    }
}
