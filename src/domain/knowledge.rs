//! Knowledge base: the immutable symptom and disease catalog.

use std::collections::HashSet;

use super::{Disease, Symptom};

/// Errors raised while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Duplicate symptom code: {0}")]
    DuplicateSymptom(String),

    #[error("Duplicate disease code: {0}")]
    DuplicateDisease(String),

    #[error("Disease {0} has no required symptoms")]
    EmptyRequirements(String),

    #[error("Disease {disease} requires unknown symptom {symptom}")]
    UnknownSymptom { disease: String, symptom: String },

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only symptom and disease catalog.
///
/// Built once at startup and shared behind an `Arc`; there are no mutating
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    symptoms: Vec<Symptom>,
    diseases: Vec<Disease>,
}

impl KnowledgeBase {
    /// Build a validated catalog.
    ///
    /// # Errors
    /// Returns `KnowledgeError` if codes repeat, a disease has no required
    /// symptoms, or a disease refers to a symptom missing from the catalog.
    pub fn new(symptoms: Vec<Symptom>, diseases: Vec<Disease>) -> Result<Self, KnowledgeError> {
        let kb = Self { symptoms, diseases };
        kb.validate()?;
        Ok(kb)
    }

    fn validate(&self) -> Result<(), KnowledgeError> {
        let mut symptom_codes = HashSet::with_capacity(self.symptoms.len());
        for symptom in &self.symptoms {
            if !symptom_codes.insert(symptom.code.as_str()) {
                return Err(KnowledgeError::DuplicateSymptom(symptom.code.clone()));
            }
        }

        let mut disease_codes = HashSet::with_capacity(self.diseases.len());
        for disease in &self.diseases {
            if !disease_codes.insert(disease.code.as_str()) {
                return Err(KnowledgeError::DuplicateDisease(disease.code.clone()));
            }
            if disease.required_symptoms.is_empty() {
                return Err(KnowledgeError::EmptyRequirements(disease.code.clone()));
            }
            if let Some(missing) = disease
                .required_symptoms
                .iter()
                .find(|code| !symptom_codes.contains(code.as_str()))
            {
                return Err(KnowledgeError::UnknownSymptom {
                    disease: disease.code.clone(),
                    symptom: missing.clone(),
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    #[must_use]
    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    #[must_use]
    pub fn symptom(&self, code: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.code == code)
    }

    #[must_use]
    pub fn disease(&self, code: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.code == code)
    }

    /// Display names for `codes`, in the order given. Unknown codes fall back
    /// to the code itself.
    #[must_use]
    pub fn symptom_names<'a, I>(&self, codes: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        codes
            .into_iter()
            .map(|code| {
                self.symptom(code)
                    .map_or_else(|| code.to_string(), |s| s.name.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptoms() -> Vec<Symptom> {
        vec![
            Symptom::new("1", "B1", "Cough"),
            Symptom::new("2", "B2", "Fever"),
        ]
    }

    fn disease(code: &str, required: &[&str]) -> Disease {
        Disease {
            id: code.to_lowercase(),
            code: code.to_string(),
            name: code.to_string(),
            required_symptoms: required.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            treatment: String::new(),
        }
    }

    #[test]
    fn test_valid_catalog() {
        let kb = KnowledgeBase::new(symptoms(), vec![disease("P1", &["B1", "B2"])])
            .expect("Should validate");
        assert_eq!(kb.symptoms().len(), 2);
        assert_eq!(kb.disease("P1").map(|d| d.name.as_str()), Some("P1"));
        assert!(kb.disease("P9").is_none());
    }

    #[test]
    fn test_rejects_duplicate_symptom() {
        let mut s = symptoms();
        s.push(Symptom::new("3", "B1", "Again"));
        let err = KnowledgeBase::new(s, vec![]).unwrap_err();
        assert!(matches!(err, KnowledgeError::DuplicateSymptom(code) if code == "B1"));
    }

    #[test]
    fn test_rejects_duplicate_disease() {
        let err = KnowledgeBase::new(
            symptoms(),
            vec![disease("P1", &["B1"]), disease("P1", &["B2"])],
        )
        .unwrap_err();
        assert!(matches!(err, KnowledgeError::DuplicateDisease(_)));
    }

    #[test]
    fn test_rejects_empty_requirements() {
        let err = KnowledgeBase::new(symptoms(), vec![disease("P1", &[])]).unwrap_err();
        assert!(matches!(err, KnowledgeError::EmptyRequirements(_)));
    }

    #[test]
    fn test_rejects_unknown_symptom() {
        let err = KnowledgeBase::new(symptoms(), vec![disease("P1", &["B1", "B8"])]).unwrap_err();
        match err {
            KnowledgeError::UnknownSymptom { disease, symptom } => {
                assert_eq!(disease, "P1");
                assert_eq!(symptom, "B8");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_symptom_names() {
        let kb = KnowledgeBase::new(symptoms(), vec![]).expect("Should validate");
        assert_eq!(
            kb.symptom_names(["B2", "X1", "B1"]),
            vec!["Fever", "X1", "Cough"]
        );
    }
}
