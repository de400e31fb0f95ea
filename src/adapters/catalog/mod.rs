//! Catalog adapters: compiled-in respiratory catalog and JSON file loader.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{Disease, KnowledgeBase, KnowledgeError, Symptom};
use crate::ports::KnowledgeSource;

/// (id, code, name)
const SYMPTOMS: [(&str, &str, &str); 7] = [
    ("1", "B1", "Cough (more than 2 weeks)"),
    ("2", "B2", "High fever (>38°C)"),
    ("3", "B3", "Shortness of breath / wheezing"),
    ("4", "B4", "Chest pain"),
    ("5", "B5", "Coughing up blood"),
    ("6", "B6", "Night sweats"),
    ("7", "B7", "Weakness and weight loss"),
];

struct DiseaseRow {
    id: &'static str,
    code: &'static str,
    name: &'static str,
    required: &'static [&'static str],
    description: &'static str,
    treatment: &'static str,
}

const DISEASES: [DiseaseRow; 5] = [
    DiseaseRow {
        id: "p1",
        code: "P1",
        name: "Flu / Common Cold",
        required: &["B2"],
        description: "Mild viral infection of the upper respiratory tract.",
        treatment: "Plenty of rest, drink lots of water, over-the-counter flu symptom relief.",
    },
    DiseaseRow {
        id: "p2",
        code: "P2",
        name: "Asthma",
        required: &["B3", "B4"],
        description: "Chronic condition in which the airways become inflamed and narrow.",
        treatment: "Inhaler, avoid allergy triggers, asthma controller medication.",
    },
    DiseaseRow {
        id: "p3",
        code: "P3",
        name: "Pneumonia",
        required: &["B1", "B2", "B3", "B4"],
        description: "Infection that inflames the air sacs in one or both lungs.",
        treatment: "Antibiotics (if bacterial), cough medicine, complete bed rest.",
    },
    DiseaseRow {
        id: "p4",
        code: "P4",
        name: "Tuberculosis (TB)",
        required: &["B1", "B4", "B5", "B6", "B7"],
        description: "Serious contagious bacterial disease that mainly attacks the lungs.",
        treatment: "Long-term antibiotic treatment (6-9 months) under a doctor's supervision.",
    },
    DiseaseRow {
        id: "p5",
        code: "P5",
        name: "Bronchitis",
        required: &["B1", "B2", "B3"],
        description: "Inflammation of the lining of the bronchial tubes, which carry air to and from the lungs.",
        treatment: "Rest, drink fluids, humidify the air, pain relievers.",
    },
];

/// The compiled-in respiratory catalog (symptoms B1-B7, diseases P1-P5).
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn symptoms() -> Vec<Symptom> {
        SYMPTOMS
            .iter()
            .map(|(id, code, name)| Symptom::new(*id, *code, *name))
            .collect()
    }

    fn diseases() -> Vec<Disease> {
        DISEASES
            .iter()
            .map(|row| Disease {
                id: row.id.to_string(),
                code: row.code.to_string(),
                name: row.name.to_string(),
                required_symptoms: row.required.iter().map(|c| (*c).to_string()).collect(),
                description: row.description.to_string(),
                treatment: row.treatment.to_string(),
            })
            .collect()
    }
}

impl KnowledgeSource for BuiltinCatalog {
    fn describe(&self) -> String {
        "builtin".to_string()
    }

    fn load(&self) -> Result<KnowledgeBase, KnowledgeError> {
        KnowledgeBase::new(Self::symptoms(), Self::diseases())
    }
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    symptoms: Vec<Symptom>,
    diseases: Vec<Disease>,
}

/// Catalog read from a JSON file of the form
/// `{"symptoms": [...], "diseases": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    /// Returns `KnowledgeError::Parse` on malformed JSON, or a validation
    /// error if the catalog is inconsistent.
    pub fn parse(json: &str) -> Result<KnowledgeBase, KnowledgeError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        KnowledgeBase::new(file.symptoms, file.diseases)
    }
}

impl KnowledgeSource for JsonCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<KnowledgeBase, KnowledgeError> {
        let json = std::fs::read_to_string(&self.path)?;
        Self::parse(&json)
    }
}
