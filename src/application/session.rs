//! Questionnaire session: selection, view state and derived results.
//!
//! Two views and three transitions:
//!
//! ```text
//!  Selecting --toggle--> Selecting
//!  Selecting --submit--> ShowingResults   (only with a non-empty selection)
//!  any       --reset---> Selecting        (selection and results cleared)
//! ```

use std::sync::Arc;

use crate::domain::{diagnose, DiagnosisResult, Disease, KnowledgeBase, SelectedSymptoms};

/// Which half of the questionnaire is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Selecting,
    ShowingResults,
}

/// State of one questionnaire run.
pub struct Session {
    knowledge: Arc<KnowledgeBase>,
    selected: SelectedSymptoms,
    view: View,
    results: Vec<DiagnosisResult>,
}

impl Session {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            selected: SelectedSymptoms::new(),
            view: View::Selecting,
            results: Vec::new(),
        }
    }

    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn selected(&self) -> &SelectedSymptoms {
        &self.selected
    }

    /// Flip `code` in the selection. Ignored outside the selecting view.
    ///
    /// Returns `true` if the selection changed.
    pub fn toggle(&mut self, code: &str) -> bool {
        if self.view != View::Selecting {
            return false;
        }
        self.selected.toggle(code);
        true
    }

    /// Toggle the `index`-th symptom of the catalog.
    pub fn toggle_index(&mut self, index: usize) -> bool {
        let Some(code) = self.knowledge.symptoms().get(index).map(|s| s.code.clone()) else {
            return false;
        };
        self.toggle(&code)
    }

    /// Run the engine and switch to results. No-op on an empty selection.
    ///
    /// Returns `true` if the view changed to results.
    pub fn submit(&mut self) -> bool {
        if self.view != View::Selecting || self.selected.is_empty() {
            return false;
        }

        self.results = diagnose(&self.selected, self.knowledge.diseases());
        self.view = View::ShowingResults;

        tracing::info!(
            selected = self.selected.len(),
            candidates = self.results.len(),
            top = self.top().map(|r| r.disease.code.as_str()).unwrap_or("none"),
            "Diagnosis complete"
        );
        true
    }

    /// Clear selection and results and go back to selecting.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.results.clear();
        self.view = View::Selecting;
        tracing::debug!("Session reset");
    }

    /// Ranked results of the last submit (empty while selecting).
    #[must_use]
    pub fn results(&self) -> &[DiagnosisResult] {
        &self.results
    }

    /// The highest-ranked candidate, if any.
    #[must_use]
    pub fn top(&self) -> Option<&DiagnosisResult> {
        self.results.first()
    }

    /// Names of the selected symptoms, in catalog order.
    #[must_use]
    pub fn selected_names(&self) -> Vec<String> {
        self.knowledge
            .symptoms()
            .iter()
            .filter(|s| self.selected.contains(&s.code))
            .map(|s| s.name.clone())
            .collect()
    }

    /// What to send to the advice service: the top disease and the names of
    /// its matched symptoms. `None` when there is no top result.
    #[must_use]
    pub fn advice_request(&self) -> Option<(Disease, Vec<String>)> {
        let top = self.top()?;
        let names = self
            .knowledge
            .symptom_names(top.matched_symptoms.iter().map(String::as_str));
        Some((top.disease.clone(), names))
    }
}
