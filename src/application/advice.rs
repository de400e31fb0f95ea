//! Advice service: optional AI elaboration on the top candidate.
//!
//! Never fails. Every provider error collapses into [`FALLBACK_ADVICE`] so the
//! already-computed diagnosis is never blocked by the external service.

use std::sync::Arc;

use crate::domain::Disease;
use crate::ports::AdviceProvider;

/// Shown whenever advice cannot be produced.
pub const FALLBACK_ADVICE: &str = "Sorry, the AI consultation service is unavailable right now. \
Please contact your nearest doctor or clinic for an in-person examination.";

/// Build the generation prompt for `disease` and the reported symptom names.
#[must_use]
pub fn build_prompt(disease: &Disease, symptom_names: &[String]) -> String {
    let symptoms = if symptom_names.is_empty() {
        "(none specified)".to_string()
    } else {
        symptom_names.join(", ")
    };

    format!(
        "Act as an empathetic and professional medical assistant.\n\
         \n\
         The user has just used a simple expert system and received a preliminary diagnosis: \
         \"{name}\" ({description}).\n\
         \n\
         Symptoms the user reports: {symptoms}.\n\
         \n\
         Please give a short response (at most 200 words) covering:\n\
         1. Safe first aid or home-care advice.\n\
         2. Red flags: when they MUST see a doctor or go to the emergency room immediately.\n\
         3. A reassuring sentence so they do not panic.\n\
         \n\
         Use simple Markdown formatting.",
        name = disease.name,
        description = disease.description,
    )
}

/// Service for requesting advice from an [`AdviceProvider`].
pub struct AdviceService<P>
where
    P: AdviceProvider,
{
    provider: Arc<P>,
}

impl<P> AdviceService<P>
where
    P: AdviceProvider,
{
    /// Create a new advice service.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Ask for advice on `disease`. Always returns text.
    pub fn advise(&self, disease: &Disease, symptom_names: &[String]) -> String {
        tracing::info!(
            disease = %disease.code,
            symptoms = symptom_names.len(),
            "Requesting advice"
        );

        let prompt = build_prompt(disease, symptom_names);
        match self.provider.generate(&prompt) {
            Ok(text) => {
                tracing::info!(disease = %disease.code, chars = text.len(), "Advice received");
                text
            }
            Err(e) => {
                tracing::warn!("Advice request failed: {}", e);
                FALLBACK_ADVICE.to_string()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::AdviceError;
    use std::sync::Mutex;

    /// Provider returning a canned outcome and recording prompts.
    pub(crate) struct MockProvider {
        outcome: fn() -> Result<String, AdviceError>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl MockProvider {
        pub(crate) fn new(outcome: fn() -> Result<String, AdviceError>) -> Self {
            Self {
                outcome,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl AdviceProvider for MockProvider {
        fn generate(&self, prompt: &str) -> Result<String, AdviceError> {
            self.prompts
                .lock()
                .expect("prompts lock")
                .push(prompt.to_string());
            (self.outcome)()
        }
    }

    fn pneumonia() -> Disease {
        Disease {
            id: "p3".to_string(),
            code: "P3".to_string(),
            name: "Pneumonia".to_string(),
            required_symptoms: vec!["B1".to_string(), "B2".to_string()],
            description: "Lung infection.".to_string(),
            treatment: "Antibiotics.".to_string(),
        }
    }

    fn names() -> Vec<String> {
        vec!["Chest pain".to_string(), "High fever (>38°C)".to_string()]
    }

    #[test]
    fn test_prompt_embeds_disease_and_symptoms() {
        let prompt = build_prompt(&pneumonia(), &names());
        assert!(prompt.contains("\"Pneumonia\" (Lung infection.)"));
        assert!(prompt.contains("Chest pain, High fever (>38°C)"));
        assert!(prompt.contains("200 words"));
        assert!(prompt.contains("Red flags"));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn test_advise_returns_provider_text() {
        let provider = Arc::new(MockProvider::new(|| Ok("Stay hydrated.".to_string())));
        let service = AdviceService::new(provider.clone());

        assert_eq!(service.advise(&pneumonia(), &names()), "Stay hydrated.");
        let prompts = provider.prompts.lock().expect("prompts lock");
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Pneumonia"));
    }

    #[test]
    fn test_network_failure_resolves_to_fallback() {
        let service = AdviceService::new(Arc::new(MockProvider::new(|| {
            Err(AdviceError::Connection("http://127.0.0.1:9".to_string()))
        })));
        assert_eq!(service.advise(&pneumonia(), &names()), FALLBACK_ADVICE);
    }

    #[test]
    fn test_every_failure_mode_collapses_to_fallback() {
        let failures: [fn() -> Result<String, AdviceError>; 5] = [
            || Err(AdviceError::MissingCredential),
            || Err(AdviceError::Timeout(30)),
            || {
                Err(AdviceError::Status {
                    status: 500,
                    body: String::new(),
                })
            },
            || Err(AdviceError::ResponseParsing("bad".to_string())),
            || Err(AdviceError::EmptyResponse),
        ];

        for outcome in failures {
            let service = AdviceService::new(Arc::new(MockProvider::new(outcome)));
            assert_eq!(service.advise(&pneumonia(), &[]), FALLBACK_ADVICE);
        }
    }
}
