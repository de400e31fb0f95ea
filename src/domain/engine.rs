//! Forward-chaining match engine.
//!
//! Scores every disease by the share of its required symptoms found in the
//! selection. Partial overlaps are kept on purpose: a disease with one of five
//! symptoms present still shows up, ranked below fuller matches.

use super::{DiagnosisResult, Disease, SelectedSymptoms};

/// Score of `disease` against `selected`: matched required codes and the
/// match percentage. An empty requirement set scores 0.
#[must_use]
pub fn score(disease: &Disease, selected: &SelectedSymptoms) -> (Vec<String>, f64) {
    let required = disease.required_set();
    let matched: Vec<String> = required
        .iter()
        .filter(|code| selected.contains(code))
        .map(|code| (*code).to_string())
        .collect();

    let percentage = if required.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required.len() as f64 * 100.0
    };

    (matched, percentage)
}

/// Rank `diseases` against `selected`.
///
/// Diseases with no matching symptom are left out. The rest are sorted by
/// match percentage, highest first; equal percentages keep catalog order.
#[must_use]
pub fn diagnose(selected: &SelectedSymptoms, diseases: &[Disease]) -> Vec<DiagnosisResult> {
    if selected.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<DiagnosisResult> = diseases
        .iter()
        .filter_map(|disease| {
            let (matched_symptoms, match_percentage) = score(disease, selected);
            (match_percentage > 0.0).then(|| DiagnosisResult {
                disease: disease.clone(),
                match_percentage,
                matched_symptoms,
            })
        })
        .collect();

    // `sort_by` is stable, which keeps ties in catalog order.
    results.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    results
}
