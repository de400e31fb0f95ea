//! The user's symptom selection for one session.

use std::collections::BTreeSet;

/// Set of symptom codes chosen by the user.
///
/// Only changed through [`toggle`](Self::toggle) and [`clear`](Self::clear);
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedSymptoms {
    codes: BTreeSet<String>,
}

impl SelectedSymptoms {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `code`. Returns `true` if the code is now selected.
    pub fn toggle(&mut self, code: &str) -> bool {
        if self.codes.remove(code) {
            false
        } else {
            self.codes.insert(code.to_string());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn clear(&mut self) {
        self.codes.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectedSymptoms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
