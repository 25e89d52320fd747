use std::collections::HashSet;

/// Insertion-ordered, duplicate-free list of suggestions.
///
/// The set is only a membership guard; iteration order always comes from
/// the vector.
#[derive(Debug, Default)]
pub struct SuggestionSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl SuggestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the suggestion was already present.
    pub fn insert(&mut self, suggestion: impl Into<String>) -> bool {
        let suggestion = suggestion.into();
        if !self.seen.insert(suggestion.clone()) {
            return false;
        }
        self.ordered.push(suggestion);
        true
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
