//! Relevance-search state.
//!
//! DESIGN
//! ======
//! Search results live beside, not inside, the canonical list: switching
//! back to the search tab shows whatever was last loaded there, and a
//! failed search retains the prior results. Overlapping searches are
//! resolved by epoch — only the latest issued request may apply.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::Post;

/// State for the search view: query input, scored results, in-flight flag.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// Current query input value.
    pub query: String,
    /// Results of the last successful search, with relevance scores.
    pub results: Vec<Post>,
    /// True while a search is in flight.
    pub loading: bool,
    /// Epoch of the most recently issued search.
    pub epoch: u64,
}

impl SearchState {
    /// Start a search for the current query.
    ///
    /// Returns `None` without touching any state when the query is empty
    /// or whitespace-only — a guard, not an error.
    pub fn begin_search(&mut self) -> Option<u64> {
        if self.query.trim().is_empty() {
            return None;
        }
        self.epoch += 1;
        self.loading = true;
        Some(self.epoch)
    }

    /// Apply a successful search, replacing results wholesale.
    ///
    /// Returns `false` (no state change) for responses superseded by a
    /// newer search.
    pub fn apply_results(&mut self, epoch: u64, results: Vec<Post>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.results = results;
        self.loading = false;
        true
    }

    /// Settle a failed search. Prior results are retained.
    pub fn fail_search(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.loading = false;
        true
    }
}
