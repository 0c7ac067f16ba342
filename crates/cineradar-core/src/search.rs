//! Suggestion list state for the editor's title lookup.
//!
//! The timing side (debounce timer, sequence numbers shared with async
//! tasks) lives in the runtime crate. This module only decides whether a
//! title is worth searching and holds the list the user picks from.

use crate::models::{MediaType, Suggestion};

/// Titles shorter than this (in characters, trimmed) never trigger a search.
pub const MIN_QUERY_LEN: usize = 3;

/// Upper bound on suggestions shown under the title field.
pub const MAX_SUGGESTIONS: usize = 5;

/// One scheduled lookup. `seq` orders queries; only the latest one counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub seq: u64,
    pub media_type: MediaType,
    pub text: String,
}

/// Whether `text` is long enough to look up.
pub fn is_searchable(text: &str, min_len: usize) -> bool {
    text.trim().chars().count() >= min_len
}

/// Where the suggestion lookup stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    /// A lookup is scheduled or in flight.
    Waiting,
}

/// The suggestion list under the editor's title field.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    items: Vec<Suggestion>,
    phase: SearchPhase,
    limit: usize,
}

impl Suggestions {
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            phase: SearchPhase::Idle,
            limit,
        }
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// A lookup was scheduled; keep showing the previous list until it lands.
    pub fn waiting(&mut self) {
        self.phase = SearchPhase::Waiting;
    }

    /// Store results from the latest lookup, keeping at most `limit`.
    pub fn resolve(&mut self, mut results: Vec<Suggestion>) {
        results.truncate(self.limit);
        self.items = results;
        self.phase = SearchPhase::Idle;
    }

    /// Drop everything, e.g. after a failed lookup or a too-short title.
    pub fn clear(&mut self) {
        self.items.clear();
        self.phase = SearchPhase::Idle;
    }

    /// Take the suggestion at `index` and empty the list in the same step.
    pub fn take(&mut self, index: usize) -> Option<Suggestion> {
        if index >= self.items.len() {
            return None;
        }
        let picked = self.items.swap_remove(index);
        self.clear();
        Some(picked)
    }
}
