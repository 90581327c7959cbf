//! The search/filter engine.
//!
//! Pipeline, per call:
//!
//! 1. empty query → all entries in input order; otherwise fuzzy-score every
//!    entry, drop those above the threshold, and stable-sort by ascending
//!    score (ties keep input order),
//! 2. apply the optional category filter (exact, case-sensitive),
//! 3. optionally partition the result into an insertion-ordered mapping by
//!    category for display.

use blogsmith_content::FlatMenuEntry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::score::{entry_score, DEFAULT_SCORE_THRESHOLD};

/// Tunable search behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Acceptance threshold: entries scoring above this are rejected.
    #[serde(default = "default_threshold")]
    pub score_threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_SCORE_THRESHOLD
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

/// Search with the default options.
///
/// See [`search_with_options`] for the contract.
pub fn search(
    entries: &[FlatMenuEntry],
    query: &str,
    category: Option<&str>,
) -> Vec<FlatMenuEntry> {
    search_with_options(entries, query, category, &SearchOptions::default())
}

/// Search and filter the flattened menu.
///
/// - Empty (or whitespace-only) `query`: the candidate set is `entries`
///   unchanged, in input order.
/// - Non-empty `query`: candidates are fuzzy matches against each entry's
///   title, path, and category, ordered by descending match quality; ties
///   keep input order.
/// - `category`, when present, restricts candidates to that exact category
///   after query filtering.
pub fn search_with_options(
    entries: &[FlatMenuEntry],
    query: &str,
    category: Option<&str>,
    options: &SearchOptions,
) -> Vec<FlatMenuEntry> {
    let mut candidates: Vec<FlatMenuEntry> = if query.trim().is_empty() {
        entries.to_vec()
    } else {
        let mut scored: Vec<(f64, FlatMenuEntry)> = entries
            .iter()
            .map(|entry| (entry_score(query, entry), entry.clone()))
            .filter(|(score, _)| *score <= options.score_threshold)
            .collect();
        // Stable sort keeps input order for equal scores
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));
        scored.into_iter().map(|(_, entry)| entry).collect()
    };

    if let Some(category) = category {
        candidates.retain(|entry| entry.category == category);
    }

    candidates
}

/// Search, then partition the results into an insertion-ordered mapping
/// from category to its member entries.
///
/// Each entry keeps its relative position within its category; categories
/// appear in the order their first entry appears in the filtered sequence.
pub fn search_grouped(
    entries: &[FlatMenuEntry],
    query: &str,
    category: Option<&str>,
    options: &SearchOptions,
) -> IndexMap<String, Vec<FlatMenuEntry>> {
    let filtered = search_with_options(entries, query, category, options);

    let mut grouped: IndexMap<String, Vec<FlatMenuEntry>> = IndexMap::new();
    for entry in filtered {
        grouped.entry(entry.category.clone()).or_default().push(entry);
    }
    grouped
}

// ============================================================================
// Tests
// ============================================================================
