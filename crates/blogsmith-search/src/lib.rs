//! Fuzzy search and category filtering over flattened menu entries.
//!
//! The engine is a pure function over its inputs: given the flattened
//! category menu, a query string, and an optional selected category, it
//! returns the matching entries ranked by match quality. Nothing is cached
//! or maintained incrementally; every query change recomputes from scratch.
//!
//! # Matching model
//!
//! A query is fuzzy-matched against each entry's `title`, `path`, and
//! `category` fields. Scores run from `0.0` (exact) to `1.0` (unrelated);
//! entries above the acceptance threshold (default `0.3`) are rejected.
//! Matching tolerates small typos and partial words but rejects unrelated
//! terms.
//!
//! # Example
//!
//! ```rust
//! use blogsmith_content::FlatMenuEntry;
//! use blogsmith_search::search;
//!
//! let entries = vec![FlatMenuEntry {
//!     title: "Guide".into(),
//!     path: "python/guide.md".into(),
//!     category: "python".into(),
//! }];
//!
//! let hits = search(&entries, "guide", None);
//! assert_eq!(hits.len(), 1);
//!
//! let misses = search(&entries, "astronomy", None);
//! assert!(misses.is_empty());
//! ```

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod score;

pub use engine::{search, search_grouped, search_with_options, SearchOptions};
pub use score::{entry_score, match_score, DEFAULT_SCORE_THRESHOLD};
