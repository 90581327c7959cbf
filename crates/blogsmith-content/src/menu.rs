//! The hand-curated category menu.
//!
//! The menu is a source-controlled JSON file mapping category names to
//! ordered lists of `{title, path}` entries:
//!
//! ```json
//! {
//!   "python": [
//!     { "title": "Guide", "path": "python/guide.md" },
//!     { "title": "Functions", "path": "python/topics/functions.md" }
//!   ],
//!   "javascript": [
//!     { "title": "Overview", "path": "javascript/guide.md" }
//!   ]
//! }
//! ```
//!
//! Insertion order is the navigation display order, so categories and
//! entries are kept in an [`IndexMap`]. The menu is authoritative for
//! grouping and ordering; it is never cross-checked against the content
//! store at load time. A dangling `path` surfaces as a not-found when a
//! reader navigates to it.

use std::path::Path;

use blogsmith_core::util::slug::{slug_to_segments, strip_document_extension};
use blogsmith_core::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One navigation entry within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Display title.
    pub title: String,
    /// Store-relative document path, extension included.
    pub path: String,
}

/// A [`MenuEntry`] tagged with its owning category, for search indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatMenuEntry {
    /// Display title.
    pub title: String,
    /// Store-relative document path, extension included.
    pub path: String,
    /// Owning category name.
    pub category: String,
}

/// The category menu: an insertion-ordered mapping from category name to
/// its entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMenu {
    categories: IndexMap<String, Vec<MenuEntry>>,
}

impl CategoryMenu {
    /// Parse a menu from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::parse(format!("invalid menu JSON: {e}")))
    }

    /// Load a menu from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_json(&raw)
    }

    /// Category names in display order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Entries for one category, in display order.
    pub fn entries(&self, category: &str) -> Option<&[MenuEntry]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Iterate `(category, entries)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MenuEntry])> {
        self.categories
            .iter()
            .map(|(category, entries)| (category.as_str(), entries.as_slice()))
    }

    /// Total entry count across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Whether the menu has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten the menu for search indexing: every entry tagged with its
    /// owning category, in display order.
    pub fn flatten(&self) -> Vec<FlatMenuEntry> {
        let mut items = Vec::with_capacity(self.len());
        for (category, entries) in &self.categories {
            for entry in entries {
                items.push(FlatMenuEntry {
                    title: entry.title.clone(),
                    path: entry.path.clone(),
                    category: category.clone(),
                });
            }
        }
        items
    }

    /// Slug segments for every menu entry (extension stripped, split on `/`).
    ///
    /// This is the set of routes the menu promises; whether each one
    /// resolves in the store is only discovered on render.
    pub fn slug_segments(&self) -> Vec<Vec<String>> {
        self.categories
            .values()
            .flatten()
            .map(|entry| slug_to_segments(strip_document_extension(&entry.path)))
            .collect()
    }

    /// Reverse lookup: find the menu entry whose path corresponds to the
    /// given slug segments.
    pub fn entry_for_slug(&self, segments: &[String]) -> Option<FlatMenuEntry> {
        let slug = segments.join("/");
        for (category, entries) in &self.categories {
            for entry in entries {
                if strip_document_extension(&entry.path) == slug {
                    return Some(FlatMenuEntry {
                        title: entry.title.clone(),
                        path: entry.path.clone(),
                        category: category.clone(),
                    });
                }
            }
        }
        None
    }
}

// ============================================================================
// Tests
// ============================================================================
