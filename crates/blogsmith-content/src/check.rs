//! Menu-to-store consistency diagnostics.
//!
//! The menu and the content store are deliberately independent sources of
//! truth, so a menu entry can point at a document that does not exist. That
//! is never detected proactively by the engine; [`check_menu`] is an
//! optional, non-blocking diagnostic for content-ops tooling. Its findings
//! are warnings, not errors.

use blogsmith_core::util::slug::{slug_to_segments, strip_document_extension};
use serde::{Deserialize, Serialize};

use crate::menu::CategoryMenu;
use crate::store::ContentStore;

/// A menu entry whose path does not resolve in the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingEntry {
    /// Owning category.
    pub category: String,
    /// Entry title.
    pub title: String,
    /// The unresolvable menu path.
    pub path: String,
}

/// Report every menu entry that does not resolve to a store document.
///
/// An empty report means the menu and store agree. Findings mean a reader
/// following that entry would hit a not-found page.
pub fn check_menu(store: &ContentStore, menu: &CategoryMenu) -> Vec<DanglingEntry> {
    let mut dangling = Vec::new();
    for (category, entries) in menu.iter() {
        for entry in entries {
            let segments = slug_to_segments(strip_document_extension(&entry.path));
            if store.resolve(&segments).is_none() {
                log::warn!(
                    "menu entry '{}' ({category}) points at missing document {}",
                    entry.title,
                    entry.path
                );
                dangling.push(DanglingEntry {
                    category: category.to_string(),
                    title: entry.title.clone(),
                    path: entry.path.clone(),
                });
            }
        }
    }
    dangling
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_doc(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    const MENU_JSON: &str = r#"{
        "python": [
            { "title": "Guide", "path": "python/guide.md" },
            { "title": "Ghost", "path": "python/ghost.md" }
        ]
    }"#;

    #[test]
    fn test_consistent_menu_reports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "python/guide.md", "# Guide");
        write_doc(dir.path(), "python/ghost.md", "# Ghost");

        let store = ContentStore::new(dir.path());
        let menu = CategoryMenu::from_json(MENU_JSON).unwrap();
        assert!(check_menu(&store, &menu).is_empty());
    }

    #[test]
    fn test_dangling_entry_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "python/guide.md", "# Guide");

        let store = ContentStore::new(dir.path());
        let menu = CategoryMenu::from_json(MENU_JSON).unwrap();
        let dangling = check_menu(&store, &menu);

        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].title, "Ghost");
        assert_eq!(dangling[0].category, "python");
    }

    #[test]
    fn test_menu_extension_mismatch_still_resolves() {
        // Menu says .md but only an .mdx file exists; resolution probes
        // both extensions, so this is not dangling
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "python/guide.mdx", "# Guide");
        write_doc(dir.path(), "python/ghost.mdx", "# Ghost");

        let store = ContentStore::new(dir.path());
        let menu = CategoryMenu::from_json(MENU_JSON).unwrap();
        assert!(check_menu(&store, &menu).is_empty());
    }
}
