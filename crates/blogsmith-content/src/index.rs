//! Content index builder.
//!
//! [`build_index`] walks the content store, extracts front matter from every
//! document, and produces a deterministic catalog of [`PostMeta`] records.
//! The index is recomputed fresh on every call — callers own the result and
//! pass it down; there is no cached singleton.
//!
//! A document that cannot be read or whose front matter is malformed is
//! skipped with a warning so one bad file never blanks the whole catalog.

use blogsmith_core::util::slug::slug_from_rel_path;
use blogsmith_core::Result;
use serde::{Deserialize, Serialize};

use crate::frontmatter::extract_frontmatter;
use crate::store::ContentStore;

/// Catalog metadata derived from one content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Document title from front matter (empty when absent).
    pub title: String,
    /// Slug: explicit front matter override, else the store-relative path
    /// with its extension stripped and separators normalized to `/`.
    pub slug: String,
    /// Short description (empty when absent).
    pub description: String,
    /// Store-relative file path, separators normalized to `/`.
    pub file_path: String,
}

/// Build the content index: one [`PostMeta`] per readable document, sorted
/// by slug ascending with title ascending as the tie-break.
///
/// The walk itself is fallible (an unreadable store root is an error), but
/// per-document failures are skipped with a warning rather than propagated,
/// so navigation surfaces degrade instead of crashing.
pub fn build_index(store: &ContentStore) -> Result<Vec<PostMeta>> {
    let files = store.document_files()?;
    let mut catalog = Vec::with_capacity(files.len());

    for file in files {
        let source = match store.read_document(&file) {
            Ok(source) => source,
            Err(e) => {
                log::warn!("skipping unreadable document {}: {e}", file.display());
                continue;
            }
        };

        let split = extract_frontmatter(&source);
        let fm = match split.post_frontmatter() {
            Ok(fm) => fm,
            Err(e) => {
                log::warn!("skipping document with bad front matter {}: {e}", file.display());
                continue;
            }
        };

        let rel = store.relative_path(&file);
        let default_slug = slug_from_rel_path(rel);
        let file_path = rel
            .components()
            .filter_map(|c| c.as_os_str().to_str())
            .collect::<Vec<&str>>()
            .join("/");

        catalog.push(PostMeta {
            title: fm.title,
            slug: fm.slug.unwrap_or(default_slug),
            description: fm.description.unwrap_or_default(),
            file_path,
        });
    }

    // Stable order: slug ascending, title breaks ties
    catalog.sort_by(|a, b| a.slug.cmp(&b.slug).then_with(|| a.title.cmp(&b.title)));
    Ok(catalog)
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

    fn seeded_store() -> (tempfile::TempDir, ContentStore) {
        let dir = tempfile::tempdir().unwrap();
        write_doc(
            dir.path(),
            "python/guide.mdx",
            "---\ntitle: Python Guide\ndescription: Start here\n---\n\n# Guide",
        );
        write_doc(
            dir.path(),
            "python/topics/functions.mdx",
            "---\ntitle: Functions\n---\n\n# Functions",
        );
        write_doc(
            dir.path(),
            "javascript/guide.mdx",
            "---\ntitle: JS Overview\nslug: js/overview\n---\n\n# Overview",
        );
        let store = ContentStore::new(dir.path());
        (dir, store)
    }

    // ------------------------------------------------------------------------
    // Catalog construction tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_index_length_matches_file_count() {
        let (_dir, store) = seeded_store();
        let catalog = build_index(&store).unwrap();
        assert_eq!(catalog.len(), store.document_files().unwrap().len());
    }

    #[test]
    fn test_slug_defaults_to_relative_path() {
        let (_dir, store) = seeded_store();
        let catalog = build_index(&store).unwrap();
        assert!(catalog.iter().any(|m| m.slug == "python/guide"));
        assert!(catalog.iter().any(|m| m.slug == "python/topics/functions"));
    }

    #[test]
    fn test_explicit_slug_overrides_path() {
        let (_dir, store) = seeded_store();
        let catalog = build_index(&store).unwrap();
        let js = catalog.iter().find(|m| m.title == "JS Overview").unwrap();
        assert_eq!(js.slug, "js/overview");
        assert_eq!(js.file_path, "javascript/guide.mdx");
    }

    #[test]
    fn test_sorted_by_slug_then_title() {
        let (_dir, store) = seeded_store();
        let catalog = build_index(&store).unwrap();
        for pair in catalog.windows(2) {
            assert!(
                pair[0].slug < pair[1].slug
                    || (pair[0].slug == pair[1].slug && pair[0].title <= pair[1].title)
            );
        }
    }

    #[test]
    fn test_equal_slugs_tie_break_on_title() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "b.mdx", "---\ntitle: Beta\nslug: shared\n---\nx");
        write_doc(dir.path(), "a.mdx", "---\ntitle: Alpha\nslug: shared\n---\nx");

        let catalog = build_index(&ContentStore::new(dir.path())).unwrap();
        assert_eq!(catalog[0].title, "Alpha");
        assert_eq!(catalog[1].title, "Beta");
    }

    #[test]
    fn test_idempotent_over_unchanged_store() {
        let (_dir, store) = seeded_store();
        let first = build_index(&store).unwrap();
        let second = build_index(&store).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_frontmatter_yields_empty_fields() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "bare.md", "# No front matter at all");

        let catalog = build_index(&ContentStore::new(dir.path())).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].title, "");
        assert_eq!(catalog[0].slug, "bare");
        assert_eq!(catalog[0].description, "");
    }

    // ------------------------------------------------------------------------
    // Failure isolation tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_malformed_frontmatter_does_not_hide_others() {
        let (dir, store) = seeded_store();
        // Invalid YAML between delimiters: tolerated as "no front matter"
        write_doc(dir.path(), "broken.mdx", "---\n{{not: yaml: at all}}\n---\nBody");

        let catalog = build_index(&store).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.iter().any(|m| m.slug == "broken"));
        assert!(catalog.iter().any(|m| m.slug == "python/guide"));
    }

    #[test]
    fn test_mistyped_frontmatter_skipped_not_fatal() {
        let (dir, store) = seeded_store();
        // Valid YAML but title is a mapping: deserialization fails, file skipped
        write_doc(dir.path(), "mistyped.mdx", "---\ntitle:\n  nested: map\n---\nBody");

        let catalog = build_index(&store).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.iter().any(|m| m.slug == "mistyped"));
    }

    #[test]
    fn test_unreadable_document_skipped() {
        let (dir, store) = seeded_store();
        // Invalid UTF-8 makes read_to_string fail for this file only
        fs::write(dir.path().join("binary.mdx"), [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let catalog = build_index(&store).unwrap();
        assert_eq!(catalog.len(), 3);
    }
}
