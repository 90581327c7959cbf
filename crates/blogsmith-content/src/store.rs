//! Content store walking and slug resolution.
//!
//! A [`ContentStore`] is a root directory of content documents. Files are
//! read-only at request time; every operation here is a fresh read of
//! on-disk state with no caching.

use std::path::{Path, PathBuf};

use blogsmith_core::util::slug::DOCUMENT_EXTENSIONS;
use blogsmith_core::{Error, Result};
use walkdir::WalkDir;

/// A directory tree of content documents.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ContentStore {
    /// Create a store rooted at the given directory with the default
    /// document extensions (`mdx`, `md`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DOCUMENT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Override the recognized document extensions.
    ///
    /// Order matters: [`resolve`](Self::resolve) probes extensions in this
    /// order and returns the first that exists.
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// The store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The recognized document extensions.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Recursively enumerate every document file under the root.
    ///
    /// Entries are sorted by file name at each level so the walk order is
    /// stable across platforms. Only files with a recognized extension are
    /// returned.
    pub fn document_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                match e.into_io_error() {
                    Some(io) => Error::io_with_path(io, &path),
                    None => Error::parse(format!("walk failed at {}", path.display())),
                }
            })?;
            if entry.file_type().is_file() && self.is_document(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Read a document's raw contents.
    pub fn read_document(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
    }

    /// Compute a path relative to the store root.
    ///
    /// Falls back to the input when it is not under the root (symlinked
    /// stores), so slugs are still produced rather than erroring.
    pub fn relative_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Resolve slug segments to an existing document path.
    ///
    /// Joins the segments under the root and probes each recognized
    /// extension in order. Returns `None` when no candidate exists; the
    /// caller maps that to a not-found response.
    pub fn resolve(&self, segments: &[String]) -> Option<PathBuf> {
        if segments.is_empty() {
            return None;
        }
        let mut base = self.root.clone();
        for segment in segments {
            // Reject traversal components rather than escaping the store
            if segment == ".." || segment.contains(['/', '\\']) {
                return None;
            }
            base.push(segment);
        }
        for ext in &self.extensions {
            // Append rather than with_extension: a segment like "v1.2" must
            // not have its ".2" treated as an extension
            let mut candidate = base.clone().into_os_string();
            candidate.push(format!(".{ext}"));
            let candidate = PathBuf::from(candidate);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }

    fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|known| known == e))
            .unwrap_or(false)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_doc(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    // ------------------------------------------------------------------------
    // Enumeration tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_document_files_recursive() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "welcome.mdx", "# Welcome");
        write_doc(dir.path(), "python/guide.mdx", "# Guide");
        write_doc(dir.path(), "python/topics/functions.md", "# Functions");
        write_doc(dir.path(), "assets/logo.png", "not a document");

        let store = ContentStore::new(dir.path());
        let files = store.document_files().unwrap();

        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.extension().is_some()));
    }

    #[test]
    fn test_document_files_stable_order() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "b.md", "b");
        write_doc(dir.path(), "a.md", "a");
        write_doc(dir.path(), "c.md", "c");

        let store = ContentStore::new(dir.path());
        let first = store.document_files().unwrap();
        let second = store.document_files().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_extensions() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "a.md", "a");
        write_doc(dir.path(), "b.mdx", "b");

        let store = ContentStore::new(dir.path()).with_extensions(&["md"]);
        let files = store.document_files().unwrap();
        assert_eq!(files.len(), 1);
    }

    // ------------------------------------------------------------------------
    // Resolution tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_resolve_existing() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "python/guide.mdx", "# Guide");

        let store = ContentStore::new(dir.path());
        let segments = vec!["python".to_string(), "guide".to_string()];
        let resolved = store.resolve(&segments).unwrap();
        assert!(resolved.ends_with("python/guide.mdx"));
    }

    #[test]
    fn test_resolve_probes_extensions_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "guide.md", "md version");
        write_doc(dir.path(), "guide.mdx", "mdx version");

        let store = ContentStore::new(dir.path());
        let resolved = store.resolve(&["guide".to_string()]).unwrap();
        assert!(resolved.ends_with("guide.mdx"));
    }

    #[test]
    fn test_resolve_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        assert!(store.resolve(&["nonexistent".to_string(), "slug".to_string()]).is_none());
    }

    #[test]
    fn test_resolve_empty_segments() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        assert!(store.resolve(&[]).is_none());
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "guide.md", "# Guide");

        let store = ContentStore::new(dir.path().join("sub"));
        assert!(store.resolve(&["..".to_string(), "guide".to_string()]).is_none());
    }

    // ------------------------------------------------------------------------
    // Read tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_read_document() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), "a.md", "hello");

        let store = ContentStore::new(dir.path());
        assert_eq!(store.read_document(&dir.path().join("a.md")).unwrap(), "hello");
    }

    #[test]
    fn test_read_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        let err = store.read_document(&dir.path().join("gone.md")).unwrap_err();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        let abs = dir.path().join("python/guide.mdx");
        assert_eq!(store.relative_path(&abs), Path::new("python/guide.mdx"));
    }
}
