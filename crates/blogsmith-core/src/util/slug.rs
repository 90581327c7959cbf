//! Slug derivation utilities.
//!
//! A slug is a URL-path-like identifier for a content document. By default it
//! is the document's store-relative path with the extension stripped and
//! path separators normalized to `/`. Front matter may override it with an
//! explicit `slug` key; that override happens in the index builder, not here.

use std::path::Path;

/// Document extensions recognized by the content store, probed in order.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Derive the default slug from a store-relative path.
///
/// Strips the file extension and normalizes separators to `/`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use blogsmith_core::util::slug::slug_from_rel_path;
///
/// assert_eq!(slug_from_rel_path(Path::new("python/guide.mdx")), "python/guide");
/// assert_eq!(slug_from_rel_path(Path::new("intro.md")), "intro");
/// ```
pub fn slug_from_rel_path(rel: &Path) -> String {
    let joined = rel
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<&str>>()
        .join("/");
    strip_document_extension(&joined).to_string()
}

/// Strip a recognized document extension from a path string.
///
/// Unrecognized extensions are left untouched; a menu path such as
/// `python/guide.md` becomes `python/guide`, but `image.png` is unchanged.
///
/// # Examples
///
/// ```
/// use blogsmith_core::util::slug::strip_document_extension;
///
/// assert_eq!(strip_document_extension("python/guide.md"), "python/guide");
/// assert_eq!(strip_document_extension("python/guide.mdx"), "python/guide");
/// assert_eq!(strip_document_extension("image.png"), "image.png");
/// ```
pub fn strip_document_extension(path: &str) -> &str {
    for ext in DOCUMENT_EXTENSIONS {
        if let Some(stripped) = path.strip_suffix(&format!(".{ext}")) {
            return stripped;
        }
    }
    path
}

/// Split a slug into its ordered path segments.
///
/// Empty segments (from doubled or trailing slashes) are dropped.
///
/// # Examples
///
/// ```
/// use blogsmith_core::util::slug::slug_to_segments;
///
/// assert_eq!(slug_to_segments("python/guide"), vec!["python", "guide"]);
/// assert_eq!(slug_to_segments("intro"), vec!["intro"]);
/// assert!(slug_to_segments("").is_empty());
/// ```
pub fn slug_to_segments(slug: &str) -> Vec<String> {
    slug.split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
