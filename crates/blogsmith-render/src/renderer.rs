//! Slug resolution and end-to-end document rendering.

use blogsmith_content::frontmatter::{extract_frontmatter, PostFrontmatter};
use blogsmith_content::ContentStore;
use blogsmith_core::{Error, Result};

use crate::compile::compile_body;
use crate::scope::interpolate;
use crate::style::StyleMap;

/// A rendered document: its front matter record plus the compiled body.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Front matter with the slug defaulted to the requested segments.
    pub frontmatter: PostFrontmatter,
    /// Compiled HTML body.
    pub html: String,
}

/// Resolve slug segments against the store and render the document.
///
/// Joins the segments under the store root, probing each recognized
/// document extension in order. A slug with no corresponding file yields
/// [`Error::NotFound`]; callers map that to a "page not found" response.
///
/// The document is re-read and re-compiled on every call: the result is a
/// pure function of on-disk state at call time.
///
/// # Errors
///
/// - [`Error::NotFound`] when no candidate path exists
/// - [`Error::Io`] when the file exists but cannot be read
/// - [`Error::Parse`] when the front matter deserializes to the wrong shape;
///   this is scoped to the one requested document and is the caller's cue
///   to degrade just that region (see [`crate::region::render_region`])
pub fn resolve_and_render(
    store: &ContentStore,
    segments: &[String],
    styles: &StyleMap,
) -> Result<Rendered> {
    let path = store
        .resolve(segments)
        .ok_or_else(|| Error::not_found(segments.join("/")))?;

    let source = store.read_document(&path)?;
    let split = extract_frontmatter(&source);
    let mut frontmatter = split.post_frontmatter()?;
    if frontmatter.slug.is_none() {
        frontmatter.slug = Some(segments.join("/"));
    }

    let body = interpolate(split.body(), &frontmatter.scope_values());
    let html = compile_body(&body, styles);

    Ok(Rendered { frontmatter, html })
}

// ============================================================================
// Tests
// ============================================================================
