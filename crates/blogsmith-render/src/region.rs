//! Error-boundary style containment of render failures.
//!
//! One bad document must not blank the page around it. [`render_region`]
//! evaluates a fallible render closure and, on failure, degrades to a
//! plain-text fallback scoped to that region, logging the cause. The rest
//! of the page renders normally.

use blogsmith_core::Result;

/// Render one region of a page, containing any failure to that region.
///
/// On success the rendered markup is returned as-is. On failure the error
/// is logged and a plain "Unable to load" message naming the region is
/// returned instead, so callers can drop it into the layout where the
/// region's content would have gone.
///
/// # Example
///
/// ```rust
/// use blogsmith_render::render_region;
///
/// let ok = render_region("blog topics", || Ok("<nav>...</nav>".to_string()));
/// assert_eq!(ok, "<nav>...</nav>");
///
/// let failed = render_region("blog topics", || {
///     Err(blogsmith_core::Error::parse("bad document"))
/// });
/// assert_eq!(failed, "Unable to load blog topics.");
/// ```
pub fn render_region<F>(label: &str, render: F) -> String
where
    F: FnOnce() -> Result<String>,
{
    match render() {
        Ok(markup) => markup,
        Err(e) => {
            log::error!("render failure in region '{label}': {e}");
            format!("Unable to load {label}.")
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
