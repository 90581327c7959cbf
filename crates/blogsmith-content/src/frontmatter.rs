//! YAML front matter extraction from content documents.
//!
//! Front matter is metadata at the start of a document, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Python Guide
//! slug: python/guide
//! description: Getting started with Python
//! ---
//!
//! # Guide
//!
//! The body of the document starts here.
//! ```
//!
//! The recognized keys are `title`, `slug`, and `description`; all other
//! keys pass through untouched and become the renderer's initial variable
//! scope.
//!
//! # Usage
//!
//! ```rust
//! use blogsmith_content::frontmatter::extract_frontmatter;
//!
//! let content = "---\ntitle: Test\n---\n\nBody";
//! let split = extract_frontmatter(content);
//!
//! assert!(split.has_frontmatter());
//! assert_eq!(split.get_str("title"), Some("Test"));
//! assert_eq!(split.body().trim(), "Body");
//! ```

use std::collections::BTreeMap;

use blogsmith_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Typed front matter for a blog post.
///
/// Missing `title` defaults to the empty string, matching the catalog's
/// behavior for untitled documents. Keys beyond the recognized three are
/// collected into `extra` and exposed to the renderer as scope variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostFrontmatter {
    /// Document title.
    #[serde(default)]
    pub title: String,
    /// Explicit slug override; `None` means derive from the file path.
    #[serde(default)]
    pub slug: Option<String>,
    /// Short description for listings and metadata.
    #[serde(default)]
    pub description: Option<String>,
    /// All unrecognized keys, passed through as renderer scope.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PostFrontmatter {
    /// Scalar scope values for body interpolation, keyed by front matter key.
    ///
    /// Includes the recognized keys plus every extra key whose value is a
    /// string, number, or boolean. Sequences and mappings are skipped.
    pub fn scope_values(&self) -> BTreeMap<String, String> {
        let mut scope = BTreeMap::new();
        if !self.title.is_empty() {
            scope.insert("title".to_string(), self.title.clone());
        }
        if let Some(ref slug) = self.slug {
            scope.insert("slug".to_string(), slug.clone());
        }
        if let Some(ref description) = self.description {
            scope.insert("description".to_string(), description.clone());
        }
        for (key, value) in &self.extra {
            if let Some(text) = scalar_to_string(value) {
                scope.insert(key.clone(), text);
            }
        }
        scope
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Result of splitting a document into front matter and body.
#[derive(Debug, Clone)]
pub struct FrontmatterSplit<'a> {
    /// Parsed YAML front matter, if present and valid.
    value: Option<Value>,
    /// Body content after the closing delimiter.
    body: &'a str,
    /// Whether delimiters were found (even if the YAML failed to parse).
    had_delimiters: bool,
}

impl<'a> FrontmatterSplit<'a> {
    fn with_frontmatter(value: Value, body: &'a str) -> Self {
        Self {
            value: Some(value),
            body,
            had_delimiters: true,
        }
    }

    fn without_frontmatter(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: false,
        }
    }

    fn with_invalid_frontmatter(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: true,
        }
    }

    /// Check if valid front matter was found and parsed.
    pub fn has_frontmatter(&self) -> bool {
        self.value.is_some()
    }

    /// Check if delimiters were present (even if parsing failed).
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Get the body content (everything after the front matter).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Get a string field from the front matter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }

    /// Deserialize the front matter into [`PostFrontmatter`].
    ///
    /// A document without front matter yields the default (empty) value, so
    /// the caller always has a title/slug/description record to work with.
    pub fn post_frontmatter(&self) -> Result<PostFrontmatter> {
        match &self.value {
            Some(value) => serde_yaml::from_value(value.clone())
                .map_err(|e| Error::parse(format!("failed to deserialize front matter: {e}"))),
            None => Ok(PostFrontmatter::default()),
        }
    }
}

/// Split a document into YAML front matter and body.
///
/// Parses content that starts with `---`, followed by YAML, followed by `---`.
///
/// # Behavior
///
/// - No delimiters: the whole content is the body, `has_frontmatter() == false`
/// - Delimiters present but YAML invalid: logs a warning, returns the body
///   after the closing `---` with no metadata
/// - Valid front matter: parsed YAML plus body
///
/// Malformed front matter never produces an error here; the index builder
/// relies on that to keep one bad document from hiding the rest.
pub fn extract_frontmatter(content: &str) -> FrontmatterSplit<'_> {
    if !content.starts_with("---") {
        return FrontmatterSplit::without_frontmatter(content);
    }

    // Find the end of the opening delimiter line
    let after_open = match content[3..].find('\n') {
        Some(pos) => &content[3 + pos + 1..],
        None => return FrontmatterSplit::without_frontmatter(content),
    };

    // Find the closing delimiter, handling empty front matter (--- immediately)
    let (yaml_content, after_close) = if let Some(rest) = after_open.strip_prefix("---") {
        ("", rest)
    } else if let Some(close_pos) = after_open.find("\n---") {
        (&after_open[..close_pos], &after_open[close_pos + 4..])
    } else {
        log::warn!("front matter opening delimiter found but no closing delimiter");
        return FrontmatterSplit::without_frontmatter(content);
    };

    let body = after_close.strip_prefix('\n').unwrap_or(after_close);

    match serde_yaml::from_str::<Value>(yaml_content) {
        Ok(value) => FrontmatterSplit::with_frontmatter(value, body),
        Err(e) => {
            log::warn!("failed to parse front matter YAML: {e}");
            FrontmatterSplit::with_invalid_frontmatter(body)
        }
    }
}

/// Strip front matter from content, returning only the body.
pub fn strip_frontmatter(content: &str) -> &str {
    extract_frontmatter(content).body()
}

// ============================================================================
// Tests
// ============================================================================
