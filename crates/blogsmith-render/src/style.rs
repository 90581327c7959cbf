//! Element style overrides.
//!
//! The display layer supplies a fixed mapping from markup element kind to a
//! class attribute; the compiler injects those classes into the generated
//! HTML. This is the display layer's contract with the renderer, not part
//! of the core pipeline: an empty [`StyleMap`] produces plain HTML.

use std::collections::HashMap;

use pulldown_cmark::HeadingLevel;

/// A markup element kind the display layer can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<h1>`
    Heading1,
    /// `<h2>`
    Heading2,
    /// `<h3>`
    Heading3,
    /// `<h4>`
    Heading4,
    /// `<h5>`
    Heading5,
    /// `<h6>`
    Heading6,
    /// `<p>`
    Paragraph,
    /// `<a>`
    Link,
    /// Inline `<code>`
    InlineCode,
    /// Fenced or indented `<pre><code>` block
    CodeBlock,
}

impl ElementKind {
    /// Map a heading level to its element kind.
    pub fn from_heading(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::H1 => Self::Heading1,
            HeadingLevel::H2 => Self::Heading2,
            HeadingLevel::H3 => Self::Heading3,
            HeadingLevel::H4 => Self::Heading4,
            HeadingLevel::H5 => Self::Heading5,
            HeadingLevel::H6 => Self::Heading6,
        }
    }
}

/// Mapping from element kind to the class attribute injected at compile
/// time.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    classes: HashMap<ElementKind, String>,
}

impl StyleMap {
    /// An empty map: every element renders as plain HTML.
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's standard article styling.
    pub fn article_defaults() -> Self {
        Self::new()
            .with_class(ElementKind::Heading1, "text-3xl font-bold mt-8 mb-4")
            .with_class(ElementKind::Heading2, "text-2xl font-semibold mt-6 mb-3")
            .with_class(ElementKind::Heading3, "text-xl font-semibold mt-4 mb-2")
            .with_class(ElementKind::Paragraph, "mb-4 leading-relaxed")
            .with_class(ElementKind::Link, "text-blue-600 underline hover:text-blue-800")
            .with_class(
                ElementKind::InlineCode,
                "bg-gray-100 rounded px-1 py-0.5 font-mono text-sm",
            )
            .with_class(
                ElementKind::CodeBlock,
                "bg-gray-900 text-gray-100 rounded p-4 overflow-x-auto my-4",
            )
    }

    /// Set the class attribute for one element kind.
    pub fn with_class(mut self, kind: ElementKind, class: &str) -> Self {
        self.classes.insert(kind, class.to_string());
        self
    }

    /// The class attribute for one element kind, if overridden.
    pub fn class_for(&self, kind: ElementKind) -> Option<&str> {
        self.classes.get(&kind).map(String::as_str)
    }

    /// Whether no overrides are configured.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
