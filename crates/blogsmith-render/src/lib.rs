//! Document rendering: slug resolution, scope interpolation, markdown
//! compilation, and region containment.
//!
//! The renderer is a pure function of on-disk state at call time: each
//! resolution re-reads and re-compiles, with no caching layer.
//!
//! # Modules
//!
//! - [`style`]: Element style overrides supplied by the display layer
//! - [`scope`]: Front matter scope interpolation into the body
//! - [`compile`]: Markdown-to-HTML compilation with style overrides
//! - [`renderer`]: Slug resolution and end-to-end rendering
//! - [`region`]: Error-boundary style containment of render failures
//!
//! # Example
//!
//! ```rust,ignore
//! use blogsmith_content::ContentStore;
//! use blogsmith_render::{resolve_and_render, StyleMap};
//!
//! let store = ContentStore::new("content");
//! let segments = vec!["python".to_string(), "guide".to_string()];
//! let rendered = resolve_and_render(&store, &segments, &StyleMap::article_defaults())?;
//! println!("{}", rendered.html);
//! ```

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod compile;
pub mod region;
pub mod renderer;
pub mod scope;
pub mod style;

// Re-export commonly used types
pub use compile::compile_body;
pub use region::render_region;
pub use renderer::{resolve_and_render, Rendered};
pub use scope::interpolate;
pub use style::{ElementKind, StyleMap};
