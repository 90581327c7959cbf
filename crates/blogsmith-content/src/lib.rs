//! Content store walking, front matter extraction, index building, and the
//! category menu.
//!
//! This crate owns the two sources of truth the navigation layer consumes:
//!
//! - the **content index** ([`build_index`]): a deterministic catalog derived
//!   from walking the content store on disk, and
//! - the **category menu** ([`CategoryMenu`]): a hand-curated JSON mapping
//!   that defines navigation grouping and display order.
//!
//! The two are deliberately not reconciled: the menu is the navigation
//! contract, the index is derived fact. A menu entry pointing at a missing
//! document surfaces as a not-found only when a reader navigates to it.
//!
//! # Modules
//!
//! - [`frontmatter`]: YAML front matter extraction
//! - [`store`]: Content store walking and slug resolution
//! - [`index`]: Content index builder
//! - [`menu`]: Category menu loading and flattening
//! - [`check`]: Non-blocking menu-to-store consistency diagnostics
//!
//! # Example
//!
//! ```rust,ignore
//! use blogsmith_content::{build_index, ContentStore};
//!
//! let store = ContentStore::new("content");
//! let catalog = build_index(&store)?;
//! for meta in &catalog {
//!     println!("{}: {}", meta.slug, meta.title);
//! }
//! ```

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod check;
pub mod frontmatter;
pub mod index;
pub mod menu;
pub mod store;

// Re-export commonly used types
pub use check::{check_menu, DanglingEntry};
pub use frontmatter::{extract_frontmatter, strip_frontmatter, FrontmatterSplit, PostFrontmatter};
pub use index::{build_index, PostMeta};
pub use menu::{CategoryMenu, FlatMenuEntry, MenuEntry};
pub use store::ContentStore;
