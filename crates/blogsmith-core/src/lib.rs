//! Blogsmith Core — shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Blogsmith
//! crates. It has no internal Blogsmith dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Engine configuration (TOML-backed)
//! - [`util`]: Slug and path utilities

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::EngineConfig;
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::resolver::ContentRootResolver;
pub use util::slug::{slug_from_rel_path, slug_to_segments, strip_document_extension};
