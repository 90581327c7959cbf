//! Utility modules for slug computation and content root resolution.
//!
//! # Modules
//!
//! - [`slug`]: Slug derivation from store-relative paths
//! - [`resolver`]: Configurable content root resolution

pub mod resolver;
pub mod slug;
