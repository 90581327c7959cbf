//! Engine configuration.
//!
//! Deployments provide an [`EngineConfig`] (usually from a TOML file) to
//! point the engine at a content store and menu file and to tune search
//! behavior. Every field has a sensible default so an empty config is valid.
//!
//! ```toml
//! content_root = "content"
//! menu_path = "content/menu.json"
//! extensions = ["mdx", "md"]
//! score_threshold = 0.3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the content store root.
    pub content_root: Option<String>,

    /// Path to the category menu JSON file.
    pub menu_path: Option<String>,

    /// Document extensions recognized by the store, probed in order
    /// when resolving a slug.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Fuzzy match acceptance threshold (0.0 exact to 1.0 no match).
    /// Entries scoring above this are rejected.
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f64,
}

fn default_extensions() -> Vec<String> {
    crate::util::slug::DOCUMENT_EXTENSIONS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_score_threshold() -> f64 {
    0.3
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            content_root: None,
            menu_path: None,
            extensions: default_extensions(),
            score_threshold: default_score_threshold(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::config(format!("invalid TOML: {e}")))
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&raw)
    }
}

// ============================================================================
// Tests
// ============================================================================
