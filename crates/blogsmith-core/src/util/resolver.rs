//! Configurable content root resolver.
//!
//! `ContentRootResolver` locates the content store and menu file for a site
//! using environment variables, directory markers, and fallback paths. Each
//! deployment creates its own resolver with appropriate configuration.
//!
//! # Example
//!
//! ```no_run
//! use blogsmith_core::util::resolver::ContentRootResolver;
//!
//! let resolver = ContentRootResolver::new("techsite")
//!     .with_root_marker("menu.json")
//!     .with_root_fallback("~/sites/techsite/content");
//!
//! // Checks TECHSITE_CONTENT_DIR, then walks up looking for menu.json
//! if let Some(root) = resolver.content_root() {
//!     println!("Content: {:?}", root);
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};

/// Configurable content root resolver for a specific site.
#[derive(Debug, Clone)]
pub struct ContentRootResolver {
    /// Site name (e.g., "techsite")
    site_name: String,
    /// Environment variable prefix (e.g., "TECHSITE")
    env_prefix: String,
    /// Marker file that identifies the content root (e.g., "menu.json")
    root_marker: Option<String>,
    /// Fallback content root (expanded with tilde)
    root_fallback: Option<PathBuf>,
}

impl ContentRootResolver {
    /// Create a new resolver for the given site name.
    ///
    /// The site name is converted to an environment variable prefix:
    /// - "tech-site" → "TECH_SITE"
    /// - "my_blog" → "MY_BLOG"
    pub fn new(site_name: &str) -> Self {
        let env_prefix = site_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            site_name: site_name.to_string(),
            env_prefix,
            root_marker: None,
            root_fallback: None,
        }
    }

    /// Set the marker file that identifies the content root.
    pub fn with_root_marker(mut self, marker: &str) -> Self {
        self.root_marker = Some(marker.to_string());
        self
    }

    /// Set a fallback path for the content root (supports ~ expansion).
    pub fn with_root_fallback(mut self, path: &str) -> Self {
        self.root_fallback = Some(expand_tilde(path));
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use blogsmith_core::util::resolver::ContentRootResolver;
    ///
    /// let resolver = ContentRootResolver::new("tech-site");
    /// assert_eq!(resolver.env_var("CONTENT_DIR"), "TECH_SITE_CONTENT_DIR");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Resolve the content root directory.
    ///
    /// Checks in order:
    /// 1. `{SITE}_CONTENT_DIR` environment variable
    /// 2. Walk up from the working directory looking for the root marker
    /// 3. Fallback path (if configured)
    pub fn content_root(&self) -> Option<PathBuf> {
        // 1. Check environment variable
        let env_var = self.env_var("CONTENT_DIR");
        if let Ok(path) = env::var(&env_var) {
            let path = expand_tilde(&path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Walk up from the working directory
        if let (Ok(cwd), Some(marker)) = (env::current_dir(), &self.root_marker) {
            if let Some(root) = find_dir_with_marker(&cwd, marker) {
                return Some(root);
            }
        }

        // 3. Try fallback
        if let Some(fallback) = &self.root_fallback {
            if fallback.exists() {
                return Some(fallback.clone());
            }
        }

        None
    }

    /// Get the site name.
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Walk up from `start`, returning the first directory containing `marker`.
fn find_dir_with_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(marker).exists() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}
