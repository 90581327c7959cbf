//! Front matter scope interpolation.
//!
//! The front matter mapping is the body's initial variable scope: a
//! `{{key}}` placeholder in the body is replaced with the scalar value of
//! that front matter key before compilation. Placeholders with no matching
//! key are left untouched so authoring mistakes stay visible on the page.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_.-]+)\s*\}\}").expect("placeholder regex is valid")
    })
}

/// Replace `{{key}}` placeholders in the body with values from the scope.
pub fn interpolate(body: &str, scope: &BTreeMap<String, String>) -> String {
    placeholder_regex()
        .replace_all(body, |caps: &regex::Captures<'_>| {
            let key = &caps[1];
            match scope.get(key) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

// ============================================================================
// Tests
// ============================================================================
