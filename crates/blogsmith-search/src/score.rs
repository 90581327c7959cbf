//! Fuzzy match scoring.
//!
//! Scores are normalized distances: `0.0` is an exact match, `1.0` shares
//! nothing with the query. Fields are tokenized on path and word separators
//! so a query can hit any component of a path like `python/topics/functions.md`.
//!
//! Three match shapes are recognized, from strongest to weakest:
//!
//! 1. exact token or whole-field equality (score `0.0`),
//! 2. partial word: the query is a substring of a token, penalized by how
//!    much of the token it leaves unmatched (always under the default
//!    threshold),
//! 3. approximate: Damerau-Levenshtein distance normalized by length, which
//!    keeps single-typo queries like "gudie" within the threshold.

use blogsmith_content::FlatMenuEntry;

/// Default acceptance threshold: entries scoring above this are rejected.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.3;

/// Maximum penalty for a partial-word (substring) match. Kept below the
/// default threshold so any substring hit survives filtering.
const PARTIAL_MATCH_CEILING: f64 = 0.3;

/// Separators that break a field into comparable tokens.
const TOKEN_SEPARATORS: &[char] = &['/', '\\', '.', '_', '-', ' ', '\t'];

/// Score a query against a single field.
///
/// Returns the best (lowest) score over the whole field and each of its
/// tokens. Comparison is case-insensitive.
pub fn match_score(query: &str, field: &str) -> f64 {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return 0.0;
    }
    let field = field.to_lowercase();
    if field.is_empty() {
        return 1.0;
    }

    let mut best = candidate_score(&query, &field);
    for token in field.split(TOKEN_SEPARATORS).filter(|t| !t.is_empty()) {
        let score = candidate_score(&query, token);
        if score < best {
            best = score;
        }
    }
    best
}

/// Score a query against one candidate string (whole field or token).
fn candidate_score(query: &str, candidate: &str) -> f64 {
    if candidate == query {
        return 0.0;
    }

    if candidate.contains(query) {
        // Partial word: penalize by the unmatched remainder of the candidate
        let query_len = query.chars().count() as f64;
        let candidate_len = candidate.chars().count() as f64;
        return PARTIAL_MATCH_CEILING * (candidate_len - query_len) / candidate_len;
    }

    1.0 - strsim::normalized_damerau_levenshtein(query, candidate)
}

/// Score a query against an entry: the best score across its `title`,
/// `path`, and `category` fields.
pub fn entry_score(query: &str, entry: &FlatMenuEntry) -> f64 {
    match_score(query, &entry.title)
        .min(match_score(query, &entry.path))
        .min(match_score(query, &entry.category))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, path: &str, category: &str) -> FlatMenuEntry {
        FlatMenuEntry {
            title: title.to_string(),
            path: path.to_string(),
            category: category.to_string(),
        }
    }

    // ------------------------------------------------------------------------
    // match_score tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_exact_match_scores_zero() {
        assert_eq!(match_score("Guide", "Guide"), 0.0);
        assert_eq!(match_score("guide", "GUIDE"), 0.0);
    }

    #[test]
    fn test_exact_token_in_path_scores_zero() {
        assert_eq!(match_score("guide", "javascript/guide.md"), 0.0);
    }

    #[test]
    fn test_partial_word_within_threshold() {
        let score = match_score("func", "python/topics/functions.md");
        assert!(score > 0.0);
        assert!(score <= DEFAULT_SCORE_THRESHOLD);
    }

    #[test]
    fn test_single_typo_within_threshold() {
        // Transposition: "gudie" for "guide"
        let score = match_score("gudie", "guide");
        assert!(score <= DEFAULT_SCORE_THRESHOLD, "score was {score}");
    }

    #[test]
    fn test_unrelated_term_rejected() {
        let score = match_score("astronomy", "python/guide.md");
        assert!(score > DEFAULT_SCORE_THRESHOLD, "score was {score}");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(match_score("", "anything"), 0.0);
        assert_eq!(match_score("   ", "anything"), 0.0);
    }

    #[test]
    fn test_empty_field_never_matches() {
        assert_eq!(match_score("guide", ""), 1.0);
    }

    #[test]
    fn test_closer_match_scores_lower() {
        let close = match_score("guid", "guide");
        let far = match_score("gu", "guide");
        assert!(close < far);
    }

    // ------------------------------------------------------------------------
    // entry_score tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_entry_score_takes_best_field() {
        let e = entry("Functions", "python/topics/functions.md", "python");
        // "python" matches the category exactly even though the title doesn't
        assert_eq!(entry_score("python", &e), 0.0);
    }

    #[test]
    fn test_entry_score_title_match() {
        let e = entry("Guide", "python/guide.md", "python");
        assert_eq!(entry_score("guide", &e), 0.0);
    }

    #[test]
    fn test_entry_score_unrelated() {
        let e = entry("Guide", "python/guide.md", "python");
        assert!(entry_score("astronomy", &e) > DEFAULT_SCORE_THRESHOLD);
    }
}
