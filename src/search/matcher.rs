// Fuzzy sequence matcher
//
// Compiles a user-supplied character sequence into a reusable predicate
// that tests whether a candidate string contains those characters in
// order, case-insensitively, with anything in between.

use anyhow::Result;
use regex::Regex;

/// Compiled form of a fuzzy query, reusable across many candidates.
pub enum Predicate {
    /// No query was supplied; every candidate matches.
    Any,
    /// Ordered-subsequence pattern built from the query's characters.
    Subsequence(Regex),
}

/// Build a predicate from an optional sequence of query tokens.
///
/// Tokens are joined with spaces, lowercased, and stripped of all
/// whitespace; the remaining characters must appear in the candidate in
/// order. `None` yields `Predicate::Any`; an empty token list yields an
/// empty pattern, which matches every candidate.
pub fn build_matcher(tokens: Option<&[String]>) -> Result<Predicate> {
    let tokens = match tokens {
        Some(tokens) => tokens,
        None => return Ok(Predicate::Any),
    };

    let pattern: String = tokens
        .join(" ")
        .to_lowercase()
        .split_whitespace()
        .flat_map(|word| word.chars())
        .map(|ch| format!("{}.*", regex::escape(&ch.to_string())))
        .collect();

    Ok(Predicate::Subsequence(Regex::new(&pattern)?))
}

impl Predicate {
    /// Test a candidate. Search semantics: the match may begin at any
    /// offset. Purely textual; callers do any prefix filtering themselves.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::Subsequence(regex) => regex.is_match(&candidate.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(tokens: &[&str]) -> Predicate {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        build_matcher(Some(&tokens)).unwrap()
    }

    #[test]
    fn test_absent_query_matches_everything() {
        let predicate = build_matcher(None).unwrap();
        assert!(predicate.matches("kiss"));
        assert!(predicate.matches(""));
        assert!(predicate.matches("anything at all"));
    }

    #[test]
    fn test_empty_token_list_matches_everything() {
        let predicate = matcher(&[]);
        assert!(predicate.matches("kiss"));
        assert!(predicate.matches(""));
    }

    #[test]
    fn test_subsequence_in_order() {
        let predicate = matcher(&["kss"]);
        assert!(predicate.matches("kiss"));
        assert!(predicate.matches("kiss script"));
    }

    #[test]
    fn test_characters_missing() {
        let predicate = matcher(&["xyz"]);
        assert!(!predicate.matches("kiss"));
    }

    #[test]
    fn test_characters_out_of_order() {
        let predicate = matcher(&["sik"]);
        assert!(!predicate.matches("kiss"));
    }

    #[test]
    fn test_case_insensitive_and_whitespace_collapsed() {
        let predicate = matcher(&["K I"]);
        assert!(predicate.matches("kiss init"));
    }

    #[test]
    fn test_token_boundaries_not_significant() {
        let split = matcher(&["a", "b"]);
        let joined = matcher(&["ab"]);
        for candidate in ["ab", "a-b", "axxb", "ba", "b", ""] {
            assert_eq!(
                split.matches(candidate),
                joined.matches(candidate),
                "split and joined tokens must agree on {:?}",
                candidate
            );
        }
    }

    #[test]
    fn test_match_may_start_anywhere() {
        let predicate = matcher(&["tar"]);
        assert!(predicate.matches("extract archive"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let predicate = matcher(&["a.b"]);
        assert!(predicate.matches("a.b"));
        assert!(predicate.matches("a x . y b"));
        assert!(!predicate.matches("axb"));
    }

    #[test]
    fn test_predicate_is_reusable() {
        let predicate = matcher(&["ks"]);
        assert!(predicate.matches("kiss"));
        assert!(predicate.matches("kiss"));
        assert!(!predicate.matches("sk"));
    }
}
