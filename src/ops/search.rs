use std::ops::Range;

use regex::Regex;

/// Build a case-insensitive literal matcher for a search query.
/// Returns `None` for an empty query.
pub fn query_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

/// Collect all non-overlapping match byte-ranges in the given text
pub fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        let re = query_regex("milk").unwrap();
        assert_eq!(find_matches(&re, "Buy MILK and milk"), vec![4..8, 13..17]);
    }

    #[test]
    fn query_is_a_literal_not_a_pattern() {
        let re = query_regex("a+b").unwrap();
        assert!(find_matches(&re, "aaab").is_empty());
        assert_eq!(find_matches(&re, "x a+b y"), vec![2..5]);
    }

    #[test]
    fn empty_query_has_no_regex() {
        assert!(query_regex("").is_none());
    }
}
