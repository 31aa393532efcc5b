//! QueryMatcher - Literal, case-insensitive title matching

use regex::{Regex, RegexBuilder};

/// Tests listing titles for the literal text of a search query
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    query: String,
    pattern: Option<Regex>,
}

impl QueryMatcher {
    /// Build a matcher. Never fails; an empty query matches everything.
    pub fn build(query: &str) -> Self {
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .inspect_err(|e| {
                tracing::warn!(error = %e, "Query pattern rejected, using plain substring match")
            })
            .ok();

        Self {
            query: query.to_lowercase(),
            pattern,
        }
    }

    /// True iff the query text occurs in `title`, ignoring case
    pub fn matches(&self, title: &str) -> bool {
        match &self.pattern {
            Some(re) => re.is_match(title),
            None => title.to_lowercase().contains(&self.query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metacharacters_are_literal() {
        let matcher = QueryMatcher::build("a.b");
        assert!(matcher.matches("a.b"));
        assert!(!matcher.matches("axb"));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let matcher = QueryMatcher::build("iPhone 13");
        assert!(matcher.matches("Продам IPHONE 13 Pro"));
        assert!(matcher.matches("iphone 13"));
        assert!(!matcher.matches("iPhone 12"));
    }

    #[test]
    fn test_cyrillic_ignores_case() {
        let matcher = QueryMatcher::build("велосипед");
        assert!(matcher.matches("Горный ВЕЛОСИПЕД Trek"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let matcher = QueryMatcher::build("");
        assert!(matcher.matches("anything"));
        assert!(matcher.matches(""));
    }

    #[test]
    fn test_regex_syntax_does_not_break_build() {
        let matcher = QueryMatcher::build("(c++) [v2] $5 ^x|y");
        assert!(matcher.matches("Book: (C++) [v2] $5 ^x|y edition"));
        assert!(!matcher.matches("c++ v2"));
    }
}
