//! Query matching against page text.

/// A compiled query predicate.
///
/// Matching is plain substring containment, exact as typed when case
/// sensitive, lowercased on both sides otherwise. No normalization, no
/// tokenization.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    query: String,
    case_sensitive: bool,
}

impl QueryMatcher {
    /// Compiles a raw query string into a matcher.
    ///
    /// When case insensitive, the query is lowercased once up front.
    pub fn new(query: &str, case_sensitive: bool) -> Self {
        let query = if case_sensitive {
            query.to_string()
        } else {
            query.to_lowercase()
        };
        Self {
            query,
            case_sensitive,
        }
    }

    /// Whether the page text satisfies the query.
    ///
    /// Absent text never matches.
    pub fn matches(&self, text: Option<&str>) -> bool {
        let Some(text) = text else {
            return false;
        };
        if self.case_sensitive {
            text.contains(&self.query)
        } else {
            text.to_lowercase().contains(&self.query)
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}
