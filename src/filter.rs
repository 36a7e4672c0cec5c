//! Filter predicate over one designated column.
//!
//! Substring matching is the default. Fuzzy matching uses the same skim
//! matcher the list filters of terminal UIs use, so "cbc" finds
//! "Complete Blood Count".

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// How filter text is matched against a column's string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The text must occur contiguously.
    #[default]
    Substring,
    /// The characters of the text must occur in order.
    Fuzzy,
}

/// A single-column text filter.
#[derive(Debug, Clone)]
pub struct Filter {
    column: Option<String>,
    text: String,
    case_sensitive: bool,
    mode: MatchMode,
}

impl Filter {
    /// A filter against `column`. With no column every record matches.
    pub fn new(column: Option<String>, case_sensitive: bool, mode: MatchMode) -> Self {
        Self {
            column,
            text: String::new(),
            case_sensitive,
            mode,
        }
    }

    /// The designated filter column.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Current filter text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the filter text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Returns true when the filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() || self.column.is_none()
    }

    /// Tests one record.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let Some(column) = self.column.as_deref() else {
            return true;
        };
        if self.text.is_empty() {
            return true;
        }
        self.matches_str(&record.filter_value(column))
    }

    fn matches_str(&self, haystack: &str) -> bool {
        match self.mode {
            MatchMode::Substring => {
                if self.case_sensitive {
                    haystack.contains(&self.text)
                } else {
                    haystack
                        .to_lowercase()
                        .contains(&self.text.to_lowercase())
                }
            }
            MatchMode::Fuzzy => {
                let matcher = if self.case_sensitive {
                    SkimMatcherV2::default().respect_case()
                } else {
                    SkimMatcherV2::default().ignore_case()
                };
                matcher.fuzzy_match(haystack, &self.text).is_some()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    struct Patient(&'static str);

    impl Record for Patient {
        fn id(&self) -> &str {
            self.0
        }

        fn value(&self, key: &str) -> Option<Value> {
            (key == "name").then(|| Value::text(self.0))
        }
    }

    fn filter(text: &str, case_sensitive: bool, mode: MatchMode) -> Filter {
        let mut f = Filter::new(Some("name".into()), case_sensitive, mode);
        f.set_text(text);
        f
    }

    #[test]
    fn test_empty_matches_all() {
        let f = filter("", false, MatchMode::Substring);
        assert!(f.is_empty());
        assert!(f.matches(&Patient("anyone")));
    }

    #[test]
    fn test_no_column_matches_all() {
        let mut f = Filter::new(None, false, MatchMode::Substring);
        f.set_text("zzz");
        assert!(f.matches(&Patient("John Doe")));
    }

    #[test]
    fn test_substring_case_insensitive() {
        let f = filter("JOHN", false, MatchMode::Substring);
        assert!(f.matches(&Patient("John Doe")));
        assert!(f.matches(&Patient("Mary Johnson")));
        assert!(!f.matches(&Patient("Jane Smith")));
    }

    #[test]
    fn test_substring_case_sensitive() {
        let f = filter("john", true, MatchMode::Substring);
        assert!(!f.matches(&Patient("John Doe")));
        assert!(f.matches(&Patient("Mary johnson")));
    }

    #[test]
    fn test_substring_requires_contiguity() {
        let f = filter("jdoe", false, MatchMode::Substring);
        assert!(!f.matches(&Patient("John Doe")));
    }

    #[test]
    fn test_fuzzy() {
        let f = filter("jdoe", false, MatchMode::Fuzzy);
        assert!(f.matches(&Patient("John Doe")));
        assert!(!f.matches(&Patient("Jane Smith")));
    }

    #[test]
    fn test_unknown_field_is_empty_string() {
        let mut f = Filter::new(Some("missing".into()), false, MatchMode::Substring);
        f.set_text("a");
        assert!(!f.matches(&Patient("abc")));
    }
}
