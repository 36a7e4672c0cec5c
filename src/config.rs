//! View configuration.
//!
//! A [`ViewConfig`] captures the per-table knobs that the table pages set up
//! at mount time. Every field has a default, so a TOML document only needs to
//! name what it overrides:
//!
//! ```toml
//! page_size = 5
//! filter_column = "patientName"
//! hidden_columns = ["sampleId"]
//! pagination_style = "dots"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::filter::MatchMode;
use crate::paginator::Type;

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration of one table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per page. Zero is clamped to one.
    pub page_size: usize,
    /// Column the filter text is matched against.
    pub filter_column: Option<String>,
    /// Whether filtering distinguishes letter case.
    pub case_sensitive: bool,
    /// Substring or fuzzy matching.
    pub match_mode: MatchMode,
    /// Columns hidden when the view is created.
    pub hidden_columns: Vec<String>,
    /// Pagination control rendering.
    pub pagination_style: Type,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            filter_column: None,
            case_sensitive: false,
            match_mode: MatchMode::Substring,
            hidden_columns: Vec::new(),
            pagination_style: Type::Arabic,
        }
    }
}

impl ViewConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), ?config, "loaded view config");
        Ok(config)
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the filter column.
    pub fn with_filter_column(mut self, column: impl Into<String>) -> Self {
        self.filter_column = Some(column.into());
        self
    }

    /// Sets case sensitivity of the filter.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the filter match mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Hides `column` initially.
    pub fn with_hidden_column(mut self, column: impl Into<String>) -> Self {
        self.hidden_columns.push(column.into());
        self
    }

    /// Sets the pagination control style.
    pub fn with_pagination_style(mut self, style: Type) -> Self {
        self.pagination_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let c = ViewConfig::default();
        assert_eq!(c.page_size, 10);
        assert_eq!(c.filter_column, None);
        assert!(!c.case_sensitive);
        assert_eq!(c.match_mode, MatchMode::Substring);
        assert!(c.hidden_columns.is_empty());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ViewConfig::from_toml_str("").unwrap(), ViewConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let c = ViewConfig::from_toml_str(
            r#"
            page_size = 5
            filter_column = "patientName"
            match_mode = "fuzzy"
            hidden_columns = ["sampleId"]
            pagination_style = "dots"
            "#,
        )
        .unwrap();
        assert_eq!(c.page_size, 5);
        assert_eq!(c.filter_column.as_deref(), Some("patientName"));
        assert_eq!(c.match_mode, MatchMode::Fuzzy);
        assert_eq!(c.hidden_columns, vec!["sampleId".to_string()]);
        assert_eq!(c.pagination_style, Type::Dots);
        assert!(!c.case_sensitive);
    }

    #[test]
    fn test_invalid_document() {
        let err = ViewConfig::from_toml_str("page_size = \"many\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 3\ncase_sensitive = true").unwrap();
        let c = ViewConfig::load(file.path()).unwrap();
        assert_eq!(c.page_size, 3);
        assert!(c.case_sensitive);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ViewConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_builders() {
        let c = ViewConfig::default()
            .with_page_size(5)
            .with_filter_column("name")
            .with_hidden_column("email")
            .with_case_sensitive(true)
            .with_match_mode(MatchMode::Fuzzy)
            .with_pagination_style(Type::Dots);
        assert_eq!(c.page_size, 5);
        assert_eq!(c.filter_column.as_deref(), Some("name"));
        assert_eq!(c.hidden_columns, vec!["email".to_string()]);
        assert!(c.case_sensitive);
    }
}
