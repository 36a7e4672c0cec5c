//! Column descriptors.
//!
//! A [`Column`] projects one field of a record. Besides its key and label it
//! declares whether users may sort by it or hide it, and how its cells are
//! rendered. Rendering is declarative: a plain function pointer chosen when
//! the descriptor is built, so nothing is dispatched per cell at runtime
//! beyond calling it.

use crate::value::Value;
use std::fmt;

/// Visual emphasis of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeVariant {
    /// Filled, primary emphasis.
    #[default]
    Default,
    /// Muted fill.
    Secondary,
    /// Border only.
    Outline,
    /// Alarm colour.
    Destructive,
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Outline => "outline",
            BadgeVariant::Destructive => "destructive",
        };
        f.write_str(s)
    }
}

/// A rendered cell: display text plus optional badge styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Text shown in the cell.
    pub text: String,
    /// Badge variant when the column renders its values as badges.
    pub badge: Option<BadgeVariant>,
}

/// Pure formatting rule for a cell value.
pub type Formatter = fn(&Value) -> String;

/// Maps a display string to a badge variant.
pub type BadgeRule = fn(&str) -> BadgeVariant;

/// Describes one column of a table.
///
/// # Examples
///
/// ```
/// use labgrid::column::{formats, Column};
/// use labgrid::value::Value;
///
/// let col = Column::new("registrationDate", "Registration Date").with_format(formats::date);
/// assert!(col.sortable);
/// assert!(col.hideable);
///
/// let d = chrono::NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
/// assert_eq!(col.render(&Value::Date(d)).text, "07/20/2024");
/// ```
#[derive(Clone)]
pub struct Column {
    /// Field key projected from each record.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Whether the column can be sorted.
    pub sortable: bool,
    /// Whether the column can be hidden.
    pub hideable: bool,
    format: Formatter,
    badge: Option<BadgeRule>,
}

impl Column {
    /// Creates a sortable, hideable column rendered with [`formats::plain`].
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            hideable: true,
            format: formats::plain,
            badge: None,
        }
    }

    /// Sets whether the column can be sorted.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets whether the column can be hidden.
    pub fn with_hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    /// Sets the formatting rule for the column's cells.
    pub fn with_format(mut self, format: Formatter) -> Self {
        self.format = format;
        self
    }

    /// Renders the column's cells as badges.
    pub fn with_badge(mut self, badge: BadgeRule) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Renders one value of this column.
    pub fn render(&self, value: &Value) -> Cell {
        let text = (self.format)(value);
        let badge = self.badge.map(|rule| rule(&text));
        Cell { text, badge }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("badge", &self.badge.is_some())
            .finish()
    }
}

/// Stock formatting rules.
pub mod formats {
    use crate::value::Value;

    /// The value's canonical text.
    pub fn plain(value: &Value) -> String {
        value.to_string()
    }

    /// Lower-cased canonical text.
    pub fn lowercase(value: &Value) -> String {
        value.to_string().to_lowercase()
    }

    /// `MM/DD/YYYY` for dates and timestamps, canonical text otherwise.
    pub fn date(value: &Value) -> String {
        match value {
            Value::Date(d) => d.format("%m/%d/%Y").to_string(),
            Value::Timestamp(ts) => ts.format("%m/%d/%Y").to_string(),
            other => other.to_string(),
        }
    }

    /// `MM/DD/YYYY, hh:mm:ss AM` for timestamps; dates fall back to [`date`].
    pub fn timestamp(value: &Value) -> String {
        match value {
            Value::Timestamp(ts) => ts.format("%m/%d/%Y, %I:%M:%S %p").to_string(),
            other => date(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn badge_for(s: &str) -> BadgeVariant {
        if s == "Stored" {
            BadgeVariant::Destructive
        } else {
            BadgeVariant::Outline
        }
    }

    #[test]
    fn test_defaults() {
        let col = Column::new("id", "Sample ID");
        assert_eq!(col.key, "id");
        assert_eq!(col.label, "Sample ID");
        assert!(col.sortable);
        assert!(col.hideable);
        assert_eq!(col.render(&Value::text("SMP-1")).badge, None);
    }

    #[test]
    fn test_builder_flags() {
        let col = Column::new("details", "Details")
            .with_sortable(false)
            .with_hideable(false);
        assert!(!col.sortable);
        assert!(!col.hideable);
    }

    #[test]
    fn test_badge_rule_sees_formatted_text() {
        let col = Column::new("status", "Status").with_badge(badge_for);
        let cell = col.render(&Value::text("Stored"));
        assert_eq!(cell.text, "Stored");
        assert_eq!(cell.badge, Some(BadgeVariant::Destructive));
        assert_eq!(
            col.render(&Value::text("Received")).badge,
            Some(BadgeVariant::Outline)
        );
    }

    #[test]
    fn test_lowercase_format() {
        let col = Column::new("id", "Sample ID").with_format(formats::lowercase);
        assert_eq!(col.render(&Value::text("SMP-2024-001")).text, "smp-2024-001");
    }

    #[test]
    fn test_timestamp_format() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 21, 15, 45, 0).unwrap();
        assert_eq!(
            formats::timestamp(&Value::Timestamp(ts)),
            "07/21/2024, 03:45:00 PM"
        );
        let d = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(formats::timestamp(&Value::Date(d)), "06/15/2024");
        assert_eq!(formats::date(&Value::Null), "");
    }
}
