//! The record abstraction consumed by the table view-model.

use crate::value::Value;

/// One row of domain data.
///
/// A record is immutable once handed to a view. Its identity must be unique
/// within the collection; selection is tracked by identity, never by
/// position.
///
/// # Examples
///
/// ```
/// use labgrid::record::Record;
/// use labgrid::value::Value;
///
/// struct Tube {
///     id: String,
///     rack: i64,
/// }
///
/// impl Record for Tube {
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn value(&self, key: &str) -> Option<Value> {
///         match key {
///             "id" => Some(Value::text(self.id.as_str())),
///             "rack" => Some(Value::Integer(self.rack)),
///             _ => None,
///         }
///     }
/// }
///
/// let tube = Tube { id: "T-1".into(), rack: 4 };
/// assert_eq!(tube.value("rack"), Some(Value::Integer(4)));
/// assert_eq!(tube.value("nope"), None);
/// ```
pub trait Record {
    /// Primary key of the record.
    fn id(&self) -> &str;

    /// Projects the field named `key`, or `None` when the record has no such
    /// field.
    fn value(&self, key: &str) -> Option<Value>;

    /// Text the filter matches against for `key`.
    ///
    /// Defaults to the [`Display`](std::fmt::Display) form of the value and
    /// the empty string for unknown fields.
    fn filter_value(&self, key: &str) -> String {
        self.value(key).map(|v| v.to_string()).unwrap_or_default()
    }
}
