//! Sort specification.

use crate::record::Record;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
    /// Insertion order of the collection.
    #[default]
    None,
}

impl SortDirection {
    /// Next state of the three-state header toggle:
    /// ascending → descending → none → ascending.
    pub fn cycle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
            SortDirection::None => SortDirection::Ascending,
        }
    }

    /// Header marker for the direction.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
            SortDirection::None => "",
        }
    }
}

/// At most one (column, direction) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    column: Option<String>,
    direction: SortDirection,
}

impl SortSpec {
    /// A spec sorting `column` in `direction`. `SortDirection::None` yields
    /// the empty spec.
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        if direction == SortDirection::None {
            return Self::default();
        }
        Self {
            column: Some(column.into()),
            direction,
        }
    }

    /// The sorted column, if any.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// The sort direction; `None` when nothing is sorted.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction applied to `column`; `None` for any other column.
    pub fn direction_of(&self, column: &str) -> SortDirection {
        match &self.column {
            Some(c) if c == column => self.direction,
            _ => SortDirection::None,
        }
    }

    /// Returns true when no sort is active.
    pub fn is_empty(&self) -> bool {
        self.column.is_none()
    }

    /// Stable-sorts `rows` (indices into `records`) by this spec.
    ///
    /// Rows whose values tie keep their relative order in both directions.
    /// An empty spec leaves `rows` untouched.
    pub fn apply<R: Record>(&self, records: &[R], rows: &mut [usize]) {
        let Some(column) = self.column.as_deref() else {
            return;
        };
        // Project once instead of on every comparison.
        let keys: Vec<_> = rows
            .iter()
            .map(|&idx| records[idx].value(column).unwrap_or_default())
            .collect();
        let mut order: Vec<usize> = (0..rows.len()).collect();
        order.sort_by(|&a, &b| {
            let cmp = keys[a].cmp(&keys[b]);
            match self.direction {
                SortDirection::Descending => cmp.reverse(),
                _ => cmp,
            }
        });
        let sorted: Vec<usize> = order.into_iter().map(|i| rows[i]).collect();
        rows.copy_from_slice(&sorted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    struct Row(&'static str, i64);

    impl Record for Row {
        fn id(&self) -> &str {
            self.0
        }

        fn value(&self, key: &str) -> Option<Value> {
            match key {
                "n" => Some(Value::Integer(self.1)),
                "id" => Some(Value::text(self.0)),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![Row("a", 2), Row("b", 1), Row("c", 2), Row("d", 0), Row("e", 1)]
    }

    #[test]
    fn test_cycle() {
        let d = SortDirection::None.cycle();
        assert_eq!(d, SortDirection::Ascending);
        let d = d.cycle();
        assert_eq!(d, SortDirection::Descending);
        assert_eq!(d.cycle(), SortDirection::None);
    }

    #[test]
    fn test_none_direction_is_empty_spec() {
        let spec = SortSpec::new("n", SortDirection::None);
        assert!(spec.is_empty());
        assert_eq!(spec.direction_of("n"), SortDirection::None);
    }

    #[test]
    fn test_ascending_is_stable() {
        let data = rows();
        let mut idx: Vec<usize> = (0..data.len()).collect();
        SortSpec::new("n", SortDirection::Ascending).apply(&data, &mut idx);
        // d(0), b(1), e(1), a(2), c(2): ties keep insertion order.
        assert_eq!(idx, vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn test_descending_is_stable() {
        let data = rows();
        let mut idx: Vec<usize> = (0..data.len()).collect();
        SortSpec::new("n", SortDirection::Descending).apply(&data, &mut idx);
        assert_eq!(idx, vec![0, 2, 1, 4, 3]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let data = rows();
        let spec = SortSpec::new("n", SortDirection::Ascending);
        let mut once: Vec<usize> = (0..data.len()).collect();
        spec.apply(&data, &mut once);
        let mut twice = once.clone();
        spec.apply(&data, &mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_descending_reverses_distinct_keys() {
        let data = rows();
        let mut asc: Vec<usize> = (0..data.len()).collect();
        let mut desc = asc.clone();
        SortSpec::new("id", SortDirection::Ascending).apply(&data, &mut asc);
        SortSpec::new("id", SortDirection::Descending).apply(&data, &mut desc);
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let data = rows();
        let mut idx = vec![4, 2, 0];
        SortSpec::new("missing", SortDirection::Ascending).apply(&data, &mut idx);
        assert_eq!(idx, vec![4, 2, 0]);
    }
}
