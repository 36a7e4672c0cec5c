//! The `TabularViewModel` struct, its construction and its operations.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, trace, warn};

use super::keys::TableKeyMap;
use crate::column::{Cell, Column};
use crate::config::ViewConfig;
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::paginator;
use crate::record::Record;
use crate::selection::{PageSelection, Selection};
use crate::sort::{SortDirection, SortSpec};

/// Record counts for status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    /// Size of the full collection.
    pub total_records: usize,
    /// Records passing the filter.
    pub filtered_records: usize,
    /// Selected records (always a subset of the filtered ones).
    pub selected_records: usize,
}

/// View-model of one table display.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use labgrid::prelude::*;
///
/// struct Tube(&'static str, &'static str);
///
/// impl Record for Tube {
///     fn id(&self) -> &str { self.0 }
///     fn value(&self, key: &str) -> Option<Value> {
///         match key {
///             "id" => Some(Value::text(self.0)),
///             "patient" => Some(Value::text(self.1)),
///             _ => None,
///         }
///     }
/// }
///
/// let records = Arc::new(vec![
///     Tube("T-1", "John Doe"),
///     Tube("T-2", "Jane Smith"),
///     Tube("T-3", "Mary Johnson"),
/// ]);
/// let columns = vec![Column::new("id", "Tube"), Column::new("patient", "Patient")];
/// let config = ViewConfig::default().with_page_size(2).with_filter_column("patient");
///
/// let mut view = TabularViewModel::new(records, columns, config).unwrap();
/// assert_eq!(view.visible_slice().len(), 2);
///
/// view.set_filter("john");
/// let ids: Vec<&str> = view.visible_slice().iter().map(|r| r.id()).collect();
/// assert_eq!(ids, vec!["T-1", "T-3"]);
/// assert_eq!(view.counts().filtered_records, 2);
/// ```
pub struct TabularViewModel<R: Record> {
    records: Arc<Vec<R>>,
    columns: Vec<Column>,
    visibility: HashMap<String, bool>,
    sort: SortSpec,
    filter: Filter,
    selection: Selection,
    pub(super) paginator: paginator::Model,
    /// Indices into `records` after filter and sort.
    rows: Vec<usize>,
    pub(super) keymap: TableKeyMap,
}

impl<R: Record> TabularViewModel<R> {
    /// Creates a view over `records`.
    ///
    /// Fails when two columns or two records share a key, when the
    /// configured filter column or a hidden column is not one of `columns`,
    /// or when a column that cannot be hidden is configured as hidden.
    pub fn new(records: Arc<Vec<R>>, columns: Vec<Column>, config: ViewConfig) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(Error::DuplicateColumn(column.key.clone()));
            }
        }
        let known = |key: &str| columns.iter().any(|c| c.key == key);
        if let Some(key) = config.filter_column.as_deref() {
            if !known(key) {
                return Err(Error::UnknownColumn(key.to_string()));
            }
        }
        if let Some(key) = config.hidden_columns.iter().find(|k| !known(k)) {
            return Err(Error::UnknownColumn(key.clone()));
        }
        if let Some(column) = columns
            .iter()
            .find(|c| !c.hideable && config.hidden_columns.contains(&c.key))
        {
            return Err(Error::FixedColumn(column.key.clone()));
        }

        let mut ids = HashSet::new();
        for record in records.iter() {
            if !ids.insert(record.id()) {
                return Err(Error::DuplicateRecord(record.id().to_string()));
            }
        }

        let mut visibility: HashMap<String, bool> =
            columns.iter().map(|c| (c.key.clone(), true)).collect();
        for key in &config.hidden_columns {
            visibility.insert(key.clone(), false);
        }

        let paginator = paginator::Model::new()
            .with_per_page(config.page_size)
            .with_type(config.pagination_style);

        let mut view = Self {
            records,
            columns,
            visibility,
            sort: SortSpec::default(),
            filter: Filter::new(
                config.filter_column,
                config.case_sensitive,
                config.match_mode,
            ),
            selection: Selection::new(),
            paginator,
            rows: Vec::new(),
            keymap: TableKeyMap::default(),
        };
        view.refresh();
        debug!(
            total = view.records.len(),
            columns = view.columns.len(),
            page_size = view.paginator.per_page,
            "table view created"
        );
        Ok(view)
    }

    // Re-derives the filtered, sorted row list and the page count.
    fn refresh(&mut self) {
        let records = self.records.as_slice();
        let mut rows: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filter.matches(*r))
            .map(|(i, _)| i)
            .collect();
        self.sort.apply(records, &mut rows);
        self.rows = rows;
        self.paginator.set_total_items(self.rows.len());
        trace!(
            filtered = self.rows.len(),
            pages = self.paginator.total_pages,
            page = self.paginator.page,
            "rows derived"
        );
    }

    fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    fn is_filtered(&self, id: &str) -> bool {
        self.rows.iter().any(|&i| self.records[i].id() == id)
    }

    fn page_rows(&self) -> &[usize] {
        let (start, end) = self.paginator.get_slice_bounds(self.rows.len());
        &self.rows[start..end]
    }

    // ---- sorting -------------------------------------------------------

    /// Replaces the sort specification.
    ///
    /// Returns false, leaving state untouched, when `key` is unknown or not
    /// sortable. [`SortDirection::None`] clears the sort.
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) -> bool {
        let Some(column) = self.column(key) else {
            warn!(column = key, "sort requested on unknown column");
            return false;
        };
        if !column.sortable {
            debug!(column = key, "column is not sortable");
            return false;
        }
        self.sort = SortSpec::new(key, direction);
        self.paginator.page = 0;
        self.refresh();
        debug!(column = key, ?direction, "sort changed");
        true
    }

    /// Header click: cycles the column through ascending, descending and
    /// unsorted. A column that is not currently sorted starts at ascending.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        let next = self.sort.direction_of(key).cycle();
        self.set_sort(key, next)
    }

    /// Current sort specification.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    // ---- filtering -----------------------------------------------------

    /// Replaces the filter text.
    ///
    /// Rows that stop matching are deselected and the cursor returns to
    /// page 0.
    pub fn set_filter(&mut self, text: &str) {
        self.filter.set_text(text);
        self.paginator.page = 0;
        self.refresh();

        let records = &self.records;
        let visible: HashSet<&str> = self.rows.iter().map(|&i| records[i].id()).collect();
        let dropped = self.selection.retain(|id| visible.contains(id));
        debug!(
            filter = text,
            matched = self.rows.len(),
            deselected = dropped,
            "filter changed"
        );
    }

    /// Removes the filter text.
    pub fn clear_filter(&mut self) {
        self.set_filter("");
    }

    /// Current filter text.
    pub fn filter_text(&self) -> &str {
        self.filter.text()
    }

    /// Column the filter matches against.
    pub fn filter_column(&self) -> Option<&str> {
        self.filter.column()
    }

    // ---- columns -------------------------------------------------------

    /// Shows or hides a column. Display only: filtering, sorting and
    /// selection are unaffected.
    ///
    /// Returns false when `key` is unknown or the column cannot be hidden.
    pub fn set_column_visibility(&mut self, key: &str, visible: bool) -> bool {
        let Some(column) = self.column(key) else {
            warn!(column = key, "visibility requested on unknown column");
            return false;
        };
        if !column.hideable {
            debug!(column = key, "column cannot be hidden");
            return false;
        }
        self.visibility.insert(key.to_string(), visible);
        self.paginator.page = 0;
        debug!(column = key, visible, "visibility changed");
        true
    }

    /// Returns true when the column is declared and visible.
    pub fn is_column_visible(&self, key: &str) -> bool {
        self.visibility.get(key).copied().unwrap_or(false)
    }

    /// All column descriptors in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Visible columns in declaration order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| self.is_column_visible(&c.key))
            .collect()
    }

    /// Columns a user may toggle, for a "Columns" menu.
    pub fn hideable_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.hideable).collect()
    }

    /// Renders one cell of `record` for `column`.
    pub fn cell(&self, record: &R, column: &Column) -> Cell {
        column.render(&record.value(&column.key).unwrap_or_default())
    }

    // ---- selection -----------------------------------------------------

    /// Selects or deselects one record.
    ///
    /// Returns false when the record is not in the filtered set or its
    /// membership already matched `selected`.
    pub fn toggle_row_selection(&mut self, id: &str, selected: bool) -> bool {
        if !self.is_filtered(id) {
            trace!(id, "selection ignored for filtered-out row");
            return false;
        }
        self.selection.set(id, selected)
    }

    /// Sets membership of every record on the current page. Other pages are
    /// left alone. Returns how many memberships changed.
    pub fn toggle_all_on_page(&mut self, selected: bool) -> usize {
        let (start, end) = self.paginator.get_slice_bounds(self.rows.len());
        let mut changed = 0;
        for &i in &self.rows[start..end] {
            if self.selection.set(self.records[i].id(), selected) {
                changed += 1;
            }
        }
        debug!(selected, changed, page = self.paginator.page, "page selection");
        changed
    }

    /// Returns true when `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Header checkbox state of the current page.
    pub fn page_selection_state(&self) -> PageSelection {
        self.selection
            .page_state(self.page_rows().iter().map(|&i| self.records[i].id()))
    }

    /// Selected records in display order.
    pub fn selected_records(&self) -> Vec<&R> {
        self.rows
            .iter()
            .map(|&i| &self.records[i])
            .filter(|r| self.selection.contains(r.id()))
            .collect()
    }

    // ---- pagination ----------------------------------------------------

    /// Advances one page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        self.paginator.next_page()
    }

    /// Goes back one page. Returns false on the first page.
    pub fn previous_page(&mut self) -> bool {
        self.paginator.prev_page()
    }

    /// Returns true when a next page exists.
    pub fn can_next_page(&self) -> bool {
        !self.paginator.on_last_page()
    }

    /// Returns true when a previous page exists.
    pub fn can_previous_page(&self) -> bool {
        !self.paginator.on_first_page()
    }

    /// Jumps to `page`, clamped to the last page. Returns the page landed on.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.paginator.set_page(page)
    }

    /// Changes the page size (minimum 1) and clamps the cursor.
    pub fn set_page_size(&mut self, size: usize) {
        self.paginator.set_per_page(size);
        self.paginator.set_total_items(self.rows.len());
        debug!(page_size = self.paginator.per_page, "page size changed");
    }

    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.paginator.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.paginator.per_page
    }

    /// Number of pages; at least one.
    pub fn page_count(&self) -> usize {
        self.paginator.total_pages
    }

    /// The pagination cursor.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    // ---- derived output ------------------------------------------------

    /// Records of the current page, filtered and sorted. Empty when nothing
    /// matches.
    pub fn visible_slice(&self) -> Vec<&R> {
        self.page_rows().iter().map(|&i| &self.records[i]).collect()
    }

    /// Every record passing the filter, in sort order, across all pages.
    pub fn filtered_records(&self) -> Vec<&R> {
        self.rows.iter().map(|&i| &self.records[i]).collect()
    }

    /// The shared collection.
    pub fn records(&self) -> &Arc<Vec<R>> {
        &self.records
    }

    /// Counts for status display.
    pub fn counts(&self) -> Counts {
        Counts {
            total_records: self.records.len(),
            filtered_records: self.rows.len(),
            selected_records: self.selection.len(),
        }
    }

    /// `"N of M row(s) selected."`
    pub fn status_line(&self) -> String {
        let counts = self.counts();
        format!(
            "{} of {} row(s) selected.",
            counts.selected_records, counts.filtered_records
        )
    }
}
