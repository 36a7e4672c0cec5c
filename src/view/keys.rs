//! Key bindings of the table view.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::trace;

use super::model::TabularViewModel;
use crate::key::{self, Binding, KeyMap};
use crate::record::Record;
use crate::sort::SortDirection;

/// Row and filter keys understood by [`TabularViewModel::handle_key`].
///
/// Paging keys live on the view's paginator.
#[derive(Debug, Clone)]
pub struct TableKeyMap {
    /// Select every row on the current page.
    pub select_page: Binding,
    /// Deselect every row on the current page.
    pub deselect_page: Binding,
    /// Drop the filter text.
    pub clear_filter: Binding,
    /// Drop the sort and return to insertion order.
    pub clear_sort: Binding,
}

impl Default for TableKeyMap {
    fn default() -> Self {
        Self {
            select_page: Binding::new(vec![KeyCode::Char('a')]).with_help("a", "select page"),
            deselect_page: Binding::new(vec![KeyCode::Char('A')]).with_help("A", "deselect page"),
            clear_filter: Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear filter"),
            clear_sort: Binding::new(vec![KeyCode::Char('s')]).with_help("s", "clear sort"),
        }
    }
}

impl KeyMap for TableKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.select_page, &self.clear_filter]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.select_page, &self.deselect_page],
            vec![&self.clear_filter, &self.clear_sort],
        ]
    }
}

impl<R: Record> TabularViewModel<R> {
    /// Key bindings of this view.
    pub fn keymap(&self) -> &TableKeyMap {
        &self.keymap
    }

    /// Mutable key bindings, for remapping.
    pub fn keymap_mut(&mut self) -> &mut TableKeyMap {
        &mut self.keymap
    }

    /// One-line help for paging and row keys.
    pub fn help_view(&self) -> String {
        [
            key::short_help_view(&self.paginator.keymap),
            key::short_help_view(&self.keymap),
        ]
        .join(" • ")
    }

    /// Applies a key press. Returns true when view state changed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let changed = if self.paginator.keymap.next_page.matches(event)
            || self.paginator.keymap.prev_page.matches(event)
        {
            self.paginator.update(event)
        } else if self.keymap.select_page.matches(event) {
            self.toggle_all_on_page(true) > 0
        } else if self.keymap.deselect_page.matches(event) {
            self.toggle_all_on_page(false) > 0
        } else if self.keymap.clear_filter.matches(event) {
            let had_filter = !self.filter_text().is_empty();
            self.clear_filter();
            had_filter
        } else if self.keymap.clear_sort.matches(event) {
            match self.sort().column().map(str::to_string) {
                Some(column) => self.set_sort(&column, SortDirection::None),
                None => false,
            }
        } else {
            false
        };
        trace!(code = ?event.code, changed, "key handled");
        changed
    }
}
