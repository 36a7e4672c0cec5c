//! Pagination cursor for table views.
//!
//! This component only tracks which page is current and how many pages
//! exist; it never owns the rows being paged. The table view feeds it the
//! filtered row count and asks it for slice bounds.

use serde::{Deserialize, Serialize};

use crate::key::{self, Binding, KeyMap};
use crossterm::event::{KeyCode, KeyEvent};

/// The type of pagination control to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// Display pagination as Arabic numerals (e.g., "1/5").
    #[default]
    Arabic,
    /// Display pagination as dots (e.g., "• ○ ○ ○ ○").
    Dots,
}

/// Key bindings for paging.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'
    pub next_page: Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: Binding::new(vec![KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next page"),
        }
    }
}

impl KeyMap for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }
}

/// Pagination state: current page, page size and page count.
///
/// The page index is always kept inside `[0, total_pages - 1]`, and there is
/// always at least one page, even for zero items.
///
/// # Examples
///
/// ```rust
/// use labgrid::paginator::Model;
///
/// let mut paginator = Model::new()
///     .with_per_page(5)
///     .with_total_items(6);
///
/// assert_eq!(paginator.total_pages, 2);
/// assert!(paginator.on_first_page());
/// assert_eq!(paginator.get_slice_bounds(6), (0, 5));
///
/// assert!(paginator.next_page());
/// assert_eq!(paginator.get_slice_bounds(6), (5, 6));
/// assert!(!paginator.next_page()); // already on the last page
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The type of pagination to display (Dots or Arabic).
    pub paginator_type: Type,
    /// The current page.
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages.
    pub total_pages: usize,

    /// The character to use for the active page in Dots mode.
    pub active_dot: String,
    /// The character to use for inactive pages in Dots mode.
    pub inactive_dot: String,
    /// The format string for Arabic mode (e.g., "%d/%d").
    pub arabic_format: String,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    /// Arabic display, page 0, one item per page, one page.
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 0,
            per_page: 1,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a new paginator model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total number of items and recalculates pages (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the display type (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the number of items per page.
    ///
    /// Values below 1 are clamped to 1. Callers must follow up with
    /// [`set_total_items`](Self::set_total_items) to recompute the page count.
    ///
    /// ```rust
    /// use labgrid::paginator::Model;
    ///
    /// let mut paginator = Model::new();
    /// paginator.set_per_page(0);
    /// assert_eq!(paginator.per_page, 1);
    /// ```
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Calculates the number of pages for `items` and clamps the current page.
    ///
    /// ```rust
    /// use labgrid::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10);
    /// paginator.set_total_items(95);
    /// assert_eq!(paginator.total_pages, 10);
    ///
    /// paginator.page = 9;
    /// paginator.set_total_items(0);
    /// assert_eq!(paginator.total_pages, 1);
    /// assert_eq!(paginator.page, 0);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        if items == 0 {
            self.total_pages = 1;
        } else {
            self.total_pages = items.div_ceil(self.per_page);
        }

        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
    }

    /// Moves to `page`, clamped to the last page. Returns the page landed on.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.min(self.total_pages.saturating_sub(1));
        self.page
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        if total_items == 0 {
            return 0;
        }
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Start (inclusive) and end (exclusive) indices of the current page
    /// within a sequence of `length` items.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Navigates to the previous page. Returns false on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Navigates to the next page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.on_last_page() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Returns true if the paginator is on the first page.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Returns true if the paginator is on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages.saturating_sub(1)
    }

    /// Applies a paging key. Returns true when the page changed.
    pub fn update(&mut self, event: &KeyEvent) -> bool {
        if self.keymap.next_page.matches(event) {
            self.next_page()
        } else if self.keymap.prev_page.matches(event) {
            self.prev_page()
        } else {
            false
        }
    }

    /// Renders the pagination control.
    ///
    /// ```rust
    /// use labgrid::paginator::{Model, Type};
    ///
    /// let mut paginator = Model::new().with_per_page(10).with_total_items(50);
    /// assert_eq!(paginator.view(), "1/5");
    ///
    /// paginator.paginator_type = Type::Dots;
    /// paginator.page = 2;
    /// assert_eq!(paginator.view(), "○ ○ • ○ ○");
    /// ```
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &(self.page + 1).to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        (0..self.total_pages)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_values() {
        let p = Model::new();
        assert_eq!(p.paginator_type, Type::Arabic);
        assert_eq!(p.page, 0);
        assert_eq!(p.per_page, 1);
        assert_eq!(p.total_pages, 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let p = Model::new().with_per_page(5).with_total_items(6);
        assert_eq!(p.total_pages, 2);
        let p = Model::new().with_per_page(5).with_total_items(10);
        assert_eq!(p.total_pages, 2);
    }

    #[test]
    fn test_page_clamped_when_items_shrink() {
        let mut p = Model::new().with_per_page(5).with_total_items(20);
        p.set_page(3);
        assert_eq!(p.page, 3);
        p.set_total_items(7);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut p = Model::new().with_per_page(5).with_total_items(12);
        assert_eq!(p.set_page(99), 2);
        assert_eq!(p.set_page(1), 1);
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut p = Model::new().with_per_page(5).with_total_items(12);
        assert!(!p.prev_page());
        assert_eq!(p.page, 0);
    }

    #[test]
    fn test_slice_bounds_last_page() {
        let mut p = Model::new().with_per_page(5).with_total_items(6);
        p.next_page();
        assert_eq!(p.get_slice_bounds(6), (5, 6));
        assert_eq!(p.items_on_page(6), 1);
    }

    #[test]
    fn test_slice_bounds_never_exceed_length() {
        let mut p = Model::new().with_per_page(5).with_total_items(20);
        p.set_page(3);
        // Stale length smaller than the page start.
        assert_eq!(p.get_slice_bounds(4), (4, 4));
        assert_eq!(p.items_on_page(0), 0);
    }

    #[test]
    fn test_update_with_keys() {
        let mut p = Model::new().with_per_page(2).with_total_items(5);
        assert!(p.update(&press(KeyCode::Right)));
        assert!(p.update(&press(KeyCode::Char('l'))));
        assert!(!p.update(&press(KeyCode::PageDown)));
        assert_eq!(p.page, 2);
        assert!(p.update(&press(KeyCode::Char('h'))));
        assert_eq!(p.page, 1);
        assert!(!p.update(&press(KeyCode::Char('x'))));
    }

    #[test]
    fn test_dots_view() {
        let p = Model::new()
            .with_per_page(1)
            .with_total_items(3)
            .with_type(Type::Dots);
        assert_eq!(p.view(), "• ○ ○");
    }

    #[test]
    fn test_custom_arabic_format() {
        let mut p = Model::new().with_per_page(10).with_total_items(30);
        p.arabic_format = "page %d of %d".to_string();
        p.next_page();
        assert_eq!(p.view(), "page 2 of 3");
    }
}
