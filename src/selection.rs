//! Row selection tracked by record identity.

use std::collections::BTreeSet;

/// Checkbox state of the "select all on page" header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    /// Every row on the page is selected.
    All,
    /// Some, but not all, rows on the page are selected.
    Some,
    /// No row on the page is selected, or the page is empty.
    None,
}

/// A set of selected record identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets membership of `id`. Returns true when the set changed.
    pub fn set(&mut self, id: &str, selected: bool) -> bool {
        if selected {
            self.ids.insert(id.to_string())
        } else {
            self.ids.remove(id)
        }
    }

    /// Returns true when `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Drops every identity for which `keep` returns false. Returns the
    /// number of identities dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| keep(id));
        before - self.ids.len()
    }

    /// Number of selected identities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected identities in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Header state for a page made of `page_ids`.
    pub fn page_state<'a>(&self, page_ids: impl IntoIterator<Item = &'a str>) -> PageSelection {
        let (mut total, mut selected) = (0usize, 0usize);
        for id in page_ids {
            total += 1;
            if self.contains(id) {
                selected += 1;
            }
        }
        match selected {
            0 => PageSelection::None,
            n if n == total => PageSelection::All,
            _ => PageSelection::Some,
        }
    }
}
