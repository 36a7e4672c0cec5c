//! Plain-text rendering of a table view.
//!
//! Produces the same pieces a dashboard page shows: a header row, one line
//! per visible record with its selection box, a "No results." placeholder,
//! the selection status line and the pagination control. Cells are padded by
//! display width, so wide characters line up.

use unicode_width::UnicodeWidthStr;

use crate::column::Column;
use crate::record::Record;
use crate::selection::PageSelection;
use crate::view::TabularViewModel;

const SEPARATOR: &str = " | ";
const EMPTY: &str = "No results.";

fn checkbox(state: PageSelection) -> &'static str {
    match state {
        PageSelection::All => "[x]",
        PageSelection::Some => "[-]",
        PageSelection::None => "[ ]",
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let mut out = s.to_string();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(w)));
    out
}

fn header_label<R: Record>(view: &TabularViewModel<R>, column: &Column) -> String {
    let marker = view.sort().direction_of(&column.key).indicator();
    if marker.is_empty() {
        column.label.clone()
    } else {
        format!("{} {}", column.label, marker)
    }
}

/// Renders the current page of `view` as text.
pub fn render<R: Record>(view: &TabularViewModel<R>) -> String {
    let columns = view.visible_columns();
    let page = view.visible_slice();

    let headers: Vec<String> = columns.iter().map(|c| header_label(view, c)).collect();
    let cells: Vec<Vec<String>> = page
        .iter()
        .map(|r| columns.iter().map(|c| view.cell(r, c).text).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| UnicodeWidthStr::width(row[i].as_str()))
                .chain(std::iter::once(UnicodeWidthStr::width(h.as_str())))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(page.len() + 4);

    let header = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad(h, w))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    lines.push(
        format!("{} {}", checkbox(view.page_selection_state()), header)
            .trim_end()
            .to_string(),
    );

    let rule_width: usize = widths.iter().sum::<usize>()
        + SEPARATOR.len() * widths.len().saturating_sub(1)
        + 4;
    lines.push("-".repeat(rule_width));

    if page.is_empty() {
        lines.push(EMPTY.to_string());
    }
    for (record, row) in page.iter().zip(&cells) {
        let mark = if view.is_selected(record.id()) {
            "[x]"
        } else {
            "[ ]"
        };
        let body = row
            .iter()
            .zip(&widths)
            .map(|(c, &w)| pad(c, w))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(format!("{mark} {body}").trim_end().to_string());
    }

    lines.push(String::new());
    lines.push(format!("{}  {}", view.status_line(), view.paginator().view()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::sort::SortDirection;
    use crate::value::Value;
    use std::sync::Arc;

    struct Item(&'static str, &'static str);

    impl Record for Item {
        fn id(&self) -> &str {
            self.0
        }

        fn value(&self, key: &str) -> Option<Value> {
            match key {
                "id" => Some(Value::text(self.0)),
                "name" => Some(Value::text(self.1)),
                _ => None,
            }
        }
    }

    fn view() -> TabularViewModel<Item> {
        let records = Arc::new(vec![Item("1", "Zoë"), Item("2", "Al"), Item("3", "Bea")]);
        let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
        let config = ViewConfig::default()
            .with_page_size(2)
            .with_filter_column("name");
        TabularViewModel::new(records, columns, config).unwrap()
    }

    #[test]
    fn test_render_page() {
        let out = render(&view());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "[ ] ID | Name");
        assert_eq!(lines[2], "[ ] 1  | Zoë");
        assert_eq!(lines[3], "[ ] 2  | Al");
        assert_eq!(lines.last().copied(), Some("0 of 3 row(s) selected.  1/2"));
    }

    #[test]
    fn test_render_sort_marker_and_selection() {
        let mut v = view();
        v.set_sort("name", SortDirection::Ascending);
        v.toggle_row_selection("2", true);
        let out = render(&v);
        assert!(out.starts_with("[-] ID | Name ▲"));
        assert!(out.contains("[x] 2  | Al"));
    }

    #[test]
    fn test_render_empty() {
        let mut v = view();
        v.set_filter("nobody");
        let out = render(&v);
        assert!(out.contains("No results."));
        assert!(out.ends_with("0 of 0 row(s) selected.  1/1"));
    }

    #[test]
    fn test_render_hidden_column() {
        let mut v = view();
        v.set_column_visibility("id", false);
        let out = render(&v);
        assert_eq!(out.lines().next(), Some("[ ] Name"));
    }
}
