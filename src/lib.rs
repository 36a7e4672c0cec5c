#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/labgrid/")]

//! # labgrid
//!
//! Table view-models for laboratory dashboards: sorting, filtering, column
//! visibility, pagination and row selection over an in-memory record set,
//! plus the record types and pages of a small LIS (laboratory information
//! system) front end.
//!
//! ## Overview
//!
//! A [`TabularViewModel`](view::TabularViewModel) is built from three things:
//!
//! - a shared, read-only collection of [`Record`](record::Record)s,
//! - a list of [`Column`](column::Column) descriptors,
//! - a [`ViewConfig`](config::ViewConfig) (page size, filter column, hidden
//!   columns, ...), usually loaded from TOML.
//!
//! The view derives the visible page on demand. Every state change is a
//! plain method call that cannot fail; out-of-range requests clamp.
//!
//! ## Components
//!
//! - **View state**: [`sort`], [`filter`], [`selection`], [`paginator`]
//! - **Output**: [`render`] (text table), [`export`] (JSON and CSV)
//! - **Input**: [`key`] bindings driven by crossterm key events
//! - **Ambient**: [`config`], [`logging`], [`error`]
//! - **Domain**: [`lis`] records, fixtures, page catalogs, navigation
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use labgrid::prelude::*;
//! use labgrid::lis::{catalog, fixtures};
//!
//! let samples = Arc::new(fixtures::samples()?);
//! let config = ViewConfig::from_toml_str("page_size = 5")?;
//! let mut view = catalog::samples_view(samples, config)?;
//!
//! view.toggle_sort("registrationDate");
//! view.toggle_all_on_page(true);
//! assert_eq!(view.counts().selected_records, 5);
//!
//! println!("{}", labgrid::render::render(&view));
//! # Ok::<(), labgrid::Error>(())
//! ```
//!
//! ## Key bindings
//!
//! Views react to crossterm key events through [`TabularViewModel::handle_key`](view::TabularViewModel::handle_key):
//!
//! ```rust
//! use std::sync::Arc;
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use labgrid::lis::{catalog, fixtures};
//! use labgrid::ViewConfig;
//!
//! let orders = Arc::new(fixtures::orders()?);
//! let mut view = catalog::orders_view(orders, ViewConfig::default().with_page_size(4))?;
//!
//! assert!(view.handle_key(&KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)));
//! assert_eq!(view.page(), 1);
//! println!("{}", view.help_view());
//! # Ok::<(), labgrid::Error>(())
//! ```

pub mod column;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod key;
pub mod lis;
pub mod logging;
pub mod paginator;
pub mod record;
pub mod render;
pub mod selection;
pub mod sort;
pub mod value;
pub mod view;

pub use config::ViewConfig;
pub use error::{Error, Result};
pub use view::TabularViewModel;

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::column::{BadgeVariant, Cell, Column};
    pub use crate::config::ViewConfig;
    pub use crate::error::{Error, Result};
    pub use crate::export::{export, ExportFormat};
    pub use crate::filter::MatchMode;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::Type as PaginationStyle;
    pub use crate::record::Record;
    pub use crate::selection::PageSelection;
    pub use crate::sort::{SortDirection, SortSpec};
    pub use crate::value::Value;
    pub use crate::view::{Counts, TabularViewModel};
}
