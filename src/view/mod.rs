//! Tabular view-model: sort, filter, column visibility, pagination and row
//! selection over a shared in-memory record collection.
//!
//! ## Derivation
//!
//! The visible slice is always derived in the same order:
//!
//! 1. the filter predicate runs over the **full** collection,
//! 2. the sort specification orders the filtered rows (stable; with no sort
//!    the collection's insertion order is kept),
//! 3. the paginator cuts `[page * page_size, (page + 1) * page_size)`.
//!
//! ## State rules
//!
//! - Sort, filter and visibility changes move the cursor back to page 0.
//! - The cursor is clamped to the last page; an empty result has one empty
//!   page 0.
//! - A filter change deselects rows it hides. Selection requests for rows
//!   outside the filtered set are ignored.
//!
//! No operation fails. Out-of-range requests clamp and unknown columns are
//! reported as a `false` return.
//!
//! ## Sharing
//!
//! The collection is held in an [`Arc`](std::sync::Arc) and never mutated,
//! so several views (two open tabs of the same page) can share it while
//! each keeps its own state.

mod keys;
mod model;


pub use keys::TableKeyMap;
pub use model::{Counts, TabularViewModel};
