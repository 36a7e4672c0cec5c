//! The laboratory dashboard built on the table view-model.
//!
//! Each page (samples, orders, results, users, audit trail) is a
//! [`TabularViewModel`](crate::view::TabularViewModel) over one record type,
//! built by a factory in [`catalog`] from the demo data in [`fixtures`].
//!
//! ```
//! use std::sync::Arc;
//! use labgrid::lis::{catalog, fixtures};
//! use labgrid::ViewConfig;
//!
//! let samples = Arc::new(fixtures::samples()?);
//! let mut view = catalog::samples_view(samples, ViewConfig::default())?;
//! view.set_filter("smith");
//! assert_eq!(view.counts().filtered_records, 1);
//! # Ok::<(), labgrid::Error>(())
//! ```

pub mod auth;
pub mod catalog;
pub mod clipboard;
pub mod fixtures;
pub mod nav;
pub mod records;

pub use auth::{sign_in, AcceptAll, Authenticator};
pub use nav::{NavItem, Navigation, Role, Route};
pub use records::{
    Actor, AuditEvent, LabResult, Order, OrderStatus, ResultStatus, Sample, SampleStatus, Status,
    User, UserRole, UserStatus,
};
