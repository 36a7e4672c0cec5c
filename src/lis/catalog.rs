//! Column catalogs and view factories for each dashboard page.
//!
//! Every page filters on one column: the patient name for samples, orders
//! and results, the user name for users and the action for the audit trail.
//! A filter column set in the passed [`ViewConfig`] takes precedence.

use std::sync::Arc;

use super::records::{
    badge_of, AuditEvent, LabResult, Order, OrderStatus, ResultStatus, Sample, SampleStatus, User,
    UserRole, UserStatus,
};
use crate::column::{formats, Column};
use crate::config::ViewConfig;
use crate::error::Result;
use crate::view::TabularViewModel;

fn with_default_filter(config: ViewConfig, column: &str) -> ViewConfig {
    if config.filter_column.is_some() {
        config
    } else {
        config.with_filter_column(column)
    }
}

/// Columns of the sample management page.
pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("id", "Sample ID").with_format(formats::lowercase),
        Column::new("patientName", "Patient Name"),
        Column::new("status", "Status").with_badge(badge_of::<SampleStatus>),
        Column::new("registrationDate", "Registration Date").with_format(formats::date),
    ]
}

/// Columns of the test orders page.
pub fn order_columns() -> Vec<Column> {
    vec![
        Column::new("id", "Order ID").with_format(formats::lowercase),
        Column::new("patientName", "Patient Name"),
        Column::new("sampleId", "Sample ID"),
        Column::new("testName", "Test Name"),
        Column::new("status", "Status").with_badge(badge_of::<OrderStatus>),
        Column::new("orderDate", "Order Date").with_format(formats::date),
    ]
}

/// Columns of the results page.
pub fn result_columns() -> Vec<Column> {
    vec![
        Column::new("id", "Result ID"),
        Column::new("orderId", "Order ID").with_format(formats::lowercase),
        Column::new("patientName", "Patient Name"),
        Column::new("testName", "Test Name"),
        Column::new("result", "Result"),
        Column::new("status", "Status").with_badge(badge_of::<ResultStatus>),
        Column::new("resultDate", "Result Date").with_format(formats::date),
    ]
}

/// Columns of the user management page. The email is not a column of its
/// own; it shows next to the name on the page.
pub fn user_columns() -> Vec<Column> {
    vec![
        Column::new("name", "User"),
        Column::new("role", "Role").with_badge(badge_of::<UserRole>),
        Column::new("status", "Status").with_badge(badge_of::<UserStatus>),
        Column::new("lastLogin", "Last Login").with_format(formats::timestamp),
    ]
}

/// Columns of the audit trail page.
pub fn audit_columns() -> Vec<Column> {
    vec![
        Column::new("id", "Event ID"),
        Column::new("user", "User"),
        Column::new("action", "Action"),
        Column::new("details", "Details"),
        Column::new("timestamp", "Timestamp").with_format(formats::timestamp),
    ]
}

/// Sample management view.
pub fn samples_view(
    records: Arc<Vec<Sample>>,
    config: ViewConfig,
) -> Result<TabularViewModel<Sample>> {
    TabularViewModel::new(
        records,
        sample_columns(),
        with_default_filter(config, "patientName"),
    )
}

/// Test orders view.
pub fn orders_view(records: Arc<Vec<Order>>, config: ViewConfig) -> Result<TabularViewModel<Order>> {
    TabularViewModel::new(
        records,
        order_columns(),
        with_default_filter(config, "patientName"),
    )
}

/// Results view.
pub fn results_view(
    records: Arc<Vec<LabResult>>,
    config: ViewConfig,
) -> Result<TabularViewModel<LabResult>> {
    TabularViewModel::new(
        records,
        result_columns(),
        with_default_filter(config, "patientName"),
    )
}

/// User management view.
pub fn users_view(records: Arc<Vec<User>>, config: ViewConfig) -> Result<TabularViewModel<User>> {
    TabularViewModel::new(records, user_columns(), with_default_filter(config, "name"))
}

/// Audit trail view.
pub fn audit_view(
    records: Arc<Vec<AuditEvent>>,
    config: ViewConfig,
) -> Result<TabularViewModel<AuditEvent>> {
    TabularViewModel::new(records, audit_columns(), with_default_filter(config, "action"))
}
