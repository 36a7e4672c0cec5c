//! Demo data shipped with the dashboard.
//!
//! The JSON files are embedded at compile time and parsed on each call.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::records::{AuditEvent, LabResult, Order, Sample, User};
use crate::error::Result;

const SAMPLES: &str = include_str!("fixtures/samples.json");
const ORDERS: &str = include_str!("fixtures/orders.json");
const RESULTS: &str = include_str!("fixtures/results.json");
const USERS: &str = include_str!("fixtures/users.json");
const AUDIT: &str = include_str!("fixtures/audit.json");

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>> {
    let records: Vec<T> = serde_json::from_str(json)?;
    debug!(fixture = name, count = records.len(), "fixture loaded");
    Ok(records)
}

/// Registered samples.
pub fn samples() -> Result<Vec<Sample>> {
    parse("samples", SAMPLES)
}

/// Test orders.
pub fn orders() -> Result<Vec<Order>> {
    parse("orders", ORDERS)
}

/// Entered results.
pub fn results() -> Result<Vec<LabResult>> {
    parse("results", RESULTS)
}

/// Staff accounts.
pub fn users() -> Result<Vec<User>> {
    parse("users", USERS)
}

/// Audit trail, newest first.
pub fn audit_events() -> Result<Vec<AuditEvent>> {
    parse("audit", AUDIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lis::records::{ResultStatus, SampleStatus, UserRole};
    use crate::record::Record;

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(samples().unwrap().len(), 6);
        assert_eq!(orders().unwrap().len(), 6);
        assert_eq!(results().unwrap().len(), 4);
        assert_eq!(users().unwrap().len(), 4);
        assert_eq!(audit_events().unwrap().len(), 5);
    }

    #[test]
    fn test_fixture_contents() {
        let samples = samples().unwrap();
        assert_eq!(samples[3].patient_name, "Mary Johnson");
        assert_eq!(samples[3].status, SampleStatus::Stored);

        let results = results().unwrap();
        assert_eq!(results[1].status, ResultStatus::AwaitingValidation);
        assert_eq!(results[2].order_id, "ORD-2024-004");

        let users = users().unwrap();
        assert_eq!(users[0].role, UserRole::SystemAdministrator);

        let audit = audit_events().unwrap();
        assert_eq!(audit[1].user.email, "jane.t@smartlis.com");
    }

    #[test]
    fn test_ids_are_unique() {
        let orders = orders().unwrap();
        let mut ids: Vec<&str> = orders.iter().map(|o| o.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
    }
}
