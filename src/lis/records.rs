//! Record types of the LIS dashboard pages.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::column::BadgeVariant;
use crate::record::Record;
use crate::value::Value;

/// A closed set of status labels rendered as badges.
pub trait Status: Copy + Sized + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Display label, identical to the serialized form.
    fn as_str(self) -> &'static str;

    /// Badge style of the status.
    fn badge_variant(self) -> BadgeVariant;

    /// Parses a display label.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == label)
    }
}

/// Badge rule for a status column: unknown labels get the default badge.
pub fn badge_of<S: Status>(label: &str) -> BadgeVariant {
    S::from_label(label)
        .map(S::badge_variant)
        .unwrap_or_default()
}

macro_rules! impl_display {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

/// Where a sample is in the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleStatus {
    /// Registered at reception.
    Received,
    /// On an analyzer.
    #[serde(rename = "In-Progress")]
    InProgress,
    /// All tests done.
    Completed,
    /// Archived.
    Stored,
}

impl Status for SampleStatus {
    const ALL: &'static [Self] = &[
        Self::Received,
        Self::InProgress,
        Self::Completed,
        Self::Stored,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::InProgress => "In-Progress",
            Self::Completed => "Completed",
            Self::Stored => "Stored",
        }
    }

    fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::Received => BadgeVariant::Outline,
            Self::InProgress => BadgeVariant::Secondary,
            Self::Completed => BadgeVariant::Default,
            Self::Stored => BadgeVariant::Destructive,
        }
    }
}

/// Progress of a test order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Not started.
    Pending,
    /// Running.
    #[serde(rename = "In-Progress")]
    InProgress,
    /// Finished.
    Completed,
}

impl Status for OrderStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::InProgress, Self::Completed];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In-Progress",
            Self::Completed => "Completed",
        }
    }

    fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::Pending => BadgeVariant::Outline,
            Self::InProgress => BadgeVariant::Secondary,
            Self::Completed => BadgeVariant::Default,
        }
    }
}

/// Validation state of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultStatus {
    /// Entered, waiting for a supervisor.
    #[serde(rename = "Awaiting Validation")]
    AwaitingValidation,
    /// Released.
    Validated,
    /// Sent back.
    Rejected,
}

impl Status for ResultStatus {
    const ALL: &'static [Self] = &[Self::AwaitingValidation, Self::Validated, Self::Rejected];

    fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingValidation => "Awaiting Validation",
            Self::Validated => "Validated",
            Self::Rejected => "Rejected",
        }
    }

    fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::AwaitingValidation => BadgeVariant::Secondary,
            Self::Validated => BadgeVariant::Default,
            Self::Rejected => BadgeVariant::Destructive,
        }
    }
}

/// Account state of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    /// May sign in.
    Active,
    /// Deactivated.
    Inactive,
}

impl Status for UserStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive];

    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Default,
            Self::Inactive => BadgeVariant::Secondary,
        }
    }
}

/// Staff role. Also decides which navigation items a user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Bench staff.
    #[serde(rename = "Lab Technician")]
    LabTechnician,
    /// Validates results.
    Supervisor,
    /// Manages users, catalog and instruments.
    #[serde(rename = "System Administrator")]
    SystemAdministrator,
}

impl Status for UserRole {
    const ALL: &'static [Self] = &[
        Self::LabTechnician,
        Self::Supervisor,
        Self::SystemAdministrator,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::LabTechnician => "Lab Technician",
            Self::Supervisor => "Supervisor",
            Self::SystemAdministrator => "System Administrator",
        }
    }

    fn badge_variant(self) -> BadgeVariant {
        match self {
            Self::LabTechnician => BadgeVariant::Outline,
            Self::Supervisor => BadgeVariant::Secondary,
            Self::SystemAdministrator => BadgeVariant::Destructive,
        }
    }
}

impl_display!(SampleStatus, OrderStatus, ResultStatus, UserStatus, UserRole);

/// A registered specimen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Sample id, e.g. `SMP-2024-001`.
    pub id: String,
    /// Patient the sample was drawn from.
    pub patient_name: String,
    /// Lab status.
    pub status: SampleStatus,
    /// Day of registration.
    pub registration_date: NaiveDate,
}

impl Record for Sample {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, key: &str) -> Option<Value> {
        Some(match key {
            "id" => Value::text(self.id.as_str()),
            "patientName" => Value::text(self.patient_name.as_str()),
            "status" => Value::text(self.status.as_str()),
            "registrationDate" => Value::Date(self.registration_date),
            _ => return None,
        })
    }
}

/// A test ordered on a sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id, e.g. `ORD-2024-001`.
    pub id: String,
    /// Patient name.
    pub patient_name: String,
    /// Sample the test runs on.
    pub sample_id: String,
    /// Ordered test.
    pub test_name: String,
    /// Order status.
    pub status: OrderStatus,
    /// Day the order was placed.
    pub order_date: NaiveDate,
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, key: &str) -> Option<Value> {
        Some(match key {
            "id" => Value::text(self.id.as_str()),
            "patientName" => Value::text(self.patient_name.as_str()),
            "sampleId" => Value::text(self.sample_id.as_str()),
            "testName" => Value::text(self.test_name.as_str()),
            "status" => Value::text(self.status.as_str()),
            "orderDate" => Value::Date(self.order_date),
            _ => return None,
        })
    }
}

/// The outcome of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    /// Result id, e.g. `RES-2024-001`.
    pub id: String,
    /// Order the result belongs to.
    pub order_id: String,
    /// Patient name.
    pub patient_name: String,
    /// Test that produced the result.
    pub test_name: String,
    /// Free-text result value.
    pub result: String,
    /// Validation status.
    pub status: ResultStatus,
    /// Day the result was entered.
    pub result_date: NaiveDate,
}

impl Record for LabResult {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, key: &str) -> Option<Value> {
        Some(match key {
            "id" => Value::text(self.id.as_str()),
            "orderId" => Value::text(self.order_id.as_str()),
            "patientName" => Value::text(self.patient_name.as_str()),
            "testName" => Value::text(self.test_name.as_str()),
            "result" => Value::text(self.result.as_str()),
            "status" => Value::text(self.status.as_str()),
            "resultDate" => Value::Date(self.result_date),
            _ => return None,
        })
    }
}

/// A staff account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User id, e.g. `USR-001`.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Staff role.
    pub role: UserRole,
    /// Account state.
    pub status: UserStatus,
    /// Most recent sign-in.
    pub last_login: DateTime<Utc>,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, key: &str) -> Option<Value> {
        Some(match key {
            "id" => Value::text(self.id.as_str()),
            "name" => Value::text(self.name.as_str()),
            "email" => Value::text(self.email.as_str()),
            "role" => Value::text(self.role.as_str()),
            "status" => Value::text(self.status.as_str()),
            "lastLogin" => Value::Timestamp(self.last_login),
            _ => return None,
        })
    }
}

/// Who performed an audited action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
}

/// One entry of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event id, e.g. `EVT-001`.
    pub id: String,
    /// Acting user.
    pub user: Actor,
    /// Short action name, e.g. `User Login`.
    pub action: String,
    /// Human-readable description.
    pub details: String,
    /// When it happened.
    pub timestamp: DateTime<Utc>,
}

impl Record for AuditEvent {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self, key: &str) -> Option<Value> {
        Some(match key {
            "id" => Value::text(self.id.as_str()),
            "user" => Value::text(self.user.name.as_str()),
            "email" => Value::text(self.user.email.as_str()),
            "action" => Value::text(self.action.as_str()),
            "details" => Value::text(self.details.as_str()),
            "timestamp" => Value::Timestamp(self.timestamp),
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_round_trip_through_serde() {
        for status in SampleStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
            assert_eq!(SampleStatus::from_label(status.as_str()), Some(*status));
        }
        let role: UserRole = serde_json::from_str("\"System Administrator\"").unwrap();
        assert_eq!(role, UserRole::SystemAdministrator);
    }

    #[test]
    fn test_badge_rules() {
        assert_eq!(badge_of::<SampleStatus>("Stored"), BadgeVariant::Destructive);
        assert_eq!(badge_of::<SampleStatus>("Received"), BadgeVariant::Outline);
        assert_eq!(badge_of::<ResultStatus>("Awaiting Validation"), BadgeVariant::Secondary);
        assert_eq!(badge_of::<UserRole>("Lab Technician"), BadgeVariant::Outline);
        assert_eq!(badge_of::<UserStatus>("Inactive"), BadgeVariant::Secondary);
        assert_eq!(badge_of::<OrderStatus>("Unknown"), BadgeVariant::Default);
    }

    #[test]
    fn test_record_projection() {
        let sample = Sample {
            id: "SMP-1".into(),
            patient_name: "John Doe".into(),
            status: SampleStatus::InProgress,
            registration_date: NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
        };
        assert_eq!(sample.value("status"), Some(Value::text("In-Progress")));
        assert_eq!(sample.filter_value("registrationDate"), "2024-07-20");
        assert_eq!(sample.value("orderDate"), None);
    }
}
