//! Timesheet record model and reconciliation key.
//!
//! This module defines the [`TimesheetRecord`] struct shared by both source
//! systems and the [`RecordKey`] used to align records across them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day's reported hours for one employee, from either source system.
///
/// Records are read once from an export and never mutated. `job_code` and
/// `project_id` are present only in feeds that carry them.
///
/// # Example
///
/// ```
/// use payroll_audit::models::TimesheetRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = TimesheetRecord {
///     date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     employee_id: "E042".to_string(),
///     total_hours: Decimal::from_str("7.5").unwrap(),
///     job_code: Some("NURSE".to_string()),
///     project_id: None,
/// };
/// assert_eq!(record.employee_id, "E042");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetRecord {
    /// The calendar date the hours were reported for.
    pub date: NaiveDate,
    /// Identifier of the employee. Unique per employee, not per record.
    pub employee_id: String,
    /// Total reported hours for the day. Never negative.
    pub total_hours: Decimal,
    /// Job code, when the feed carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_code: Option<String>,
    /// Project identifier, when the feed carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl TimesheetRecord {
    /// Returns the reconciliation key for this record.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            date: self.date,
            employee_id: self.employee_id.clone(),
        }
    }
}

/// The composite key records are aligned on: (date, employee).
///
/// Ordering is by date first, then employee id, so keyed maps iterate
/// chronologically and reconciled output is deterministic.
///
/// # Example
///
/// ```
/// use payroll_audit::models::RecordKey;
/// use chrono::NaiveDate;
///
/// let a = RecordKey {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     employee_id: "E2".to_string(),
/// };
/// let b = RecordKey {
///     date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
///     employee_id: "E1".to_string(),
/// };
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    /// The calendar date.
    pub date: NaiveDate,
    /// The employee identifier.
    pub employee_id: String,
}
