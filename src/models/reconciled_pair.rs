//! Reconciled pair model.
//!
//! This module defines [`ReconciledPair`], one entry of the full outer join
//! of the TABS and SAP datasets.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One (date, employee) key of the joined datasets, with the hours each
/// side reported and the classification outcome.
///
/// `hour_difference` is `SAP - TABS` and is only defined when both sides
/// reported hours; an absent side is never treated as zero. A pair with
/// either side absent is never a match.
///
/// # Example
///
/// ```
/// use payroll_audit::models::ReconciledPair;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pair = ReconciledPair {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     employee_id: "E1".to_string(),
///     tabs_hours: Some(Decimal::from_str("8.0").unwrap()),
///     sap_hours: Some(Decimal::from_str("8.5").unwrap()),
///     hour_difference: Some(Decimal::from_str("0.5").unwrap()),
///     is_match: false,
/// };
/// assert!(pair.is_discrepancy());
/// assert_eq!(pair.absolute_difference(), Some(Decimal::from_str("0.5").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledPair {
    /// The calendar date of the pair.
    pub date: NaiveDate,
    /// The employee the pair belongs to.
    pub employee_id: String,
    /// Hours reported by TABS, absent when the key exists only in SAP.
    pub tabs_hours: Option<Decimal>,
    /// Hours reported by SAP, absent when the key exists only in TABS.
    pub sap_hours: Option<Decimal>,
    /// `sap_hours - tabs_hours`, defined only when both sides are present.
    pub hour_difference: Option<Decimal>,
    /// True iff both sides are present and the difference is within tolerance.
    pub is_match: bool,
}

impl ReconciledPair {
    /// Returns true when this pair is a discrepancy.
    pub fn is_discrepancy(&self) -> bool {
        !self.is_match
    }

    /// The absolute hour difference, when one is defined.
    pub fn absolute_difference(&self) -> Option<Decimal> {
        self.hour_difference.map(|d| d.abs())
    }

    /// Returns true when exactly one source system reported this key.
    pub fn is_one_sided(&self) -> bool {
        self.tabs_hours.is_none() || self.sap_hours.is_none()
    }
}
