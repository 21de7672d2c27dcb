//! Period-over-period total hours comparison.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TimesheetRecord;

/// The change in total hours between two snapshots of the TABS dataset.
///
/// # Example
///
/// ```
/// use payroll_audit::aggregation::PeriodDelta;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let delta = PeriodDelta {
///     delta_hours: Decimal::from_str("20.0").unwrap(),
///     delta_pct: Decimal::from_str("20.0").unwrap(),
/// };
/// assert_eq!(delta.delta_pct, Decimal::from_str("20").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDelta {
    /// Current total minus prior total, in hours.
    pub delta_hours: Decimal,
    /// The change as a percentage of the prior total. Zero when the prior
    /// total is zero.
    pub delta_pct: Decimal,
}

/// Compares total hours between the current and a prior TABS snapshot.
///
/// `delta_hours` is signed: positive when the current period reports more
/// hours. `delta_pct` is `delta_hours / prior_total * 100`, defined as zero
/// when the prior total is zero so an empty prior period never divides by
/// zero.
///
/// # Examples
///
/// ```
/// use payroll_audit::aggregation::period_over_period_delta;
/// use payroll_audit::models::TimesheetRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = |hours: &str| TimesheetRecord {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     employee_id: "E1".to_string(),
///     total_hours: Decimal::from_str(hours).unwrap(),
///     job_code: None,
///     project_id: None,
/// };
///
/// let current = vec![record("120.0")];
/// let prior = vec![record("100.0")];
///
/// let delta = period_over_period_delta(&current, &prior);
/// assert_eq!(delta.delta_hours, Decimal::from_str("20.0").unwrap());
/// assert_eq!(delta.delta_pct, Decimal::from_str("20").unwrap());
/// ```
pub fn period_over_period_delta(
    current: &[TimesheetRecord],
    prior: &[TimesheetRecord],
) -> PeriodDelta {
    let current_total: Decimal = current.iter().map(|r| r.total_hours).sum();
    let prior_total: Decimal = prior.iter().map(|r| r.total_hours).sum();

    let delta_hours = current_total - prior_total;
    let delta_pct = if prior_total.is_zero() {
        Decimal::ZERO
    } else {
        delta_hours / prior_total * Decimal::ONE_HUNDRED
    };

    PeriodDelta {
        delta_hours,
        delta_pct,
    }
}
