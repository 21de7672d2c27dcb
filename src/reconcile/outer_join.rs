//! Full outer join of the TABS and SAP timesheet batches.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{AuditError, AuditResult};
use crate::models::{ReconciledPair, RecordKey, TimesheetRecord};

/// The default match tolerance: differences under 0.01 hours are noise.
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Aligns the TABS and SAP batches on (date, employee) and classifies
/// every key as match or mismatch.
///
/// The result is the full outer join of the two inputs: every key present
/// in either batch appears exactly once, sorted by date then employee id.
/// No record from either input is dropped.
///
/// For each key:
/// - both sides present: `hour_difference = sap - tabs`, and the pair is a
///   match iff `|hour_difference| < tolerance` (strict).
/// - exactly one side present: the difference is undefined and the pair is
///   never a match. Absent hours stay absent; they are not coerced to zero.
///
/// Duplicate keys within one batch are summed before joining, so the
/// outcome is independent of input record order.
///
/// # Errors
///
/// Returns [`AuditError::NegativeHours`] if any record in either batch
/// carries a negative hours total. Nothing is reconciled in that case.
///
/// # Examples
///
/// ```
/// use payroll_audit::models::TimesheetRecord;
/// use payroll_audit::reconcile::{reconcile, DEFAULT_TOLERANCE};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = |emp: &str, hours: &str| TimesheetRecord {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     employee_id: emp.to_string(),
///     total_hours: Decimal::from_str(hours).unwrap(),
///     job_code: None,
///     project_id: None,
/// };
///
/// let tabs = vec![record("E1", "8.0")];
/// let sap = vec![record("E1", "8.5")];
///
/// let pairs = reconcile(&tabs, &sap, DEFAULT_TOLERANCE).unwrap();
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].hour_difference, Some(Decimal::from_str("0.5").unwrap()));
/// assert!(!pairs[0].is_match);
/// ```
pub fn reconcile(
    tabs: &[TimesheetRecord],
    sap: &[TimesheetRecord],
    tolerance: Decimal,
) -> AuditResult<Vec<ReconciledPair>> {
    let tabs_totals = sum_by_key(tabs)?;
    let sap_totals = sum_by_key(sap)?;

    let mut pairs = Vec::with_capacity(tabs_totals.len() + sap_totals.len());

    for (key, tabs_hours) in &tabs_totals {
        let sap_hours = sap_totals.get(key).copied();
        let hour_difference = sap_hours.map(|sap| sap - tabs_hours);
        let is_match = hour_difference.is_some_and(|diff| diff.abs() < tolerance);

        pairs.push(ReconciledPair {
            date: key.date,
            employee_id: key.employee_id.clone(),
            tabs_hours: Some(*tabs_hours),
            sap_hours,
            hour_difference,
            is_match,
        });
    }

    for (key, sap_hours) in &sap_totals {
        if !tabs_totals.contains_key(key) {
            pairs.push(ReconciledPair {
                date: key.date,
                employee_id: key.employee_id.clone(),
                tabs_hours: None,
                sap_hours: Some(*sap_hours),
                hour_difference: None,
                is_match: false,
            });
        }
    }

    // BTreeMap iteration keeps each side sorted; re-sort the merged set.
    pairs.sort_by(|a, b| (a.date, &a.employee_id).cmp(&(b.date, &b.employee_id)));

    Ok(pairs)
}

/// Filters a reconciled set down to its discrepancies.
///
/// # Example
///
/// ```
/// use payroll_audit::models::ReconciledPair;
/// use payroll_audit::reconcile::discrepancies;
/// use chrono::NaiveDate;
///
/// let pair = ReconciledPair {
///     date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
///     employee_id: "E2".to_string(),
///     tabs_hours: None,
///     sap_hours: None,
///     hour_difference: None,
///     is_match: false,
/// };
/// assert_eq!(discrepancies(&[pair]).len(), 1);
/// ```
pub fn discrepancies(pairs: &[ReconciledPair]) -> Vec<ReconciledPair> {
    pairs
        .iter()
        .filter(|p| p.is_discrepancy())
        .cloned()
        .collect()
}

/// Sums hours per (date, employee) key, rejecting negative totals.
fn sum_by_key(records: &[TimesheetRecord]) -> AuditResult<BTreeMap<RecordKey, Decimal>> {
    let mut totals: BTreeMap<RecordKey, Decimal> = BTreeMap::new();

    for record in records {
        if record.total_hours < Decimal::ZERO {
            return Err(AuditError::NegativeHours {
                employee_id: record.employee_id.clone(),
                date: record.date,
                hours: record.total_hours,
            });
        }
        *totals.entry(record.key()).or_insert(Decimal::ZERO) += record.total_hours;
    }

    Ok(totals)
}
