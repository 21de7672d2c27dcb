//! Per-job-code hour totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::TimesheetRecord;

/// Sums total hours per job code, lowest first.
///
/// Records without a job code are excluded. Ties are broken by job code
/// ascending. The ascending order matches the horizontal-bar layout of the
/// job-code chart, smallest bar at the bottom.
pub fn hours_by_job_code(records: &[TimesheetRecord]) -> Vec<(String, Decimal)> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();

    for record in records {
        if let Some(code) = record.job_code.as_deref() {
            *totals.entry(code).or_insert(Decimal::ZERO) += record.total_hours;
        }
    }

    let mut out: Vec<(String, Decimal)> = totals
        .into_iter()
        .map(|(code, hours)| (code.to_string(), hours))
        .collect();
    out.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    out
}
