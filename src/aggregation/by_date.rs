//! Per-date discrepancy counts and net sums.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::ReconciledPair;

/// Counts discrepancies per date.
///
/// Every discrepancy row counts, including one-sided pairs. Dates with no
/// discrepancies are simply absent from the map.
pub fn mismatches_by_date(discrepancies: &[ReconciledPair]) -> BTreeMap<NaiveDate, usize> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for pair in discrepancies {
        *counts.entry(pair.date).or_insert(0) += 1;
    }
    counts
}

/// Sums the signed hour difference per date.
///
/// One-sided pairs have no computable difference; they contribute zero but
/// still surface their date, so a day of purely one-sided discrepancies is
/// visible in the trend rather than silently missing.
pub fn net_difference_by_date(discrepancies: &[ReconciledPair]) -> BTreeMap<NaiveDate, Decimal> {
    let mut sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for pair in discrepancies {
        let entry = sums.entry(pair.date).or_insert(Decimal::ZERO);
        if let Some(diff) = pair.hour_difference {
            *entry += diff;
        }
    }
    sums
}
