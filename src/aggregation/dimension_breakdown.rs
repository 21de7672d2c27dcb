//! Discrepancy breakdown by job code or project.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{ReconciledPair, RecordKey, TimesheetRecord};

/// The bucket that collects discrepancies whose key resolves to no
/// dimension value.
pub const UNKNOWN_DIMENSION: &str = "unknown";

/// Maps (date, employee) keys to a categorical dimension value, built from
/// a record batch's job codes or project ids.
///
/// When duplicate keys carry conflicting values, the lexicographically
/// smallest value wins, keeping the lookup independent of input order.
///
/// # Example
///
/// ```
/// use payroll_audit::aggregation::DimensionLookup;
/// use payroll_audit::models::TimesheetRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let records = vec![TimesheetRecord {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     employee_id: "E1".to_string(),
///     total_hours: Decimal::from_str("8.0").unwrap(),
///     job_code: Some("NURSE".to_string()),
///     project_id: None,
/// }];
///
/// let lookup = DimensionLookup::from_job_codes(&records);
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(lookup.resolve(date, "E1"), Some("NURSE"));
/// assert_eq!(lookup.resolve(date, "E2"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DimensionLookup {
    values: BTreeMap<RecordKey, String>,
}

impl DimensionLookup {
    /// Builds a lookup from the job codes of a record batch.
    pub fn from_job_codes(records: &[TimesheetRecord]) -> Self {
        Self::build(records, |r| r.job_code.as_deref())
    }

    /// Builds a lookup from the project ids of a record batch.
    pub fn from_projects(records: &[TimesheetRecord]) -> Self {
        Self::build(records, |r| r.project_id.as_deref())
    }

    fn build<'a>(
        records: &'a [TimesheetRecord],
        dimension: impl Fn(&'a TimesheetRecord) -> Option<&'a str>,
    ) -> Self {
        let mut values: BTreeMap<RecordKey, String> = BTreeMap::new();

        for record in records {
            let Some(value) = dimension(record) else {
                continue;
            };
            values
                .entry(record.key())
                .and_modify(|existing| {
                    if value < existing.as_str() {
                        *existing = value.to_string();
                    }
                })
                .or_insert_with(|| value.to_string());
        }

        Self { values }
    }

    /// Resolves a key to its dimension value, if one is known.
    pub fn resolve(&self, date: chrono::NaiveDate, employee_id: &str) -> Option<&str> {
        let key = RecordKey {
            date,
            employee_id: employee_id.to_string(),
        };
        self.values.get(&key).map(String::as_str)
    }
}

/// Sums the net hour difference of each discrepancy into its dimension
/// bucket.
///
/// Keys the lookup cannot resolve land in the [`UNKNOWN_DIMENSION`] bucket;
/// no discrepancy is ever dropped silently. One-sided pairs have no
/// computable difference and contribute zero to their bucket, which still
/// surfaces the bucket itself.
pub fn breakdown_by_dimension(
    discrepancies: &[ReconciledPair],
    lookup: &DimensionLookup,
) -> BTreeMap<String, Decimal> {
    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();

    for pair in discrepancies {
        let bucket = lookup
            .resolve(pair.date, &pair.employee_id)
            .unwrap_or(UNKNOWN_DIMENSION)
            .to_string();
        let entry = buckets.entry(bucket).or_insert(Decimal::ZERO);
        if let Some(diff) = pair.hour_difference {
            *entry += diff;
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(day: &str, emp: &str, job: Option<&str>, project: Option<&str>) -> TimesheetRecord {
        TimesheetRecord {
            date: date(day),
            employee_id: emp.to_string(),
            total_hours: dec("8.0"),
            job_code: job.map(String::from),
            project_id: project.map(String::from),
        }
    }

    fn pair(day: &str, emp: &str, diff: Option<&str>) -> ReconciledPair {
        let diff = diff.map(dec);
        ReconciledPair {
            date: date(day),
            employee_id: emp.to_string(),
            tabs_hours: diff.map(|_| dec("8.0")),
            sap_hours: diff.map(|d| dec("8.0") + d),
            hour_difference: diff,
            is_match: false,
        }
    }

    #[test]
    fn test_breakdown_sums_into_buckets() {
        let sap = vec![
            record("2024-01-01", "E1", Some("NURSE"), None),
            record("2024-01-01", "E2", Some("NURSE"), None),
            record("2024-01-02", "E3", Some("COOK"), None),
        ];
        let discrepancies = vec![
            pair("2024-01-01", "E1", Some("0.5")),
            pair("2024-01-01", "E2", Some("1.0")),
            pair("2024-01-02", "E3", Some("-2.0")),
        ];

        let buckets = breakdown_by_dimension(&discrepancies, &DimensionLookup::from_job_codes(&sap));

        assert_eq!(buckets["NURSE"], dec("1.5"));
        assert_eq!(buckets["COOK"], dec("-2.0"));
    }

    #[test]
    fn test_unresolved_keys_go_to_unknown_bucket() {
        let sap = vec![record("2024-01-01", "E1", Some("NURSE"), None)];
        let discrepancies = vec![
            pair("2024-01-01", "E1", Some("0.5")),
            pair("2024-01-09", "E9", Some("2.0")),
        ];

        let buckets = breakdown_by_dimension(&discrepancies, &DimensionLookup::from_job_codes(&sap));

        assert_eq!(buckets["NURSE"], dec("0.5"));
        assert_eq!(buckets[UNKNOWN_DIMENSION], dec("2.0"));
    }

    #[test]
    fn test_no_discrepancy_dropped() {
        let discrepancies = vec![
            pair("2024-01-01", "E1", Some("0.5")),
            pair("2024-01-02", "E2", None),
        ];

        let buckets = breakdown_by_dimension(&discrepancies, &DimensionLookup::default());

        // Both land in the unknown bucket; the one-sided pair adds zero.
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[UNKNOWN_DIMENSION], dec("0.5"));
    }

    #[test]
    fn test_project_lookup_resolves_projects() {
        let sap = vec![record("2024-01-01", "E1", None, Some("P7"))];
        let discrepancies = vec![pair("2024-01-01", "E1", Some("1.0"))];

        let buckets = breakdown_by_dimension(&discrepancies, &DimensionLookup::from_projects(&sap));
        assert_eq!(buckets["P7"], dec("1.0"));
    }

    #[test]
    fn test_conflicting_values_resolve_to_smallest() {
        let forward = vec![
            record("2024-01-01", "E1", Some("NURSE"), None),
            record("2024-01-01", "E1", Some("ADMIN"), None),
        ];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        let a = DimensionLookup::from_job_codes(&forward);
        let b = DimensionLookup::from_job_codes(&reversed);

        assert_eq!(a.resolve(date("2024-01-01"), "E1"), Some("ADMIN"));
        assert_eq!(b.resolve(date("2024-01-01"), "E1"), Some("ADMIN"));
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let buckets = breakdown_by_dimension(&[], &DimensionLookup::default());
        assert!(buckets.is_empty());
    }
}
