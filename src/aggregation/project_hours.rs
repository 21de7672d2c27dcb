//! Per-project hour totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::TimesheetRecord;

/// Sums total hours per project, highest first.
///
/// Records without a project are excluded, not zero-filled. Ties are broken
/// by project id ascending so the ordering is deterministic.
///
/// # Example
///
/// ```
/// use payroll_audit::aggregation::total_hours_by_project;
/// use payroll_audit::models::TimesheetRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = |project: Option<&str>, hours: &str| TimesheetRecord {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     employee_id: "E1".to_string(),
///     total_hours: Decimal::from_str(hours).unwrap(),
///     job_code: None,
///     project_id: project.map(String::from),
/// };
///
/// let records = vec![
///     record(Some("P1"), "8.0"),
///     record(Some("P2"), "10.0"),
///     record(Some("P1"), "1.0"),
///     record(None, "99.0"),
/// ];
///
/// let totals = total_hours_by_project(&records);
/// assert_eq!(totals[0].0, "P2");
/// assert_eq!(totals[1], ("P1".to_string(), Decimal::from_str("9.0").unwrap()));
/// ```
pub fn total_hours_by_project(records: &[TimesheetRecord]) -> Vec<(String, Decimal)> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();

    for record in records {
        if let Some(project) = record.project_id.as_deref() {
            *totals.entry(project).or_insert(Decimal::ZERO) += record.total_hours;
        }
    }

    let mut out: Vec<(String, Decimal)> = totals
        .into_iter()
        .map(|(project, hours)| (project.to_string(), hours))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(project: Option<&str>, hours: &str) -> TimesheetRecord {
        TimesheetRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            employee_id: "E1".to_string(),
            total_hours: dec(hours),
            job_code: None,
            project_id: project.map(String::from),
        }
    }

    #[test]
    fn test_totals_sorted_descending() {
        let records = vec![
            record(Some("P1"), "5.0"),
            record(Some("P2"), "12.0"),
            record(Some("P3"), "8.0"),
        ];

        let totals = total_hours_by_project(&records);
        assert_eq!(
            totals,
            vec![
                ("P2".to_string(), dec("12.0")),
                ("P3".to_string(), dec("8.0")),
                ("P1".to_string(), dec("5.0")),
            ]
        );
    }

    #[test]
    fn test_records_without_project_excluded() {
        let records = vec![record(None, "40.0"), record(Some("P1"), "8.0")];

        let totals = total_hours_by_project(&records);
        assert_eq!(totals, vec![("P1".to_string(), dec("8.0"))]);
    }

    #[test]
    fn test_ties_broken_by_project_id() {
        let records = vec![record(Some("P9"), "8.0"), record(Some("P1"), "8.0")];

        let totals = total_hours_by_project(&records);
        assert_eq!(totals[0].0, "P1");
        assert_eq!(totals[1].0, "P9");
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(total_hours_by_project(&[]).is_empty());
    }
}
