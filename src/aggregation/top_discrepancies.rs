//! Employee ranking by absolute hour discrepancy.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::ReconciledPair;

/// Ranks employees by their summed absolute hour difference, largest first.
///
/// At most `n` entries are returned. Ties are broken by employee id
/// ascending so the ranking is deterministic. Pairs without a computable
/// difference (one side absent) contribute nothing: there is no number to
/// accumulate for them.
///
/// # Example
///
/// ```
/// use payroll_audit::aggregation::top_n_by_absolute_difference;
/// use payroll_audit::models::ReconciledPair;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pair = |emp: &str, diff: &str| ReconciledPair {
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     employee_id: emp.to_string(),
///     tabs_hours: Some(Decimal::from_str("8.0").unwrap()),
///     sap_hours: Some(Decimal::from_str("8.0").unwrap() + Decimal::from_str(diff).unwrap()),
///     hour_difference: Some(Decimal::from_str(diff).unwrap()),
///     is_match: false,
/// };
///
/// let pairs = vec![pair("E1", "3.0"), pair("E2", "5.0"), pair("E3", "-5.0")];
/// let top = top_n_by_absolute_difference(&pairs, 2);
///
/// assert_eq!(top.len(), 2);
/// assert_eq!(top[0].0, "E2"); // 5.0 ties 5.0, E2 before E3
/// assert_eq!(top[1].0, "E3");
/// ```
pub fn top_n_by_absolute_difference(
    pairs: &[ReconciledPair],
    n: usize,
) -> Vec<(String, Decimal)> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();

    for pair in pairs {
        if let Some(abs) = pair.absolute_difference() {
            *totals.entry(pair.employee_id.as_str()).or_insert(Decimal::ZERO) += abs;
        }
    }

    let mut ranked: Vec<(String, Decimal)> = totals
        .into_iter()
        .map(|(emp, total)| (emp.to_string(), total))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn pair(date: &str, emp: &str, diff: Option<&str>) -> ReconciledPair {
        let diff = diff.map(dec);
        ReconciledPair {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            employee_id: emp.to_string(),
            tabs_hours: diff.map(|_| dec("8.0")),
            sap_hours: diff.map(|d| dec("8.0") + d),
            hour_difference: diff,
            is_match: false,
        }
    }

    // ==========================================================================
    // TN-001: n=2 over {E1: 3.0, E2: 5.0, E3: 5.0} returns [E2, E3]
    // ==========================================================================
    #[test]
    fn test_tn_001_tie_broken_by_employee_id() {
        let pairs = vec![
            pair("2024-01-01", "E3", Some("5.0")),
            pair("2024-01-01", "E1", Some("3.0")),
            pair("2024-01-01", "E2", Some("-5.0")),
        ];

        let top = top_n_by_absolute_difference(&pairs, 2);
        assert_eq!(
            top,
            vec![("E2".to_string(), dec("5.0")), ("E3".to_string(), dec("5.0"))]
        );
    }

    #[test]
    fn test_differences_accumulate_per_employee() {
        let pairs = vec![
            pair("2024-01-01", "E1", Some("2.0")),
            pair("2024-01-02", "E1", Some("-1.5")),
        ];

        let top = top_n_by_absolute_difference(&pairs, 10);
        assert_eq!(top, vec![("E1".to_string(), dec("3.5"))]);
    }

    #[test]
    fn test_one_sided_pairs_contribute_nothing() {
        let pairs = vec![
            pair("2024-01-01", "E1", None),
            pair("2024-01-01", "E2", Some("0.5")),
        ];

        let top = top_n_by_absolute_difference(&pairs, 10);
        assert_eq!(top, vec![("E2".to_string(), dec("0.5"))]);
    }

    #[test]
    fn test_zero_n_returns_empty() {
        let pairs = vec![pair("2024-01-01", "E1", Some("1.0"))];
        assert!(top_n_by_absolute_difference(&pairs, 0).is_empty());
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(top_n_by_absolute_difference(&[], 5).is_empty());
    }
}
