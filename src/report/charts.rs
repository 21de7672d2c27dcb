//! Chart dataset construction.

use rust_decimal::Decimal;

use crate::aggregation::{
    DimensionLookup, breakdown_by_dimension, distribution, hours_by_job_code, mismatches_by_date,
    net_difference_by_date, top_n_by_absolute_difference,
};
use crate::config::AuditConfig;
use crate::models::{ChartDataset, ChartPoint, ReconciledPair, TimesheetRecord};

/// Produces the seven chart datasets of the audit report, in report order:
///
/// 1. mismatch counts by date
/// 2. top employees by absolute hour discrepancy
/// 3. the raw hour-difference distribution (unlabeled values; the renderer
///    bins them)
/// 4. net hour difference by date
/// 5. total hours by job code (TABS)
/// 6. net mismatched hours by job code (resolved through SAP records)
/// 7. net mismatched hours by project (resolved through SAP records)
///
/// Every dataset is data only; titles and axis labels are carried so the
/// renderer needs no knowledge of the audit semantics.
pub fn chart_datasets(
    tabs: &[TimesheetRecord],
    sap: &[TimesheetRecord],
    discrepancies: &[ReconciledPair],
    config: &AuditConfig,
) -> Vec<ChartDataset> {
    vec![
        mismatch_counts_chart(discrepancies),
        top_employees_chart(discrepancies, config.top_employee_count),
        distribution_chart(discrepancies),
        net_trend_chart(discrepancies),
        job_code_hours_chart(tabs),
        job_code_mismatch_chart(discrepancies, sap),
        project_mismatch_chart(discrepancies, sap),
    ]
}

fn mismatch_counts_chart(discrepancies: &[ReconciledPair]) -> ChartDataset {
    ChartDataset {
        title: "Mismatched Records by Date".to_string(),
        x_label: "Date".to_string(),
        y_label: "Count".to_string(),
        points: mismatches_by_date(discrepancies)
            .into_iter()
            .map(|(date, count)| ChartPoint {
                label: date.format("%Y-%m-%d").to_string(),
                value: Decimal::from(count),
            })
            .collect(),
    }
}

fn top_employees_chart(discrepancies: &[ReconciledPair], n: usize) -> ChartDataset {
    ChartDataset {
        title: format!("Top {n} Employees by Hour Discrepancy"),
        x_label: "Absolute Hour Difference".to_string(),
        y_label: "Employee ID".to_string(),
        points: top_n_by_absolute_difference(discrepancies, n)
            .into_iter()
            .map(|(employee_id, total)| ChartPoint {
                label: employee_id,
                value: total,
            })
            .collect(),
    }
}

fn distribution_chart(discrepancies: &[ReconciledPair]) -> ChartDataset {
    ChartDataset {
        title: "Distribution of Hour Differences (SAP - TABS)".to_string(),
        x_label: "Hour Difference".to_string(),
        y_label: "Frequency".to_string(),
        points: distribution(discrepancies)
            .into_iter()
            .map(|value| ChartPoint {
                label: String::new(),
                value,
            })
            .collect(),
    }
}

fn net_trend_chart(discrepancies: &[ReconciledPair]) -> ChartDataset {
    ChartDataset {
        title: "Net Hour Difference by Date (SAP - TABS)".to_string(),
        x_label: "Date".to_string(),
        y_label: "Net Hour Difference".to_string(),
        points: net_difference_by_date(discrepancies)
            .into_iter()
            .map(|(date, net)| ChartPoint {
                label: date.format("%Y-%m-%d").to_string(),
                value: net,
            })
            .collect(),
    }
}

fn job_code_hours_chart(tabs: &[TimesheetRecord]) -> ChartDataset {
    ChartDataset {
        title: "Total Hours by Job Code".to_string(),
        x_label: "Total Hours Worked".to_string(),
        y_label: "Job Code".to_string(),
        points: hours_by_job_code(tabs)
            .into_iter()
            .map(|(code, hours)| ChartPoint {
                label: code,
                value: hours,
            })
            .collect(),
    }
}

fn job_code_mismatch_chart(
    discrepancies: &[ReconciledPair],
    sap: &[TimesheetRecord],
) -> ChartDataset {
    ChartDataset {
        title: "Mismatched Hours by Job Code".to_string(),
        x_label: "Net Hour Discrepancy (SAP - TABS)".to_string(),
        y_label: "Job Code".to_string(),
        points: bucket_points(breakdown_by_dimension(
            discrepancies,
            &DimensionLookup::from_job_codes(sap),
        )),
    }
}

fn project_mismatch_chart(
    discrepancies: &[ReconciledPair],
    sap: &[TimesheetRecord],
) -> ChartDataset {
    ChartDataset {
        title: "Mismatched Hours by Project".to_string(),
        x_label: "Net Hour Discrepancy".to_string(),
        y_label: "Project ID".to_string(),
        points: bucket_points(breakdown_by_dimension(
            discrepancies,
            &DimensionLookup::from_projects(sap),
        )),
    }
}

/// Bucket charts plot smallest net value first, matching the horizontal
/// bar layout.
fn bucket_points(buckets: std::collections::BTreeMap<String, Decimal>) -> Vec<ChartPoint> {
    let mut points: Vec<(String, Decimal)> = buckets.into_iter().collect();
    points.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    points
        .into_iter()
        .map(|(label, value)| ChartPoint { label, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::UNKNOWN_DIMENSION;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(day: &str, emp: &str, job: Option<&str>, project: Option<&str>) -> TimesheetRecord {
        TimesheetRecord {
            date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            employee_id: emp.to_string(),
            total_hours: dec("8.0"),
            job_code: job.map(String::from),
            project_id: project.map(String::from),
        }
    }

    fn pair(day: &str, emp: &str, diff: &str) -> ReconciledPair {
        ReconciledPair {
            date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            employee_id: emp.to_string(),
            tabs_hours: Some(dec("8.0")),
            sap_hours: Some(dec("8.0") + dec(diff)),
            hour_difference: Some(dec(diff)),
            is_match: false,
        }
    }

    #[test]
    fn test_seven_datasets_in_report_order() {
        let charts = chart_datasets(&[], &[], &[], &AuditConfig::default());

        let titles: Vec<&str> = charts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Mismatched Records by Date",
                "Top 10 Employees by Hour Discrepancy",
                "Distribution of Hour Differences (SAP - TABS)",
                "Net Hour Difference by Date (SAP - TABS)",
                "Total Hours by Job Code",
                "Mismatched Hours by Job Code",
                "Mismatched Hours by Project",
            ]
        );
    }

    #[test]
    fn test_mismatch_counts_labeled_by_date() {
        let discrepancies = vec![
            pair("2024-01-01", "E1", "0.5"),
            pair("2024-01-01", "E2", "1.0"),
        ];

        let charts = chart_datasets(&[], &[], &discrepancies, &AuditConfig::default());

        assert_eq!(charts[0].points.len(), 1);
        assert_eq!(charts[0].points[0].label, "2024-01-01");
        assert_eq!(charts[0].points[0].value, dec("2"));
    }

    #[test]
    fn test_dimension_chart_resolves_through_sap() {
        let sap = vec![
            record("2024-01-01", "E1", Some("NURSE"), Some("P1")),
            record("2024-01-01", "E2", Some("COOK"), None),
        ];
        let discrepancies = vec![
            pair("2024-01-01", "E1", "2.0"),
            pair("2024-01-01", "E2", "-0.5"),
        ];

        let charts = chart_datasets(&[], &sap, &discrepancies, &AuditConfig::default());

        let job_chart = &charts[5];
        assert_eq!(job_chart.points[0].label, "COOK");
        assert_eq!(job_chart.points[0].value, dec("-0.5"));
        assert_eq!(job_chart.points[1].label, "NURSE");

        let project_chart = &charts[6];
        assert_eq!(project_chart.points[0].label, UNKNOWN_DIMENSION);
        assert_eq!(project_chart.points[1].label, "P1");
    }

    #[test]
    fn test_distribution_points_unlabeled_and_sorted() {
        let discrepancies = vec![
            pair("2024-01-01", "E1", "1.0"),
            pair("2024-01-02", "E2", "-2.0"),
        ];

        let charts = chart_datasets(&[], &[], &discrepancies, &AuditConfig::default());

        let dist = &charts[2];
        assert!(dist.points.iter().all(|p| p.label.is_empty()));
        assert_eq!(dist.points[0].value, dec("-2.0"));
        assert_eq!(dist.points[1].value, dec("1.0"));
    }

    #[test]
    fn test_top_employee_chart_respects_config() {
        let discrepancies = vec![
            pair("2024-01-01", "E1", "1.0"),
            pair("2024-01-01", "E2", "2.0"),
            pair("2024-01-01", "E3", "3.0"),
        ];
        let config = AuditConfig {
            top_employee_count: 2,
            ..AuditConfig::default()
        };

        let charts = chart_datasets(&[], &[], &discrepancies, &config);

        assert_eq!(charts[1].title, "Top 2 Employees by Hour Discrepancy");
        assert_eq!(charts[1].points.len(), 2);
        assert_eq!(charts[1].points[0].label, "E3");
    }
}
