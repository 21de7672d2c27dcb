//! Summary statistics and report assembly.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::aggregation::{period_over_period_delta, total_hours_by_project};
use crate::config::AuditConfig;
use crate::models::{AuditReport, AuditSummary, ReconciledPair, TimesheetRecord, TopMismatch};

use super::charts::chart_datasets;

/// Builds the summary block of the audit report.
///
/// All counts and totals are over the current TABS batch. The period delta
/// is computed only when a prior snapshot is supplied; an absent prior is
/// not an error, the summary simply omits the comparison.
pub fn build_summary(
    tabs: &[TimesheetRecord],
    discrepancies: &[ReconciledPair],
    prior_tabs: Option<&[TimesheetRecord]>,
    config: &AuditConfig,
) -> AuditSummary {
    let employees: BTreeSet<&str> = tabs.iter().map(|r| r.employee_id.as_str()).collect();
    let job_codes: BTreeSet<&str> = tabs.iter().filter_map(|r| r.job_code.as_deref()).collect();
    let projects: BTreeSet<&str> = tabs.iter().filter_map(|r| r.project_id.as_deref()).collect();

    let mut top_projects = total_hours_by_project(tabs);
    top_projects.truncate(config.top_project_count);

    AuditSummary {
        employees_in_tabs: employees.len(),
        total_records: tabs.len(),
        distinct_job_codes: job_codes.len(),
        distinct_projects: projects.len(),
        total_hours: tabs.iter().map(|r| r.total_hours).sum(),
        total_discrepancies: discrepancies.len(),
        top_projects,
        period_delta: prior_tabs.map(|prior| period_over_period_delta(tabs, prior)),
    }
}

/// Ranks discrepancies by absolute hour difference, largest first.
///
/// At most `n` entries are returned. Pairs without a computable difference
/// rank after every pair that has one, so a short discrepancy list still
/// fills the ranked report. Ties are broken by (date, employee) ascending.
pub fn top_mismatches(discrepancies: &[ReconciledPair], n: usize) -> Vec<TopMismatch> {
    let mut ranked: Vec<&ReconciledPair> = discrepancies.iter().collect();

    ranked.sort_by(|a, b| {
        compare_magnitude(b.absolute_difference(), a.absolute_difference())
            .then_with(|| (a.date, &a.employee_id).cmp(&(b.date, &b.employee_id)))
    });
    ranked.truncate(n);

    ranked
        .into_iter()
        .map(|pair| TopMismatch {
            date: pair.date,
            employee_id: pair.employee_id.clone(),
            tabs_hours: pair.tabs_hours,
            sap_hours: pair.sap_hours,
            hour_difference: pair.hour_difference,
        })
        .collect()
}

/// Absent magnitudes sort below every present one.
fn compare_magnitude(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Assembles the complete audit report: run metadata, summary, ranked
/// mismatches, and the chart datasets.
///
/// # Example
///
/// ```
/// use payroll_audit::config::AuditConfig;
/// use payroll_audit::report::build_report;
///
/// let report = build_report(&[], &[], &[], None, &AuditConfig::default());
/// assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
/// assert_eq!(report.charts.len(), 7);
/// ```
pub fn build_report(
    tabs: &[TimesheetRecord],
    sap: &[TimesheetRecord],
    discrepancies: &[ReconciledPair],
    prior_tabs: Option<&[TimesheetRecord]>,
    config: &AuditConfig,
) -> AuditReport {
    AuditReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        summary: build_summary(tabs, discrepancies, prior_tabs, config),
        top_mismatches: top_mismatches(discrepancies, config.top_mismatch_count),
        charts: chart_datasets(tabs, sap, discrepancies, config),
    }
}
