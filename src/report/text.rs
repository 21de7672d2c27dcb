//! Plain-text rendering of the audit report.

use crate::models::{AuditReport, TopMismatch};

/// Renders the summary block and the ranked mismatch list as plain text.
///
/// This is the one rendering concern the engine owns; charts and document
/// layout belong to downstream renderers consuming the typed report.
pub fn render_text(report: &AuditReport) -> String {
    let mut lines: Vec<String> = Vec::new();
    let summary = &report.summary;

    lines.push(format!(
        "Payroll Report Summary ({})",
        report.generated_at.format("%Y-%m-%d")
    ));
    lines.push(format!("Employees in TABS: {}", summary.employees_in_tabs));
    lines.push(format!("Total TABS Records: {}", summary.total_records));
    lines.push(format!(
        "Job Codes: {} | Projects: {}",
        summary.distinct_job_codes, summary.distinct_projects
    ));
    lines.push(format!("Total TABS Hours: {:.2}", summary.total_hours));
    lines.push(format!(
        "Total Discrepancies: {}",
        summary.total_discrepancies
    ));

    if !summary.top_projects.is_empty() {
        lines.push("Top Projects by Total Hours:".to_string());
        for (project, hours) in &summary.top_projects {
            lines.push(format!("  - {}: {:.2} hrs", project, hours));
        }
    }

    if let Some(delta) = &summary.period_delta {
        lines.push(format!(
            "Period-to-Period Change: {:+.2} hrs ({:+.1}%)",
            delta.delta_hours.round_dp(2),
            delta.delta_pct.round_dp(1)
        ));
    }

    lines.push(String::new());
    lines.push("Top Mismatches (Date, Employee, Hours):".to_string());
    for mismatch in &report.top_mismatches {
        lines.push(mismatch_line(mismatch));
    }

    lines.join("\n") + "\n"
}

fn mismatch_line(mismatch: &TopMismatch) -> String {
    let magnitude = match (mismatch.hour_difference, mismatch.tabs_hours) {
        (Some(diff), _) => format!("{:+.2} hrs", diff.round_dp(2)),
        (None, None) => "missing in TABS".to_string(),
        (None, Some(_)) => "missing in SAP".to_string(),
    };

    format!(
        "{} | EmpID: {} | {}",
        mismatch.date.format("%Y-%m-%d"),
        mismatch.employee_id,
        magnitude
    )
}
