//! Audit report models.
//!
//! This module contains the [`AuditReport`] type and its associated
//! structures that capture the outputs of a payroll audit run: summary
//! statistics, the ranked mismatch list, and the chart datasets consumed
//! by the report renderer.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::PeriodDelta;

/// Summary statistics over one audit run.
///
/// Counts and totals are taken over the current TABS batch; the period
/// delta is present only when a prior snapshot was supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Number of distinct employees in the TABS batch.
    pub employees_in_tabs: usize,
    /// Number of TABS records.
    pub total_records: usize,
    /// Number of distinct job codes in the TABS batch.
    pub distinct_job_codes: usize,
    /// Number of distinct projects in the TABS batch.
    pub distinct_projects: usize,
    /// Sum of all TABS hours.
    pub total_hours: Decimal,
    /// Number of discrepancies found.
    pub total_discrepancies: usize,
    /// Highest-hour projects, descending.
    pub top_projects: Vec<(String, Decimal)>,
    /// Change against the prior snapshot, when one was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_delta: Option<PeriodDelta>,
}

/// One entry of the ranked mismatch list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMismatch {
    /// The date of the discrepancy.
    pub date: NaiveDate,
    /// The employee involved.
    pub employee_id: String,
    /// Hours reported by TABS, if any.
    pub tabs_hours: Option<Decimal>,
    /// Hours reported by SAP, if any.
    pub sap_hours: Option<Decimal>,
    /// The signed difference, when both sides reported.
    pub hour_difference: Option<Decimal>,
}

/// A single labeled value of a chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category label (a date, employee, job code, or project).
    pub label: String,
    /// The plotted value.
    pub value: Decimal,
}

/// One chart's worth of data, ready for a renderer.
///
/// The engine produces values only; binning, colors, and drawing are the
/// renderer's concern.
///
/// # Example
///
/// ```
/// use payroll_audit::models::{ChartDataset, ChartPoint};
/// use rust_decimal::Decimal;
///
/// let dataset = ChartDataset {
///     title: "Mismatched Records by Date".to_string(),
///     x_label: "Date".to_string(),
///     y_label: "Count".to_string(),
///     points: vec![ChartPoint {
///         label: "2024-01-01".to_string(),
///         value: Decimal::from(3),
///     }],
/// };
/// assert_eq!(dataset.points.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// The data points, in presentation order.
    pub points: Vec<ChartPoint>,
}

/// The complete output of an audit run.
///
/// # Example
///
/// ```
/// use payroll_audit::models::{AuditReport, AuditSummary};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = AuditReport {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     engine_version: env!("CARGO_PKG_VERSION").to_string(),
///     summary: AuditSummary {
///         employees_in_tabs: 0,
///         total_records: 0,
///         distinct_job_codes: 0,
///         distinct_projects: 0,
///         total_hours: Decimal::ZERO,
///         total_discrepancies: 0,
///         top_projects: vec![],
///         period_delta: None,
///     },
///     top_mismatches: vec![],
///     charts: vec![],
/// };
/// assert!(report.top_mismatches.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Unique identifier for this run.
    pub report_id: Uuid,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced it.
    pub engine_version: String,
    /// Summary statistics.
    pub summary: AuditSummary,
    /// The ranked largest discrepancies.
    pub top_mismatches: Vec<TopMismatch>,
    /// The chart datasets, in report order.
    pub charts: Vec<ChartDataset>,
}
