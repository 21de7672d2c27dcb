//! Configuration types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::reconcile::DEFAULT_TOLERANCE;

/// Audit parameters.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides, and the file itself is optional.
///
/// # Example
///
/// ```
/// use payroll_audit::config::AuditConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = AuditConfig::default();
/// assert_eq!(config.tolerance, Decimal::from_str("0.01").unwrap());
/// assert_eq!(config.top_mismatch_count, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Maximum absolute hour difference still considered a match.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
    /// Length of the ranked mismatch list in the report.
    #[serde(default = "default_top_mismatch_count")]
    pub top_mismatch_count: usize,
    /// Number of employees in the discrepancy ranking chart.
    #[serde(default = "default_top_employee_count")]
    pub top_employee_count: usize,
    /// Number of projects named in the summary block.
    #[serde(default = "default_top_project_count")]
    pub top_project_count: usize,
}

fn default_tolerance() -> Decimal {
    DEFAULT_TOLERANCE
}

fn default_top_mismatch_count() -> usize {
    15
}

fn default_top_employee_count() -> usize {
    10
}

fn default_top_project_count() -> usize {
    5
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            top_mismatch_count: default_top_mismatch_count(),
            top_employee_count: default_top_employee_count(),
            top_project_count: default_top_project_count(),
        }
    }
}
