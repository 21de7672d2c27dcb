//! Audit report assembly for the Payroll Audit Engine.
//!
//! This module turns the aggregation outputs into the [`AuditReport`]
//! value consumed by renderers: the summary block, the ranked mismatch
//! list, and the seven chart datasets. Rendering itself stays outside the
//! engine; the only rendering done here is the plain-text summary.
//!
//! [`AuditReport`]: crate::models::AuditReport

mod charts;
mod summary;
mod text;

pub use charts::chart_datasets;
pub use summary::{build_report, build_summary, top_mismatches};
pub use text::render_text;
