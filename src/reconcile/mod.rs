//! Reconciliation logic for the Payroll Audit Engine.
//!
//! This module aligns the TABS and SAP datasets on (date, employee),
//! computes the hour difference for each aligned key, and classifies
//! every pair as match or mismatch under a numeric tolerance.

mod outer_join;

pub use outer_join::{DEFAULT_TOLERANCE, discrepancies, reconcile};
