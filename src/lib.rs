//! Payroll Audit Engine for TABS/SAP timesheet reconciliation
//!
//! This crate aligns timesheet exports from the internal TABS system and the
//! external SAP payroll system on (date, employee), flags hour discrepancies
//! under a configurable tolerance, and derives the summary statistics and
//! chart datasets of the payroll audit report.

#![warn(missing_docs)]

pub mod aggregation;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod reconcile;
pub mod report;
