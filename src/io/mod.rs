//! CSV boundary of the Payroll Audit Engine.
//!
//! Timesheet exports come in and the discrepancy dataset goes out as CSV.
//! All schema and parse validation happens here, so the reconciliation and
//! aggregation core only ever sees well-formed records.

mod loader;
mod writer;

pub use loader::{
    COLUMN_DATE, COLUMN_EMPLOYEE_ID, COLUMN_TOTAL_HOURS, load_discrepancy_csv, load_timesheet_csv,
    read_discrepancy_records, read_timesheet_records,
};
pub use writer::{save_discrepancy_csv, write_discrepancy_records};
