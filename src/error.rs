//! Error types for the Payroll Audit Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during loading, reconciliation,
//! and report assembly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Audit Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_audit::error::AuditError;
///
/// let error = AuditError::MissingColumn {
///     column: "Total_Hours".to_string(),
///     source_name: "tabs.csv".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Required column 'Total_Hours' missing from tabs.csv"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// A required column was not present in an input file.
    #[error("Required column '{column}' missing from {source_name}")]
    MissingColumn {
        /// The column that was not found.
        column: String,
        /// The input the column was expected in.
        source_name: String,
    },

    /// A date cell could not be parsed.
    #[error("Invalid date '{value}' in {source_name} (row {row})")]
    InvalidDate {
        /// The raw cell contents.
        value: String,
        /// The input the cell came from.
        source_name: String,
        /// The 1-based data row number.
        row: usize,
    },

    /// An hours cell could not be parsed as a number.
    #[error("Invalid hours value '{value}' in {source_name} (row {row})")]
    InvalidHours {
        /// The raw cell contents.
        value: String,
        /// The input the cell came from.
        source_name: String,
        /// The 1-based data row number.
        row: usize,
    },

    /// A record carried a negative hours total.
    #[error("Negative hours {hours} for employee '{employee_id}' on {date}")]
    NegativeHours {
        /// The employee the record belongs to.
        employee_id: String,
        /// The date of the record.
        date: NaiveDate,
        /// The offending hours value.
        hours: Decimal,
    },

    /// An input contained no data rows where at least one is required.
    #[error("No records found in {source_name}")]
    EmptyInput {
        /// The input that was empty.
        source_name: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An underlying I/O operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path involved in the failed operation.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A CSV file could not be read or written.
    #[error("CSV error in {source_name}: {message}")]
    Csv {
        /// The file involved.
        source_name: String,
        /// A description of the CSV failure.
        message: String,
    },
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;
