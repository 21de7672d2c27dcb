//! Timesheet and discrepancy CSV loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{AuditError, AuditResult};
use crate::models::{ReconciledPair, TimesheetRecord};

/// Required date column of a timesheet export.
pub const COLUMN_DATE: &str = "Date";
/// Required employee column of a timesheet export.
pub const COLUMN_EMPLOYEE_ID: &str = "Employee_ID";
/// Required hours column of a timesheet export.
pub const COLUMN_TOTAL_HOURS: &str = "Total_Hours";

const COLUMN_JOB_CODE: &str = "Job_Code";
const COLUMN_PROJECT_ID: &str = "Project_ID";

const COLUMN_TABS_HOURS: &str = "TABS_Total_Hours";
const COLUMN_SAP_HOURS: &str = "SAP_Total_Hours";
const COLUMN_HOUR_DIFFERENCE: &str = "Hour_Difference";

/// Loads a timesheet CSV export from disk.
///
/// See [`read_timesheet_records`] for the accepted schema and the errors
/// raised on violations.
pub fn load_timesheet_csv<P: AsRef<Path>>(path: P) -> AuditResult<Vec<TimesheetRecord>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| AuditError::Io {
        path: source_name.clone(),
        source: e,
    })?;
    read_timesheet_records(file, &source_name)
}

/// Reads timesheet records from CSV data.
///
/// The export must carry `Date`, `Employee_ID`, and `Total_Hours` columns;
/// `Job_Code` and `Project_ID` are picked up when present. Dates are
/// accepted as ISO `YYYY-MM-DD` or US `MM/DD/YYYY`.
///
/// # Errors
///
/// - [`AuditError::MissingColumn`] when a required column is absent.
/// - [`AuditError::InvalidDate`] / [`AuditError::InvalidHours`] when a cell
///   does not parse, naming the offending row.
/// - [`AuditError::EmptyInput`] when the file has headers but no data rows.
pub fn read_timesheet_records<R: Read>(
    reader: R,
    source_name: &str,
) -> AuditResult<Vec<TimesheetRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = read_headers(&mut csv_reader, source_name)?;

    let date_idx = require_column(&headers, COLUMN_DATE, source_name)?;
    let employee_idx = require_column(&headers, COLUMN_EMPLOYEE_ID, source_name)?;
    let hours_idx = require_column(&headers, COLUMN_TOTAL_HOURS, source_name)?;
    let job_code_idx = headers.iter().position(|h| h == COLUMN_JOB_CODE);
    let project_idx = headers.iter().position(|h| h == COLUMN_PROJECT_ID);

    let mut records = Vec::new();

    for (row_number, row) in csv_reader.records().enumerate() {
        let row_number = row_number + 1;
        let row = row.map_err(|e| AuditError::Csv {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

        let date = parse_date(row.get(date_idx).unwrap_or(""), source_name, row_number)?;
        let employee_id = row.get(employee_idx).unwrap_or("").to_string();
        let total_hours = parse_hours(row.get(hours_idx).unwrap_or(""), source_name, row_number)?;

        records.push(TimesheetRecord {
            date,
            employee_id,
            total_hours,
            job_code: optional_cell(&row, job_code_idx),
            project_id: optional_cell(&row, project_idx),
        });
    }

    if records.is_empty() {
        return Err(AuditError::EmptyInput {
            source_name: source_name.to_string(),
        });
    }

    Ok(records)
}

/// Loads a previously exported discrepancy CSV from disk.
pub fn load_discrepancy_csv<P: AsRef<Path>>(path: P) -> AuditResult<Vec<ReconciledPair>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| AuditError::Io {
        path: source_name.clone(),
        source: e,
    })?;
    read_discrepancy_records(file, &source_name)
}

/// Reads discrepancy pairs from CSV data produced by the audit export.
///
/// Empty hour cells stay absent; they are never read as zero. Rows are
/// discrepancies by construction, so `is_match` is always false. A blank
/// difference cell is recomputed when both sides are present.
pub fn read_discrepancy_records<R: Read>(
    reader: R,
    source_name: &str,
) -> AuditResult<Vec<ReconciledPair>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = read_headers(&mut csv_reader, source_name)?;

    let date_idx = require_column(&headers, COLUMN_DATE, source_name)?;
    let employee_idx = require_column(&headers, COLUMN_EMPLOYEE_ID, source_name)?;
    let tabs_idx = require_column(&headers, COLUMN_TABS_HOURS, source_name)?;
    let sap_idx = require_column(&headers, COLUMN_SAP_HOURS, source_name)?;
    let diff_idx = require_column(&headers, COLUMN_HOUR_DIFFERENCE, source_name)?;

    let mut pairs = Vec::new();

    for (row_number, row) in csv_reader.records().enumerate() {
        let row_number = row_number + 1;
        let row = row.map_err(|e| AuditError::Csv {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

        let date = parse_date(row.get(date_idx).unwrap_or(""), source_name, row_number)?;
        let employee_id = row.get(employee_idx).unwrap_or("").to_string();
        let tabs_hours =
            parse_optional_hours(row.get(tabs_idx).unwrap_or(""), source_name, row_number)?;
        let sap_hours =
            parse_optional_hours(row.get(sap_idx).unwrap_or(""), source_name, row_number)?;
        let mut hour_difference =
            parse_optional_hours(row.get(diff_idx).unwrap_or(""), source_name, row_number)?;

        if hour_difference.is_none() {
            if let (Some(tabs), Some(sap)) = (tabs_hours, sap_hours) {
                hour_difference = Some(sap - tabs);
            }
        }

        pairs.push(ReconciledPair {
            date,
            employee_id,
            tabs_hours,
            sap_hours,
            hour_difference,
            is_match: false,
        });
    }

    Ok(pairs)
}

fn read_headers<R: Read>(
    reader: &mut csv::Reader<R>,
    source_name: &str,
) -> AuditResult<Vec<String>> {
    Ok(reader
        .headers()
        .map_err(|e| AuditError::Csv {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect())
}

fn require_column(headers: &[String], column: &str, source_name: &str) -> AuditResult<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| AuditError::MissingColumn {
            column: column.to_string(),
            source_name: source_name.to_string(),
        })
}

fn optional_cell(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn parse_date(value: &str, source_name: &str, row: usize) -> AuditResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .map_err(|_| AuditError::InvalidDate {
            value: value.to_string(),
            source_name: source_name.to_string(),
            row,
        })
}

fn parse_hours(value: &str, source_name: &str, row: usize) -> AuditResult<Decimal> {
    value.parse().map_err(|_| AuditError::InvalidHours {
        value: value.to_string(),
        source_name: source_name.to_string(),
        row,
    })
}

fn parse_optional_hours(
    value: &str,
    source_name: &str,
    row: usize,
) -> AuditResult<Option<Decimal>> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_hours(value, source_name, row).map(Some)
}
