//! Discrepancy CSV export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{AuditError, AuditResult};
use crate::models::ReconciledPair;

/// Saves the discrepancy set to a CSV file.
///
/// See [`write_discrepancy_records`] for the exported schema.
pub fn save_discrepancy_csv<P: AsRef<Path>>(
    path: P,
    pairs: &[ReconciledPair],
) -> AuditResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let file = File::create(path).map_err(|e| AuditError::Io {
        path: path_str.clone(),
        source: e,
    })?;
    write_discrepancy_records(file, pairs, &path_str)
}

/// Writes discrepancy pairs as CSV with the columns
/// `Date, Employee_ID, TABS_Total_Hours, SAP_Total_Hours, Hour_Difference`.
///
/// Absent hours and differences are written as empty fields. They are never
/// coerced to zero: an empty cell means "this side did not report", which
/// is exactly the information the importing side needs back.
pub fn write_discrepancy_records<W: Write>(
    writer: W,
    pairs: &[ReconciledPair],
    destination: &str,
) -> AuditResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Date",
            "Employee_ID",
            "TABS_Total_Hours",
            "SAP_Total_Hours",
            "Hour_Difference",
        ])
        .map_err(|e| csv_error(destination, e))?;

    for pair in pairs {
        csv_writer
            .write_record([
                pair.date.format("%Y-%m-%d").to_string(),
                pair.employee_id.clone(),
                optional_field(pair.tabs_hours),
                optional_field(pair.sap_hours),
                optional_field(pair.hour_difference),
            ])
            .map_err(|e| csv_error(destination, e))?;
    }

    csv_writer.flush().map_err(|e| AuditError::Io {
        path: destination.to_string(),
        source: e,
    })
}

fn optional_field(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_error(destination: &str, e: csv::Error) -> AuditError {
    AuditError::Csv {
        source_name: destination.to_string(),
        message: e.to_string(),
    }
}
