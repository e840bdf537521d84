//! CSV export of a computed salary report.
//!
//! The file has two columns, `Component` and `Amount`, one row per
//! [`ReportRow`](salary_core::ReportRow). Amounts are written with two
//! decimal places.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use salary_core::SalaryReport;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReportExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot write report to '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Writes `report` as CSV to `writer`.
pub fn write_report<W: Write>(
    writer: W,
    report: &SalaryReport,
) -> Result<(), ReportExportError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["Component", "Amount"])?;

    for row in report.report_rows() {
        let amount = format!("{:.2}", row.amount);
        writer.write_record([row.label, amount.as_str()])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `report` into it.
pub fn export_report(
    path: &Path,
    report: &SalaryReport,
) -> Result<(), ReportExportError> {
    let file = File::create(path).map_err(|source| ReportExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_report(file, report)?;

    info!(path = %path.display(), "exported salary report");
    Ok(())
}
