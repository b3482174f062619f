//! Report writer
//!
//! Only writes finished results to CSV or xlsx. Knows nothing about how they were built.

use crate::error::{AppError, AppResult};
use crate::models::{AssignmentMap, GroupCount};
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;
use tracing::debug;

pub const ASSIGNMENT_HEADER: [&str; 4] = [
    "Employee_Name",
    "Employee_EmailID",
    "Secret_Child_Name",
    "Secret_Child_EmailID",
];

pub const GROUP_COUNT_HEADER: [&str; 2] = ["Group name", "Number of occurrences"];

/// Report writer
///
/// Group counts go to an xlsx sheet when the path ends in `.xlsx`, CSV
/// otherwise. Assignments are always CSV.
///
/// Each call opens, writes, flushes and closes its file. A failure midway
/// leaves whatever was already written in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// One row per giver: giver name, giver email, receiver name, receiver email
    pub fn write_assignments(&self, path: &Path, assignments: &AssignmentMap) -> AppResult<()> {
        debug!("writing {} assignments to {}", assignments.len(), path.display());

        let fail = |e: csv::Error| AppError::file_write_failed(path.display().to_string(), e);
        let mut writer = csv::Writer::from_path(path).map_err(fail)?;

        writer.write_record(ASSIGNMENT_HEADER).map_err(fail)?;
        for assignment in assignments {
            writer
                .write_record([
                    assignment.giver.name(),
                    assignment.giver.email(),
                    assignment.receiver.name(),
                    assignment.receiver.email(),
                ])
                .map_err(fail)?;
        }

        writer
            .flush()
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))
    }

    pub fn write_group_counts(&self, path: &Path, rows: &[GroupCount]) -> AppResult<()> {
        debug!("writing {} group rows to {}", rows.len(), path.display());

        let is_xlsx = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
        if is_xlsx {
            return write_group_counts_xlsx(path, rows)
                .map_err(|e| AppError::file_write_failed(path.display().to_string(), e));
        }

        let fail = |e: csv::Error| AppError::file_write_failed(path.display().to_string(), e);
        let mut writer = csv::Writer::from_path(path).map_err(fail)?;

        writer.write_record(GROUP_COUNT_HEADER).map_err(fail)?;
        for row in rows {
            writer
                .write_record([row.name.as_str(), row.count.to_string().as_str()])
                .map_err(fail)?;
        }

        writer
            .flush()
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))
    }
}

fn write_group_counts_xlsx(path: &Path, rows: &[GroupCount]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1")?;

    for (col, caption) in GROUP_COUNT_HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *caption)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, row.name.as_str())?;
        sheet.write_number(r, 1, row.count as f64)?;
    }

    workbook.save(path)
}
