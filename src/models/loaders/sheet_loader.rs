use crate::error::{AppError, AppResult, SheetError};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Read every non-empty cell of one column, below the header row
///
/// `.csv` files are read with their first record as the header and
/// `sheet_name` is ignored. Everything else goes through calamine
/// (xlsx, xlsm, xls, ods).
pub fn load_column(path: &Path, sheet_name: &str, column_name: &str) -> AppResult<Vec<String>> {
    let is_csv = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let cells = if is_csv {
        load_csv_column(path, column_name)?
    } else {
        load_workbook_column(path, sheet_name, column_name)?
    };

    tracing::debug!(
        "read {} non-empty cells from column '{}' of {}",
        cells.len(),
        column_name,
        path.display()
    );
    Ok(cells)
}

fn load_csv_column(path: &Path, column_name: &str) -> AppResult<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
    let index = headers
        .iter()
        .position(|h| h == column_name)
        .ok_or_else(|| column_not_found(path, column_name))?;

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        if let Some(cell) = record.get(index).filter(|c| !c.trim().is_empty()) {
            cells.push(cell.to_string());
        }
    }
    Ok(cells)
}

fn load_workbook_column(path: &Path, sheet_name: &str, column_name: &str) -> AppResult<Vec<String>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| SheetError::OpenFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    if !workbook.sheet_names().iter().any(|s| s == sheet_name) {
        return Err(SheetError::SheetNotFound {
            path: path.display().to_string(),
            sheet: sheet_name.to_string(),
        }
        .into());
    }

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| SheetError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| column_not_found(path, column_name))?;
    let index = header
        .iter()
        .position(|cell| cell_to_string(cell) == column_name)
        .ok_or_else(|| column_not_found(path, column_name))?;

    Ok(rows
        .filter_map(|row| row.get(index))
        .map(cell_to_string)
        .filter(|text| !text.trim().is_empty())
        .collect())
}

fn column_not_found(path: &Path, column_name: &str) -> AppError {
    SheetError::ColumnNotFound {
        path: path.display().to_string(),
        column: column_name.to_string(),
    }
    .into()
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => format!("{}", f),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({:?})", e),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// Workbook with header `Id | Additional comments`, a blank comment, an empty row and two tagged rows
    fn comments_workbook(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("comments.xlsx");
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Input Data sheet").unwrap();
        sheet.write_string(0, 0, "Id").unwrap();
        sheet.write_string(0, 1, "Additional comments").unwrap();
        sheet.write_number(1, 0, 1).unwrap();
        sheet.write_number(3, 0, 2).unwrap();
        sheet
            .write_string(3, 1, "Groups : [code]<I>Alpha, Beta</I>[/code]")
            .unwrap();
        sheet.write_number(4, 0, 3).unwrap();
        sheet
            .write_string(4, 1, "Group Names : [code]<I>Beta</I>[/code]")
            .unwrap();
        workbook.save(&path).unwrap();
        path
    }

    #[test]
    fn reads_named_workbook_column_and_drops_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = comments_workbook(dir.path());
        let cells = load_column(&path, "Input Data sheet", "Additional comments").unwrap();
        assert_eq!(
            cells,
            vec![
                "Groups : [code]<I>Alpha, Beta</I>[/code]",
                "Group Names : [code]<I>Beta</I>[/code]",
            ]
        );
    }

    #[test]
    fn unknown_sheet_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = comments_workbook(dir.path());
        let err = load_column(&path, "Nope", "Additional comments").unwrap_err();
        assert!(matches!(err, AppError::Sheet(SheetError::SheetNotFound { ref sheet, .. }) if sheet == "Nope"));
    }

    #[test]
    fn unknown_workbook_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = comments_workbook(dir.path());
        let err = load_column(&path, "Input Data sheet", "Nope").unwrap_err();
        assert!(matches!(err, AppError::Sheet(SheetError::ColumnNotFound { ref column, .. }) if column == "Nope"));
    }

    #[test]
    fn header_must_match_exactly() {
        let file = csv_file("Id,Additional comments \n1,x\n");
        let err = load_column(file.path(), "ignored", "Additional comments").unwrap_err();
        assert!(matches!(err, AppError::Sheet(SheetError::ColumnNotFound { .. })));
    }

    #[test]
    fn reads_named_csv_column_and_drops_blanks() {
        let file = csv_file("Id,Additional comments\n1,first\n2,\n3,\"third, with comma\"\n");
        let cells = load_column(file.path(), "ignored", "Additional comments").unwrap();
        assert_eq!(cells, vec!["first", "third, with comma"]);
    }

    #[test]
    fn short_csv_rows_are_skipped() {
        let file = csv_file("Id,Notes\n1\n2,kept\n");
        let cells = load_column(file.path(), "ignored", "Notes").unwrap();
        assert_eq!(cells, vec!["kept"]);
    }

    #[test]
    fn missing_csv_column_is_reported() {
        let file = csv_file("Id,Notes\n1,x\n");
        let err = load_column(file.path(), "ignored", "Additional comments").unwrap_err();
        assert!(matches!(err, AppError::Sheet(SheetError::ColumnNotFound { .. })));
    }

    #[test]
    fn missing_workbook_fails_to_open() {
        let err = load_column(Path::new("does-not-exist.xlsx"), "Sheet1", "Notes").unwrap_err();
        assert!(matches!(err, AppError::Sheet(SheetError::OpenFailed { .. })));
    }
}
