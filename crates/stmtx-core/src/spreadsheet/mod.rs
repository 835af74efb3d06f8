//! Spreadsheet loading using calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::SpreadsheetError;

/// Result type for spreadsheet operations.
pub type Result<T> = std::result::Result<T, SpreadsheetError>;

/// First worksheet of a workbook as strings: one header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    /// Worksheet name.
    pub sheet: String,
    /// Cells of the first row.
    pub headers: Vec<String>,
    /// Remaining rows.
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Load the first worksheet of an `.xlsx`/`.xls` file.
///
/// The format is chosen from the file extension.
pub fn read_first_sheet(path: &Path) -> Result<SheetTable> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| SpreadsheetError::Open(e.to_string()))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SpreadsheetError::NoSheets)?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| SpreadsheetError::Range {
            sheet: sheet.clone(),
            reason: e.to_string(),
        })?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
    let headers = rows.next().unwrap_or_default();
    let rows: Vec<Vec<String>> = rows.collect();

    debug!(
        "Loaded worksheet '{}': {} columns, {} rows",
        sheet,
        headers.len(),
        rows.len()
    );

    Ok(SheetTable { sheet, headers, rows })
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
