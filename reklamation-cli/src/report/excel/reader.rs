//! Load the first worksheet of an Excel file into a table

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Reader, Xlsx, open_workbook};

use crate::report::types::{Cell, Table};

/// Read the first worksheet, anchored at A1.
///
/// Leading empty rows and columns are kept as empty cells so that column
/// positions match what the user sees in Excel.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .with_context(|| format!("Excel file has no sheets: {}", path.display()))?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let Some((row_offset, col_offset)) = range.start() else {
        log::warn!("Sheet '{}' in {} is empty", sheet_name, path.display());
        return Ok(Table::default());
    };

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset as usize];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset as usize];
        cells.extend(row.iter().map(Cell::from_data));
        rows.push(cells);
    }

    log::info!(
        "Loaded {} rows from {} ({})",
        rows.len(),
        path.display(),
        sheet_name
    );
    Ok(Table::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_load_pads_to_a1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offset.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(2, 1, "Kopf").unwrap();
        sheet.write_number(3, 2, 7.0).unwrap();
        workbook.save(&path).unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.cell(2, 1), &Cell::from("Kopf"));
        assert_eq!(table.cell(3, 2), &Cell::Number(7.0));
        assert_eq!(table.cell(0, 0), &Cell::Empty);
    }

    #[test]
    fn test_missing_file_fails_with_path() {
        let err = load_table("/nonexistent/recl.xlsx").unwrap_err();
        assert!(format!("{:#}", err).contains("recl.xlsx"));
    }
}
