//! Cell-level worksheet writing shared by the report and intermediate files

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use crate::report::types::{Cell, Table};

/// Formats used when writing tables
pub struct CellFormats {
    pub header: Format,
    pub date: Format,
    pub datetime: Format,
    pub wrap: Format,
}

impl CellFormats {
    pub fn new() -> Self {
        CellFormats {
            header: Format::new()
                .set_bold()
                .set_background_color(Color::RGB(0x4472C4))
                .set_font_color(Color::White),
            date: Format::new().set_num_format("dd.mm.yyyy"),
            datetime: Format::new().set_num_format("dd.mm.yyyy hh:mm:ss"),
            wrap: Format::new().set_text_wrap(),
        }
    }
}

impl Default for CellFormats {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a single cell. Empty cells are left untouched.
pub fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    formats: &CellFormats,
) -> Result<()> {
    match cell {
        Cell::Empty => {}
        Cell::Text(s) => {
            sheet.write_string(row, col, s)?;
        }
        Cell::Number(n) => {
            sheet.write_number(row, col, *n)?;
        }
        Cell::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        Cell::DateTime(dt) => {
            sheet.write_datetime_with_format(row, col, dt, &formats.datetime)?;
        }
        Cell::Date(d) => {
            sheet.write_datetime_with_format(row, col, d, &formats.date)?;
        }
    }
    Ok(())
}

/// Options for writing a table onto a worksheet
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStyle<'a> {
    /// Write the first row with the header format
    pub bold_header: bool,
    /// Columns whose text cells wrap
    pub wrap_columns: &'a [usize],
}

/// Write all rows of `table` starting at A1
pub fn write_rows(
    sheet: &mut Worksheet,
    table: &Table,
    formats: &CellFormats,
    style: TableStyle<'_>,
) -> Result<()> {
    for (r, row) in table.rows().iter().enumerate() {
        let row_num = u32::try_from(r).context("Too many rows for a worksheet")?;
        for (c, cell) in row.iter().enumerate() {
            let col_num = u16::try_from(c).context("Too many columns for a worksheet")?;
            if r == 0 && style.bold_header && !cell.is_blank() {
                sheet.write_string_with_format(row_num, col_num, cell.to_string(), &formats.header)?;
            } else if style.wrap_columns.contains(&c) && matches!(cell, Cell::Text(_)) {
                sheet.write_string_with_format(row_num, col_num, cell.to_string(), &formats.wrap)?;
            } else {
                write_cell(sheet, row_num, col_num, cell, formats)?;
            }
        }
    }
    Ok(())
}

/// Save a table as a single-sheet workbook
pub fn write_table<P: AsRef<Path>>(table: &Table, path: P, sheet_name: &str) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let formats = CellFormats::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;
    write_rows(sheet, table, &formats, TableStyle::default())?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Wrote {} rows to {}", table.row_count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::excel::load_table;
    use chrono::NaiveDate;

    #[test]
    fn test_write_table_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recl_filtered.xlsx");

        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let closed = date.and_hms_opt(16, 45, 30).unwrap();
        let table = Table::with_header(
            &["Eingang", "Thema", "Anzahl"],
            vec![
                vec![Cell::Date(date), Cell::from("Lieferung"), Cell::from(2usize)],
                vec![Cell::DateTime(closed), Cell::from("Preis"), Cell::Bool(true)],
            ],
        );

        write_table(&table, &path, "Daten").unwrap();
        let loaded = load_table(&path).unwrap();

        assert_eq!(loaded.header(), table.header());
        assert_eq!(
            loaded.cell(1, 0),
            &Cell::DateTime(date.and_hms_opt(0, 0, 0).unwrap())
        );
        assert_eq!(loaded.cell(1, 1), &Cell::from("Lieferung"));
        assert_eq!(loaded.cell(1, 2), &Cell::Number(2.0));
        assert_eq!(loaded.cell(2, 0), &Cell::DateTime(closed));
        assert_eq!(loaded.cell(2, 2), &Cell::Bool(true));
    }
}
