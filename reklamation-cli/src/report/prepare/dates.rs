//! Timestamp → calendar date normalization

use chrono::{NaiveDate, NaiveDateTime};

use crate::report::types::{Cell, Table};

/// Convert a single timestamp cell to a date.
///
/// Text must match `format` exactly; anything else becomes empty.
pub fn normalize_cell(cell: &Cell, format: &str) -> Cell {
    match cell {
        Cell::DateTime(dt) => Cell::Date(dt.date()),
        Cell::Date(d) => Cell::Date(*d),
        Cell::Text(s) => NaiveDateTime::parse_from_str(s.trim(), format)
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(s.trim(), format))
            .map(Cell::Date)
            .unwrap_or(Cell::Empty),
        _ => Cell::Empty,
    }
}

/// Normalize the given columns of every data row, leaving the header alone
pub fn normalize_dates(table: &Table, columns: &[usize], format: &str) -> Table {
    let Some(header) = table.header() else {
        return Table::default();
    };

    let data = table
        .data_rows()
        .iter()
        .map(|row| {
            let mut row = row.clone();
            for &col in columns {
                if let Some(cell) = row.get_mut(col) {
                    *cell = normalize_cell(cell, format);
                }
            }
            row
        })
        .collect();

    Table::from_parts(header.to_vec(), data)
}
