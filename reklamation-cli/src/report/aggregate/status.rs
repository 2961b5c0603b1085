//! Closed / open partition of the month table

use anyhow::{Result, bail};

use crate::report::types::{Cell, Table, row_cell};

/// Status value of closed complaints (compared trimmed and lower-cased)
pub const CLOSED: &str = "erledigt";
/// Status value of open complaints
pub const OPEN: &str = "offen";

/// Closed and open complaints, each with the shared header.
///
/// Rows with any other status are in neither table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSplit {
    pub closed: Table,
    pub open: Table,
}

pub fn split_status(table: &Table, status_col: usize) -> Result<StatusSplit> {
    if table.header().is_none() {
        bail!("Tabelle ohne Kopfzeile");
    }

    let status_is = |row: &[Cell], wanted: &str| {
        row_cell(row, status_col).to_string().trim().to_lowercase() == wanted
    };

    Ok(StatusSplit {
        closed: table.retain_data(|row| status_is(row, CLOSED)),
        open: table.retain_data(|row| status_is(row, OPEN)),
    })
}
