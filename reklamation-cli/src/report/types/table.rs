//! Positionally addressed table of cells

use super::Cell;

/// Rows × columns of cells. Row 0 is the header row by convention.
///
/// Tables are built once and then transformed into new tables; nothing
/// downstream mutates a table it was handed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Table { rows }
    }

    /// Build a table from a header row and data rows
    pub fn from_parts(header: Vec<Cell>, data: Vec<Vec<Cell>>) -> Self {
        let mut rows = Vec::with_capacity(data.len() + 1);
        rows.push(header);
        rows.extend(data);
        Table { rows }
    }

    /// Build a table with a text header
    pub fn with_header(header: &[&str], data: Vec<Vec<Cell>>) -> Self {
        Self::from_parts(header.iter().map(|h| Cell::from(*h)).collect(), data)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The header row, if the table has any rows
    pub fn header(&self) -> Option<&[Cell]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// All rows after the header
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn data_row_count(&self) -> usize {
        self.data_rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row in the table
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    /// Drop the first `n` rows
    pub fn skip_rows(&self, n: usize) -> Table {
        Table::new(self.rows.iter().skip(n).cloned().collect())
    }

    /// Keep the header plus the data rows matching `keep`
    pub fn retain_data<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&[Cell]) -> bool,
    {
        let Some(header) = self.header() else {
            return Table::default();
        };
        let data = self
            .data_rows()
            .iter()
            .filter(|row| keep(row))
            .cloned()
            .collect();
        Table::from_parts(header.to_vec(), data)
    }
}

/// Read a cell from a row, treating positions past the end as empty
pub fn row_cell(row: &[Cell], col: usize) -> &Cell {
    static EMPTY: Cell = Cell::Empty;
    row.get(col).unwrap_or(&EMPTY)
}

#[cfg(test)]
impl Table {
    /// Cell at (row, col); positions outside the table read as empty
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows.get(row).map_or(&EMPTY, |r| row_cell(r, col))
    }
}
