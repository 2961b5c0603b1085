//! Derived report tables
//!
//! Every aggregator reads prepared tables and returns a new table. Errors are
//! returned to the caller, which turns them into placeholder sections.

mod categories;
mod open_cases;
mod overview;
mod pivot;
mod sales;
mod status;

pub use categories::category_frequency;
pub use open_cases::open_cases;
pub use overview::short_overview;
pub use pivot::topic_pivot;
pub use sales::{sales_by_user, sales_counts};
pub use status::{StatusSplit, split_status};

use crate::report::types::{Cell, Table, row_cell};

/// Label of the trailing totals row (and the pivot totals column)
pub const TOTAL_LABEL: &str = "Gesamt";

/// Round to two decimals
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Data rows without a trailing `Gesamt` row
pub(crate) fn without_total(table: &Table) -> &[Vec<Cell>] {
    let rows = table.data_rows();
    match rows.split_last() {
        Some((last, rest)) if row_cell(last, 0).as_str() == Some(TOTAL_LABEL) => rest,
        _ => rows,
    }
}

/// Number of data rows whose `col` holds `user`
pub(crate) fn count_user_rows(table: &Table, col: usize, user: &str) -> usize {
    table
        .data_rows()
        .iter()
        .filter(|row| row_cell(row, col).group_key().as_deref() == Some(user))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.33333), 33.33);
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_without_total() {
        let t = Table::with_header(
            &["Benutzer", "Verkäufe"],
            vec![
                vec![Cell::from("AG01"), Cell::from(2usize)],
                vec![Cell::from(TOTAL_LABEL), Cell::from(2usize)],
            ],
        );
        assert_eq!(without_total(&t).len(), 1);

        let t = Table::with_header(&["Benutzer"], vec![vec![Cell::from("AG01")]]);
        assert_eq!(without_total(&t).len(), 1);
    }
}
