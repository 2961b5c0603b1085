//! Positional column pruning

use std::collections::HashSet;

use crate::report::types::Table;

/// Remove the given column positions from every row.
///
/// Positions past a row's end are ignored, the remaining columns keep their
/// relative order.
pub fn prune_columns(table: &Table, drop: &[usize]) -> Table {
    if drop.is_empty() {
        return table.clone();
    }

    let drop: HashSet<usize> = drop.iter().copied().collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(i, _)| !drop.contains(i))
                .map(|(_, cell)| cell.clone())
                .collect()
        })
        .collect();

    Table::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::Cell;

    fn row(values: &[&str]) -> Vec<Cell> {
        values.iter().map(|v| Cell::from(*v)).collect()
    }

    #[test]
    fn test_prune_keeps_order_and_row_count() {
        let table = Table::new(vec![row(&["a", "b", "c", "d"]), row(&["1", "2", "3", "4"])]);
        let pruned = prune_columns(&table, &[1, 3]);

        assert_eq!(pruned.row_count(), 2);
        assert_eq!(pruned.rows()[0], row(&["a", "c"]));
        assert_eq!(pruned.rows()[1], row(&["1", "3"]));
    }

    #[test]
    fn test_prune_missing_positions_is_noop() {
        let table = Table::new(vec![row(&["a", "b"]), row(&["1"])]);
        let pruned = prune_columns(&table, &[5, 17]);
        assert_eq!(pruned, table);

        // short rows only lose what they have
        let pruned = prune_columns(&table, &[1]);
        assert_eq!(pruned.rows()[1], row(&["1"]));
    }
}
