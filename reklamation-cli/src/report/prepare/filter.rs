//! Static row predicates on the complaint table

use crate::config::{ComplaintColumns, FilterRules};
use crate::report::types::{Cell, Table, row_cell};

/// Keep the header and every data row that was entered by a submitter role,
/// handled by an `AG` actor and not rejected.
///
/// Values are compared as-is, without trimming or case folding.
pub fn filter_rows(table: &Table, columns: &ComplaintColumns, rules: &FilterRules) -> Table {
    let filtered = table.retain_data(|row| row_matches(row, columns, rules));
    log::info!(
        "Row filter kept {} of {} data rows",
        filtered.data_row_count(),
        table.data_row_count()
    );
    filtered
}

fn row_matches(row: &[Cell], columns: &ComplaintColumns, rules: &FilterRules) -> bool {
    let role_ok = row_cell(row, columns.role).as_str() == Some(rules.role.as_str());
    let actor_ok = row_cell(row, columns.actor)
        .to_string()
        .starts_with(&rules.actor_prefix);
    let outcome_ok = row_cell(row, columns.outcome).as_str() != Some(rules.rejected.as_str());

    role_ok && actor_ok && outcome_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::layout::ComplaintColumnRefs;

    fn columns() -> ComplaintColumns {
        let header = Table::with_header(&["x"], vec![]);
        ComplaintColumnRefs::default().resolve(&header).unwrap()
    }

    /// Pruned-width row with actor, role and outcome filled in
    fn complaint(actor: Cell, role: &str, outcome: &str) -> Vec<Cell> {
        let mut row = vec![Cell::Empty; 14];
        row[3] = actor;
        row[9] = Cell::from(role);
        row[10] = Cell::from(outcome);
        row
    }

    #[test]
    fn test_filter_predicates() {
        let header: Vec<Cell> = (0..14).map(|i| Cell::from(format!("h{}", i))).collect();
        let table = Table::from_parts(
            header.clone(),
            vec![
                complaint(Cell::from("AG07"), "Einsteller", "Erfolgreich"),
                complaint(Cell::from("AG07"), "Bearbeiter", "Erfolgreich"),
                complaint(Cell::from("XG07"), "Einsteller", "Erfolgreich"),
                complaint(Cell::from("AG07"), "Einsteller", "Wurde abgelehnt"),
                complaint(Cell::from("AG07"), "einsteller", ""),
                complaint(Cell::from("AG07"), " Einsteller", ""),
                complaint(Cell::from("AG01"), "Einsteller", ""),
            ],
        );

        let filtered = filter_rows(&table, &columns(), &FilterRules::default());

        assert_eq!(filtered.header(), Some(header.as_slice()));
        assert_eq!(filtered.data_row_count(), 2);
        assert_eq!(filtered.cell(1, 3), &Cell::from("AG07"));
        assert_eq!(filtered.cell(2, 3), &Cell::from("AG01"));
    }

    #[test]
    fn test_filter_keeps_header_when_nothing_matches() {
        let table = Table::from_parts(
            vec![Cell::from("Eingang")],
            vec![complaint(Cell::Number(17.0), "Einsteller", "")],
        );
        let filtered = filter_rows(&table, &columns(), &FilterRules::default());
        assert_eq!(filtered.row_count(), 1);
        assert_eq!(filtered.header(), table.header());
    }

    #[test]
    fn test_short_rows_do_not_match() {
        let table = Table::from_parts(vec![Cell::from("h")], vec![vec![Cell::from("AG1")]]);
        let filtered = filter_rows(&table, &columns(), &FilterRules::default());
        assert_eq!(filtered.data_row_count(), 0);
    }
}
