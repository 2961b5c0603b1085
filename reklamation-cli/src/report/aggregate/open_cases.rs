//! Open vs. closed cases per user, with the reasons of the open ones

use std::collections::BTreeSet;

use anyhow::Result;

use super::{StatusSplit, TOTAL_LABEL, count_user_rows, without_total};
use crate::config::ComplaintColumns;
use crate::report::types::{Cell, Table, row_cell};

/// Build the open-cases sheet for every user of the short overview.
///
/// `Maßnahme` and `Kommentar` stay empty for manual follow-up.
pub fn open_cases(
    overview: &Table,
    split: &StatusSplit,
    columns: &ComplaintColumns,
) -> Result<Table> {
    let mut total_closed = 0;
    let mut total_open = 0;
    let mut data = Vec::new();

    for row in without_total(overview) {
        let Some(user) = row_cell(row, 0).group_key() else {
            continue;
        };
        let closed = count_user_rows(&split.closed, columns.user, &user);
        let open = count_user_rows(&split.open, columns.user, &user);
        total_closed += closed;
        total_open += open;

        data.push(vec![
            Cell::from(user.as_str()),
            row_cell(row, 1).clone(),
            Cell::from(closed),
            Cell::from(open),
            Cell::from(open_reasons(&split.open, columns, &user)),
            Cell::Empty,
            Cell::Empty,
        ]);
    }

    data.push(vec![
        Cell::from(TOTAL_LABEL),
        Cell::Empty,
        Cell::from(total_closed),
        Cell::from(total_open),
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
    ]);

    Ok(Table::with_header(
        &[
            "Benutzer",
            "Region",
            "Erledigt",
            "Offen",
            "Gründe (offen)",
            "Maßnahme",
            "Kommentar",
        ],
        data,
    ))
}

/// Distinct non-blank reasons of a user's open cases, sorted, one per line
fn open_reasons(open: &Table, columns: &ComplaintColumns, user: &str) -> String {
    open.data_rows()
        .iter()
        .filter(|row| row_cell(row, columns.user).group_key().as_deref() == Some(user))
        .filter_map(|row| row_cell(row, columns.reason).group_key())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join("\n")
}
