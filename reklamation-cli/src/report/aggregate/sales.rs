//! Sales per user from the group report

use std::collections::HashMap;

use anyhow::{Result, bail};

use super::{TOTAL_LABEL, without_total};
use crate::report::types::{Cell, Table, row_cell};

/// Bucket for group rows without a user
pub const NO_USER: &str = "(ohne Benutzer)";

/// Count group rows per user, sorted descending with a `Gesamt` row
pub fn sales_by_user(group: &Table, user_col: usize) -> Result<Table> {
    if group.data_row_count() == 0 {
        bail!("Gruppenbericht enthält keine Daten");
    }

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in group.data_rows() {
        let user = row_cell(row, user_col)
            .group_key()
            .unwrap_or_else(|| NO_USER.to_string());
        let count = counts.entry(user.clone()).or_insert(0);
        if *count == 0 {
            order.push(user);
        }
        *count += 1;
    }

    let mut users: Vec<(String, usize)> = order
        .into_iter()
        .map(|u| {
            let n = counts.get(&u).copied().unwrap_or(0);
            (u, n)
        })
        .collect();
    users.sort_by(|a, b| b.1.cmp(&a.1));

    let mut data: Vec<Vec<Cell>> = users
        .into_iter()
        .map(|(user, n)| vec![Cell::from(user), Cell::from(n)])
        .collect();
    data.push(vec![
        Cell::from(TOTAL_LABEL),
        Cell::from(group.data_row_count()),
    ]);

    Ok(Table::with_header(&["Benutzer", "Verkäufe"], data))
}

/// Sales per user as read back from a sales table
pub fn sales_counts(sales: &Table) -> HashMap<String, usize> {
    without_total(sales)
        .iter()
        .filter_map(|row| {
            let user = row_cell(row, 0).group_key()?;
            let count = row_cell(row, 1).as_f64()?;
            Some((user, count as usize))
        })
        .collect()
}
