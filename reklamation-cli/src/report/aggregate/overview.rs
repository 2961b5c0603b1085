//! Complaints vs. sales per known user

use anyhow::Result;

use super::{TOTAL_LABEL, count_user_rows, round2, sales_counts};
use crate::config::RegionLookup;
use crate::report::types::{Cell, Table};

fn ratio(complaints: usize, sales: usize) -> f64 {
    if sales == 0 {
        0.0
    } else {
        round2(complaints as f64 / sales as f64 * 100.0)
    }
}

/// One row per region-lookup user with complaint count, sales count and
/// complaint ratio in percent.
///
/// The `Gesamt` ratio is computed from the summed counts.
pub fn short_overview(
    complaints: &Table,
    user_col: usize,
    sales: &Table,
    regions: &RegionLookup,
) -> Result<Table> {
    let sales = sales_counts(sales);

    let mut total_complaints = 0;
    let mut total_sales = 0;
    let mut data = Vec::with_capacity(regions.len() + 1);

    for entry in regions.entries() {
        let n_complaints = count_user_rows(complaints, user_col, &entry.user);
        let n_sales = sales.get(&entry.user).copied().unwrap_or(0);
        total_complaints += n_complaints;
        total_sales += n_sales;

        data.push(vec![
            Cell::from(entry.user.as_str()),
            Cell::from(entry.region.as_str()),
            Cell::from(entry.location.as_str()),
            Cell::from(n_complaints),
            Cell::from(n_sales),
            Cell::from(ratio(n_complaints, n_sales)),
        ]);
    }

    data.push(vec![
        Cell::from(TOTAL_LABEL),
        Cell::Empty,
        Cell::Empty,
        Cell::from(total_complaints),
        Cell::from(total_sales),
        Cell::from(ratio(total_complaints, total_sales)),
    ]);

    Ok(Table::with_header(
        &[
            "Benutzer",
            "Region",
            "Standort",
            "Reklamationen",
            "Verkäufe",
            "Quote (%)",
        ],
        data,
    ))
}
