//! Topic frequency table

use std::collections::HashMap;

use anyhow::{Result, bail};

use super::{TOTAL_LABEL, round2};
use crate::report::types::{Cell, Table, row_cell};

/// Topic used for rows with a blank topic
pub const NO_TOPIC: &str = "Ohne Thema";

/// Count complaints per topic with their share of all rows.
///
/// Sorted by count (descending, ties in first-seen order) and followed by a
/// `Gesamt` row. Percentages are rounded individually, so they may not add up
/// to exactly 100.
pub fn category_frequency(table: &Table, topic_col: usize) -> Result<Table> {
    let total = table.data_row_count();
    if total == 0 {
        bail!("Keine Reklamationen im gewählten Monat");
    }

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in table.data_rows() {
        let topic = row_cell(row, topic_col)
            .group_key()
            .unwrap_or_else(|| NO_TOPIC.to_string());
        let count = counts.entry(topic.clone()).or_insert(0);
        if *count == 0 {
            order.push(topic);
        }
        *count += 1;
    }

    let mut topics: Vec<(String, usize)> = order
        .into_iter()
        .map(|t| {
            let n = counts.get(&t).copied().unwrap_or(0);
            (t, n)
        })
        .collect();
    topics.sort_by(|a, b| b.1.cmp(&a.1));

    let mut data: Vec<Vec<Cell>> = topics
        .into_iter()
        .map(|(topic, count)| {
            vec![
                Cell::from(topic),
                Cell::from(count),
                Cell::from(round2(count as f64 / total as f64 * 100.0)),
            ]
        })
        .collect();
    data.push(vec![
        Cell::from(TOTAL_LABEL),
        Cell::from(total),
        Cell::from(100.0),
    ]);

    Ok(Table::with_header(&["Thema", "Anzahl", "Prozent"], data))
}
