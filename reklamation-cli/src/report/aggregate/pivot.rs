//! Topic × submitter cross tabulation

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;

use super::TOTAL_LABEL;
use crate::report::types::{Cell, Table, row_cell};

/// Sole content of the pivot when no row has both a topic and a submitter
pub const PIVOT_EMPTY: &str = "Keine gültigen Daten für Pivot-Tabelle vorhanden";

struct PivotRow {
    topic: String,
    counts: Vec<usize>,
    total: usize,
}

/// Count complaints per (topic, submitter) pair.
///
/// Submitter columns are sorted, topic rows are ordered by their total
/// (descending, ties in first-seen order). A `Gesamt` column and a `Gesamt`
/// row carry the sums.
pub fn topic_pivot(table: &Table, topic_col: usize, submitter_col: usize) -> Result<Table> {
    let pairs: Vec<(String, String)> = table
        .data_rows()
        .iter()
        .filter_map(|row| {
            let topic = row_cell(row, topic_col).group_key()?;
            let submitter = row_cell(row, submitter_col).group_key()?;
            Some((topic, submitter))
        })
        .collect();

    if pairs.is_empty() {
        log::warn!("No rows with both topic and submitter, pivot left empty");
        return Ok(Table::new(vec![vec![Cell::from(PIVOT_EMPTY)]]));
    }

    let submitters: Vec<&str> = pairs
        .iter()
        .map(|(_, s)| s.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let submitter_index: HashMap<&str, usize> = submitters
        .iter()
        .enumerate()
        .map(|(i, s)| (*s, i))
        .collect();

    let mut rows: Vec<PivotRow> = Vec::new();
    let mut topic_index: HashMap<&str, usize> = HashMap::new();
    for (topic, submitter) in &pairs {
        let idx = *topic_index.entry(topic.as_str()).or_insert_with(|| {
            rows.push(PivotRow {
                topic: topic.clone(),
                counts: vec![0; submitters.len()],
                total: 0,
            });
            rows.len() - 1
        });
        if let Some(&col) = submitter_index.get(submitter.as_str()) {
            rows[idx].counts[col] += 1;
            rows[idx].total += 1;
        }
    }

    rows.sort_by(|a, b| b.total.cmp(&a.total));

    let mut column_totals = vec![0usize; submitters.len()];
    let mut data = Vec::with_capacity(rows.len() + 1);
    for row in &rows {
        let mut cells = Vec::with_capacity(submitters.len() + 2);
        cells.push(Cell::from(row.topic.as_str()));
        for (i, count) in row.counts.iter().enumerate() {
            column_totals[i] += count;
            cells.push(Cell::from(*count));
        }
        cells.push(Cell::from(row.total));
        data.push(cells);
    }

    let grand_total: usize = column_totals.iter().sum();
    let mut totals = vec![Cell::from(TOTAL_LABEL)];
    totals.extend(column_totals.into_iter().map(Cell::from));
    totals.push(Cell::from(grand_total));
    data.push(totals);

    let mut header = vec![Cell::from("Thema")];
    header.extend(submitters.iter().map(|s| Cell::from(*s)));
    header.push(Cell::from(TOTAL_LABEL));

    Ok(Table::from_parts(header, data))
}
