//! Month scoping of the filtered complaint table
//!
//! The received-date column is parsed cell by cell with a generic parser. When
//! that recognizes fewer than half of the rows, the configured formats are
//! tried one at a time and the first format producing any date wins.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::report::types::{Cell, Month, Table, row_cell};

const GENERIC_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const GENERIC_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a cell without knowing its format
pub fn parse_date_generic(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Date(d) => d.and_hms_opt(0, 0, 0),
        Cell::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            GENERIC_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
                .or_else(|| {
                    GENERIC_DATE_FORMATS
                        .iter()
                        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                })
        }
        _ => None,
    }
}

/// Parse a cell with one explicit chrono format.
///
/// Native date cells are accepted regardless of the format.
pub fn parse_date_with_format(cell: &Cell, format: &str) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Date(d) => d.and_hms_opt(0, 0, 0),
        Cell::Text(s) => {
            let s = s.trim();
            NaiveDateTime::parse_from_str(s, format).ok().or_else(|| {
                NaiveDate::parse_from_str(s, format)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
        }
        _ => None,
    }
}

/// Parse the date column of every data row
fn parse_column(
    table: &Table,
    col: usize,
    fallback_formats: &[String],
) -> Vec<Option<NaiveDateTime>> {
    let data = table.data_rows();
    let generic: Vec<_> = data
        .iter()
        .map(|row| parse_date_generic(row_cell(row, col)))
        .collect();

    let parsed = generic.iter().filter(|d| d.is_some()).count();
    if parsed * 2 >= data.len() {
        return generic;
    }

    if fallback_formats.is_empty() {
        log::warn!(
            "Only {} of {} dates recognized and no fallback formats configured",
            parsed,
            data.len()
        );
        return generic;
    }

    for format in fallback_formats {
        let attempt: Vec<_> = data
            .iter()
            .map(|row| parse_date_with_format(row_cell(row, col), format))
            .collect();
        if attempt.iter().any(|d| d.is_some()) {
            log::info!("Using date format {}", format);
            return attempt;
        }
    }

    log::warn!("No fallback date format matched");
    generic
}

/// Keep the header plus the data rows whose date column falls in `month`.
///
/// Rows whose date cannot be parsed are dropped.
pub fn filter_month(
    table: &Table,
    date_col: usize,
    month: Month,
    fallback_formats: &[String],
) -> Table {
    let dates = parse_column(table, date_col, fallback_formats);
    let valid = dates.iter().filter(|d| d.is_some()).count();
    log::info!(
        "Recognized {} of {} dates in column {}",
        valid,
        dates.len(),
        date_col
    );

    if valid == 0 {
        log::warn!("No dates could be parsed, month filter drops all rows");
    } else {
        let available: BTreeSet<u32> = dates.iter().flatten().map(|d| d.month()).collect();
        log::info!(
            "Months present in data: {}",
            available
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        if !available.contains(&month.number()) {
            log::warn!(
                "Month {} ({}) is not present in the data",
                month,
                month.number()
            );
        }
    }

    let mut dates = dates.into_iter();
    let filtered = table.retain_data(|_| {
        matches!(dates.next(), Some(Some(d)) if d.month() == month.number())
    });

    log::info!(
        "Month filter for {}: {} -> {} rows",
        month,
        table.data_row_count(),
        filtered.data_row_count()
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(values: &[Cell]) -> Table {
        Table::from_parts(
            vec![Cell::from("Eingang"), Cell::from("Nr")],
            values
                .iter()
                .enumerate()
                .map(|(i, v)| vec![v.clone(), Cell::from(i)])
                .collect(),
        )
    }

    fn default_formats() -> Vec<String> {
        crate::config::MonthFilterConfig::default().fallback_formats
    }

    #[test]
    fn test_generic_parser() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        for text in ["2024-03-05", "2024-03-05 08:15:00", "03/05/2024", "2024-03-05T08:15:00+01:00"] {
            let parsed = parse_date_generic(&Cell::from(text)).unwrap();
            assert_eq!(parsed.date(), expected, "{}", text);
        }
        assert_eq!(parse_date_generic(&Cell::from("kein Datum")), None);
        assert_eq!(parse_date_generic(&Cell::Empty), None);
    }

    #[test]
    fn test_march_filter_drops_other_months_and_garbage() {
        let march = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let table = dated(&[
            Cell::from("2024-03-01 09:00:00"),
            Cell::from("2024-02-28 09:00:00"),
            Cell::Date(march),
            Cell::from("unbekannt"),
            Cell::from("2024-04-01"),
        ]);

        let filtered = filter_month(&table, 0, Month::March, &default_formats());

        assert_eq!(filtered.header(), table.header());
        assert_eq!(filtered.data_row_count(), 2);
        assert_eq!(filtered.cell(1, 1), &Cell::from(0usize));
        assert_eq!(filtered.cell(2, 1), &Cell::from(2usize));
    }

    #[test]
    fn test_fallback_format_for_german_dates() {
        let table = dated(&[
            Cell::from("15.03.2024 10:00:00"),
            Cell::from("16.03.2024 11:30:00"),
            Cell::from("02.04.2024 08:00:00"),
        ]);

        let filtered = filter_month(&table, 0, Month::March, &default_formats());
        assert_eq!(filtered.data_row_count(), 2);
    }

    #[test]
    fn test_fallback_skipped_when_generic_parse_suffices() {
        // 2 of 3 parse generically, the dotted one stays unparsed
        let table = dated(&[
            Cell::from("2024-03-01"),
            Cell::from("2024-03-02"),
            Cell::from("03.03.2024"),
        ]);
        let filtered = filter_month(&table, 0, Month::March, &default_formats());
        assert_eq!(filtered.data_row_count(), 2);
    }

    #[test]
    fn test_no_parseable_dates_drops_everything() {
        let table = dated(&[Cell::from("x"), Cell::from("y")]);
        let filtered = filter_month(&table, 0, Month::January, &[]);
        assert_eq!(filtered.row_count(), 1);
        assert_eq!(filtered.header(), table.header());
    }
}
