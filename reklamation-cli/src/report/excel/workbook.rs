//! Monthly report workbook

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Chart, ChartType, Workbook, Worksheet};

use super::writer::{CellFormats, TableStyle, write_rows};
use crate::report::aggregate::TOTAL_LABEL;
use crate::report::engine::{MonthlyReport, ReportSheet, SheetKind};
use crate::report::types::{Section, Table, row_cell};

/// Column of the reasons text in the open cases sheet
const REASON_COLUMN: usize = 4;

/// Write the report with one sheet per section
pub fn write_report<P: AsRef<Path>>(report: &MonthlyReport, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = Workbook::new();
    let formats = CellFormats::new();

    for sheet in report.sheets() {
        create_section_sheet(&mut workbook, &sheet, &formats)
            .with_context(|| format!("Failed to write sheet: {}", sheet.name))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Report written to: {}", path.display());
    Ok(())
}

fn create_section_sheet(
    workbook: &mut Workbook,
    sheet: &ReportSheet<'_>,
    formats: &CellFormats,
) -> Result<()> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet.name)?;

    match sheet.section {
        Section::Ready(table) => {
            let style = TableStyle {
                bold_header: true,
                wrap_columns: match sheet.kind {
                    SheetKind::OpenCases => &[REASON_COLUMN],
                    _ => &[],
                },
            };
            write_rows(worksheet, table, formats, style)?;

            if sheet.kind == SheetKind::Topics {
                insert_topic_chart(worksheet, sheet.name, table)?;
            }
        }
        Section::Unavailable(reason) => {
            worksheet.write_string(0, 0, Section::placeholder_text(reason))?;
        }
    }

    worksheet.autofit();
    Ok(())
}

/// Pie chart of the topic counts, next to the table
fn insert_topic_chart(worksheet: &mut Worksheet, sheet_name: &str, table: &Table) -> Result<()> {
    let topics = table
        .data_rows()
        .iter()
        .filter(|row| row_cell(row, 0).as_str() != Some(TOTAL_LABEL))
        .count();
    if topics == 0 {
        return Ok(());
    }
    let last_row = u32::try_from(topics).context("Too many topics for a chart")?;

    let mut chart = Chart::new(ChartType::Pie);
    chart
        .add_series()
        .set_name("Anzahl")
        .set_categories((sheet_name, 1, 0, last_row, 0))
        .set_values((sheet_name, 1, 1, last_row, 1));
    chart.title().set_name("Reklamationen nach Thema");

    worksheet.insert_chart(1, 4, &chart)?;
    Ok(())
}
