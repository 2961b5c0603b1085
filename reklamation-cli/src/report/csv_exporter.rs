//! CSV export of the ready report sections

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;

use super::engine::MonthlyReport;
use super::types::{Section, Table};

/// Write every ready section as `<dir>/<slug>.csv`.
///
/// Short rows are padded to the table width. Returns the written paths.
pub fn export_sections(report: &MonthlyReport, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create CSV directory: {}", dir.display()))?;

    let mut written = Vec::new();
    for sheet in report.sheets() {
        let Section::Ready(table) = sheet.section else {
            log::debug!("Skipping CSV for unavailable sheet '{}'", sheet.name);
            continue;
        };
        let path = dir.join(format!("{}.csv", sheet.slug));
        export_table(table, &path)?;
        written.push(path);
    }

    log::info!("Exported {} CSV files to {}", written.len(), dir.display());
    Ok(written)
}

/// Write a single table to a CSV file
pub fn export_table(table: &Table, path: &Path) -> Result<()> {
    let mut wtr = Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    let width = table.width();
    for row in table.rows() {
        let mut record: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        record.resize(width, String::new());
        wtr.write_record(&record)
            .with_context(|| format!("Failed to write CSV row to {}", path.display()))?;
    }

    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::engine::tests::{sample_complaints, test_engine};
    use crate::report::types::Month;
    use anyhow::anyhow;

    #[test]
    fn test_export_skips_unavailable_sections() {
        let engine = test_engine();
        let data = engine
            .prepare_tables(sample_complaints(), Err(anyhow!("fehlt")), Month::March)
            .unwrap();
        let report = engine.build(&data);

        let dir = tempfile::tempdir().unwrap();
        let written = export_sections(&report, dir.path()).unwrap();

        let names: Vec<String> = written
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert!(names.contains(&"themen.csv".to_string()));
        assert!(!names.contains(&"verkaeufe.csv".to_string()));
        assert!(!names.contains(&"gruppenbericht.csv".to_string()));

        let topics = fs::read_to_string(dir.path().join("themen.csv")).unwrap();
        let mut lines = topics.lines();
        assert_eq!(lines.next(), Some("Thema,Anzahl,Prozent"));
        assert!(topics.contains("Gesamt,3,100"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let engine = test_engine();
        let dir = tempfile::tempdir().unwrap();

        let mut outputs = Vec::new();
        for run in ["a", "b"] {
            let data = engine
                .prepare_tables(sample_complaints(), Err(anyhow!("fehlt")), Month::March)
                .unwrap();
            let out = dir.path().join(run);
            export_sections(&engine.build(&data), &out).unwrap();
            outputs.push(fs::read_to_string(out.join("pivot.csv")).unwrap());
        }
        assert_eq!(outputs[0], outputs[1]);
    }
}
