//! Report command handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::*;

use super::Cli;
use crate::config::Config;
use crate::report::csv_exporter::export_sections;
use crate::report::excel::{write_report, write_table};
use crate::report::{Month, MonthlyReport, PreparedData, ReportEngine, Section};

/// Intermediate artifacts written next to the report
const RAW_FILE: &str = "recl_raw.xlsx";
const PROCESSED_FILE: &str = "recl_processed.xlsx";
const FILTERED_FILE: &str = "recl_filtered.xlsx";

/// Run the full report pipeline for the parsed command line
pub fn handle_report_command(args: Cli) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    if !args.recl.exists() {
        bail!("file {} not found!", args.recl.display());
    }

    let month = Month::resolve(args.month.as_deref());
    println!("Verarbeitung für Monat: {}", month.to_string().cyan().bold());

    let config = Config::load_or_default(args.config.as_deref())?;
    let engine = ReportEngine::from_config(config)?;

    let data = engine.prepare(&args.recl, &args.grp, month)?;

    fs::create_dir_all(&args.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.out_dir.display()
        )
    })?;

    if !args.no_intermediate {
        write_intermediates(&data, &args.out_dir)?;
    }

    let report = engine.build(&data);
    let report_path = args.out_dir.join(report.file_name());
    write_report(&report, &report_path)?;

    if let Some(csv_dir) = &args.csv_dir {
        let written = export_sections(&report, csv_dir)?;
        println!(
            "{} CSV files written to {}",
            written.len(),
            csv_dir.display().to_string().bright_green()
        );
    }

    print_summary(&report, &data, &report_path);
    Ok(())
}

fn write_intermediates(data: &PreparedData, dir: &Path) -> Result<()> {
    write_table(&data.raw, dir.join(RAW_FILE), "Rohdaten")?;
    write_table(&data.pruned, dir.join(PROCESSED_FILE), "Bereinigt")?;
    write_table(&data.filtered, dir.join(FILTERED_FILE), "Gefiltert")?;
    println!(
        "Zwischendateien: {}, {}, {}",
        RAW_FILE.dimmed(),
        PROCESSED_FILE.dimmed(),
        FILTERED_FILE.dimmed()
    );
    Ok(())
}

fn print_summary(report: &MonthlyReport, data: &PreparedData, path: &Path) {
    println!();
    println!(
        "{} von {} Reklamationen im {}",
        data.filtered.data_row_count().to_string().bold(),
        data.pruned.data_row_count(),
        report.month
    );
    println!();

    let sheets = report.sheets();
    let ready = sheets.iter().filter(|s| s.section.is_ready()).count();
    println!("{} von {} Blättern erstellt", ready, sheets.len());

    for sheet in sheets {
        match sheet.section {
            Section::Ready(table) => println!(
                "  {} {} ({} Zeilen)",
                "✓".green(),
                sheet.name,
                table.data_row_count()
            ),
            Section::Unavailable(reason) => println!(
                "  {} {}: {}",
                "✗".yellow(),
                sheet.name,
                reason.as_str().yellow()
            ),
        }
    }

    println!();
    println!(
        "Bericht gespeichert: {}",
        path.display().to_string().bright_green().bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::engine::tests::{sample_complaints, sample_group};

    fn write_inputs(dir: &Path) -> Cli {
        let recl = dir.join("recl.xlsx");
        let grp = dir.join("grp.xlsx");
        let config = dir.join("reklamation.toml");
        write_table(&sample_complaints(), &recl, "Export").unwrap();
        write_table(&sample_group(), &grp, "Gruppe").unwrap();
        fs::write(&config, "").unwrap();

        Cli {
            month: Some("March".to_string()),
            recl,
            grp,
            out_dir: dir.join("out"),
            config: Some(config),
            csv_dir: None,
            no_intermediate: false,
            log_file: None,
            no_color: true,
        }
    }

    #[test]
    fn test_missing_complaint_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = write_inputs(dir.path());
        args.recl = dir.path().join("fehlt.xlsx");

        let err = handle_report_command(args).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("file {} not found!", dir.path().join("fehlt.xlsx").display())
        );
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_report_and_intermediates_written_to_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let args = write_inputs(dir.path());
        let out_dir = args.out_dir.clone();

        handle_report_command(args).unwrap();

        assert!(out_dir.join("Reklamationsbericht_March.xlsx").is_file());
        for file in [RAW_FILE, PROCESSED_FILE, FILTERED_FILE] {
            assert!(out_dir.join(file).is_file(), "{} missing", file);
        }
    }

    #[test]
    fn test_no_intermediate_skips_working_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = write_inputs(dir.path());
        args.no_intermediate = true;
        args.month = None;
        let out_dir = args.out_dir.clone();

        handle_report_command(args).unwrap();

        // no month falls back to January
        assert!(out_dir.join("Reklamationsbericht_January.xlsx").is_file());
        for file in [RAW_FILE, PROCESSED_FILE, FILTERED_FILE] {
            assert!(!out_dir.join(file).exists(), "{} written", file);
        }
    }

    #[test]
    fn test_missing_group_file_still_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = write_inputs(dir.path());
        args.grp = dir.path().join("kein_grp.xlsx");
        args.csv_dir = Some(dir.path().join("csv"));
        let out_dir = args.out_dir.clone();

        handle_report_command(args).unwrap();

        assert!(out_dir.join("Reklamationsbericht_March.xlsx").is_file());
        assert!(dir.path().join("csv").join("themen.csv").is_file());
        assert!(!dir.path().join("csv").join("verkaeufe.csv").exists());
    }
}
