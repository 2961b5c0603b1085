//! Command line interface

pub mod handler;

use std::path::PathBuf;

use clap::Parser;

/// Build the monthly complaint report from the complaint and group exports
#[derive(Parser, Debug, Clone)]
#[command(name = "reklamation-cli")]
#[command(version)]
#[command(about = "Monthly complaint (Reklamation) report generator")]
#[command(long_about = "Reads the complaint export and the group/sales export, keeps the
complaints of the requested month and writes Reklamationsbericht_<Month>.xlsx
with status splits, topic statistics, a topic x submitter pivot and the
per-salesperson summaries.

EXAMPLES:
  reklamation-cli March --recl recl.xlsx --grp grp.xlsx
  reklamation-cli April --out-dir reports --csv-dir reports/csv
  RUST_LOG=debug reklamation-cli May --log-file report.log")]
pub struct Cli {
    /// Month to report on (English name, e.g. March)
    #[arg(value_name = "MONTH")]
    pub month: Option<String>,

    /// Complaint export workbook
    #[arg(long, value_name = "FILE", default_value = "recl.xlsx")]
    pub recl: PathBuf,

    /// Group/sales export workbook
    #[arg(long, value_name = "FILE", default_value = "grp.xlsx")]
    pub grp: PathBuf,

    /// Directory for the report and intermediate files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Config file (defaults to ./reklamation.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also export every available sheet as CSV into this directory
    #[arg(long, value_name = "DIR")]
    pub csv_dir: Option<PathBuf>,

    /// Do not write recl_raw.xlsx, recl_processed.xlsx and recl_filtered.xlsx
    #[arg(long)]
    pub no_intermediate: bool,

    /// Append log output to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
