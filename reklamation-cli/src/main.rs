mod cli;
mod config;
mod report;

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use env_logger::{Env, Target, WriteStyle};

use cli::Cli;

/// Initialize env_logger, optionally appending to a log file
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
        builder.write_style(WriteStyle::Never);
    }

    builder.try_init().context("Failed to initialize logger")?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_file.as_deref()) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }

    log::info!("reklamation-cli {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(err) = cli::handler::handle_report_command(cli) {
        log::error!("Report failed: {:#}", err);
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
