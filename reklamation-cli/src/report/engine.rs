//! Report pipeline
//!
//! `prepare` runs the fatal stages (load, prune, filter, month scope, date
//! normalization). `build` derives every report section from the prepared
//! tables; a failing section becomes a placeholder and never aborts the run.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

use super::aggregate::{
    category_frequency, open_cases, sales_by_user, short_overview, split_status, topic_pivot,
};
use super::excel::load_table;
use super::prepare::{filter_month, filter_rows, normalize_dates, prune_columns};
use super::types::{Month, Section, Table};
use crate::config::{ComplaintColumns, Config, RegionLookup};

/// Tables produced by the fatal pipeline stages
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedData {
    pub month: Month,
    /// Complaint sheet as loaded
    pub raw: Table,
    /// Complaint table without banner rows and dropped columns
    pub pruned: Table,
    /// Row- and month-filtered complaints with normalized dates
    pub filtered: Table,
    pub columns: ComplaintColumns,
    /// Pruned group table, or why it is missing
    pub group: Section,
}

/// How a sheet is decorated beyond the plain table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Table,
    /// Topic frequencies with a pie chart
    Topics,
    /// Open cases with wrapped reason text
    OpenCases,
}

/// One sheet of the report in output order
#[derive(Debug, Clone, Copy)]
pub struct ReportSheet<'a> {
    pub name: &'static str,
    /// File stem for CSV export
    pub slug: &'static str,
    pub kind: SheetKind,
    pub section: &'a Section,
}

impl<'a> ReportSheet<'a> {
    pub fn new(
        name: &'static str,
        slug: &'static str,
        kind: SheetKind,
        section: &'a Section,
    ) -> Self {
        ReportSheet {
            name,
            slug,
            kind,
            section,
        }
    }
}

/// All sections of a monthly report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: Month,
    pub all: Section,
    pub closed: Section,
    pub open: Section,
    pub topics: Section,
    pub pivot: Section,
    pub group: Section,
    pub sales: Section,
    pub regions: Section,
    pub overview: Section,
    pub open_cases: Section,
}

impl MonthlyReport {
    /// Report file name for the month
    pub fn file_name(&self) -> String {
        format!("Reklamationsbericht_{}.xlsx", self.month)
    }

    /// Sheets in workbook order
    pub fn sheets(&self) -> Vec<ReportSheet<'_>> {
        let sheet = ReportSheet::new;
        vec![
            sheet("Alle Reklamationen", "alle_reklamationen", SheetKind::Table, &self.all),
            sheet("Erledigt", "erledigt", SheetKind::Table, &self.closed),
            sheet("Offen", "offen", SheetKind::Table, &self.open),
            sheet("Themen", "themen", SheetKind::Topics, &self.topics),
            sheet("Pivot", "pivot", SheetKind::Table, &self.pivot),
            sheet("Gruppenbericht", "gruppenbericht", SheetKind::Table, &self.group),
            sheet("Verkäufe", "verkaeufe", SheetKind::Table, &self.sales),
            sheet("Regionen", "regionen", SheetKind::Table, &self.regions),
            sheet("Kurzübersicht", "kurzuebersicht", SheetKind::Table, &self.overview),
            sheet("Offene Fälle", "offene_faelle", SheetKind::OpenCases, &self.open_cases),
        ]
    }
}

/// Builds monthly complaint reports
pub struct ReportEngine {
    config: Config,
    regions: RegionLookup,
}

impl ReportEngine {
    pub fn new(config: Config, regions: RegionLookup) -> Self {
        ReportEngine { config, regions }
    }

    /// Create an engine, loading the region table named by the config
    pub fn from_config(config: Config) -> Result<Self> {
        let regions = config
            .regions
            .load_lookup()
            .context("Failed to load region table")?;
        if regions.is_empty() {
            log::warn!("Region table is empty, the short overview will only hold the total row");
        } else {
            log::info!("Region table has {} users", regions.len());
        }
        Ok(Self::new(config, regions))
    }

    /// Load both workbooks and run the fatal stages.
    ///
    /// The group workbook is optional: if it is missing or unreadable the
    /// group based sections become placeholders.
    pub fn prepare(&self, recl: &Path, grp: &Path, month: Month) -> Result<PreparedData> {
        let raw = load_table(recl).context("Failed to load complaint workbook")?;

        let group = if grp.exists() {
            load_table(grp).context("Failed to load group workbook")
        } else {
            Err(anyhow!("Datei {} nicht gefunden", grp.display()))
        };

        self.prepare_tables(raw, group, month)
    }

    /// Run the fatal stages on already loaded tables
    pub fn prepare_tables(
        &self,
        raw: Table,
        group: Result<Table>,
        month: Month,
    ) -> Result<PreparedData> {
        let layout = &self.config.complaints;

        let pruned = prune_columns(&raw.skip_rows(layout.skip_rows), &layout.drop_columns);
        if pruned.header().is_none() {
            bail!(
                "Complaint table has no rows after skipping {} banner rows",
                layout.skip_rows
            );
        }
        log::info!(
            "Pruned complaint table: {} rows, {} columns",
            pruned.row_count(),
            pruned.width()
        );

        let columns = layout
            .columns
            .resolve(&pruned)
            .context("Failed to resolve complaint columns")?;

        let row_filtered = filter_rows(&pruned, &columns, &layout.rules);
        let month_filtered = filter_month(
            &row_filtered,
            columns.received,
            month,
            &self.config.month_filter.fallback_formats,
        );
        let filtered = normalize_dates(
            &month_filtered,
            &[columns.received, columns.closed],
            &self.config.dates.format,
        );

        let group = match group {
            Ok(table) => {
                let shape = &self.config.group;
                Section::Ready(prune_columns(
                    &table.skip_rows(shape.skip_rows),
                    &shape.drop_columns,
                ))
            }
            Err(err) => {
                log::warn!("Group report unavailable: {:#}", err);
                Section::Unavailable(format!("{:#}", err))
            }
        };

        Ok(PreparedData {
            month,
            raw,
            pruned,
            filtered,
            columns,
            group,
        })
    }

    /// Derive all report sections
    pub fn build(&self, data: &PreparedData) -> MonthlyReport {
        let cols = &data.columns;
        let complaints = &data.filtered;

        let split = split_status(complaints, cols.status);
        let (closed, open) = match &split {
            Ok(split) => (
                Section::Ready(split.closed.clone()),
                Section::Ready(split.open.clone()),
            ),
            Err(err) => {
                log::error!("Status split unavailable: {:#}", err);
                let reason = format!("{:#}", err);
                (
                    Section::Unavailable(reason.clone()),
                    Section::Unavailable(reason),
                )
            }
        };

        let topics = Section::guard("Themen", || category_frequency(complaints, cols.topic));
        let pivot = Section::guard("Pivot", || {
            topic_pivot(complaints, cols.topic, cols.submitter)
        });

        let sales = Section::guard("Verkäufe", || {
            let group = data.group.require("Gruppenbericht")?;
            let group_cols = self
                .config
                .group
                .columns
                .resolve(group)
                .context("Failed to resolve group columns")?;
            sales_by_user(group, group_cols.user)
        });

        let overview = Section::guard("Kurzübersicht", || {
            let sales = sales.require("Verkäufe")?;
            short_overview(complaints, cols.user, sales, &self.regions)
        });

        let open_cases = Section::guard("Offene Fälle", || {
            let overview = overview.require("Kurzübersicht")?;
            let split = split
                .as_ref()
                .map_err(|err| anyhow!("Statusaufteilung nicht verfügbar ({:#})", err))?;
            open_cases(overview, split, cols)
        });

        MonthlyReport {
            month: data.month,
            all: Section::Ready(complaints.clone()),
            closed,
            open,
            topics,
            pivot,
            group: data.group.clone(),
            sales,
            regions: Section::Ready(self.regions.to_table()),
            overview,
            open_cases,
        }
    }
}
