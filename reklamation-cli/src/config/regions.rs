//! Static user → region reference data
//!
//! The table is maintained by hand in a TOML file. A default copy is compiled
//! into the binary; `[regions] path = "..."` in the config replaces it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::report::types::{Cell, Table};

const DEFAULT_REGIONS: &str = include_str!("../../data/regions.toml");

/// A single salesperson with their region and location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub user: String,
    pub region: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
struct RegionFile {
    #[serde(default)]
    region: Vec<RegionEntry>,
}

/// Ordered user → region lookup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionLookup {
    entries: Vec<RegionEntry>,
}

impl RegionLookup {
    pub fn new(entries: Vec<RegionEntry>) -> Self {
        RegionLookup { entries }
    }

    /// Load the compiled-in reference table
    pub fn builtin() -> Result<Self> {
        Self::parse(DEFAULT_REGIONS).context("Failed to parse built-in region table")
    }

    /// Load a reference table from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read region file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse region file: {}", path.display()))
    }

    /// Parse `[[region]]` records, rejecting duplicate users
    pub fn parse(content: &str) -> Result<Self> {
        let file: RegionFile = toml::from_str(content)?;
        let mut seen = std::collections::HashSet::new();
        for entry in &file.region {
            if !seen.insert(entry.user.as_str()) {
                bail!("Duplicate user '{}' in region table", entry.user);
            }
        }
        Ok(RegionLookup::new(file.region))
    }

    pub fn entries(&self) -> &[RegionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The lookup as a report table
    pub fn to_table(&self) -> Table {
        let data = self
            .entries
            .iter()
            .map(|e| {
                vec![
                    Cell::from(e.user.as_str()),
                    Cell::from(e.region.as_str()),
                    Cell::from(e.location.as_str()),
                ]
            })
            .collect();
        Table::with_header(&["Benutzer", "Region", "Standort"], data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_parses() {
        let lookup = RegionLookup::builtin().unwrap();
        assert!(!lookup.is_empty());
        let first = &lookup.entries()[0];
        assert!(first.user.starts_with("AG"));
    }

    #[test]
    fn test_parse_and_table() {
        let lookup = RegionLookup::parse(
            r#"
            [[region]]
            user = "AG01"
            region = "Nord"
            location = "Hamburg"

            [[region]]
            user = "AG02"
            region = "Süd"
            location = "München"
            "#,
        )
        .unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.entries()[1].location, "München");

        let table = lookup.to_table();
        assert_eq!(table.data_row_count(), 2);
        assert_eq!(table.cell(1, 1), &Cell::from("Nord"));
    }

    #[test]
    fn test_duplicate_user_rejected() {
        let err = RegionLookup::parse(
            r#"
            [[region]]
            user = "AG01"
            region = "Nord"
            location = "Hamburg"

            [[region]]
            user = "AG01"
            region = "Süd"
            location = "München"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("AG01"));
    }
}
