//! Result of one guarded report section

use anyhow::Result;

use super::Table;

/// Outcome of building one report section.
///
/// A failing section never aborts the report; it is written as a single
/// explanatory placeholder cell instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Section was computed
    Ready(Table),
    /// Section could not be computed, with the reason shown in the sheet
    Unavailable(String),
}

impl Section {
    /// Run a section builder, turning any error into `Unavailable`
    pub fn guard<F>(name: &str, build: F) -> Section
    where
        F: FnOnce() -> Result<Table>,
    {
        Self::from_result(name, build())
    }

    /// Turn an already computed result into a section
    pub fn from_result(name: &str, result: Result<Table>) -> Section {
        match result {
            Ok(table) => {
                log::debug!("Section '{}' ready ({} rows)", name, table.row_count());
                Section::Ready(table)
            }
            Err(err) => {
                log::error!("Section '{}' unavailable: {:#}", name, err);
                Section::Unavailable(format!("{:#}", err))
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.table().is_some()
    }

    /// Get the table if the section is ready
    pub fn table(&self) -> Option<&Table> {
        match self {
            Section::Ready(t) => Some(t),
            Section::Unavailable(_) => None,
        }
    }

    /// Get the table or fail with the upstream reason
    pub fn require(&self, what: &str) -> Result<&Table> {
        match self {
            Section::Ready(t) => Ok(t),
            Section::Unavailable(reason) => {
                anyhow::bail!("{} nicht verfügbar ({})", what, reason)
            }
        }
    }

    /// Text written in place of the table when unavailable
    pub fn placeholder_text(reason: &str) -> String {
        format!("Daten nicht verfügbar: {}", reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_ok_and_err() {
        let ok = Section::guard("ok", || Ok(Table::with_header(&["a"], vec![])));
        assert!(ok.is_ready());

        let err = Section::guard("err", || anyhow::bail!("kaputt"));
        assert_eq!(err, Section::Unavailable("kaputt".to_string()));
        assert!(err.table().is_none());
    }

    #[test]
    fn test_require_propagates_reason() {
        let s = Section::Unavailable("leer".to_string());
        let err = s.require("Verkäufe").unwrap_err();
        assert!(err.to_string().contains("leer"));
    }
}
