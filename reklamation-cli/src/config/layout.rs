//! Column layouts of the two input exports
//!
//! The exports have no stable header names, so columns are addressed by
//! position. Each semantic field can alternatively be bound to a header label;
//! either way the references are resolved once against the pruned header and
//! the pipeline only ever sees plain indices.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::report::types::Table;

/// Reference to a column of the pruned table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    /// Position in the pruned table
    Index(usize),
    /// Header label (matched after trimming)
    Header(String),
}

impl ColumnRef {
    /// Resolve to a position in `table`'s header row
    pub fn resolve(&self, table: &Table, field: &str) -> Result<usize> {
        match self {
            ColumnRef::Index(i) => Ok(*i),
            ColumnRef::Header(label) => {
                let header = table.header().unwrap_or(&[]);
                match header
                    .iter()
                    .position(|c| c.to_string().trim() == label.trim())
                {
                    Some(i) => Ok(i),
                    None => bail!(
                        "Column '{}' for field '{}' not found in header",
                        label,
                        field
                    ),
                }
            }
        }
    }
}

impl From<usize> for ColumnRef {
    fn from(i: usize) -> Self {
        ColumnRef::Index(i)
    }
}

/// Literal values used by the row filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRules {
    /// Required value of the role column
    pub role: String,
    /// Required prefix of the actor column
    pub actor_prefix: String,
    /// Outcome value that marks a rejected complaint
    pub rejected: String,
}

impl Default for FilterRules {
    fn default() -> Self {
        FilterRules {
            role: "Einsteller".to_string(),
            actor_prefix: "AG".to_string(),
            rejected: "Wurde abgelehnt".to_string(),
        }
    }
}

/// Named columns of the complaint export (positions after pruning)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplaintColumnRefs {
    pub received: ColumnRef,
    pub closed: ColumnRef,
    pub actor: ColumnRef,
    pub role: ColumnRef,
    pub outcome: ColumnRef,
    pub status: ColumnRef,
    pub topic: ColumnRef,
    pub submitter: ColumnRef,
    pub reason: ColumnRef,
    pub user: ColumnRef,
}

impl Default for ComplaintColumnRefs {
    fn default() -> Self {
        ComplaintColumnRefs {
            received: 0.into(),
            closed: 6.into(),
            actor: 3.into(),
            role: 9.into(),
            outcome: 10.into(),
            status: 11.into(),
            topic: 7.into(),
            submitter: 8.into(),
            reason: 12.into(),
            user: 3.into(),
        }
    }
}

/// Resolved complaint columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplaintColumns {
    pub received: usize,
    pub closed: usize,
    pub actor: usize,
    pub role: usize,
    pub outcome: usize,
    pub status: usize,
    pub topic: usize,
    pub submitter: usize,
    pub reason: usize,
    pub user: usize,
}

impl ComplaintColumnRefs {
    pub fn resolve(&self, pruned: &Table) -> Result<ComplaintColumns> {
        Ok(ComplaintColumns {
            received: self.received.resolve(pruned, "received")?,
            closed: self.closed.resolve(pruned, "closed")?,
            actor: self.actor.resolve(pruned, "actor")?,
            role: self.role.resolve(pruned, "role")?,
            outcome: self.outcome.resolve(pruned, "outcome")?,
            status: self.status.resolve(pruned, "status")?,
            topic: self.topic.resolve(pruned, "topic")?,
            submitter: self.submitter.resolve(pruned, "submitter")?,
            reason: self.reason.resolve(pruned, "reason")?,
            user: self.user.resolve(pruned, "user")?,
        })
    }
}

/// Layout of the complaint ("Reklamation") export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplaintLayout {
    /// Banner rows above the header row
    pub skip_rows: usize,
    /// Raw column positions removed by the pruner
    pub drop_columns: Vec<usize>,
    pub columns: ComplaintColumnRefs,
    pub rules: FilterRules,
}

impl Default for ComplaintLayout {
    fn default() -> Self {
        let mut drop_columns = vec![0, 1, 2, 3, 11, 14, 15, 16, 17, 21, 22, 23, 24, 25];
        drop_columns.extend(27..41);
        ComplaintLayout {
            skip_rows: 3,
            drop_columns,
            columns: ComplaintColumnRefs::default(),
            rules: FilterRules::default(),
        }
    }
}

/// Named columns of the group/sales export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupColumnRefs {
    pub user: ColumnRef,
}

impl Default for GroupColumnRefs {
    fn default() -> Self {
        GroupColumnRefs { user: 0.into() }
    }
}

/// Resolved group columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupColumns {
    pub user: usize,
}

impl GroupColumnRefs {
    pub fn resolve(&self, pruned: &Table) -> Result<GroupColumns> {
        Ok(GroupColumns {
            user: self.user.resolve(pruned, "user")?,
        })
    }
}

/// Layout of the group/sales export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupLayout {
    pub skip_rows: usize,
    pub drop_columns: Vec<usize>,
    pub columns: GroupColumnRefs,
}

impl Default for GroupLayout {
    fn default() -> Self {
        GroupLayout {
            skip_rows: 0,
            drop_columns: Vec::new(),
            columns: GroupColumnRefs::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::Cell;

    fn header_table() -> Table {
        Table::with_header(&["Eingang", " Thema ", "Status"], vec![vec![Cell::Empty]])
    }

    #[test]
    fn test_resolve_index_and_header() {
        let t = header_table();
        assert_eq!(ColumnRef::Index(7).resolve(&t, "x").unwrap(), 7);
        assert_eq!(
            ColumnRef::Header("Thema".to_string()).resolve(&t, "topic").unwrap(),
            1
        );
    }

    #[test]
    fn test_resolve_unknown_header_fails() {
        let err = ColumnRef::Header("Nope".to_string())
            .resolve(&header_table(), "topic")
            .unwrap_err();
        assert!(err.to_string().contains("topic"));
    }

    #[test]
    fn test_default_complaint_drop_set() {
        let layout = ComplaintLayout::default();
        assert_eq!(layout.skip_rows, 3);
        assert!(layout.drop_columns.contains(&27));
        assert!(layout.drop_columns.contains(&40));
        assert!(!layout.drop_columns.contains(&41));
        assert!(!layout.drop_columns.contains(&18));
    }

    #[test]
    fn test_column_refs_from_toml() {
        let refs: ComplaintColumnRefs = toml::from_str(
            r#"
            topic = "Thema"
            status = 2
            "#,
        )
        .unwrap();
        assert_eq!(refs.topic, ColumnRef::Header("Thema".to_string()));
        assert_eq!(refs.status, ColumnRef::Index(2));
        // untouched fields keep their defaults
        assert_eq!(refs.received, ColumnRef::Index(0));
    }
}
