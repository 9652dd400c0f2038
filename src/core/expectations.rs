/// Dependency expectations for the manifest checks
///
/// This module holds the table of dependencies whose version and path are
/// pinned across the workspace, along with the built-in defaults.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{DiagnosticError, Result};

/// Required version and path for one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectationEntry {
    #[serde(rename = "name")]
    pub dependency_name: String,
    #[serde(rename = "version")]
    pub required_version: String,
    #[serde(rename = "path")]
    pub required_path: String,
}

impl ExpectationEntry {
    pub fn new(name: &str, version: &str, path: &str) -> Self {
        Self {
            dependency_name: name.to_string(),
            required_version: version.to_string(),
            required_path: path.to_string(),
        }
    }
}

/// Ordered set of expectations, keyed by dependency name.
///
/// Iteration follows declaration order, which is also the order in which
/// manifest issues are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ExpectationEntry>", into = "Vec<ExpectationEntry>")]
pub struct ExpectationTable {
    entries: Vec<ExpectationEntry>,
}

lazy_static! {
    static ref BUILTIN: ExpectationTable = ExpectationTable {
        entries: vec![
            ExpectationEntry::new("solana-program", "2.1.0", "./solana-program"),
            ExpectationEntry::new("solana-sdk", "1.25.0", "./solana-sdk"),
            ExpectationEntry::new(
                "spl-program-error",
                "0.4.2",
                "./solana-program-library/libraries/program-error",
            ),
            ExpectationEntry::new("curve25519-dalek", "5.0.0-pre.0", "./curve25519-dalek"),
        ],
    };
}

impl ExpectationTable {
    /// The compiled-in table enforced when no configuration overrides it
    pub fn builtin() -> &'static ExpectationTable {
        &BUILTIN
    }

    /// Build a table, rejecting duplicate dependency names
    pub fn from_entries(entries: Vec<ExpectationEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.dependency_name.as_str()) {
                return Err(DiagnosticError::DuplicateExpectation(
                    entry.dependency_name.clone(),
                ));
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, dependency_name: &str) -> Option<&ExpectationEntry> {
        self.entries
            .iter()
            .find(|entry| entry.dependency_name == dependency_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpectationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExpectationTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl TryFrom<Vec<ExpectationEntry>> for ExpectationTable {
    type Error = DiagnosticError;

    fn try_from(entries: Vec<ExpectationEntry>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<ExpectationTable> for Vec<ExpectationEntry> {
    fn from(table: ExpectationTable) -> Self {
        table.entries
    }
}
