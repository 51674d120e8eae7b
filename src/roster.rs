//! Roster table: identifier to display name lookup
//!
//! The table is delimited text. The first line is a header and is skipped;
//! each remaining line is split on its first `,` into identifier and
//! display name.

use crate::error::RosterError;
use std::path::Path;
use tracing::{debug, instrument, warn};

const SEPARATOR: char = ',';

/// One row of the roster table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub identifier: String,
    pub name: String,
}

/// Roster table rows, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterTable {
    entries: Vec<RosterEntry>,
}

impl RosterTable {
    /// Load a roster table from disk
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let text = std::fs::read_to_string(path).map_err(|source| RosterError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&text);
        debug!(rows = table.len(), "Loaded roster table");
        Ok(table)
    }

    /// Parse roster text, skipping the header line
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .enumerate()
            .skip(1)
            .filter_map(|(index, line)| match line.split_once(SEPARATOR) {
                Some((identifier, name)) => Some(RosterEntry {
                    identifier: identifier.to_string(),
                    name: name.to_string(),
                }),
                None => {
                    if !line.is_empty() {
                        warn!(line = index + 1, "Skipping roster row without separator");
                    }
                    None
                }
            })
            .collect();
        Self { entries }
    }

    /// Display name for `identifier`; the first matching row wins
    pub fn lookup(&self, identifier: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.identifier == identifier)
            .map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve `identifier` to its display name from the table at `path`
pub fn find_name(path: &Path, identifier: &str) -> Result<String, RosterError> {
    let table = RosterTable::load(path)?;
    table
        .lookup(identifier)
        .map(str::to_string)
        .ok_or_else(|| RosterError::NotFound(identifier.to_string()))
}
