//! Read-only species reference table.

use crate::catalog::species_catalog;
use crate::error::{EosError, EosResult};
use crate::properties::{SpeciesOverride, SpeciesProperties};
use crate::species::canonical_key;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

static BUILTIN: LazyLock<Arc<ReferenceTable>> = LazyLock::new(|| Arc::new(ReferenceTable::builtin()));

#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    /// Name as registered (canonical id for built-ins).
    pub name: String,
    pub properties: SpeciesProperties,
}

/// Species name → critical data, built once and then only read.
///
/// Lookups accept any alias of a built-in species; custom rows are keyed by
/// their normalized name.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: HashMap<String, TableEntry>,
}

impl ReferenceTable {
    /// Table holding every catalog species.
    pub fn builtin() -> Self {
        let entries = species_catalog()
            .iter()
            .map(|entry| {
                (
                    canonical_key(entry.canonical_id),
                    TableEntry {
                        name: entry.canonical_id.to_string(),
                        properties: entry.properties(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Process-wide built-in table, initialized on first use.
    pub fn shared_builtin() -> Arc<ReferenceTable> {
        Arc::clone(&BUILTIN)
    }

    /// Add or replace a row. Data is validated before insertion.
    pub fn insert(&mut self, name: &str, properties: SpeciesProperties) -> EosResult<()> {
        properties.validate(name)?;
        self.entries.insert(
            canonical_key(name),
            TableEntry {
                name: name.trim().to_string(),
                properties,
            },
        );
        Ok(())
    }

    pub fn with_entries<'a, I>(mut self, rows: I) -> EosResult<Self>
    where
        I: IntoIterator<Item = (&'a str, SpeciesProperties)>,
    {
        for (name, props) in rows {
            self.insert(name, props)?;
        }
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&TableEntry> {
        self.entries.get(&canonical_key(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Critical data for `name`, or `UnknownSpecies`.
    pub fn lookup(&self, name: &str) -> EosResult<SpeciesProperties> {
        self.get(name)
            .map(|entry| entry.properties)
            .ok_or_else(|| EosError::UnknownSpecies {
                species: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows sorted by registered name.
    pub fn entries(&self) -> Vec<&TableEntry> {
        let mut rows: Vec<&TableEntry> = self.entries.values().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }
}

/// Caller-supplied overrides keyed like the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesOverrides {
    items: HashMap<String, SpeciesOverride>,
}

impl SpeciesOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: SpeciesOverride) {
        self.items.insert(canonical_key(name), value);
    }

    pub fn get(&self, name: &str) -> Option<&SpeciesOverride> {
        self.items.get(&canonical_key(name))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolve `name`: override first, then the table row it patches.
    pub fn resolve(&self, table: &ReferenceTable, name: &str) -> EosResult<SpeciesProperties> {
        let base = table.get(name).map(|entry| &entry.properties);
        match (self.get(name), base) {
            (Some(patch), base) => patch.apply(name, base),
            (None, Some(base)) => Ok(*base),
            (None, None) => Err(EosError::UnknownSpecies {
                species: name.to_string(),
            }),
        }
    }
}

impl<'a> FromIterator<(&'a str, SpeciesOverride)> for SpeciesOverrides {
    fn from_iter<I: IntoIterator<Item = (&'a str, SpeciesOverride)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (name, value) in iter {
            overrides.insert(name, value);
        }
        overrides
    }
}
