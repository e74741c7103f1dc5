//! Datapoint registry
//!
//! The registry indexes a static list of datapoints by id and by name. It is
//! built once and never mutated; `registry()` returns the process-wide instance
//! over the built-in catalog.
//!
//! When several entries share an id, lookups by id resolve to the first entry
//! in catalog order. When several entries share a name, the last definition of
//! the name wins, so a name always resolves to the catalog constant carrying
//! it; the other entries stay reachable by id. The collisions are logged when
//! the registry is built and remain available through `duplicate_ids()` and
//! `duplicate_names()`.

use crate::catalog::CATALOG;
use crate::datapoint::Datapoint;
use crate::reading::Reading;
use bytes::Bytes;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use xcom_core::{Value, XcomError, XcomResult};

static REGISTRY: Lazy<Registry> = Lazy::new(|| Registry::new(CATALOG));

/// Registry over the built-in catalog, built on first use
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// An id carried by more than one catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub id: u16,
    /// Names of all entries with this id, in catalog order
    pub names: Vec<&'static str>,
}

/// A name carried by more than one catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName {
    pub name: &'static str,
    /// Ids of all entries with this name, in catalog order
    pub ids: Vec<u16>,
}

/// Immutable index over a datapoint catalog
#[derive(Debug)]
pub struct Registry {
    entries: &'static [Datapoint],
    by_id: HashMap<u16, usize>,
    by_name: HashMap<&'static str, usize>,
    duplicate_ids: Vec<DuplicateId>,
    duplicate_names: Vec<DuplicateName>,
}

impl Registry {
    /// Build a registry from a catalog
    pub fn new(entries: &'static [Datapoint]) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut first_by_name = HashMap::with_capacity(entries.len());
        for (index, dp) in entries.iter().enumerate() {
            by_id.entry(dp.id).or_insert(index);
            first_by_name.entry(dp.name).or_insert(index);
            by_name.insert(dp.name, index);
        }

        let mut duplicate_ids: Vec<DuplicateId> = Vec::new();
        let mut duplicate_names: Vec<DuplicateName> = Vec::new();
        for (index, dp) in entries.iter().enumerate() {
            let first_with_id = by_id[&dp.id];
            if first_with_id != index {
                match duplicate_ids.iter_mut().find(|d| d.id == dp.id) {
                    Some(dup) => dup.names.push(dp.name),
                    None => duplicate_ids.push(DuplicateId {
                        id: dp.id,
                        names: vec![entries[first_with_id].name, dp.name],
                    }),
                }
            }
            let first_with_name = first_by_name[dp.name];
            if first_with_name != index {
                match duplicate_names.iter_mut().find(|d| d.name == dp.name) {
                    Some(dup) => dup.ids.push(dp.id),
                    None => duplicate_names.push(DuplicateName {
                        name: dp.name,
                        ids: vec![entries[first_with_name].id, dp.id],
                    }),
                }
            }
        }

        for dup in &duplicate_ids {
            log::warn!(
                "Datapoint id {} is shared by {}; lookups resolve to {}",
                dup.id,
                dup.names.join(", "),
                dup.names[0]
            );
        }
        for dup in &duplicate_names {
            log::warn!(
                "Datapoint name {} is used by ids {:?}; lookups by name resolve to {}",
                dup.name,
                dup.ids,
                entries[by_name[dup.name]].id
            );
        }
        log::debug!(
            "Datapoint registry built with {} entries ({} distinct ids)",
            entries.len(),
            by_id.len()
        );

        Self {
            entries,
            by_id,
            by_name,
            duplicate_ids,
            duplicate_names,
        }
    }

    /// Look up a datapoint by id
    ///
    /// Ids travel as 32-bit object ids on the wire; anything beyond the 16-bit
    /// catalog range is unknown by construction.
    ///
    /// # Errors
    ///
    /// Returns `UnknownDatapoint` if no entry carries the id
    pub fn get_by_id(&self, id: u32) -> XcomResult<&Datapoint> {
        u16::try_from(id)
            .ok()
            .and_then(|key| self.by_id.get(&key))
            .map(|&index| &self.entries[index])
            .ok_or(XcomError::UnknownDatapoint(id))
    }

    /// Look up a datapoint by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownDatapointName` if no entry carries the name
    pub fn get_by_name(&self, name: &str) -> XcomResult<&Datapoint> {
        self.by_name
            .get(name)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| XcomError::UnknownDatapointName(name.to_string()))
    }

    /// Check if an id is known
    pub fn contains(&self, id: u32) -> bool {
        self.get_by_id(id).is_ok()
    }

    /// All entries in catalog order, duplicates included
    ///
    /// The iterator is `Clone`, so an enumeration can be restarted at will.
    pub fn all(&self) -> std::slice::Iter<'static, Datapoint> {
        self.entries.iter()
    }

    /// Number of catalog entries, duplicates included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids shared by more than one entry
    pub fn duplicate_ids(&self) -> &[DuplicateId] {
        &self.duplicate_ids
    }

    /// Names shared by more than one entry
    pub fn duplicate_names(&self) -> &[DuplicateName] {
        &self.duplicate_names
    }

    /// Resolve a datapoint by id and decode a payload for it
    pub fn decode_by_id(&self, id: u32, bytes: &[u8]) -> XcomResult<Value> {
        self.get_by_id(id)?.decode(bytes)
    }

    /// Resolve a datapoint by id and encode a value for it
    pub fn encode_by_id(&self, id: u32, value: &Value) -> XcomResult<Bytes> {
        self.get_by_id(id)?.encode(value)
    }

    /// Resolve a datapoint by id and decode a payload into a publishable reading
    pub fn read(&self, id: u32, bytes: &[u8]) -> XcomResult<Reading> {
        let datapoint = *self.get_by_id(id)?;
        let value = datapoint.decode(bytes)?;
        Ok(Reading::new(datapoint, value))
    }
}
