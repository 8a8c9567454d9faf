//! Read-only room catalog indexed by core id, room id, and name.
//!
//! The scanning side of the overlay identifies rooms by whichever key it has
//! on hand: a core identifier read from the world (many cores map onto one
//! room), the room's numeric id, or its display name. The catalog is loaded
//! once from a static JSON source and never mutated afterwards; every lookup
//! is total and returns `Option` rather than failing.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// A single room definition.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoomRecord {
    /// Numeric room identifier (unique per record).
    id: u32,
    /// Display name (unique per record, matched case-insensitively).
    name: String,
    /// Core identifiers that resolve to this room (many-to-one).
    #[serde(default)]
    cores: Vec<u32>,
    /// Number of secrets in the room.
    #[serde(default)]
    secrets: u8,
}

/// Catalog load error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON parse error: {}", err))
    }
}

/// Indexed, read-only collection of room definitions.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    records: Vec<RoomRecord>,
    by_core: HashMap<u32, usize>,
    by_id: HashMap<u32, usize>,
    by_name: HashMap<String, usize>,
}

impl RoomCatalog {
    /// Loads a catalog from a JSON array of room records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the JSON is malformed, a room id or name
    /// appears twice, or a core id is claimed by two different rooms.
    #[instrument(skip(data))]
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let records: Vec<RoomRecord> = serde_json::from_str(data)?;

        let mut by_core = HashMap::new();
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();

        for (index, record) in records.iter().enumerate() {
            if by_id.insert(record.id, index).is_some() {
                return Err(CatalogError::new(format!(
                    "Duplicate room id: {}",
                    record.id
                )));
            }
            if by_name.insert(record.name.to_lowercase(), index).is_some() {
                return Err(CatalogError::new(format!(
                    "Duplicate room name: {}",
                    record.name
                )));
            }
            for &core in &record.cores {
                if by_core.insert(core, index).is_some() {
                    return Err(CatalogError::new(format!(
                        "Core {} claimed by more than one room",
                        core
                    )));
                }
            }
            debug!(id = record.id, name = %record.name, "Indexed room");
        }

        info!(rooms = records.len(), "Room catalog loaded");
        Ok(Self {
            records,
            by_core,
            by_id,
            by_name,
        })
    }

    /// Finds the room a core identifier belongs to.
    pub fn find_by_core(&self, core: u32) -> Option<&RoomRecord> {
        self.by_core.get(&core).map(|&index| &self.records[index])
    }

    /// Finds a room by its numeric id.
    pub fn find_by_id(&self, id: u32) -> Option<&RoomRecord> {
        self.by_id.get(&id).map(|&index| &self.records[index])
    }

    /// Finds a room by name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&RoomRecord> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| &self.records[index])
    }

    /// Returns the number of rooms in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
