//! The datastream definition record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Where a datastream reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastreamSource {
    /// Connection string identifying the source system.
    pub connection_string: String,
    /// Source partition count, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions: Option<u32>,
}

/// Where a datastream writes to.
///
/// Either supplied by the operator (a user-managed destination) or assigned
/// by the coordinator during initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastreamDestination {
    /// Connection string identifying the destination system.
    #[serde(default)]
    pub connection_string: String,
    /// Destination partition count, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions: Option<u32>,
}

/// A declarative datastream definition: source, connector type, optional
/// destination, and free-form string metadata.
///
/// `name` is the storage key and is immutable once the definition has been
/// durably stored. The record itself carries no behavior; validation and
/// initialization happen in the resource layer and the coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastream {
    /// Unique name; the store's primary key.
    #[serde(default)]
    pub name: String,
    /// Selects which coordinator validation/initialization rules apply.
    #[serde(default)]
    pub connector_type: String,
    /// Where the data originates. Required for creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<DatastreamSource>,
    /// Where the data lands. Optional on input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<DatastreamDestination>,
    /// Free-form string metadata. Defaulted to empty before initialization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl Datastream {
    /// Returns `true` if a non-empty name is set.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Returns `true` if a non-empty connector type is set.
    #[must_use]
    pub fn has_connector_type(&self) -> bool {
        !self.connector_type.is_empty()
    }

    /// Returns `true` if a source is set.
    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Returns `true` if a destination is set.
    #[must_use]
    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }

    /// Returns `true` if the destination carries a non-empty connection
    /// string, i.e. the operator manages the destination themselves.
    #[must_use]
    pub fn has_destination_connection_string(&self) -> bool {
        self.destination
            .as_ref()
            .is_some_and(|d| !d.connection_string.is_empty())
    }

    /// Returns the metadata map, initializing it to empty if absent.
    pub fn metadata_mut(&mut self) -> &mut BTreeMap<String, String> {
        self.metadata.get_or_insert_with(BTreeMap::new)
    }
}
