//! The coordinator contract and a reference implementation.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use thiserror::Error;

use datastream_core::{metadata, Datastream, DatastreamDestination};

/// A definition failed the coordinator's connector-specific validation.
///
/// The reason is human-readable and is surfaced to the caller verbatim as
/// part of an invalid-input outcome.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    /// Creates a validation error with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Validates a candidate definition against connector-specific rules and
/// completes it (assigning fields the operator did not supply) before it is
/// considered initialized.
///
/// `initialize` mutates the definition in place. A [`ValidationError`] must
/// leave no side effect that the resource layer would need to undo; any
/// other internal failure is reported through the error's reason and mapped
/// to an internal outcome by the caller.
#[async_trait]
pub trait Coordinator: Send + Sync {
    /// Validates and completes `datastream` in place.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] with a human-readable reason if the definition
    /// is semantically invalid for its connector type.
    async fn initialize(&self, datastream: &mut Datastream) -> Result<(), ValidationError>;
}

/// Reference [`Coordinator`] over a fixed set of connector types.
///
/// Rejects definitions whose connector type is not registered, stamps the
/// creation timestamp, and assigns a destination when the caller supplied
/// none. Deployments with real connectors substitute their own coordinator;
/// this one covers embedded use and tests.
#[derive(Debug, Default)]
pub struct StaticCoordinator {
    connector_types: HashSet<String>,
}

impl StaticCoordinator {
    /// Creates a coordinator accepting the given connector types.
    #[must_use]
    pub fn new<I, S>(connector_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            connector_types: connector_types.into_iter().map(Into::into).collect(),
        }
    }

    fn epoch_millis() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0)
    }
}

#[async_trait]
impl Coordinator for StaticCoordinator {
    async fn initialize(&self, datastream: &mut Datastream) -> Result<(), ValidationError> {
        if !self.connector_types.contains(&datastream.connector_type) {
            return Err(ValidationError::new(format!(
                "unknown connector type '{}'",
                datastream.connector_type
            )));
        }

        datastream
            .metadata_mut()
            .entry(metadata::CREATION_TIMESTAMP.to_string())
            .or_insert_with(|| Self::epoch_millis().to_string());

        // Assign a destination unless the operator manages their own.
        if !datastream.has_destination_connection_string() {
            let partitions = datastream.source.as_ref().and_then(|s| s.partitions);
            datastream.destination = Some(DatastreamDestination {
                connection_string: format!(
                    "{}://destination/{}",
                    datastream.connector_type, datastream.name
                ),
                partitions: partitions.or(Some(1)),
            });
        }

        Ok(())
    }
}
