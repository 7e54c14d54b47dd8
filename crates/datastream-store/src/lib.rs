//! # Datastream Store
//!
//! The durable keyed storage contract the management API persists
//! definitions through, plus an in-memory reference implementation.
//!
//! The resource layer only requires four operations — create-if-absent,
//! point lookup, name enumeration, and delete — and delegates all
//! uniqueness enforcement to the store: concurrent creates under the same
//! name must resolve to exactly one winner.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

mod error;
mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use async_trait::async_trait;
use datastream_core::Datastream;

/// Durable keyed storage of datastream definitions.
///
/// Implementations must be safe for arbitrarily many concurrent calls.
/// Enumeration order is implementation-defined but must be stable for a
/// given store state, since list paging is applied to it.
#[async_trait]
pub trait DatastreamStore: Send + Sync {
    /// Stores `datastream` under `name` if, and only if, no definition
    /// exists under that name.
    ///
    /// # Errors
    ///
    /// [`StoreError::AlreadyExists`] if the name is taken; the check and
    /// the insert must be atomic. [`StoreError::Backend`] on any other
    /// failure, in which case nothing was written.
    async fn create(&self, name: &str, datastream: Datastream) -> StoreResult<()>;

    /// Looks up the definition stored under `name`.
    ///
    /// Absence is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the lookup itself fails.
    async fn get(&self, name: &str) -> StoreResult<Option<Datastream>>;

    /// Enumerates all stored names in the store's stable order.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if enumeration fails.
    async fn list_names(&self) -> StoreResult<Vec<String>>;

    /// Deletes the definition stored under `name`.
    ///
    /// Deleting an absent name is a success (idempotent delete); after a
    /// successful delete the name is free for reuse.
    ///
    /// # Errors
    ///
    /// [`StoreError::Backend`] if the delete fails.
    async fn delete(&self, name: &str) -> StoreResult<()>;
}
