//! The datastream resource handler.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use datastream_core::{metadata, Datastream, PagingContext, ResourceError, ResourceResult};
use datastream_store::{DatastreamStore, StoreError};

use crate::{Coordinator, ResourceMetrics, ServerConfig};

/// Stateless per-request handler for the five management operations.
///
/// Holds no mutable state beyond the shared [`ResourceMetrics`]; a single
/// instance is safely usable from arbitrarily many concurrent requests. All
/// uniqueness enforcement is delegated to the store, all semantic
/// validation to the coordinator.
pub struct DatastreamResources {
    store: Arc<dyn DatastreamStore>,
    coordinator: Arc<dyn Coordinator>,
    metrics: Arc<ResourceMetrics>,
    config: ServerConfig,
}

impl DatastreamResources {
    /// Creates a handler over the given collaborators.
    pub fn new(
        store: Arc<dyn DatastreamStore>,
        coordinator: Arc<dyn Coordinator>,
        metrics: Arc<ResourceMetrics>,
        config: ServerConfig,
    ) -> Self {
        Self {
            store,
            coordinator,
            metrics,
            config,
        }
    }

    /// Shared metrics handle.
    #[must_use]
    pub fn metrics(&self) -> &Arc<ResourceMetrics> {
        &self.metrics
    }

    /// Creates a new datastream definition and returns its name.
    ///
    /// Shape validation runs first (name, then connector type, then source;
    /// the earliest missing field wins and neither collaborator is called).
    /// The definition is then normalized — metadata defaulted to empty, the
    /// user-managed-destination flag set when the caller supplied a
    /// destination connection string — initialized by the coordinator
    /// (which may mutate it), and persisted. Initialization and persistence
    /// are not transactional: a persistence failure does not roll back
    /// coordinator side effects.
    ///
    /// # Errors
    ///
    /// [`ResourceError::InvalidInput`] for a missing required field or a
    /// coordinator rejection (carrying the coordinator's reason),
    /// [`ResourceError::Conflict`] when the name is already taken, and
    /// [`ResourceError::Internal`] for any other store failure. No failure
    /// path leaves a durable write behind.
    pub async fn create(&self, mut datastream: Datastream) -> ResourceResult<String> {
        info!(datastream = %datastream.name, "create datastream called");
        self.metrics.record_create_call();

        if let Err(reason) = validate_shape(&datastream) {
            self.metrics.record_error();
            warn!(datastream = %datastream.name, reason, "create rejected");
            return Err(ResourceError::InvalidInput(reason.to_string()));
        }

        datastream.metadata_mut();
        if datastream.has_destination_connection_string() {
            datastream.metadata_mut().insert(
                metadata::IS_USER_MANAGED_DESTINATION.to_string(),
                metadata::TRUE.to_string(),
            );
        }

        let start = Instant::now();

        if let Err(e) = self.coordinator.initialize(&mut datastream).await {
            self.metrics.record_error();
            warn!(datastream = %datastream.name, reason = %e, "coordinator rejected datastream");
            return Err(ResourceError::InvalidInput(format!(
                "failed to initialize datastream: {e}"
            )));
        }

        match self.store.create(&datastream.name, datastream.clone()).await {
            Ok(()) => {}
            Err(StoreError::AlreadyExists(name)) => {
                self.metrics.record_error();
                warn!(datastream = %name, "create conflicts with existing datastream");
                return Err(ResourceError::Conflict(name));
            }
            Err(e) => {
                self.metrics.record_error();
                error!(datastream = %datastream.name, error = %e, "create datastream failed");
                return Err(ResourceError::Internal(
                    "failed to create datastream".to_string(),
                ));
            }
        }

        self.metrics.record_create_latency(start.elapsed());
        Ok(datastream.name)
    }

    /// Returns the definition stored under `name`, or `None` if absent.
    ///
    /// Absence is a valid outcome, distinct from failure.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Internal`] if the lookup itself fails.
    pub async fn get(&self, name: &str) -> ResourceResult<Option<Datastream>> {
        info!(datastream = %name, "get datastream called");
        self.metrics.record_get_call();

        match self.store.get(name).await {
            Ok(found) => Ok(found),
            Err(e) => {
                self.metrics.record_error();
                error!(datastream = %name, error = %e, "get datastream failed");
                Err(ResourceError::Internal(
                    "failed to get datastream".to_string(),
                ))
            }
        }
    }

    /// Returns the definitions selected by `page` from the name
    /// enumeration, in store enumeration order.
    ///
    /// The window is applied to the name sequence before any definition is
    /// fetched. A name that no longer resolves (deleted between enumeration
    /// and fetch) is silently skipped: the result is a best-effort snapshot,
    /// not a transactional read.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Internal`] only if the enumeration itself fails;
    /// partial misses never fail the call.
    pub async fn get_all(&self, page: PagingContext) -> ResourceResult<Vec<Datastream>> {
        info!(offset = page.offset, count = page.count, "get all datastreams called");
        self.metrics.record_get_all_call();

        let page = self.clamp(page);
        let names = match self.store.list_names().await {
            Ok(names) => names,
            Err(e) => {
                self.metrics.record_error();
                error!(error = %e, "get all datastreams failed");
                return Err(ResourceError::Internal(
                    "failed to list datastreams".to_string(),
                ));
            }
        };

        let mut datastreams = Vec::new();
        for name in page.window(names) {
            match self.store.get(&name).await {
                Ok(Some(ds)) => datastreams.push(ds),
                // Concurrently deleted since enumeration; skip.
                Ok(None) => {}
                Err(e) => {
                    warn!(datastream = %name, error = %e, "skipping unresolvable datastream");
                }
            }
        }
        Ok(datastreams)
    }

    /// Deletes the definition stored under `name`.
    ///
    /// Deletion is unconditional; whether deleting an absent name succeeds
    /// is the store's policy (the reference store is idempotent).
    ///
    /// # Errors
    ///
    /// [`ResourceError::Internal`] on any store failure.
    pub async fn delete(&self, name: &str) -> ResourceResult<()> {
        info!(datastream = %name, "delete datastream called");
        self.metrics.record_delete_call();

        let start = Instant::now();
        match self.store.delete(name).await {
            Ok(()) => {
                self.metrics.record_delete_latency(start.elapsed());
                Ok(())
            }
            Err(e) => {
                self.metrics.record_error();
                error!(datastream = %name, error = %e, "delete datastream failed");
                Err(ResourceError::Internal(
                    "failed to delete datastream".to_string(),
                ))
            }
        }
    }

    /// Rejects any update. In-place mutation of a stored definition is
    /// deliberately unsupported by this layer.
    ///
    /// # Errors
    ///
    /// Always [`ResourceError::MethodNotAllowed`].
    pub fn update(&self, name: &str, _datastream: &Datastream) -> ResourceResult<()> {
        info!(datastream = %name, "update datastream called (not allowed)");
        self.metrics.record_update_call();
        Err(ResourceError::MethodNotAllowed)
    }

    fn clamp(&self, page: PagingContext) -> PagingContext {
        let count = if page.count == 0 {
            self.config.default_page_size
        } else {
            page.count.min(self.config.max_page_size)
        };
        PagingContext::new(page.offset, count)
    }
}

/// Shape validation: first failure wins, in declaration order.
fn validate_shape(datastream: &Datastream) -> Result<(), &'static str> {
    if !datastream.has_name() {
        return Err("must specify name of datastream");
    }
    if !datastream.has_connector_type() {
        return Err("must specify connector type");
    }
    if !datastream.has_source() {
        return Err("must specify source of datastream");
    }
    Ok(())
}
