//! Server facade and builder.

use std::sync::Arc;

use datastream_store::{DatastreamStore, MemoryStore};

use crate::{
    Coordinator, DatastreamResources, ResourceMetrics, ServerConfig, StaticCoordinator,
};

/// Owns the management API's collaborators and hands out the request
/// handler. Embedders construct one via [`DatastreamServer::builder`].
pub struct DatastreamServer {
    resources: Arc<DatastreamResources>,
    metrics: Arc<ResourceMetrics>,
}

impl DatastreamServer {
    /// Starts a builder with default settings (in-memory store, static
    /// coordinator with no connector types).
    #[must_use]
    pub fn builder() -> DatastreamServerBuilder {
        DatastreamServerBuilder::new()
    }

    /// The request handler.
    #[must_use]
    pub fn resources(&self) -> Arc<DatastreamResources> {
        Arc::clone(&self.resources)
    }

    /// The process-wide metrics.
    #[must_use]
    pub fn metrics(&self) -> Arc<ResourceMetrics> {
        Arc::clone(&self.metrics)
    }
}

/// Fluent builder for a [`DatastreamServer`].
///
/// # Example
///
/// ```rust,ignore
/// let server = DatastreamServer::builder()
///     .connector_types(["kafka", "mysql-cdc"])
///     .max_page_size(500)
///     .build();
/// ```
pub struct DatastreamServerBuilder {
    store: Option<Arc<dyn DatastreamStore>>,
    coordinator: Option<Arc<dyn Coordinator>>,
    config: ServerConfig,
    connector_types: Vec<String>,
}

impl Default for DatastreamServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatastreamServerBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            coordinator: None,
            config: ServerConfig::default(),
            connector_types: Vec::new(),
        }
    }

    /// Uses the given store instead of the in-memory default.
    #[must_use]
    pub fn store(mut self, store: Arc<dyn DatastreamStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Uses the given coordinator instead of the static default.
    #[must_use]
    pub fn coordinator(mut self, coordinator: Arc<dyn Coordinator>) -> Self {
        self.coordinator = Some(coordinator);
        self
    }

    /// Registers connector types for the default static coordinator.
    /// Ignored when an explicit coordinator is supplied.
    #[must_use]
    pub fn connector_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connector_types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Sets the page size used when a list call does not specify one.
    #[must_use]
    pub fn default_page_size(mut self, size: usize) -> Self {
        self.config.default_page_size = size;
        self
    }

    /// Sets the upper bound on a caller-supplied page size.
    #[must_use]
    pub fn max_page_size(mut self, size: usize) -> Self {
        self.config.max_page_size = size;
        self
    }

    /// Builds the server.
    #[must_use]
    pub fn build(self) -> DatastreamServer {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new()) as Arc<dyn DatastreamStore>);
        let coordinator = self.coordinator.unwrap_or_else(|| {
            Arc::new(StaticCoordinator::new(self.connector_types)) as Arc<dyn Coordinator>
        });
        let metrics = Arc::new(ResourceMetrics::new());
        let resources = Arc::new(DatastreamResources::new(
            store,
            coordinator,
            Arc::clone(&metrics),
            self.config,
        ));
        DatastreamServer { resources, metrics }
    }
}
