//! # Datastream Server
//!
//! The request-handling core of the datastream management API.
//!
//! [`DatastreamResources`] implements the five operations (Create, Get,
//! GetAll, Delete, and the always-rejected Update) against two pluggable
//! collaborators: a [`DatastreamStore`](datastream_store::DatastreamStore)
//! that persists definitions keyed by name, and a [`Coordinator`] that
//! semantically validates and completes a definition before it may be
//! persisted. Per-request state is nil; the only shared mutable state is
//! the process-wide [`ResourceMetrics`].

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

mod config;
mod coordinator;
mod metrics;
mod resources;
mod server;

pub use config::ServerConfig;
pub use coordinator::{Coordinator, StaticCoordinator, ValidationError};
pub use metrics::{LatencySnapshot, MetricsSnapshot, ResourceMetrics};
pub use resources::DatastreamResources;
pub use server::{DatastreamServer, DatastreamServerBuilder};
