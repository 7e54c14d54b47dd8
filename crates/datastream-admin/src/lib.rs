//! # Datastream Admin Interface
//!
//! REST transport for the datastream management API. The router maps HTTP
//! requests onto [`DatastreamResources`](datastream_server::DatastreamResources)
//! and the error taxonomy onto HTTP statuses; all request semantics live in
//! `datastream-server`.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

mod api;

pub use api::datastream_router;
