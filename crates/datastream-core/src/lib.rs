//! # Datastream Core
//!
//! Shared data model for the datastream management API: the [`Datastream`]
//! definition record, well-known metadata keys, the paging window used by
//! list operations, and the client-facing error taxonomy.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

mod datastream;
mod error;
pub mod metadata;
mod paging;

pub use datastream::{Datastream, DatastreamDestination, DatastreamSource};
pub use error::{ResourceError, ResourceResult};
pub use paging::{PagingContext, DEFAULT_PAGE_SIZE};
