//! Configuration for the management API.

use datastream_core::DEFAULT_PAGE_SIZE;

/// Configuration for a [`DatastreamServer`](crate::DatastreamServer).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Page size used when a list call does not specify one.
    pub default_page_size: usize,
    /// Upper bound on a caller-supplied page size.
    pub max_page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: 1000,
        }
    }
}
