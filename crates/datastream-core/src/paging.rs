//! Paging window for list operations.

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// An offset + count window applied to an enumeration of names.
///
/// The window selects *which names* are resolved, not which definitions are
/// fetched, so a list call never materializes more definitions than the
/// page asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingContext {
    /// Number of names to skip from the start of the enumeration.
    #[serde(default)]
    pub offset: usize,
    /// Maximum number of names to resolve.
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PagingContext {
    fn default() -> Self {
        Self {
            offset: 0,
            count: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagingContext {
    /// Creates a window starting at `offset` selecting up to `count` names.
    #[must_use]
    pub fn new(offset: usize, count: usize) -> Self {
        Self { offset, count }
    }

    /// Applies the window to a name sequence.
    pub fn window<I, T>(&self, names: I) -> impl Iterator<Item = T>
    where
        I: IntoIterator<Item = T>,
    {
        names.into_iter().skip(self.offset).take(self.count)
    }
}
