//! One page of the remote listing.

use super::Artwork;

/// A single fetched page together with the catalogue size reported by the server.
///
/// Pages are transient: they are rebuilt on every fetch and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub records: Vec<Artwork>,
    /// Total number of records across all pages at fetch time.
    pub total: u64,
}

impl Page {
    pub fn new(records: Vec<Artwork>, total: u64) -> Self {
        Self { records, total }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
