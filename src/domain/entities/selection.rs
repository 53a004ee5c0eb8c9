//! Ordered selection of artworks.

use super::Artwork;

/// The records a user has selected, in the order the server returned them.
///
/// A selection produced by
/// [`SelectionService::select_first_n`](crate::application::services::SelectionService::select_first_n)
/// never holds more than the requested count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection(Vec<Artwork>);

impl Selection {
    pub fn new(records: Vec<Artwork>) -> Self {
        Self(records)
    }

    /// Builds a selection of at most `limit` leading records.
    pub fn first_n(mut records: Vec<Artwork>, limit: usize) -> Self {
        records.truncate(limit);
        Self(records)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Artwork] {
        &self.0
    }

    /// Identifiers of the selected records, in selection order.
    pub fn ids(&self) -> Vec<i64> {
        self.0.iter().map(|a| a.id).collect()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.iter().any(|a| a.id == id)
    }
}
