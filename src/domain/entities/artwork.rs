//! Artwork entity, the record type listed by the remote endpoint.

/// A single artwork as listed by the remote catalogue.
///
/// Artworks are independent values; nothing references another record.
/// The `id` is unique across the whole catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub id: i64,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: Option<String>,
    pub date_start: String,
    pub date_end: String,
}

impl Artwork {
    /// Creates a new Artwork instance.
    pub fn new(
        id: i64,
        place_of_origin: String,
        artist_display: String,
        inscriptions: Option<String>,
        date_start: String,
        date_end: String,
    ) -> Self {
        Self {
            id,
            place_of_origin,
            artist_display,
            inscriptions,
            date_start,
            date_end,
        }
    }

    /// Returns true if the artwork carries an inscription annotation.
    pub fn has_inscriptions(&self) -> bool {
        self.inscriptions.as_deref().is_some_and(|s| !s.is_empty())
    }
}
