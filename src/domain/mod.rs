//! Domain layer: entities, page addressing and the data source contract.
//!
//! The domain has no knowledge of HTTP; the concrete source lives in
//! [`crate::infrastructure::http`].
//!
//! - [`entities`] - Artwork, Page and Selection values
//! - [`pagination`] - Page requests and paginator events
//! - [`repositories`] - The [`repositories::ArtworkRepository`] trait

pub mod entities;
pub mod pagination;
pub mod repositories;
