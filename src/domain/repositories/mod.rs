//! Repository trait definitions for the domain layer.
//!
//! - [`ArtworkRepository`] - Paginated, read-only artwork listing
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod artwork_repository;

pub use artwork_repository::ArtworkRepository;

#[cfg(test)]
pub use artwork_repository::MockArtworkRepository;
