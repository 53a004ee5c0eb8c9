//! Core domain entities.
//!
//! Entities are plain data structures; the wire format lives in
//! [`crate::infrastructure::http::dto`] and is converted at the boundary.
//!
//! - [`Artwork`] - A catalogue record
//! - [`Page`] - One fetched page plus the server-reported total
//! - [`Selection`] - Ordered records picked by the user

pub mod artwork;
pub mod page;
pub mod selection;

pub use artwork::Artwork;
pub use page::Page;
pub use selection::Selection;
