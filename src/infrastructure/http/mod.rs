//! HTTP access to the remote artwork listing.

pub mod artwork_client;
pub mod dto;

pub use artwork_client::HttpArtworkRepository;
