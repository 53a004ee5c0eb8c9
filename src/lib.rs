//! # Artwork Picker
//!
//! Client library for browsing a paginated, server-backed artwork catalogue
//! and selecting the first N records across page boundaries.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Artwork, Page and Selection values and the repository trait
//! - **Application Layer** ([`application`]) - Page fetches, "select first N" and table state
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP/JSON client for the list endpoint
//!
//! ## Quick Start
//!
//! ```bash
//! export ARTWORKS_API_URL="https://api.artic.edu/api/v1/artworks"  # Optional
//!
//! cargo run -- page --page 2 --rows 12
//! cargo run -- select 20
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::{AppError, FetchError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::SelectionService;
    pub use crate::application::table::{TableController, TableState, UpdateOutcome};
    pub use crate::domain::entities::{Artwork, Page, Selection};
    pub use crate::domain::pagination::{PageEvent, PageRequest};
    pub use crate::domain::repositories::ArtworkRepository;
    pub use crate::error::{AppError, FetchError};
    pub use crate::infrastructure::http::HttpArtworkRepository;
    pub use crate::utils::{SelectionCount, parse_selection_count};
}
