//! Repository trait for the paginated artwork listing.

use crate::domain::entities::Page;
use crate::domain::pagination::PageRequest;
use crate::error::FetchError;
use async_trait::async_trait;

/// Read-only access to the remote artwork catalogue, one page at a time.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpArtworkRepository`] - HTTP/JSON implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/http_repository.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtworkRepository: Send + Sync {
    /// Fetches exactly one page of records and the server-reported total.
    ///
    /// `request.page` is 1-based. Inputs are not validated; callers must pass
    /// a positive page and limit.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, a non-2xx status, or a
    /// body that does not match the expected shape. No retry is attempted.
    async fn fetch_page(&self, request: PageRequest) -> Result<Page, FetchError>;
}
