//! Page fetching and cross-page selection service.

use std::sync::Arc;

use crate::domain::entities::{Artwork, Page, Selection};
use crate::domain::pagination::PageRequest;
use crate::domain::repositories::ArtworkRepository;
use crate::error::AppResult;
use crate::utils::SelectionCount;
use tracing::{debug, info, warn};

/// Service exposing the two operations a paginated table needs.
///
/// - [`Self::fetch_page`] for pagination controls
/// - [`Self::select_first_n`] for the "select N rows" control
///
/// Holds no state between calls; every selection run starts again from page 1.
pub struct SelectionService<R: ArtworkRepository> {
    repository: Arc<R>,
}

impl<R: ArtworkRepository> SelectionService<R> {
    /// Creates a new selection service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetches one page of the listing.
    ///
    /// `page` is 1-based. Inputs are passed through unchecked.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Fetch`] if the request fails.
    pub async fn fetch_page(&self, page: u32, size: u32) -> AppResult<Page> {
        let page = self
            .repository
            .fetch_page(PageRequest::new(page, size))
            .await?;
        Ok(page)
    }

    /// Selects the first `count` records of the listing, across pages.
    ///
    /// Pages are fetched strictly one after another starting at page 1 with a
    /// fixed `page_size`, until enough records are collected, the
    /// server-reported total is reached, or the server returns an empty page.
    /// The result is truncated to `count`, so it holds `min(count, total)`
    /// records in server order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Fetch`] on the first failed fetch.
    /// Records fetched before the failure are discarded.
    pub async fn select_first_n(
        &self,
        count: SelectionCount,
        page_size: u32,
    ) -> AppResult<Selection> {
        let target = count.get();
        let mut fetched: Vec<Artwork> = Vec::new();
        let mut request = PageRequest::new(1, page_size);

        loop {
            let page = match self.repository.fetch_page(request).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        requested = target,
                        fetched = fetched.len(),
                        page = request.page,
                        "Selection run aborted, discarding fetched records"
                    );
                    return Err(e.into());
                }
            };

            let received = page.len();
            let total = page.total;
            fetched.extend(page.records);
            debug!(
                page = request.page,
                received,
                accumulated = fetched.len(),
                total,
                "Accumulated selection page"
            );
            request = request.next();

            if fetched.len() >= target {
                break;
            }
            if fetched.len() as u64 >= total {
                break;
            }
            if received == 0 {
                warn!(
                    page = request.page - 1,
                    accumulated = fetched.len(),
                    total,
                    "Empty page before reported total was reached, stopping"
                );
                break;
            }
        }

        let selection = Selection::first_n(fetched, target);
        info!(
            requested = target,
            selected = selection.len(),
            pages = request.page - 1,
            page_size,
            "Selection complete"
        );

        Ok(selection)
    }
}
