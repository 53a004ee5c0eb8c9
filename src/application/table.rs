//! Paginated table state and the controller that drives it.
//!
//! [`TableState`] is everything a table view renders: the visible page, the
//! catalogue size, pagination position, the current selection and the raw
//! text of the "rows to select" box. [`TableController`] applies UI actions to
//! that state through [`SelectionService`].
//!
//! Page loads and selection runs are independent flows that may overlap. Each
//! flow has a generation counter; an operation takes a ticket when it starts
//! and only writes its result if no newer operation of the same flow started
//! in the meantime. The state lock is never held across a network call.

use std::sync::Arc;

use crate::application::services::SelectionService;
use crate::domain::entities::{Artwork, Selection};
use crate::domain::pagination::{DEFAULT_ROWS_PER_PAGE, PageEvent, PageRequest};
use crate::domain::repositories::ArtworkRepository;
use crate::error::AppResult;
use crate::utils::parse_selection_count;
use tokio::sync::Mutex;
use tracing::debug;

/// Everything a table view needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Records of the currently displayed page.
    pub records: Vec<Artwork>,
    /// Catalogue size reported by the last applied page load.
    pub total_records: u64,
    /// Current page, 1-based.
    pub page: u32,
    /// Rows per page.
    pub rows: u32,
    pub selection: Selection,
    /// Raw text of the selection-count input.
    pub input: String,
}

impl TableState {
    pub fn new(rows: u32) -> Self {
        Self {
            records: Vec::new(),
            total_records: 0,
            page: 1,
            rows,
            selection: Selection::default(),
            input: String::new(),
        }
    }

    pub fn current_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.rows)
    }

    /// Zero-based index of the first visible record, as a paginator expects it.
    pub fn first_record_offset(&self) -> u64 {
        self.current_request().offset()
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

/// What happened to the state after an operation finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The result was written to the state.
    Applied,
    /// A newer operation of the same kind started first; the result was dropped.
    Stale,
    /// The action was not acted on (no page index, invalid count).
    Ignored,
}

#[derive(Debug)]
struct Inner {
    state: TableState,
    page_generation: u64,
    selection_generation: u64,
}

/// Applies table UI actions to a [`TableState`].
pub struct TableController<R: ArtworkRepository> {
    service: Arc<SelectionService<R>>,
    inner: Mutex<Inner>,
}

impl<R: ArtworkRepository> TableController<R> {
    /// Creates a controller on page 1 with `rows` rows per page.
    ///
    /// Nothing is fetched until [`Self::load_page`] is called.
    pub fn new(service: Arc<SelectionService<R>>, rows: u32) -> Self {
        Self {
            service,
            inner: Mutex::new(Inner {
                state: TableState::new(rows),
                page_generation: 0,
                selection_generation: 0,
            }),
        }
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> TableState {
        self.inner.lock().await.state.clone()
    }

    /// Fetches the current page and writes its records and total.
    ///
    /// # Errors
    ///
    /// Returns the fetch error if the request fails and no newer page load
    /// has started. The state is left unchanged.
    pub async fn load_page(&self) -> AppResult<UpdateOutcome> {
        let (ticket, request) = {
            let mut inner = self.inner.lock().await;
            inner.page_generation += 1;
            (inner.page_generation, inner.state.current_request())
        };

        self.finish_page_load(ticket, request).await
    }

    /// Handles a paginator event: moves to the event's page and rows, then loads it.
    ///
    /// Events without a page index, or with an out-of-range row count, are ignored.
    ///
    /// # Errors
    ///
    /// See [`Self::load_page`]. The new `page` and `rows` are kept even when the
    /// fetch fails, while `records` still hold the previously loaded page.
    pub async fn apply_page_event(&self, event: PageEvent) -> AppResult<UpdateOutcome> {
        let Some(request) = event.to_request() else {
            debug!(?event, "Ignoring pagination event");
            return Ok(UpdateOutcome::Ignored);
        };

        let ticket = {
            let mut inner = self.inner.lock().await;
            inner.state.page = request.page;
            inner.state.rows = request.limit;
            inner.page_generation += 1;
            inner.page_generation
        };

        self.finish_page_load(ticket, request).await
    }

    async fn finish_page_load(&self, ticket: u64, request: PageRequest) -> AppResult<UpdateOutcome> {
        let result = self.service.fetch_page(request.page, request.limit).await;

        let mut inner = self.inner.lock().await;
        if inner.page_generation != ticket {
            debug!(page = request.page, "Discarding stale page load");
            return Ok(UpdateOutcome::Stale);
        }

        let page = result?;
        inner.state.total_records = page.total;
        inner.state.records = page.records;
        Ok(UpdateOutcome::Applied)
    }

    /// Replaces the text of the selection-count input.
    pub async fn set_input(&self, text: impl Into<String>) {
        self.inner.lock().await.state.input = text.into();
    }

    /// Selects the first N records, N being parsed from the input text.
    ///
    /// Invalid input (non-numeric, zero or negative) leaves the selection
    /// untouched and returns [`UpdateOutcome::Ignored`]. The rows-per-page value
    /// is read once at the start and used for the whole run.
    ///
    /// # Errors
    ///
    /// Returns the fetch error if any page fetch fails and no newer selection
    /// change has happened. The previous selection is kept.
    pub async fn apply_selection(&self) -> AppResult<UpdateOutcome> {
        let (ticket, count, page_size) = {
            let mut inner = self.inner.lock().await;
            let count = match parse_selection_count(&inner.state.input) {
                Ok(count) => count,
                Err(e) => {
                    debug!(error = %e, "Ignoring selection request");
                    return Ok(UpdateOutcome::Ignored);
                }
            };
            inner.selection_generation += 1;
            (inner.selection_generation, count, inner.state.rows)
        };

        let result = self.service.select_first_n(count, page_size).await;

        let mut inner = self.inner.lock().await;
        if inner.selection_generation != ticket {
            debug!(requested = count.get(), "Discarding stale selection run");
            return Ok(UpdateOutcome::Stale);
        }

        inner.state.selection = result?;
        Ok(UpdateOutcome::Applied)
    }

    /// Replaces the selection with a manual pick.
    ///
    /// Any selection run still in flight will not overwrite it.
    pub async fn set_selection(&self, records: Vec<Artwork>) {
        let mut inner = self.inner.lock().await;
        inner.selection_generation += 1;
        inner.state.selection = Selection::new(records);
    }
}
