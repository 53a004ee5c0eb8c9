//! Page addressing for the remote listing.

use serde::Deserialize;
use validator::Validate;

/// Rows-per-page choices offered by the table.
pub const ROWS_PER_PAGE_OPTIONS: [u32; 2] = [6, 12];

/// Rows per page before the user picks another option.
pub const DEFAULT_ROWS_PER_PAGE: u32 = 6;

/// A request for one page of the listing.
///
/// `page` is 1-based. Neither field is checked here; the caller must pass
/// positive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// The request for the page after this one, with the same limit.
    ///
    /// Saturates at the last addressable page.
    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            limit: self.limit,
        }
    }

    /// Zero-based index of the first record on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// A pagination event raised by the table's paginator.
///
/// The paginator numbers pages from zero; a missing index means the event
/// carried no usable page and must be ignored.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct PageEvent {
    #[serde(default)]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = 100))]
    pub rows: u32,
}

impl PageEvent {
    pub fn new(page: Option<u32>, rows: u32) -> Self {
        Self { page, rows }
    }

    /// Converts the event into the 1-based request it should trigger.
    ///
    /// Returns `None` when the event has no page index, the index has no
    /// 1-based counterpart, or the event fails validation.
    pub fn to_request(&self) -> Option<PageRequest> {
        if self.validate().is_err() {
            return None;
        }
        let page = self.page?.checked_add(1)?;
        Some(PageRequest::new(page, self.rows))
    }
}
