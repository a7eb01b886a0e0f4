//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Page size when the caller names none.
pub const DEFAULT_PAGE_SIZE: u64 = 25;
/// Upper bound on `page_size`.
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest offset a PostgreSQL `OFFSET` (bigint) accepts.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A 1-based page window. Construct through [`PageRequest::new`] so the
/// bounds hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, at least 1.
    pub page: u64,
    /// Rows per page, between 1 and 100.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request, clamping out-of-range values.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Rows to skip. Saturates at `i64::MAX` so it always fits a SQL `OFFSET`.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(MAX_OFFSET)
    }

    /// Rows to take.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the totals needed to walk the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(page_size.max(1))
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Transform every item while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
