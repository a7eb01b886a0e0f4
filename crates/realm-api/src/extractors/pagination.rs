//! Pagination query parameters.

use serde::Deserialize;

use realm_core::types::PageRequest;

/// `?page=&page_size=` on list endpoints. Missing values fall back to the
/// first page of 25; out-of-range values are clamped, not rejected.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationParams {
    /// Page number, 1-based.
    pub page: Option<u64>,
    /// Rows per page, at most 100.
    pub page_size: Option<u64>,
}

impl PaginationParams {
    /// The clamped page window.
    pub fn into_page_request(self) -> PageRequest {
        let fallback = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(fallback.page),
            self.page_size.unwrap_or(fallback.page_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_use_first_page() {
        let page = PaginationParams::default().into_page_request();
        assert_eq!(page, PageRequest::new(1, 25));
    }

    #[test]
    fn test_clamps_out_of_range_values() {
        let page = PaginationParams {
            page: Some(0),
            page_size: Some(1_000),
        }
        .into_page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 100);
    }
}
