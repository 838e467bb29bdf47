//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use quillpad_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
///
/// The page size defaults to the configured fixed size for the endpoint;
/// clients may override it within the clamped range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: endpoint-specific, max: 100).
    pub per_page: Option<u64>,
}

fn default_page() -> u64 {
    1
}

impl PaginationParams {
    /// Converts to a `PageRequest`, falling back to `default_size`.
    pub fn page_request(&self, default_size: u64) -> PageRequest {
        PageRequest::new(self.page, self.per_page.unwrap_or(default_size))
    }
}
