//! Shared query parameter types for API handlers.

use formkit_core::pagination::PageRequest;
use serde::Deserialize;

/// Page-number pagination parameters (`?page=&limit=&sortOrder=`).
///
/// Kept as raw strings so malformed values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_order: Option<String>,
}

impl PageParams {
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::from_query(
            self.page.as_deref(),
            self.limit.as_deref(),
            self.sort_order.as_deref(),
        )
    }
}
