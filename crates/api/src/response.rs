//! Shared response envelope types for API handlers.
//!
//! Successful responses carry `"success": true`; error responses (see
//! [`crate::error::AppError`]) carry `"success": false`.

use formkit_core::pagination::PageInfo;
use serde::Serialize;

/// Standard `{ "success": true, "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "data": [...], "pageInfo": {...} }` envelope for
/// paginated listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub page_info: PageInfo,
}

impl<T: Serialize> PagedResponse<T> {
    pub fn ok(data: Vec<T>, page_info: PageInfo) -> Self {
        Self {
            success: true,
            data,
            page_info,
        }
    }
}
