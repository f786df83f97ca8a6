use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation body for operations with no resource to return.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct MessageDto {
    pub message: String,
}

/// Health check response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
}

/// Pagination envelope returned alongside every paginated collection.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    /// 1-indexed page number.
    pub page: u64,
    pub limit: u64,
    /// Total matching rows, counted independently of the page slice.
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationDto {
    /// Builds the envelope, deriving `total_pages = ceil(total / limit)`.
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit.max(1)),
        }
    }
}
