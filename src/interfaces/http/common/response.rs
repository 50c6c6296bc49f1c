//! Response envelope and pagination DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::DeleteOutcome;
use crate::shared::{PaginatedResult, PaginationParams};

/// Standard API response envelope
///
/// Success: `{"success": true, "data": {...}}`,
/// error: `{"success": false, "error": "message"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty payload for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// `page` (from 1) and `limit` (1-100, default 20) query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<PageQuery> for PaginationParams {
    fn from(q: PageQuery) -> Self {
        PaginationParams::new(q.page, q.limit)
    }
}

/// One page of items plus paging metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Items across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Convert a repository page, mapping every item to its DTO.
    pub fn from_result<D>(result: PaginatedResult<D>) -> Self
    where
        T: From<D>,
    {
        let page = result.map(T::from);
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

/// Result of a delete that may fall back to deactivation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteOutcomeDto {
    /// "deleted" or "deactivated"
    pub outcome: String,
}

impl From<DeleteOutcome> for DeleteOutcomeDto {
    fn from(o: DeleteOutcome) -> Self {
        let outcome = match o {
            DeleteOutcome::Deleted => "deleted",
            DeleteOutcome::Deactivated => "deactivated",
        };
        Self {
            outcome: outcome.to_string(),
        }
    }
}
