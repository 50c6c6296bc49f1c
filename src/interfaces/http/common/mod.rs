//! Shared HTTP building blocks

pub mod error;
pub mod response;
pub mod validated_json;

pub use error::{ApiError, ApiResult};
pub use response::{ApiResponse, DeleteOutcomeDto, EmptyData, PageQuery, PaginatedResponse};
pub use validated_json::ValidatedJson;

use std::str::FromStr;

use crate::domain::DomainError;

/// Parse an optional enum sent as text; unknown values answer 422.
pub fn parse_optional<T>(value: Option<&str>) -> ApiResult<Option<T>>
where
    T: FromStr<Err = DomainError>,
{
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(T::from_str)
        .transpose()
        .map_err(ApiError::from)
}
