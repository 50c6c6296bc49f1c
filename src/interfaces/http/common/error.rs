//! Mapping of domain errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::ApiResponse;
use crate::domain::DomainError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Handler error: a `DomainError` rendered as the error envelope.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
            DomainError::Database(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match &self.0 {
            DomainError::Validation(msg)
            | DomainError::Conflict(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::Forbidden(msg) => msg.clone(),
            DomainError::NotFound { entity, field, value } => {
                format!("{} with {} '{}' not found", entity, field, value)
            }
            // Storage details stay in the logs.
            DomainError::Database(_) | DomainError::Internal(_) => "Internal server error".into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }
        (status, Json(ApiResponse::<()>::error(self.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (DomainError::not_found("Cliente", 1), StatusCode::NOT_FOUND),
            (DomainError::Validation("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (DomainError::Conflict("x".into()), StatusCode::CONFLICT),
            (DomainError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (DomainError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (DomainError::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status(), status);
        }
    }

    #[test]
    fn database_details_are_hidden() {
        let e = ApiError(DomainError::Database("UNIQUE constraint failed: clientes.email".into()));
        assert_eq!(e.message(), "Internal server error");
    }

    #[test]
    fn not_found_message_names_entity() {
        let e = ApiError(DomainError::not_found("Contrato", 7));
        assert_eq!(e.message(), "Contrato with id '7' not found");
    }
}
