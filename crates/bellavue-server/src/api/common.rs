// Common DTOs for the public API
//
// Shared response types plus the mapping from service errors onto HTTP
// status codes. Every surfaced error carries its message; nothing is
// swallowed silently.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bellavue_core::{LinkageError, StoreError};

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response wrapper for list endpoints.
/// All list endpoints return responses wrapped in a `data` field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    /// Array of items returned by the list operation.
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn store_error(err: StoreError) -> ApiError {
    let status = match &err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::Validation(_) => StatusCode::BAD_REQUEST,
    };
    (status, Json(ErrorResponse::new(err.to_string())))
}

pub fn linkage_error(err: LinkageError) -> ApiError {
    match err {
        LinkageError::Validation(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(err.to_string())),
        ),
        LinkageError::HasLinkedEvents { .. } => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new(err.to_string())),
        ),
        LinkageError::Store(inner) => store_error(inner),
    }
}

/// Deletes and backup are admin-only; everything else is open to the
/// logged-in team (client-trust model).
pub fn require_admin(session: &crate::services::SessionService) -> Result<(), ApiError> {
    if session.role().is_admin() {
        Ok(())
    } else {
        Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("admin role required")),
        ))
    }
}
