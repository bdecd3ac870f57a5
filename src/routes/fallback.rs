//! Fallback handler for unknown routes.

use crate::error::AppError;
use axum::http::StatusCode;

/// 404 handler, returned as a JSON API error object.
pub async fn notfound_404() -> AppError {
    AppError::new(StatusCode::NOT_FOUND, Some("Route not found"))
}
