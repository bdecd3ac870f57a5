//! Runtime panic handling.

use crate::error::{AppError, ErrorResponse};
use axum::http::StatusCode;
use http::{header, HeaderValue, Response};
use hyper::Body;
use std::any::Any;

/// Converts a runtime panic caught by
/// [`tower_http::catch_panic::CatchPanicLayer`] into a JSON API 500 response.
pub fn catch_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "Unknown panic message"
    };

    tracing::error!(detail, "Request handler panicked");

    let error: ErrorResponse =
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, Some("Internal Server Error")).into();

    let body = serde_json::to_string(&error)
        .unwrap_or_else(|_| r#"{"errors":[{"status":"500"}]}"#.to_string());

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )
        .body(Body::from(body))
        .expect("building a static response can't fail")
}
