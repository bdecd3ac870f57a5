//! Healthcheck route.

use crate::{app_state::AppState, error::AppResult, setups::ServerSetup};
use axum::{self, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

/// A healthcheck response containing diagnostic information for the service
#[derive(ToSchema, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub struct HealthcheckResponse {
    mailer_configured: bool,
}

impl HealthcheckResponse {
    /// Whether the service is healthy
    pub fn is_healthy(&self) -> bool {
        self.mailer_configured
    }

    /// The status code for the healthcheck response
    pub fn status_code(&self) -> StatusCode {
        if self.is_healthy() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET handler for checking service health.
#[utoipa::path(
    get,
    path = "/healthcheck",
    responses(
        (status = 200, description = "algorithmat-mailer healthy", body=HealthcheckResponse),
        (status = 503, description = "algorithmat-mailer not healthy", body=HealthcheckResponse)
    )
)]
pub async fn healthcheck<S: ServerSetup>(
    State(state): State<AppState<S>>,
) -> AppResult<(StatusCode, axum::Json<serde_json::Value>)> {
    // The mailer is constructed from settings at startup. If the API key or
    // sender address were blank the process wouldn't have a usable transport.
    let mailer_configured = !state.mailgun_settings.api_key.is_empty()
        && !state.mailgun_settings.from_address.is_empty();

    let response = HealthcheckResponse { mailer_configured };

    Ok((response.status_code(), axum::Json(json! { response })))
}
