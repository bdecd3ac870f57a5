//! Verification email route.

use crate::{
    app_state::AppState,
    common::{EmailVerifyRequest, SuccessResponse},
    error::{AppError, AppResult},
    models::verification_email::VerificationEmail,
    setups::{ServerSetup, VerificationEmailSender},
};
use axum::{
    self,
    extract::{Json, State},
    http::StatusCode,
};
use tracing::{error, info};

/// POST handler for sending a verification email
#[utoipa::path(
    post,
    path = "/api/v0/email/verification",
    request_body = EmailVerifyRequest,
    responses(
        (status = 200, description = "Verification email sent", body = SuccessResponse),
        (status = 400, description = "Missing email address", body = AppError),
        (status = 500, description = "Mail transport failure", body = AppError),
    )
)]
pub async fn send_verification_email<S: ServerSetup>(
    State(state): State<AppState<S>>,
    Json(request): Json<EmailVerifyRequest>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    let email = request
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .ok_or_else(|| {
            AppError::new(StatusCode::BAD_REQUEST, Some("Missing email address."))
        })?;

    let message =
        VerificationEmail::new(&state.mailgun_settings, email, request.display_name.as_deref());

    match state.verification_email_sender.send(&message).await {
        Ok(()) => {
            info!(email, "Verification email sent");
            Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
        }
        Err(err) => {
            // The transport error stays in the logs. Callers only see a
            // generic failure.
            error!(?err, "Email send failed");
            Err(AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                Some("Failed to send email."),
            ))
        }
    }
}
