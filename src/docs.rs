//! OpenAPI doc generation.

use crate::{
    common::{EmailVerifyRequest, SuccessResponse},
    error::AppError,
    routes::{email, health, ping},
};
use utoipa::OpenApi;

/// API documentation generator.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck,
        ping::get,
        email::send_verification_email,
    ),
    components(
        schemas(
            AppError,
            EmailVerifyRequest,
            SuccessResponse,
            health::HealthcheckResponse
        )
    )
)]

/// Tied to OpenAPI documentation.
#[derive(Debug)]
pub struct ApiDoc;
