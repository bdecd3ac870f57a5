//! Request & response types shared with the calling platform.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Email verification request struct
///
/// Field names are camelCase on the wire, matching the payload the
/// web client sends.
#[derive(Deserialize, Serialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailVerifyRequest {
    /// Identifier of the user signing up. Accepted for parity with the
    /// calling platform's payload, but not used when constructing the email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// The email address of the user signing up.
    ///
    /// Modelled as an `Option` so a missing field is reported as this
    /// service's "Missing email address." error instead of a
    /// deserialization rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name used to personalize the greeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Response type indicating success
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct SuccessResponse {
    /// Whether the response was successful
    pub success: bool,
}
