//! Verification Email Model

use crate::settings;

/// Fallback greeting name when the request carries no display name.
const DEFAULT_DISPLAY_NAME: &str = "there";

/// A fully rendered verification email, ready for handoff to a
/// [`VerificationEmailSender`](crate::setups::VerificationEmailSender).
///
/// Constructed, sent and discarded within a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmail {
    /// Recipient address
    pub to: String,
    /// Message subject
    pub subject: String,
    /// Plain-text message body
    pub text: String,
}

impl VerificationEmail {
    /// Render the verification email for a recipient.
    ///
    /// The body links to the static verification URL from settings. The
    /// link is the same for every recipient; there is no per-user token.
    pub fn new(
        settings: &settings::Mailgun,
        email: &str,
        display_name: Option<&str>,
    ) -> Self {
        let display_name = display_name
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME);

        let text = format!(
            "Hi {display_name},\n\
             \n\
             Welcome to AlgorithMat!\n\
             \n\
             Click the link below to verify your email:\n\
             {}\n\
             \n\
             Best regards,\n\
             The AlgorithMat Team",
            settings.verification_url
        );

        Self {
            to: email.to_string(),
            subject: settings.subject.clone(),
            text,
        }
    }
}
