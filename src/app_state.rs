//! The Axum Application State

use crate::{settings, setups::ServerSetup};
use anyhow::{anyhow, Result};
use std::sync::Arc;

#[derive(Clone, Debug)]
/// Global application route state.
pub struct AppState<S: ServerSetup> {
    /// Mailgun settings loaded from env variables & the settings.toml file.
    /// Also the source of the subject & verification link in outgoing emails.
    pub mailgun_settings: Arc<settings::Mailgun>,
    /// The service that delivers verification emails
    pub verification_email_sender: S::VerificationEmailSender,
}

/// Builder for [`AppState`]
#[derive(Debug)]
pub struct AppStateBuilder<S: ServerSetup> {
    mailgun_settings: Option<settings::Mailgun>,
    verification_email_sender: Option<S::VerificationEmailSender>,
}

impl<S: ServerSetup> Default for AppStateBuilder<S> {
    fn default() -> Self {
        Self {
            mailgun_settings: None,
            verification_email_sender: None,
        }
    }
}

impl<S: ServerSetup> AppStateBuilder<S> {
    /// Set the mailgun settings
    pub fn with_mailgun_settings(mut self, settings: settings::Mailgun) -> Self {
        self.mailgun_settings = Some(settings);
        self
    }

    /// Set the verification email sender
    pub fn with_verification_email_sender(
        mut self,
        sender: S::VerificationEmailSender,
    ) -> Self {
        self.verification_email_sender = Some(sender);
        self
    }

    /// Finalize the builder into an [`AppState`]
    pub fn finalize(self) -> Result<AppState<S>> {
        Ok(AppState {
            mailgun_settings: Arc::new(
                self.mailgun_settings
                    .ok_or_else(|| anyhow!("mailgun_settings needs to be set"))?,
            ),
            verification_email_sender: self
                .verification_email_sender
                .ok_or_else(|| anyhow!("verification_email_sender needs to be set"))?,
        })
    }
}
