//! Server setup for local development & easier integration testing

use super::{ServerSetup, VerificationEmailSender};
use crate::models::verification_email::VerificationEmail;
use anyhow::Result;
use async_trait::async_trait;

/// Implementation of `ServerSetup` for local environments.
#[derive(Debug, Clone)]
pub struct LocalSetup;

impl ServerSetup for LocalSetup {
    type VerificationEmailSender = LogEmailSender;
}

/// A `VerificationEmailSender` that doesn't actually send emails,
/// but instead logs them via tracing.
#[derive(Debug, Clone, Default)]
pub struct LogEmailSender;

#[async_trait]
impl VerificationEmailSender for LogEmailSender {
    async fn send(&self, email: &VerificationEmail) -> Result<()> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            text = %email.text,
            "verification email (not actually sent)"
        );
        Ok(())
    }
}
