//! Production server setup code

use crate::{
    models::verification_email::VerificationEmail,
    settings,
    setups::{ServerSetup, VerificationEmailSender},
};
use anyhow::Result;
use async_trait::async_trait;
use mailgun_rs::{EmailAddress, Mailgun, MailgunRegion, Message};

/// Production implementation of `ServerSetup`.
/// Actually calls out to Mailgun as configured in `settings.toml`.
#[derive(Clone, Debug, Default)]
pub struct ProdSetup;

impl ServerSetup for ProdSetup {
    type VerificationEmailSender = MailgunEmailSender;
}

/// Sends verification emails through Mailgun
#[derive(Debug, Clone)]
pub struct MailgunEmailSender {
    settings: settings::Mailgun,
}

impl MailgunEmailSender {
    /// Create a new MailgunEmailSender
    pub fn new(settings: settings::Mailgun) -> Self {
        Self { settings }
    }

    fn sender(&self) -> EmailAddress {
        EmailAddress::name_address(&self.settings.from_name, &self.settings.from_address)
    }

    fn api_key(&self) -> &str {
        self.settings.api_key.as_str()
    }

    fn domain(&self) -> &str {
        self.settings.domain.as_str()
    }

    fn message(&self, email: &VerificationEmail) -> Message {
        let delivery_address = EmailAddress::address(&email.to);

        Message {
            to: vec![delivery_address],
            subject: email.subject.clone(),
            text: email.text.clone(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl VerificationEmailSender for MailgunEmailSender {
    /// Sends the email to the user
    async fn send(&self, email: &VerificationEmail) -> Result<()> {
        let message = self.message(email);

        tracing::debug!(
            to = %email.to,
            subject = %message.subject,
            "Handing verification email to Mailgun"
        );

        let client = Mailgun {
            message,
            api_key: self.api_key().to_string(),
            domain: self.domain().to_string(),
        };

        client.async_send(MailgunRegion::US, &self.sender()).await?;

        Ok(())
    }
}
