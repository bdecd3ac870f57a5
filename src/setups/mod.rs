//! This abstracts the server's side-effects into "setups".
//!
//! This module defines the traits, submodules define test, local &
//! production collections of implementations.
use crate::models::verification_email::VerificationEmail;
use anyhow::Result;
use async_trait::async_trait;

pub mod local;
pub mod prod;

/// This trait groups type parameters to the server's `AppState` struct.
///
/// It captures the setup of the server, distinguishing between e.g.
/// unit testing & production setups.
pub trait ServerSetup: Clone + Send + Sync {
    /// Which implementation to use to send verification emails
    type VerificationEmailSender: VerificationEmailSender;
}

/// The service that delivers verification emails
#[async_trait]
pub trait VerificationEmailSender: Clone + Send + Sync {
    /// Hand the email to the mail transport, resolving once the transport
    /// accepted or rejected it
    async fn send(&self, email: &VerificationEmail) -> Result<()>;
}
