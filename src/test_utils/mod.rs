//! Test utilities.

pub(crate) mod route_builder;
pub(crate) mod test_context;

use crate::settings;

/// Mailgun settings for tests, mirroring `config/settings.toml`.
pub(crate) fn test_mailgun_settings() -> settings::Mailgun {
    settings::Mailgun {
        api_key: "test-api-key".to_string(),
        domain: "mg.algorithmat.test".to_string(),
        subject: "Verify your AlgorithMat account".to_string(),
        from_address: "noreply@algorithmat.test".to_string(),
        from_name: "AlgorithMat".to_string(),
        verification_url: "https://visualalgo.web.app/email-verified".to_string(),
    }
}
