//! Settings / Configuration.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Names of environments for algorithmat-mailer.
/// Overrides serialization to force lower case in settings and
/// environment variables
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    /// Local environment (local testing).
    Local,
    /// Official Develop environment.
    Dev,
    /// Official Staging environment.
    Staging,
    /// Official Production environment.
    Prod,
}

/// Implement display to force environment to lower case
impl std::fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Server settings.
#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    /// Server [AppEnvironment].
    pub environment: AppEnvironment,
    /// Server port.
    pub port: u16,
    /// Server timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Mailgun settings.
#[derive(Clone, Deserialize)]
pub struct Mailgun {
    /// Mailgun API key.
    pub api_key: String,
    /// Mailgun domain.
    pub domain: String,
    /// Mailgun Subject
    pub subject: String,
    /// Mailgun From Address
    pub from_address: String,
    /// Mailgun From Name
    pub from_name: String,
    /// Static link included in the verification email body
    pub verification_url: String,
}

/// Don't leak the API key through debug logging of settings.
impl std::fmt::Debug for Mailgun {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("Mailgun")
            .field("api_key", &"<redacted>")
            .field("domain", &self.domain)
            .field("subject", &self.subject)
            .field("from_address", &self.from_address)
            .field("from_name", &self.from_name)
            .field("verification_url", &self.verification_url)
            .finish()
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Application settings.
pub struct Settings {
    /// Server settings
    pub server: Server,
    /// Mailgun settings
    pub mailgun: Mailgun,
    /// The path where the settings file resides.
    /// This can't actually be configured in the settings file itself, for obvious reasons.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Load settings.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = config_path
            .unwrap_or(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/settings.toml"));
        // inject environment variables naming them properly on the settings
        // e.g. [mailgun] api_key="foo"
        // would be injected with environment variable ALGORITHMAT_MAILER_MAILGUN_API_KEY="foo"
        let s = Config::builder()
            .add_source(File::with_name(&path.as_path().display().to_string()))
            .add_source(
                Environment::with_prefix("ALGORITHMAT_MAILER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let mut settings: Self = s.try_deserialize()?;
        settings.path = Some(path);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testresult::TestResult;

    #[test]
    fn test_load_default_settings() -> TestResult {
        let settings = Settings::load(None)?;

        assert_eq!(settings.server.environment, AppEnvironment::Local);
        assert_eq!(settings.mailgun.subject, "Verify your AlgorithMat account");
        assert!(settings.mailgun.verification_url.starts_with("https://"));

        Ok(())
    }

    #[test]
    fn test_mailgun_debug_redacts_api_key() -> TestResult {
        let settings = Settings::load(None)?;

        let debugged = format!("{:?}", settings.mailgun);

        assert!(debugged.contains("<redacted>"));
        assert!(!debugged.contains(&settings.mailgun.api_key));

        Ok(())
    }
}
