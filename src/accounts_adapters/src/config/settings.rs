use std::time::Duration;

use ::config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{env, files, prod};
use crate::anti_spam::FailurePolicy;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountsSettings {
    #[serde(default)]
    pub anti_spam: AntiSpamSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AntiSpamSettings {
    pub base_url: String,
    pub api_key: Secret<String>,
    pub timeout_in_millis: u64,
    pub failure_policy: FailurePolicy,
}

impl AntiSpamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

impl Default for AntiSpamSettings {
    fn default() -> Self {
        Self {
            base_url: prod::anti_spam::BASE_URL.to_owned(),
            api_key: Secret::new(String::new()),
            timeout_in_millis: prod::anti_spam::TIMEOUT.as_millis() as u64,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl AccountsSettings {
    /// Loads `config/default`, then `config/local`, then `ACCOUNTS__*`
    /// environment variables (a `.env` file is honoured). Later sources win.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = file_sources().add_source(environment()).build()?;
        let settings: Self = settings.try_deserialize()?;

        tracing::debug!(
            base_url = %settings.anti_spam.base_url,
            failure_policy = ?settings.anti_spam.failure_policy,
            "Loaded accounts settings"
        );
        Ok(settings)
    }
}

fn file_sources() -> ConfigBuilder<DefaultState> {
    Config::builder()
        .add_source(File::with_name(files::DEFAULT_CONFIG).required(false))
        .add_source(File::with_name(files::LOCAL_CONFIG).required(false))
}

fn environment() -> Environment {
    Environment::with_prefix(env::ENV_PREFIX).separator(env::ENV_SEPARATOR)
}
