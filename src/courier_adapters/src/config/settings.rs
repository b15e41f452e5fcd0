use std::time::Duration;

use courier_core::domain::payload::MAX_ATTACHMENT_SIZE;
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::constants::{CONFIG_FILE, env, postmark};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Sender address is invalid: {0:?}")]
    InvalidSender(String),
}

/// Process-wide settings, loaded once at startup and passed down explicitly
#[derive(Debug, Clone, Deserialize)]
pub struct CourierSettings {
    pub sender: String,
    #[serde(default = "default_max_attachment_size")]
    pub max_attachment_size: u64,
    pub postmark: PostmarkSettings,
    #[serde(default)]
    pub redis: Option<RedisSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmarkSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub server_token: Secret<String>,
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
}

fn default_max_attachment_size() -> u64 {
    MAX_ATTACHMENT_SIZE
}

fn default_base_url() -> String {
    postmark::BASE_URL.to_string()
}

fn default_timeout_millis() -> u64 {
    postmark::TIMEOUT_MILLIS
}

impl CourierSettings {
    /// Load from `courier.json` (if present), `.env` and `COURIER__*` variables.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        Self::from_sources(Some(CONFIG_FILE), environment())
    }

    /// Load from an optional file and an explicit environment source.
    ///
    /// The environment wins over the file.
    pub fn from_sources(
        file: Option<&str>,
        environment: ::config::Environment,
    ) -> Result<Self, SettingsError> {
        let mut builder = ::config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(::config::File::with_name(file).required(false));
        }

        let settings: Self = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.validate()
    }

    fn validate(self) -> Result<Self, SettingsError> {
        let sender = self.sender.trim();
        if sender.is_empty() || !sender.contains('@') {
            return Err(SettingsError::InvalidSender(self.sender));
        }
        Ok(self)
    }
}

impl PostmarkSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

/// Environment source for `COURIER__SECTION__KEY` variables
pub fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix(env::ENV_PREFIX).separator(env::ENV_SEPARATOR)
}
