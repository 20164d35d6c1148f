//! Backend connection settings.

use std::time::Duration;

use spofity_lib::SpofityClient;
use spofity_lib::error::ApiError;

use crate::session::SessionStore;
use crate::settings::SettingKey;
use crate::settings::SettingsError;
use crate::settings::SettingsProvider;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Environment variable that overrides the stored backend URL.
pub const API_URL_ENV: &str = "SPOFITY_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Loads stored settings, then applies `SPOFITY_API_URL` if set.
    pub async fn load(settings: &SettingsProvider) -> Result<Self, SettingsError> {
        let env_url = std::env::var(API_URL_ENV).ok();
        Self::load_with_override(settings, env_url).await
    }

    /// Loads stored settings, then applies `api_url_override` if non-blank.
    pub async fn load_with_override(
        settings: &SettingsProvider,
        api_url_override: Option<String>,
    ) -> Result<Self, SettingsError> {
        let mut config = Self::default();

        if let Some(url) = settings.get::<String>(SettingKey::ApiUrl).await? {
            config.api_url = url;
        }
        if let Some(secs) = settings.get::<u64>(SettingKey::ApiTimeoutSecs).await? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(url) = api_url_override.filter(|u| !u.trim().is_empty()) {
            log::debug!("backend URL overridden by {}", API_URL_ENV);
            config.api_url = url;
        }

        Ok(config)
    }

    /// Persists this configuration.
    pub async fn save(&self, settings: &SettingsProvider) -> Result<(), SettingsError> {
        settings.set(SettingKey::ApiUrl, &self.api_url).await?;
        settings
            .set(SettingKey::ApiTimeoutSecs, &self.request_timeout.as_secs())
            .await
    }

    /// Builds a client that authenticates through `session`.
    pub fn build_client(&self, session: SessionStore) -> Result<SpofityClient, ApiError> {
        SpofityClient::builder()
            .url(&self.api_url)
            .token_provider(session)
            .timeout(self.request_timeout)
            .build()
    }
}
