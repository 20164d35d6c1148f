//! Storage behind the settings provider.

use async_trait::async_trait;

use super::SettingKey;
use super::SettingsError;

/// Raw byte storage for settings.
///
/// Values arrive already encoded; the provider owns the encoding.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Stored bytes for `key`, if any.
    async fn read(&self, key: SettingKey) -> Result<Option<Vec<u8>>, SettingsError>;

    /// Insert or replace the bytes for `key`.
    async fn write(&self, key: SettingKey, value: Vec<u8>) -> Result<(), SettingsError>;

    /// Drop `key`. Removing a missing key is not an error.
    async fn remove(&self, key: SettingKey) -> Result<(), SettingsError>;
}
