//! Typed settings, persisted between runs.

mod backend;
mod key;
mod memory;
mod sqlite;

pub use backend::SettingsBackend;
pub use key::SettingKey;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("could not encode '{key}': {source}")]
    Serialization {
        key: SettingKey,
        source: bincode::Error,
    },
    #[error("stored value for '{key}' does not decode: {source}")]
    Deserialization {
        key: SettingKey,
        source: bincode::Error,
    },
}

/// Typed view over a [`SettingsBackend`]. Values are bincode-encoded.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// A provider that forgets everything on drop.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Read `key` as a `T`.
    pub async fn get<T: DeserializeOwned>(&self, key: SettingKey) -> Result<Option<T>, SettingsError> {
        match self.backend.read(key).await? {
            Some(bytes) => bincode::deserialize(&bytes)
                .map(Some)
                .map_err(|source| SettingsError::Deserialization { key, source }),
            None => Ok(None),
        }
    }

    /// Read `key`, or `default` when nothing is stored.
    pub async fn get_or<T: DeserializeOwned>(
        &self,
        key: SettingKey,
        default: T,
    ) -> Result<T, SettingsError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    pub async fn set<T: Serialize + Sync>(
        &self,
        key: SettingKey,
        value: &T,
    ) -> Result<(), SettingsError> {
        let bytes =
            bincode::serialize(value).map_err(|source| SettingsError::Serialization { key, source })?;
        self.backend.write(key, bytes).await
    }

    pub async fn delete(&self, key: SettingKey) -> Result<(), SettingsError> {
        self.backend.remove(key).await
    }

    /// Drop everything tied to the logged-in user. Connection settings stay.
    pub async fn clear_user_data(&self) -> Result<(), SettingsError> {
        for key in SettingKey::ALL.into_iter().filter(|k| k.is_user_scoped()) {
            self.backend.remove(key).await?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for SettingsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsProvider").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_typed_values_and_default() {
        let settings = SettingsProvider::in_memory();
        settings
            .set(SettingKey::ApiUrl, &"http://10.0.0.5:3000".to_string())
            .await
            .unwrap();
        assert_eq!(
            settings.get::<String>(SettingKey::ApiUrl).await.unwrap().as_deref(),
            Some("http://10.0.0.5:3000")
        );
        assert_eq!(
            settings.get_or(SettingKey::ApiTimeoutSecs, 30u64).await.unwrap(),
            30
        );
    }

    #[tokio::test]
    async fn test_wrong_type_names_the_key() {
        let settings = SettingsProvider::in_memory();
        settings.set(SettingKey::ApiTimeoutSecs, &1u8).await.unwrap();
        let err = settings
            .get::<String>(SettingKey::ApiTimeoutSecs)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Deserialization {
                key: SettingKey::ApiTimeoutSecs,
                ..
            }
        ));
        assert!(err.to_string().contains("api.timeout_secs"));
    }

    #[tokio::test]
    async fn test_clear_user_data_keeps_connection_settings() {
        let settings = SettingsProvider::in_memory();
        for key in SettingKey::ALL {
            settings.set(key, &1u8).await.unwrap();
        }

        settings.clear_user_data().await.unwrap();

        for key in SettingKey::ALL {
            let stored = settings.get::<u8>(key).await.unwrap();
            assert_eq!(stored.is_some(), !key.is_user_scoped(), "{}", key);
        }
    }
}
