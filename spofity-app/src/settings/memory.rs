//! In-memory settings backend.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{SettingKey, SettingsBackend, SettingsError};

/// Settings that live only as long as the process. Used by tests and when
/// no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: DashMap<SettingKey, Vec<u8>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsBackend for MemoryBackend {
    async fn read(&self, key: SettingKey) -> Result<Option<Vec<u8>>, SettingsError> {
        Ok(self.values.get(&key).map(|v| v.clone()))
    }

    async fn write(&self, key: SettingKey, value: Vec<u8>) -> Result<(), SettingsError> {
        self.values.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: SettingKey) -> Result<(), SettingsError> {
        self.values.remove(&key);
        Ok(())
    }
}
