//! SQLite settings backend.
//!
//! The whole table is read into a DashMap when the database is opened, so
//! reads never touch SQLite. Writes go to both.

use std::path::Path;

use async_sqlite::Client;
use async_trait::async_trait;
use dashmap::DashMap;

use super::{SettingKey, SettingsBackend, SettingsError};

/// Settings stored in `settings.db` under the app's data directory.
pub struct SqliteBackend {
    client: Client,
    cache: DashMap<SettingKey, Vec<u8>>,
}

impl SqliteBackend {
    /// Open (or create) the settings database at `path` and load it.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let client = async_sqlite::ClientBuilder::new()
            .path(path)
            .open()
            .await?;

        client
            .conn(|conn| {
                conn.execute(
                    "CREATE TABLE IF NOT EXISTS settings (
                        key TEXT PRIMARY KEY,
                        value BLOB NOT NULL
                    )",
                    [],
                )
            })
            .await?;

        let rows = client
            .conn(|conn| {
                let mut stmt = conn.prepare("SELECT key, value FROM settings")?;
                let rows = stmt.query_map([], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, Vec<u8>>(1)?))
                })?;
                rows.collect::<Result<Vec<_>, _>>()
            })
            .await?;

        let cache = DashMap::new();
        for (name, value) in rows {
            match SettingKey::parse(&name) {
                Some(key) => {
                    cache.insert(key, value);
                }
                None => log::debug!("ignoring unknown setting '{}'", name),
            }
        }
        log::debug!("loaded {} setting(s)", cache.len());

        Ok(Self { client, cache })
    }
}

#[async_trait]
impl SettingsBackend for SqliteBackend {
    async fn read(&self, key: SettingKey) -> Result<Option<Vec<u8>>, SettingsError> {
        Ok(self.cache.get(&key).map(|value| value.clone()))
    }

    async fn write(&self, key: SettingKey, value: Vec<u8>) -> Result<(), SettingsError> {
        let stored = value.clone();
        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO settings (key, value) VALUES (?, ?)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    rusqlite::params![key.as_str(), &stored],
                )
            })
            .await?;

        self.cache.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: SettingKey) -> Result<(), SettingsError> {
        self.client
            .conn(move |conn| conn.execute("DELETE FROM settings WHERE key = ?", [key.as_str()]))
            .await?;

        self.cache.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.db");

        let backend = SqliteBackend::new(&path).await.unwrap();
        backend.write(SettingKey::ApiUrl, vec![1, 2, 3]).await.unwrap();
        backend.write(SettingKey::SessionToken, vec![5]).await.unwrap();
        backend.remove(SettingKey::SessionToken).await.unwrap();
        drop(backend);

        let backend = SqliteBackend::new(&path).await.unwrap();
        assert_eq!(
            backend.read(SettingKey::ApiUrl).await.unwrap(),
            Some(vec![1, 2, 3])
        );
        assert_eq!(backend.read(SettingKey::SessionToken).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.db");

        let backend = SqliteBackend::new(&path).await.unwrap();
        backend
            .client
            .conn(|conn| {
                conn.execute(
                    "INSERT INTO settings (key, value) VALUES ('ui.theme', x'01')",
                    [],
                )
            })
            .await
            .unwrap();
        backend.write(SettingKey::AccountPlan, vec![1]).await.unwrap();
        drop(backend);

        let backend = SqliteBackend::new(&path).await.unwrap();
        assert_eq!(backend.cache.len(), 1);
        assert_eq!(
            backend.read(SettingKey::AccountPlan).await.unwrap(),
            Some(vec![1])
        );
    }
}
