use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::Mutex as TokioMutex;
use tokio_sqlite::Value;

use crate::models::Identity;
use crate::storage::Storage;

/// Key/value configuration backed by the `"config"` table.
/// Keys used:
/// - `"identity"`: JSON-encoded `Identity` of the signed-in user
pub struct ConfigManager {
    storage: Arc<TokioMutex<Storage>>,
}

impl ConfigManager {
    pub const IDENTITY_KEY: &'static str = "identity";

    /// Create a new ConfigManager. Does not perform I/O.
    pub fn new(storage: Arc<TokioMutex<Storage>>) -> Self {
        Self { storage }
    }

    /// Load the stored identity.
    ///
    /// A record that no longer parses is treated as absent so the user is
    /// sent through sign-in again.
    pub async fn load_identity(&self) -> Result<Option<Identity>, anyhow::Error> {
        self.ensure_tables().await?;
        let Some(raw) = self.get_config(Self::IDENTITY_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Ok(Some(identity)),
            Err(err) => {
                tracing::warn!(?err, "Ignoring unreadable stored identity");
                Ok(None)
            }
        }
    }

    /// Persist the identity, replacing any previous one.
    pub async fn store_identity(&self, identity: &Identity) -> Result<(), anyhow::Error> {
        self.ensure_tables().await?;
        let raw = serde_json::to_string(identity)
            .map_err(|e| anyhow!("Failed to serialize identity: {}", e))?;
        self.upsert_config(Self::IDENTITY_KEY, raw).await
    }

    /// Forget the stored identity (logout).
    pub async fn clear_identity(&self) -> Result<(), anyhow::Error> {
        self.ensure_tables().await?;
        self.delete_config(Self::IDENTITY_KEY).await
    }

    async fn ensure_tables(&self) -> Result<(), anyhow::Error> {
        let mut storage = self.storage.lock().await;
        let conn = storage.connection().await;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS \"config\" (
                \"id\" INTEGER PRIMARY KEY AUTOINCREMENT,
                \"key\" TEXT NOT NULL UNIQUE,
                \"value\" TEXT NOT NULL
            )",
            Vec::<Value>::new(),
        )
        .await
        .map_err(|e| anyhow!("Failed to create config table: {}", e))?;
        Ok(())
    }

    async fn get_config(&self, key: &str) -> Result<Option<String>, anyhow::Error> {
        let mut storage = self.storage.lock().await;
        let conn = storage.connection().await;
        let row = conn
            .query_row(
                "SELECT \"value\" FROM \"config\" WHERE \"key\" = ?1 LIMIT 1",
                vec![Value::Text(key.to_string())],
            )
            .await
            .map_err(|e| anyhow!("Failed to query config '{}': {}", key, e))?;
        match row {
            Some(row) => {
                let mut values = row.into_values();
                match values.pop() {
                    Some(Value::Text(s)) => Ok(Some(s)),
                    Some(other) => Err(anyhow!("Unexpected value type: {:?}", other)),
                    None => Ok(None),
                }
            }
            None => Ok(None),
        }
    }

    async fn upsert_config(&self, key: &str, value: String) -> Result<(), anyhow::Error> {
        let mut storage = self.storage.lock().await;
        let conn = storage.connection().await;
        let update_status = conn
            .execute(
                "UPDATE \"config\" SET \"value\" = ?1 WHERE \"key\" = ?2",
                vec![Value::Text(value.clone()), Value::Text(key.to_string())],
            )
            .await
            .map_err(|e| anyhow!("Failed to update config '{}': {}", key, e))?;
        if update_status.rows_affected() == 0 {
            conn.execute(
                "INSERT INTO \"config\" (\"key\", \"value\") VALUES (?1, ?2)",
                vec![Value::Text(key.to_string()), Value::Text(value)],
            )
            .await
            .map_err(|e| anyhow!("Failed to insert config '{}': {}", key, e))?;
        }
        Ok(())
    }

    async fn delete_config(&self, key: &str) -> Result<(), anyhow::Error> {
        let mut storage = self.storage.lock().await;
        let conn = storage.connection().await;
        conn.execute(
            "DELETE FROM \"config\" WHERE \"key\" = ?1",
            vec![Value::Text(key.to_string())],
        )
        .await
        .map_err(|e| anyhow!("Failed to delete config '{}': {}", key, e))?;
        Ok(())
    }
}
