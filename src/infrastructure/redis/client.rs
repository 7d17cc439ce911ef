use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use serde::{Serialize, de::DeserializeOwned};
use tracing::info;

#[derive(Clone)]
pub struct RedisService {
    client: Client,
}

impl RedisService {
    pub async fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(connection_string)?;

        // Fail at startup rather than on the first request
        let _conn = client.get_multiplexed_async_connection().await?;

        info!("✅ Connected to Redis");
        Ok(Self { client })
    }

    pub async fn get_conn(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    /// Stores `value` as JSON under `key` unless the key already exists.
    ///
    /// Returns `false` when an existing value was left in place.
    pub async fn set_json_nx<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<bool> {
        let payload = serde_json::to_string(value)?;
        let mut conn = self.get_conn().await?;
        let created: bool = conn.set_nx(key, payload).await?;
        Ok(created)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>> {
        let mut conn = self.get_conn().await?;
        let payload: Option<String> = conn.get(key).await?;
        match payload {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }
}
