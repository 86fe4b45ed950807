use redis::Commands;

use super::{KeyValueStorage, StorageError};

/// Redis-backed storage for deployments that want the per-user
/// collections shared beyond one process.
pub struct RedisStorage {
    client: redis::Client,
}

impl RedisStorage {
    pub fn connect(url: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(url)?;
        tracing::info!(url = %url, "connected to Redis");
        Ok(Self { client })
    }

    fn conn(&self) -> Result<redis::Connection, StorageError> {
        Ok(self.client.get_connection()?)
    }
}

impl KeyValueStorage for RedisStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.conn()?;
        Ok(conn.get(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.conn()?;
        conn.set::<_, _, ()>(key, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.conn()?;
        conn.del::<_, ()>(key)?;
        Ok(())
    }
}
