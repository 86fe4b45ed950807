mod file;
mod memory;
mod redis;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use self::redis::RedisStorage;

/// Failures a storage backend can surface.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("redis error: {0}")]
    Redis(#[from] ::redis::RedisError),
}

/// Synchronous per-key string storage, the persistence leaf every other
/// component sits on.
///
/// Keys are a fixed prefix concatenated with a user identifier; values are
/// whatever the caller serialized. Backends make no durability promise
/// beyond what the underlying medium gives them, and concurrent sessions
/// writing the same key are last-writer-wins.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
