use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{KeyValueStorage, StorageError};

/// In-process storage backend.
///
/// An optional byte quota mirrors the budget a browser gives local
/// storage; writes that would exceed it fail with `QuotaExceeded` while
/// existing entries stay readable.
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: None,
        }
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn used_bytes(entries: &HashMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(quota) = self.quota_bytes {
            let replaced = entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let after = Self::used_bytes(&entries) - replaced + key.len() + value.len();
            if after > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v".to_string()));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn remove_of_missing_key_succeeds() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("never-set").is_ok());
    }

    #[test]
    fn quota_rejects_oversized_write() {
        let storage = MemoryStorage::with_quota(8);
        storage.set("a", "1234").unwrap();

        let err = storage.set("b", "12345678").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded));

        // Existing data stays readable after a rejected write.
        assert_eq!(storage.get("a").unwrap(), Some("1234".to_string()));
    }

    #[test]
    fn quota_accounts_for_replaced_entry() {
        let storage = MemoryStorage::with_quota(10);
        storage.set("key", "1234567").unwrap();
        // Replacing the value frees its old bytes first.
        storage.set("key", "7654321").unwrap();
    }
}
