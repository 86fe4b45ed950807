use std::sync::Arc;

use chrono::Utc;

use brightpath_shared::errors::AppResult;
use brightpath_shared::storage::KeyValueStorage;

use crate::models::{Notification, NotificationCategory};

pub const DEFAULT_KEY_PREFIX: &str = "brightpath_notifications_";

/// Per-user notification event log over a key-value storage backend.
///
/// Each user's collection is serialized as one JSON array under
/// `prefix + user_id` and read-modify-written as a whole. The caller
/// supplies the user id on every call; there is no ambient identity here.
///
/// Failure contract: mutations return their failure as the `Err` value
/// after logging it, and the read paths the UI renders from
/// (`list_for_user`, `unread_count`) never fail at all; they degrade to
/// empty and zero.
#[derive(Clone)]
pub struct NotificationStore {
    storage: Arc<dyn KeyValueStorage>,
    key_prefix: String,
}

impl NotificationStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_prefix(storage, DEFAULT_KEY_PREFIX)
    }

    pub fn with_prefix(storage: Arc<dyn KeyValueStorage>, key_prefix: impl Into<String>) -> Self {
        Self {
            storage,
            key_prefix: key_prefix.into(),
        }
    }

    fn key_for(&self, user_id: &str) -> String {
        format!("{}{}", self.key_prefix, user_id)
    }

    /// Read a user's collection, treating a missing key, a failed read or
    /// a corrupt payload all as an empty collection.
    fn load(&self, user_id: &str) -> Vec<Notification> {
        let raw = match self.storage.get(&self.key_for(user_id)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, user_id = %user_id, "notification read failed, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, user_id = %user_id, "corrupt notification collection, treating as empty");
                Vec::new()
            }
        }
    }

    fn persist(&self, user_id: &str, items: &[Notification]) -> AppResult<()> {
        let raw = serde_json::to_string(items)?;
        self.storage.set(&self.key_for(user_id), &raw)?;
        Ok(())
    }

    /// Create a notification and prepend it to the user's collection.
    /// Returns the new id.
    pub fn create(
        &self,
        user_id: &str,
        category: NotificationCategory,
        title: &str,
        message: &str,
        data: Option<serde_json::Value>,
    ) -> AppResult<i64> {
        let now = Utc::now();
        // Time-based id; at most one create per millisecond per user.
        let id = now.timestamp_millis();

        let notification = Notification {
            id,
            user_id: user_id.to_string(),
            category,
            title: title.to_string(),
            message: message.to_string(),
            data,
            is_read: false,
            created_at: now,
        };

        let mut items = self.load(user_id);
        items.insert(0, notification);

        if let Err(e) = self.persist(user_id, &items) {
            tracing::error!(error = %e, user_id = %user_id, "failed to persist notification");
            return Err(e);
        }

        tracing::debug!(
            notification_id = id,
            user_id = %user_id,
            category = ?category,
            "notification created"
        );

        Ok(id)
    }

    /// The user's collection, newest first, regardless of stored order.
    pub fn list_for_user(&self, user_id: &str) -> Vec<Notification> {
        let mut items = self.load(user_id);
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        items
    }

    /// Flip a record to read. An absent id is a success no-op; records
    /// never transition back to unread.
    pub fn mark_as_read(&self, user_id: &str, notification_id: i64) -> AppResult<()> {
        let mut items = self.load(user_id);
        let Some(item) = items.iter_mut().find(|n| n.id == notification_id) else {
            return Ok(());
        };
        if item.is_read {
            return Ok(());
        }
        item.is_read = true;
        self.persist(user_id, &items)
    }

    /// Drop the user's entire collection. Idempotent.
    pub fn clear_all(&self, user_id: &str) -> AppResult<()> {
        self.storage.remove(&self.key_for(user_id))?;
        Ok(())
    }

    /// Unread records in the collection; 0 on any underlying failure.
    pub fn unread_count(&self, user_id: &str) -> usize {
        self.list_for_user(user_id)
            .iter()
            .filter(|n| !n.is_read)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use brightpath_shared::storage::MemoryStorage;

    use super::*;

    fn store() -> NotificationStore {
        NotificationStore::new(Arc::new(MemoryStorage::new()))
    }

    fn create_n(store: &NotificationStore, user: &str, n: usize) -> Vec<i64> {
        (0..n)
            .map(|i| {
                // Keep ids on distinct milliseconds.
                if i > 0 {
                    thread::sleep(Duration::from_millis(2));
                }
                store
                    .create(user, NotificationCategory::General, &format!("t{i}"), "m", None)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn creates_list_newest_first() {
        let store = store();
        let ids = create_n(&store, "u1", 3);

        let listed: Vec<i64> = store.list_for_user("u1").iter().map(|n| n.id).collect();
        let mut expected = ids.clone();
        expected.reverse();
        assert_eq!(listed, expected);
    }

    #[test]
    fn listing_sorts_regardless_of_stored_order() {
        let storage = Arc::new(MemoryStorage::new());
        let store = NotificationStore::new(storage.clone());

        // Persist a deliberately scrambled collection behind the store's back.
        let make = |id: i64, ts: &str| Notification {
            id,
            user_id: "u1".into(),
            category: NotificationCategory::General,
            title: "t".into(),
            message: "m".into(),
            data: None,
            is_read: false,
            created_at: ts.parse().unwrap(),
        };
        let scrambled = vec![
            make(2, "2026-08-20T10:00:02Z"),
            make(1, "2026-08-20T10:00:01Z"),
            make(3, "2026-08-20T10:00:03Z"),
        ];
        storage
            .set(
                &format!("{DEFAULT_KEY_PREFIX}u1"),
                &serde_json::to_string(&scrambled).unwrap(),
            )
            .unwrap();

        let listed: Vec<i64> = store.list_for_user("u1").iter().map(|n| n.id).collect();
        assert_eq!(listed, vec![3, 2, 1]);
    }

    #[test]
    fn list_is_scoped_per_user() {
        let store = store();
        create_n(&store, "u1", 2);
        create_n(&store, "u2", 1);

        assert_eq!(store.list_for_user("u1").len(), 2);
        assert_eq!(store.list_for_user("u2").len(), 1);
        assert!(store.list_for_user("u3").is_empty());
    }

    #[test]
    fn mark_as_read_flips_exactly_one_record() {
        let store = store();
        let ids = create_n(&store, "u1", 2);

        store.mark_as_read("u1", ids[0]).unwrap();

        let listed = store.list_for_user("u1");
        for n in &listed {
            assert_eq!(n.is_read, n.id == ids[0]);
        }
        assert_eq!(store.unread_count("u1"), 1);
    }

    #[test]
    fn mark_as_read_on_missing_id_is_a_success_noop() {
        let store = store();
        create_n(&store, "u1", 2);

        let before = store.list_for_user("u1");
        store.mark_as_read("u1", 42).unwrap();
        let after = store.list_for_user("u1");

        assert_eq!(before.len(), after.len());
        assert!(after.iter().all(|n| !n.is_read));
    }

    #[test]
    fn unread_count_tracks_create_and_mark_sequences() {
        let store = store();
        let ids = create_n(&store, "u1", 3);
        assert_eq!(store.unread_count("u1"), 3);

        store.mark_as_read("u1", ids[1]).unwrap();
        assert_eq!(store.unread_count("u1"), 2);

        // Marking the same record again changes nothing.
        store.mark_as_read("u1", ids[1]).unwrap();
        assert_eq!(store.unread_count("u1"), 2);
    }

    #[test]
    fn clear_all_empties_and_is_idempotent() {
        let store = store();
        create_n(&store, "u1", 2);

        store.clear_all("u1").unwrap();
        assert!(store.list_for_user("u1").is_empty());

        store.clear_all("u1").unwrap();
        assert!(store.list_for_user("u1").is_empty());
    }

    #[test]
    fn corrupt_collection_reads_as_empty() {
        let storage = Arc::new(MemoryStorage::new());
        let store = NotificationStore::new(storage.clone());

        storage
            .set(&format!("{DEFAULT_KEY_PREFIX}u1"), "not json at all")
            .unwrap();

        assert!(store.list_for_user("u1").is_empty());
        assert_eq!(store.unread_count("u1"), 0);
    }

    #[test]
    fn quota_failure_surfaces_as_err_while_reads_stay_soft() {
        // Quota too small for any collection write.
        let store = NotificationStore::new(Arc::new(MemoryStorage::with_quota(16)));

        let result = store.create("u1", NotificationCategory::General, "t", "m", None);
        assert!(result.is_err());

        // Read paths still answer with safe defaults.
        assert!(store.list_for_user("u1").is_empty());
        assert_eq!(store.unread_count("u1"), 0);
    }

    #[test]
    fn custom_prefix_keys_the_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let store = NotificationStore::with_prefix(storage.clone(), "acme_");

        store
            .create("u1", NotificationCategory::General, "t", "m", None)
            .unwrap();

        assert!(storage.get("acme_u1").unwrap().is_some());
        assert!(storage
            .get(&format!("{DEFAULT_KEY_PREFIX}u1"))
            .unwrap()
            .is_none());
    }
}
