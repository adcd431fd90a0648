//! In-memory SaveStore implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::repository::{RepositoryError, Result, SaveStore};

const UNLIMITED: usize = usize::MAX;

/// In-memory implementation of SaveStore.
///
/// An optional byte quota (keys plus values) emulates the storage limits of a
/// browser key/value area, so write failures can be exercised.
pub struct InMemorySaveStore {
    entries: RwLock<HashMap<String, String>>,
    quota: AtomicUsize,
}

impl InMemorySaveStore {
    /// Create a new empty store without a quota.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: AtomicUsize::new(UNLIMITED),
        }
    }

    /// Create an empty store that rejects writes beyond `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        let store = Self::new();
        store.set_quota(Some(limit));
        store
    }

    /// Change the quota; `None` removes it. Existing entries are kept.
    pub fn set_quota(&self, limit: Option<usize>) {
        self.quota
            .store(limit.unwrap_or(UNLIMITED), Ordering::SeqCst);
    }

    /// Bytes currently used by keys and values.
    pub fn usage(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entries.iter().map(|(k, v)| k.len() + v.len()).sum())
    }
}

impl Default for InMemorySaveStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveStore for InMemorySaveStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let limit = self.quota.load(Ordering::SeqCst);
        if limit != UNLIMITED {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(RepositoryError::QuotaExceeded { needed, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let store = InMemorySaveStore::new();
        assert_eq!(store.read("save").unwrap(), None);

        store.write("save", "{}").unwrap();
        assert_eq!(store.read("save").unwrap().as_deref(), Some("{}"));
        assert!(store.exists("save"));

        store.remove("save").unwrap();
        assert!(!store.exists("save"));
        store.remove("save").unwrap();
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let store = InMemorySaveStore::with_quota(10);
        store.write("k", "123456789").unwrap();

        let err = store.write("k", "1234567890").unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::QuotaExceeded {
                needed: 11,
                limit: 10
            }
        ));
        // Rejected write leaves the previous value in place
        assert_eq!(store.read("k").unwrap().as_deref(), Some("123456789"));
        assert_eq!(store.usage().unwrap(), 10);
    }

    #[test]
    fn test_quota_can_be_lifted() {
        let store = InMemorySaveStore::with_quota(0);
        assert!(store.write("k", "v").is_err());

        store.set_quota(None);
        store.write("k", "v").unwrap();
    }
}
