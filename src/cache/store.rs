//! Cache store contract and the in-memory implementation

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use crate::types::{AssessmentRecord, Source};

/// Natural key for one cached assessment.
pub type CacheKey = (Source, String, String);

/// Storage contract the cache gate sits on.
///
/// `put` is an upsert: at most one record exists per key, most recent write
/// wins. Implementations make each call atomic relative to readers.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<AssessmentRecord>;
    fn put(&self, record: AssessmentRecord);
}

/// In-memory LRU-backed store.
pub struct MemoryStore {
    entries: Mutex<LruCache<CacheKey, AssessmentRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &CacheKey) -> Option<AssessmentRecord> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn put(&self, record: AssessmentRecord) {
        let key = (record.source, record.owner.clone(), record.repo.clone());
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.put(key, record);
    }
}
