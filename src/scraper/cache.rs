// cache.rs
use crate::domain::ListingRecord;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct CacheEntry {
    record: ListingRecord,
    inserted_at: Instant,
}

/// Successful extractions keyed by the literal URL string.
///
/// Bounded by `capacity` (oldest entry evicted first) and `ttl`.
/// A capacity of zero disables caching.
pub struct ListingCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    capacity: usize,
    ttl: Duration,
}

impl ListingCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
            ttl,
        }
    }

    pub fn disabled() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn get(&self, url: &str) -> Option<ListingRecord> {
        self.get_at(url, Instant::now())
    }

    pub fn insert(&self, url: &str, record: ListingRecord) {
        self.insert_at(url, record, Instant::now())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn get_at(&self, url: &str, now: Instant) -> Option<ListingRecord> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let fresh = match entries.get(url) {
            Some(entry) => now.duration_since(entry.inserted_at) < self.ttl,
            None => return None,
        };

        if !fresh {
            entries.remove(url);
            return None;
        }

        entries.get(url).map(|e| e.record.clone())
    }

    fn insert_at(&self, url: &str, record: ListingRecord, now: Instant) {
        if self.capacity == 0 {
            return;
        }

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|_, e| now.duration_since(e.inserted_at) < self.ttl);

        if !entries.contains_key(url) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.inserted_at)
                .map(|(k, _)| k.clone());
            if let Some(key) = oldest {
                entries.remove(&key);
            }
        }

        entries.insert(
            url.to_string(),
            CacheEntry {
                record,
                inserted_at: now,
            },
        );
    }
}
