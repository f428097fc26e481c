// src/session/store.rs
use crate::domain::ListingRecord;
use crate::session::token::hash_token;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct SessionEntry {
    records: Vec<ListingRecord>,
    saved_at: Instant,
}

/// In-memory listing tables, one per session cookie.
///
/// Saving replaces the previous table of that session. Entries expire after
/// `ttl`; when `capacity` is reached the oldest session is dropped.
pub struct SessionStore {
    entries: Mutex<HashMap<[u8; 32], SessionEntry>>,
    capacity: usize,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Store `records` as the session's table, replacing any previous one.
    pub fn save(&self, token: &str, records: Vec<ListingRecord>) {
        self.save_at(token, records, Instant::now())
    }

    /// The table last fetched by this session.
    pub fn get(&self, token: &str) -> Option<Vec<ListingRecord>> {
        self.get_at(token, Instant::now())
    }

    /// Forget the session's table (a new fetch produced nothing).
    pub fn clear(&self, token: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(&hash_token(token));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn save_at(&self, token: &str, records: Vec<ListingRecord>, now: Instant) {
        let key = hash_token(token);
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let before = entries.len();
        entries.retain(|_, e| now.duration_since(e.saved_at) < self.ttl);
        if entries.len() < before {
            tracing::debug!(expired = before - entries.len(), "dropped expired sessions");
        }

        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.saved_at)
                .map(|(k, _)| *k);
            if let Some(k) = oldest {
                entries.remove(&k);
                tracing::debug!("evicted oldest session");
            }
        }

        entries.insert(
            key,
            SessionEntry {
                records,
                saved_at: now,
            },
        );
    }

    fn get_at(&self, token: &str, now: Instant) -> Option<Vec<ListingRecord>> {
        let key = hash_token(token);
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        let expired = now.duration_since(entries.get(&key)?.saved_at) >= self.ttl;
        if expired {
            entries.remove(&key);
            return None;
        }

        entries.get(&key).map(|e| e.records.clone())
    }
}
