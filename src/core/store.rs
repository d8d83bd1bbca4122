//! Bounded in-process analysis store
//!
//! Explicitly constructed and owned by the caller, never a process-wide
//! global. Capacity-bounded with least-recently-used eviction and an
//! optional TTL, so cached reports cannot grow without limit.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};

use crate::types::{BallEvent, MatchReport};

/// Default number of cached reports
pub const DEFAULT_STORE_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
struct Entry {
    report: MatchReport,
    stored_at: DateTime<Utc>,
}

/// Capacity-bounded report store keyed by match id
#[derive(Debug)]
pub struct AnalysisStore {
    capacity: usize,
    ttl: Option<Duration>,
    entries: HashMap<String, Entry>,
    /// Keys ordered least-recently-used first
    order: Vec<String>,
}

impl Default for AnalysisStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_CAPACITY)
    }
}

impl AnalysisStore {
    /// Store holding at most `capacity` reports
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            ttl: None,
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Store that additionally expires entries after `ttl`
    pub fn with_ttl(capacity: usize, ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            ..Self::new(capacity)
        }
    }

    /// Fetch a cached report, refreshing its recency
    pub fn get(&mut self, key: &str) -> Option<MatchReport> {
        if let Some(ttl) = self.ttl {
            let expired = self
                .entries
                .get(key)
                .map(|e| Utc::now() - e.stored_at > ttl)
                .unwrap_or(false);
            if expired {
                self.remove(key);
                return None;
            }
        }

        let report = self.entries.get(key).map(|e| e.report.clone())?;
        self.touch(key);
        Some(report)
    }

    /// Cache a report, evicting the least-recently-used entry when full
    pub fn insert(&mut self, key: impl Into<String>, report: MatchReport) {
        let key = key.into();
        if self.entries.contains_key(&key) {
            self.touch(&key);
        } else {
            if self.entries.len() >= self.capacity {
                if let Some(oldest) = self.order.first().cloned() {
                    self.remove(&oldest);
                }
            }
            self.order.push(key.clone());
        }
        self.entries.insert(
            key,
            Entry {
                report,
                stored_at: Utc::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deterministic cache key for matches submitted without an id
    pub fn fingerprint(events: &[BallEvent]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(serde_json::to_vec(events).unwrap_or_default());
        let digest = hasher.finalize();
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        format!("match_{:016x}", u64::from_be_bytes(prefix))
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            let key = self.order.remove(pos);
            self.order.push(key);
        }
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.retain(|k| k != key);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchAnalyzer;
    use crate::types::MatchContext;

    fn sample_report() -> MatchReport {
        let analyzer = MatchAnalyzer::with_default_oracle();
        let events = vec![BallEvent {
            runs: 1,
            ..Default::default()
        }];
        analyzer.analyze(&events, &MatchContext::default()).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = AnalysisStore::new(4);
        store.insert("m1", sample_report());
        assert!(store.get("m1").is_some());
        assert!(store.get("m2").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let mut store = AnalysisStore::new(2);
        store.insert("m1", sample_report());
        store.insert("m2", sample_report());

        // Touch m1 so m2 becomes the eviction candidate
        store.get("m1");
        store.insert("m3", sample_report());

        assert_eq!(store.len(), 2);
        assert!(store.get("m1").is_some());
        assert!(store.get("m2").is_none());
        assert!(store.get("m3").is_some());
    }

    #[test]
    fn test_reinsert_does_not_grow() {
        let mut store = AnalysisStore::new(2);
        store.insert("m1", sample_report());
        store.insert("m1", sample_report());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_zero_capacity_clamped_to_one() {
        let mut store = AnalysisStore::new(0);
        store.insert("m1", sample_report());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ttl_expires_entries() {
        let mut store = AnalysisStore::with_ttl(4, Duration::milliseconds(-1));
        store.insert("m1", sample_report());
        // Negative TTL: everything is already expired
        assert!(store.get("m1").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_fingerprint_deterministic_and_content_sensitive() {
        let a = vec![BallEvent {
            runs: 4,
            is_four: true,
            ..Default::default()
        }];
        let b = vec![BallEvent {
            runs: 6,
            is_six: true,
            ..Default::default()
        }];
        assert_eq!(AnalysisStore::fingerprint(&a), AnalysisStore::fingerprint(&a));
        assert_ne!(AnalysisStore::fingerprint(&a), AnalysisStore::fingerprint(&b));
        assert!(AnalysisStore::fingerprint(&a).starts_with("match_"));
    }
}
