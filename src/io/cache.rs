//! Memoization of extraction results
//!
//! Entries are keyed by the normalized content of the input. Only extractions
//! run without options are stored, so a cached document always reflects the
//! default configuration.

use crate::core::Document;
use log::trace;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Statistics about cache usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Current number of entries
    pub entries: usize,
}

impl CacheStats {
    /// Hit ratio between 0.0 and 1.0
    pub fn hit_ratio(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Document>,
    hits: u64,
    misses: u64,
}

/// Thread-safe map from content to its extracted document
#[derive(Debug, Default)]
pub struct Cache {
    inner: Mutex<Inner>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a document, counting the hit or miss
    pub fn get(&self, content: &str) -> Option<Document> {
        let mut inner = self.inner.lock();
        match inner.entries.get(content).cloned() {
            Some(document) => {
                inner.hits += 1;
                trace!("cache hit ({} bytes)", content.len());
                Some(document)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    pub fn insert(&self, content: impl Into<String>, document: Document) {
        self.inner.lock().entries.insert(content.into(), document);
    }

    /// Drop every entry; statistics are kept
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the current entries
    pub fn entries(&self) -> Vec<(String, Document)> {
        self.inner
            .lock()
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_clear() {
        let cache = Cache::new();
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());

        let doc = Document::from_input("a").unwrap();
        cache.insert("a", doc.clone());
        assert_eq!(cache.get("a"), Some(doc));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.entries().len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.entries().is_empty());
    }

    #[test]
    fn test_stats() {
        let cache = Cache::new();
        cache.insert("x", Document::default());
        cache.get("x");
        cache.get("x");
        cache.get("y");

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert!((stats.hit_ratio() - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(CacheStats::default().hit_ratio(), 0.0);
    }
}
