#![forbid(unsafe_code)]

//! Single-entry memoization used by the containers.
//!
//! Each container remembers the key of its last resolved pass. A repeated
//! call with the same key reuses the stored result; any other key (a new
//! available size or an advanced content generation) recomputes.

/// Key for one container pass: the available extent along each axis plus
/// the combined content generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutCacheKey {
    pub available_width: u16,
    pub available_height: u16,
    pub generation: u64,
}

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutCacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl LayoutCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Remembers the last key and whether it is still valid.
#[derive(Debug, Clone, Default)]
pub(crate) struct CacheSlot {
    key: Option<LayoutCacheKey>,
    stats: LayoutCacheStats,
}

impl CacheSlot {
    /// Returns `true` (and counts a hit) when `key` matches the stored key.
    /// Otherwise counts a miss and stores `key`; the caller recomputes.
    pub(crate) fn check(&mut self, key: LayoutCacheKey) -> bool {
        if self.key == Some(key) {
            self.stats.hits += 1;
            true
        } else {
            self.stats.misses += 1;
            self.key = Some(key);
            false
        }
    }

    /// Forget the stored key.
    pub(crate) fn invalidate(&mut self) {
        self.key = None;
    }

    pub(crate) fn stats(&self) -> LayoutCacheStats {
        self.stats
    }
}
