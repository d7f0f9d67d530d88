//! Translation lookup metrics.
//!
//! Every [`TranslationStore`](super::TranslationStore) owns one
//! `LookupMetrics` and records how each `resolve` call was satisfied.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for translation lookups.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Keys found in the requested locale's table
    direct_hits: AtomicUsize,

    /// Keys found only in the fallback locale's table
    fallback_hits: AtomicUsize,

    /// Keys found in no table (the key itself was rendered)
    misses: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key resolved from the requested locale.
    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key resolved from the fallback locale.
    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a key that resolved to itself.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> LookupReport {
        let direct = self.direct_hits();
        let fallback = self.fallback_hits();
        let misses = self.misses();
        let total = direct + fallback + misses;

        let rate = |count: usize| {
            if total > 0 {
                (count as f64 / total as f64) * 100.0
            } else {
                0.0
            }
        };

        LookupReport {
            direct_hits: direct,
            fallback_hits: fallback,
            misses,
            total_lookups: total,
            fallback_rate: rate(fallback),
            miss_rate: rate(misses),
        }
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub direct_hits: usize,
    pub fallback_hits: usize,
    pub misses: usize,
    pub total_lookups: usize,

    /// Share of lookups served by the fallback locale, as a percentage (0-100)
    pub fallback_rate: f64,

    /// Share of lookups that rendered the literal key, as a percentage (0-100)
    pub miss_rate: f64,
}
