//! Classification statistics tracking.
//!
//! This module provides thread-safe counters for skipped markup and accepted
//! links during link classification.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{LinkKind, SkipReason};

/// Thread-safe classification statistics tracker.
///
/// Counters are atomic so a single instance can be shared (via `Arc`) by
/// several threads classifying different documents. All counters start at zero.
pub struct ClassificationStats {
    skipped: HashMap<SkipReason, AtomicUsize>,
    accepted: HashMap<LinkKind, AtomicUsize>,
}

impl Default for ClassificationStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut skipped = HashMap::new();
        for reason in SkipReason::iter() {
            skipped.insert(reason, AtomicUsize::new(0));
        }

        let mut accepted = HashMap::new();
        for kind in LinkKind::iter() {
            accepted.insert(kind, AtomicUsize::new(0));
        }

        ClassificationStats { skipped, accepted }
    }

    /// Increment a skip counter.
    pub fn increment_skipped(&self, reason: SkipReason) {
        if let Some(counter) = self.skipped.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment skip counter for {:?} which is not in the map. \
                 This indicates a bug in ClassificationStats initialization.",
                reason
            );
        }
    }

    /// Increment an accepted-link counter.
    pub fn increment_accepted(&self, kind: LinkKind) {
        if let Some(counter) = self.accepted.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment link counter for {:?} which is not in the map. \
                 This indicates a bug in ClassificationStats initialization.",
                kind
            );
        }
    }

    /// Get the count for a skip reason.
    pub fn get_skipped_count(&self, reason: SkipReason) -> usize {
        self.skipped
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for an accepted link kind.
    pub fn get_accepted_count(&self, kind: LinkKind) -> usize {
        self.accepted
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of skipped tags across all reasons.
    pub fn total_skipped(&self) -> usize {
        SkipReason::iter().map(|r| self.get_skipped_count(r)).sum()
    }

    /// Total number of links accepted into a result.
    pub fn total_accepted(&self) -> usize {
        LinkKind::iter().map(|k| self.get_accepted_count(k)).sum()
    }

    /// Non-zero counters as `(label, count)` pairs, links first.
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        LinkKind::iter()
            .map(|k| (k.as_str(), self.get_accepted_count(k)))
            .chain(SkipReason::iter().map(|r| (r.as_str(), self.get_skipped_count(r))))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
