// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concurrent per-type schema cache.
//!
//! Lookups go through a sharded `DashMap`; no lock is held while a schema is
//! built. Two threads racing on a never-seen type may both build, and the
//! first insert wins: every caller gets the retained entry back, so all of
//! them observe the same `Arc<StructSchema>`.
//!
//! Hit and miss counters are relaxed atomics, so a lookup on the hot path
//! takes no lock beyond the `DashMap` shard read.
//!
//! Build failures are cached too. A malformed type keeps failing with the
//! same error without rebuilding.
//!
//! Entries live as long as the cache. Rust types are never unloaded, so
//! there is nothing to reclaim; [`SchemaCache::evict`] and
//! [`SchemaCache::clear`] exist for callers that want a rebuild.

use super::StructSchema;
use crate::Result;
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Snapshot of cache hit/miss statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupStats {
    pub hits: u64,
    pub misses: u64,
    /// Duration of the most recent build, in nanoseconds.
    pub last_build_ns: u64,
}

type Entry = Result<Arc<StructSchema>>;

#[derive(Default)]
pub struct SchemaCache {
    entries: DashMap<TypeId, Entry>,
    hits: AtomicU64,
    misses: AtomicU64,
    last_build_ns: AtomicU64,
}

impl SchemaCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached outcome for `type_id`, running `build` on a miss.
    pub fn get_or_build<F>(&self, type_id: TypeId, build: F) -> Result<Arc<StructSchema>>
    where
        F: FnOnce() -> Result<StructSchema>,
    {
        if let Some(hit) = self.get(type_id) {
            self.record_hit();
            if let Err(err) = &hit {
                log::trace!("[structpack] cached failure: {err}");
            }
            return hit;
        }

        let start = Instant::now();
        let built = build().map(Arc::new);
        if let Err(err) = &built {
            log::warn!("[structpack] schema build failed, caching failure: {err}");
        }

        // First insert wins; a concurrent loser adopts the winner's entry.
        let retained = self.entries.entry(type_id).or_insert(built).value().clone();
        self.record_miss(start);
        retained
    }

    /// Peek without building.
    pub fn get(&self, type_id: TypeId) -> Option<Entry> {
        self.entries.get(&type_id).map(|e| e.value().clone())
    }

    /// Drop the entry for `type_id`; the next lookup rebuilds it.
    pub fn evict(&self, type_id: TypeId) -> bool {
        self.entries.remove(&type_id).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> LookupStats {
        LookupStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            last_build_ns: self.last_build_ns.load(Ordering::Relaxed),
        }
    }

    fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_miss(&self, start: Instant) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        let elapsed = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.last_build_ns.store(elapsed, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for SchemaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaCache")
            .field("len", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}
