//! Bounded resolution cache.
//!
//! Avoids repeated existence probes for hot lookups. Entries are keyed by
//! (entity, class, per-request locale) and tagged with the engine's
//! settings/locale epoch: any epoch change discards the whole cache before
//! the next access, since a distribution or locale change can alter the
//! candidate set. Within an epoch the cache is a plain LRU with a fixed
//! entry bound.

use std::collections::{HashMap, VecDeque};

use veneer_types::entity::{AssetClass, EntityId};

use crate::candidates::AssetRequest;
use crate::locale::LocaleTag;
use crate::resolver::Resolution;

/// Cache key for one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    entity: EntityId,
    class: AssetClass,
    locale: Option<LocaleTag>,
}

impl CacheKey {
    pub fn for_request(request: &AssetRequest) -> Self {
        Self {
            entity: request.entity.clone(),
            class: request.class,
            locale: request.locale.clone(),
        }
    }
}

/// LRU cache of resolution outcomes, invalidated wholesale on epoch change.
#[derive(Debug)]
pub struct ResolutionCache {
    entries: HashMap<CacheKey, Resolution>,
    /// Front = most recently used, back = least recently used.
    order: VecDeque<CacheKey>,
    max_entries: usize,
    epoch: u64,
}

impl ResolutionCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_entries,
            epoch: 0,
        }
    }

    /// Drop everything when the caller's epoch moved past ours.
    fn sync_epoch(&mut self, epoch: u64) {
        if epoch != self.epoch {
            self.clear();
            self.epoch = epoch;
        }
    }

    /// Look up a cached resolution, promoting it on hit.
    pub fn get(&mut self, key: &CacheKey, epoch: u64) -> Option<Resolution> {
        self.sync_epoch(epoch);
        if self.entries.contains_key(key) {
            self.order.retain(|k| k != key);
            self.order.push_front(key.clone());
        }
        self.entries.get(key).cloned()
    }

    /// Insert an outcome, evicting the least-recently-used entry when full.
    pub fn insert(&mut self, key: CacheKey, epoch: u64, resolution: Resolution) {
        self.sync_epoch(epoch);
        if self.max_entries == 0 {
            return;
        }
        if self.entries.remove(&key).is_some() {
            self.order.retain(|k| k != &key);
        }
        while self.entries.len() >= self.max_entries {
            match self.order.pop_back() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                },
                None => break,
            }
        }
        self.order.push_front(key.clone());
        self.entries.insert(key, resolution);
    }

    /// Drop all entries (external storage change).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
