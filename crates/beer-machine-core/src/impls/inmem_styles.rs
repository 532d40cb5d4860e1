//! InMemoryStyleRepository - style store over a bounded cache.
//!
//! The backing cache cannot be enumerated, so the repository keeps its own
//! index of live ids next to it. `find_all` walks the index and resolves each
//! id against the cache.
//!
//! # Known divergence
//! The cache may evict a value for capacity while its id is still indexed.
//! `find_all` silently skips such ids and `find_by_id` reports them as not
//! found. This window is tolerated: closing it would require an unbounded or
//! enumerable store.
//!
//! # Locking
//! - create / update / delete: exclusive (index and cache change together)
//! - find_all: shared
//! - find_by_id: no lock, it only touches the cache, which is itself
//!   safe for concurrent use

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{BeerError, BeerStyle, StyleId};
use crate::impls::MokaCache;
use crate::ports::{BoundedCache, StyleRepository};

/// Default capacity of the style cache (unit-cost entries).
pub const DEFAULT_STYLE_CAPACITY: u64 = 1 << 20;

pub struct InMemoryStyleRepository<C = MokaCache<StyleId, BeerStyle>> {
    cache: C,
    /// Ids that were created and not deleted.
    keys: RwLock<HashSet<StyleId>>,
}

impl InMemoryStyleRepository {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STYLE_CAPACITY)
    }

    pub fn with_capacity(max_cost: u64) -> Self {
        Self::with_cache(MokaCache::with_max_cost(max_cost))
    }
}

impl Default for InMemoryStyleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BoundedCache<StyleId, BeerStyle>> InMemoryStyleRepository<C> {
    pub fn with_cache(cache: C) -> Self {
        Self {
            cache,
            keys: RwLock::new(HashSet::new()),
        }
    }
}

#[async_trait]
impl<C: BoundedCache<StyleId, BeerStyle>> StyleRepository for InMemoryStyleRepository<C> {
    async fn create(&self, style: BeerStyle) -> Result<(), BeerError> {
        let mut keys = self.keys.write().await;
        let id = style.id().clone();
        self.cache.insert(id.clone(), style);
        let replaced = !keys.insert(id.clone());
        debug!(style_id = %id, replaced, "beer style stored");
        Ok(())
    }

    async fn update(&self, style: BeerStyle) -> Result<(), BeerError> {
        let keys = self.keys.write().await;
        if !keys.contains(style.id()) {
            return Err(BeerError::StyleNotFound(style.id().clone()));
        }
        debug!(style_id = %style.id(), "beer style updated");
        self.cache.insert(style.id().clone(), style);
        Ok(())
    }

    async fn delete(&self, id: &StyleId) -> Result<(), BeerError> {
        let mut keys = self.keys.write().await;
        if !keys.remove(id) {
            return Err(BeerError::StyleNotFound(id.clone()));
        }
        self.cache.remove(id);
        debug!(style_id = %id, "beer style deleted");
        Ok(())
    }

    async fn find_by_id(&self, id: &StyleId) -> Result<BeerStyle, BeerError> {
        self.cache
            .get(id)
            .ok_or_else(|| BeerError::StyleNotFound(id.clone()))
    }

    async fn find_all(&self) -> Result<Vec<BeerStyle>, BeerError> {
        let keys = self.keys.read().await;
        let styles: Vec<BeerStyle> = keys.iter().filter_map(|id| self.cache.get(id)).collect();
        if styles.len() < keys.len() {
            debug!(
                indexed = keys.len(),
                resolved = styles.len(),
                "indexed styles missing from cache (evicted)"
            );
        }
        Ok(styles)
    }
}
