//! MokaCache - bounded in-memory cache backed by `moka::sync::Cache`.
//!
//! Every entry costs 1 against `max_cost`, and each entry may carry its own
//! time-to-live, fixed when it is inserted. One type serves both cache ports:
//! the style store uses it as a [`BoundedCache`] (entries never expire, but may
//! be evicted for capacity), the playlist gateway as a [`TtlCache`].

use std::hash::Hash;
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::sync::Cache;

use crate::ports::{BoundedCache, TtlCache};

/// Stored value plus its own lifetime (`None` = no expiry).
#[derive(Clone)]
struct Slot<V> {
    value: V,
    ttl: Option<Duration>,
}

/// Expiry policy reading the per-entry TTL; an overwrite restarts the clock.
struct SlotExpiry;

impl<K, V> Expiry<K, Slot<V>> for SlotExpiry {
    fn expire_after_create(&self, _key: &K, slot: &Slot<V>, _created_at: Instant) -> Option<Duration> {
        slot.ttl
    }

    fn expire_after_update(
        &self,
        _key: &K,
        slot: &Slot<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        slot.ttl
    }
}

/// Cheap to clone: clones share the same underlying storage.
#[derive(Clone)]
pub struct MokaCache<K, V> {
    inner: Cache<K, Slot<V>>,
}

impl<K, V> MokaCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache holding at most `max_cost` unit-cost entries.
    pub fn with_max_cost(max_cost: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_cost)
            .weigher(|_key: &K, _slot: &Slot<V>| -> u32 { 1 })
            .expire_after(SlotExpiry)
            .build();
        Self { inner }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).map(|slot| slot.value)
    }

    /// Insert a value that never expires (it can still be evicted).
    pub fn insert(&self, key: K, value: V) {
        self.inner.insert(key, Slot { value, ttl: None });
    }

    pub fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) {
        self.inner.insert(
            key,
            Slot {
                value,
                ttl: Some(ttl),
            },
        );
    }

    pub fn remove(&self, key: &K) {
        self.inner.invalidate(key);
    }
}

impl<K, V> BoundedCache<K, V> for MokaCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        MokaCache::get(self, key)
    }

    fn insert(&self, key: K, value: V) {
        MokaCache::insert(self, key, value)
    }

    fn remove(&self, key: &K) {
        MokaCache::remove(self, key)
    }
}

impl<K, V> TtlCache<K, V> for MokaCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        MokaCache::get(self, key)
    }

    fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) {
        MokaCache::insert_with_ttl(self, key, value, ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_visible_immediately() {
        let cache: MokaCache<String, u32> = MokaCache::with_max_cost(16);
        cache.insert("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(1));
    }

    #[test]
    fn remove_drops_the_value() {
        let cache: MokaCache<String, u32> = MokaCache::with_max_cost(16);
        cache.insert("a".to_string(), 1);
        cache.remove(&"a".to_string());
        assert_eq!(cache.get(&"a".to_string()), None);
    }

    #[test]
    fn clones_share_storage() {
        let cache: MokaCache<String, u32> = MokaCache::with_max_cost(16);
        let other = cache.clone();
        cache.insert("a".to_string(), 1);
        assert_eq!(other.get(&"a".to_string()), Some(1));
    }

    #[test]
    fn entries_expire_after_their_ttl() {
        let cache: MokaCache<String, u32> = MokaCache::with_max_cost(16);
        cache.insert_with_ttl("short".to_string(), 1, Duration::from_millis(50));
        cache.insert_with_ttl("long".to_string(), 2, Duration::from_secs(60));
        assert_eq!(cache.get(&"short".to_string()), Some(1));

        std::thread::sleep(Duration::from_millis(120));

        assert_eq!(cache.get(&"short".to_string()), None);
        assert_eq!(cache.get(&"long".to_string()), Some(2));
    }

    #[test]
    fn overwrite_restarts_the_ttl() {
        let cache: MokaCache<String, u32> = MokaCache::with_max_cost(16);
        cache.insert_with_ttl("k".to_string(), 1, Duration::from_millis(50));
        cache.insert_with_ttl("k".to_string(), 2, Duration::from_secs(60));

        std::thread::sleep(Duration::from_millis(120));

        assert_eq!(cache.get(&"k".to_string()), Some(2));
    }

    #[test]
    fn entries_without_ttl_do_not_expire() {
        let cache: MokaCache<String, u32> = MokaCache::with_max_cost(16);
        cache.insert("k".to_string(), 7);
        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(cache.get(&"k".to_string()), Some(7));
    }
}
