//! Cache ports - narrow views over a bounded key/value cache.
//!
//! Both traits intentionally leave out iteration: the backing primitive is a
//! capacity-bounded cache that may evict on its own, and nothing may assume
//! it can be enumerated.

use std::time::Duration;

/// BoundedCache is a capacity-bounded key/value cache without enumeration.
///
/// A value inserted here may later disappear because of the cache's own
/// capacity policy.
pub trait BoundedCache<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;

    fn insert(&self, key: K, value: V);

    fn remove(&self, key: &K);
}

/// TtlCache stores values that expire a fixed time after insertion.
///
/// Insertion is atomic and visible to the next `get` on the same process.
pub trait TtlCache<K, V>: Send + Sync {
    /// Returns the value only if it has not expired.
    fn get(&self, key: &K) -> Option<V>;

    fn insert_with_ttl(&self, key: K, value: V, ttl: Duration);
}
