use crate::error::{GraphError, GraphResult};
use crate::label::Label;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use tracing::trace;

pub const DEFAULT_CAPACITY: usize = 10;
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone)]
struct BucketEntry<K, V> {
    key: K,
    value: V,
}

/// Separate-chaining hash map with doubling growth.
///
/// Keys land in bucket `hash(key) % capacity` and collide into an ordered
/// chain. `put` never overwrites: an existing key is left untouched. Once
/// `len / capacity` reaches [`LOAD_FACTOR_THRESHOLD`] the bucket array doubles
/// and every entry is rehashed against the new capacity.
///
/// No internal locking; callers sharing a map across threads must serialize
/// mutation themselves.
#[derive(Debug, Clone)]
pub struct ChainingMap<K, V> {
    buckets: Vec<Vec<BucketEntry<K, V>>>,
    size: usize,
}

impl<K: Label, V> ChainingMap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// A capacity of zero is bumped to a single bucket.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: empty_buckets(capacity.max(1)),
            size: 0,
        }
    }

    pub fn put(&mut self, key: K, value: V) -> bool {
        if key.is_null() || self.contains_key(&key) {
            return false;
        }

        let bucket_index = self.bucket_index(&key);
        self.buckets[bucket_index].push(BucketEntry { key, value });
        self.size += 1;

        if self.load_factor() >= LOAD_FACTOR_THRESHOLD {
            self.grow();
        }

        true
    }

    pub fn get(&self, key: &K) -> GraphResult<&V> {
        ensure_key(key, "get")?;
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
            .ok_or_else(missing_key)
    }

    pub fn get_mut(&mut self, key: &K) -> GraphResult<&mut V> {
        ensure_key(key, "get_mut")?;
        let bucket_index = self.bucket_index(key);
        self.buckets[bucket_index]
            .iter_mut()
            .find(|entry| entry.key == *key)
            .map(|entry| &mut entry.value)
            .ok_or_else(missing_key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        if key.is_null() {
            return false;
        }
        self.buckets[self.bucket_index(key)]
            .iter()
            .any(|entry| entry.key == *key)
    }

    pub fn remove(&mut self, key: &K) -> GraphResult<Option<V>> {
        ensure_key(key, "remove")?;
        let bucket_index = self.bucket_index(key);
        let bucket = &mut self.buckets[bucket_index];

        let Some(position) = bucket.iter().position(|entry| entry.key == *key) else {
            return Ok(None);
        };

        self.size -= 1;
        Ok(Some(bucket.remove(position).value))
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Entries in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (&entry.key, &entry.value)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    fn bucket_index(&self, key: &K) -> usize {
        index_for(key, self.capacity())
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity() * 2;
        let mut larger_buckets = empty_buckets(new_capacity);

        for entry in self.buckets.drain(..).flatten() {
            larger_buckets[index_for(&entry.key, new_capacity)].push(entry);
        }

        trace!(entries = self.size, new_capacity, "rehashed chaining map");
        self.buckets = larger_buckets;
    }
}

impl<K: Label, V> Default for ChainingMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Vec<BucketEntry<K, V>>> {
    (0..capacity).map(|_| Vec::new()).collect()
}

fn index_for<K: Hash>(key: &K, capacity: usize) -> usize {
    let mut hasher = FxHasher::default();
    key.hash(&mut hasher);
    (hasher.finish() % capacity as u64) as usize
}

fn ensure_key<K: Label>(key: &K, operation: &'static str) -> GraphResult<()> {
    if key.is_null() {
        return Err(GraphError::InvalidArgument(format!(
            "null key passed to {operation}"
        )));
    }
    Ok(())
}

fn missing_key() -> GraphError {
    GraphError::NotFound("key is not present in the map".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_ten_buckets() {
        let map: ChainingMap<u32, u32> = ChainingMap::new();
        assert_eq!(map.capacity(), 10);
        assert!(map.is_empty());
    }

    #[test]
    fn zero_capacity_still_has_a_bucket() {
        let mut map = ChainingMap::with_capacity(0);
        assert_eq!(map.capacity(), 1);
        assert!(map.put(1u32, "one"));
        assert_eq!(map.get(&1), Ok(&"one"));
    }

    #[test]
    fn grows_when_load_factor_reaches_threshold() {
        let mut map = ChainingMap::with_capacity(10);
        for key in 0..8u32 {
            map.put(key, key);
        }
        assert_eq!(map.capacity(), 10);

        // 9 / 10 = 0.9 >= 0.85
        map.put(8, 8);
        assert_eq!(map.capacity(), 20);
        assert_eq!(map.len(), 9);
        assert!((0..9).all(|key| map.get(&key) == Ok(&key)));
    }

    #[test]
    fn tiny_capacity_doubles_on_early_inserts() {
        let mut map = ChainingMap::with_capacity(1);
        map.put(3u32, 'c');
        assert_eq!(map.capacity(), 2);
        map.put(5u32, 'e');
        assert_eq!(map.capacity(), 4);
        map.put(7u32, 'g');
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.len(), 3);
        assert_eq!(map.values().count(), 3);
        assert_eq!(map.get(&5), Ok(&'e'));
    }

    #[test]
    fn remove_shrinks_size_and_preserves_neighbours() {
        let mut map = ChainingMap::with_capacity(1);
        map.put("a", 1);
        map.put("b", 2);
        map.put("c", 3);

        assert_eq!(map.remove(&"b"), Ok(Some(2)));
        assert_eq!(map.remove(&"b"), Ok(None));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"a"), Ok(&1));
        assert_eq!(map.get(&"c"), Ok(&3));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = ChainingMap::new();
        map.put("genre", vec!["metal"]);
        map.get_mut(&"genre").unwrap().push("thrash");
        assert_eq!(map.get(&"genre").unwrap().len(), 2);
        assert_eq!(map.len(), 1);
    }
}
