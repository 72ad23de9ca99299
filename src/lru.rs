//! Fixed-capacity cache with least-recently-used eviction.
//!
//! [`LruCache`] bounds a [`LinkedMap`] to a capacity fixed at construction.
//! Every [`save`](LruCache::save) and every hit [`get`](LruCache::get)
//! touches the entry, moving it to the newest end of the map's order; when a
//! save pushes the map past its capacity, the oldest entry is evicted —
//! exactly one per overflow, since a save grows the map by at most one
//! entry.
//!
//! A miss is ordinary control flow, not an error: `get` returns `Option` so
//! callers can fall back to recomputing the value.
//!
//! # Examples
//!
//! ```
//! use core::num::NonZeroUsize;
//!
//! use lash_map::LruCache;
//!
//! let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
//! cache.save("a", 1);
//! cache.save("b", 2);
//! cache.save("c", 3);
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"b"), Some(&2));
//! assert_eq!(cache.get(&"c"), Some(&3));
//! ```

use core::hash::BuildHasher;
use core::hash::Hash;
use core::num::NonZeroUsize;

use crate::RandomState;
use crate::linked_map::Iter;
use crate::linked_map::LinkedMap;

/// A fixed-capacity key-value cache with strict LRU eviction.
///
/// The capacity is a [`NonZeroUsize`], so an empty-capacity cache cannot be
/// constructed. It never changes for the cache's lifetime, and
/// `len() <= capacity()` is re-established immediately after every save.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Hash + Eq + Clone`
/// - `V`: Value type
/// - `S`: Hash builder type, defaults to the standard hasher
///
/// # Examples
///
/// ```
/// use core::num::NonZeroUsize;
///
/// use lash_map::LruCache;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(10).unwrap());
/// cache.save("key", "value");
///
/// assert_eq!(cache.get(&"key"), Some(&"value"));
/// assert_eq!(cache.get(&"missing"), None);
/// ```
pub struct LruCache<K, V, S = RandomState> {
    map: LinkedMap<K, V, S>,
    capacity: NonZeroUsize,
}

impl<K, V> LruCache<K, V> {
    /// Creates an empty cache bounded to `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::NonZeroUsize;
    ///
    /// use lash_map::LruCache;
    ///
    /// let cache: LruCache<i32, &str> = LruCache::new(NonZeroUsize::new(4).unwrap());
    /// assert!(cache.is_empty());
    /// assert_eq!(cache.capacity(), 4);
    /// ```
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self::with_hasher(capacity, RandomState::default())
    }
}

impl<K, V, S> LruCache<K, V, S> {
    /// Creates an empty cache bounded to `capacity` entries that uses the
    /// given hasher for its key index.
    pub fn with_hasher(capacity: NonZeroUsize, hasher: S) -> Self {
        LruCache {
            map: LinkedMap::with_hasher(hasher),
            capacity,
        }
    }

    /// Returns the capacity the cache was constructed with.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the number of entries currently cached.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns a double-ended iterator over the entries, from the least
    /// recently used to the most recently used.
    ///
    /// Iterating is read-only and does not touch any entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::NonZeroUsize;
    ///
    /// use lash_map::LruCache;
    ///
    /// let mut cache = LruCache::new(NonZeroUsize::new(3).unwrap());
    /// cache.save(1, "a");
    /// cache.save(2, "b");
    ///
    /// let entries: Vec<_> = cache.iter().collect();
    /// assert_eq!(entries, [(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.map.iter()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Saves a key-value pair, touching the key, and returns the evicted
    /// entry if the save overflowed the capacity.
    ///
    /// A fresh key is placed at the most-recently-used end; an existing key
    /// has its value replaced and is promoted there. If the cache then holds
    /// more entries than its capacity, the least recently used entry is
    /// evicted and returned — at most one, since a save adds at most one
    /// entry. Updating an existing key never evicts.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::NonZeroUsize;
    ///
    /// use lash_map::LruCache;
    ///
    /// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
    /// assert_eq!(cache.save(1, "a"), None);
    /// assert_eq!(cache.save(2, "b"), None);
    /// assert_eq!(cache.save(3, "c"), Some((1, "a")));
    /// ```
    pub fn save(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.map.insert(key, value);
        if self.map.len() > self.capacity.get() {
            let oldest = self.map.head_ptr()?;
            self.map.remove_ptr(oldest).ok()
        } else {
            None
        }
    }

    /// Looks up `key`, touching it on a hit, and returns a reference to its
    /// value.
    ///
    /// A hit promotes the entry to the most-recently-used end before the
    /// reference is returned. A miss returns `None` and changes nothing —
    /// missing is ordinary control flow, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::NonZeroUsize;
    ///
    /// use lash_map::LruCache;
    ///
    /// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
    /// cache.save(1, "a");
    /// cache.save(2, "b");
    ///
    /// // Touching key 1 leaves key 2 as the eviction candidate.
    /// assert_eq!(cache.get(&1), Some(&"a"));
    /// cache.save(3, "c");
    /// assert_eq!(cache.get(&2), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let ptr = self.map.find(key)?;
        self.map.promote(ptr).ok()?;
        self.map.ptr_get(ptr)
    }

    /// Looks up `key`, touching it on a hit, and returns a mutable
    /// reference to its value.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let ptr = self.map.find(key)?;
        self.map.promote(ptr).ok()?;
        self.map.ptr_get_mut(ptr)
    }

    /// Returns a reference to the value for `key` without touching it.
    ///
    /// The entry keeps its place in the eviction order.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::NonZeroUsize;
    ///
    /// use lash_map::LruCache;
    ///
    /// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
    /// cache.save(1, "a");
    /// cache.save(2, "b");
    ///
    /// // Peeking does not protect key 1 from eviction.
    /// assert_eq!(cache.peek(&1), Some(&"a"));
    /// cache.save(3, "c");
    /// assert_eq!(cache.peek(&1), None);
    /// ```
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Returns `true` if the cache holds an entry for `key`, without
    /// touching it.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

impl<K, V, S> Clone for LruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        LruCache {
            map: self.map.clone(),
            capacity: self.capacity,
        }
    }
}

impl<K, V, S> core::fmt::Debug for LruCache<K, V, S>
where
    K: core::fmt::Debug,
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, S> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for LruCache<K, V, S> {
    type Item = (K, V);
    type IntoIter = crate::linked_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}
