//! Bounded memoization for expensive repeated calculations.
//!
//! [`MemoCache`] is a plain key-value store with FIFO eviction: once full,
//! the earliest-inserted key is evicted on the next insert. Reads never
//! reorder entries, so this is deliberately not an LRU. [`Memoized`] wraps
//! a pure function with a mutex-guarded cache keyed on the serialized
//! arguments, so a single instance can be shared across threads.
//!
//! Only resolved values are cached; wrapping anything that computes
//! concurrently risks duplicate in-flight computation.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::Mutex;

use serde::Serialize;

/// Default bound for caches that do not pick one.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// A bounded key-value cache with insertion-order (FIFO) eviction.
#[derive(Debug)]
pub struct MemoCache<K, V> {
    max_size: usize,
    map: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size: max_size.max(1),
            map: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(
        &self,
        key: &K,
    ) -> Option<&V> {
        self.map.get(key)
    }

    pub fn has(
        &self,
        key: &K,
    ) -> bool {
        self.map.contains_key(key)
    }

    /// Inserts or updates an entry. A brand-new key first evicts the
    /// earliest-inserted entry when the cache is full; updating an
    /// existing key leaves the eviction order untouched.
    pub fn set(
        &mut self,
        key: K,
        value: V,
    ) {
        if !self.map.contains_key(&key) {
            if self.map.len() >= self.max_size
                && let Some(oldest) = self.order.pop_front()
            {
                self.map.remove(&oldest);
            }
            self.order.push_back(key.clone());
        }

        self.map.insert(key, value);
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}

type KeyFn<A> = Box<dyn Fn(&A) -> String + Send + Sync>;

/// A function wrapped with a bounded result cache.
///
/// The cache key is the `serde_json` serialization of the arguments unless
/// a custom key function is supplied; arguments that fail to serialize
/// bypass the cache and are computed directly.
pub struct Memoized<A, R, F>
where
    F: Fn(&A) -> R,
{
    func: F,
    key_fn: Option<KeyFn<A>>,
    cache: Mutex<MemoCache<String, R>>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Serialize,
    R: Clone,
    F: Fn(&A) -> R,
{
    pub fn new(func: F) -> Self {
        Self::with_max_size(func, DEFAULT_MAX_SIZE)
    }

    pub fn with_max_size(
        func: F,
        max_size: usize,
    ) -> Self {
        Self {
            func,
            key_fn: None,
            cache: Mutex::new(MemoCache::new(max_size)),
        }
    }

    /// Replaces the serialized-arguments key with a custom key function.
    pub fn with_key_fn(
        mut self,
        key_fn: impl Fn(&A) -> String + Send + Sync + 'static,
    ) -> Self {
        self.key_fn = Some(Box::new(key_fn));
        self
    }

    /// Returns the cached result for `args`, computing and storing it on a
    /// miss.
    pub fn call(
        &self,
        args: &A,
    ) -> R {
        let key = match &self.key_fn {
            Some(key_fn) => Some(key_fn(args)),
            None => serde_json::to_string(args).ok(),
        };
        let Some(key) = key else {
            return (self.func)(args);
        };

        if let Ok(cache) = self.cache.lock()
            && let Some(value) = cache.get(&key)
        {
            return value.clone();
        }

        let value = (self.func)(args);
        if let Ok(mut cache) = self.cache.lock() {
            cache.set(key, value.clone());
        }
        value
    }

    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }
}
