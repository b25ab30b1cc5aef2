// ============================================================================
// Konnyaku - 有界查找缓存
// ============================================================================
//
// 文件: src/i18n/cache.rs
// 职责: 先进先出淘汰的有界缓存
// 边界:
//   - ✅ 有界键值存储
//   - ✅ 最早插入项淘汰
//   - ✅ 命中/未命中统计
//   - ❌ 不应包含查找逻辑
//   - ❌ 不应感知语言区域
//
// ============================================================================

use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Default maximum entry count for the path and translation caches.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Bounded map that evicts the least-recently-inserted entry when full.
///
/// Reads do not refresh an entry's position, so this is FIFO rather than LRU.
#[derive(Debug)]
pub struct FifoCache<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl<K, V> FifoCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up `key`, counting a hit or a miss.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Membership test that leaves the counters alone.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Insert an entry, evicting the oldest one first when at capacity.
    ///
    /// Replacing an existing key keeps its original insertion position.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            return;
        }

        while self.entries.len() >= self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    /// Drop every entry; hit/miss counters are kept.
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

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<K, V> Default for FifoCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
