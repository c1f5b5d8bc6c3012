//! Indexed Priority Heap
//!
//! Binary heap over keyed entries with O(log n) in-place value updates.
//! The ordering is supplied through a [`Comparator`] type parameter; the
//! entry comparing greatest sits on top.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Three-way comparison over heap values.
pub trait Comparator<V> {
    fn compare(&self, a: &V, b: &V) -> Ordering;
}

/// Greatest value by `Ord` on top (max-heap).
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<V: Ord> Comparator<V> for NaturalOrder {
    fn compare(&self, a: &V, b: &V) -> Ordering {
        a.cmp(b)
    }
}

/// Smallest value by `Ord` on top (min-heap).
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseOrder;

impl<V: Ord> Comparator<V> for ReverseOrder {
    fn compare(&self, a: &V, b: &V) -> Ordering {
        b.cmp(a)
    }
}

/// Keyed binary heap.
///
/// `IndexedHeap::default()` is ready to use without further setup.
#[derive(Clone, Debug)]
pub struct IndexedHeap<K, V, C> {
    entries: Vec<(K, V)>,
    positions: HashMap<K, usize>,
    comparator: C,
}

impl<K, V, C: Default> Default for IndexedHeap<K, V, C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
            comparator: C::default(),
        }
    }
}

impl<K, V, C> IndexedHeap<K, V, C>
where
    K: Clone + Eq + Hash,
    C: Comparator<V>,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
            comparator,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current value stored for `key`.
    pub fn value(&self, key: &K) -> Option<&V> {
        self.positions.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Insert a fresh key. Returns `false` without touching the heap if the
    /// key is already present.
    pub fn add(&mut self, key: K, value: V) -> bool {
        if self.positions.contains_key(&key) {
            return false;
        }

        let pos = self.entries.len();
        self.positions.insert(key.clone(), pos);
        self.entries.push((key, value));
        self.sift_up(pos);
        true
    }

    /// Replace the value of `key`. Returns `false` if the key is absent.
    pub fn update(&mut self, key: &K, value: V) -> bool {
        let Some(&pos) = self.positions.get(key) else {
            return false;
        };

        self.entries[pos].1 = value;
        let pos = self.sift_up(pos);
        self.sift_down(pos);
        true
    }

    /// Key of the top entry.
    pub fn peek(&self) -> Option<&K> {
        self.entries.first().map(|(key, _)| key)
    }

    /// Top entry with its value.
    pub fn peek_entry(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }

    /// Remove and return the top key.
    pub fn pop(&mut self) -> Option<K> {
        self.pop_entry().map(|(key, _)| key)
    }

    /// Remove and return the top entry.
    pub fn pop_entry(&mut self) -> Option<(K, V)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (key, value) = self.entries.pop()?;
        self.positions.remove(&key);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((key, value))
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        self.comparator
            .compare(&self.entries[a].1, &self.entries[b].1)
            == Ordering::Greater
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.entries[a].0) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.entries[b].0) {
            *pos = b;
        }
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.outranks(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;

            if left < len && self.outranks(left, best) {
                best = left;
            }
            if right < len && self.outranks(right, best) {
                best = right;
            }
            if best == pos {
                return pos;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}
