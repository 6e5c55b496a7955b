// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::collections::HashMap;

use log::trace;

use crate::geometry::{Coordinate, Ring};
use crate::locate::{IndexedPointInRingLocator, Location};

/// Caller-owned cache of prepared locators.
///
/// Keys are chosen by the caller (a feature id, a hash of the ring). The cache
/// holds at most `capacity` locators and evicts the least recently used one
/// when full. Nothing is invalidated implicitly: if the ring behind a key
/// changes, call [`LocatorCache::invalidate`].
#[derive(Debug)]
pub struct LocatorCache {
    capacity: usize,
    tick: u64,
    entries: HashMap<u64, (IndexedPointInRingLocator, u64)>,
}

impl LocatorCache {
    /// A cache holding at most `capacity` locators (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        LocatorCache {
            capacity,
            tick: 0,
            entries: HashMap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns the locator for `key`, marking it most recently used.
    pub fn get(&mut self, key: u64) -> Option<&IndexedPointInRingLocator> {
        self.tick += 1;
        let tick = self.tick;
        self.entries.get_mut(&key).map(|entry| {
            entry.1 = tick;
            &entry.0
        })
    }

    /// Returns the locator for `key`, building it with `build` on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: u64, build: F) -> &IndexedPointInRingLocator
    where
        F: FnOnce() -> IndexedPointInRingLocator,
    {
        self.tick += 1;
        let tick = self.tick;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        let entry = self.entries.entry(key).or_insert_with(|| (build(), tick));
        entry.1 = tick;
        &entry.0
    }

    /// Locates `p` in `ring`, preparing and caching an index under `key` on
    /// first use.
    pub fn locate(&mut self, key: u64, ring: &Ring, p: &Coordinate) -> Location {
        self.get_or_insert_with(key, || IndexedPointInRingLocator::new(ring))
            .locate(p)
    }

    /// Drops the locator for `key`. Returns whether one was present.
    pub fn invalidate(&mut self, key: u64) -> bool {
        self.entries.remove(&key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, (_, used))| *used)
            .map(|(key, _)| *key);
        if let Some(key) = oldest {
            trace!("locator cache full; evicting key {key}");
            self.entries.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Ring {
        Ring::closing(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(size, 0.0),
            Coordinate::new(size, size),
            Coordinate::new(0.0, size),
        ])
        .unwrap()
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = LocatorCache::new(2);
        let p = Coordinate::new(1.5, 1.5);
        assert_eq!(cache.locate(1, &square(1.0), &p), Location::Exterior);
        assert_eq!(cache.locate(2, &square(2.0), &p), Location::Interior);
        // touch 1 so that 2 becomes the oldest
        assert!(cache.get(1).is_some());
        cache.locate(3, &square(3.0), &p);
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(1));
        assert!(!cache.contains(2));
        assert!(cache.contains(3));
    }

    #[test]
    fn stale_entry_until_invalidated() {
        let mut cache = LocatorCache::new(4);
        let p = Coordinate::new(1.5, 1.5);
        assert_eq!(cache.locate(7, &square(1.0), &p), Location::Exterior);
        // same key, different ring: the cached index still answers
        assert_eq!(cache.locate(7, &square(2.0), &p), Location::Exterior);
        assert!(cache.invalidate(7));
        assert_eq!(cache.locate(7, &square(2.0), &p), Location::Interior);
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.invalidate(7));
    }
}
