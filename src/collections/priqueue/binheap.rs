// Copyright (c) 2016, 2017, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Binary heap implementation

use crate::collections::PriQueue;

use std::cmp::Ordering;

/// Heap item information.
struct BinHeapItem<K, V> {
    /// The key associated with this item.
    key: K,
    /// The value (priority) of the item.
    value: V,
}

impl<K: Ord, V: Ord> BinHeapItem<K, V> {
    /// Order by value, ties broken by key.
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value).then_with(|| self.key.cmp(&other.key))
    }
}

/// Simple binary min-heap.
///
/// Keys may be pushed more than once, e.g. with an improved value. There is
/// no decrease-key operation; outdated entries must be skipped by the
/// caller when they are popped.
pub struct BinHeap<K, V> {
    /// The heap elements.
    heap: Vec<BinHeapItem<K, V>>,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty heap with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        BinHeap {
            heap: Vec::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap { heap: vec![] }
    }
}

impl<K, V> PriQueue<K, V> for BinHeap<K, V>
where
    K: Ord,
    V: Ord,
{
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn push(&mut self, key: K, value: V) {
        self.heap.push(BinHeapItem { key, value });
        self.upheap(self.heap.len() - 1);
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        // remove the smallest element, the last element becomes the new root
        let min_item = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some((min_item.key, min_item.value))
    }
}

impl<K, V> BinHeap<K, V>
where
    K: Ord,
    V: Ord,
{
    /// Move the element at `cur_pos` up in the heap until its parent is not
    /// larger or the root is reached.
    fn upheap(&mut self, mut cur_pos: usize) {
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            if self.heap[cur_pos].cmp(&self.heap[parent_pos]) != Ordering::Less {
                break;
            }
            self.heap.swap(cur_pos, parent_pos);
            cur_pos = parent_pos;
        }
    }

    /// Move the element at `cur_pos` down in the heap until none of its
    /// children is smaller.
    fn downheap(&mut self, mut cur_pos: usize) {
        let n = self.heap.len();
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            let next_pos = if left_pos >= n {
                break;
            } else if right_pos >= n || self.heap[left_pos].cmp(&self.heap[right_pos]) == Ordering::Less {
                left_pos
            } else {
                right_pos
            };

            if self.heap[cur_pos].cmp(&self.heap[next_pos]) != Ordering::Greater {
                break;
            }

            self.heap.swap(cur_pos, next_pos);
            cur_pos = next_pos;
        }
    }
}
