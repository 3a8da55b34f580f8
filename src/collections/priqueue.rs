/*
 * Copyright (c) 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

mod binheap;
pub use self::binheap::BinHeap;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-priority queue of keys with associated values (priorities).
///
/// The same key may be pushed several times. Elements with equal values
/// are returned in increasing order of their keys.
pub trait PriQueue<K, V> {
    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Push the element with given `key` and `value` onto the queue.
    fn push(&mut self, key: K, value: V);

    /// Remove and return the element with the smallest value from the queue or `None` if
    /// the queue is empty.
    fn pop_min(&mut self) -> Option<(K, V)>;
}

impl<'a, P, K, V> PriQueue<K, V> for &'a mut P
where
    P: PriQueue<K, V>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn push(&mut self, key: K, value: V) {
        (**self).push(key, value)
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        (**self).pop_min()
    }
}

/// The standard max-heap turned into a min-heap by reversing the order.
impl<K, V> PriQueue<K, V> for BinaryHeap<Reverse<(V, K)>>
where
    K: Ord,
    V: Ord,
{
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self)
    }

    fn push(&mut self, key: K, value: V) {
        BinaryHeap::push(self, Reverse((value, key)))
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        self.pop().map(|Reverse((value, key))| (key, value))
    }
}
