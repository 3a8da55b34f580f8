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

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// A (finite) set of nodes.
pub trait ItemSet<I>
where
    I: Copy,
{
    /// Return `true` if this set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of items in this set.
    fn len(&self) -> usize;

    /// Remove all items from the set.
    fn clear(&mut self);

    /// Add one item to the set.
    ///
    /// Return `true` iff `u` had not been contained in this set before.
    fn insert(&mut self, u: I) -> bool;

    /// Return `true` iff item `u` is contained in this set.
    fn contains(&self, u: I) -> bool;
}

impl<'a, N, S> ItemSet<N> for &'a mut S
where
    S: ItemSet<N>,
    N: Copy,
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

    fn insert(&mut self, u: N) -> bool {
        (**self).insert(u)
    }

    fn contains(&self, u: N) -> bool {
        (**self).contains(u)
    }
}

impl<N, B> ItemSet<N> for HashSet<N, B>
where
    N: Copy + Eq + Hash,
    B: BuildHasher,
{
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self)
    }

    fn insert(&mut self, u: N) -> bool {
        HashSet::insert(self, u)
    }

    fn contains(&self, u: N) -> bool {
        HashSet::contains(self, &u)
    }
}

/// A set of node indices backed by a vector of flags.
///
/// The set grows on demand, indices never inserted are not contained.
#[derive(Clone, Debug, Default)]
pub struct NodeSet {
    marks: Vec<bool>,
    len: usize,
}

impl NodeSet {
    /// Create an empty set for the nodes `0..n`.
    pub fn with_capacity(n: usize) -> Self {
        NodeSet {
            marks: vec![false; n],
            len: 0,
        }
    }
}

impl ItemSet<usize> for NodeSet {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.marks.iter_mut().for_each(|m| *m = false);
        self.len = 0;
    }

    fn insert(&mut self, u: usize) -> bool {
        if u >= self.marks.len() {
            self.marks.resize(u + 1, false);
        }
        if self.marks[u] {
            false
        } else {
            self.marks[u] = true;
            self.len += 1;
            true
        }
    }

    fn contains(&self, u: usize) -> bool {
        self.marks.get(u).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{ItemSet, NodeSet};
    use std::collections::HashSet;

    fn check<S: ItemSet<usize>>(mut s: S) {
        assert!(s.is_empty());
        assert!(s.insert(3));
        assert!(s.insert(0));
        assert!(!s.insert(3));
        assert_eq!(s.len(), 2);
        assert!(s.contains(0));
        assert!(s.contains(3));
        assert!(!s.contains(1));
        assert!(!s.contains(100));
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains(3));
    }

    #[test]
    fn test_nodeset() {
        check(NodeSet::default());
        check(NodeSet::with_capacity(10));
    }

    #[test]
    fn test_hashset() {
        check(HashSet::new());
        let mut s = HashSet::<usize>::new();
        check(&mut s);
    }
}
