/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node $s \in
//! V$ to all other nodes in a directed graph. Each edge is assigned a
//! non-negative weight (or length) $w \colon E \to \mathbb{R}_+$.
//!
//! The graph is given as a dense [`WeightMatrix`]. An entry of `0` outside the
//! diagonal is treated like a missing edge, i.e. edges of weight zero are
//! never used. Running the algorithm from every node therefore only agrees
//! with [`floydwarshall::directed`](super::floydwarshall::directed) if the graph
//! has no zero-weight edges.
//!
//! # Example
//!
//! ```
//! use rs_apsp::matrix::{Weight, WeightMatrix};
//! use rs_apsp::shortestpath::dijkstra;
//!
//! let mut weights = WeightMatrix::new(5);
//! for &(u, v, w) in [(0, 1, 7), (0, 2, 9), (0, 4, 14), (1, 2, 10),
//!                    (2, 3, 11), (2, 4, 2), (4, 3, 9)].iter()
//! {
//!     weights.add_edge(u, v, w);
//! }
//!
//! let cost = dijkstra::single_source(&weights, 0);
//! assert_eq!(cost, vec![0, 7, 9, 20, 11]);
//!
//! let cost = dijkstra::single_source(&weights, 3);
//! assert_eq!(cost[3], 0);
//! assert_eq!(cost[0], i32::infinity());
//! ```

use crate::collections::{BinHeap, ItemSet, NodeSet, PriQueue};
use crate::matrix::{DistanceMatrix, Weight, WeightMatrix};

/// Default data structures: a binary heap and a dense set of visited nodes.
pub type DefaultData<W> = (BinHeap<usize, W>, NodeSet);

/// Compute the lengths of shortest paths from `src` to all nodes.
///
/// This is a convenience wrapper around [`single_source_with_data`] using
/// the [`DefaultData`] data structures.
///
/// # Panics
///
/// Panics if `src` is not a node of the graph.
pub fn single_source<W>(weights: &WeightMatrix<W>, src: usize) -> Vec<W>
where
    W: Weight,
{
    let n = weights.num_verts();
    let data: DefaultData<W> = (BinHeap::with_capacity(n), NodeSet::with_capacity(n));
    single_source_with_data(weights, src, data)
}

/// Compute the lengths of shortest paths from `src` with custom data
/// structures.
///
/// The algorithm requires a pair `(P, S)` with `P` implementing
/// [`PriQueue<usize, W>`](crate::collections::PriQueue) and `S` implementing
/// [`ItemSet<usize>`](crate::collections::ItemSet). The priority queue
/// handles the nodes in the order of their tentative distances, the set
/// contains the nodes whose distance is final. Both are cleared first, so
/// they can be reused for multiple searches (pass `&mut` references).
///
/// Returns a vector with the distance of each node, nodes not reachable
/// from `src` have distance [`Weight::infinity`].
///
/// # Panics
///
/// Panics if `src` is not a node of the graph.
pub fn single_source_with_data<W, P, S>(weights: &WeightMatrix<W>, src: usize, data: (P, S)) -> Vec<W>
where
    W: Weight,
    P: PriQueue<usize, W>,
    S: ItemSet<usize>,
{
    let n = weights.num_verts();
    assert!(src < n, "source node {} out of range (number of nodes: {})", src, n);

    let (mut pqueue, mut visited) = data;
    pqueue.clear();
    visited.clear();

    let mut cost = vec![W::infinity(); n];
    cost[src] = W::zero();
    pqueue.push(src, W::zero());

    while let Some((u, _)) = pqueue.pop_min() {
        // outdated entry, u has been handled with its final distance
        if !visited.insert(u) {
            continue;
        }

        let cost_u = cost[u];
        for (v, &w) in weights.row(u).iter().enumerate() {
            if w.is_zero() || w.is_infinite() || visited.contains(v) {
                continue;
            }
            let new_cost = cost_u + w;
            if new_cost < cost[v] {
                cost[v] = new_cost;
                pqueue.push(v, new_cost);
            }
        }
    }

    cost
}

/// Solve the All-Pairs-Shortest-Path-Problem by running Dijkstra's
/// algorithm from each node.
///
/// Row `u` of the returned matrix is the result of
/// [`single_source`]`(weights, u)`. The data structures are shared between
/// the runs.
pub fn all_pairs<W>(weights: &WeightMatrix<W>) -> DistanceMatrix<W>
where
    W: Weight,
{
    let n = weights.num_verts();
    let mut pqueue = BinHeap::<usize, W>::with_capacity(n);
    let mut visited = NodeSet::with_capacity(n);
    let mut dist = DistanceMatrix::from_elem(n, W::infinity());

    for src in 0..n {
        let cost = single_source_with_data(weights, src, (&mut pqueue, &mut visited));
        dist.row_mut(src).copy_from_slice(&cost);
    }

    dist
}
