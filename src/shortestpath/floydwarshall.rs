// Copyright (c) 2016, 2017, 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.

use crate::matrix::{DistanceMatrix, PredecessorMatrix, Weight, WeightMatrix};

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall on a directed graph.
///
/// Returns a matrix with the length of a shortest path for each pair of
/// nodes, unreachable pairs have the value [`Weight::infinity`].
///
/// The algorithm runs in $O(n^3)$ time on a copy of `weights`.
///
/// # Example
/// ```
/// use rs_apsp::matrix::{Weight, WeightMatrix};
/// use rs_apsp::shortestpath::floydwarshall;
///
/// let mut weights = WeightMatrix::new(4);
/// for &(u, v, w) in [(0, 1, 2), (1, 2, 3), (0, 2, 10), (2, 3, 1)].iter() {
///     weights.add_edge(u, v, w);
/// }
///
/// let dist = floydwarshall::directed(&weights);
/// assert_eq!(dist.row(0), &[0, 2, 5, 6]);
/// assert_eq!(dist[(3, 0)], i32::infinity());
/// ```
pub fn directed<W>(weights: &WeightMatrix<W>) -> DistanceMatrix<W>
where
    W: Weight,
{
    let n = weights.num_verts();
    let mut dist = weights.clone();

    // k must be the outermost loop: all paths through 0..k must be known
    // before k is used as intermediate node.
    for k in 0..n {
        for u in 0..n {
            if u == k {
                continue;
            }
            let dist_uk = dist[(u, k)];
            if dist_uk.is_infinite() {
                continue;
            }
            for v in 0..n {
                let dist_kv = dist[(k, v)];
                if dist_kv.is_infinite() {
                    continue;
                }
                if dist[(u, v)] > dist_uk + dist_kv {
                    dist[(u, v)] = dist_uk + dist_kv;
                }
            }
        }
    }

    dist
}

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall on a directed graph and keep track of predecessors.
///
/// Returns the distance matrix (as [`directed`]) and a matrix of
/// predecessors: entry `(u, v)` is the node before `v` on a shortest
/// `u`-`v`-path (`u` itself for `u == v`) or `None` if `v` is not reachable
/// from `u`. Use [`path`] to extract a path.
pub fn directed_with_preds<W>(weights: &WeightMatrix<W>) -> (DistanceMatrix<W>, PredecessorMatrix)
where
    W: Weight,
{
    let n = weights.num_verts();
    let mut dist = weights.clone();
    let mut pred = PredecessorMatrix::from_elem(n, None);

    for u in 0..n {
        for v in 0..n {
            if u == v || weights.has_edge(u, v) {
                pred[(u, v)] = Some(u);
            }
        }
    }

    for k in 0..n {
        for u in 0..n {
            if u == k {
                continue;
            }
            let dist_uk = dist[(u, k)];
            if dist_uk.is_infinite() {
                continue;
            }
            for v in 0..n {
                if v == k {
                    continue;
                }
                let dist_kv = dist[(k, v)];
                if dist_kv.is_infinite() {
                    continue;
                }
                if dist[(u, v)] > dist_uk + dist_kv {
                    dist[(u, v)] = dist_uk + dist_kv;
                    pred[(u, v)] = pred[(k, v)];
                }
            }
        }
    }

    (dist, pred)
}

/// Return the nodes on a shortest path from `src` to `snk`.
///
/// The path starts with `src` and ends with `snk`. Returns `None` if `snk`
/// is not reachable from `src`.
///
/// # Panics
///
/// Panics if `src` or `snk` is not a node of the graph.
///
/// # Example
/// ```
/// use rs_apsp::matrix::WeightMatrix;
/// use rs_apsp::shortestpath::floydwarshall;
///
/// let mut weights = WeightMatrix::new(3);
/// weights.add_edge(0, 1, 1);
/// weights.add_edge(1, 2, 1);
/// weights.add_edge(0, 2, 5);
///
/// let (_, pred) = floydwarshall::directed_with_preds(&weights);
/// assert_eq!(floydwarshall::path(&pred, 0, 2), Some(vec![0, 1, 2]));
/// assert_eq!(floydwarshall::path(&pred, 2, 0), None);
/// ```
pub fn path(pred: &PredecessorMatrix, src: usize, snk: usize) -> Option<Vec<usize>> {
    let mut path = vec![snk];
    let mut v = snk;
    while v != src {
        v = pred[(src, v)]?;
        path.push(v);
        // a shortest path visits each node at most once
        if path.len() > pred.num_verts() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::{directed, directed_with_preds, path};
    use crate::matrix::{Weight, WeightMatrix};

    fn example() -> WeightMatrix<i32> {
        let mut w = WeightMatrix::new(4);
        w.add_edge(0, 1, 2);
        w.add_edge(1, 2, 3);
        w.add_edge(0, 2, 10);
        w.add_edge(2, 3, 1);
        w
    }

    #[test]
    fn test_example() {
        let dist = directed(&example());
        assert_eq!(dist[(0, 2)], 5);
        assert_eq!(dist[(0, 3)], 6);
        assert_eq!(dist[(3, 0)], i32::infinity());
        for u in 0..4 {
            assert_eq!(dist[(u, u)], 0);
        }
    }

    #[test]
    fn test_single_node() {
        let dist = directed(&WeightMatrix::<i32>::new(1));
        assert_eq!(dist.num_verts(), 1);
        assert_eq!(dist[(0, 0)], 0);
    }

    #[test]
    fn test_empty() {
        let dist = directed(&WeightMatrix::<i32>::new(0));
        assert!(dist.is_empty());
    }

    #[test]
    fn test_disconnected() {
        let dist = directed(&WeightMatrix::<i64>::new(3));
        for u in 0..3 {
            for v in 0..3 {
                if u == v {
                    assert_eq!(dist[(u, v)], 0);
                } else {
                    assert_eq!(dist[(u, v)], i64::infinity());
                }
            }
        }
    }

    #[test]
    fn test_input_unchanged() {
        let w = example();
        let orig = w.clone();
        let first = directed(&w);
        let second = directed(&w);
        assert_eq!(w, orig);
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_edges() {
        // negative edges without negative cycles are fine for Floyd-Warshall
        let mut w = WeightMatrix::new(3);
        w.add_edge(0, 1, 4);
        w.add_edge(1, 2, -3);
        w.add_edge(0, 2, 2);
        let dist = directed(&w);
        assert_eq!(dist.row(0), &[0, 4, 1]);
        assert_eq!(dist[(2, 0)], i32::infinity());
    }

    #[test]
    fn test_preds() {
        let w = example();
        let (dist, pred) = directed_with_preds(&w);
        assert_eq!(dist, directed(&w));
        assert_eq!(pred[(0, 3)], Some(2));
        assert_eq!(pred[(0, 2)], Some(1));
        assert_eq!(pred[(3, 0)], None);
        assert_eq!(path(&pred, 0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(path(&pred, 1, 1), Some(vec![1]));
        assert_eq!(path(&pred, 3, 0), None);
    }

    #[test]
    #[should_panic]
    fn test_path_invalid_node() {
        let (_, pred) = directed_with_preds(&example());
        path(&pred, 0, 4);
    }
}
