// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dense square matrices for edge weights and path lengths.
//!
//! A [`Matrix`] stores `n × n` entries in a single row-major buffer and
//! carries its dimension `n`. Absent edges and unreachable pairs are
//! represented by the sentinel [`Weight::infinity`], which is half the
//! largest value of the weight type so that two sentinels can be added
//! without overflow.
//!
//! # Example
//!
//! ```
//! use rs_apsp::matrix::{Weight, WeightMatrix};
//!
//! let mut w = WeightMatrix::<i32>::new(3);
//! w.add_edge(0, 1, 4);
//!
//! assert_eq!(w[(0, 0)], 0);
//! assert_eq!(w[(0, 1)], 4);
//! assert_eq!(w[(1, 0)], i32::infinity());
//! assert_eq!(w.num_edges(), 1);
//! ```

use crate::num::traits::{Bounded, NumAssign};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

#[cfg(feature = "serialize")]
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Numeric type usable as edge weight.
pub trait Weight: NumAssign + Ord + Copy + Bounded {
    /// The sentinel for "no edge" or "no path".
    fn infinity() -> Self {
        Self::max_value() / (Self::one() + Self::one())
    }

    /// Return `true` if `self` is (at least) the sentinel.
    fn is_infinite(self) -> bool {
        self >= Self::infinity()
    }
}

impl<W> Weight for W where W: NumAssign + Ord + Copy + Bounded {}

/// A square matrix stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "RawMatrix<T>")
)]
pub struct Matrix<T> {
    n: usize,
    data: Vec<T>,
}

/// Unchecked serialized form of a [`Matrix`].
#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct RawMatrix<T> {
    n: usize,
    data: Vec<T>,
}

#[cfg(feature = "serialize")]
impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = String;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, String> {
        if raw.n.checked_mul(raw.n) != Some(raw.data.len()) {
            return Err(format!(
                "matrix of size {} must have {}x{} entries, got {}",
                raw.n,
                raw.n,
                raw.n,
                raw.data.len()
            ));
        }
        Ok(Matrix { n: raw.n, data: raw.data })
    }
}

/// Edge weights, `(u, v)` is the weight of the edge from `u` to `v`.
pub type WeightMatrix<W = i32> = Matrix<W>;

/// Shortest path lengths, `(u, v)` is the length of a shortest `u`-`v`-path.
pub type DistanceMatrix<W = i32> = Matrix<W>;

/// Predecessors on shortest paths, `(u, v)` is the node before `v` on a
/// shortest `u`-`v`-path.
pub type PredecessorMatrix = Matrix<Option<usize>>;

impl<T> Matrix<T> {
    /// The number of rows (and columns) of this matrix.
    pub fn num_verts(&self) -> usize {
        self.n
    }

    /// Return `true` if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Return row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Return row `i` as a mutable slice.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // `chunks` panics on a zero chunk size
        self.data.chunks(self.n.max(1)).take(self.n)
    }
}

impl<T: Clone> Matrix<T> {
    /// Create an `n × n` matrix with all entries equal to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n × n` overflows or the memory cannot be allocated.
    pub fn from_elem(n: usize, value: T) -> Self {
        let len = n.checked_mul(n).expect("matrix size overflow");
        Matrix {
            n,
            data: vec![value; len],
        }
    }

    /// Create an `n × n` matrix with all entries equal to `value`.
    ///
    /// Returns `None` if `n × n` overflows or the memory cannot be reserved.
    pub fn try_from_elem(n: usize, value: T) -> Option<Self> {
        let len = n.checked_mul(n)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).ok()?;
        data.resize(len, value);
        Some(Matrix { n, data })
    }

    /// Create a matrix from a list of rows.
    ///
    /// Returns `None` if some row does not have exactly as many entries as
    /// there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return None;
            }
            data.extend(row);
        }
        Some(Matrix { n, data })
    }
}

impl<W: Weight> Matrix<W> {
    /// Create a weight matrix of a graph with `n` nodes and no edges.
    ///
    /// The diagonal is `0`, all other entries are infinite.
    pub fn new(n: usize) -> Self {
        let mut m = Matrix::from_elem(n, W::infinity());
        m.clear_diagonal();
        m
    }

    /// Like [`Matrix::new`], but returns `None` instead of panicking if the
    /// matrix is too large.
    pub fn try_new(n: usize) -> Option<Self> {
        let mut m = Matrix::try_from_elem(n, W::infinity())?;
        m.clear_diagonal();
        Some(m)
    }

    fn clear_diagonal(&mut self) {
        for i in 0..self.n {
            self[(i, i)] = W::zero();
        }
    }

    /// Set the weight of the edge `(u, v)`, replacing any previous weight.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) {
        self[(u, v)] = weight;
    }

    /// Return `true` if there is a finite entry at `(u, v)` with `u != v`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u != v && !self[(u, v)].is_infinite()
    }

    /// Iterate over all edges `(u, v, weight)` in row-major order.
    ///
    /// Diagonal entries are not edges.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let n = self.n;
        self.data
            .iter()
            .enumerate()
            .map(move |(k, &w)| (k / n, k % n, w))
            .filter(|&(u, v, w)| u != v && !w.is_infinite())
    }

    /// The number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Return `true` if some edge has weight zero.
    pub fn has_zero_weight_edges(&self) -> bool {
        self.edges().any(|(_, _, w)| w.is_zero())
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of range for size {}", i, j, self.n);
        &self.data[i * self.n + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of range for size {}", i, j, self.n);
        &mut self.data[i * self.n + j]
    }
}

/// Prints the matrix as a table with node labels.
///
/// The formatter's width is used as column width (default 3). Infinite
/// entries are printed as `inf`.
impl<W> fmt::Display for Matrix<W>
where
    W: Weight + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = f.width().unwrap_or(3);

        write!(f, "    ")?;
        for v in 0..self.n {
            write!(f, " {:>width$}", v, width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "    {}", "-".repeat((width + 1) * self.n))?;

        for (u, row) in self.rows().enumerate() {
            write!(f, "{:>3} |", u)?;
            for &w in row {
                if w.is_infinite() {
                    write!(f, " {:>width$}", "inf", width = width)?;
                } else {
                    write!(f, " {:>width$}", w, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Matrix, Weight, WeightMatrix};

    #[test]
    fn test_infinity() {
        assert_eq!(i32::infinity(), i32::MAX / 2);
        assert_eq!(u64::infinity(), u64::MAX / 2);
        assert!(i32::infinity().checked_add(i32::infinity()).is_some());
        assert!(i32::infinity().is_infinite());
        assert!(!(i32::infinity() - 1).is_infinite());
    }

    #[test]
    fn test_new() {
        let w = WeightMatrix::<i64>::new(4);
        assert_eq!(w.num_verts(), 4);
        for u in 0..4 {
            for v in 0..4 {
                if u == v {
                    assert_eq!(w[(u, v)], 0);
                } else {
                    assert_eq!(w[(u, v)], i64::infinity());
                }
            }
        }
        assert_eq!(w.num_edges(), 0);
    }

    #[test]
    fn test_edges() {
        let mut w = WeightMatrix::<i32>::new(3);
        w.add_edge(2, 0, 7);
        w.add_edge(0, 1, 3);
        w.add_edge(0, 1, 5);
        assert!(w.has_edge(0, 1));
        assert!(!w.has_edge(1, 0));
        assert!(!w.has_edge(1, 1));
        assert_eq!(w.edges().collect::<Vec<_>>(), vec![(0, 1, 5), (2, 0, 7)]);
        assert!(!w.has_zero_weight_edges());
        w.add_edge(1, 2, 0);
        assert!(w.has_zero_weight_edges());
    }

    #[test]
    fn test_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.row(1), &[3, 4]);
        assert_eq!(m.rows().collect::<Vec<_>>(), vec![&[1, 2][..], &[3, 4][..]]);
        assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_none());

        let empty = WeightMatrix::<i32>::new(0);
        assert!(empty.is_empty());
        assert_eq!(empty.rows().count(), 0);
        assert_eq!(empty.edges().count(), 0);
    }

    #[test]
    fn test_too_large() {
        assert!(WeightMatrix::<i32>::try_new(usize::MAX / 2).is_none());
        assert!(WeightMatrix::<i32>::try_new(1_000_000_000).is_none());
        assert_eq!(WeightMatrix::<i32>::try_new(3), Some(WeightMatrix::new(3)));
        assert!(Matrix::try_from_elem(0, 0u8).unwrap().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let w = WeightMatrix::<i32>::new(2);
        let _ = w[(0, 2)];
    }

    #[test]
    fn test_display() {
        let mut w = WeightMatrix::<i32>::new(2);
        w.add_edge(0, 1, 12);
        let s = format!("{:4}", w);
        assert_eq!(
            s,
            "        0    1\n    ----------\n  0 |    0   12\n  1 |  inf    0\n"
        );
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::super::WeightMatrix;
        use serde_json;

        #[test]
        fn test_serde() {
            let mut w = WeightMatrix::<i32>::new(3);
            w.add_edge(0, 2, 9);
            let serialized = serde_json::to_string(&w).unwrap();
            let deserialized: WeightMatrix<i32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(w, deserialized);
        }

        #[test]
        fn test_serde_invalid_size() {
            assert!(serde_json::from_str::<WeightMatrix<i32>>(r#"{"n":3,"data":[]}"#).is_err());
            assert!(serde_json::from_str::<WeightMatrix<i32>>(r#"{"n":1,"data":[0,1]}"#).is_err());
            let w: WeightMatrix<i32> = serde_json::from_str(r#"{"n":1,"data":[0]}"#).unwrap();
            assert_eq!(w, WeightMatrix::new(1));
        }
    }
}
