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

//! Cross-check of the two All-Pairs-Shortest-Path algorithms.
//!
//! [`run`] solves the problem with Floyd-Warshall and with Dijkstra's
//! algorithm started from every node, measures the running times and compares
//! the resulting distance matrices.
//!
//! # Example
//!
//! ```
//! use rs_apsp::matrix::WeightMatrix;
//! use rs_apsp::verify;
//!
//! let mut weights = WeightMatrix::new(3);
//! weights.add_edge(0, 1, 4);
//! weights.add_edge(1, 2, 1);
//! weights.add_edge(0, 2, 7);
//!
//! let report = verify::run(&weights, 0).unwrap();
//! assert!(report.equal);
//! assert_eq!(report.start_costs, vec![0, 4, 5]);
//! assert_eq!(verify::format_costs(&report.start_costs), "[ 0 4 5 ]");
//! ```

use crate::matrix::{DistanceMatrix, Weight, WeightMatrix};
use crate::shortestpath::{dijkstra, floydwarshall};

use std::fmt;

use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

/// Error when running the comparison.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid start node {start} (number of nodes: {num_verts})")]
    InvalidStart { start: usize, num_verts: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// The outcome of [`run`].
#[derive(Clone, Debug)]
pub struct Report<W> {
    /// Number of nodes of the graph.
    pub num_verts: usize,
    /// The start node of the single Dijkstra run.
    pub start: usize,
    /// Distances from `start` computed by Dijkstra's algorithm.
    pub start_costs: Vec<W>,
    /// Result of Floyd-Warshall.
    pub floyd: DistanceMatrix<W>,
    /// Result of Dijkstra's algorithm started from every node.
    pub dijkstra: DistanceMatrix<W>,
    /// Running time of Floyd-Warshall.
    pub floyd_time: Duration,
    /// Running time of all Dijkstra runs.
    pub dijkstra_time: Duration,
    /// Whether both distance matrices are equal.
    pub equal: bool,
}

impl<W> Report<W> {
    /// `"equal"` or `"different"`.
    pub fn outcome(&self) -> &'static str {
        if self.equal {
            "equal"
        } else {
            "different"
        }
    }
}

/// Run both algorithms on `weights` and compare their results.
///
/// Dijkstra's algorithm is additionally run once from `start` alone, its
/// result is returned in [`Report::start_costs`].
///
/// Fails if `start` is not a node of the graph.
pub fn run<W>(weights: &WeightMatrix<W>, start: usize) -> Result<Report<W>>
where
    W: Weight + fmt::Debug,
{
    let num_verts = weights.num_verts();
    if start >= num_verts {
        return Err(Error::InvalidStart { start, num_verts });
    }

    if weights.has_zero_weight_edges() {
        warn!("Graph contains edges of weight 0, these are ignored by Dijkstra's algorithm");
    }

    let (floyd, floyd_time) = timed(|| floydwarshall::directed(weights));
    info!("Floyd-Warshall took {:.5} seconds", floyd_time.as_seconds_f64());

    let start_costs = dijkstra::single_source(weights, start);

    let (dijkstra, dijkstra_time) = timed(|| dijkstra::all_pairs(weights));
    info!(
        "Dijkstra for all {} start nodes took {:.5} seconds",
        num_verts,
        dijkstra_time.as_seconds_f64()
    );

    let mismatch = first_mismatch(&floyd, &dijkstra);
    if let Some((u, v)) = mismatch {
        debug!(
            "First mismatch at ({},{}): Floyd-Warshall {:?}, Dijkstra {:?}",
            u,
            v,
            floyd[(u, v)],
            dijkstra[(u, v)]
        );
    }

    Ok(Report {
        num_verts,
        start,
        start_costs,
        floyd,
        dijkstra,
        floyd_time,
        dijkstra_time,
        equal: mismatch.is_none(),
    })
}

/// Run `f` and return its result together with the elapsed wall-clock time.
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let tstart = OffsetDateTime::now_utc();
    let result = f();
    let tend = OffsetDateTime::now_utc();
    (result, tend - tstart)
}

/// Return `true` if both matrices have the same size and entries.
pub fn compare<W: PartialEq>(a: &DistanceMatrix<W>, b: &DistanceMatrix<W>) -> bool {
    a == b
}

/// Return the first position (in row-major order) where `a` and `b` differ.
///
/// If the matrices have different sizes, `(0, 0)` is returned.
pub fn first_mismatch<W: PartialEq>(a: &DistanceMatrix<W>, b: &DistanceMatrix<W>) -> Option<(usize, usize)> {
    if a.num_verts() != b.num_verts() {
        return Some((0, 0));
    }
    a.rows().zip(b.rows()).enumerate().find_map(|(u, (ra, rb))| {
        ra.iter().zip(rb).position(|(x, y)| x != y).map(|v| (u, v))
    })
}

/// Format a vector of distances as `[ d0 d1 ... ]`.
///
/// The values are printed as they are, unreachable nodes show the value of
/// [`Weight::infinity`].
pub fn format_costs<W: fmt::Display>(costs: &[W]) -> String {
    let mut s = String::from("[ ");
    for c in costs {
        s.push_str(&c.to_string());
        s.push(' ');
    }
    s.push(']');
    s
}
