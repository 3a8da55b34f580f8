/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Randomized checks of the shortest path algorithms.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rs_apsp::shortestpath::{dijkstra, floydwarshall};
use rs_apsp::verify;
use rs_apsp::{DistanceMatrix, Weight, WeightMatrix};

/// A random digraph with `n` nodes, edge probability `p` and weights in `1..=max_weight`.
fn random_graph(rng: &mut StdRng, n: usize, p: f64, max_weight: i64) -> WeightMatrix<i64> {
    let mut w = WeightMatrix::new(n);
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.random_bool(p) {
                w.add_edge(u, v, rng.random_range(1..=max_weight));
            }
        }
    }
    w
}

fn instances() -> Vec<WeightMatrix<i64>> {
    let mut rng = StdRng::seed_from_u64(20220921);
    let mut graphs = vec![];
    for &n in &[1, 2, 5, 10, 30, 60] {
        for &p in &[0.0, 0.05, 0.2, 0.7] {
            graphs.push(random_graph(&mut rng, n, p, 100));
        }
    }
    graphs
}

fn check_triangle(dist: &DistanceMatrix<i64>) {
    let n = dist.num_verts();
    for i in 0..n {
        for k in 0..n {
            if dist[(i, k)].is_infinite() {
                continue;
            }
            for j in 0..n {
                if dist[(k, j)].is_infinite() {
                    continue;
                }
                assert!(dist[(i, j)] <= dist[(i, k)] + dist[(k, j)]);
            }
        }
    }
}

#[test]
fn test_floyd_equals_dijkstra() {
    for w in instances() {
        let floyd = floydwarshall::directed(&w);
        let dijk = dijkstra::all_pairs(&w);
        assert_eq!(verify::first_mismatch(&floyd, &dijk), None);
        assert!(verify::compare(&floyd, &dijk));
    }
}

#[test]
fn test_properties() {
    for w in instances() {
        let orig = w.clone();
        let dist = floydwarshall::directed(&w);
        assert_eq!(w, orig);
        assert_eq!(floydwarshall::directed(&w), dist);

        let n = w.num_verts();
        for u in 0..n {
            assert_eq!(dist[(u, u)], 0);
            for v in 0..n {
                // never longer than a direct edge
                assert!(dist[(u, v)] <= w[(u, v)]);
            }
        }
        check_triangle(&dist);
    }
}

#[test]
fn test_paths() {
    for w in instances() {
        let (dist, pred) = floydwarshall::directed_with_preds(&w);
        let n = w.num_verts();
        for u in 0..n {
            for v in 0..n {
                match floydwarshall::path(&pred, u, v) {
                    Some(path) => {
                        assert_eq!(path[0], u);
                        assert_eq!(path[path.len() - 1], v);
                        let len: i64 = path.windows(2).map(|e| w[(e[0], e[1])]).sum();
                        assert_eq!(len, dist[(u, v)]);
                    }
                    None => assert!(dist[(u, v)].is_infinite()),
                }
            }
        }
    }
}

#[test]
fn test_disconnected() {
    let w = WeightMatrix::<i64>::new(3);
    let report = verify::run(&w, 0).unwrap();
    assert!(report.equal);
    for u in 0..3 {
        for v in 0..3 {
            assert_eq!(report.floyd[(u, v)].is_infinite(), u != v);
        }
    }
}
