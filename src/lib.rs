// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! All-Pairs-Shortest-Path algorithms on dense weight matrices.
//!
//! The crate reads a directed graph from a file in adjacency list format
//! ([`adjlist`]), solves the All-Pairs-Shortest-Path-Problem with the
//! algorithm of Floyd and Warshall and with Dijkstra's algorithm started
//! from every node ([`shortestpath`]), and checks that both give the same
//! distances ([`verify`]).

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod matrix;
pub use self::matrix::{DistanceMatrix, Weight, WeightMatrix};

pub mod collections;

// # Algorithms

pub mod shortestpath;
pub mod verify;

// # Input

pub mod adjlist;
