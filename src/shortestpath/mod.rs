// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Shortest path algorithms.
//!
//! Both algorithms operate on a [`WeightMatrix`](crate::matrix::WeightMatrix)
//! and never modify it. For graphs with non-negative, non-zero edge weights
//! [`floydwarshall::directed`] and [`dijkstra::all_pairs`] compute the same
//! distance matrix.

pub mod dijkstra;
pub mod floydwarshall;
