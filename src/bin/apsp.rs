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

use rustop::opts;
use tracing::Level;

use rs_apsp::adjlist;
use rs_apsp::verify::{self, format_costs};
use rs_apsp::WeightMatrix;

use std::error::Error;
use std::process;

/// The instance used when no file is given.
const DEFAULT_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/graph_100verts.dat");

fn run(file: &str, start: usize, print_matrices: bool) -> Result<(), Box<dyn Error>> {
    let weights: WeightMatrix<i32> = adjlist::read(file)?;
    println!("n_verts = {}", weights.num_verts());

    let report = verify::run(&weights, start)?;

    if print_matrices {
        println!("Floyd-Warshall:\n{}", report.floyd);
    }
    println!(
        "Dijkstra for starting vert {} = {}\n",
        report.start,
        format_costs(&report.start_costs)
    );
    if print_matrices {
        println!("Dijkstra:\n{}", report.dijkstra);
    }

    println!("Floyd-Warshall took {:.5} seconds.", report.floyd_time.as_seconds_f64());
    println!(
        "Dijkstra for all starting points took {:.5} seconds.",
        report.dijkstra_time.as_seconds_f64()
    );
    println!("Floyd-Warshall and Dijkstra give {} results!", report.outcome());

    Ok(())
}

fn main() {
    let (args, _) = opts! {
        synopsis "Compute all-pairs shortest paths with Floyd-Warshall and Dijkstra and compare the results.";
        opt start:usize=2, desc:"Start node of the single Dijkstra run.";
        opt print_matrices:bool, desc:"Print both distance matrices.";
        opt verbose:bool, short:'v', desc:"Print debug messages.";
        param file:Option<String>, desc:"Instance file name (default: the bundled 100 node graph)";
    }
    .parse_or_exit();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let file = args.file.as_deref().unwrap_or(DEFAULT_FILE);
    if let Err(err) = run(file, args.start, args.print_matrices) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
