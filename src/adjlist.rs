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

//! Reading graphs in adjacency list format.
//!
//! The first line of a file contains the number of nodes `n`. Each
//! following line starts with a node `u` followed by pairs `v w` meaning
//! that there is an edge from `u` to `v` with weight `w`. Nodes are numbered
//! from `0` to `n-1`. Nodes without outgoing edges may be omitted and empty
//! lines are ignored.
//!
//! ```text
//! 4
//! 0 1 2 2 10
//! 1 2 3
//! 2 3 1
//! ```
//!
//! # Example
//!
//! ```
//! use rs_apsp::adjlist;
//! use std::io::Cursor;
//!
//! let w = adjlist::read_from_buf::<_, i32>(&mut Cursor::new("3\n0 1 5\n2 0 1\n")).unwrap();
//! assert_eq!(w.num_verts(), 3);
//! assert_eq!(w[(0, 1)], 5);
//! assert_eq!(w[(2, 0)], 1);
//! assert!(!w.has_edge(1, 2));
//! ```

use crate::matrix::{Weight, WeightMatrix};

use std::fmt;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use thiserror::Error;
use tracing::debug;

/// Error when reading a file in adjacency list format.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Format error on line {line}: {msg}")]
    Format { line: usize, msg: String },
    #[error("Data error on line {line}: {msg}")]
    Data { line: usize, msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Iterates over the tokens in a line.
pub struct Tokens<'a> {
    it: SplitWhitespace<'a>,
    pub line: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.it.next()
    }
}

impl<'a> Tokens<'a> {
    fn new(s: &'a str, line: usize) -> Self {
        Tokens {
            it: s.split_whitespace(),
            line,
        }
    }

    /// Returns the next token converted to a number.
    pub fn number<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let line = self.line;
        let tok = self.it.next().ok_or_else(|| Error::Format {
            line,
            msg: "expected number".to_string(),
        })?;
        tok.parse().map_err(|e| Error::Format {
            line,
            msg: format!("invalid number '{}': {}", tok, e),
        })
    }

    /// Returns the next token converted to a number or `None` at the end of
    /// the line.
    pub fn opt_number<T>(&mut self) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.it.clone().next() {
            Some(_) => self.number().map(Some),
            None => Ok(None),
        }
    }

    /// Ensures that there is no next token.
    pub fn end(&mut self) -> Result<()> {
        if let Some(s) = self.it.next() {
            Err(Error::Format {
                line: self.line,
                msg: format!("unexpected token at end of line: {}", s),
            })
        } else {
            Ok(())
        }
    }
}

/// Call `f` once for each non-empty line of `fin` with the line's tokens.
fn read_lines<R, F>(fin: &mut R, f: &mut F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&mut Tokens) -> Result<()>,
{
    let mut nline = 0;
    let mut line = String::new();

    while {
        line.clear();
        fin.read_line(&mut line)
    }? > 0
    {
        nline += 1;
        if line.trim().is_empty() {
            continue;
        }
        f(&mut Tokens::new(&line, nline))?;
    }

    Ok(())
}

/// Read a weight matrix from the file `fname`.
pub fn read<P, W>(fname: P) -> Result<WeightMatrix<W>>
where
    P: AsRef<Path>,
    W: Weight + FromStr + fmt::Display,
    W::Err: fmt::Display,
{
    let fname = fname.as_ref();
    debug!("Reading graph from {}", fname.display());
    read_from_buf(&mut BufReader::new(fs::File::open(fname)?))
}

/// Read a weight matrix from a buffered reader.
pub fn read_from_buf<R, W>(buf: &mut R) -> Result<WeightMatrix<W>>
where
    R: BufRead,
    W: Weight + FromStr + fmt::Display,
    W::Err: fmt::Display,
{
    let mut weights: Option<WeightMatrix<W>> = None;

    read_lines(buf, &mut |toks| {
        let w = match weights.as_mut() {
            Some(w) => w,
            None => {
                let n: usize = toks.number()?;
                toks.end()?;
                weights = Some(WeightMatrix::try_new(n).ok_or_else(|| Error::Data {
                    line: toks.line,
                    msg: format!("too many nodes: {}", n),
                })?);
                return Ok(());
            }
        };

        let n = w.num_verts();
        let u: usize = toks.number()?;
        if u >= n {
            return Err(Error::Data {
                line: toks.line,
                msg: format!("invalid node {} (must be < {})", u, n),
            });
        }

        while let Some(v) = toks.opt_number::<usize>()? {
            let weight: W = toks.number().map_err(|_| Error::Format {
                line: toks.line,
                msg: format!("missing or invalid weight of edge ({},{})", u, v),
            })?;
            if v >= n {
                return Err(Error::Data {
                    line: toks.line,
                    msg: format!("invalid node {} in edge ({},{}) (must be < {})", v, u, v, n),
                });
            }
            if weight < W::zero() {
                return Err(Error::Data {
                    line: toks.line,
                    msg: format!("negative weight {} of edge ({},{})", weight, u, v),
                });
            }
            if weight.is_infinite() {
                return Err(Error::Data {
                    line: toks.line,
                    msg: format!("weight {} of edge ({},{}) too large", weight, u, v),
                });
            }
            w.add_edge(u, v, weight);
        }

        Ok(())
    })?;

    let weights = weights.ok_or_else(|| Error::Format {
        line: 0,
        msg: "unexpected end of file, expected number of nodes".to_string(),
    })?;

    debug!(
        "Read graph with {} nodes and {} edges",
        weights.num_verts(),
        weights.num_edges()
    );

    Ok(weights)
}
