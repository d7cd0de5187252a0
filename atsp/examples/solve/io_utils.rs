// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module contains everything that is necessary to parse an ATSP instance
//! and turn it into a cost matrix usable by the solver.
//!
//! The expected format is fairly simple: the first line holds the number of
//! cities `N` and the next `N` lines each hold the `N` costs of the edges
//! leaving a given city. Absent edges are denoted with `INF`, `inf` or `-`.
//! Everything that follows a `#` on a line is a comment; blank lines are
//! ignored.

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use atsp::{Cost, CostMatrix, INF};

/// This structure represents the ATSP instance
#[derive(Debug, Clone)]
pub struct AtspInstance {
    /// The number of cities
    pub nb_cities: usize,
    /// The validated cost matrix (diagonal set to `INF`)
    pub matrix: CostMatrix,
}

/// This enumeration simply groups the kind of errors that might occur when
/// parsing an atsp instance from file. There can be io errors (file
/// unavailable ?), format errors (e.g. a row is missing), parse int errors
/// (the parser expected an integer number but got ... something else) or
/// a matrix that the solver refuses.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("parse int {0}")]
    ParseInt(#[from] ParseIntError),
    /// The file does not follow the expected layout
    #[error("ill formed instance: {0}")]
    IllFormed(String),
    /// The matrix is well formed but it is not a valid cost matrix
    #[error("invalid matrix: {0}")]
    Matrix(#[from] atsp::Error),
}

/// This function is used to read an atsp instance from file. It returns either
/// an atsp instance if everything went on well or an error describing the
/// problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<AtspInstance, Error> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// Parses an instance from any buffered source
pub fn parse_instance<R: BufRead>(source: R) -> Result<AtspInstance, Error> {
    let mut nb_cities = None;
    let mut rows: Vec<Vec<Cost>> = vec![];

    for line in source.lines() {
        let line = line?;
        let line = strip_comment(&line).trim();
        if line.is_empty() {
            continue;
        }

        match nb_cities {
            // First line is the number of cities
            None => {
                let n = line.parse::<usize>()?;
                nb_cities = Some(n);
                rows.reserve(n);
            }
            Some(n) => {
                if rows.len() == n {
                    return Err(Error::IllFormed(format!("more than {n} rows")));
                }
                let row = line.split_whitespace()
                    .map(parse_cost)
                    .collect::<Result<Vec<_>, _>>()?;
                if row.len() != n {
                    return Err(Error::IllFormed(
                        format!("row {} has {} entries, expected {n}", rows.len() + 1, row.len())));
                }
                rows.push(row);
            }
        }
    }

    let nb_cities = nb_cities.ok_or_else(|| Error::IllFormed("empty instance".to_string()))?;
    if rows.len() != nb_cities {
        return Err(Error::IllFormed(format!("expected {nb_cities} rows, got {}", rows.len())));
    }
    let matrix = CostMatrix::try_from(rows)?;
    Ok(AtspInstance { nb_cities, matrix })
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_cost(token: &str) -> Result<Cost, ParseIntError> {
    match token {
        "INF" | "inf" | "-" => Ok(INF),
        _ => token.parse::<Cost>(),
    }
}
