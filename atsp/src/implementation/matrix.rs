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

//! This module provides the cost matrix that is used to compute lower bounds
//! throughout the branch-and-bound search.

use std::{fmt, ops::{Index, IndexMut}};

use crate::{is_inf, Cost, Error, INF};

/// A square table of costs where the cell `(row, col)` holds the cost of the
/// directed edge `row -> col`. Absent edges are marked with `INF`; the
/// diagonal is always `INF`.
///
/// The cells are stored in row-major order. One can access a row as a slice
/// with `matrix[row]` and a given cell with `matrix[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    n: usize,
    cells: Vec<Cost>,
}

impl TryFrom<Vec<Vec<Cost>>> for CostMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Cost>>) -> Result<Self, Self::Error> {
        let n = rows.len();
        if n < 2 {
            return Err(Error::TooFewCities(n));
        }
        let mut cells = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(Error::NotSquare { row: i, len: row.len(), expected: n });
            }
            for (j, cost) in row.into_iter().enumerate() {
                if i == j {
                    cells.push(INF);
                } else if cost < 0 {
                    return Err(Error::NegativeCost { row: i, col: j, cost });
                } else {
                    cells.push(cost);
                }
            }
        }

        // any circuit costs at most n times the largest finite cost; it must
        // stay clear of the INF sentinel
        let max = cells.iter().copied().filter(|c| !is_inf(*c)).max().unwrap_or(0);
        let worst = Cost::try_from(n).ok().and_then(|n| n.checked_mul(max));
        if worst.map_or(true, is_inf) {
            return Err(Error::CostOverflow { n, max });
        }
        Ok(Self { n, cells })
    }
}

impl Index<usize> for CostMatrix {
    type Output = [Cost];

    fn index(&self, row: usize) -> &[Cost] {
        &self.cells[row * self.n..(row + 1) * self.n]
    }
}
impl IndexMut<usize> for CostMatrix {
    fn index_mut(&mut self, row: usize) -> &mut [Cost] {
        &mut self.cells[row * self.n..(row + 1) * self.n]
    }
}

impl CostMatrix {
    /// The number of cities
    pub fn size(&self) -> usize {
        self.n
    }

    /// Iterates over the cells of the given column (top to bottom)
    fn column(&self, col: usize) -> impl Iterator<Item = Cost> + '_ {
        self.cells.iter().skip(col).step_by(self.n).copied()
    }

    fn restore_diagonal(&mut self) {
        for i in 0..self.n {
            self[i][i] = INF;
        }
    }

    /// The minimum finite value of each row (0 for the rows that are
    /// entirely `INF`)
    pub fn min_values_in_rows(&self) -> Vec<Cost> {
        (0..self.n)
            .map(|r| finite_min(self[r].iter().copied()).unwrap_or(0))
            .collect()
    }

    /// The minimum finite value of each column (0 for the columns that are
    /// entirely `INF`)
    pub fn min_values_in_cols(&self) -> Vec<Cost> {
        (0..self.n)
            .map(|c| finite_min(self.column(c)).unwrap_or(0))
            .collect()
    }

    /// Subtracts the minimum of each row from all the finite cells of that
    /// row so that every row which is not entirely `INF` holds a zero.
    /// Returns the sum of the subtracted values.
    pub fn reduce_rows(&mut self) -> Cost {
        let mins = self.min_values_in_rows();
        for (r, min) in mins.iter().copied().enumerate() {
            for cell in self[r].iter_mut() {
                if !is_inf(*cell) {
                    *cell -= min;
                }
            }
        }
        self.restore_diagonal();
        mins.into_iter().fold(0, Cost::saturating_add)
    }

    /// Subtracts the minimum of each column from all the finite cells of that
    /// column so that every column which is not entirely `INF` holds a zero.
    /// Returns the sum of the subtracted values.
    pub fn reduce_cols(&mut self) -> Cost {
        let mins = self.min_values_in_cols();
        let n = self.n;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if !is_inf(*cell) {
                *cell -= mins[i % n];
            }
        }
        self.restore_diagonal();
        mins.into_iter().fold(0, Cost::saturating_add)
    }

    /// Returns the cost of *not* taking the edge `row -> col`: the minimum of
    /// the other finite values in `row` plus the minimum of the other finite
    /// values in `col`.
    ///
    /// When the row (or column) has no alternative, a circuit that avoids the
    /// edge is impossible and the returned cost is `INF`.
    pub fn get_vertex_cost(&self, row: usize, col: usize) -> Cost {
        let min_row = finite_min(
            self[row].iter().enumerate()
                .filter(|(c, _)| *c != col)
                .map(|(_, cost)| *cost));
        let min_col = finite_min(
            self.column(col).enumerate()
                .filter(|(r, _)| *r != row)
                .map(|(_, cost)| cost));

        match (min_row, min_col) {
            (Some(r), Some(c)) => r.saturating_add(c),
            _ => INF,
        }
    }

    /// Sets the whole row to `INF`
    pub fn forbid_row(&mut self, row: usize) {
        self[row].fill(INF);
    }
    /// Sets the whole column to `INF`
    pub fn forbid_col(&mut self, col: usize) {
        let n = self.n;
        self.cells.iter_mut().skip(col).step_by(n).for_each(|cell| *cell = INF);
    }

    /// Returns the exact cost of the given circuit (return edge included).
    /// This is only meaningful on an unreduced matrix.
    pub fn path_cost(&self, path: &[usize]) -> Cost {
        let closing = match (path.last(), path.first()) {
            (Some(&last), Some(&first)) => self[last][first],
            _ => return 0,
        };
        path.windows(2)
            .map(|w| self[w[0]][w[1]])
            .fold(closing, Cost::saturating_add)
    }
}

/// The smallest finite value produced by the iterator, if any.
fn finite_min(costs: impl Iterator<Item = Cost>) -> Option<Cost> {
    costs.filter(|c| !is_inf(*c)).min()
}

impl fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n {
            for cost in self[r].iter() {
                if is_inf(*cost) {
                    write!(f, "INF ")?;
                } else {
                    write!(f, "{cost} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
