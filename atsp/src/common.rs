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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::fmt;

// ----------------------------------------------------------------------------
// --- COST -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The type of the value associated with each edge of the graph.
pub type Cost = isize;

/// This sentinel value marks an edge that does not exist: the diagonal of a
/// cost matrix and all the edges which have been forbidden while branching.
/// It compares greater than any finite cost.
pub const INF: Cost = Cost::MAX;

/// Returns true iff the given cost is the `INF` sentinel.
///
/// # Examples:
/// ```
/// # use atsp::{is_inf, INF};
/// assert!(is_inf(INF));
/// assert!(!is_inf(0));
/// assert!(!is_inf(42));
/// ```
#[inline]
pub fn is_inf(cost: Cost) -> bool {
    cost == INF
}

// ----------------------------------------------------------------------------
// --- VERTEX -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The coordinates of one cell of a cost matrix. A vertex identifies the
/// directed edge `row -> col` which is a candidate to be part of the tour.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Vertex {
    pub row: usize,
    pub col: usize,
}
impl Vertex {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A branching candidate: the edge which is going to be included in the tour
/// along with its exclusion cost. That is, the increase of the lower bound
/// one must pay when deciding *not* to take that edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NewVertex {
    pub coordinates: Vertex,
    pub cost: Cost,
}
impl NewVertex {
    pub fn new(coordinates: Vertex, cost: Cost) -> Self {
        Self { coordinates, cost }
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTIONS --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The ordered sequence of the cities visited by a circuit. It always starts
/// with city 0 and implicitly closes back to it.
pub type Path = Vec<usize>;

/// One hamiltonian circuit along with its exact cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TspSolution {
    /// The cost of the circuit (return edge included)
    pub cost: Cost,
    /// The 0-based sequence of visited cities starting at city 0
    pub path: Path,
}
impl TspSolution {
    /// Returns the conventional 1-based representation of the circuit, with
    /// the origin repeated at the end.
    ///
    /// # Examples:
    /// ```
    /// # use atsp::TspSolution;
    /// let sol = TspSolution { cost: 35, path: vec![0, 1, 3, 2] };
    /// assert_eq!(vec![1, 2, 4, 3, 1], sol.one_based());
    /// ```
    pub fn one_based(&self) -> Vec<usize> {
        let mut tour = self.path.iter().map(|city| city + 1).collect::<Vec<_>>();
        if let Some(first) = tour.first().copied() {
            tour.push(first);
        }
        tour
    }
}
impl fmt::Display for TspSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :", self.cost)?;
        for city in self.one_based() {
            write!(f, " {city}")?;
        }
        Ok(())
    }
}

/// All the circuits that have been recorded during the search.
pub type TspSolutions = Vec<TspSolution>;

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a minimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The cost of an optimal circuit, `None` when the graph admits no
    /// hamiltonian circuit (or none cheaper than the initial bound).
    pub best_value: Option<Cost>,
    /// How many optimal circuits were kept
    pub nb_optima: usize,
    /// How many nodes were popped off the fringe
    pub explored: usize,
}

/// The ways in which an input matrix can violate the preconditions of the
/// solver. These are detected before any search begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A tour needs at least two cities
    #[error("a tour needs at least 2 cities, got {0}")]
    TooFewCities(usize),
    /// Some row does not have as many columns as there are rows
    #[error("row {row} has {len} columns, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },
    /// Costs must be nonnegative
    #[error("negative cost {cost} on edge {row} -> {col}")]
    NegativeCost { row: usize, col: usize, cost: Cost },
    /// The cost of a circuit could exceed the range of `Cost`
    #[error("{n} cities with costs up to {max} may overflow the cost of a circuit")]
    CostOverflow { n: usize, max: Cost },
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_solution {
    use crate::TspSolution;

    #[test]
    fn one_based_shifts_every_city_and_closes_the_circuit() {
        let sol = TspSolution { cost: 12, path: vec![0, 2, 1] };
        assert_eq!(vec![1, 3, 2, 1], sol.one_based());
    }
    #[test]
    fn one_based_of_an_empty_path_is_empty() {
        let sol = TspSolution { cost: 0, path: vec![] };
        assert!(sol.one_based().is_empty());
    }
    #[test]
    fn display_shows_cost_then_one_based_tour() {
        let sol = TspSolution { cost: 35, path: vec![0, 1, 3, 2] };
        assert_eq!("35 : 1 2 4 3 1", sol.to_string());
    }
}
