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

//! # ATSP
//! This crate provides an exact solver for the asymmetric traveling salesman
//! problem. Given a directed graph described by its square matrix of costs,
//! it finds all the minimum-cost hamiltonian circuits; that is, the cheapest
//! ways to visit every city exactly once and come back to the origin.
//!
//! The solver implements the branch-and-bound algorithm of Little et al.
//! based on the reduction of the cost matrix:
//!
//! * Subtracting the minimum of each row and then of each column yields a
//!   lower bound on the cost of any circuit.
//! * At each node of the search tree, the zero cell whose exclusion would
//!   increase the lower bound the most gets selected. One branch includes the
//!   corresponding edge, the other branch forbids it.
//! * Including an edge forbids every edge that would close a sub-cycle with
//!   the edges that have been selected so far.
//! * A node is pruned as soon as its lower bound exceeds the cost of the best
//!   circuit found so far.
//!
//! ## Quick Example
//! The simplest way to use this crate is to call `solve_tsp` with the rows of
//! the cost matrix. Absent edges are denoted with `INF` and the diagonal is
//! ignored.
//!
//! ```
//! # use atsp::*;
//! let solutions = solve_tsp(vec![
//!     vec![INF, 10, 15, 20],
//!     vec![  5, INF, 9, 10],
//!     vec![  6, 13, INF, 12],
//!     vec![  8,  8,  9, INF],
//! ]).unwrap();
//!
//! for sol in solutions.iter() {
//!     // prints "35 : 1 2 4 3 1"
//!     println!("{sol}");
//! }
//! ```
//!
//! ## Tuning the search
//! For a finer control over the search, you will want to instantiate the
//! `SequentialSolver` yourself. This lets you pick the fringe (depth first
//! with a `LifoFringe`, or best first with a `BestFirstFringe`) and provide a
//! `SolverConfig`. For instance, the following only looks for one optimal
//! circuit and tells the solver that a circuit of cost 40 is known beforehand.
//!
//! ```
//! # use atsp::*;
//! let matrix = CostMatrix::try_from(vec![
//!     vec![INF, 10, 15, 20],
//!     vec![  5, INF, 9, 10],
//!     vec![  6, 13, INF, 12],
//!     vec![  8,  8,  9, INF],
//! ]).unwrap();
//!
//! let config = SolverConfigBuilder::default()
//!     .all_optima(false)
//!     .initial_bound(40)
//!     .build()
//!     .unwrap();
//!
//! let mut fringe = BestFirstFringe::new();
//! let mut solver = SequentialSolver::custom(&matrix, config, &mut fringe);
//! let completion = solver.minimize();
//!
//! assert_eq!(Some(35), completion.best_value);
//! assert_eq!(1, completion.nb_optima);
//! ```

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
