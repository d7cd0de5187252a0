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

//! This module defines the `Solver` trait.

use crate::{Completion, Cost, TspSolution};

/// This is the solver abstraction. It is implemented by a structure that
/// implements an exact branch-and-bound search for the minimum cost
/// hamiltonian circuits of a graph.
pub trait Solver {
    /// This method orders the solver to search for the optimal circuits among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the minimization. Because the search is exhaustive, the outcome is
    /// always exact:
    ///
    /// * When a `best_value` is present, it is the cost of an optimal circuit.
    /// * When no `best_value` is present, the graph admits no circuit whose
    ///   cost is within the bound that was set with `set_primal` (or no
    ///   circuit at all).
    fn minimize(&mut self) -> Completion;
    /// This method returns the cost of the best circuit that has been found.
    /// It returns `None` when no circuit has been found.
    fn best_value(&self) -> Option<Cost>;
    /// Returns the optimal circuits that have been identified. Once the
    /// minimization has completed, they all have the same cost.
    fn best_solutions(&self) -> &[TspSolution];
    /// Returns the value of the best known bound: nodes whose lower bound
    /// exceeds this value are pruned. It is `INF` before any circuit is found
    /// (unless a primal was set).
    fn best_bound(&self) -> Cost;
    /// Sets a primal bound on the problem. It is only accepted when it
    /// improves on the current best bound.
    fn set_primal(&mut self, bound: Cost);
}
