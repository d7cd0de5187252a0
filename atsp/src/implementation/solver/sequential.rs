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

//! This module provides the implementation of the sequential branch-and-bound
//! solver. That is a solver that will solve the problem using one single
//! thread of execution.
//!
//! Each node popped off the fringe is developed depth first: the edge whose
//! exclusion costs the most is included, and the sibling node in which that
//! edge is excluded is pushed onto the fringe for later exploration. This
//! goes on until the node is either pruned or a complete circuit is obtained.

use log::{debug, trace};

use crate::{create_right_branch_matrix, filter_solutions, is_inf, Completion, Cost, CostMatrix, Fringe, NewVertex, Solver, SolverConfig, StageState, TspSolution, TspSolutions};

pub struct SequentialSolver<'a> {
    /// A reference to the (unreduced) cost matrix of the instance being
    /// solved. It is used to compute the exact cost of complete circuits.
    matrix: &'a CostMatrix,
    /// The configuration of this solver
    config: SolverConfig,
    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    fringe: &'a mut dyn Fringe,
    /// This is a counter that tracks the number of nodes that have effectively
    /// been popped from the fringe.
    explored: usize,
    /// This is the value of the best known bound. Any node whose lower bound
    /// exceeds it can be pruned.
    best_lb: Cost,
    /// The circuits that have been recorded so far. Stale circuits (which have
    /// been recorded before the best bound improved) are only removed at the
    /// end of the minimization.
    solutions: TspSolutions,
}

impl<'a> SequentialSolver<'a> {
    pub fn new(matrix: &'a CostMatrix, fringe: &'a mut dyn Fringe) -> Self {
        Self::custom(matrix, SolverConfig::default(), fringe)
    }

    pub fn custom(matrix: &'a CostMatrix, config: SolverConfig, fringe: &'a mut dyn Fringe) -> Self {
        SequentialSolver {
            matrix,
            config,
            fringe,
            explored: 0,
            best_lb: config.initial_bound,
            solutions: vec![],
        }
    }

    /// The number of nodes that have been popped off the fringe
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Consumes the solver and yields the circuits it has found
    pub fn into_solutions(self) -> TspSolutions {
        self.solutions
    }

    /// This method initializes the problem resolution. Put more simply, this
    /// method posts the root node onto the fringe so that the processing can
    /// be bootstrapped. Whatever node was left in the fringe by a previous
    /// search is discarded.
    fn initialize(&mut self) {
        self.fringe.clear();
        let mut root = StageState::new(self.matrix.clone());
        root.reset_lower_bound();
        self.fringe.push(root);
    }

    /// A node must be pruned when its bound shows that it cannot lead to a
    /// circuit as good as (or better than, if only one optimum is wanted) the
    /// best known bound.
    fn is_pruned(&self, bound: Cost) -> bool {
        if is_inf(bound) {
            true
        } else if self.config.all_optima {
            bound > self.best_lb
        } else {
            bound >= self.best_lb
        }
    }

    /// This method processes the given `node`: it keeps including the most
    /// constraining edge until either the node is pruned or only two edges are
    /// left to choose. At each step, the sibling branch which excludes the
    /// chosen edge is pushed onto the fringe.
    fn process_one_node(&mut self, mut node: StageState) {
        trace!("node at level {} with bound {}", node.level(), node.lower_bound());

        while !node.is_terminal() && !self.is_pruned(node.lower_bound()) {
            let reduction = node.reduce_cost_matrix();
            node.update_lower_bound(reduction);
            if self.is_pruned(node.lower_bound()) {
                return;
            }

            let Some(NewVertex { coordinates, cost }) = node.choose_new_vertex() else {
                // no zero left: the residual problem admits no circuit
                return;
            };

            let right_bound = node.lower_bound().saturating_add(cost);
            let right_branch = if self.is_pruned(right_bound) {
                None
            } else {
                Some((node.matrix().clone(), node.unsorted_path().to_vec()))
            };

            node.append_to_path(coordinates);
            node.update_cost_matrix(coordinates);

            if let Some((matrix, path)) = right_branch {
                self.fringe.push(create_right_branch_matrix(matrix, path, coordinates, right_bound));
            }
        }

        if node.is_terminal() && !self.is_pruned(node.lower_bound()) {
            self.maybe_record(node);
        }
    }

    /// Completes the circuit of a terminal node and records it if it is at
    /// least as good as the best known bound.
    fn maybe_record(&mut self, mut node: StageState) {
        let Some(path) = node.get_path() else {
            return;
        };
        let bound = node.lower_bound();
        if self.is_pruned(bound) {
            return;
        }

        let cost = self.matrix.path_cost(&path);
        debug_assert_eq!(cost, bound, "the bound of a complete circuit must be its exact cost");
        debug!("circuit of cost {cost} found after {} nodes", self.explored);

        self.best_lb = bound;
        self.solutions.push(TspSolution { cost, path });
    }
}

impl Solver for SequentialSolver<'_> {
    /// Applies the branch-and-bound algorithm (Little et al.) until the fringe
    /// is exhausted, then only keeps the circuits having the optimal cost.
    fn minimize(&mut self) -> Completion {
        self.initialize();

        while let Some(node) = self.fringe.pop() {
            self.explored += 1;
            self.process_one_node(node);
        }

        self.solutions = filter_solutions(std::mem::take(&mut self.solutions));
        let completion = Completion {
            best_value: self.best_value(),
            nb_optima: self.solutions.len(),
            explored: self.explored,
        };
        debug!("search complete: {completion:?}");
        completion
    }

    fn best_value(&self) -> Option<Cost> {
        self.solutions.iter().map(|s| s.cost).min()
    }

    fn best_solutions(&self) -> &[TspSolution] {
        &self.solutions
    }

    fn best_bound(&self) -> Cost {
        self.best_lb
    }

    fn set_primal(&mut self, bound: Cost) {
        if bound < self.best_lb {
            self.best_lb = bound;
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
