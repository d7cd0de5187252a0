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

//! This module provides the configuration of the solvers.

use derive_builder::Builder;

use crate::{Cost, INF};

/// This is how you configure the behavior of a solver, e.g.
/// if you only care about the optimal cost and one single optimal circuit.
///
/// # Example
/// ```
/// # use atsp::*;
/// let config = SolverConfigBuilder::default()
///     .all_optima(false)
///     .build()
///     .unwrap();
/// assert!(!config.all_optima);
/// assert_eq!(INF, config.initial_bound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct SolverConfig {
    /// This flag must be true (default) if you want the solver to report all
    /// the circuits having the optimal cost. When it is false, the search
    /// prunes every node that cannot strictly improve on the best circuit
    /// found so far and hence stops at the first optimal circuit.
    #[builder(default = "true")]
    pub all_optima: bool,
    /// The bound the search starts from (`INF` by default). Only the circuits
    /// whose cost does not exceed this bound are reported.
    #[builder(default = "INF")]
    pub initial_bound: Cost,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { all_optima: true, initial_bound: INF }
    }
}
