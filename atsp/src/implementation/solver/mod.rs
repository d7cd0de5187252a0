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

//! This module provide the solver implementation.
mod config;
mod sequential;

pub use config::*;
pub use sequential::*;

use crate::{Cost, CostMatrix, Error, LifoFringe, Solver, TspSolutions};

/// Solves the TSP instance whose cost matrix is given and returns all its
/// optimal circuits, in the order they were discovered. This is the
/// sequential solver with a depth-first (`LifoFringe`) exploration and the
/// default configuration.
///
/// # Example
/// ```
/// # use atsp::*;
/// let solutions = solve_tsp(vec![
///     vec![INF, 10, 15, 20],
///     vec![  5, INF, 9, 10],
///     vec![  6, 13, INF, 12],
///     vec![  8,  8,  9, INF],
/// ]).unwrap();
///
/// assert_eq!(1, solutions.len());
/// assert_eq!(35, solutions[0].cost);
/// assert_eq!(vec![0, 1, 3, 2], solutions[0].path);
/// ```
pub fn solve_tsp(costs: Vec<Vec<Cost>>) -> Result<TspSolutions, Error> {
    let matrix = CostMatrix::try_from(costs)?;
    let mut fringe = LifoFringe::new();
    let mut solver = SequentialSolver::new(&matrix, &mut fringe);
    solver.minimize();
    Ok(solver.into_solutions())
}

/// Retains only the optimal circuits out of all those that have been
/// recorded. The circuits that were recorded before the best bound improved
/// are stale and get discarded. The relative order is preserved.
pub fn filter_solutions(solutions: TspSolutions) -> TspSolutions {
    let optimal_cost = solutions.iter().map(|s| s.cost).min();
    match optimal_cost {
        None => solutions,
        Some(best) => solutions.into_iter().filter(|s| s.cost == best).collect(),
    }
}

#[cfg(test)]
mod test_solve {
    use crate::{filter_solutions, solve_tsp, Cost, Error, TspSolution, INF};

    #[test]
    fn filter_keeps_only_the_cheapest_circuits_in_order() {
        let sols = vec![
            TspSolution { cost: 40, path: vec![0, 2, 3, 1] },
            TspSolution { cost: 35, path: vec![0, 1, 3, 2] },
            TspSolution { cost: 39, path: vec![0, 1, 2, 3] },
            TspSolution { cost: 35, path: vec![0, 2, 3, 1] },
        ];
        let kept = filter_solutions(sols);
        assert_eq!(2, kept.len());
        assert_eq!(vec![0, 1, 3, 2], kept[0].path);
        assert_eq!(vec![0, 2, 3, 1], kept[1].path);
    }
    #[test]
    fn filter_of_nothing_is_nothing() {
        assert!(filter_solutions(vec![]).is_empty());
    }

    #[test]
    fn solve_tsp_finds_the_optimal_circuit() {
        let sols = solve_tsp(vec![
            vec![INF, 10, 15, 20],
            vec![  5, INF, 9, 10],
            vec![  6, 13, INF, 12],
            vec![  8,  8,  9, INF],
        ]).unwrap();
        assert_eq!(vec![TspSolution { cost: 35, path: vec![0, 1, 3, 2] }], sols);
    }
    #[test]
    fn solve_tsp_of_two_cities_is_the_trivial_circuit() {
        let sols = solve_tsp(vec![vec![INF, 6], vec![6, INF]]).unwrap();
        assert_eq!(vec![TspSolution { cost: 12, path: vec![0, 1] }], sols);
    }
    #[test]
    fn solve_tsp_rejects_ill_formed_matrices() {
        assert_eq!(Err(Error::TooFewCities(1)), solve_tsp(vec![vec![INF]]));
        assert_eq!(
            Err(Error::NotSquare { row: 0, len: 3, expected: 2 }),
            solve_tsp(vec![vec![INF, 1, 2], vec![1, INF]]));
        assert_eq!(
            Err(Error::NegativeCost { row: 1, col: 0, cost: -1 }),
            solve_tsp(vec![vec![INF, 1], vec![-1, INF]]));
        assert_eq!(
            Err(Error::CostOverflow { n: 2, max: INF - 1 }),
            solve_tsp(vec![vec![INF, INF - 1], vec![INF - 1, INF]]));
    }
    #[test]
    fn solve_tsp_handles_the_largest_accepted_costs() {
        let big = Cost::MAX / 3;
        let sols = solve_tsp(vec![
            vec![INF, big, big],
            vec![big, INF, big],
            vec![big, big, INF],
        ]).unwrap();
        assert_eq!(2, sols.len());
        assert!(sols.iter().all(|s| s.cost == 3 * big));
    }
}
