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

//! This module provides the nodes of the branch-and-bound tree. Each node
//! owns its very own snapshot of the cost matrix so that sibling nodes can
//! evolve independently after a branching decision.

use crate::{is_inf, Cost, CostMatrix, NewVertex, Path, Vertex, INF};

/// One node of the branch-and-bound search tree.
///
/// A stage state is made of the (reduced) cost matrix of the residual
/// problem, the edges that have been fixed so far (in the order they were
/// selected, not in the order of the tour) and a lower bound on the cost of
/// any circuit that extends these edges.
///
/// The invariant maintained by all operations is that, for any circuit `T`
/// which uses all the selected edges, `cost(T) = lower_bound + sum of the
/// cells of the current matrix on the remaining edges of T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageState {
    matrix: CostMatrix,
    unsorted_path: Vec<Vertex>,
    lower_bound: Cost,
}

impl StageState {
    /// Creates the root node of the search
    pub fn new(matrix: CostMatrix) -> Self {
        Self::with_path(matrix, vec![], 0)
    }
    /// Creates a node with the given selected edges and lower bound
    pub fn with_path(matrix: CostMatrix, unsorted_path: Vec<Vertex>, lower_bound: Cost) -> Self {
        Self { matrix, unsorted_path, lower_bound }
    }

    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }
    pub fn unsorted_path(&self) -> &[Vertex] {
        &self.unsorted_path
    }
    pub fn lower_bound(&self) -> Cost {
        self.lower_bound
    }
    /// The number of edges that have been fixed so far
    pub fn level(&self) -> usize {
        self.unsorted_path.len()
    }
    /// A node is terminal when only a 2x2 residual problem remains
    pub fn is_terminal(&self) -> bool {
        self.level() + 2 >= self.matrix.size()
    }

    pub fn reset_lower_bound(&mut self) {
        self.lower_bound = 0;
    }
    pub fn update_lower_bound(&mut self, delta: Cost) {
        self.lower_bound = self.lower_bound.saturating_add(delta);
    }

    /// Reduces the rows and then the columns of the matrix. Returns the total
    /// amount that has been subtracted; the caller is responsible for folding
    /// it into the lower bound.
    pub fn reduce_cost_matrix(&mut self) -> Cost {
        let rows = self.matrix.reduce_rows();
        let cols = self.matrix.reduce_cols();
        rows.saturating_add(cols)
    }

    /// Scans the matrix in row-major order and returns the zero cell whose
    /// exclusion costs the most. Ties are broken in favor of the first cell
    /// encountered. There is no such cell when the residual problem admits
    /// no circuit.
    pub fn choose_new_vertex(&self) -> Option<NewVertex> {
        let n = self.matrix.size();
        let mut best: Option<NewVertex> = None;
        for row in 0..n {
            for col in 0..n {
                if self.matrix[row][col] != 0 {
                    continue;
                }
                let cost = self.matrix.get_vertex_cost(row, col);
                if best.map_or(true, |b| cost > b.cost) {
                    best = Some(NewVertex::new(Vertex::new(row, col), cost));
                }
            }
        }
        best
    }

    /// Records the selection of edge `v` and folds its current cost into the
    /// lower bound.
    pub fn append_to_path(&mut self, v: Vertex) {
        self.update_lower_bound(self.matrix[v.row][v.col]);
        self.unsorted_path.push(v);
    }

    /// Commits the inclusion of edge `v` in the matrix: no other edge may
    /// leave `v.row` nor enter `v.col`. The edge that would close the chain
    /// of selected edges going through `v` into a sub-cycle is forbidden, so
    /// is the direct reverse of `v`.
    pub fn update_cost_matrix(&mut self, v: Vertex) {
        let n = self.matrix.size();
        self.matrix.forbid_row(v.row);
        self.matrix.forbid_col(v.col);

        let (mut succ, mut pred) = self.links();
        succ[v.row] = Some(v.col);
        pred[v.col] = Some(v.row);

        let mut edges = 1;
        let mut head = v.row;
        while let Some(p) = pred[head] {
            assert!(edges < n, "the selected edges contain a cycle");
            head = p;
            edges += 1;
        }
        let mut tail = v.col;
        while let Some(s) = succ[tail] {
            assert!(edges < n, "the selected edges contain a cycle");
            tail = s;
            edges += 1;
        }
        // a chain of `edges` edges spans `edges + 1` cities
        if edges + 1 < n {
            self.matrix[tail][head] = INF;
        }
        self.matrix[v.col][v.row] = INF;
    }

    /// Completes the circuit of a terminal node and returns it as the
    /// sequence of cities visited from city 0.
    ///
    /// The two cities still lacking a successor are connected to the two
    /// cities still lacking a predecessor. Out of the two possible ways to do
    /// so, the one whose cells are finite and which yields one single circuit
    /// is retained; its cost is folded into the lower bound which then equals
    /// the exact cost of the circuit. `None` is returned when no such
    /// completion exists.
    pub fn get_path(&mut self) -> Option<Path> {
        let n = self.matrix.size();
        let (succ, pred) = self.links();
        let rows = (0..n).filter(|r| succ[*r].is_none()).collect::<Vec<_>>();
        let cols = (0..n).filter(|c| pred[*c].is_none()).collect::<Vec<_>>();
        if rows.len() != 2 || cols.len() != 2 {
            return None;
        }

        for (a, b) in [(cols[0], cols[1]), (cols[1], cols[0])] {
            let last = [Vertex::new(rows[0], a), Vertex::new(rows[1], b)];
            if last.iter().any(|v| is_inf(self.matrix[v.row][v.col])) {
                continue;
            }
            let mut links = succ.clone();
            for v in last.iter() {
                links[v.row] = Some(v.col);
            }
            if let Some(path) = circuit_from(&links) {
                for v in last {
                    self.append_to_path(v);
                    self.matrix.forbid_row(v.row);
                    self.matrix.forbid_col(v.col);
                }
                return Some(path);
            }
        }
        None
    }

    /// The successor and predecessor of each city as per the selected edges
    fn links(&self) -> (Vec<Option<usize>>, Vec<Option<usize>>) {
        let n = self.matrix.size();
        let mut succ = vec![None; n];
        let mut pred = vec![None; n];
        for v in self.unsorted_path.iter() {
            succ[v.row] = Some(v.col);
            pred[v.col] = Some(v.row);
        }
        (succ, pred)
    }
}

/// Follows the links from city 0. Returns the visited cities iff they form
/// one single circuit covering all cities.
fn circuit_from(succ: &[Option<usize>]) -> Option<Path> {
    let n = succ.len();
    let mut path = Vec::with_capacity(n);
    let mut current = 0;
    for _ in 0..n {
        if path.contains(&current) {
            return None;
        }
        path.push(current);
        current = succ[current]?;
    }
    if current == 0 {
        Some(path)
    } else {
        None
    }
}

/// Creates the sibling branch of a node in which the edge `v` is excluded.
///
/// The branch is built from the `matrix` of the parent node as it was
/// *before* `v` got committed (the include branch keeps on reducing its own
/// copy), with `unsorted_path` being the edges the parent had selected at the
/// time. The new node is seeded with the given `lower_bound`, which is
/// expected to be the parent bound plus the exclusion cost of `v`.
///
/// The matrix of the new node is reduced right away: since the parent matrix
/// is reduced, this reduction amounts to the exclusion cost of `v` which is
/// already accounted for in the seeded bound.
pub fn create_right_branch_matrix(matrix: CostMatrix, unsorted_path: Vec<Vertex>, v: Vertex, lower_bound: Cost) -> StageState {
    let mut matrix = matrix;
    let exclusion = matrix.get_vertex_cost(v.row, v.col);
    matrix[v.row][v.col] = INF;
    let mut branch = StageState::with_path(matrix, unsorted_path, lower_bound);
    let reduction = branch.reduce_cost_matrix();
    debug_assert!(is_inf(exclusion) || reduction == exclusion,
        "excluding {v:?} reduced the matrix by {reduction} instead of {exclusion}");
    branch
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_stage_state {
    use crate::{create_right_branch_matrix, CostMatrix, NewVertex, StageState, Vertex, INF};

    fn example() -> StageState {
        StageState::new(CostMatrix::try_from(vec![
            vec![INF, 10, 15, 20],
            vec![  5, INF, 9, 10],
            vec![  6, 13, INF, 12],
            vec![  8,  8,  9, INF],
        ]).unwrap())
    }

    #[test]
    fn the_root_has_level_zero_and_a_null_bound() {
        let root = example();
        assert_eq!(0, root.level());
        assert_eq!(0, root.lower_bound());
        assert!(!root.is_terminal());
    }
    #[test]
    fn reduce_cost_matrix_sums_row_and_col_reductions() {
        let mut root = example();
        assert_eq!(35, root.reduce_cost_matrix());
        // the bound is not touched
        assert_eq!(0, root.lower_bound());
    }
    #[test]
    fn update_and_reset_lower_bound() {
        let mut root = example();
        root.update_lower_bound(12);
        root.update_lower_bound(3);
        assert_eq!(15, root.lower_bound());
        root.reset_lower_bound();
        assert_eq!(0, root.lower_bound());
    }
    #[test]
    fn update_lower_bound_saturates_at_inf() {
        let mut root = example();
        root.update_lower_bound(5);
        root.update_lower_bound(INF);
        assert_eq!(INF, root.lower_bound());
    }

    #[test]
    fn choose_new_vertex_picks_the_zero_with_the_max_exclusion_cost() {
        let mut root = example();
        root.reduce_cost_matrix();
        assert_eq!(Some(NewVertex::new(Vertex::new(0, 1), 4)), root.choose_new_vertex());
    }
    #[test]
    fn choose_new_vertex_breaks_ties_in_row_major_order() {
        let mut state = StageState::new(CostMatrix::try_from(vec![
            vec![INF, 1, 1],
            vec![  1, INF, 1],
            vec![  1, 1, INF],
        ]).unwrap());
        state.reduce_cost_matrix();
        // all zeros have the same exclusion cost
        assert_eq!(Some(NewVertex::new(Vertex::new(0, 1), 0)), state.choose_new_vertex());
    }
    #[test]
    fn choose_new_vertex_yields_none_when_there_is_no_zero() {
        let root = example();
        assert_eq!(None, root.choose_new_vertex());
    }

    #[test]
    fn append_to_path_records_the_edge_and_its_cost() {
        let mut root = example();
        root.append_to_path(Vertex::new(2, 3));
        assert_eq!(&[Vertex::new(2, 3)], root.unsorted_path());
        assert_eq!(12, root.lower_bound());
        assert_eq!(1, root.level());
    }

    #[test]
    fn update_cost_matrix_forbids_row_col_and_reverse_edge() {
        let mut root = example();
        root.reduce_cost_matrix();
        let v = Vertex::new(0, 1);
        root.append_to_path(v);
        root.update_cost_matrix(v);

        let m = root.matrix();
        assert!(m[0].iter().all(|c| *c == INF));
        assert!((0..4).all(|r| m[r][1] == INF));
        assert_eq!(INF, m[1][0]);
        assert_eq!(&[INF, INF, 3, 0], &m[1]);
        assert_eq!(&[0, INF, INF, 1], &m[2]);
        assert_eq!(&[0, INF, 0, INF], &m[3]);
    }
    #[test]
    fn update_cost_matrix_forbids_closing_a_long_chain() {
        // 0 -> 1 -> 2 and then 2 -> 3: the edge 3 -> 0 must be forbidden
        let mut state = StageState::new(CostMatrix::try_from(vec![vec![1; 6]; 6]).unwrap());
        for v in [Vertex::new(0, 1), Vertex::new(1, 2), Vertex::new(2, 3)] {
            state.append_to_path(v);
            state.update_cost_matrix(v);
        }
        let m = state.matrix();
        assert_eq!(INF, m[3][0]);
        assert_eq!(1, m[3][4]);
        assert_eq!(1, m[4][0]);
    }
    #[test]
    fn update_cost_matrix_forbids_closing_merged_chains() {
        // 0 -> 1 and 2 -> 3 get merged by 1 -> 2: 3 -> 0 must be forbidden
        let mut state = StageState::new(CostMatrix::try_from(vec![vec![1; 6]; 6]).unwrap());
        for v in [Vertex::new(0, 1), Vertex::new(2, 3), Vertex::new(1, 2)] {
            state.append_to_path(v);
            state.update_cost_matrix(v);
        }
        let m = state.matrix();
        assert_eq!(INF, m[3][0]);
        assert_eq!(1, m[3][5]);
        assert_eq!(1, m[5][0]);
    }

    #[test]
    fn get_path_reconstructs_the_circuit_from_city_zero() {
        let mut state = example();
        state.reduce_cost_matrix();
        for v in [Vertex::new(0, 1), Vertex::new(1, 3)] {
            state.append_to_path(v);
            state.update_cost_matrix(v);
        }
        assert!(state.is_terminal());
        assert_eq!(Some(vec![0, 1, 3, 2]), state.get_path());
        assert_eq!(4, state.level());
    }
    #[test]
    fn get_path_folds_the_last_edges_into_the_bound() {
        let mut state = example();
        let v = Vertex::new(0, 2);
        state.append_to_path(v);
        state.update_cost_matrix(v);
        let v = Vertex::new(2, 3);
        state.append_to_path(v);
        state.update_cost_matrix(v);
        // 0 -> 2 -> 3 -> 1 -> 0 costs 15 + 12 + 8 + 5
        assert_eq!(Some(vec![0, 2, 3, 1]), state.get_path());
        assert_eq!(40, state.lower_bound());
    }
    #[test]
    fn get_path_fails_when_the_completion_is_forbidden() {
        let mut state = example();
        let v = Vertex::new(0, 1);
        state.append_to_path(v);
        state.update_cost_matrix(v);
        let v = Vertex::new(1, 2);
        state.append_to_path(v);
        state.update_cost_matrix(v);
        // the only completion is 2 -> 3 -> 0
        let mut m = state.matrix().clone();
        m[2][3] = INF;
        let mut state = StageState::with_path(m, state.unsorted_path().to_vec(), state.lower_bound());
        assert_eq!(None, state.get_path());
    }
    #[test]
    fn get_path_of_two_cities_is_the_trivial_circuit() {
        let mut state = StageState::new(CostMatrix::try_from(vec![vec![INF, 7], vec![7, INF]]).unwrap());
        assert!(state.is_terminal());
        assert_eq!(Some(vec![0, 1]), state.get_path());
        assert_eq!(14, state.lower_bound());
    }

    #[test]
    fn right_branch_excludes_the_vertex_and_keeps_the_parent_path() {
        let mut state = example();
        state.reduce_cost_matrix();
        let parent = state.matrix().clone();
        let branch = create_right_branch_matrix(parent, vec![], Vertex::new(0, 1), 35 + 4);
        assert_eq!(INF, branch.matrix()[0][1]);
        assert_eq!(39, branch.lower_bound());
        assert_eq!(0, branch.level());
    }
    #[test]
    fn right_branch_matrix_is_already_reduced() {
        let mut state = example();
        state.reduce_cost_matrix();
        let parent = state.matrix().clone();
        let mut branch = create_right_branch_matrix(parent, vec![], Vertex::new(0, 1), 39);
        assert_eq!(0, branch.reduce_cost_matrix());
    }
    #[test]
    fn right_branch_can_exclude_any_zero_of_a_reduced_matrix() {
        let mut state = StageState::new(CostMatrix::try_from(vec![
            vec![INF, 3, 9, 2, 7],
            vec![4, INF, 1, 8, 6],
            vec![5, 2, INF, 4, 3],
            vec![9, 7, 3, INF, 1],
            vec![2, 6, 5, 8, INF],
        ]).unwrap());
        let bound = state.reduce_cost_matrix();
        let m = state.matrix().clone();
        for row in 0..5 {
            for col in 0..5 {
                if m[row][col] != 0 {
                    continue;
                }
                let exclusion = m.get_vertex_cost(row, col);
                let mut branch = create_right_branch_matrix(m.clone(), vec![], Vertex::new(row, col), bound + exclusion);
                assert_eq!(bound + exclusion, branch.lower_bound());
                assert_eq!(0, branch.reduce_cost_matrix());
            }
        }
    }
    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn right_branch_of_an_unreduced_matrix_is_detected() {
        let state = example();
        create_right_branch_matrix(state.matrix().clone(), vec![], Vertex::new(0, 1), 0);
    }
    #[test]
    fn right_branch_reduction_amounts_to_the_exclusion_cost() {
        let mut state = example();
        state.reduce_cost_matrix();
        let NewVertex { coordinates, cost } = state.choose_new_vertex().unwrap();
        let mut matrix = state.matrix().clone();
        matrix[coordinates.row][coordinates.col] = INF;
        let mut excluded = StageState::new(matrix);
        assert_eq!(cost, excluded.reduce_cost_matrix());
    }
}
