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

//! This module provides the implementation of a best-first solver fringe
//! (priority queue)

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;

use crate::{Fringe, StageState};

/// The MinLB (minimum lower bound) strategy always selects the node having
/// the lowest lower bound in the fringe. In case of equalities, the deepest
/// node (the one with the most edges fixed) is preferred since it is closer
/// to a complete circuit.
///
/// # Note
/// The binary heap pops its *greatest* element. Hence a node compares
/// greater than an other one when it is more promising.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinLB;
impl Compare<StageState> for MinLB {
    fn compare(&self, l: &StageState, r: &StageState) -> Ordering {
        r.lower_bound().cmp(&l.lower_bound())
            .then_with(|| l.level().cmp(&r.level()))
    }
}

/// A fringe that consists of a binary heap ordered by `MinLB`. It tends to
/// explore fewer nodes than the `LifoFringe` on instances where the root
/// bound is tight, at the expense of memory since it keeps many more open
/// nodes around.
pub struct BestFirstFringe {
    heap: BinaryHeap<StageState, MinLB>
}
impl BestFirstFringe {
    pub fn new() -> Self {
        Self{ heap: BinaryHeap::from_vec_cmp(vec![], MinLB) }
    }
}
impl Default for BestFirstFringe {
    fn default() -> Self {
        Self::new()
    }
}
impl Fringe for BestFirstFringe {
    fn push(&mut self, node: StageState) {
        self.heap.push(node)
    }

    fn pop(&mut self) -> Option<StageState> {
        self.heap.pop()
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}


#[cfg(test)]
mod test_best_first_fringe {
    use std::cmp::Ordering;

    use compare::Compare;

    use crate::*;

    fn node(bound: Cost, level: usize) -> StageState {
        let matrix = CostMatrix::try_from(vec![vec![1; 4]; 4]).unwrap();
        let path = (0..level).map(|i| Vertex::new(i, i + 1)).collect();
        StageState::with_path(matrix, path, bound)
    }

    #[test]
    fn by_default_it_is_empty() {
        let fringe = BestFirstFringe::default();
        assert!(fringe.is_empty());
    }

    #[test]
    fn when_i_push_and_pop_the_length_follows() {
        let mut fringe = BestFirstFringe::new();
        fringe.push(node(1, 0));
        fringe.push(node(2, 0));
        assert_eq!(2, fringe.len());
        fringe.pop();
        assert_eq!(1, fringe.len());
    }

    #[test]
    fn when_i_try_to_pop_a_node_off_an_empty_fringe_i_get_none() {
        let mut fringe = BestFirstFringe::new();
        assert!(fringe.pop().is_none());
    }

    // when I pop a node, it is always the one with the lowest bound (then the deepest)
    #[test]
    fn when_i_pop_a_node_it_is_always_the_one_with_the_lowest_bound_then_deepest() {
        let mut fringe = BestFirstFringe::new();
        fringe.push(node(30, 0));
        fringe.push(node(10, 0));
        fringe.push(node(20, 1));
        fringe.push(node(10, 2));
        fringe.push(node(40, 2));

        let a = fringe.pop().unwrap();
        assert_eq!((10, 2), (a.lower_bound(), a.level()));
        let b = fringe.pop().unwrap();
        assert_eq!((10, 0), (b.lower_bound(), b.level()));
        assert_eq!(20, fringe.pop().unwrap().lower_bound());
        assert_eq!(30, fringe.pop().unwrap().lower_bound());
        assert_eq!(40, fringe.pop().unwrap().lower_bound());
        assert!(fringe.is_empty());
    }

    #[test]
    fn when_i_clear_a_non_empty_fringe_it_becomes_empty() {
        let mut fringe = BestFirstFringe::new();
        fringe.push(node(5, 0));
        fringe.clear();
        assert!(fringe.is_empty());
    }

    #[test]
    fn gt_because_lower_bound() {
        assert_eq!(Ordering::Greater, MinLB.compare(&node(1, 0), &node(2, 2)));
        assert_eq!(Ordering::Less, MinLB.compare(&node(3, 2), &node(2, 0)));
    }
    #[test]
    fn gt_because_level() {
        assert_eq!(Ordering::Greater, MinLB.compare(&node(1, 2), &node(1, 1)));
        assert_eq!(Ordering::Equal, MinLB.compare(&node(1, 1), &node(1, 1)));
    }
}
