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

//! This module provides the implementation of a depth-first solver fringe

use crate::{Fringe, StageState};


/// The simplest fringe implementation you can think of: it is basically a
/// stack. The last node to be pushed is the first one to pop, which yields a
/// depth first exploration of the branch-and-bound tree.
///
/// # Note
/// This is the default type of fringe for the sequential solver. Hence, you
/// don't need to take any action in order to use the `LifoFringe`. Using
/// this fringe makes the order of the reported circuits fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct LifoFringe {
    stack: Vec<StageState>,
}
impl LifoFringe {
    pub fn new() -> Self {
        Self::default()
    }
}
impl Fringe for LifoFringe {
    fn push(&mut self, node: StageState) {
        self.stack.push(node)
    }

    fn pop(&mut self) -> Option<StageState> {
        self.stack.pop()
    }

    fn clear(&mut self) {
        self.stack.clear()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}


#[cfg(test)]
mod test_lifo_fringe {
    use crate::*;

    fn node(bound: Cost) -> StageState {
        let matrix = CostMatrix::try_from(vec![vec![INF, 1, 1], vec![1, INF, 1], vec![1, 1, INF]]).unwrap();
        StageState::with_path(matrix, vec![], bound)
    }

    // by default, it is empty
    #[test]
    fn by_default_it_is_empty() {
        let fringe = LifoFringe::new();
        assert!(fringe.is_empty());
        assert_eq!(0, fringe.len());
    }

    // when I push a node onto the fringe then the length increases
    #[test]
    fn when_i_push_a_node_onto_the_fringe_then_the_length_increases() {
        let mut fringe = LifoFringe::new();
        fringe.push(node(1));
        fringe.push(node(2));
        assert_eq!(2, fringe.len());
        assert!(!fringe.is_empty());
    }

    // when I pop a node off the fringe then the length decreases
    #[test]
    fn when_i_pop_a_node_off_the_fringe_then_the_length_decreases() {
        let mut fringe = LifoFringe::new();
        fringe.push(node(1));
        fringe.push(node(2));
        fringe.pop();
        assert_eq!(1, fringe.len());
        fringe.pop();
        assert_eq!(0, fringe.len());
    }

    // when I try to pop a node off an empty fringe, I get none
    #[test]
    fn when_i_try_to_pop_a_node_off_an_empty_fringe_i_get_none() {
        let mut fringe = LifoFringe::new();
        assert!(fringe.pop().is_none());
    }

    // the last node in is the first one out, whatever its bound
    #[test]
    fn when_i_pop_a_node_it_is_always_the_last_one_pushed() {
        let mut fringe = LifoFringe::new();
        fringe.push(node(3));
        fringe.push(node(1));
        fringe.push(node(2));
        assert_eq!(2, fringe.pop().unwrap().lower_bound());
        assert_eq!(1, fringe.pop().unwrap().lower_bound());
        assert_eq!(3, fringe.pop().unwrap().lower_bound());
    }

    // when I clear a non empty fringe it becomes empty
    #[test]
    fn when_i_clear_a_non_empty_fringe_it_becomes_empty() {
        let mut fringe = LifoFringe::new();
        fringe.push(node(5));
        assert!(!fringe.is_empty());
        fringe.clear();
        assert!(fringe.is_empty());
    }
}
