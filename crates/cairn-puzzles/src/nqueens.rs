// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The N-Queens problem for local search.
//!
//! A state places exactly one queen per column and records only the row of
//! each queen, so the board is a length-`n` vector of row indices. A move
//! relocates one queen to a different row in its column, which makes every
//! state reachable from every other and keeps the neighborhood size at
//! `n·(n−1)`.
//!
//! The objective is the number of **non-attacking** queen pairs, maximized.
//! The optimum is `C(n,2)`: no pair shares a row or a diagonal. Column
//! conflicts cannot occur by construction.

use cairn_search::{Problem, ProblemValue};
use rand::Rng;
use smallvec::SmallVec;

/// N queens on an N×N board, one queen fixed to each column.
///
/// The value type `T` must be wide enough to hold `C(n,2)`; evaluation
/// panics otherwise. `i64` holds every practical board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NQueens {
    n: usize,
    initial: Vec<u8>,
}

impl NQueens {
    /// Creates an N-Queens instance with an explicit initial placement.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or exceeds 256, if `initial` does not hold
    /// exactly `n` rows, or if any row index is out of range.
    pub fn new(n: usize, initial: Vec<u8>) -> Self {
        assert!(
            n >= 1 && n <= 256,
            "called `NQueens::new` with unsupported board size {}",
            n
        );
        assert!(
            initial.len() == n,
            "called `NQueens::new` with {} rows for a {}-queens board",
            initial.len(),
            n
        );
        assert!(
            initial.iter().all(|&row| (row as usize) < n),
            "called `NQueens::new` with a row index outside the board"
        );
        Self { n, initial }
    }

    /// Creates an N-Queens instance with uniformly random rows.
    ///
    /// Each call produces a fresh initial state; the restart controller
    /// relies on this for independent restarts.
    pub fn random<R>(n: usize, rng: &mut R) -> Self
    where
        R: Rng,
    {
        assert!(
            n >= 1 && n <= 256,
            "called `NQueens::random` with unsupported board size {}",
            n
        );
        let initial = (0..n).map(|_| rng.gen_range(0..n) as u8).collect();
        Self { n, initial }
    }

    /// Returns the board size.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the total number of queen pairs, `C(n,2)`.
    #[inline]
    pub fn total_pairs(&self) -> u64 {
        let n = self.n as u64;
        n * (n - 1) / 2
    }

    /// Counts the queen pairs attacking each other in `state`.
    ///
    /// Two queens attack when they share a row or a diagonal; columns are
    /// distinct by construction.
    pub fn attacking_pairs(&self, state: &[u8]) -> u64 {
        debug_assert!(
            state.len() == self.n,
            "called `NQueens::attacking_pairs` with {} rows for a {}-queens board",
            state.len(),
            self.n
        );
        let mut attacking = 0;
        for i in 0..state.len() {
            for j in (i + 1)..state.len() {
                let (ri, rj) = (state[i] as i32, state[j] as i32);
                let col_diff = (j - i) as i32;
                if ri == rj || (ri - rj).abs() == col_diff {
                    attacking += 1;
                }
            }
        }
        attacking
    }

    /// Returns a display adapter rendering `state` as a board.
    #[inline]
    pub fn board<'a>(&self, state: &'a [u8]) -> QueensBoard<'a> {
        QueensBoard { n: self.n, state }
    }
}

impl<T> Problem<T> for NQueens
where
    T: ProblemValue,
{
    type State = Vec<u8>;
    type Action = (usize, u8);

    fn initial(&self) -> Vec<u8> {
        self.initial.clone()
    }

    fn actions(&self, state: &Vec<u8>) -> SmallVec<[(usize, u8); 8]> {
        let mut actions = SmallVec::with_capacity(self.n * (self.n - 1));
        for col in 0..self.n {
            for row in 0..self.n {
                let row = row as u8;
                if state[col] != row {
                    actions.push((col, row));
                }
            }
        }
        actions
    }

    fn result(&self, state: &Vec<u8>, action: &(usize, u8)) -> Vec<u8> {
        let (col, row) = *action;
        let mut next = state.clone();
        next[col] = row;
        next
    }

    fn goal_test(&self, state: &Vec<u8>) -> bool {
        self.attacking_pairs(state) == 0
    }

    fn value(&self, state: &Vec<u8>) -> T {
        let non_attacking = self.total_pairs() - self.attacking_pairs(state);
        T::from_u64(non_attacking).expect("non-attacking pair count does not fit the value type")
    }

    fn optimal_value(&self) -> Option<T> {
        T::from_u64(self.total_pairs())
    }
}

/// Renders a queen placement as an ASCII board, one rank per line.
#[derive(Debug, Clone, Copy)]
pub struct QueensBoard<'a> {
    n: usize,
    state: &'a [u8],
}

impl std::fmt::Display for QueensBoard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.n as u8 {
            for col in 0..self.n {
                let square = if self.state[col] == row { 'Q' } else { '.' };
                write!(f, "{}", square)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    type IntegerType = i64;

    #[test]
    fn test_all_same_row_attacks_every_pair() {
        let problem = NQueens::new(8, vec![0; 8]);
        assert_eq!(problem.attacking_pairs(&[0; 8]), 28);
        assert_eq!(Problem::<IntegerType>::value(&problem, &vec![0; 8]), 0);
    }

    #[test]
    fn test_known_solution_has_no_attacks() {
        // A classic 8-queens solution.
        let solution = vec![0u8, 4, 7, 5, 2, 6, 1, 3];
        let problem = NQueens::new(8, solution.clone());
        assert_eq!(problem.attacking_pairs(&solution), 0);
        assert!(Problem::<IntegerType>::goal_test(&problem, &solution));
        assert_eq!(
            Problem::<IntegerType>::value(&problem, &solution),
            Problem::<IntegerType>::optimal_value(&problem).unwrap()
        );
    }

    #[test]
    fn test_diagonal_attack_is_counted() {
        let problem = NQueens::new(4, vec![0, 1, 3, 0]);
        // (0,1) diagonal, (0,3) same row, (1,3) counter-diagonal.
        assert_eq!(problem.attacking_pairs(&[0, 1, 3, 0]), 3);
    }

    #[test]
    fn test_actions_move_each_queen_to_every_other_row() {
        let problem = NQueens::new(4, vec![0, 1, 2, 3]);
        let state = Problem::<IntegerType>::initial(&problem);
        let actions = Problem::<IntegerType>::actions(&problem, &state);
        assert_eq!(actions.len(), 4 * 3);
        assert!(actions.iter().all(|&(col, row)| state[col] != row));
    }

    #[test]
    fn test_result_moves_exactly_one_queen() {
        let problem = NQueens::new(4, vec![0, 1, 2, 3]);
        let state = vec![0u8, 1, 2, 3];
        let next = Problem::<IntegerType>::result(&problem, &state, &(2, 0));
        assert_eq!(next, vec![0, 1, 0, 3]);
        // The input state is untouched.
        assert_eq!(state, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_random_rows_are_in_range_and_reproducible() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let first = NQueens::random(8, &mut rng);
        assert!(first.initial.iter().all(|&row| (row as usize) < 8));

        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let second = NQueens::random(8, &mut rng);
        assert_eq!(first, second);
    }

    #[test]
    fn test_board_display() {
        let problem = NQueens::new(2, vec![1, 0]);
        let board = format!("{}", problem.board(&[1, 0]));
        assert_eq!(board, ".Q\nQ.\n");
    }
}
