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

//! Steepest-ascent hill climbing.
//!
//! This module provides the classic best-improvement climber: every
//! iteration evaluates the full neighborhood of the current state and moves
//! to the single highest-valued neighbor, stopping as soon as that neighbor
//! fails to strictly improve on the current value. The approach is
//! deterministic for a fixed problem and evaluation order, and it reaches a
//! local optimum quickly at the price of evaluating the whole branching
//! factor on every step.
//!
//! The acceptance rule compares the best candidate and the current value
//! and proceeds only when the candidate is strictly better. Equal-valued
//! moves are not accepted in order to avoid random walks on plateaus; this
//! keeps the method simple and guarantees termination, since the value
//! strictly increases on every move and the reachable state space is
//! finite. Terminating far from the goal is the expected failure mode of
//! hill climbing, not an error; the caller checks `goal_test` or `value`.

use crate::{
    result::{LocalSearchOutcome, LocalSearchTermination},
    stats::LocalSearchStatistics,
    strategy::LocalSearchStrategy,
};
use cairn_search::{NodeArena, Problem, ProblemValue};
use std::time::Instant;

/// Steepest-ascent hill climbing (best improvement).
///
/// # Attributes
/// * **Acceptance:** strict improvement by the best neighbor.
/// * **Termination:** local optimum or dead end.
/// * **Search cost:** total neighbors examined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SteepestAscent;

impl SteepestAscent {
    /// Creates a new `SteepestAscent` strategy.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T, P> LocalSearchStrategy<T, P> for SteepestAscent
where
    T: ProblemValue,
    P: Problem<T>,
{
    fn name(&self) -> &str {
        "SteepestAscent"
    }

    fn search(&mut self, problem: &P) -> LocalSearchOutcome<P::State, T> {
        let start_time = Instant::now();
        let mut stats = LocalSearchStatistics::default();
        let mut arena = NodeArena::<P::State, T>::new();

        let mut current = arena.push_root(problem.initial());
        let mut current_value = problem.value(arena.node(current).state());

        let termination = loop {
            let children = arena.expand(problem, current);
            stats.on_expansion();

            if children.is_empty() {
                break LocalSearchTermination::DeadEnd;
            }
            stats.on_neighbors_examined(children.len() as u64);

            // Best neighbor, first found winning ties.
            let mut best = children[0];
            let mut best_value = problem.value(arena.node(best).state());
            for &child in children.iter().skip(1) {
                let child_value = problem.value(arena.node(child).state());
                if child_value > best_value {
                    best = child;
                    best_value = child_value;
                }
            }

            if best_value <= current_value {
                break LocalSearchTermination::LocalOptimum;
            }

            current = best;
            current_value = best_value;
            stats.on_move();
        };

        stats.set_total_time(start_time.elapsed());
        let search_cost = stats.neighbors_examined;
        LocalSearchOutcome::new(
            termination,
            arena.node(current).state().clone(),
            current_value,
            search_cost,
            stats,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_puzzles::{EightPuzzle, NQueens};
    use smallvec::{smallvec, SmallVec};

    type IntegerType = i64;

    /// Walks towards `summit` in steps of one; every other state has two
    /// neighbors, one closer and one further away.
    struct RidgeProblem {
        start: i64,
        summit: i64,
    }

    impl Problem<IntegerType> for RidgeProblem {
        type State = i64;
        type Action = i64;

        fn initial(&self) -> i64 {
            self.start
        }

        fn actions(&self, _state: &i64) -> SmallVec<[i64; 8]> {
            smallvec![-1, 1]
        }

        fn result(&self, state: &i64, action: &i64) -> i64 {
            state + action
        }

        fn goal_test(&self, state: &i64) -> bool {
            *state == self.summit
        }

        fn value(&self, state: &i64) -> IntegerType {
            -(state - self.summit).abs()
        }

        fn optimal_value(&self) -> Option<IntegerType> {
            Some(0)
        }
    }

    #[test]
    fn test_climbs_to_the_summit() {
        let problem = RidgeProblem {
            start: 3,
            summit: 10,
        };
        let outcome = SteepestAscent::new().search(&problem);

        assert_eq!(*outcome.state(), 10);
        assert_eq!(*outcome.value(), 0);
        assert_eq!(outcome.termination(), LocalSearchTermination::LocalOptimum);
        // Seven moves uphill, two neighbors examined per expansion,
        // including the final expansion that found no improvement.
        assert_eq!(outcome.statistics().moves, 7);
        assert_eq!(outcome.search_cost(), 8 * 2);
    }

    #[test]
    fn test_value_never_decreases_across_moves() {
        let problem = NQueens::new(8, vec![0; 8]);
        let initial_value: IntegerType =
            Problem::<IntegerType>::value(&problem, &Problem::<IntegerType>::initial(&problem));
        let outcome: LocalSearchOutcome<_, IntegerType> = SteepestAscent::new().search(&problem);

        // Strict ascent: the final value dominates the initial one, and a
        // board with every pair attacking always has an improving move.
        assert!(*outcome.value() > initial_value);
        assert!(outcome.statistics().moves >= 1);
    }

    #[test]
    fn test_goal_state_is_an_immediate_local_optimum() {
        let puzzle = EightPuzzle::new(EightPuzzle::DEFAULT_GOAL);
        let outcome: LocalSearchOutcome<_, IntegerType> = SteepestAscent::new().search(&puzzle);

        assert_eq!(*outcome.state(), EightPuzzle::DEFAULT_GOAL);
        assert_eq!(*outcome.value(), 0);
        assert_eq!(outcome.termination(), LocalSearchTermination::LocalOptimum);
        assert_eq!(outcome.statistics().moves, 0);
        // One expansion of the goal's two neighbors sufficed.
        assert_eq!(outcome.statistics().expansions, 1);
    }

    #[test]
    fn test_dead_end_terminates_without_moving() {
        struct IsolatedProblem;

        impl Problem<IntegerType> for IsolatedProblem {
            type State = u8;
            type Action = u8;

            fn initial(&self) -> u8 {
                7
            }

            fn actions(&self, _state: &u8) -> SmallVec<[u8; 8]> {
                SmallVec::new()
            }

            fn result(&self, state: &u8, _action: &u8) -> u8 {
                *state
            }

            fn goal_test(&self, _state: &u8) -> bool {
                false
            }

            fn value(&self, _state: &u8) -> IntegerType {
                0
            }
        }

        let outcome = SteepestAscent::new().search(&IsolatedProblem);
        assert_eq!(*outcome.state(), 7);
        assert_eq!(outcome.termination(), LocalSearchTermination::DeadEnd);
        assert_eq!(outcome.search_cost(), 0);
    }

    #[test]
    fn test_strategy_name() {
        let strategy = SteepestAscent::new();
        assert_eq!(
            LocalSearchStrategy::<IntegerType, RidgeProblem>::name(&strategy),
            "SteepestAscent"
        );
    }
}
