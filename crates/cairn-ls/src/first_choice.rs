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

//! First-choice hill climbing.
//!
//! This module provides the sampling climber: instead of evaluating the
//! whole neighborhood on every step, it draws one neighbor uniformly at
//! random and adopts it as soon as it strictly improves on the current
//! value. The neighborhood is re-generated on each attempt, so the cost of
//! a step is one expansion plus one evaluation, traded against possibly
//! many repeated samples. On plateaus no sample ever improves, so the
//! attempt counter is capped to guarantee termination.
//!
//! A neighbor is sampled by drawing an action uniformly; actions and
//! neighbors correspond one-to-one through `Problem::result`, so the
//! distribution over neighbors is the same while only adopted moves are
//! materialized in the node arena. The search cost counts expansions, not
//! samples that were discarded inside one expansion; each attempt
//! triggers a fresh expansion and therefore increments the cost.

use crate::{
    result::{LocalSearchOutcome, LocalSearchTermination},
    stats::LocalSearchStatistics,
    strategy::LocalSearchStrategy,
};
use cairn_search::{NodeArena, Problem, ProblemValue};
use rand::Rng;
use std::time::Instant;

/// First-choice hill climbing with uniform neighbor sampling.
///
/// Holds its random-number generator by value; inject a seeded generator
/// for reproducible runs.
///
/// # Attributes
/// * **Acceptance:** strict improvement by a uniformly sampled neighbor.
/// * **Termination:** attempt limit, dead end, or goal-satisfying start.
/// * **Search cost:** number of expansions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstChoice<R> {
    rng: R,
    attempt_limit: u64,
}

impl<R> FirstChoice<R> {
    /// The attempt budget used by `with_default_limit`.
    pub const DEFAULT_ATTEMPT_LIMIT: u64 = 100_000;

    /// Creates a new `FirstChoice` strategy.
    ///
    /// # Panics
    ///
    /// Panics if `attempt_limit` is zero.
    pub fn new(rng: R, attempt_limit: u64) -> Self {
        assert!(
            attempt_limit > 0,
            "called `FirstChoice::new` with a zero attempt limit"
        );
        Self { rng, attempt_limit }
    }

    /// Creates a new `FirstChoice` strategy with the default attempt
    /// budget.
    #[inline]
    pub fn with_default_limit(rng: R) -> Self {
        Self::new(rng, Self::DEFAULT_ATTEMPT_LIMIT)
    }

    /// Returns the attempt budget.
    #[inline]
    pub fn attempt_limit(&self) -> u64 {
        self.attempt_limit
    }
}

impl<T, P, R> LocalSearchStrategy<T, P> for FirstChoice<R>
where
    T: ProblemValue,
    P: Problem<T>,
    R: Rng + Send + Sync,
{
    fn name(&self) -> &str {
        "FirstChoice"
    }

    fn search(&mut self, problem: &P) -> LocalSearchOutcome<P::State, T> {
        let start_time = Instant::now();
        let mut stats = LocalSearchStatistics::default();
        let mut arena = NodeArena::<P::State, T>::new();

        let mut current = arena.push_root(problem.initial());
        let mut current_value = problem.value(arena.node(current).state());

        // A start that already satisfies the goal needs no sampling.
        if problem.goal_test(arena.node(current).state()) {
            stats.set_total_time(start_time.elapsed());
            return LocalSearchOutcome::new(
                LocalSearchTermination::LocalOptimum,
                arena.node(current).state().clone(),
                current_value,
                0,
                stats,
            );
        }

        let termination = 'outer: loop {
            let mut attempts = 0;
            let mut improved = false;

            while attempts < self.attempt_limit {
                let state = arena.node(current).state().clone();
                let actions = problem.actions(&state);
                stats.on_expansion();

                if actions.is_empty() {
                    break 'outer LocalSearchTermination::DeadEnd;
                }

                let action = &actions[self.rng.gen_range(0..actions.len())];
                let candidate = problem.result(&state, action);
                let candidate_value = problem.value(&candidate);
                stats.on_neighbors_examined(1);

                if candidate_value > current_value {
                    current = arena.push_child(current, candidate, T::zero(), T::zero(), T::zero());
                    current_value = candidate_value;
                    stats.on_move();
                    improved = true;
                    break;
                }

                attempts += 1;
            }

            if !improved {
                break LocalSearchTermination::AttemptLimit;
            }
        };

        stats.set_total_time(start_time.elapsed());
        let search_cost = stats.expansions;
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
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use smallvec::{smallvec, SmallVec};

    type IntegerType = i64;

    /// Every state has one uphill and one downhill neighbor until the
    /// summit, where both neighbors are downhill.
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
    }

    /// A flat landscape: every neighbor has the same value.
    struct PlateauProblem;

    impl Problem<IntegerType> for PlateauProblem {
        type State = i64;
        type Action = i64;

        fn initial(&self) -> i64 {
            0
        }

        fn actions(&self, _state: &i64) -> SmallVec<[i64; 8]> {
            smallvec![-1, 1]
        }

        fn result(&self, state: &i64, action: &i64) -> i64 {
            state + action
        }

        fn goal_test(&self, _state: &i64) -> bool {
            false
        }

        fn value(&self, _state: &i64) -> IntegerType {
            0
        }
    }

    #[test]
    fn test_never_adopts_a_non_improving_neighbor() {
        let problem = RidgeProblem {
            start: 0,
            summit: 6,
        };
        let mut strategy = FirstChoice::new(Pcg64Mcg::seed_from_u64(1), 100);
        let outcome = strategy.search(&problem);

        // Adopted moves strictly increase the value, so the final state
        // can only be the summit or an attempt-limit stop short of it;
        // either way it is no further from the summit than the start.
        assert!(*outcome.value() >= problem.value(&0));
        assert!(outcome.statistics().moves <= 6);
    }

    #[test]
    fn test_plateau_exhausts_exactly_the_attempt_limit() {
        let mut strategy = FirstChoice::new(Pcg64Mcg::seed_from_u64(3), 25);
        let outcome = strategy.search(&PlateauProblem);

        assert_eq!(outcome.termination(), LocalSearchTermination::AttemptLimit);
        assert_eq!(*outcome.state(), 0);
        // No sample ever improves, so every attempt expands once.
        assert_eq!(outcome.search_cost(), 25);
        assert_eq!(outcome.statistics().moves, 0);
    }

    #[test]
    fn test_goal_satisfying_start_returns_with_zero_cost() {
        let puzzle = EightPuzzle::new(EightPuzzle::DEFAULT_GOAL);
        let mut strategy = FirstChoice::with_default_limit(Pcg64Mcg::seed_from_u64(5));
        let outcome: LocalSearchOutcome<_, IntegerType> = strategy.search(&puzzle);

        assert_eq!(*outcome.state(), EightPuzzle::DEFAULT_GOAL);
        assert_eq!(*outcome.value(), 0);
        assert_eq!(outcome.search_cost(), 0);
        assert_eq!(outcome.statistics().expansions, 0);
    }

    #[test]
    fn test_dead_end_terminates_immediately() {
        struct IsolatedProblem;

        impl Problem<IntegerType> for IsolatedProblem {
            type State = u8;
            type Action = u8;

            fn initial(&self) -> u8 {
                1
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

        let mut strategy = FirstChoice::new(Pcg64Mcg::seed_from_u64(9), 50);
        let outcome = strategy.search(&IsolatedProblem);

        assert_eq!(outcome.termination(), LocalSearchTermination::DeadEnd);
        assert_eq!(outcome.search_cost(), 1);
    }

    #[test]
    fn test_improves_random_queens_reproducibly() {
        let problem = NQueens::new(8, vec![0; 8]);
        let initial_value: IntegerType =
            Problem::<IntegerType>::value(&problem, &Problem::<IntegerType>::initial(&problem));

        let mut strategy = FirstChoice::new(Pcg64Mcg::seed_from_u64(11), 1_000);
        let first: LocalSearchOutcome<_, IntegerType> = strategy.search(&problem);
        assert!(*first.value() > initial_value);

        let mut strategy = FirstChoice::new(Pcg64Mcg::seed_from_u64(11), 1_000);
        let second = strategy.search(&problem);
        // Elapsed time differs between runs; the search itself must not.
        assert_eq!(first.state(), second.state());
        assert_eq!(first.value(), second.value());
        assert_eq!(first.search_cost(), second.search_cost());
    }

    #[test]
    #[should_panic(expected = "zero attempt limit")]
    fn test_zero_attempt_limit_is_rejected() {
        let _ = FirstChoice::new(Pcg64Mcg::seed_from_u64(0), 0);
    }
}
