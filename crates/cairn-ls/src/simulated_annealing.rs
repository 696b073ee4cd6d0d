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

//! Simulated annealing.
//!
//! This module implements a temperature-driven search that occasionally
//! accepts worsening moves to escape local optima. The acceptance
//! probability follows the Metropolis criterion and decays over time
//! according to a cooling schedule, shifting the search from exploratory to
//! exploitative behavior as the temperature drops. The design separates the
//! acceptance logic from temperature management, so different cooling
//! strategies plug in without changing the core loop.
//!
//! Each step samples one neighbor uniformly, adopts it outright when it
//! improves the value, and otherwise adopts it with probability
//! `exp(Δ/T)` where `Δ` is the (negative) value change. The search stops
//! when the schedule is exhausted and returns the best state visited, which
//! may differ from the final current state.
//!
//! Numerical robustness: value deltas are converted to `f64` for the
//! probability calculation; if the conversion fails or yields a non-finite
//! quotient, the worsening candidate is rejected.

use crate::{
    result::{LocalSearchOutcome, LocalSearchTermination},
    stats::LocalSearchStatistics,
    strategy::LocalSearchStrategy,
};
use cairn_search::{NodeArena, Problem, ProblemValue};
use rand::Rng;
use std::time::Instant;

/// Defines the thermodynamics of the annealing process.
///
/// Implementors control the initial temperature, the decay function, and
/// the exhaustion condition that ends the search.
pub trait CoolingSchedule: Send + Sync + std::fmt::Debug {
    /// Resets the temperature to its initial state.
    /// Called once at the start of the search.
    fn on_start(&mut self);

    /// Advances the schedule by one step.
    /// Called after every sampled move (accepted or rejected).
    fn update(&mut self);

    /// Returns the current temperature.
    fn current(&self) -> f64;

    /// Returns `true` once the schedule is exhausted and the search must
    /// stop.
    fn is_frozen(&self) -> bool;
}

/// Exponential decay with a step budget: `T(t) = k·e^(−λt)` for
/// `t < step_limit`, frozen afterwards.
///
/// Cools rapidly at first and then settles, so late steps behave almost
/// like strict ascent before the budget runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialCooling {
    initial: f64,
    lambda: f64,
    step_limit: u64,
    step: u64,
    current: f64,
}

impl ExponentialCooling {
    /// Creates a new exponential cooling schedule.
    ///
    /// # Panics
    ///
    /// Panics if `initial` or `lambda` is not strictly positive.
    #[inline]
    pub fn new(initial: f64, lambda: f64, step_limit: u64) -> Self {
        assert!(
            initial > 0.0,
            "called `ExponentialCooling::new` with non-positive initial temperature {}",
            initial
        );
        assert!(
            lambda > 0.0,
            "called `ExponentialCooling::new` with non-positive decay rate {}",
            lambda
        );
        Self {
            initial,
            lambda,
            step_limit,
            step: 0,
            current: initial,
        }
    }
}

impl CoolingSchedule for ExponentialCooling {
    #[inline]
    fn on_start(&mut self) {
        self.step = 0;
        self.current = self.initial;
    }

    #[inline]
    fn update(&mut self) {
        self.step = self.step.saturating_add(1);
        self.current = self.initial * (-self.lambda * self.step as f64).exp();
    }

    #[inline]
    fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.step >= self.step_limit
    }
}

/// Simulated annealing powered by a pluggable `CoolingSchedule`.
///
/// Uses the Metropolis criterion for worsening moves:
/// `P(accept) = exp((value(candidate) − value(current)) / T)`.
///
/// # Attributes
/// * **Acceptance:** improvement always; deterioration with Metropolis
///   probability.
/// * **Termination:** schedule exhaustion or dead end.
/// * **Search cost:** number of expansions.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing<R, C> {
    rng: R,
    schedule: C,
}

impl<R, C> SimulatedAnnealing<R, C>
where
    C: CoolingSchedule,
{
    /// Creates a new `SimulatedAnnealing` strategy.
    #[inline]
    pub fn new(rng: R, schedule: C) -> Self {
        Self { rng, schedule }
    }
}

impl<T, P, R, C> LocalSearchStrategy<T, P> for SimulatedAnnealing<R, C>
where
    T: ProblemValue,
    P: Problem<T>,
    R: Rng + Send + Sync,
    C: CoolingSchedule,
{
    fn name(&self) -> &str {
        "SimulatedAnnealing"
    }

    fn search(&mut self, problem: &P) -> LocalSearchOutcome<P::State, T> {
        let start_time = Instant::now();
        let mut stats = LocalSearchStatistics::default();
        let mut arena = NodeArena::<P::State, T>::new();

        let mut current = arena.push_root(problem.initial());
        let mut current_value = problem.value(arena.node(current).state());
        let mut best = current;
        let mut best_value = current_value;

        self.schedule.on_start();

        let termination = loop {
            if self.schedule.is_frozen() {
                break LocalSearchTermination::Frozen;
            }

            let state = arena.node(current).state().clone();
            let actions = problem.actions(&state);
            stats.on_expansion();

            if actions.is_empty() {
                break LocalSearchTermination::DeadEnd;
            }

            let action = &actions[self.rng.gen_range(0..actions.len())];
            let candidate = problem.result(&state, action);
            let candidate_value = problem.value(&candidate);
            stats.on_neighbors_examined(1);

            let accept = if candidate_value > current_value {
                true
            } else {
                self.metropolis(candidate_value - current_value)
            };

            if accept {
                current = arena.push_child(current, candidate, T::zero(), T::zero(), T::zero());
                current_value = candidate_value;
                stats.on_move();

                if current_value > best_value {
                    best = current;
                    best_value = current_value;
                }
            }

            self.schedule.update();
        };

        stats.set_total_time(start_time.elapsed());
        let search_cost = stats.expansions;
        LocalSearchOutcome::new(
            termination,
            arena.node(best).state().clone(),
            best_value,
            search_cost,
            stats,
        )
    }
}

impl<R, C> SimulatedAnnealing<R, C>
where
    R: Rng,
    C: CoolingSchedule,
{
    /// Decides whether to accept a worsening move with value change
    /// `delta <= 0`.
    fn metropolis<T>(&mut self, delta: T) -> bool
    where
        T: ProblemValue,
    {
        let Some(delta) = delta.to_f64() else {
            return false;
        };
        let temperature = self.schedule.current();
        if temperature <= f64::EPSILON {
            return false;
        }
        let probability = (delta / temperature).exp();
        if !probability.is_finite() {
            return false;
        }
        self.rng.gen::<f64>() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_puzzles::NQueens;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    type IntegerType = i64;

    #[test]
    fn test_exponential_cooling_decays_and_freezes() {
        let mut schedule = ExponentialCooling::new(20.0, 0.5, 3);
        schedule.on_start();
        assert_eq!(schedule.current(), 20.0);
        assert!(!schedule.is_frozen());

        let first = schedule.current();
        schedule.update();
        let second = schedule.current();
        assert!(second < first);

        schedule.update();
        schedule.update();
        assert!(schedule.is_frozen());
    }

    #[test]
    fn test_zero_step_schedule_returns_the_initial_state() {
        let problem = NQueens::new(8, vec![0; 8]);
        let mut strategy =
            SimulatedAnnealing::new(Pcg64Mcg::seed_from_u64(2), ExponentialCooling::new(1.0, 0.1, 0));
        let outcome: LocalSearchOutcome<Vec<u8>, IntegerType> = strategy.search(&problem);

        assert_eq!(outcome.termination(), LocalSearchTermination::Frozen);
        assert_eq!(*outcome.state(), vec![0; 8]);
        assert_eq!(outcome.search_cost(), 0);
    }

    #[test]
    fn test_best_state_never_falls_below_the_start() {
        let problem = NQueens::new(8, vec![0; 8]);
        let initial_value: IntegerType =
            Problem::<IntegerType>::value(&problem, &Problem::<IntegerType>::initial(&problem));

        let mut strategy = SimulatedAnnealing::new(
            Pcg64Mcg::seed_from_u64(13),
            ExponentialCooling::new(20.0, 0.005, 2_000),
        );
        let outcome: LocalSearchOutcome<_, IntegerType> = strategy.search(&problem);

        // The reported state is the best visited, so its value dominates
        // the initial one even though the walk may end somewhere worse.
        assert!(*outcome.value() >= initial_value);
        assert_eq!(outcome.termination(), LocalSearchTermination::Frozen);
        assert_eq!(outcome.search_cost(), 2_000);
    }

    #[test]
    fn test_rejected_worsening_moves_keep_the_current_state() {
        // Temperature so small that the Metropolis probability vanishes:
        // the walk reduces to strict ascent.
        let problem = NQueens::new(4, vec![0, 2, 1, 3]);
        let mut strategy = SimulatedAnnealing::new(
            Pcg64Mcg::seed_from_u64(17),
            ExponentialCooling::new(f64::MIN_POSITIVE, 0.001, 200),
        );
        let outcome: LocalSearchOutcome<Vec<u8>, IntegerType> = strategy.search(&problem);

        let initial_value: IntegerType =
            Problem::<IntegerType>::value(&problem, &vec![0, 2, 1, 3]);
        assert!(*outcome.value() >= initial_value);
    }
}
