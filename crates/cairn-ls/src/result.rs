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

//! Local-search outcome and termination reporting.
//!
//! This module encapsulates the result produced by a strategy run: the
//! final state and its value, the search cost under that strategy's cost
//! convention, aggregate statistics, and a concise termination reason. The
//! outcome is a single transport object for downstream consumers such as
//! the restart controller or reporting scripts. None of the termination
//! reasons is an error; a local optimum far from the goal is the expected
//! failure mode of local search, and callers distinguish "goal reached"
//! by checking `goal_test` or comparing `value` against a target.

use crate::stats::LocalSearchStatistics;

/// Why a local-search strategy stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalSearchTermination {
    /// No neighbor strictly improves on the current state.
    LocalOptimum,

    /// The current state has no neighbors at all.
    DeadEnd,

    /// The attempt budget was exhausted without finding an improvement.
    AttemptLimit,

    /// The cooling schedule ran out.
    Frozen,
}

impl std::fmt::Display for LocalSearchTermination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalSearchTermination::LocalOptimum => write!(f, "Local Optimum Reached"),
            LocalSearchTermination::DeadEnd => write!(f, "Dead End: No Neighbors"),
            LocalSearchTermination::AttemptLimit => write!(f, "Attempt Limit Exhausted"),
            LocalSearchTermination::Frozen => write!(f, "Cooling Schedule Exhausted"),
        }
    }
}

/// Result of one local-search strategy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSearchOutcome<S, T> {
    termination: LocalSearchTermination,
    state: S,
    value: T,
    search_cost: u64,
    statistics: LocalSearchStatistics,
}

impl<S, T> LocalSearchOutcome<S, T> {
    /// Creates a new outcome.
    #[inline]
    pub fn new(
        termination: LocalSearchTermination,
        state: S,
        value: T,
        search_cost: u64,
        statistics: LocalSearchStatistics,
    ) -> Self {
        Self {
            termination,
            state,
            value,
            search_cost,
            statistics,
        }
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination(&self) -> LocalSearchTermination {
        self.termination
    }

    /// Returns the final state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the value of the final state.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the search cost under the strategy's cost convention.
    #[inline]
    pub fn search_cost(&self) -> u64 {
        self.search_cost
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &LocalSearchStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns the final state.
    #[inline]
    pub fn into_state(self) -> S {
        self.state
    }
}
