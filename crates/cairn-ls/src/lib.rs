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

//! # Cairn Local Search
//!
//! Interchangeable local-search strategies over any `cairn_search::Problem`.
//! Each strategy owns its search loop, walks the state space through the
//! node arena, and reports a uniform outcome: the final state, its value,
//! the search cost, a termination reason, and run statistics.
//!
//! ## Strategies
//!
//! - `steepest_ascent`: moves to the best neighbor while it strictly
//!   improves; cost counts neighbors examined.
//! - `first_choice`: samples neighbors uniformly, adopting the first strict
//!   improvement, bounded by an attempt limit; cost counts expansions.
//! - `simulated_annealing`: occasionally accepts worsening moves under a
//!   cooling schedule to escape local optima; cost counts expansions.
//!
//! All strategies maximize `Problem::value` and terminate only through
//! natural conditions: a local optimum, a dead end, an exhausted attempt
//! budget, or a frozen schedule. None of these is an error; callers decide
//! what a non-goal result means by checking `goal_test` or `value`.

pub mod first_choice;
pub mod result;
pub mod simulated_annealing;
pub mod stats;
pub mod steepest_ascent;
pub mod strategy;

pub use first_choice::FirstChoice;
pub use result::{LocalSearchOutcome, LocalSearchTermination};
pub use simulated_annealing::{CoolingSchedule, ExponentialCooling, SimulatedAnnealing};
pub use stats::LocalSearchStatistics;
pub use steepest_ascent::SteepestAscent;
pub use strategy::LocalSearchStrategy;
