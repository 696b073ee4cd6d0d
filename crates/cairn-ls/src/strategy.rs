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

//! Strategy interface for local search.
//!
//! This module defines the trait that makes strategies interchangeable: a
//! strategy consumes a problem, runs its own search loop, and returns a
//! uniform outcome. The restart controller and any reporting code depend
//! only on this trait, so hill climbing variants and simulated annealing
//! can be swapped without touching orchestration code. Strategies take
//! `&mut self` because some carry per-run state such as an injected random
//! number generator.

use crate::result::LocalSearchOutcome;
use cairn_search::{Problem, ProblemValue};

/// A local-search strategy over problems with value type `T`.
///
/// Every strategy maximizes `Problem::value` and terminates only through
/// natural conditions; none imposes a wall-clock watchdog.
pub trait LocalSearchStrategy<T, P>: Send + Sync
where
    T: ProblemValue,
    P: Problem<T>,
{
    /// Returns the name of the strategy.
    fn name(&self) -> &str;

    /// Runs the strategy on `problem` from its initial state.
    fn search(&mut self, problem: &P) -> LocalSearchOutcome<P::State, T>;
}

impl<T, P> std::fmt::Debug for dyn LocalSearchStrategy<T, P>
where
    T: ProblemValue,
    P: Problem<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocalSearchStrategy {{ name: {} }}", self.name())
    }
}

impl<T, P> std::fmt::Display for dyn LocalSearchStrategy<T, P>
where
    T: ProblemValue,
    P: Problem<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocalSearchStrategy: {}", self.name())
    }
}
