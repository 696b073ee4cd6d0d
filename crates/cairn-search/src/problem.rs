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

//! Problem interface for state-space search.
//!
//! This module defines the trait every search strategy consumes, separating
//! puzzle definitions from the algorithms that explore them. A problem owns
//! its initial configuration and describes the reachable state space through
//! `actions` and `result`; strategies never inspect states beyond equality,
//! hashing, and the scalar `value`. The design keeps the hot path cheap:
//! states are plain hashable values, transitions are pure functions, and the
//! neighborhood of a state is exactly one `actions` call away.
//!
//! # Sign convention
//!
//! `value` is a quantity to **maximize** for every problem in this
//! workspace. Problems whose natural objective is a distance to minimize
//! expose its negation. Mixing conventions across a composition is a caller
//! error the core does not detect.

use crate::num::ProblemValue;
use smallvec::SmallVec;
use std::hash::Hash;

/// A search problem over an opaque, immutable state space.
///
/// Implementations must be deterministic: `actions` and `result` yield equal
/// outputs for equal inputs, and repeated calls with value-equal states
/// agree. The core does not defensively validate implementations; a problem
/// violating this contract produces undefined search behavior (but no memory
/// unsafety).
pub trait Problem<T>
where
    T: ProblemValue,
{
    /// One configuration of the problem. Equality and hashing are
    /// structural.
    type State: Clone + Eq + Hash + std::fmt::Debug;

    /// A legal transformation applicable to a state.
    type Action: Clone + std::fmt::Debug;

    /// Returns the initial state of this problem instance.
    fn initial(&self) -> Self::State;

    /// Returns every action applicable in `state`.
    ///
    /// The returned sequence is finite; an empty sequence signals a terminal
    /// or dead-end state, which callers must treat as "no further moves",
    /// not as an error.
    fn actions(&self, state: &Self::State) -> SmallVec<[Self::Action; 8]>;

    /// Returns the state reached by applying `action` in `state`.
    ///
    /// Pure function; the input state is never mutated.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Returns `true` if `state` satisfies the goal condition.
    fn goal_test(&self, state: &Self::State) -> bool;

    /// Returns the objective value of `state`. Higher is better.
    fn value(&self, state: &Self::State) -> T;

    /// Returns the best value any state can attain, when known.
    ///
    /// The restart controller uses this to recognize a global optimum and
    /// stop early. Problems without a known bound return `None`.
    #[inline]
    fn optimal_value(&self) -> Option<T> {
        None
    }
}
