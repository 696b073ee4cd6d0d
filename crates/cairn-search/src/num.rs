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

//! # Problem Value Trait
//!
//! Unified numeric bounds for local-search objective values. `ProblemValue`
//! collects the integer capabilities the strategies rely on, including
//! intrinsic traits (`PrimInt`, `Signed`, `FromPrimitive`), hashing, and
//! formatting, into a single alias, simplifying generic signatures across
//! the strategy crates.
//!
//! ## Motivation
//!
//! Search strategies should remain generic over the value type a problem
//! reports, while keeping comparison and conversion semantics predictable.
//! A single alias avoids repeating a long bound list on every strategy and
//! guarantees all strategies agree on what a value can do.
//!
//! Values are signed so that problems minimizing a distance can expose its
//! negation under the workspace-wide higher-is-better convention.

use num_traits::{FromPrimitive, PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for numeric types usable as problem values.
///
/// These are the signed primitive integer types `i8`, `i16`, `i32`, `i64`
/// and `isize`. Values compare with the ordinary integer ordering; every
/// strategy in this workspace treats a larger value as a better state.
pub trait ProblemValue:
    PrimInt + Signed + FromPrimitive + std::fmt::Debug + std::fmt::Display + Hash + Send + Sync
{
}

impl<T> ProblemValue for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_problem_value<T: ProblemValue>() {}

    #[test]
    fn test_signed_primitives_satisfy_alias() {
        assert_problem_value::<i8>();
        assert_problem_value::<i16>();
        assert_problem_value::<i32>();
        assert_problem_value::<i64>();
        assert_problem_value::<isize>();
    }
}
