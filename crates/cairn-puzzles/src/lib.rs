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

//! # Cairn Puzzles
//!
//! **Concrete puzzle problems for the Cairn search toolkit.**
//!
//! This crate provides the domain side of the workspace: puzzle types that
//! implement the `cairn_search::Problem` contract and nothing else. The
//! strategy crates stay generic; board encodings, move generation,
//! objective functions, and random instance generation all live here.
//!
//! ## Modules
//!
//! * `nqueens`: N queens on an N×N board, one queen per column. Objective:
//!   non-attacking queen pairs (maximized, optimum `C(n,2)`).
//! * `eight_puzzle`: the 3×3 sliding-tile puzzle. Objective: negated
//!   Manhattan distance to the goal (maximized, optimum `0`).
//!
//! Both problems follow the workspace-wide higher-is-better value
//! convention and expose seedable random constructors so restart runs stay
//! reproducible under test.

pub mod eight_puzzle;
pub mod nqueens;

pub use eight_puzzle::{EightPuzzle, Slide, Tiles};
pub use nqueens::NQueens;
