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

//! # Cairn Search
//!
//! Shared abstractions for the Cairn search toolkit. This crate defines the
//! contract every search strategy consumes and the node storage they search
//! over, keeping strategy crates (`cairn-ls`, `cairn-grid`, `cairn-solver`)
//! free of domain knowledge.
//!
//! ## Modules
//!
//! - `num`: the `ProblemValue` trait alias fixing the numeric bounds of
//!   local-search objective values (signed primitive integers).
//! - `problem`: the `Problem` trait covering states, actions, transitions,
//!   the goal test, and a scalar value with a single fixed sign convention.
//! - `node`: an index-based arena of search nodes with parent links and
//!   path-cost fields, supporting expansion through a `Problem` and cheap
//!   path reconstruction by index walking.
//!
//! ## Purpose
//!
//! Strategies stay generic over problems: anything that implements
//! `Problem` can be driven by hill climbing, simulated annealing, or the
//! restart controller without modification, and the arena gives informed
//! search its parent chains without ownership cycles.

pub mod node;
pub mod num;
pub mod problem;

pub use node::{Node, NodeArena, NodeId};
pub use num::ProblemValue;
pub use problem::Problem;
