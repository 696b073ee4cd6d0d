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

//! # Cairn Grid
//!
//! Informed graph search over explicit grids with blocked cells. Unlike the
//! hill climbers in `cairn-ls`, the searches here maintain an explored set,
//! order their frontier by a priority, and reconstruct a start-to-goal path
//! on success.
//!
//! ## Core flow
//!
//! - Build a `GridMap` (dimensions plus wall cells).
//! - Choose a `Heuristic` (Manhattan or Euclidean; both admissible for
//!   unit-cost 4-connected grids).
//! - Run `astar` (`f = g + h`) or `greedy_best_first` (`f = h`).
//! - Consume the `GridSearchOutcome`: a path or `NoPath`, plus statistics.
//!
//! ## Module map
//!
//! - `grid`: cells, the wall bitset, neighbor generation.
//! - `heuristic`: distance estimates to the goal.
//! - `search`: the shared best-first engine and the two entry points.
//! - `result`: search outcomes.
//! - `stats`: lightweight counters and timing.

pub mod grid;
pub mod heuristic;
pub mod result;
pub mod search;
pub mod stats;

pub use grid::{Cell, GridMap};
pub use heuristic::Heuristic;
pub use result::{GridSearchOutcome, GridSearchResult};
pub use search::{astar, greedy_best_first};
pub use stats::GridSearchStatistics;
