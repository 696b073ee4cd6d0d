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

//! Distance estimates for informed grid search.
//!
//! Both estimates are admissible on a unit-cost 4-connected grid: the
//! Manhattan distance is exactly the cost of the best wall-free path, and
//! the Euclidean straight-line distance never exceeds it. A* therefore
//! returns optimal paths with either choice.

use crate::grid::Cell;

/// An admissible estimate of the remaining cost to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `|dx| + |dy|`, tight on 4-connected grids.
    Manhattan,

    /// `sqrt(dx² + dy²)`, the straight-line distance.
    Euclidean,
}

impl Heuristic {
    /// Estimates the remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(&self, from: Cell, to: Cell) -> f64 {
        let dx = from.x.abs_diff(to.x) as f64;
        let dy = from.y.abs_diff(to.y) as f64;
        match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heuristic::Manhattan => write!(f, "Manhattan"),
            Heuristic::Euclidean => write!(f, "Euclidean"),
        }
    }
}
