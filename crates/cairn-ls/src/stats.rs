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

//! Statistics reporting for local-search runs.
//!
//! A lightweight container for the aggregate metrics of one strategy run:
//! neighborhood expansions, neighbors examined, accepted moves, and total
//! elapsed time. The interface is optimized for hot-loop usage (updates
//! are inline saturating increments) and the result feeds outcome
//! reporting without imposing measurable overhead on the inner loop.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalSearchStatistics {
    /// Number of times a neighborhood was generated.
    pub expansions: u64,

    /// Number of neighbor states evaluated against the current state.
    pub neighbors_examined: u64,

    /// Number of accepted moves.
    pub moves: u64,

    /// Total time taken by the search.
    pub time_total: Duration,
}

impl Default for LocalSearchStatistics {
    fn default() -> Self {
        Self {
            expansions: 0,
            neighbors_examined: 0,
            moves: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl LocalSearchStatistics {
    /// Called each time a neighborhood is generated.
    #[inline]
    pub fn on_expansion(&mut self) {
        self.expansions = self.expansions.saturating_add(1);
    }

    /// Called after evaluating `count` neighbors against the current state.
    #[inline]
    pub fn on_neighbors_examined(&mut self, count: u64) {
        self.neighbors_examined = self.neighbors_examined.saturating_add(count);
    }

    /// Called when a move is accepted.
    #[inline]
    pub fn on_move(&mut self) {
        self.moves = self.moves.saturating_add(1);
    }

    /// Sets the total time taken by the search.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for LocalSearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cairn-LS Statistics:")?;
        writeln!(f, "   Expansions:          {}", self.expansions)?;
        writeln!(f, "   Neighbors Examined:  {}", self.neighbors_examined)?;
        writeln!(f, "   Accepted Moves:      {}", self.moves)?;
        writeln!(f, "   Total Time:          {:?}", self.time_total)?;
        Ok(())
    }
}
