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

//! Statistics reporting for grid searches.
//!
//! Counts expansions (cells dequeued and explored), nodes generated into
//! the frontier, and duplicates discarded by the frontier-residency check,
//! plus the total elapsed time. Updates are inline saturating increments
//! suitable for the search hot loop.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridSearchStatistics {
    /// Number of cells dequeued and expanded.
    pub expansions: u64,

    /// Number of nodes pushed into the frontier.
    pub nodes_generated: u64,

    /// Number of candidates discarded because a frontier-resident entry
    /// for the same cell had an equal or better priority.
    pub duplicates_discarded: u64,

    /// Total time taken by the search.
    pub time_total: Duration,
}

impl Default for GridSearchStatistics {
    fn default() -> Self {
        Self {
            expansions: 0,
            nodes_generated: 0,
            duplicates_discarded: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl GridSearchStatistics {
    /// Called when a cell is dequeued and expanded.
    #[inline]
    pub fn on_expansion(&mut self) {
        self.expansions = self.expansions.saturating_add(1);
    }

    /// Called when a node is pushed into the frontier.
    #[inline]
    pub fn on_node_generated(&mut self) {
        self.nodes_generated = self.nodes_generated.saturating_add(1);
    }

    /// Called when a candidate loses the frontier-residency check.
    #[inline]
    pub fn on_duplicate_discarded(&mut self) {
        self.duplicates_discarded = self.duplicates_discarded.saturating_add(1);
    }

    /// Sets the total time taken by the search.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for GridSearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cairn-Grid Statistics:")?;
        writeln!(f, "   Expansions:            {}", self.expansions)?;
        writeln!(f, "   Nodes Generated:       {}", self.nodes_generated)?;
        writeln!(f, "   Duplicates Discarded:  {}", self.duplicates_discarded)?;
        writeln!(f, "   Total Time:            {:?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = GridSearchStatistics::default();
        stats.on_expansion();
        stats.on_node_generated();
        stats.on_node_generated();
        stats.on_duplicate_discarded();

        assert_eq!(stats.expansions, 1);
        assert_eq!(stats.nodes_generated, 2);
        assert_eq!(stats.duplicates_discarded, 1);
    }

    #[test]
    fn test_display_mentions_every_counter() {
        let report = format!("{}", GridSearchStatistics::default());
        assert!(report.contains("Expansions"));
        assert!(report.contains("Nodes Generated"));
        assert!(report.contains("Duplicates Discarded"));
        assert!(report.contains("Total Time"));
    }
}
