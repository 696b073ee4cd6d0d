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

//! Grid-search outcome reporting.
//!
//! A search either reconstructs a start-to-goal path or exhausts its
//! frontier. Both cases are ordinary results and both carry the run
//! statistics; an unreachable goal is reported as `NoPath`, never raised
//! as a fault.

use crate::{grid::Cell, stats::GridSearchStatistics};

/// The result of a grid search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSearchResult {
    /// A start-to-goal path, start and goal included.
    PathFound(Vec<Cell>),

    /// The frontier emptied without reaching the goal.
    NoPath,
}

impl std::fmt::Display for GridSearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridSearchResult::PathFound(path) => write!(f, "Path Found ({} cells)", path.len()),
            GridSearchResult::NoPath => write!(f, "No Path Found"),
        }
    }
}

/// Result of one grid-search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSearchOutcome {
    result: GridSearchResult,
    statistics: GridSearchStatistics,
}

impl GridSearchOutcome {
    /// Creates an outcome carrying a reconstructed path.
    #[inline]
    pub fn path_found(path: Vec<Cell>, statistics: GridSearchStatistics) -> Self {
        Self {
            result: GridSearchResult::PathFound(path),
            statistics,
        }
    }

    /// Creates an outcome for an exhausted frontier.
    #[inline]
    pub fn no_path(statistics: GridSearchStatistics) -> Self {
        Self {
            result: GridSearchResult::NoPath,
            statistics,
        }
    }

    /// Returns the search result.
    #[inline]
    pub fn result(&self) -> &GridSearchResult {
        &self.result
    }

    /// Returns the path, if one was found.
    #[inline]
    pub fn path(&self) -> Option<&[Cell]> {
        match &self.result {
            GridSearchResult::PathFound(path) => Some(path),
            GridSearchResult::NoPath => None,
        }
    }

    /// Returns `true` if a path was found.
    #[inline]
    pub fn is_path_found(&self) -> bool {
        matches!(self.result, GridSearchResult::PathFound(_))
    }

    /// Returns the run statistics.
    #[inline]
    pub fn statistics(&self) -> &GridSearchStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_found_accessors() {
        let path = vec![Cell::new(0, 0), Cell::new(1, 0)];
        let outcome = GridSearchOutcome::path_found(path.clone(), GridSearchStatistics::default());

        assert!(outcome.is_path_found());
        assert_eq!(outcome.path(), Some(path.as_slice()));
        assert_eq!(format!("{}", outcome.result()), "Path Found (2 cells)");
    }

    #[test]
    fn test_no_path_accessors() {
        let outcome = GridSearchOutcome::no_path(GridSearchStatistics::default());

        assert!(!outcome.is_path_found());
        assert_eq!(outcome.path(), None);
        assert_eq!(format!("{}", outcome.result()), "No Path Found");
    }
}
