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

//! Best-first search over explicit grids.
//!
//! A* and greedy best-first share one engine differing only in the
//! priority: `f = g + h` for A*, `f = h` for greedy. The frontier is a
//! binary min-heap ordered by `f` with ties broken by insertion order, and
//! expansion is guarded by an explored bitset so no coordinate is ever
//! expanded twice.
//!
//! Duplicate suppression is deliberately loose: a side map records the best
//! `f` per cell **currently resident in the frontier**, and a candidate is
//! discarded only when a resident entry is at least as good. A strictly
//! better candidate is pushed without removing the stale entry, which is
//! later skipped on pop through the explored set. The frontier may
//! therefore briefly hold several entries for one cell; with an admissible
//! heuristic and unit step costs this does not affect A* optimality.
//!
//! Success is detected when the goal is dequeued, not when it is generated;
//! the path is then reconstructed by walking parent links in the node arena
//! and reversing. An exhausted frontier reports `NoPath`.

use crate::{
    grid::{Cell, GridMap},
    heuristic::Heuristic,
    result::GridSearchOutcome,
    stats::GridSearchStatistics,
};
use cairn_search::{NodeArena, NodeId};
use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;
use std::collections::BinaryHeap;
use std::time::Instant;

/// How the frontier priority is derived from path cost and heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriorityRule {
    /// A*: `f = g + h`.
    CostPlusHeuristic,
    /// Greedy best-first: `f = h`.
    HeuristicOnly,
}

impl PriorityRule {
    #[inline]
    fn priority(self, g: f64, h: f64) -> f64 {
        match self {
            PriorityRule::CostPlusHeuristic => g + h,
            PriorityRule::HeuristicOnly => h,
        }
    }
}

/// A frontier entry: priority, insertion order, and the arena node.
///
/// Ordered for a max-heap so that the smallest `f` pops first; among equal
/// priorities the earliest insertion wins.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Runs A* from `start` to `goal`.
///
/// With an admissible heuristic the returned path is cost-optimal on a
/// unit-cost 4-connected grid.
///
/// # Panics
///
/// Panics if `start` or `goal` is out of bounds.
#[inline]
pub fn astar(map: &GridMap, start: Cell, goal: Cell, heuristic: Heuristic) -> GridSearchOutcome {
    best_first(map, start, goal, heuristic, PriorityRule::CostPlusHeuristic)
}

/// Runs greedy best-first search from `start` to `goal`.
///
/// Orders the frontier by the heuristic alone; the returned path is valid
/// but may be longer than optimal.
///
/// # Panics
///
/// Panics if `start` or `goal` is out of bounds.
#[inline]
pub fn greedy_best_first(
    map: &GridMap,
    start: Cell,
    goal: Cell,
    heuristic: Heuristic,
) -> GridSearchOutcome {
    best_first(map, start, goal, heuristic, PriorityRule::HeuristicOnly)
}

fn best_first(
    map: &GridMap,
    start: Cell,
    goal: Cell,
    heuristic: Heuristic,
    rule: PriorityRule,
) -> GridSearchOutcome {
    assert!(
        map.in_bounds(start),
        "called `best_first` with out-of-bounds start {}",
        start
    );
    assert!(
        map.in_bounds(goal),
        "called `best_first` with out-of-bounds goal {}",
        goal
    );

    let start_time = Instant::now();
    let mut stats = GridSearchStatistics::default();

    let mut arena = NodeArena::<Cell, f64>::new();
    let mut frontier = BinaryHeap::new();
    let mut resident_best: FxHashMap<Cell, f64> = FxHashMap::default();
    let mut explored = FixedBitSet::with_capacity(map.num_cells());
    let mut seq: u64 = 0;

    let root = arena.push_root(start);
    let root_f = rule.priority(0.0, heuristic.estimate(start, goal));
    frontier.push(FrontierEntry {
        f: root_f,
        seq,
        node: root,
    });
    resident_best.insert(start, root_f);
    stats.on_node_generated();

    while let Some(entry) = frontier.pop() {
        let cell = *arena.node(entry.node).state();

        // Stale entry for an already-expanded cell.
        if explored.contains(map.index(cell)) {
            continue;
        }
        resident_best.remove(&cell);

        if cell == goal {
            let path = arena.path(entry.node);
            stats.set_total_time(start_time.elapsed());
            return GridSearchOutcome::path_found(path, stats);
        }

        explored.insert(map.index(cell));
        stats.on_expansion();

        let g = arena.node(entry.node).g() + 1.0;
        for neighbor in map.neighbors(cell) {
            if explored.contains(map.index(neighbor)) {
                continue;
            }

            let h = heuristic.estimate(neighbor, goal);
            let f = rule.priority(g, h);

            // Loose duplicate check against frontier residents only.
            if let Some(&resident) = resident_best.get(&neighbor) {
                if resident <= f {
                    stats.on_duplicate_discarded();
                    continue;
                }
            }

            let child = arena.push_child(entry.node, neighbor, g, h, f);
            seq += 1;
            frontier.push(FrontierEntry { f, seq, node: child });
            resident_best.insert(neighbor, f);
            stats.on_node_generated();
        }
    }

    stats.set_total_time(start_time.elapsed());
    GridSearchOutcome::no_path(stats)
}
