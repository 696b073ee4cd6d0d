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

//! The 8-puzzle for local search.
//!
//! A state is the 3×3 board read row by row, with `0` marking the blank.
//! An action slides a tile into the blank, named by the direction the blank
//! moves. At most four actions apply in any state, so the branching factor
//! is between two (corners) and four (center).
//!
//! The objective is the **negated** Manhattan distance to the goal,
//! maximized per the workspace sign convention; the optimum is `0`. Exactly
//! half of all tile permutations can reach a given goal, so instance
//! generation goes through an inversion-parity check.

use cairn_search::{Problem, ProblemValue};
use rand::{seq::SliceRandom, Rng};
use smallvec::SmallVec;

/// A 3×3 board read row by row; `0` is the blank.
pub type Tiles = [u8; 9];

/// The direction the blank moves when a tile slides into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Slide {
    /// Offset of the blank's destination index on the flattened board.
    #[inline]
    const fn offset(self) -> isize {
        match self {
            Slide::Up => -3,
            Slide::Down => 3,
            Slide::Left => -1,
            Slide::Right => 1,
        }
    }
}

impl std::fmt::Display for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slide::Up => write!(f, "Up"),
            Slide::Down => write!(f, "Down"),
            Slide::Left => write!(f, "Left"),
            Slide::Right => write!(f, "Right"),
        }
    }
}

/// The 8-puzzle with a configurable goal board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EightPuzzle {
    initial: Tiles,
    goal: Tiles,
}

impl EightPuzzle {
    /// The conventional goal: tiles in order, blank last.
    pub const DEFAULT_GOAL: Tiles = [1, 2, 3, 4, 5, 6, 7, 8, 0];

    /// Creates an 8-puzzle with the conventional goal.
    ///
    /// # Panics
    ///
    /// Panics if `initial` is not a permutation of `0..=8`.
    pub fn new(initial: Tiles) -> Self {
        Self::with_goal(initial, Self::DEFAULT_GOAL)
    }

    /// Creates an 8-puzzle with an explicit goal board.
    ///
    /// # Panics
    ///
    /// Panics if `initial` or `goal` is not a permutation of `0..=8`.
    pub fn with_goal(initial: Tiles, goal: Tiles) -> Self {
        assert!(
            is_permutation(&initial),
            "called `EightPuzzle::with_goal` with an initial board that is not a permutation of 0..=8"
        );
        assert!(
            is_permutation(&goal),
            "called `EightPuzzle::with_goal` with a goal board that is not a permutation of 0..=8"
        );
        Self { initial, goal }
    }

    /// Creates a random instance guaranteed solvable to the conventional
    /// goal.
    ///
    /// The tiles are shuffled once; if the resulting parity cannot reach
    /// the goal, two tiles are swapped to flip it.
    pub fn random_solvable<R>(rng: &mut R) -> Self
    where
        R: Rng,
    {
        let mut tiles: Tiles = [0, 1, 2, 3, 4, 5, 6, 7, 8];
        tiles.shuffle(rng);

        let goal_parity = inversions(&Self::DEFAULT_GOAL) % 2;
        if inversions(&tiles) % 2 != goal_parity {
            // Swapping two non-blank tiles flips the inversion parity.
            let (a, b) = if tiles[0] != 0 && tiles[1] != 0 {
                (0, 1)
            } else {
                (7, 8)
            };
            tiles.swap(a, b);
        }

        debug_assert!(inversions(&tiles) % 2 == goal_parity);
        Self {
            initial: tiles,
            goal: Self::DEFAULT_GOAL,
        }
    }

    /// Returns the goal board.
    #[inline]
    pub fn goal(&self) -> &Tiles {
        &self.goal
    }

    /// Returns `true` if `state` can reach this puzzle's goal.
    ///
    /// On an odd-width board two configurations are mutually reachable
    /// exactly when their inversion counts share parity.
    #[inline]
    pub fn is_solvable(&self, state: &Tiles) -> bool {
        inversions(state) % 2 == inversions(&self.goal) % 2
    }

    /// Sum of Manhattan distances of every tile to its goal square,
    /// excluding the blank.
    pub fn manhattan_distance(&self, state: &Tiles) -> u32 {
        let mut distance = 0;
        for (index, &tile) in state.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let target = goal_index(&self.goal, tile);
            let (row, col) = (index / 3, index % 3);
            let (target_row, target_col) = (target / 3, target % 3);
            distance += row.abs_diff(target_row) as u32 + col.abs_diff(target_col) as u32;
        }
        distance
    }

    /// Number of tiles not on their goal square, excluding the blank.
    pub fn misplaced_tiles(&self, state: &Tiles) -> u32 {
        state
            .iter()
            .zip(self.goal.iter())
            .filter(|(&tile, &goal)| tile != 0 && tile != goal)
            .count() as u32
    }

    /// Returns a display adapter rendering `state` as a 3×3 board.
    #[inline]
    pub fn board(state: &Tiles) -> TileBoard<'_> {
        TileBoard { state }
    }
}

impl<T> Problem<T> for EightPuzzle
where
    T: ProblemValue,
{
    type State = Tiles;
    type Action = Slide;

    fn initial(&self) -> Tiles {
        self.initial
    }

    fn actions(&self, state: &Tiles) -> SmallVec<[Slide; 8]> {
        let blank = blank_index(state);
        let (row, col) = (blank / 3, blank % 3);
        let mut actions = SmallVec::new();
        if row > 0 {
            actions.push(Slide::Up);
        }
        if row < 2 {
            actions.push(Slide::Down);
        }
        if col > 0 {
            actions.push(Slide::Left);
        }
        if col < 2 {
            actions.push(Slide::Right);
        }
        actions
    }

    fn result(&self, state: &Tiles, action: &Slide) -> Tiles {
        let blank = blank_index(state);
        let target = blank as isize + action.offset();
        debug_assert!(
            (0..9).contains(&target),
            "called `EightPuzzle::result` with action {} inapplicable to blank index {}",
            action,
            blank
        );
        let mut next = *state;
        next.swap(blank, target as usize);
        next
    }

    fn goal_test(&self, state: &Tiles) -> bool {
        *state == self.goal
    }

    fn value(&self, state: &Tiles) -> T {
        let distance =
            T::from_u32(self.manhattan_distance(state)).expect("Manhattan distance does not fit the value type");
        -distance
    }

    fn optimal_value(&self) -> Option<T> {
        Some(T::zero())
    }
}

/// Renders a tile board as three lines, the blank as a dot.
#[derive(Debug, Clone, Copy)]
pub struct TileBoard<'a> {
    state: &'a Tiles,
}

impl std::fmt::Display for TileBoard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let tile = self.state[row * 3 + col];
                if tile == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[inline]
fn blank_index(state: &Tiles) -> usize {
    state
        .iter()
        .position(|&tile| tile == 0)
        .expect("an 8-puzzle board always contains a blank")
}

#[inline]
fn goal_index(goal: &Tiles, tile: u8) -> usize {
    goal.iter()
        .position(|&t| t == tile)
        .expect("an 8-puzzle goal always contains every tile")
}

fn is_permutation(tiles: &Tiles) -> bool {
    let mut seen = [false; 9];
    for &tile in tiles {
        if tile > 8 || seen[tile as usize] {
            return false;
        }
        seen[tile as usize] = true;
    }
    true
}

/// Counts tile pairs out of order, ignoring the blank.
fn inversions(tiles: &Tiles) -> u32 {
    let mut count = 0;
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i] != 0 && tiles[j] != 0 && tiles[i] > tiles[j] {
                count += 1;
            }
        }
    }
    count
}
