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

//! Explicit grids with blocked cells.
//!
//! A `GridMap` is a rectangle of unit cells, some of which are walls. Wall
//! membership is held in a `FixedBitSet` indexed row-major, so lookups in
//! the search hot loop are a single bit test. Neighbor generation is
//! 4-connected and already filtered to in-bounds, non-wall cells; the
//! searches never see a blocked coordinate.

use fixedbitset::FixedBitSet;
use smallvec::SmallVec;

/// A grid coordinate: column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Creates a cell at column `x`, row `y`.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A rectangular grid with wall cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    walls: FixedBitSet,
}

impl GridMap {
    /// Creates an open grid of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "called `GridMap::new` with empty dimensions {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            walls: FixedBitSet::with_capacity(width * height),
        }
    }

    /// Parses a grid from ASCII rows: `#` is a wall, any other byte is
    /// open.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows have unequal lengths.
    pub fn from_ascii(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "called `GridMap::from_ascii` with no rows");
        let width = rows[0].len();
        assert!(
            rows.iter().all(|row| row.len() == width),
            "called `GridMap::from_ascii` with rows of unequal length"
        );

        let mut map = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, byte) in row.bytes().enumerate() {
                if byte == b'#' {
                    map.set_wall(Cell::new(x, y));
                }
            }
        }
        map
    }

    /// Returns the grid width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` if `cell` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Returns the row-major index of `cell`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `cell` is out of bounds.
    #[inline]
    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(
            self.in_bounds(cell),
            "called `GridMap::index` with out-of-bounds cell {}",
            cell
        );
        cell.y * self.width + cell.x
    }

    /// Marks `cell` as a wall.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    #[inline]
    pub fn set_wall(&mut self, cell: Cell) {
        assert!(
            self.in_bounds(cell),
            "called `GridMap::set_wall` with out-of-bounds cell {}",
            cell
        );
        self.walls.insert(self.index(cell));
    }

    /// Clears the wall at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    #[inline]
    pub fn clear_wall(&mut self, cell: Cell) {
        assert!(
            self.in_bounds(cell),
            "called `GridMap::clear_wall` with out-of-bounds cell {}",
            cell
        );
        self.walls.remove(self.index(cell));
    }

    /// Returns `true` if `cell` is a wall.
    #[inline]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(self.index(cell))
    }

    /// Returns the 4-connected, in-bounds, non-wall neighbors of `cell`.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        let mut neighbors = SmallVec::new();
        // Up, down, left, right.
        if cell.y > 0 {
            neighbors.push(Cell::new(cell.x, cell.y - 1));
        }
        if cell.y + 1 < self.height {
            neighbors.push(Cell::new(cell.x, cell.y + 1));
        }
        if cell.x > 0 {
            neighbors.push(Cell::new(cell.x - 1, cell.y));
        }
        if cell.x + 1 < self.width {
            neighbors.push(Cell::new(cell.x + 1, cell.y));
        }
        neighbors.retain(|&mut neighbor| !self.is_wall(neighbor));
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid_has_no_walls() {
        let map = GridMap::new(4, 3);
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 3);
        assert_eq!(map.num_cells(), 12);
        for y in 0..3 {
            for x in 0..4 {
                assert!(!map.is_wall(Cell::new(x, y)));
            }
        }
    }

    #[test]
    fn test_set_and_clear_wall() {
        let mut map = GridMap::new(3, 3);
        let cell = Cell::new(1, 1);
        map.set_wall(cell);
        assert!(map.is_wall(cell));
        map.clear_wall(cell);
        assert!(!map.is_wall(cell));
    }

    #[test]
    fn test_corner_neighbors() {
        let map = GridMap::new(3, 3);
        let neighbors = map.neighbors(Cell::new(0, 0));
        assert_eq!(neighbors.len(), 2);
        assert!(neighbors.contains(&Cell::new(1, 0)));
        assert!(neighbors.contains(&Cell::new(0, 1)));
    }

    #[test]
    fn test_center_neighbors_exclude_walls() {
        let mut map = GridMap::new(3, 3);
        map.set_wall(Cell::new(1, 0));
        let neighbors = map.neighbors(Cell::new(1, 1));
        assert_eq!(neighbors.len(), 3);
        assert!(!neighbors.contains(&Cell::new(1, 0)));
    }

    #[test]
    fn test_from_ascii() {
        let map = GridMap::from_ascii(&[
            "..#",
            ".#.",
            "...",
        ]);
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 3);
        assert!(map.is_wall(Cell::new(2, 0)));
        assert!(map.is_wall(Cell::new(1, 1)));
        assert!(!map.is_wall(Cell::new(0, 0)));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(format!("{}", Cell::new(2, 5)), "(2, 5)");
    }
}
