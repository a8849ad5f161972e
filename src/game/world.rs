//! # World Representation
//!
//! The square tile grid the player moves on.

use super::TileCoord;
use crate::generation::Region;
use crate::{WaypointError, WaypointResult};
use serde::{Deserialize, Serialize};

/// Traversability tag of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Walkable terrain
    Open,
    /// Obstacle or boundary wall
    Blocked,
}

impl Cell {
    /// Returns true if the player may stand on this cell.
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    /// Character used by [`Grid::to_ascii`] and [`Grid::from_ascii`].
    pub fn to_char(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Blocked => '#',
        }
    }
}

/// A square grid of [`Cell`]s stored row-major.
///
/// The outermost ring (row 0, row N-1, column 0, column N-1) is always
/// [`Cell::Blocked`]; every mutator on this type preserves that.
///
/// # Examples
///
/// ```
/// use waypoint::{Cell, Grid, TileCoord};
///
/// let grid = Grid::new(10);
/// assert_eq!(grid.size(), 10);
/// assert_eq!(grid.get(TileCoord::new(5, 5)), Some(Cell::Blocked));
/// assert_eq!(grid.get(TileCoord::new(10, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-blocked grid with the given side length.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            cells: vec![Cell::Blocked; (size as usize) * (size as usize)],
        }
    }

    /// Parses a grid from rows of `'.'` (open) and `'#'` (blocked).
    ///
    /// The rows must form a square and the boundary ring must be blocked.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::{Grid, TileCoord};
    ///
    /// let grid = Grid::from_ascii(&["#####", "#..##", "#####", "#####", "#####"]).unwrap();
    /// assert!(grid.is_open(TileCoord::new(2, 1)));
    /// assert!(!grid.is_open(TileCoord::new(3, 1)));
    /// ```
    pub fn from_ascii(rows: &[&str]) -> WaypointResult<Self> {
        let size = rows.len() as u32;
        let mut grid = Grid::new(size);

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != rows.len() {
                return Err(WaypointError::InvalidState(format!(
                    "Row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    rows.len()
                )));
            }

            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Open,
                    '#' => Cell::Blocked,
                    other => {
                        return Err(WaypointError::InvalidState(format!(
                            "Unknown cell character '{}' at ({}, {})",
                            other, col, row
                        )))
                    }
                };
                grid.set(TileCoord::new(col as i32, row as i32), cell)?;
            }
        }

        Ok(grid)
    }

    /// Renders the grid as one string per row, the inverse of [`Grid::from_ascii`].
    pub fn to_ascii(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
            .collect()
    }

    /// Side length in tiles.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Checks whether a tile coordinate lies inside the grid.
    pub fn in_bounds(&self, tile: TileCoord) -> bool {
        tile.col >= 0 && tile.row >= 0 && (tile.col as u32) < self.size && (tile.row as u32) < self.size
    }

    /// Checks whether a tile lies on the outermost ring.
    pub fn is_boundary(&self, tile: TileCoord) -> bool {
        self.in_bounds(tile)
            && (tile.col == 0
                || tile.row == 0
                || tile.col as u32 == self.size - 1
                || tile.row as u32 == self.size - 1)
    }

    fn index(&self, tile: TileCoord) -> Option<usize> {
        if self.in_bounds(tile) {
            Some(tile.row as usize * self.size as usize + tile.col as usize)
        } else {
            None
        }
    }

    /// Gets the cell at a tile, or `None` when out of bounds.
    pub fn get(&self, tile: TileCoord) -> Option<Cell> {
        self.index(tile).map(|i| self.cells[i])
    }

    /// Returns true only for in-bounds, open tiles.
    pub fn is_open(&self, tile: TileCoord) -> bool {
        self.get(tile).map(Cell::is_open).unwrap_or(false)
    }

    /// Sets a single cell.
    ///
    /// Fails when the tile is out of bounds or when asked to open a
    /// boundary cell.
    pub fn set(&mut self, tile: TileCoord, cell: Cell) -> WaypointResult<()> {
        if cell.is_open() && self.is_boundary(tile) {
            return Err(WaypointError::InvalidState(format!(
                "Cannot open boundary tile ({}, {})",
                tile.col, tile.row
            )));
        }

        let index = self.index(tile).ok_or_else(|| {
            WaypointError::InvalidState(format!(
                "Tile ({}, {}) is outside a {}x{} grid",
                tile.col, tile.row, self.size, self.size
            ))
        })?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Marks every cell of the ring as blocked.
    pub fn stamp_boundary(&mut self) {
        if self.size == 0 {
            return;
        }
        let last = self.size as usize - 1;
        let size = self.size as usize;
        for i in 0..size {
            self.cells[i] = Cell::Blocked;
            self.cells[last * size + i] = Cell::Blocked;
            self.cells[i * size] = Cell::Blocked;
            self.cells[i * size + last] = Cell::Blocked;
        }
    }

    /// Opens every cell of a region, clipped to the interior.
    ///
    /// Open cells stay open. Returns the number of cells that changed.
    pub fn carve(&mut self, region: &Region) -> usize {
        let mut opened = 0;
        for tile in region.tiles() {
            if self.is_boundary(tile) {
                continue;
            }
            if let Some(i) = self.index(tile) {
                if self.cells[i] == Cell::Blocked {
                    self.cells[i] = Cell::Open;
                    opened += 1;
                }
            }
        }
        opened
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1) as usize)
    }

    /// Iterates over every tile with its cell, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (TileCoord, Cell)> + '_ {
        let size = self.size.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            (TileCoord::new((i % size) as i32, (i / size) as i32), *cell)
        })
    }
}
