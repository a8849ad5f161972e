//! # Game Module
//!
//! Core game state: the tile grid, coordinates in tile and pixel space, and
//! the session that owns a single playthrough.
//!
//! Nothing in here depends on the window or the input devices; the
//! presentation layer drives a [`Session`] and reads it back for drawing.

pub mod state;
pub mod world;

pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Integer `(col, row)` index of a grid cell.
///
/// Coordinates are signed so that positions just outside the grid (for
/// example a candidate move past the left edge) can still be represented and
/// rejected by bounds checks.
///
/// # Examples
///
/// ```
/// use waypoint::TileCoord;
///
/// let a = TileCoord::new(2, 3);
/// let b = TileCoord::new(7, 1);
/// assert_eq!(a.manhattan_distance(b), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub col: i32,
    pub row: i32,
}

impl TileCoord {
    /// Creates a new tile coordinate.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Calculates the Manhattan distance to another tile.
    pub fn manhattan_distance(self, other: TileCoord) -> u32 {
        (self.col - other.col).unsigned_abs() + (self.row - other.row).unsigned_abs()
    }

    /// Returns the tile containing a pixel-space point.
    ///
    /// Uses floor division, so points left of or above the origin map to
    /// negative tiles rather than tile zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::{PixelPoint, TileCoord};
    ///
    /// assert_eq!(TileCoord::from_pixel(PixelPoint::new(108.0, 79.5), 40), TileCoord::new(2, 1));
    /// assert_eq!(TileCoord::from_pixel(PixelPoint::new(-0.5, 10.0), 40), TileCoord::new(-1, 0));
    /// ```
    pub fn from_pixel(point: PixelPoint, tile_size: u32) -> Self {
        let size = tile_size as f32;
        Self::new(
            (point.x / size).floor() as i32,
            (point.y / size).floor() as i32,
        )
    }

    /// Returns the pixel center of this tile.
    ///
    /// The half-tile offset uses integer division, so odd tile sizes round
    /// the center toward the tile origin.
    pub fn pixel_center(self, tile_size: u32) -> PixelPoint {
        let size = tile_size as i64;
        let half = size / 2;
        PixelPoint::new(
            (self.col as i64 * size + half) as f32,
            (self.row as i64 * size + half) as f32,
        )
    }
}

/// Continuous position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    /// Creates a new pixel-space point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for PixelPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

/// Per-axis movement direction, each component in `{-1, 0, 1}`.
///
/// The vector is not normalized: a diagonal step covers
/// `speed` pixels on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovementVector {
    dx: i8,
    dy: i8,
}

impl MovementVector {
    /// The stationary vector.
    pub const ZERO: MovementVector = MovementVector { dx: 0, dy: 0 };

    /// Creates a movement vector, clamping each component to its sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::MovementVector;
    ///
    /// let v = MovementVector::new(5, -2);
    /// assert_eq!((v.dx(), v.dy()), (1, -1));
    /// ```
    pub fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum() as i8,
            dy: dy.signum() as i8,
        }
    }

    /// Horizontal component.
    pub fn dx(self) -> i32 {
        self.dx as i32
    }

    /// Vertical component.
    pub fn dy(self) -> i32 {
        self.dy as i32
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Pixel displacement for one tick at the given speed.
    pub fn displacement(self, speed: f32) -> PixelPoint {
        PixelPoint::new(self.dx as f32 * speed, self.dy as f32 * speed)
    }
}
