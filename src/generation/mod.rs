//! # Generation Module
//!
//! Procedural landscape generation and start/goal placement.
//!
//! Generation starts from an all-blocked grid and carves rectangular open
//! areas and connecting strips into it. Placement then picks start and goal
//! tiles on open cells with a minimum Manhattan separation.

pub mod landscape;
pub mod placement;

pub use landscape::*;
pub use placement::*;

use crate::config;
use crate::game::{Grid, TileCoord};
use crate::{WaypointError, WaypointResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for landscape generation and endpoint placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Grid side length in tiles
    pub grid_size: u32,
    /// Number of open areas carved per map
    pub area_count: u32,
    /// Minimum area width/height
    pub min_area_size: u32,
    /// Maximum area width/height
    pub max_area_size: u32,
    /// Horizontal + vertical strip pairs stamped per area
    pub strip_pairs_per_area: u32,
    /// Short side of every strip
    pub strip_thickness: u32,
    /// Minimum strip length
    pub min_strip_length: u32,
    /// Maximum strip length
    pub max_strip_length: u32,
    /// Tiles kept free of stamps and endpoints along every edge
    pub edge_margin: u32,
    /// Rejection-sampling draws before placement gives up
    pub max_placement_attempts: u32,
}

impl GenerationConfig {
    /// Creates the standard configuration for a grid of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(20);
    /// assert_eq!(config.area_count, 3);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            area_count: 3,
            min_area_size: 8,
            max_area_size: 12,
            strip_pairs_per_area: 2,
            strip_thickness: 5,
            min_strip_length: 6,
            max_strip_length: 10,
            edge_margin: config::DEFAULT_EDGE_MARGIN,
            max_placement_attempts: config::DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Creates a configuration for testing with a lower placement bound.
    pub fn for_testing(grid_size: u32) -> Self {
        Self {
            max_placement_attempts: 1_000,
            ..Self::new(grid_size)
        }
    }

    /// Minimum Manhattan distance between start and goal.
    pub fn min_separation(&self) -> u32 {
        self.grid_size / 3
    }

    /// Checks that every range is well formed and the interior is non-empty.
    pub fn validate(&self) -> WaypointResult<()> {
        if self.edge_margin == 0 {
            return Err(WaypointError::InvalidConfig(
                "Edge margin must be at least 1 to keep the boundary wall".to_string(),
            ));
        }
        if self.grid_size <= self.edge_margin.saturating_mul(2) {
            return Err(WaypointError::InvalidConfig(format!(
                "Grid size {} leaves no interior inside a margin of {}",
                self.grid_size, self.edge_margin
            )));
        }
        let window = self.grid_size - 2 * self.edge_margin;
        if (window - 1).saturating_mul(2) < self.min_separation() {
            return Err(WaypointError::InvalidConfig(format!(
                "Grid size {} is too small to place start and goal {} tiles apart",
                self.grid_size,
                self.min_separation()
            )));
        }
        if self.min_area_size == 0 || self.min_area_size > self.max_area_size {
            return Err(WaypointError::InvalidConfig(format!(
                "Area size range {}..={} is empty",
                self.min_area_size, self.max_area_size
            )));
        }
        if self.min_strip_length == 0 || self.min_strip_length > self.max_strip_length {
            return Err(WaypointError::InvalidConfig(format!(
                "Strip length range {}..={} is empty",
                self.min_strip_length, self.max_strip_length
            )));
        }
        if self.strip_thickness == 0 {
            return Err(WaypointError::InvalidConfig(
                "Strip thickness must be positive".to_string(),
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(WaypointError::InvalidConfig(
                "Placement needs at least one attempt".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(config::DEFAULT_GRID_SIZE)
    }
}

/// An axis-aligned rectangle of tiles stamped open during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Top-left corner
    pub top_left: TileCoord,
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
}

impl Region {
    /// Creates a new region.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::{Region, TileCoord};
    ///
    /// let region = Region::new(TileCoord::new(2, 3), 4, 2);
    /// assert_eq!(region.area(), 8);
    /// assert!(region.contains(TileCoord::new(5, 4)));
    /// assert!(!region.contains(TileCoord::new(6, 4)));
    /// ```
    pub fn new(top_left: TileCoord, width: u32, height: u32) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    /// Gets the bottom-right tile of the region (inclusive).
    pub fn bottom_right(&self) -> TileCoord {
        TileCoord::new(
            self.top_left.col + self.width as i32 - 1,
            self.top_left.row + self.height as i32 - 1,
        )
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Checks if a tile is inside this region.
    pub fn contains(&self, tile: TileCoord) -> bool {
        tile.col >= self.top_left.col
            && tile.row >= self.top_left.row
            && tile.col < self.top_left.col + self.width as i32
            && tile.row < self.top_left.row + self.height as i32
    }

    /// Iterates over every tile in the region, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = TileCoord> {
        let Region {
            top_left,
            width,
            height,
        } = *self;
        (0..height as i32).flat_map(move |dy| {
            (0..width as i32).map(move |dx| TileCoord::new(top_left.col + dx, top_left.row + dy))
        })
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WaypointResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> WaypointResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a random number generator, seeded when a seed is given and
    /// from OS entropy otherwise.
    pub fn create_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Validates that a grid keeps its boundary wall and has somewhere to stand.
    pub fn validate_grid(grid: &Grid) -> WaypointResult<()> {
        if let Some((tile, _)) = grid
            .tiles()
            .find(|(tile, cell)| cell.is_open() && grid.is_boundary(*tile))
        {
            return Err(WaypointError::GenerationFailed(format!(
                "Boundary tile ({}, {}) is open",
                tile.col, tile.row
            )));
        }

        if grid.open_count() == 0 {
            return Err(WaypointError::GenerationFailed(
                "Grid has no open tiles".to_string(),
            ));
        }

        Ok(())
    }
}
