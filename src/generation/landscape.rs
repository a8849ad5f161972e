//! # Landscape Generation
//!
//! Carves open areas and connecting strips out of an all-blocked grid.
//!
//! Every map is built the same way:
//! 1. Start from an all-blocked grid and stamp the boundary ring
//! 2. Carve `area_count` rectangular open areas
//! 3. After each area, carve pairs of horizontal and vertical strips at
//!    independent random positions
//!
//! Stamps only ever open cells. Connectivity is not checked; with the default
//! densities the open cells almost always form one region.

use crate::game::{Grid, TileCoord};
use crate::generation::{utils, GenerationConfig, Generator, Region};
use crate::WaypointResult;
use log::{debug, trace};
use rand::{rngs::StdRng, Rng};

/// Generator for open-area landscapes.
#[derive(Debug, Clone, Default)]
pub struct LandscapeGenerator;

impl LandscapeGenerator {
    /// Creates a new landscape generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::{GenerationConfig, Generator, LandscapeGenerator};
    /// use waypoint::generation::utils;
    ///
    /// let generator = LandscapeGenerator::new();
    /// let mut rng = utils::create_rng(Some(7));
    /// let grid = generator.generate(&GenerationConfig::new(20), &mut rng).unwrap();
    /// assert!(grid.open_count() > 0);
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Picks a region of the requested size inside the margin.
    ///
    /// Dimensions larger than the interior are shrunk to fit, so the region
    /// always lies in `[margin, size - margin)` on both axes. Returns `None`
    /// when the interior is empty.
    fn fit_region(
        &self,
        config: &GenerationConfig,
        width: u32,
        height: u32,
        rng: &mut StdRng,
    ) -> Option<Region> {
        let margin = config.edge_margin;
        let interior = config.grid_size.checked_sub(2 * margin)?;
        if interior == 0 {
            return None;
        }

        let width = width.min(interior);
        let height = height.min(interior);
        let left = rng.gen_range(margin..=config.grid_size - margin - width);
        let top = rng.gen_range(margin..=config.grid_size - margin - height);

        Some(Region::new(
            TileCoord::new(left as i32, top as i32),
            width,
            height,
        ))
    }

    /// Draws and carves one open area.
    fn carve_area(&self, grid: &mut Grid, config: &GenerationConfig, rng: &mut StdRng) {
        let width = rng.gen_range(config.min_area_size..=config.max_area_size);
        let height = rng.gen_range(config.min_area_size..=config.max_area_size);

        if let Some(area) = self.fit_region(config, width, height, rng) {
            let opened = grid.carve(&area);
            trace!("Carved area {:?} ({} new open tiles)", area, opened);
        }
    }

    /// Carves the strips that accompany one area.
    ///
    /// A single length is drawn per area and shared by all of its strips.
    fn carve_strips(&self, grid: &mut Grid, config: &GenerationConfig, rng: &mut StdRng) {
        let length = rng.gen_range(config.min_strip_length..=config.max_strip_length);
        let thickness = config.strip_thickness;

        for _ in 0..config.strip_pairs_per_area {
            if let Some(horizontal) = self.fit_region(config, length, thickness, rng) {
                let opened = grid.carve(&horizontal);
                trace!("Carved horizontal strip {:?} ({} new)", horizontal, opened);
            }

            if let Some(vertical) = self.fit_region(config, thickness, length, rng) {
                let opened = grid.carve(&vertical);
                trace!("Carved vertical strip {:?} ({} new)", vertical, opened);
            }
        }
    }
}

impl Generator<Grid> for LandscapeGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WaypointResult<Grid> {
        config.validate()?;

        let mut grid = Grid::new(config.grid_size);
        grid.stamp_boundary();

        for _ in 0..config.area_count {
            self.carve_area(&mut grid, config, rng);
            self.carve_strips(&mut grid, config, rng);
        }

        self.validate(&grid, config)?;

        debug!(
            "{} produced a {}x{} grid with {} open tiles",
            self.generator_type(),
            config.grid_size,
            config.grid_size,
            grid.open_count()
        );

        Ok(grid)
    }

    fn validate(&self, grid: &Grid, _config: &GenerationConfig) -> WaypointResult<()> {
        utils::validate_grid(grid)
    }

    fn generator_type(&self) -> &'static str {
        "LandscapeGenerator"
    }
}

/// Generates a landscape of the given side length with the standard settings.
pub fn generate_landscape(size: u32, rng: &mut StdRng) -> WaypointResult<Grid> {
    LandscapeGenerator::new().generate(&GenerationConfig::new(size), rng)
}
