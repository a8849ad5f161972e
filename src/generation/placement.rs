//! # Endpoint Placement
//!
//! Rejection sampling of open tiles for the start and goal.

use crate::game::{Grid, TileCoord};
use crate::generation::GenerationConfig;
use crate::{WaypointError, WaypointResult};
use log::trace;
use rand::{rngs::StdRng, Rng};

/// Samples tiles uniformly in `[margin, size - margin)` on both axes until
/// one is open.
///
/// Gives up with [`WaypointError::GenerationFailed`] after `max_attempts`
/// draws, or immediately when the sampling window is empty.
///
/// # Examples
///
/// ```
/// use waypoint::{find_open_tile, Grid, Region, TileCoord};
/// use waypoint::generation::utils;
///
/// let mut grid = Grid::new(10);
/// grid.carve(&Region::new(TileCoord::new(4, 4), 1, 1));
///
/// let mut rng = utils::create_rng(Some(1));
/// assert_eq!(find_open_tile(&grid, 2, &mut rng, 10_000).unwrap(), TileCoord::new(4, 4));
/// ```
pub fn find_open_tile(
    grid: &Grid,
    margin: u32,
    rng: &mut StdRng,
    max_attempts: u32,
) -> WaypointResult<TileCoord> {
    let size = grid.size();
    if size <= 2 * margin {
        return Err(WaypointError::GenerationFailed(format!(
            "No tiles lie inside a margin of {} on a {}x{} grid",
            margin, size, size
        )));
    }

    for _ in 0..max_attempts {
        let col = rng.gen_range(margin..size - margin);
        let row = rng.gen_range(margin..size - margin);
        let tile = TileCoord::new(col as i32, row as i32);
        if grid.is_open(tile) {
            return Ok(tile);
        }
    }

    Err(WaypointError::GenerationFailed(format!(
        "No open tile found after {} attempts",
        max_attempts
    )))
}

/// Picks a start and a goal on open tiles at least
/// [`GenerationConfig::min_separation`] apart.
///
/// The start is drawn once; only the goal is redrawn while the two are too
/// close. Redraws share the placement attempt bound.
pub fn place_endpoints(
    grid: &Grid,
    config: &GenerationConfig,
    rng: &mut StdRng,
) -> WaypointResult<(TileCoord, TileCoord)> {
    let margin = config.edge_margin;
    let attempts = config.max_placement_attempts;
    let min_separation = config.min_separation();

    let start = find_open_tile(grid, margin, rng, attempts)?;
    let mut goal = find_open_tile(grid, margin, rng, attempts)?;

    let mut redraws = 0;
    while start.manhattan_distance(goal) < min_separation {
        if redraws >= attempts {
            return Err(WaypointError::GenerationFailed(format!(
                "Could not place a goal at least {} tiles from start ({}, {}) after {} attempts",
                min_separation, start.col, start.row, attempts
            )));
        }
        goal = find_open_tile(grid, margin, rng, attempts)?;
        redraws += 1;
    }

    trace!(
        "Placed start {:?} and goal {:?} after {} goal redraws",
        start,
        goal,
        redraws
    );

    Ok((start, goal))
}
