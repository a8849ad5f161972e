//! # Game State Module
//!
//! The [`Session`]: complete mutable state of one playthrough.
//!
//! A session owns the grid, the start and goal tiles, the player's continuous
//! position, the current movement vector, the game status and the random
//! source used for regeneration. The presentation layer calls into it once
//! per tick and reads it back for drawing.

use crate::config;
use crate::game::{Grid, MovementVector, PixelPoint, TileCoord};
use crate::generation::{place_endpoints, utils, GenerationConfig, Generator, LandscapeGenerator};
use crate::{WaypointError, WaypointResult};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Whether the goal has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The player has not reached the goal since the last reset
    InProgress,
    /// The player stepped onto the goal tile
    Won,
}

impl GameStatus {
    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}

/// Result of a single [`Session::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The movement vector was zero
    Idle,
    /// The move committed; carries the player's new tile
    Moved(TileCoord),
    /// The candidate tile was out of bounds or blocked; nothing changed
    Blocked(TileCoord),
    /// The move committed onto the goal tile
    ReachedGoal(TileCoord),
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Landscape and placement settings, including the grid size
    pub generation: GenerationConfig,
    /// Tile side length in pixels
    pub tile_size: u32,
    /// Pixels moved per tick along each active axis
    pub player_speed: f32,
    /// Seed for the session RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Fresh grids tried by one regeneration before giving up
    pub max_map_attempts: u32,
}

impl SessionConfig {
    /// Creates a configuration with the standard generation settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::SessionConfig;
    ///
    /// let config = SessionConfig::new(20, 40, 8.0);
    /// assert_eq!(config.grid_size(), 20);
    /// assert!(config.seed.is_none());
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(grid_size: u32, tile_size: u32, player_speed: f32) -> Self {
        Self {
            generation: GenerationConfig::new(grid_size),
            tile_size,
            player_speed,
            seed: None,
            max_map_attempts: config::DEFAULT_MAX_MAP_ATTEMPTS,
        }
    }

    /// Creates a seeded default configuration for testing.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            generation: GenerationConfig::for_testing(config::DEFAULT_GRID_SIZE),
            ..Self::default().with_seed(seed)
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Grid side length in tiles.
    pub fn grid_size(&self) -> u32 {
        self.generation.grid_size
    }

    /// Side length of the play area in pixels.
    pub fn play_area_size(&self) -> u32 {
        self.grid_size().saturating_mul(self.tile_size)
    }

    /// Checks every value before a session is built from this configuration.
    pub fn validate(&self) -> WaypointResult<()> {
        self.generation.validate()?;

        if self.tile_size == 0 {
            return Err(WaypointError::InvalidConfig(
                "Tile size must be positive".to_string(),
            ));
        }
        match self.grid_size().checked_mul(self.tile_size) {
            Some(side) if side <= config::MAX_PLAY_AREA_SIZE => {}
            _ => {
                return Err(WaypointError::InvalidConfig(format!(
                    "A {}x{} grid of {} px tiles exceeds the {} px play area limit",
                    self.grid_size(),
                    self.grid_size(),
                    self.tile_size,
                    config::MAX_PLAY_AREA_SIZE
                )));
            }
        }
        if !self.player_speed.is_finite() || self.player_speed <= 0.0 {
            return Err(WaypointError::InvalidConfig(format!(
                "Player speed must be a positive number, got {}",
                self.player_speed
            )));
        }
        if self.max_map_attempts == 0 {
            return Err(WaypointError::InvalidConfig(
                "Regeneration needs at least one map attempt".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(
            config::DEFAULT_GRID_SIZE,
            config::DEFAULT_TILE_SIZE,
            config::DEFAULT_PLAYER_SPEED,
        )
    }
}

/// Counters kept across the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatistics {
    /// Maps generated, including the first one
    pub maps_generated: u32,
    /// Explicit player resets
    pub player_resets: u32,
    /// Committed moves
    pub steps_taken: u64,
    /// Rejected moves
    pub blocked_moves: u64,
    /// Transitions into [`GameStatus::Won`]
    pub wins: u32,
}

/// One playthrough: grid, endpoints, player and status.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    generator: LandscapeGenerator,
    rng: StdRng,
    grid: Grid,
    start: TileCoord,
    goal: TileCoord,
    player: PixelPoint,
    movement: MovementVector,
    status: GameStatus,
    statistics: SessionStatistics,
}

impl Session {
    /// Creates a session and generates its first map.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::{GameStatus, Session, SessionConfig};
    ///
    /// let session = Session::new(SessionConfig::for_testing(12345)).unwrap();
    /// assert_eq!(session.status(), GameStatus::InProgress);
    /// assert!(session.grid().is_open(session.start()));
    /// ```
    pub fn new(config: SessionConfig) -> WaypointResult<Self> {
        config.validate()?;

        let generator = LandscapeGenerator::new();
        let mut rng = utils::create_rng(config.seed);
        let (grid, start, goal) = build_layout(&generator, &config, &mut rng)?;

        let mut session = Self {
            player: start.pixel_center(config.tile_size),
            config,
            generator,
            rng,
            grid,
            start,
            goal,
            movement: MovementVector::ZERO,
            status: GameStatus::InProgress,
            statistics: SessionStatistics::default(),
        };
        session.statistics.maps_generated = 1;

        info!(
            "New session: {}x{} grid, start {:?}, goal {:?}",
            session.grid.size(),
            session.grid.size(),
            session.start,
            session.goal
        );

        Ok(session)
    }

    /// Creates a session on a known layout.
    ///
    /// The grid size in `config` is replaced by the grid's own size. Fails
    /// when either endpoint is not open or they are closer than the
    /// separation minimum.
    pub fn from_parts(
        grid: Grid,
        start: TileCoord,
        goal: TileCoord,
        mut config: SessionConfig,
    ) -> WaypointResult<Self> {
        config.generation.grid_size = grid.size();
        config.validate()?;

        for (name, tile) in [("Start", start), ("Goal", goal)] {
            if !grid.is_open(tile) {
                return Err(WaypointError::InvalidState(format!(
                    "{} tile ({}, {}) is not open",
                    name, tile.col, tile.row
                )));
            }
        }

        let min_separation = config.generation.min_separation();
        if start.manhattan_distance(goal) < min_separation {
            return Err(WaypointError::InvalidState(format!(
                "Start and goal are {} tiles apart, need at least {}",
                start.manhattan_distance(goal),
                min_separation
            )));
        }

        let rng = utils::create_rng(config.seed);
        Ok(Self {
            player: start.pixel_center(config.tile_size),
            config,
            generator: LandscapeGenerator::new(),
            rng,
            grid,
            start,
            goal,
            movement: MovementVector::ZERO,
            status: GameStatus::InProgress,
            statistics: SessionStatistics::default(),
        })
    }

    /// Replaces the grid, start and goal with a freshly generated layout and
    /// respawns the player.
    ///
    /// On failure the current layout is left untouched.
    pub fn regenerate(&mut self) -> WaypointResult<()> {
        let (grid, start, goal) = build_layout(&self.generator, &self.config, &mut self.rng)?;

        self.grid = grid;
        self.start = start;
        self.goal = goal;
        self.respawn();
        self.statistics.maps_generated += 1;

        info!(
            "Generated map #{}: start {:?}, goal {:?}",
            self.statistics.maps_generated, self.start, self.goal
        );
        Ok(())
    }

    /// Puts the player back on the start tile. The grid, start and goal are
    /// unchanged.
    pub fn reset_player(&mut self) {
        self.respawn();
        self.statistics.player_resets += 1;
        debug!("Player reset to {:?}", self.start);
    }

    fn respawn(&mut self) {
        self.player = self.start.pixel_center(self.config.tile_size);
        self.movement = MovementVector::ZERO;
        self.status = GameStatus::InProgress;
    }

    /// Sets the movement vector applied by the next [`Session::advance`].
    ///
    /// Components are clamped to `{-1, 0, 1}`.
    pub fn set_movement(&mut self, dx: i32, dy: i32) {
        self.movement = MovementVector::new(dx, dy);
    }

    /// Applies one movement step with the current movement vector.
    ///
    /// The candidate position commits only when it lands on an in-bounds open
    /// tile; otherwise the player stays where it is. Landing on the goal sets
    /// the status to [`GameStatus::Won`].
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::{Grid, MoveOutcome, Region, Session, SessionConfig, TileCoord};
    ///
    /// let mut grid = Grid::new(20);
    /// grid.carve(&Region::new(TileCoord::new(2, 2), 8, 8));
    /// let mut session = Session::from_parts(
    ///     grid,
    ///     TileCoord::new(2, 2),
    ///     TileCoord::new(8, 8),
    ///     SessionConfig::default(),
    /// ).unwrap();
    ///
    /// session.set_movement(-1, 0);
    /// session.advance();
    /// session.advance();
    /// // x went 100 -> 92 -> 84; the next step would enter blocked column 1
    /// assert!(matches!(session.advance(), MoveOutcome::Blocked(_)));
    /// assert_eq!(session.player_position().x, 84.0);
    /// ```
    pub fn advance(&mut self) -> MoveOutcome {
        if self.movement.is_zero() {
            return MoveOutcome::Idle;
        }

        let candidate = self.player + self.movement.displacement(self.config.player_speed);
        let tile = TileCoord::from_pixel(candidate, self.config.tile_size);

        if !self.grid.is_open(tile) {
            self.statistics.blocked_moves += 1;
            return MoveOutcome::Blocked(tile);
        }

        self.player = candidate;
        self.statistics.steps_taken += 1;

        if tile == self.goal {
            if !self.status.is_won() {
                self.statistics.wins += 1;
                info!("Goal {:?} reached", tile);
            }
            self.status = GameStatus::Won;
            return MoveOutcome::ReachedGoal(tile);
        }

        MoveOutcome::Moved(tile)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> TileCoord {
        self.start
    }

    pub fn goal(&self) -> TileCoord {
        self.goal
    }

    /// Player position in pixel space.
    pub fn player_position(&self) -> PixelPoint {
        self.player
    }

    /// Tile currently containing the player.
    pub fn player_tile(&self) -> TileCoord {
        TileCoord::from_pixel(self.player, self.config.tile_size)
    }

    pub fn movement(&self) -> MovementVector {
        self.movement
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn tile_size(&self) -> u32 {
        self.config.tile_size
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }
}

/// Generates a grid and places endpoints on it, starting over with a fresh
/// grid whenever placement fails.
fn build_layout(
    generator: &LandscapeGenerator,
    config: &SessionConfig,
    rng: &mut StdRng,
) -> WaypointResult<(Grid, TileCoord, TileCoord)> {
    let mut last_error = None;

    for attempt in 1..=config.max_map_attempts {
        let layout = generator
            .generate(&config.generation, rng)
            .and_then(|grid| {
                place_endpoints(&grid, &config.generation, rng).map(|(start, goal)| (grid, start, goal))
            });

        match layout {
            Ok(layout) => return Ok(layout),
            Err(WaypointError::GenerationFailed(reason)) => {
                warn!("Map attempt {} discarded: {}", attempt, reason);
                last_error = Some(reason);
            }
            Err(other) => return Err(other),
        }
    }

    Err(WaypointError::GenerationFailed(format!(
        "Gave up after {} maps: {}",
        config.max_map_attempts,
        last_error.unwrap_or_default()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Region;

    /// 20x20 grid with an 8x8 open area in the top-left interior.
    fn open_area_session() -> Session {
        let mut grid = Grid::new(20);
        grid.carve(&Region::new(TileCoord::new(2, 2), 8, 8));
        Session::from_parts(
            grid,
            TileCoord::new(2, 2),
            TileCoord::new(8, 8),
            SessionConfig::default(),
        )
        .unwrap()
    }

    /// 20x20 grid with a single open corridor along row 2.
    fn corridor_session() -> Session {
        let mut grid = Grid::new(20);
        grid.carve(&Region::new(TileCoord::new(2, 2), 8, 1));
        let config = SessionConfig {
            player_speed: 40.0,
            ..SessionConfig::default()
        };
        Session::from_parts(grid, TileCoord::new(2, 2), TileCoord::new(8, 2), config).unwrap()
    }

    #[test]
    fn test_session_creation() {
        let session = Session::new(SessionConfig::for_testing(12345)).unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.movement(), MovementVector::ZERO);
        assert_eq!(session.player_position(), session.start().pixel_center(40));
        assert_eq!(session.player_tile(), session.start());
        assert_eq!(session.statistics().maps_generated, 1);
    }

    #[test]
    fn test_small_step_stays_in_tile() {
        let mut session = open_area_session();
        assert_eq!(session.player_position(), PixelPoint::new(100.0, 100.0));

        session.set_movement(1, 0);
        assert_eq!(session.advance(), MoveOutcome::Moved(TileCoord::new(2, 2)));
        assert_eq!(session.player_position(), PixelPoint::new(108.0, 100.0));
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_move_into_blocked_tile_is_rejected() {
        let mut session = open_area_session();
        session.set_movement(0, -1);
        assert_eq!(session.advance(), MoveOutcome::Moved(TileCoord::new(2, 2)));
        assert_eq!(session.advance(), MoveOutcome::Moved(TileCoord::new(2, 2)));
        let before = session.player_position();

        // y would drop to 76, inside blocked row 1
        assert_eq!(session.advance(), MoveOutcome::Blocked(TileCoord::new(2, 1)));
        assert_eq!(session.player_position(), before);
        assert_eq!(session.statistics().blocked_moves, 1);
    }

    #[test]
    fn test_large_step_into_wall_is_rejected() {
        let mut grid = Grid::new(20);
        grid.carve(&Region::new(TileCoord::new(2, 2), 8, 8));
        let config = SessionConfig {
            player_speed: 400.0,
            ..SessionConfig::default()
        };
        let mut session =
            Session::from_parts(grid, TileCoord::new(2, 2), TileCoord::new(8, 8), config).unwrap();

        session.set_movement(-1, 0);
        assert!(matches!(session.advance(), MoveOutcome::Blocked(_)));
        assert_eq!(session.player_position(), PixelPoint::new(100.0, 100.0));
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut session = corridor_session();
        session.config.player_speed = 10_000.0;
        session.set_movement(1, 1);
        assert!(matches!(session.advance(), MoveOutcome::Blocked(_)));
        assert_eq!(session.player_tile(), TileCoord::new(2, 2));
    }

    #[test]
    fn test_reaching_goal_wins_on_same_call() {
        let mut session = corridor_session();
        session.set_movement(1, 0);

        for col in 3..8 {
            assert_eq!(session.advance(), MoveOutcome::Moved(TileCoord::new(col, 2)));
            assert_eq!(session.status(), GameStatus::InProgress);
        }

        assert_eq!(session.advance(), MoveOutcome::ReachedGoal(TileCoord::new(8, 2)));
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.statistics().wins, 1);
    }

    #[test]
    fn test_player_can_keep_moving_after_win() {
        let mut session = corridor_session();
        session.set_movement(1, 0);
        while !session.status().is_won() {
            session.advance();
        }
        assert_eq!(session.advance(), MoveOutcome::Moved(TileCoord::new(9, 2)));
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn test_zero_movement_is_idle() {
        let mut session = open_area_session();
        let position = session.player_position();
        session.set_movement(0, 0);
        for _ in 0..10 {
            assert_eq!(session.advance(), MoveOutcome::Idle);
        }
        assert_eq!(session.player_position(), position);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_diagonal_covers_speed_on_both_axes() {
        let mut session = open_area_session();
        session.set_movement(1, 1);
        session.advance();
        assert_eq!(session.player_position(), PixelPoint::new(108.0, 108.0));
    }

    #[test]
    fn test_reset_player() {
        let mut session = corridor_session();
        session.set_movement(1, 0);
        while !session.status().is_won() {
            session.advance();
        }

        session.reset_player();
        assert_eq!(session.player_position(), TileCoord::new(2, 2).pixel_center(40));
        assert_eq!(session.movement(), MovementVector::ZERO);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.goal(), TileCoord::new(8, 2));
        assert_eq!(session.statistics().player_resets, 1);
    }

    #[test]
    fn test_regenerate_resets_state() {
        let mut session = Session::new(SessionConfig::for_testing(777)).unwrap();
        session.set_movement(1, 0);
        session.advance();

        session.regenerate().unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.movement(), MovementVector::ZERO);
        assert_eq!(session.player_position(), session.start().pixel_center(40));
        assert!(session.grid().is_open(session.start()));
        assert!(session.grid().is_open(session.goal()));
        assert!(session.start().manhattan_distance(session.goal()) >= 6);
        assert_eq!(session.statistics().maps_generated, 2);
    }

    #[test]
    fn test_failed_regeneration_keeps_layout() {
        let mut session = open_area_session();
        session.config.generation.area_count = 0;
        session.config.max_map_attempts = 2;

        let grid = session.grid().clone();
        let result = session.regenerate();
        assert!(matches!(result, Err(WaypointError::GenerationFailed(_))));
        assert_eq!(session.grid(), &grid);
        assert_eq!(session.start(), TileCoord::new(2, 2));
    }

    #[test]
    fn test_from_parts_validation() {
        let mut grid = Grid::new(20);
        grid.carve(&Region::new(TileCoord::new(2, 2), 8, 8));

        let blocked_start = Session::from_parts(
            grid.clone(),
            TileCoord::new(15, 15),
            TileCoord::new(2, 2),
            SessionConfig::default(),
        );
        assert!(blocked_start.is_err());

        let too_close = Session::from_parts(
            grid,
            TileCoord::new(2, 2),
            TileCoord::new(3, 3),
            SessionConfig::default(),
        );
        assert!(too_close.is_err());
    }

    #[test]
    fn test_config_validation() {
        assert!(SessionConfig::new(20, 0, 8.0).validate().is_err());
        assert!(SessionConfig::new(20, 40, 0.0).validate().is_err());
        assert!(SessionConfig::new(20, 40, f32::NAN).validate().is_err());
        assert!(SessionConfig::new(3, 40, 8.0).validate().is_err());
        assert!(Session::new(SessionConfig::new(4, 40, 8.0)).is_err());
    }

    #[test]
    fn test_unplaceable_grid_is_rejected_up_front() {
        let config = SessionConfig::new(5, 40, 8.0).with_seed(1);
        assert!(matches!(
            config.validate(),
            Err(WaypointError::InvalidConfig(_))
        ));
        assert!(matches!(
            Session::new(config),
            Err(WaypointError::InvalidConfig(_))
        ));

        let session = Session::new(SessionConfig::new(6, 40, 8.0).with_seed(1)).unwrap();
        assert!(session.start().manhattan_distance(session.goal()) >= 2);
    }

    #[test]
    fn test_oversized_play_area_is_rejected() {
        let config = SessionConfig::new(100_000, 100_000, 8.0);
        assert_eq!(config.play_area_size(), u32::MAX);
        assert!(matches!(
            config.validate(),
            Err(WaypointError::InvalidConfig(_))
        ));

        assert!(SessionConfig::new(20, 819, 8.0).validate().is_err());
        assert!(SessionConfig::new(20, 819, 8.0).play_area_size() > config::MAX_PLAY_AREA_SIZE);
        assert!(SessionConfig::new(20, 800, 8.0).validate().is_ok());
    }
}
