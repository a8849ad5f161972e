//! # Waypoint
//!
//! A real-time, top-down tile-grid movement game: steer a token across a
//! procedurally generated landscape until it reaches the goal tile.
//!
//! ## Architecture Overview
//!
//! The crate is split into a pure core and a presentation layer:
//!
//! - **Game**: grid representation, tile coordinates and the [`Session`] that
//!   owns one playthrough (movement, collision, goal detection)
//! - **Generation**: the landscape generator and start/goal placement
//! - **Input**: held-key snapshots and one-shot commands (macroquad)
//! - **Rendering**: frame drawing and the button bar (macroquad)
//! - **Scenes**: the per-tick loop tying input, session and display together
//!
//! The core modules (`game`, `generation`) never touch the window, the clock or
//! the process-wide RNG; randomness is injected as a seeded [`rand::rngs::StdRng`].

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;

pub use game::{
    // From the grid
    Cell,
    Grid,
    // From state
    GameStatus,
    MoveOutcome,
    MovementVector,
    PixelPoint,
    Session,
    SessionConfig,
    SessionStatistics,
    TileCoord,
};

pub use generation::{GenerationConfig, Generator, LandscapeGenerator, Region};

pub use rendering::{MacroquadDisplay, UI};

/// Core error type for the Waypoint game.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WaypointError {
    /// Landscape generation or start/goal placement gave up
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Session or grid state would break an invariant
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Waypoint codebase.
pub type WaypointResult<T> = Result<T, WaypointError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default play-area side length in tiles
    pub const DEFAULT_GRID_SIZE: u32 = 20;

    /// Default tile side length in pixels
    pub const DEFAULT_TILE_SIZE: u32 = 40;

    /// Default player displacement per tick and per active axis, in pixels
    pub const DEFAULT_PLAYER_SPEED: f32 = 8.0;

    /// Distance from the grid edge kept free of stamps and endpoints
    pub const DEFAULT_EDGE_MARGIN: u32 = 2;

    /// Rejection-sampling draws before placement gives up
    pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Fresh grids tried by a single regeneration before it reports failure
    pub const DEFAULT_MAX_MAP_ATTEMPTS: u32 = 16;

    /// Height of the button bar above the play area, in pixels
    pub const BUTTON_BAR_HEIGHT: f32 = 80.0;

    /// Largest play area side, in pixels, a configuration may request
    pub const MAX_PLAY_AREA_SIZE: u32 = 16_384;

    /// Radius of the player token, in pixels
    pub const PLAYER_RADIUS: f32 = 15.0;

    /// Ticks per second targeted by the game loop
    pub const TARGET_FPS: u64 = 60;
}
