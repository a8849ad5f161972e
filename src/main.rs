//! # Waypoint Main Entry Point
//!
//! Parses the command line, sets up logging, builds the session and runs the
//! macroquad game loop.

use clap::Parser;
use log::{info, LevelFilter};
use macroquad::prelude::*;
use waypoint::{InputHandler, SceneManager, Session, SessionConfig, WaypointError, WaypointResult};

/// Command line arguments for Waypoint.
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "Steer across a generated landscape to the goal tile")]
#[command(version)]
struct Args {
    /// Random seed for map generation (OS entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play-area side length in tiles
    #[arg(long, default_value_t = waypoint::config::DEFAULT_GRID_SIZE)]
    grid_size: u32,

    /// Tile side length in pixels
    #[arg(long, default_value_t = waypoint::config::DEFAULT_TILE_SIZE)]
    tile_size: u32,

    /// Player speed in pixels per tick
    #[arg(long, default_value_t = waypoint::config::DEFAULT_PLAYER_SPEED)]
    speed: f32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Builds and validates the session configuration.
    fn session_config(&self) -> WaypointResult<SessionConfig> {
        let mut config = SessionConfig::new(self.grid_size, self.tile_size, self.speed);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

#[macroquad::main("Waypoint")]
async fn main() -> WaypointResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Waypoint v{}", waypoint::VERSION);

    let config = args.session_config()?;
    match config.seed {
        Some(seed) => info!("Generating map with seed: {}", seed),
        None => info!("Generating map with an unseeded RNG"),
    }

    let session = Session::new(config)?;
    run_game(session).await
}

/// Initializes env_logger at the requested level; `RUST_LOG` still overrides it.
fn initialize_logging(log_level: &str) -> WaypointResult<()> {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        other => {
            return Err(WaypointError::InvalidConfig(format!(
                "Unknown log level '{}'",
                other
            )))
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .init();

    Ok(())
}

/// Sizes the window to the play area and runs the scene loop.
async fn run_game(session: Session) -> WaypointResult<()> {
    let mut scenes = SceneManager::new(session, InputHandler::new());

    let (width, height) = scenes.display().window_size();
    request_new_screen_size(width, height);

    scenes.run().await?;

    info!(
        "Game loop ended after {} maps and {} wins",
        scenes.session().statistics().maps_generated,
        scenes.session().statistics().wins
    );
    Ok(())
}
