//! # Scene Management System
//!
//! The per-tick loop: poll input, drive the session, draw the frame.

use crate::config;
use crate::game::{MoveOutcome, Session};
use crate::input::{InputHandler, PlayerInput};
use crate::rendering::MacroquadDisplay;
use crate::WaypointResult;
use log::{error, info, trace};
use macroquad::prelude::*;

/// Owns the session and the presentation resources that drive it.
pub struct SceneManager {
    session: Session,
    display: MacroquadDisplay,
    input_handler: InputHandler,
    /// Seconds per tick
    tick_length: f64,
}

impl SceneManager {
    /// Creates a scene manager around an existing session.
    pub fn new(session: Session, input_handler: InputHandler) -> Self {
        let display = MacroquadDisplay::new(session.config().play_area_size() as f32);
        Self {
            session,
            display,
            input_handler,
            tick_length: 1.0 / config::TARGET_FPS as f64,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn display(&self) -> &MacroquadDisplay {
        &self.display
    }

    /// Runs the tick loop until a quit is requested.
    pub async fn run(&mut self) -> WaypointResult<()> {
        loop {
            let tick_started = get_time();

            if self.update()? {
                info!("Player quit the game");
                break;
            }
            self.display.render_game(&self.session)?;

            next_frame().await;
            self.pace(tick_started);
        }
        Ok(())
    }

    /// Processes one tick of input and movement. Returns true when the game
    /// should exit.
    fn update(&mut self) -> WaypointResult<bool> {
        if let Some(command) = self.input_handler.poll_command(&self.display.ui) {
            if self.dispatch(command) {
                return Ok(true);
            }
        }

        let movement = self.input_handler.poll_movement();
        self.session.set_movement(movement.dx(), movement.dy());

        match self.session.advance() {
            MoveOutcome::ReachedGoal(tile) => trace!("Player on goal tile {:?}", tile),
            MoveOutcome::Blocked(tile) => trace!("Move into {:?} rejected", tile),
            MoveOutcome::Moved(_) | MoveOutcome::Idle => {}
        }

        Ok(false)
    }

    /// Applies a one-shot command. Returns true for quit.
    fn dispatch(&mut self, command: PlayerInput) -> bool {
        match command {
            PlayerInput::Quit => return true,
            PlayerInput::ResetPlayer => self.session.reset_player(),
            PlayerInput::NewMap => {
                if let Err(e) = self.session.regenerate() {
                    error!("Keeping the current map: {}", e);
                }
            }
        }
        false
    }

    /// Sleeps off whatever is left of the tick after the frame was presented.
    ///
    /// The browser paces wasm builds through `next_frame`, where blocking the
    /// thread is not allowed.
    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    fn pace(&self, tick_started: f64) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let remaining = self.tick_length - (get_time() - tick_started);
            if remaining > 0.0 {
                std::thread::sleep(std::time::Duration::from_secs_f64(remaining));
            }
        }
    }
}
