//! # Input Module
//!
//! Turns the keyboard and mouse into session calls.
//!
//! Movement is read from *held* key state once per tick and becomes the
//! session's movement vector. Discrete presses and clicks become one-shot
//! [`PlayerInput`] commands.

use crate::game::MovementVector;
use crate::rendering::UI;
use macroquad::prelude::*;

/// One-shot commands produced by key presses and button clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Quit the game
    Quit,
    /// Put the player back on the start tile
    ResetPlayer,
    /// Generate a new map
    NewMap,
}

/// Snapshot of which directional keys are held this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldDirections {
    /// Reads the arrow keys, plus WASD when `wasd` is set.
    pub fn poll(wasd: bool) -> Self {
        let held = |arrow: KeyCode, letter: KeyCode| {
            is_key_down(arrow) || (wasd && is_key_down(letter))
        };

        Self {
            left: held(KeyCode::Left, KeyCode::A),
            right: held(KeyCode::Right, KeyCode::D),
            up: held(KeyCode::Up, KeyCode::W),
            down: held(KeyCode::Down, KeyCode::S),
        }
    }

    /// Converts the snapshot into a movement vector.
    ///
    /// When opposite keys are both held, right and down win.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::HeldDirections;
    ///
    /// let held = HeldDirections { left: true, up: true, ..Default::default() };
    /// let v = held.movement();
    /// assert_eq!((v.dx(), v.dy()), (-1, -1));
    /// ```
    pub fn movement(self) -> MovementVector {
        let dx = if self.right {
            1
        } else if self.left {
            -1
        } else {
            0
        };
        let dy = if self.down {
            1
        } else if self.up {
            -1
        } else {
            0
        };
        MovementVector::new(dx, dy)
    }
}

/// Input handler for processing player commands.
pub struct InputHandler {
    /// Whether WASD steers in addition to the arrow keys
    pub wasd_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self { wasd_enabled: true }
    }

    /// Reads the held directional keys for this tick.
    pub fn poll_movement(&self) -> MovementVector {
        HeldDirections::poll(self.wasd_enabled).movement()
    }

    /// Reads this tick's one-shot command, if any.
    pub fn poll_command(&self, ui: &UI) -> Option<PlayerInput> {
        let click = if is_mouse_button_pressed(MouseButton::Left) {
            Some(Vec2::from(mouse_position()))
        } else {
            None
        };
        command_from_observations(is_key_pressed(KeyCode::Escape), click, ui)
    }
}

/// Resolves one tick's raw observations into a command. Quitting takes
/// precedence over a click on the same tick.
pub fn command_from_observations(
    escape_pressed: bool,
    click: Option<Vec2>,
    ui: &UI,
) -> Option<PlayerInput> {
    if escape_pressed {
        return Some(PlayerInput::Quit);
    }
    click.and_then(|point| ui.hit_test(point))
}
