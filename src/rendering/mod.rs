//! # Rendering Module
//!
//! Frame drawing with macroquad: the play area, the player, the goal, the
//! status line and the button bar.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;
