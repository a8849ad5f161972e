//! # User Interface Elements
//!
//! The button bar above the play area: layout, hover state and hit-testing.

use crate::input::PlayerInput;
use macroquad::prelude::*;

/// Button width in pixels
pub const BUTTON_WIDTH: f32 = 150.0;
/// Button height in pixels
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Gap between neighbouring buttons
pub const BUTTON_SPACING: f32 = 20.0;
/// Distance from the top of the window to the buttons
pub const BUTTON_TOP: f32 = 20.0;

const BUTTON_COLOR: Color = Color::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0);
const BUTTON_HOVER_COLOR: Color = Color::new(180.0 / 255.0, 180.0 / 255.0, 180.0 / 255.0, 1.0);

/// A clickable rectangle that dispatches a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
    pub command: PlayerInput,
}

impl Button {
    /// Checks whether `point` falls on the button. The right and bottom
    /// edges are outside.
    pub fn covers(&self, point: Vec2) -> bool {
        let Rect { x, y, w, h } = self.rect;
        point.x >= x && point.x < x + w && point.y >= y && point.y < y + h
    }
}

/// The button bar.
#[derive(Debug, Clone, PartialEq)]
pub struct UI {
    /// Buttons left to right
    pub buttons: Vec<Button>,
    /// Label font size
    pub font_size: u16,
}

impl UI {
    /// Lays out "Reset Player" and "New Map" centered in a window of the
    /// given width.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypoint::{PlayerInput, UI};
    /// use macroquad::math::vec2;
    ///
    /// let ui = UI::new(800.0);
    /// assert_eq!(ui.hit_test(vec2(250.0, 40.0)), Some(PlayerInput::ResetPlayer));
    /// assert_eq!(ui.hit_test(vec2(10.0, 10.0)), None);
    /// ```
    pub fn new(window_width: f32) -> Self {
        let entries = [
            ("Reset Player", PlayerInput::ResetPlayer),
            ("New Map", PlayerInput::NewMap),
        ];

        let count = entries.len() as f32;
        let total_width = BUTTON_WIDTH * count + BUTTON_SPACING * (count - 1.0);
        let start_x = ((window_width - total_width) / 2.0).floor();

        let buttons = entries
            .iter()
            .enumerate()
            .map(|(i, &(label, command))| Button {
                label,
                rect: Rect::new(
                    start_x + i as f32 * (BUTTON_WIDTH + BUTTON_SPACING),
                    BUTTON_TOP,
                    BUTTON_WIDTH,
                    BUTTON_HEIGHT,
                ),
                command,
            })
            .collect();

        Self {
            buttons,
            font_size: 32,
        }
    }

    /// Returns the command of the button under `point`, if any.
    pub fn hit_test(&self, point: Vec2) -> Option<PlayerInput> {
        self.buttons
            .iter()
            .find(|button| button.covers(point))
            .map(|button| button.command)
    }

    /// Draws every button, shading the one under the cursor.
    pub fn render_buttons(&self, cursor: Vec2) {
        for button in &self.buttons {
            let fill = if button.covers(cursor) {
                BUTTON_HOVER_COLOR
            } else {
                BUTTON_COLOR
            };
            let Rect { x, y, w, h } = button.rect;

            draw_rectangle(x, y, w, h, fill);
            draw_rectangle_lines(x, y, w, h, 2.0, BLACK);

            let size = measure_text(button.label, None, self.font_size, 1.0);
            let center = button.rect.center();
            draw_text(
                button.label,
                center.x - size.width / 2.0,
                center.y + size.offset_y / 2.0,
                self.font_size as f32,
                BLACK,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_window() {
        let ui = UI::new(800.0);
        assert_eq!(ui.buttons.len(), 2);
        assert_eq!(ui.buttons[0].rect, Rect::new(240.0, 20.0, 150.0, 40.0));
        assert_eq!(ui.buttons[1].rect, Rect::new(410.0, 20.0, 150.0, 40.0));
        assert_eq!(ui.buttons[0].label, "Reset Player");
        assert_eq!(ui.buttons[1].label, "New Map");
    }

    #[test]
    fn test_hit_test() {
        let ui = UI::new(800.0);
        assert_eq!(ui.hit_test(vec2(240.0, 20.0)), Some(PlayerInput::ResetPlayer));
        assert_eq!(ui.hit_test(vec2(389.0, 59.0)), Some(PlayerInput::ResetPlayer));
        assert_eq!(ui.hit_test(vec2(480.0, 40.0)), Some(PlayerInput::NewMap));
    }

    #[test]
    fn test_far_edges_are_outside() {
        let ui = UI::new(800.0);
        // Right edges of both buttons
        assert_eq!(ui.hit_test(vec2(390.0, 40.0)), None);
        assert_eq!(ui.hit_test(vec2(560.0, 40.0)), None);
        // Bottom edge
        assert_eq!(ui.hit_test(vec2(480.0, 60.0)), None);
        // Last pixel inside the bottom-right corner
        assert_eq!(ui.hit_test(vec2(559.9, 59.9)), Some(PlayerInput::NewMap));
    }

    #[test]
    fn test_misses() {
        let ui = UI::new(800.0);
        // Gap between the buttons
        assert_eq!(ui.hit_test(vec2(400.0, 40.0)), None);
        // Above and below the bar
        assert_eq!(ui.hit_test(vec2(300.0, 10.0)), None);
        assert_eq!(ui.hit_test(vec2(300.0, 60.0)), None);
        // Inside the play area
        assert_eq!(ui.hit_test(vec2(300.0, 400.0)), None);
    }
}
