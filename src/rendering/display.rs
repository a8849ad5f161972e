//! # Display Management
//!
//! Draws one frame of a [`Session`] with macroquad.

use crate::config;
use crate::game::{Cell, GameStatus, PixelPoint, Session, TileCoord};
use crate::rendering::UI;
use crate::WaypointResult;
use macroquad::prelude::*;

const GRASS_GREEN: Color = Color::new(34.0 / 255.0, 139.0 / 255.0, 34.0 / 255.0, 1.0);
const WALL_GRAY: Color = Color::new(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0, 1.0);
const GOAL_BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const PLAYER_RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const WIN_GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const OVERLAY: Color = Color::new(1.0, 1.0, 1.0, 0.5);

const PROMPT: &str = "Find the blue building! Use arrow keys to move";
const VICTORY: &str = "You reached the destination!";

/// Macroquad display manager for the game.
pub struct MacroquadDisplay {
    /// Play area side length in pixels
    pub play_area_size: f32,
    /// Height of the button bar above the play area
    pub button_bar_height: f32,
    /// Player token radius in pixels
    pub player_radius: f32,
    /// Status text font size
    pub font_size: u16,
    /// Button bar
    pub ui: UI,
}

impl MacroquadDisplay {
    /// Creates a display for a play area of the given pixel size.
    pub fn new(play_area_size: f32) -> Self {
        Self {
            play_area_size,
            button_bar_height: config::BUTTON_BAR_HEIGHT,
            player_radius: config::PLAYER_RADIUS,
            font_size: 32,
            ui: UI::new(play_area_size),
        }
    }

    /// Window size needed to show the button bar and the play area.
    pub fn window_size(&self) -> (f32, f32) {
        (self.play_area_size, self.play_area_size + self.button_bar_height)
    }

    /// Converts a play-area point into screen space.
    pub fn to_screen(&self, point: PixelPoint) -> Vec2 {
        vec2(point.x, point.y + self.button_bar_height)
    }

    /// Renders the complete game screen.
    pub fn render_game(&self, session: &Session) -> WaypointResult<()> {
        clear_background(WHITE);

        self.ui.render_buttons(Vec2::from(mouse_position()));
        self.render_grid(session);
        self.render_goal(session);
        self.render_player(session);
        self.render_status(session.status());

        Ok(())
    }

    fn tile_origin(&self, tile: TileCoord, tile_size: f32) -> Vec2 {
        vec2(
            tile.col as f32 * tile_size,
            tile.row as f32 * tile_size + self.button_bar_height,
        )
    }

    fn render_grid(&self, session: &Session) {
        let tile_size = session.tile_size() as f32;
        for (tile, cell) in session.grid().tiles() {
            let origin = self.tile_origin(tile, tile_size);
            let color = match cell {
                Cell::Open => GRASS_GREEN,
                Cell::Blocked => WALL_GRAY,
            };
            draw_rectangle(origin.x, origin.y, tile_size, tile_size, color);
        }
    }

    fn render_goal(&self, session: &Session) {
        let tile_size = session.tile_size() as f32;
        let origin = self.tile_origin(session.goal(), tile_size);
        draw_rectangle(origin.x, origin.y, tile_size, tile_size, GOAL_BLUE);
    }

    fn render_player(&self, session: &Session) {
        let center = self.to_screen(session.player_position());
        draw_circle(center.x, center.y, self.player_radius, PLAYER_RED);
    }

    fn render_status(&self, status: GameStatus) {
        match status {
            GameStatus::Won => {
                draw_rectangle(
                    0.0,
                    self.button_bar_height,
                    self.play_area_size,
                    self.play_area_size,
                    OVERLAY,
                );
                let center = vec2(
                    self.play_area_size / 2.0,
                    self.play_area_size / 2.0 + self.button_bar_height,
                );
                self.draw_centered_text(VICTORY, center, WIN_GREEN);
            }
            GameStatus::InProgress => {
                self.draw_centered_text(PROMPT, vec2(self.play_area_size / 2.0, 10.0), BLACK);
            }
        }
    }

    fn draw_centered_text(&self, text: &str, center: Vec2, color: Color) {
        let size = measure_text(text, None, self.font_size, 1.0);
        draw_text(
            text,
            center.x - size.width / 2.0,
            center.y + size.offset_y / 2.0,
            self.font_size as f32,
            color,
        );
    }
}
