use rand::Rng;

use crate::config::{DEBUG_COLOR, DEBUG_DOT_DIM, GAME_OVER_COLOR, GRID_COLOR, TEXT_COLOR};
use crate::game::{Rect, Rgb};

use super::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Large,
}

/// Draw commands the board issues. Positions are in board pixels.
pub trait Renderer {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    /// Draws `text` centered on `center`.
    fn draw_text(&mut self, text: &str, center: (i32, i32), color: Rgb, size: FontSize);
    fn draw_grid(&mut self, cell_dim: i32, color: Rgb);
}

impl<R: Rng> Board<R> {
    pub fn draw(&self, out: &mut impl Renderer, debug: bool) {
        let (width, height) = self.config().board_size();

        if debug {
            out.draw_grid(self.config().cell_dim, GRID_COLOR);
        }

        let snake = self.snake();
        for segment in snake.segments() {
            out.fill_rect(*segment, snake.color());
        }
        if debug {
            for segment in snake.segments() {
                let dot = Rect::new(segment.left, segment.top, DEBUG_DOT_DIM, DEBUG_DOT_DIM);
                out.fill_rect(dot, DEBUG_COLOR);
            }
        }

        for entity in self.entities() {
            out.fill_rect(*entity.rect(), entity.color());
        }

        let score_pos = (width * 5 / 100, height * 2 / 100);
        out.draw_text(
            &format!("Score: {}", self.score()),
            score_pos,
            TEXT_COLOR,
            FontSize::Small,
        );
    }

    pub fn draw_game_over(&self, out: &mut impl Renderer) {
        let (width, height) = self.config().board_size();
        let x = width / 2;
        out.draw_text(
            "GAME OVER",
            (x, height / 2),
            GAME_OVER_COLOR,
            FontSize::Large,
        );
        out.draw_text(
            "Press Enter to Restart",
            (x, height * 55 / 100),
            TEXT_COLOR,
            FontSize::Small,
        );
    }
}
