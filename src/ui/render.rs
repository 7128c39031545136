use ratatui::buffer::Buffer;
use ratatui::layout::Rect as Area;
use ratatui::style::{Color, Modifier, Style};

use crate::config::CELL_W;
use crate::game::{FontSize, Rect, Renderer, Rgb};

const BLOCK: &str = "█";
const GRID_MARK: &str = "·";

pub fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Paints board pixels onto terminal cells. One grid cell becomes `CELL_W`
/// characters across and one row down; a character is painted when a drawn
/// rectangle overlaps its share of the cell.
pub struct TerminalCanvas<'a> {
    buf: &'a mut Buffer,
    area: Area,
    cell_dim: i32,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Area, cell_dim: i32) -> Self {
        Self {
            buf,
            area,
            cell_dim,
        }
    }

    fn char_w(&self) -> i32 {
        (self.cell_dim / CELL_W as i32).max(1)
    }

    fn put(&mut self, col: i32, row: i32, symbol: &str, style: Style) {
        if col < 0 || row < 0 || col >= self.area.width as i32 || row >= self.area.height as i32 {
            return;
        }
        let (x, y) = (self.area.x + col as u16, self.area.y + row as u16);
        self.buf.get_mut(x, y).set_symbol(symbol).set_style(style);
    }
}

impl Renderer for TerminalCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let (cw, ch) = (self.char_w(), self.cell_dim);
        let style = Style::default().fg(to_color(color));
        for row in rect.top.div_euclid(ch)..=(rect.bottom() - 1).div_euclid(ch) {
            for col in rect.left.div_euclid(cw)..=(rect.right() - 1).div_euclid(cw) {
                self.put(col, row, BLOCK, style);
            }
        }
    }

    fn draw_text(&mut self, text: &str, (cx, cy): (i32, i32), color: Rgb, size: FontSize) {
        let mut style = Style::default().fg(to_color(color));
        if size == FontSize::Large {
            style = style.add_modifier(Modifier::BOLD);
        }
        let len = text.chars().count() as i32;
        let row = cy.div_euclid(self.cell_dim);
        let start = (cx.div_euclid(self.char_w()) - len / 2)
            .clamp(0, (self.area.width as i32 - len).max(0));
        if row < 0 || row >= self.area.height as i32 {
            return;
        }
        let x = self.area.x + start as u16;
        let y = self.area.y + row as u16;
        self.buf.set_stringn(x, y, text, self.area.width as usize, style);
    }

    fn draw_grid(&mut self, cell_dim: i32, color: Rgb) {
        let step = (cell_dim / self.char_w()).max(1);
        let style = Style::default()
            .fg(to_color(color))
            .add_modifier(Modifier::DIM);
        let rows = self.area.height as i32 * self.cell_dim / cell_dim;
        for row in 0..rows {
            for col in (0..self.area.width as i32).step_by(step as usize) {
                self.put(col, row * cell_dim / self.cell_dim, GRID_MARK, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{cell_to_rect, Cell};

    fn canvas_area() -> Area {
        Area::new(0, 0, 8, 4)
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> String {
        buf.get(x, y).symbol().to_string()
    }

    #[test]
    fn segment_fills_both_halves_of_its_cell() {
        let mut buf = Buffer::empty(canvas_area());
        let mut canvas = TerminalCanvas::new(&mut buf, canvas_area(), 24);
        canvas.fill_rect(cell_to_rect(Cell::new(1, 2), 20, 24), Rgb(255, 255, 255));

        assert_eq!(symbol(&buf, 4, 1), BLOCK);
        assert_eq!(symbol(&buf, 5, 1), BLOCK);
        assert_eq!(symbol(&buf, 3, 1), " ");
        assert_eq!(symbol(&buf, 6, 1), " ");
        assert_eq!(symbol(&buf, 4, 0), " ");
        assert_eq!(buf.get(4, 1).fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn small_marker_fills_one_character() {
        let mut buf = Buffer::empty(canvas_area());
        let mut canvas = TerminalCanvas::new(&mut buf, canvas_area(), 24);
        canvas.fill_rect(Rect::new(24 + 2, 2, 4, 4), Rgb(255, 0, 0));

        assert_eq!(symbol(&buf, 2, 0), BLOCK);
        assert_eq!(symbol(&buf, 3, 0), " ");
        assert_eq!(buf.get(2, 0).fg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn offscreen_pixels_are_clipped() {
        let mut buf = Buffer::empty(canvas_area());
        let mut canvas = TerminalCanvas::new(&mut buf, canvas_area(), 24);
        canvas.fill_rect(Rect::new(-22, 2, 20, 20), Rgb(1, 2, 3));
        canvas.fill_rect(Rect::new(500, 500, 20, 20), Rgb(1, 2, 3));
        assert_eq!(buf, Buffer::empty(canvas_area()));
    }

    #[test]
    fn text_is_centered_and_large_is_bold() {
        let mut buf = Buffer::empty(canvas_area());
        let mut canvas = TerminalCanvas::new(&mut buf, canvas_area(), 24);
        canvas.draw_text("OVER", (48, 60), Rgb(255, 0, 0), FontSize::Large);

        let row: String = (0..8).map(|x| symbol(&buf, x, 2)).collect();
        assert_eq!(row, "  OVER  ");
        assert!(buf.get(2, 2).modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn grid_marks_each_cell() {
        let mut buf = Buffer::empty(canvas_area());
        let mut canvas = TerminalCanvas::new(&mut buf, canvas_area(), 24);
        canvas.draw_grid(24, Rgb(255, 255, 255));
        assert_eq!(symbol(&buf, 0, 0), GRID_MARK);
        assert_eq!(symbol(&buf, 1, 0), " ");
        assert_eq!(symbol(&buf, 2, 3), GRID_MARK);
    }

    #[test]
    fn grid_is_one_dot_per_cell_corner() {
        let mut buf = Buffer::empty(canvas_area());
        let mut canvas = TerminalCanvas::new(&mut buf, canvas_area(), 24);
        canvas.draw_grid(24, Rgb(255, 255, 255));
        for y in 0..4 {
            let row: String = (0..8).map(|x| symbol(&buf, x, y)).collect();
            assert_eq!(row, "· · · · ");
        }
        assert!(buf.get(0, 0).modifier.contains(Modifier::DIM));
    }
}
