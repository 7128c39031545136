mod render;

use rand::Rng;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::config::{BACKGROUND, MIN_HEIGHT, MIN_WIDTH, PLAY_H, PLAY_W};
use crate::game::{Board, GameState};

pub use render::{to_color, TerminalCanvas};

const HINT: &str = "wasd/arrows move  enter restart  F1 grid  q quit";

pub fn draw_game<R: Rng>(frame: &mut Frame, board: &Board<R>, debug: bool) {
    let area = frame.size();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = Paragraph::new(format!(
            "RESIZE TERMINAL (min {}x{})",
            MIN_WIDTH, MIN_HEIGHT
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("COBRA"));
        frame.render_widget(msg, area);
        return;
    }

    let cabinet = Block::default()
        .title("COBRA")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_H),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(cabinet_inner);
    let well = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W),
            Constraint::Min(0),
        ])
        .split(rows[1])[1];

    let hint = Paragraph::new(HINT).alignment(Alignment::Center);
    frame.render_widget(hint, rows[2]);

    let border = Block::default().borders(Borders::ALL);
    let play_rect = border.inner(well);
    frame.render_widget(border, well);

    draw_board(frame.buffer_mut(), play_rect, board, debug);
}

/// Draws the board into `area`, which should be the bare playfield.
pub fn draw_board<R: Rng>(buf: &mut Buffer, area: Rect, board: &Board<R>, debug: bool) {
    buf.set_style(area, Style::default().bg(to_color(BACKGROUND)));
    let mut canvas = TerminalCanvas::new(buf, area, board.config().cell_dim);
    board.draw(&mut canvas, debug);
    if board.state() == GameState::GameOver {
        board.draw_game_over(&mut canvas);
    }
}
