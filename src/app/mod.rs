mod clock;

use std::error::Error;
use std::fs::File;
use std::io::{stdout, Stdout};

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use log::{debug, info};
use rand::Rng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

pub use clock::{Clock, FrameLimiter, SystemClock, TickTimer};

use crate::config::{Config, DEFAULT_LOG_PATH, LOG_ENV};
use crate::game::{Board, GameState};
use crate::io::{InputSampler, InputSnapshot};
use crate::ui::draw_game;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    init_logging();
    info!("starting cobra");

    let config = Config::default();
    let mut tui = TuiGuard::new()?;
    let result = run_loop(tui.terminal_mut(), config);
    info!("shutting down");
    result
}

fn init_logging() {
    let path = std::env::var(LOG_ENV)
        .unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    // Without a log file the game still runs, just silently.
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, LogConfig::default(), file);
    }
}

fn run_loop(terminal: &mut Term, config: Config) -> Result<(), Box<dyn Error>> {
    let mut board = Board::new(config);
    let mut clock = SystemClock::new();
    let mut driver = Driver::new(&config, clock.now_ms());
    let limiter = FrameLimiter::new(config.frame_budget);
    let mut sampler = InputSampler::new(config.key_hold_gap);

    loop {
        let frame_start = clock.now_ms();

        let input = sampler.sample(frame_start)?;
        if input.quit {
            break;
        }
        driver.step(&mut board, input, frame_start);

        terminal.draw(|frame| draw_game(frame, &board, driver.debug))?;

        limiter.wait(&mut clock, frame_start);
    }
    Ok(())
}

/// Runs the fixed-rate simulation off a faster input/render loop.
pub struct Driver {
    timer: TickTimer,
    pub debug: bool,
}

impl Driver {
    pub fn new(config: &Config, now: u64) -> Self {
        Self {
            timer: TickTimer::new(config.tick_interval, now),
            debug: false,
        }
    }

    /// One render iteration: apply the sampled input and, when due, advance
    /// the board by one tick. Returns whether a tick ran.
    pub fn step<R: Rng>(
        &mut self,
        board: &mut Board<R>,
        input: InputSnapshot,
        now: u64,
    ) -> bool {
        if input.toggle_debug {
            self.debug = !self.debug;
            debug!("debug overlay {}", if self.debug { "on" } else { "off" });
        }
        board.latch_intent(input.intent);

        match board.state() {
            GameState::Playing => {
                if self.timer.due(now) {
                    board.tick();
                    self.timer.restart(now);
                    return true;
                }
            }
            GameState::GameOver => {
                if input.reset && board.reset() {
                    self.timer.restart(now);
                }
            }
        }
        false
    }
}

struct TuiGuard {
    terminal: Term,
    // Terminal reports press/repeat/release, so held keys stop looking like presses.
    event_types: bool,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let event_types = supports_keyboard_enhancement().unwrap_or(false);
        if event_types {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        debug!("keyboard event types reported: {}", event_types);
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self {
            terminal,
            event_types,
        })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        if self.event_types {
            let _ = execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::clock::tests::ManualClock;
    use super::*;
    use crate::game::Intent;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board() -> Board<StdRng> {
        Board::with_rng(Config::default(), StdRng::seed_from_u64(99))
    }

    #[test]
    fn ticks_follow_wall_time_not_frames() {
        let config = Config::default();
        let mut board = board();
        let mut clock = ManualClock::default();
        let limiter = FrameLimiter::new(config.frame_budget);
        let mut driver = Driver::new(&config, clock.now_ms());

        let mut ticks = 0;
        while clock.now_ms() < 1500 {
            let start = clock.now_ms();
            if driver.step(&mut board, InputSnapshot::default(), start) {
                ticks += 1;
            }
            limiter.wait(&mut clock, start);
        }
        // 16ms frames land on 160ms boundaries for a 150ms interval.
        assert_eq!(ticks, 9);
        assert!(clock.slept.iter().all(|&ms| ms == 16));
    }

    #[test]
    fn input_is_latched_until_the_next_tick() {
        let config = Config::default();
        let mut board = board();
        let mut driver = Driver::new(&config, 0);

        let up = InputSnapshot {
            intent: Intent::UP,
            ..InputSnapshot::default()
        };
        assert!(!driver.step(&mut board, up, 16));
        assert_eq!(board.snake().velocity().dy, 0);

        assert!(driver.step(&mut board, InputSnapshot::default(), 160));
        assert_eq!(board.snake().velocity().dy, -1);
    }

    #[test]
    fn debug_toggle_flips_once_per_press() {
        let config = Config::default();
        let mut board = board();
        let mut driver = Driver::new(&config, 0);
        let toggle = InputSnapshot {
            toggle_debug: true,
            ..InputSnapshot::default()
        };
        driver.step(&mut board, toggle, 0);
        assert!(driver.debug);
        driver.step(&mut board, InputSnapshot::default(), 16);
        assert!(driver.debug);
        driver.step(&mut board, toggle, 32);
        assert!(!driver.debug);
    }

    #[test]
    fn reset_restarts_the_tick_clock() {
        let config = Config::default();
        let mut board = board();
        board.set_state(GameState::GameOver);
        let mut driver = Driver::new(&config, 0);
        let reset = InputSnapshot {
            reset: true,
            ..InputSnapshot::default()
        };

        assert!(!driver.step(&mut board, InputSnapshot::default(), 1000));
        assert_eq!(board.state(), GameState::GameOver);

        assert!(!driver.step(&mut board, reset, 1016));
        assert_eq!(board.state(), GameState::Playing);
        assert_eq!(board.score(), 0);

        assert!(!driver.step(&mut board, InputSnapshot::default(), 1100));
        assert!(driver.step(&mut board, InputSnapshot::default(), 1166));
    }
}
