use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Intent;

/// Everything the player asked for during one render iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub intent: Intent,
    pub reset: bool,
    pub toggle_debug: bool,
    pub quit: bool,
}

/// Turns a stream of presses into a single edge while the key is held.
///
/// Terminals without event-type reporting deliver autorepeat as fresh
/// presses, so a press that follows the previous one within `gap` is
/// treated as the same hold. A release, when reported, ends the hold.
#[derive(Debug)]
struct HoldLatch {
    gap: u64,
    last_press: Option<u64>,
}

impl HoldLatch {
    fn new(gap: u64) -> Self {
        Self {
            gap,
            last_press: None,
        }
    }

    fn press(&mut self, now: u64) -> bool {
        let fresh = match self.last_press {
            Some(at) => now.saturating_sub(at) > self.gap,
            None => true,
        };
        self.last_press = Some(now);
        fresh
    }

    fn release(&mut self) {
        self.last_press = None;
    }
}

/// Samples the keyboard once per render iteration.
#[derive(Debug)]
pub struct InputSampler {
    debug: HoldLatch,
    reset: HoldLatch,
}

impl InputSampler {
    pub fn new(hold_gap: Duration) -> Self {
        let gap = hold_gap.as_millis() as u64;
        Self {
            debug: HoldLatch::new(gap),
            reset: HoldLatch::new(gap),
        }
    }

    /// Drains every pending terminal event without blocking.
    pub fn sample(&mut self, now: u64) -> io::Result<InputSnapshot> {
        let mut snapshot = InputSnapshot::default();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.record(&mut snapshot, key, now);
            }
        }
        Ok(snapshot)
    }

    /// Folds one key event in. Directions count on presses and repeats;
    /// reset and debug fire once per hold.
    pub fn record(&mut self, snap: &mut InputSnapshot, key: KeyEvent, now: u64) {
        match key.kind {
            KeyEventKind::Release => {
                match key.code {
                    KeyCode::F(1) => self.debug.release(),
                    KeyCode::Enter => self.reset.release(),
                    _ => {}
                }
                return;
            }
            KeyEventKind::Repeat => {}
            KeyEventKind::Press => match key.code {
                KeyCode::F(1) if self.debug.press(now) => snap.toggle_debug = true,
                KeyCode::Enter if self.reset.press(now) => snap.reset = true,
                _ => {}
            },
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                snap.quit = true;
            }
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => snap.intent.up = true,
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => snap.intent.left = true,
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => snap.intent.down = true,
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => snap.intent.right = true,
            KeyCode::Char('q') | KeyCode::Esc => snap.quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAP: Duration = Duration::from_millis(600);

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn repeat(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    /// One frame holding exactly one event.
    fn frame(sampler: &mut InputSampler, key: KeyEvent, now: u64) -> InputSnapshot {
        let mut snap = InputSnapshot::default();
        sampler.record(&mut snap, key, now);
        snap
    }

    #[test]
    fn wasd_and_arrows_map_to_intent() {
        let mut sampler = InputSampler::new(GAP);
        let mut snap = InputSnapshot::default();
        sampler.record(&mut snap, press(KeyCode::Char('w')), 0);
        sampler.record(&mut snap, press(KeyCode::Right), 0);
        assert_eq!(snap.intent, Intent::new(true, false, false, true));
        assert!(!snap.reset && !snap.quit && !snap.toggle_debug);
    }

    #[test]
    fn held_direction_still_counts() {
        let mut sampler = InputSampler::new(GAP);
        let snap = frame(&mut sampler, repeat(KeyCode::Char('s')), 0);
        assert_eq!(snap.intent, Intent::DOWN);
    }

    #[test]
    fn autorepeat_presses_toggle_debug_once() {
        // Without event-type reporting a held F1 arrives as a press per frame.
        let mut sampler = InputSampler::new(GAP);
        let toggles = (0..5)
            .map(|i| frame(&mut sampler, press(KeyCode::F(1)), i * 16))
            .filter(|snap| snap.toggle_debug)
            .count();
        assert_eq!(toggles, 1);
    }

    #[test]
    fn os_repeat_delay_does_not_retrigger() {
        let mut sampler = InputSampler::new(GAP);
        let times = [0, 500, 533, 566, 600, 633];
        let toggles = times
            .iter()
            .map(|&t| frame(&mut sampler, press(KeyCode::Enter), t))
            .filter(|snap| snap.reset)
            .count();
        assert_eq!(toggles, 1);
    }

    #[test]
    fn pause_between_presses_is_a_new_press() {
        let mut sampler = InputSampler::new(GAP);
        assert!(frame(&mut sampler, press(KeyCode::F(1)), 0).toggle_debug);
        assert!(frame(&mut sampler, press(KeyCode::F(1)), 1000).toggle_debug);
    }

    #[test]
    fn release_ends_the_hold() {
        let mut sampler = InputSampler::new(GAP);
        assert!(frame(&mut sampler, press(KeyCode::F(1)), 0).toggle_debug);
        assert!(!frame(&mut sampler, repeat(KeyCode::F(1)), 16).toggle_debug);
        assert_eq!(
            frame(&mut sampler, release(KeyCode::F(1)), 32),
            InputSnapshot::default()
        );
        assert!(frame(&mut sampler, press(KeyCode::F(1)), 48).toggle_debug);
    }

    #[test]
    fn repeats_never_toggle() {
        let mut sampler = InputSampler::new(GAP);
        assert!(!frame(&mut sampler, repeat(KeyCode::F(1)), 0).toggle_debug);
        assert!(!frame(&mut sampler, repeat(KeyCode::Enter), 0).reset);
    }

    #[test]
    fn quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut sampler = InputSampler::new(GAP);
            assert!(frame(&mut sampler, key, 0).quit);
        }
    }
}
