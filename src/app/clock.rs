use std::thread;
use std::time::{Duration, Instant};

/// Monotonic millisecond clock plus a way to wait.
pub trait Clock {
    fn now_ms(&self) -> u64;
    fn sleep_ms(&mut self, ms: u64);
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Fires once every `interval`, measured in wall time rather than frames.
pub struct TickTimer {
    interval: u64,
    last: u64,
}

impl TickTimer {
    pub fn new(interval: Duration, now: u64) -> Self {
        Self {
            interval: interval.as_millis() as u64,
            last: now,
        }
    }

    pub fn due(&self, now: u64) -> bool {
        now.saturating_sub(self.last) >= self.interval
    }

    pub fn restart(&mut self, now: u64) {
        self.last = now;
    }
}

/// Caps the input/render loop by sleeping out whatever is left of a frame.
pub struct FrameLimiter {
    budget: u64,
}

impl FrameLimiter {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget: budget.as_millis() as u64,
        }
    }

    /// Returns how long it slept.
    pub fn wait(&self, clock: &mut impl Clock, frame_start: u64) -> u64 {
        let spent = clock.now_ms().saturating_sub(frame_start);
        let rest = self.budget.saturating_sub(spent);
        if rest > 0 {
            clock.sleep_ms(rest);
        }
        rest
    }
}
