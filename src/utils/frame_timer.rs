//! Wall-clock to game-clock conversion for the terminal host.
//!
//! The game clock only takes whole milliseconds. The timer hands out the
//! whole part of each frame's elapsed time and keeps the fraction for the
//! next frame, so the game clock never drifts behind wall time.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    /// Wall time already handed to the game clock.
    consumed_until: Instant,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            consumed_until: start,
        }
    }

    /// Wall time elapsed since the last `take_ms`, not yet handed out.
    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.consumed_until)
    }

    /// Whole milliseconds elapsed up to now.
    pub fn take_ms(&mut self) -> u64 {
        self.take_ms_at(Instant::now())
    }

    /// Whole milliseconds elapsed up to `now`. The sub-millisecond remainder
    /// stays pending.
    pub fn take_ms_at(&mut self, now: Instant) -> u64 {
        let ms = self.elapsed_at(now).as_millis() as u64;
        self.consumed_until += Duration::from_millis(ms);
        ms
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
