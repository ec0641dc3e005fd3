//! Fixed frame-rate pacing

use std::time::{Duration, Instant};

/// Deadline-based frame clock.
///
/// The event loop sleeps until [`FrameClock::deadline`] and runs one
/// simulation frame each time the clock is due. Falling more than a frame
/// behind re-synchronises to `now` instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            next: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Consume one frame slot
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next + self.interval < now {
            self.next = now + self.interval;
        }
    }
}
