//! Fixed-cadence frame scheduling for the render thread.

use std::thread;
use std::time::{Duration, Instant};

/// Hands out frame deadlines `interval` apart.
///
/// When a frame runs late the missed slots are skipped rather than
/// replayed back to back.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval: Duration,
    next: Instant,
}

impl FrameTicker {
    pub fn new(interval: Duration, start: Instant) -> Self {
        let interval = if interval.is_zero() {
            Duration::from_millis(1)
        } else {
            interval
        };
        Self {
            interval,
            next: start + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Deadline of the next frame after `now`, advancing the ticker.
    pub fn next_deadline(&mut self, now: Instant) -> Instant {
        if now >= self.next {
            let behind = now - self.next;
            let missed = (behind.as_nanos() / self.interval.as_nanos()) as u32 + 1;
            self.next += self.interval * missed;
        }
        let deadline = self.next;
        self.next += self.interval;
        deadline
    }

    /// Sleep until the next frame and return the wake-up time.
    pub fn wait(&mut self) -> Instant {
        let deadline = self.next_deadline(Instant::now());
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        Instant::now()
    }
}
