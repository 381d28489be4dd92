use std::thread::sleep;
use std::time::{Duration, Instant};

/// Holds the loop to a fixed tick rate. A late tick is not made up for.
pub struct Pacer {
    interval: Duration,
    next_tick: Instant,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Pacer { interval, next_tick: Instant::now() + interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts counting a fresh interval from now.
    pub fn reset(&mut self) {
        self.next_tick = Instant::now() + self.interval;
    }

    /// Blocks until the next tick is due.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let delay = self.delay_at(now);
        if delay > Duration::from_secs(0) {
            sleep(delay);
        }
        self.next_tick = self.next_tick.max(now) + self.interval;
    }

    fn delay_at(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }
}
