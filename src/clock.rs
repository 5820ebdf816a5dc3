use std::thread::sleep;
use std::time::{Duration, Instant};

/// Blocks the game thread until the next tick boundary.
pub struct TickPacer {
    interval: Duration,
    next_tick: Instant,
}

impl TickPacer {
    pub fn new(ticks_per_second: u32) -> Self {
        let interval = Duration::from_secs(1) / ticks_per_second.max(1);
        TickPacer { interval, next_tick: Instant::now() + interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_tick.checked_duration_since(now) {
            sleep(remaining);
        }
        self.next_tick = Self::following(self.next_tick, now, self.interval);
    }

    // A late tick schedules the next one a full interval from now rather
    // than firing a burst to catch up.
    fn following(scheduled: Instant, now: Instant, interval: Duration) -> Instant {
        if now > scheduled {
            now + interval
        } else {
            scheduled + interval
        }
    }
}
