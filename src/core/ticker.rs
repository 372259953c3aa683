//! Fixed-interval tick scheduler driven from the UI update loop.
//!
//! Fires once immediately, then once per interval. A late poll fires once and
//! re-anchors to the poll time rather than replaying missed ticks.

use std::time::{Duration, Instant};

/// Clock tick period.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Returns true if a tick is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            None => {
                self.next_due = Some(now + self.interval);
                true
            }
            Some(due) if now >= due => {
                let next = due + self.interval;
                // Fell behind by more than a whole period: skip ahead
                self.next_due = Some(if next <= now { now + self.interval } else { next });
                true
            }
            Some(_) => false,
        }
    }

    /// Time of the next scheduled tick. `None` before the first poll.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }
}
