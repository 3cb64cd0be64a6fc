use std::time::{Duration, Instant};

/// Fixed-interval tick schedule driven by the caller's clock.
///
/// Nothing runs in the background: the frame loop asks [`Ticker::poll`]
/// whether a tick is due, so stopping the schedule is just clearing the
/// deadline.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Creates a stopped ticker.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedules the first tick one interval after `now`.
    ///
    /// Restarting a running ticker resets its deadline.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Cancels the schedule; `poll` reports nothing until the next `start`.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when a tick is due at `now` and schedules the next one.
    ///
    /// Missed intervals collapse into a single tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
