use std::time::{Duration, Instant};
use tracing::debug;

/// Fixed-interval timer polled from the event loop.
///
/// Started when the view becomes active and stopped when it goes away;
/// dropping a running ticker stops it.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn start(interval: Duration) -> Self {
        Self::start_at(interval, Instant::now())
    }

    pub fn start_at(interval: Duration, now: Instant) -> Self {
        debug!("Ticker started with {:?} interval", interval);
        Self {
            interval,
            next_due: Some(now + interval),
        }
    }

    /// Time left until the next firing; `None` once stopped
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Fires at most once per call. A late caller gets one firing and the
    /// schedule restarts from `now` instead of replaying missed intervals.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let next = due + self.interval;
        self.next_due = Some(if next <= now { now + self.interval } else { next });
        true
    }

    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            debug!("Ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
