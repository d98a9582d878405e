//! App clock and the fixed-interval ticker that paces simulation steps

use std::sync::OnceLock;
use std::time::Instant;

/// Seconds since the first call
pub fn now_seconds() -> f64 {
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Fires at most once per `interval` seconds when polled
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: f64,
    last: Option<f64>,
}

impl Ticker {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(ms as f64 / 1000.0)
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// True if a tick is due at `now`. The first poll always fires.
    ///
    /// Missed ticks are dropped rather than replayed in a burst.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Seconds until the next tick is due (0 if due now)
    pub fn remaining(&self, now: f64) -> f64 {
        self.last
            .map_or(0.0, |last| (self.interval - (now - last)).max(0.0))
    }

    /// Mark the ticker as fired at `now`, e.g. after an immediate manual step
    pub fn restart(&mut self, now: f64) {
        self.last = Some(now);
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
