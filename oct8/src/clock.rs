//! Scheduler clock.
use std::time::{Duration, Instant};

/// Interval gate for the 60 Hz timer clock.
///
/// The interpreter and the timers are logically independent clocks sharing
/// one scheduler, so the gate is polled rather than blocking: `tick` answers
/// whether the interval has elapsed and the caller decides what to run.
pub(crate) struct Clock {
    interval: Duration,
    last: Instant,
}

impl Clock {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// Set the clock state back to zero.
    pub(crate) fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// True once per elapsed interval.
    ///
    /// Resets back to zero rather than trying to catch up. If the machine
    /// was paused for a long time, it should simply continue at the next
    /// cycle running at its usual speed.
    pub(crate) fn tick(&mut self) -> bool {
        if self.last.elapsed() >= self.interval {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_interval_always_fires() {
        let mut clock = Clock::new(Duration::ZERO);
        assert!(clock.tick());
        assert!(clock.tick());
    }

    #[test]
    fn test_long_interval_holds() {
        let mut clock = Clock::new(Duration::from_secs(3600));
        assert!(!clock.tick());
        clock.reset();
        assert!(!clock.tick());
    }
}
