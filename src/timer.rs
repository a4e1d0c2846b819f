//! Fixed-interval timer driven by frame time.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: Duration,
    elapsed: Duration,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "timer interval must be non-zero");
        RepeatingTimer {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advances by `dt` and returns how many times the timer fired.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }

    /// Starts counting the next interval from zero.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = RepeatingTimer::new(Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(60)), 0);
        assert_eq!(timer.advance(Duration::from_millis(60)), 1);
        // 20ms carried over from the previous interval.
        assert_eq!(timer.advance(Duration::from_millis(70)), 0);
        assert_eq!(timer.advance(Duration::from_millis(10)), 1);
    }

    #[test]
    fn test_long_frame_fires_multiple_times() {
        let mut timer = RepeatingTimer::new(Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(350)), 3);
    }

    #[test]
    fn test_reset_discards_progress() {
        let mut timer = RepeatingTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(90));
        timer.reset();
        assert_eq!(timer.advance(Duration::from_millis(90)), 0);
    }
}
