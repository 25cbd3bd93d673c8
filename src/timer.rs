use std::time::Duration;

// Repeating timer driven by elapsed-time deltas from the host loop.
// There is no background thread; the owner feeds it `dt` every frame
// and runs one callback per full interval reported.
pub struct IntervalTimer {
    interval: Duration,
    elapsed: Duration,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    // Accumulate `dt` and report how many full intervals have elapsed.
    // Sub-interval remainders carry over to the next call.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_full_interval() {
        let mut timer = IntervalTimer::new(Duration::from_millis(10));
        assert_eq!(timer.advance(Duration::from_millis(10)), 1);
        assert_eq!(timer.advance(Duration::from_millis(10)), 1);
    }

    #[test]
    fn does_not_fire_early() {
        let mut timer = IntervalTimer::new(Duration::from_millis(10));
        assert_eq!(timer.advance(Duration::from_millis(9)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn fires_several_times_for_a_long_delta() {
        let mut timer = IntervalTimer::new(Duration::from_millis(10));
        assert_eq!(timer.advance(Duration::from_millis(35)), 3);
        // 5ms remainder carried over from the previous call
        assert_eq!(timer.advance(Duration::from_millis(5)), 1);
    }

    #[test]
    fn zero_delta_fires_nothing() {
        let mut timer = IntervalTimer::new(Duration::from_millis(10));
        assert_eq!(timer.advance(Duration::ZERO), 0);
    }
}
