//! Fixed-rate tick limiter.
//!
//! A blocking wait at the end of every tick, like the original's frame
//! clock: sleep out the remainder of the tick period, or restart the
//! cadence from now if the tick ran long.

use std::thread;
use std::time::{Duration, Instant};

pub struct TickClock {
    period: Duration,
    next_deadline: Instant,
}

impl TickClock {
    pub fn new(tick_rate: u32) -> Self {
        let period = Duration::from_secs(1) / tick_rate;
        Self {
            period,
            next_deadline: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until the current tick's deadline, then arm the next one.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next_deadline > now {
            thread::sleep(self.next_deadline - now);
            self.next_deadline += self.period;
        } else {
            // Overran the deadline; don't try to catch up, just rearm.
            self.next_deadline = now + self.period;
        }
    }

    /// Restart the cadence, e.g. after the deliberate start-of-game pause.
    pub fn restart(&mut self) {
        self.next_deadline = Instant::now() + self.period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_rate() {
        assert_eq!(TickClock::new(100).period(), Duration::from_millis(10));
        assert_eq!(TickClock::new(50).period(), Duration::from_millis(20));
    }

    #[test]
    fn test_wait_enforces_rate() {
        let mut clock = TickClock::new(200); // 5 ms period
        let start = Instant::now();
        for _ in 0..4 {
            clock.wait();
        }
        assert!(
            start.elapsed() >= Duration::from_millis(15),
            "Four empty ticks at 200 Hz must take at least ~20 ms of waiting"
        );
    }

    #[test]
    fn test_overrun_does_not_accumulate_debt() {
        let mut clock = TickClock::new(1000);
        thread::sleep(Duration::from_millis(10)); // miss several deadlines
        let start = Instant::now();
        clock.wait(); // should return promptly rather than fast-forwarding
        assert!(start.elapsed() < Duration::from_millis(5));
    }
}
