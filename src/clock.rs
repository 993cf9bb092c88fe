use std::time::{Duration, Instant};

/// Fixed-period tick source. Started when a game begins and stopped when it
/// ends; the host asks it whether a tick is due.
#[derive(Debug)]
pub struct Clock {
    period: Duration,
    next_tick: Option<Instant>,
}

impl Clock {
    pub fn new(period: Duration) -> Self {
        Clock { period, next_tick: None }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_tick = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Returns true at most once per period. Missed periods are dropped
    /// rather than replayed in a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(due) if now >= due => {
                let next = due + self.period;
                self.next_tick = Some(if next <= now { now + self.period } else { next });
                true
            }
            _ => false,
        }
    }

    /// How long the host may wait for input before the next tick is due.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.next_tick.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn stopped_clock_never_ticks() {
        let mut clock = Clock::new(PERIOD);
        let now = Instant::now();

        assert!(!clock.is_running());
        assert!(!clock.poll(now + PERIOD * 5));
        assert_eq!(clock.time_until_tick(now), None);
    }

    #[test]
    fn ticks_once_per_period() {
        let mut clock = Clock::new(PERIOD);
        let t0 = Instant::now();
        clock.start(t0);

        assert!(!clock.poll(t0 + Duration::from_millis(50)));
        assert!(clock.poll(t0 + PERIOD));
        assert!(!clock.poll(t0 + PERIOD));
        assert!(clock.poll(t0 + PERIOD * 2));
    }

    #[test]
    fn late_poll_does_not_burst() {
        let mut clock = Clock::new(PERIOD);
        let t0 = Instant::now();
        clock.start(t0);

        let late = t0 + PERIOD * 10;
        assert!(clock.poll(late));
        assert!(!clock.poll(late));
        assert_eq!(clock.time_until_tick(late), Some(PERIOD));
    }

    #[test]
    fn stop_cancels_pending_tick() {
        let mut clock = Clock::new(PERIOD);
        let t0 = Instant::now();
        clock.start(t0);
        clock.stop();

        assert!(!clock.poll(t0 + PERIOD));
    }
}
