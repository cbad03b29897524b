use std::time::{Duration, Instant};

/// How far the clock may fall behind before it stops catching up and
/// resynchronises to the current time.
pub const MAX_BACKLOG_TICKS: u32 = 5;

/// Fixed-rate tick source.
///
/// The clock never sleeps itself; the frontend asks how long it may block on
/// its event queue (`until_next`) and then polls whether a tick is due.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub fn new(rate_hz: u32, now: Instant) -> Self {
        let interval = Duration::from_secs(1) / rate_hz.max(1);
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick is due, zero if it already is.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Returns true once per elapsed interval.
    ///
    /// A clock that is behind keeps returning true on successive polls until
    /// it has caught up, unless the backlog exceeds `MAX_BACKLOG_TICKS`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }

        let behind = now.duration_since(self.next_tick);
        if behind > self.interval * MAX_BACKLOG_TICKS {
            log::debug!(
                "frame clock {:?} behind, dropping backlog and resyncing",
                behind
            );
            self.next_tick = now + self.interval;
        } else {
            self.next_tick += self.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_for_sixty_hz() {
        let clock = FrameClock::new(60, Instant::now());
        assert_eq!(clock.interval(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_not_due_before_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        assert!(!clock.poll(start));
        assert_eq!(clock.until_next(start), clock.interval());
    }

    #[test]
    fn test_one_tick_per_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        let due = start + clock.interval();

        assert!(clock.poll(due));
        assert!(!clock.poll(due));
        assert_eq!(clock.until_next(due), clock.interval());
    }

    #[test]
    fn test_catches_up_small_backlog() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        let late = start + clock.interval() * 3;

        assert!(clock.poll(late));
        assert!(clock.poll(late));
        assert!(clock.poll(late));
        assert!(!clock.poll(late));
    }

    #[test]
    fn test_resyncs_after_large_backlog() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60, start);
        let very_late = start + clock.interval() * (MAX_BACKLOG_TICKS + 10);

        assert!(clock.poll(very_late));
        assert!(!clock.poll(very_late));
        assert_eq!(clock.until_next(very_late), clock.interval());
    }

    #[test]
    fn test_until_next_saturates() {
        let start = Instant::now();
        let clock = FrameClock::new(60, start);
        let late = start + clock.interval() * 2;
        assert_eq!(clock.until_next(late), Duration::ZERO);
    }
}
