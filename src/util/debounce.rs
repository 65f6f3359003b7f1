//! Trailing-edge debounce for burst-prone events (resize/orientation).

use web_time::{Duration, Instant};

/// Coalesces a burst of triggers into a single firing once the burst has
/// been quiet for the configured delay.
///
/// Purely deadline-based: callers poll [`fire`](Self::fire) from the frame
/// tick, so no timer thread or callback is involved.
#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Create a debouncer with the given quiet-period delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record a trigger, pushing the deadline out to `now + delay`.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Poll for a firing. Returns `true` (and clears the pending deadline)
    /// once the quiet period has elapsed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Re-arm for the next tick without waiting a full delay again.
    ///
    /// Used when a firing could not be acted on yet (e.g. a layout
    /// container still measures zero) and should be retried promptly.
    pub fn retry(&mut self, now: Instant) {
        self.deadline = Some(now);
    }

    /// Whether a firing is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut d = Debounce::new(Duration::from_millis(100));
        d.trigger(start);
        assert!(!d.fire(start + Duration::from_millis(50)));
        assert!(d.fire(start + Duration::from_millis(100)));
        assert!(!d.fire(start + Duration::from_millis(200)));
    }

    #[test]
    fn repeated_triggers_coalesce() {
        let start = Instant::now();
        let mut d = Debounce::new(Duration::from_millis(100));
        d.trigger(start);
        d.trigger(start + Duration::from_millis(80));
        // First deadline has passed but was superseded by the second.
        assert!(!d.fire(start + Duration::from_millis(120)));
        assert!(d.fire(start + Duration::from_millis(180)));
    }

    #[test]
    fn retry_rearms_immediately() {
        let start = Instant::now();
        let mut d = Debounce::new(Duration::from_millis(100));
        d.trigger(start);
        assert!(d.fire(start + Duration::from_millis(100)));
        d.retry(start + Duration::from_millis(100));
        assert!(d.fire(start + Duration::from_millis(101)));
    }
}
