//! Debounced input commitment
//!
//! Coalesces a burst of rapid input edits into a single committed value
//! after a quiet period. The controller is cooperative: it holds a deadline
//! rather than a timer, and the host event loop drives it by calling
//! `poll` with the current time. Dropping the controller (or the view that
//! owns it) discards any pending value, so nothing can commit after
//! teardown.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Idle/Pending state machine for debounced text input
///
/// Any submission moves the controller to Pending and (re)arms the deadline;
/// further submissions within the quiet period replace the value and push
/// the deadline out. When `poll` observes a passed deadline it commits the
/// latest value exactly once and returns to Idle.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    /// Quiet period used by `Default`
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    /// Create a controller with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Submit a new raw input value at time `now`
    ///
    /// Replaces any value already pending and restarts the quiet period.
    pub fn submit(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            value: value.into(),
            deadline: now + self.delay,
        });
    }

    /// Commit the pending value if its quiet period has elapsed by `now`
    ///
    /// Returns the committed value at most once per submission burst; the
    /// controller is Idle again afterwards.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.deadline <= now {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Discard any pending value without committing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting for its quiet period to elapse
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The value that would commit next, if any
    #[must_use]
    pub fn pending_value(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.value.as_str())
    }

    /// Deadline of the pending commit, if any
    ///
    /// Host event loops use this to size their poll timeout.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// The configured quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_commit_after_quiet_period() {
        let mut debouncer = Debouncer::default();
        let t0 = Instant::now();

        debouncer.submit("123", t0);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.poll(t0 + 499 * MS), None);
        assert_eq!(debouncer.poll(t0 + 500 * MS), Some("123".to_string()));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_rapid_inputs_coalesce_to_last_value() {
        let mut debouncer = Debouncer::default();
        let t0 = Instant::now();

        // "123" then "1234" within 100ms, then a 600ms pause
        debouncer.submit("123", t0);
        debouncer.submit("1234", t0 + 100 * MS);

        // The first deadline no longer exists
        assert_eq!(debouncer.poll(t0 + 500 * MS), None);
        // Exactly one commit, carrying the last value
        assert_eq!(debouncer.poll(t0 + 700 * MS), Some("1234".to_string()));
        assert_eq!(debouncer.poll(t0 + 800 * MS), None);
    }

    #[test]
    fn test_cancel_discards_pending_value() {
        let mut debouncer = Debouncer::default();
        let t0 = Instant::now();

        debouncer.submit("abc", t0);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(t0 + 1000 * MS), None);
    }

    #[test]
    fn test_deadline_tracks_latest_submission() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        let t0 = Instant::now();

        debouncer.submit("a", t0);
        assert_eq!(debouncer.deadline(), Some(t0 + 200 * MS));

        debouncer.submit("b", t0 + 150 * MS);
        assert_eq!(debouncer.deadline(), Some(t0 + 350 * MS));
        assert_eq!(debouncer.pending_value(), Some("b"));
    }

    #[test]
    fn test_idle_poll_commits_nothing() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.poll(Instant::now()), None);
    }
}
