//! Stopwatch model
//!
//! Counts up in whole seconds. All operations take the current instant
//! explicitly so the event loop owns the clock and tests can simulate it.
//! Refreshes are cooperative: the stopwatch only records when the next one
//! is due, and the caller polls [`Stopwatch::tick`].

use crate::util::units::{format_elapsed, truncate_to_seconds};
use std::time::{Duration, Instant};

/// Default spacing between display refreshes
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Stopwatch {
    /// Set while running; `None` means stopped
    started_at: Option<Instant>,
    /// Elapsed time carried over from before the current run
    carried: Duration,
    /// Last value written to the display, whole seconds
    displayed: Duration,
    /// Pending refresh, only ever set while running
    next_refresh: Option<Instant>,
    refresh_interval: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::with_refresh_interval(DEFAULT_REFRESH_INTERVAL)
    }

    pub fn with_refresh_interval(refresh_interval: Duration) -> Self {
        Self {
            started_at: None,
            carried: Duration::ZERO,
            displayed: Duration::ZERO,
            next_refresh: None,
            refresh_interval,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start or resume counting from the displayed value.
    ///
    /// Returns `false` if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }

        self.carried = self.displayed;
        self.started_at = Some(now);
        self.next_refresh = Some(now);
        self.tick(now);
        tracing::debug!(resumed_from = %format_elapsed(self.carried), "stopwatch started");
        true
    }

    /// Freeze the display at the current elapsed time.
    ///
    /// Returns `false` if not running.
    pub fn stop(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at.take() else {
            return false;
        };

        self.displayed = truncate_to_seconds(self.carried + now.saturating_duration_since(started_at));
        self.carried = Duration::ZERO;
        self.next_refresh = None;
        tracing::debug!(elapsed = %self.display(), "stopwatch stopped");
        true
    }

    /// Stop and clear back to `00:00`
    pub fn reset(&mut self) {
        self.started_at = None;
        self.carried = Duration::ZERO;
        self.displayed = Duration::ZERO;
        self.next_refresh = None;
        tracing::debug!("stopwatch reset");
    }

    /// Refresh the display if a refresh is due.
    ///
    /// Returns `true` when the display was recomputed. The next refresh is
    /// scheduled only while running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let (Some(started_at), Some(due)) = (self.started_at, self.next_refresh) else {
            return false;
        };
        if now < due {
            return false;
        }

        self.displayed = truncate_to_seconds(self.carried + now.saturating_duration_since(started_at));
        self.next_refresh = Some(now + self.refresh_interval);
        true
    }

    /// When the event loop must wake up next, if ever
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_refresh
    }

    /// Elapsed time as of `now`, live while running
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self.carried + now.saturating_duration_since(started_at),
            None => self.displayed,
        }
    }

    /// Last displayed elapsed time
    pub fn displayed(&self) -> Duration {
        self.displayed
    }

    /// Display text in `MM:SS`
    pub fn display(&self) -> String {
        format_elapsed(self.displayed)
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_initial_state() {
        let sw = Stopwatch::new();
        assert!(!sw.is_running());
        assert_eq!(sw.display(), "00:00");
        assert!(sw.next_deadline().is_none());
    }

    #[test]
    fn test_start_stop_resume() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.reset();
        assert_eq!(sw.display(), "00:00");

        assert!(sw.start(t0));
        assert!(sw.is_running());
        assert!(sw.tick(t0 + secs(1)));
        assert!(sw.tick(t0 + secs(2)));
        assert_eq!(sw.display(), "00:02");

        assert!(sw.stop(t0 + secs(2)));
        assert!(!sw.is_running());
        assert!(!sw.tick(t0 + secs(10)));
        assert_eq!(sw.display(), "00:02");

        let t1 = t0 + secs(30);
        assert!(sw.start(t1));
        assert_eq!(sw.display(), "00:02");
        sw.tick(t1 + secs(1));
        assert_eq!(sw.display(), "00:03");
    }

    #[test]
    fn test_start_is_idempotent_while_running() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        assert!(sw.start(t0));
        assert!(!sw.start(t0 + secs(5)));
        sw.tick(t0 + secs(5));
        assert_eq!(sw.display(), "00:05");
    }

    #[test]
    fn test_stop_when_stopped_is_noop() {
        let mut sw = Stopwatch::new();
        assert!(!sw.stop(Instant::now()));
        assert_eq!(sw.display(), "00:00");
    }

    #[test]
    fn test_tick_respects_deadline() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start(t0);
        assert_eq!(sw.next_deadline(), Some(t0 + secs(1)));
        assert!(!sw.tick(t0 + Duration::from_millis(400)));
        assert!(sw.tick(t0 + Duration::from_millis(1200)));
        assert_eq!(
            sw.next_deadline(),
            Some(t0 + Duration::from_millis(1200) + secs(1))
        );
    }

    #[test]
    fn test_stop_cancels_refresh() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start(t0);
        sw.stop(t0 + Duration::from_millis(2500));
        assert!(sw.next_deadline().is_none());
        assert_eq!(sw.display(), "00:02");
    }

    #[test]
    fn test_reset_while_running() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start(t0);
        sw.tick(t0 + secs(7));
        sw.reset();
        assert!(!sw.is_running());
        assert!(sw.next_deadline().is_none());
        assert_eq!(sw.display(), "00:00");
        assert_eq!(sw.elapsed(t0 + secs(9)), Duration::ZERO);
    }

    #[test]
    fn test_minutes_grow_past_an_hour() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::new();
        sw.start(t0);
        sw.stop(t0 + secs(61 * 60 + 5));
        assert_eq!(sw.display(), "61:05");
    }

    #[test]
    fn test_custom_refresh_interval() {
        let t0 = Instant::now();
        let mut sw = Stopwatch::with_refresh_interval(Duration::from_millis(500));
        sw.start(t0);
        assert_eq!(sw.next_deadline(), Some(t0 + Duration::from_millis(500)));
    }
}
