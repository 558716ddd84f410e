//! Trailing-edge debounce (pure, time injected).
//!
//! The event loop passes `now` into every call, so the debouncer never reads
//! the clock itself and tests can drive it with synthetic instants.

use std::time::{Duration, Instant};

/// Default quiet period before a typed value is committed.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Value waiting for its quiet period to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Delays a changing value until it has been stable for `quiet_period`.
///
/// Each `schedule` replaces the pending value and restarts the period.
/// `poll` hands the value out at most once.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Idle debouncer that settles values after `quiet_period`.
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Delay between the last change and emission.
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Replace any pending value with `value`, due `quiet_period` after `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.quiet_period,
        });
    }

    /// Take the pending value if its quiet period has fully elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|pending| pending.value)
            }
            _ => None,
        }
    }

    /// Discard the pending value without emitting it.
    ///
    /// Returns true if something was discarded.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// True while a value is waiting to settle.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Time left until the pending value is due. Zero once overdue.
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod tests;
