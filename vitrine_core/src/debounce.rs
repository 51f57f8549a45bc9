// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce for bursty signals such as viewport resizes.
//!
//! Each [`trigger`](Debounce::trigger) pushes the deadline out by the fixed
//! delay. Backends schedule a timer for every trigger and call
//! [`poll`](Debounce::poll) when it fires; only the timer matching the latest
//! deadline gets `true`, so a burst collapses into one action.

use crate::time::{Duration, HostTime};

/// A fixed-delay trailing debounce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<HostTime>,
}

impl Debounce {
    /// Creates an idle debounce with the given settle delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The settle delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Records a signal at `now` and returns the new deadline.
    pub fn trigger(&mut self, now: HostTime) -> HostTime {
        let deadline = now.saturating_add(self.delay);
        self.deadline = Some(deadline);
        deadline
    }

    /// Returns `true` once, when `now` has reached the pending deadline.
    pub fn poll(&mut self, now: HostTime) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<HostTime> {
        self.deadline
    }

    /// Drops the pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut d = Debounce::new(Duration(100));
        assert_eq!(d.trigger(HostTime(1_000)), HostTime(1_100));
        assert!(!d.poll(HostTime(1_099)), "too early");
        assert!(d.poll(HostTime(1_100)));
        assert!(!d.poll(HostTime(1_200)), "already fired");
    }

    #[test]
    fn burst_collapses_to_last_trigger() {
        let mut d = Debounce::new(Duration(100));
        d.trigger(HostTime(0));
        d.trigger(HostTime(50));
        d.trigger(HostTime(90));
        // Timers for the first two triggers fire before the latest deadline.
        assert!(!d.poll(HostTime(100)));
        assert!(!d.poll(HostTime(150)));
        assert!(d.poll(HostTime(190)));
        assert!(!d.is_pending());
    }

    #[test]
    fn cancel_drops_deadline() {
        let mut d = Debounce::new(Duration(10));
        d.trigger(HostTime(0));
        d.cancel();
        assert!(!d.poll(HostTime(1_000)));
    }
}
