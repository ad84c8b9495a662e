// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Readiness probing.
//!
//! The host framework may hand the engine a grid before the container or its
//! children have been rendered, and no reliable "children rendered" signal
//! is assumed to exist. [`ReadinessProbe`] bridges that gap: it is a pure
//! state machine, driven by host ticks, that rate-limits readiness checks to
//! the configured poll interval and reports when the grid may perform its
//! one-time setup.
//!
//! Absence of the container is never an error. With unbounded attempts the
//! probe polls indefinitely and a container that never materializes simply
//! leaves the grid unlaid-out. Configuring
//! [`max_poll_attempts`](crate::config::GridConfig::max_poll_attempts)
//! bounds the retries instead; after [`ReadyPoll::GaveUp`] the probe goes
//! permanently quiet, so the owning loop holds no perpetually armed timer.

use crate::time::{Duration, HostTime};

/// Outcome of a single [`ReadinessProbe::poll`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadyPoll {
    /// The poll interval has not elapsed yet (or the probe already
    /// finished); nothing was checked.
    NotDue,
    /// A check ran and the host is still not ready.
    StillWaiting,
    /// The host became ready. Reported exactly once; later polls return
    /// [`NotDue`](Self::NotDue).
    Ready,
    /// The configured attempt budget ran out. Reported exactly once; later
    /// polls return [`NotDue`](Self::NotDue).
    GaveUp,
}

/// Rate-limited readiness checker.
#[derive(Clone, Copy, Debug)]
pub struct ReadinessProbe {
    interval: Duration,
    max_attempts: Option<u32>,
    attempts: u32,
    next_due: Option<HostTime>,
    finished: bool,
}

impl ReadinessProbe {
    /// Creates a probe that checks at most once per `interval`, giving up
    /// after `max_attempts` checks (`None` = never).
    ///
    /// The first poll is due immediately.
    #[must_use]
    pub const fn new(interval: Duration, max_attempts: Option<u32>) -> Self {
        Self {
            interval,
            max_attempts,
            attempts: 0,
            next_due: None,
            finished: false,
        }
    }

    /// Advances the probe.
    ///
    /// `ready` is the host's current readiness ("container attached and item
    /// count > 0"), sampled by the caller. Returns what happened; see
    /// [`ReadyPoll`].
    pub fn poll(&mut self, now: HostTime, ready: bool) -> ReadyPoll {
        if self.finished {
            return ReadyPoll::NotDue;
        }
        if let Some(due) = self.next_due
            && now < due
        {
            return ReadyPoll::NotDue;
        }

        self.attempts += 1;
        self.next_due = Some(now.saturating_add(self.interval));

        if ready {
            self.finished = true;
            return ReadyPoll::Ready;
        }
        if let Some(max) = self.max_attempts
            && self.attempts >= max
        {
            self.finished = true;
            return ReadyPoll::GaveUp;
        }
        ReadyPoll::StillWaiting
    }

    /// Returns how many checks have run so far.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns whether the probe has reported [`ReadyPoll::Ready`] or
    /// [`ReadyPoll::GaveUp`] and gone quiet.
    #[must_use]
    pub const fn finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn first_poll_is_due_immediately() {
        let mut probe = ReadinessProbe::new(INTERVAL, None);
        assert_eq!(probe.poll(HostTime(0), false), ReadyPoll::StillWaiting);
    }

    #[test]
    fn polls_are_rate_limited_to_the_interval() {
        let mut probe = ReadinessProbe::new(INTERVAL, None);
        assert_eq!(probe.poll(HostTime(0), false), ReadyPoll::StillWaiting);
        assert_eq!(probe.poll(HostTime(50), false), ReadyPoll::NotDue);
        assert_eq!(probe.poll(HostTime(99), false), ReadyPoll::NotDue);
        assert_eq!(probe.poll(HostTime(100), false), ReadyPoll::StillWaiting);
        assert_eq!(probe.attempts(), 2);
    }

    #[test]
    fn ready_is_reported_exactly_once() {
        let mut probe = ReadinessProbe::new(INTERVAL, None);
        assert_eq!(probe.poll(HostTime(0), true), ReadyPoll::Ready);
        assert!(probe.finished());
        // Even a due, ready poll stays quiet afterwards.
        assert_eq!(probe.poll(HostTime(500), true), ReadyPoll::NotDue);
    }

    #[test]
    fn gives_up_after_attempt_budget() {
        let mut probe = ReadinessProbe::new(INTERVAL, Some(3));
        assert_eq!(probe.poll(HostTime(0), false), ReadyPoll::StillWaiting);
        assert_eq!(probe.poll(HostTime(100), false), ReadyPoll::StillWaiting);
        assert_eq!(probe.poll(HostTime(200), false), ReadyPoll::GaveUp);
        assert_eq!(probe.poll(HostTime(300), false), ReadyPoll::NotDue);
        assert_eq!(probe.attempts(), 3);
    }

    #[test]
    fn unbounded_probe_never_gives_up() {
        let mut probe = ReadinessProbe::new(INTERVAL, None);
        for i in 0..1000 {
            assert_eq!(
                probe.poll(HostTime(i * 100), false),
                ReadyPoll::StillWaiting
            );
        }
        assert!(!probe.finished());
    }

    #[test]
    fn becomes_ready_on_a_later_poll() {
        let mut probe = ReadinessProbe::new(INTERVAL, Some(10));
        assert_eq!(probe.poll(HostTime(0), false), ReadyPoll::StillWaiting);
        assert_eq!(probe.poll(HostTime(100), false), ReadyPoll::StillWaiting);
        assert_eq!(probe.poll(HostTime(200), true), ReadyPoll::Ready);
        assert_eq!(probe.attempts(), 3);
    }
}
