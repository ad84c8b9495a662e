// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relayout scheduling with a single debounce deadline.
//!
//! Geometry-invalidating events arrive as [`RelayoutTrigger`]s. Resize and
//! scroll bursts are debounced: each event re-arms one shared deadline
//! `now + debounce_interval`, so a burst collapses into a single recompute
//! once the burst goes quiet. An item-set change fires on the next tick
//! instead, mirroring a collection-change notification.
//!
//! One cancellable deadline replaces a pile of fire-and-forget timers: a
//! later trigger supersedes the pending deadline rather than stacking a new
//! one. Because every recompute is a full from-scratch pass, superseding is
//! lossless — the pending trigger set is carried forward and the eventual
//! pass covers all of it.

use crate::time::{Duration, HostTime};

/// A geometry-invalidating event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelayoutTrigger {
    /// The window was resized.
    Resize,
    /// The window was scrolled.
    Scroll,
    /// Items were added to or removed from the container.
    ItemsChanged,
}

/// Which triggers have accumulated behind the pending deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TriggerSet {
    /// A resize is pending.
    pub resize: bool,
    /// A scroll is pending.
    pub scroll: bool,
    /// An item-set change is pending.
    pub items_changed: bool,
}

impl TriggerSet {
    /// Returns whether any trigger is recorded.
    #[must_use]
    pub const fn any(self) -> bool {
        self.resize || self.scroll || self.items_changed
    }

    fn insert(&mut self, trigger: RelayoutTrigger) {
        match trigger {
            RelayoutTrigger::Resize => self.resize = true,
            RelayoutTrigger::Scroll => self.scroll = true,
            RelayoutTrigger::ItemsChanged => self.items_changed = true,
        }
    }
}

/// Debounced relayout scheduler.
#[derive(Clone, Copy, Debug)]
pub struct RelayoutScheduler {
    interval: Duration,
    deadline: Option<HostTime>,
    pending: TriggerSet,
}

impl RelayoutScheduler {
    /// Creates a scheduler with the given debounce interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            pending: TriggerSet {
                resize: false,
                scroll: false,
                items_changed: false,
            },
        }
    }

    /// Records a trigger at time `now`.
    ///
    /// Resize and scroll re-arm the deadline to `now + interval`; an
    /// item-set change arms it to `now` so the next [`poll`](Self::poll)
    /// fires.
    pub fn request(&mut self, trigger: RelayoutTrigger, now: HostTime) {
        self.pending.insert(trigger);
        self.deadline = Some(match trigger {
            RelayoutTrigger::ItemsChanged => now,
            RelayoutTrigger::Resize | RelayoutTrigger::Scroll => {
                now.saturating_add(self.interval)
            }
        });
    }

    /// Fires the pending recompute if its deadline has passed.
    ///
    /// Returns the accumulated trigger set and clears the deadline, or
    /// `None` if nothing is due.
    pub fn poll(&mut self, now: HostTime) -> Option<TriggerSet> {
        let due = self.deadline?;
        if now < due {
            return None;
        }
        self.deadline = None;
        Some(core::mem::take(&mut self.pending))
    }

    /// Returns the pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<HostTime> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn nothing_due_without_a_request() {
        let mut sched = RelayoutScheduler::new(INTERVAL);
        assert_eq!(sched.poll(HostTime(1_000)), None);
    }

    #[test]
    fn resize_fires_after_the_debounce_interval() {
        let mut sched = RelayoutScheduler::new(INTERVAL);
        sched.request(RelayoutTrigger::Resize, HostTime(0));
        assert_eq!(sched.poll(HostTime(99)), None);
        let fired = sched.poll(HostTime(100)).expect("deadline passed");
        assert!(fired.resize);
        assert!(!fired.scroll);
        // Cleared after firing.
        assert_eq!(sched.poll(HostTime(200)), None);
    }

    #[test]
    fn burst_collapses_to_a_single_recompute() {
        let mut sched = RelayoutScheduler::new(INTERVAL);
        sched.request(RelayoutTrigger::Resize, HostTime(0));
        sched.request(RelayoutTrigger::Scroll, HostTime(40));
        sched.request(RelayoutTrigger::Resize, HostTime(80));
        // The deadline moved with each event; nothing fires mid-burst.
        assert_eq!(sched.poll(HostTime(100)), None);
        assert_eq!(sched.poll(HostTime(179)), None);
        let fired = sched.poll(HostTime(180)).expect("quiet period elapsed");
        assert!(fired.resize && fired.scroll, "both triggers carried forward");
        assert_eq!(sched.poll(HostTime(300)), None);
    }

    #[test]
    fn items_changed_fires_on_the_next_poll() {
        let mut sched = RelayoutScheduler::new(INTERVAL);
        sched.request(RelayoutTrigger::ItemsChanged, HostTime(500));
        let fired = sched.poll(HostTime(500)).expect("immediate deadline");
        assert!(fired.items_changed);
    }

    #[test]
    fn later_resize_supersedes_but_keeps_items_changed_pending() {
        let mut sched = RelayoutScheduler::new(INTERVAL);
        sched.request(RelayoutTrigger::ItemsChanged, HostTime(0));
        sched.request(RelayoutTrigger::Resize, HostTime(10));
        assert_eq!(sched.poll(HostTime(50)), None, "deadline was re-armed");
        let fired = sched.poll(HostTime(110)).expect("debounce elapsed");
        assert!(fired.items_changed && fired.resize);
    }

    #[test]
    fn deadline_is_observable() {
        let mut sched = RelayoutScheduler::new(INTERVAL);
        assert_eq!(sched.deadline(), None);
        sched.request(RelayoutTrigger::Scroll, HostTime(20));
        assert_eq!(sched.deadline(), Some(HostTime(120)));
    }
}
