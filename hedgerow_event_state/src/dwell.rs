// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dwell timer: a one-shot deferred check for hover-intent behavior.
//!
//! Opening a panel the instant the pointer brushes over its trigger is
//! hostile to users crossing the screen. The usual remedy is to wait a short
//! delay and then act only if the interaction is still relevant. A
//! [`DwellTimer`] models exactly that: [`arm`](DwellTimer::arm) records the
//! deadline, [`fire`](DwellTimer::fire) reports (once) that the deadline has
//! passed, and the caller re-validates its precondition before acting.
//!
//! The precondition re-check is the correctness mechanism, not cancellation:
//! a timer that fires after the user moved away is a harmless no-op at the
//! call site. [`cancel`](DwellTimer::cancel) exists for hosts that also want
//! to disarm eagerly (for example on pointer leave), but they do not have to.
//!
//! Arming an already-armed timer keeps the original deadline. A pointer
//! resting on a trigger produces a stream of over/move events; if each of
//! them pushed the deadline out, the check would never come due.
//!
//! ```rust
//! use hedgerow_event_state::dwell::DwellTimer;
//!
//! let mut dwell = DwellTimer::with_delay(100);
//! dwell.arm(1_000);
//! dwell.arm(1_050); // no-op; deadline stays at 1_100
//!
//! assert!(!dwell.fire(1_099));
//! assert!(dwell.fire(1_100));
//! // One shot: the arming is consumed.
//! assert!(!dwell.fire(1_100));
//! ```

/// A one-shot timer that becomes due a fixed delay after arming.
///
/// Timestamps are host-supplied milliseconds from any monotonic origin. The
/// timer owns no scheduling; the host polls [`DwellTimer::fire`] when
/// convenient (next event, next frame, or a real timer armed from
/// [`DwellTimer::deadline`]). Firing late is expected and fine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DwellTimer {
    /// Instant at which the pending check comes due, if armed.
    due: Option<u64>,
    /// Delay between arming and the check (milliseconds).
    delay: u64,
}

impl DwellTimer {
    /// Default dwell delay in milliseconds.
    ///
    /// 200ms distinguishes "resting on the trigger" from "passing through"
    /// without feeling sluggish.
    pub const DEFAULT_DELAY_MS: u64 = 200;

    /// Create a timer with the default delay.
    pub fn new() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY_MS)
    }

    /// Create a timer with a custom delay in milliseconds.
    pub fn with_delay(delay: u64) -> Self {
        Self { due: None, delay }
    }

    /// Arm the timer at `now`.
    ///
    /// If the timer is already armed this is a no-op: the earliest arming
    /// wins, so a stream of repeat events cannot starve the deadline.
    pub fn arm(&mut self, now: u64) {
        if self.due.is_none() {
            self.due = Some(now.saturating_add(self.delay));
        }
    }

    /// Whether the timer is currently armed.
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Consume the arming if the deadline has passed.
    ///
    /// Returns `true` exactly once per arming, at or after the deadline. The
    /// caller is expected to re-validate its precondition before acting on a
    /// `true` result; a fire whose precondition no longer holds is a silent
    /// no-op at the call site.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// The pending deadline, if armed.
    pub fn deadline(&self) -> Option<u64> {
        self.due
    }

    /// The configured delay in milliseconds.
    pub fn delay(&self) -> u64 {
        self.delay
    }
}

impl Default for DwellTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_timer_never_fires() {
        let mut dwell = DwellTimer::new();
        assert!(!dwell.is_armed());
        assert!(!dwell.fire(10_000));
        assert!(dwell.deadline().is_none());
    }

    #[test]
    fn fires_at_the_deadline_not_before() {
        let mut dwell = DwellTimer::new();
        dwell.arm(1_000);

        assert!(dwell.is_armed());
        assert!(!dwell.fire(1_199));
        assert!(dwell.fire(1_200));
    }

    #[test]
    fn fires_exactly_once_per_arming() {
        let mut dwell = DwellTimer::new();
        dwell.arm(1_000);

        assert!(dwell.fire(1_500));
        assert!(!dwell.fire(1_500));
        assert!(!dwell.is_armed());
    }

    #[test]
    fn late_fire_is_still_a_fire() {
        let mut dwell = DwellTimer::new();
        dwell.arm(1_000);

        // The host was busy; the deadline passed long ago.
        assert!(dwell.fire(9_999));
    }

    #[test]
    fn rearm_while_armed_keeps_original_deadline() {
        let mut dwell = DwellTimer::new();
        dwell.arm(1_000);
        dwell.arm(1_150);

        assert_eq!(dwell.deadline(), Some(1_200));
        assert!(dwell.fire(1_200));
    }

    #[test]
    fn arm_after_fire_starts_a_fresh_deadline() {
        let mut dwell = DwellTimer::new();
        dwell.arm(1_000);
        assert!(dwell.fire(1_200));

        dwell.arm(2_000);
        assert_eq!(dwell.deadline(), Some(2_200));
        assert!(!dwell.fire(2_100));
        assert!(dwell.fire(2_200));
    }

    #[test]
    fn cancel_disarms_without_firing() {
        let mut dwell = DwellTimer::new();
        dwell.arm(1_000);
        dwell.cancel();

        assert!(!dwell.is_armed());
        assert!(!dwell.fire(2_000));
    }

    #[test]
    fn custom_delay() {
        let mut dwell = DwellTimer::with_delay(50);
        dwell.arm(0);

        assert!(!dwell.fire(49));
        assert!(dwell.fire(50));
        assert_eq!(dwell.delay(), 50);
    }

    #[test]
    fn arm_near_u64_max_saturates() {
        let mut dwell = DwellTimer::new();
        dwell.arm(u64::MAX - 10);
        assert_eq!(dwell.deadline(), Some(u64::MAX));
        assert!(dwell.fire(u64::MAX));
    }
}
