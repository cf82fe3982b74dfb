// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed latch: a flag that holds `true` for a short window after being set.
//!
//! Some platforms dispatch two events for one physical gesture, for example
//! a focus event immediately before the click on the same element. When the
//! first event already performed the interesting work, the second must be
//! able to tell that it is part of the same gesture and back off. A
//! [`TimedLatch`] records "this just happened" and automatically reads as
//! `false` again once the hold window elapses.
//!
//! Setting an already-set latch re-arms it: the flag stays `true` and the
//! single stored deadline moves out to the new expiry. There is never more
//! than one pending expiry, so repeated sets cannot make the flag flap.
//!
//! ```rust
//! use hedgerow_event_state::latch::TimedLatch;
//!
//! let mut latch = TimedLatch::with_hold(100);
//! latch.set(0);
//! latch.set(50); // re-arm; deadline is now 150
//!
//! assert!(latch.is_set(149));
//! assert!(!latch.is_set(150));
//! ```

/// A boolean flag with a timed automatic reset.
///
/// Timestamps are host-supplied milliseconds from any monotonic origin. The
/// latch owns no timer; reads compare against the stored deadline, so a
/// "reset" is just the deadline passing. Hosts that want to wake up exactly
/// when the flag turns false can read [`TimedLatch::deadline`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimedLatch {
    /// Instant after which the flag reads `false`, if currently set.
    deadline: Option<u64>,
    /// How long the flag holds after each `set` (milliseconds).
    hold: u64,
}

impl TimedLatch {
    /// Default hold window in milliseconds.
    ///
    /// 200ms comfortably covers the focus-then-click dispatch gap observed on
    /// the platforms that fire both for one gesture, while staying short
    /// enough that a deliberate second interaction is not suppressed.
    pub const DEFAULT_HOLD_MS: u64 = 200;

    /// Create a latch with the default hold window.
    pub fn new() -> Self {
        Self::with_hold(Self::DEFAULT_HOLD_MS)
    }

    /// Create a latch with a custom hold window in milliseconds.
    pub fn with_hold(hold: u64) -> Self {
        Self {
            deadline: None,
            hold,
        }
    }

    /// Set the flag at `now`, arming (or re-arming) the automatic reset.
    ///
    /// Re-entrant: setting while already set keeps the flag `true` and
    /// replaces the pending deadline with `now + hold`.
    pub fn set(&mut self, now: u64) {
        self.deadline = Some(now.saturating_add(self.hold));
    }

    /// Read the flag at `now`.
    ///
    /// `true` from the instant of `set` up to, but not including, the
    /// deadline.
    pub fn is_set(&self, now: u64) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Clear the flag immediately, dropping any pending deadline.
    pub fn clear(&mut self) {
        self.deadline = None;
    }

    /// The instant at which the flag will read `false`, if it is set.
    ///
    /// A returned instant in the caller's past means the flag already reads
    /// `false`; [`TimedLatch::is_set`] is the authoritative read.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// The configured hold window in milliseconds.
    pub fn hold(&self) -> u64 {
        self.hold
    }
}

impl Default for TimedLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_latch_reads_false() {
        let latch = TimedLatch::new();
        assert!(!latch.is_set(0));
        assert!(latch.deadline().is_none());
    }

    #[test]
    fn set_reads_true_until_deadline() {
        let mut latch = TimedLatch::new();
        latch.set(1_000);

        assert!(latch.is_set(1_000));
        assert!(latch.is_set(1_199));
        // The reset instant itself reads false.
        assert!(!latch.is_set(1_200));
        assert!(!latch.is_set(5_000));
    }

    #[test]
    fn reset_is_automatic_not_destructive() {
        let mut latch = TimedLatch::new();
        latch.set(1_000);

        // Reading past the deadline does not consume anything; a later `set`
        // arms a fresh window.
        assert!(!latch.is_set(2_000));
        latch.set(2_000);
        assert!(latch.is_set(2_100));
    }

    #[test]
    fn rearm_extends_the_window() {
        let mut latch = TimedLatch::new();
        latch.set(0);
        latch.set(150);

        // Still true past the original deadline of 200.
        assert!(latch.is_set(300));
        assert!(!latch.is_set(350));
    }

    #[test]
    fn rearm_keeps_a_single_deadline() {
        let mut latch = TimedLatch::new();
        latch.set(0);
        latch.set(50);
        latch.set(100);

        assert_eq!(latch.deadline(), Some(300));
    }

    #[test]
    fn clear_drops_the_flag_and_deadline() {
        let mut latch = TimedLatch::new();
        latch.set(1_000);
        latch.clear();

        assert!(!latch.is_set(1_001));
        assert!(latch.deadline().is_none());
    }

    #[test]
    fn custom_hold_window() {
        let mut latch = TimedLatch::with_hold(50);
        latch.set(0);

        assert!(latch.is_set(49));
        assert!(!latch.is_set(50));
        assert_eq!(latch.hold(), 50);
    }

    #[test]
    fn zero_hold_never_reads_true() {
        let mut latch = TimedLatch::with_hold(0);
        latch.set(10);
        assert!(!latch.is_set(10));
    }

    #[test]
    fn set_near_u64_max_saturates() {
        let mut latch = TimedLatch::new();
        latch.set(u64::MAX - 10);
        assert!(latch.is_set(u64::MAX - 1));
        assert_eq!(latch.deadline(), Some(u64::MAX));
    }
}
