// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hedgerow_event_state --heading-base-level=0

//! Hedgerow Event State: timestamp-driven state machines for UI trigger timing.
//!
//! This crate provides small, focused state machines for interaction patterns
//! that need a notion of "recently" or "in a moment" without owning a timer.
//! Each module handles one pattern:
//!
//! - [`latch`]: a boolean flag that reads `true` for a short hold window after
//!   being set, then reads `false` again. Used to suppress a conflicting
//!   event that a platform fires immediately after the one that set the flag.
//! - [`dwell`]: a one-shot deferred check that becomes due a fixed delay after
//!   arming. Used for hover-intent style "act only if the user is still
//!   there" behavior.
//!
//! ## Design Philosophy
//!
//! Neither machine schedules anything. Hosts pass event timestamps in
//! (milliseconds, any monotonic origin) and read deadlines out, so the same
//! state machines work under a frame loop, an event loop with real timers, or
//! a test that fabricates time. Expiry is checked on read rather than by
//! cancelling anything: a stale deadline is simply a deadline that no longer
//! matters.
//!
//! ## Usage
//!
//! Suppressing a follow-up event for a short window:
//!
//! ```rust
//! use hedgerow_event_state::latch::TimedLatch;
//!
//! let mut latch = TimedLatch::new();
//! latch.set(1_000);
//!
//! assert!(latch.is_set(1_050));
//! // The default hold is 200ms; after that the flag reads false again.
//! assert!(!latch.is_set(1_200));
//! ```
//!
//! Deferring a check until the pointer has dwelled:
//!
//! ```rust
//! use hedgerow_event_state::dwell::DwellTimer;
//!
//! let mut dwell = DwellTimer::new();
//! dwell.arm(1_000);
//!
//! // Not due yet; the host would sleep until `deadline()`.
//! assert!(!dwell.fire(1_100));
//! assert_eq!(dwell.deadline(), Some(1_200));
//!
//! // Due: `fire` consumes the arming. The caller now re-validates its
//! // precondition before acting.
//! assert!(dwell.fire(1_200));
//! assert!(!dwell.fire(1_200));
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

pub mod dwell;
pub mod latch;
