// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hedgerow_menu --heading-base-level=0

//! Hedgerow Menu: a headless disclosure trigger for menu/popover UIs.
//!
//! ## Overview
//!
//! This crate implements the interactive element that opens, closes, and
//! redirects keyboard focus into a menu panel. It reconciles focus, pointer,
//! and keyboard events against an external visibility state machine while
//! respecting the menu's orientation (horizontal menubar vs vertical
//! dropdown) and nesting (top-level trigger vs submenu trigger). It does not
//! render anything, own any menu state, or walk any element tree: those live
//! behind the [`types::MenuState`] and [`types::TriggerHost`] traits the
//! host implements.
//!
//! ## Deciding and executing
//!
//! Event methods on [`trigger::MenuTrigger`] decide: each returns a short
//! [`types::Transitions`] sequence (and updates the trigger's own timing
//! state). [`trigger::dispatch`] executes a sequence against the
//! collaborators, preserving order. Keyboard input additionally
//! distinguishes consumed from forwarded keys via [`trigger::KeyDispatch`],
//! so an externally supplied keydown handler still sees everything the
//! trigger leaves alone.
//!
//! ## Timing
//!
//! Two behaviors are deferred: the shown-via-focus latch that suppresses the
//! click a platform delivers right after a focus from the same gesture, and
//! the hover dwell that opens nested submenus only once the pointer has
//! rested on the trigger. Both run on host-supplied millisecond timestamps;
//! the host arms a real timer from [`trigger::MenuTrigger::next_deadline`]
//! and drains due work with [`trigger::MenuTrigger::poll`]. See
//! `hedgerow_event_state` for the underlying machines.
//!
//! ## Bundle composition
//!
//! [`props::compose`] produces the trigger's outward attribute/handler
//! bundle: `aria-haspopup="menu"` always, `aria-expanded`/`aria-controls`
//! from [`props::TriggerOptions`], caller passthrough attributes, and the
//! caller's keydown handler extracted as the forwarded-key fallback.
//!
//! ## Workflow
//!
//! 1. Resolve the trigger's context from its parent level and placement
//!    (done for you by [`trigger::MenuTrigger::new`]).
//! 2. Attach the composed bundle from [`props::compose`] to the element.
//! 3. Route the bundle's core events to the trigger methods; dispatch the
//!    returned sequences; forward keys the trigger declines.
//! 4. Arm a timer from `next_deadline` and call `poll` when it fires.
//!
//! ```rust
//! use hedgerow_menu::trigger::{dispatch, KeyDispatch, MenuTrigger};
//! use hedgerow_menu::types::{Key, KeyEvent, MenuLevel, MenuState, TriggerHost};
//!
//! struct Menu {
//!     open: bool,
//!     highlighted: Option<usize>,
//!     len: usize,
//! }
//!
//! impl MenuState for Menu {
//!     fn show(&mut self) {
//!         self.open = true;
//!     }
//!     fn hide(&mut self) {
//!         self.open = false;
//!     }
//!     fn toggle(&mut self) {
//!         self.open = !self.open;
//!     }
//!     fn first(&mut self) {
//!         self.open = true;
//!         self.highlighted = Some(0);
//!     }
//!     fn last(&mut self) {
//!         self.open = true;
//!         self.highlighted = Some(self.len - 1);
//!     }
//! }
//!
//! struct Tree;
//! impl TriggerHost for Tree {
//!     fn focus_within(&self) -> bool {
//!         false
//!     }
//!     fn expanded_peer(&self) -> bool {
//!         false
//!     }
//!     fn focus_trigger(&mut self) {}
//! }
//!
//! let menubar = MenuLevel::horizontal();
//! let trigger = MenuTrigger::new(Some(&menubar), Some("bottom-start"));
//! let mut menu = Menu { open: false, highlighted: None, len: 4 };
//! let mut tree = Tree;
//!
//! // ArrowUp on a downward-opening trigger: open, highlight the last item.
//! match trigger.on_key_down(&KeyEvent::new(Key::ArrowUp)) {
//!     KeyDispatch::Consumed(seq) => dispatch(&seq, &mut menu, &mut tree),
//!     KeyDispatch::Forwarded => unreachable!("mapped for this placement"),
//! }
//! assert!(menu.open);
//! assert_eq!(menu.highlighted, Some(3));
//!
//! // Tab is not the trigger's: hand it to the caller's own handler.
//! assert_eq!(
//!     trigger.on_key_down(&KeyEvent::new(Key::Tab)),
//!     KeyDispatch::Forwarded
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod context;
pub mod keymap;
pub mod props;
pub mod trigger;
pub mod types;
