// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu trigger's event dispatcher.
//!
//! ## Overview
//!
//! [`MenuTrigger`] reconciles focus, pointer, and keyboard events against the
//! menu's external visibility machine. Each event method *decides*: it
//! updates the trigger's own timing state and returns a short
//! [`Transitions`] sequence. [`dispatch`] then *executes* a sequence against
//! the [`MenuState`] and [`TriggerHost`] collaborators, in order. Hosts that
//! want different plumbing can interpret the sequences themselves.
//!
//! ## Orientation rules
//!
//! - A trigger inside a **horizontal** parent (a menubar item) opens its
//!   submenu the moment it receives focus, and a click toggles it. Because
//!   some platforms deliver focus immediately before the click of the same
//!   gesture, the focus path sets a short-lived latch; while the latch holds,
//!   [`MenuTrigger::on_activate`] resolves to show instead of toggle, so a
//!   single click cannot open the menu and immediately close it again.
//! - A trigger inside a **vertical** parent (a nested submenu item) never
//!   toggles closed from a click, and opens from hover only after a dwell
//!   delay, re-checking at fire time that focus is still inside the trigger.
//! - A trigger with **no parent** is a plain popover disclosure: clicks
//!   toggle, focus and hover do nothing.
//!
//! ## Timing
//!
//! The trigger owns no timers. Event methods take the host's event timestamp
//! in milliseconds; deferred work is surfaced through
//! [`MenuTrigger::next_deadline`] and collected by [`MenuTrigger::poll`].
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_menu::trigger::{dispatch, MenuTrigger};
//! use hedgerow_menu::types::{MenuLevel, MenuState, TriggerHost};
//!
//! struct Menu {
//!     open: bool,
//! }
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
//!     fn first(&mut self) {}
//!     fn last(&mut self) {}
//! }
//!
//! struct Tree;
//! impl TriggerHost for Tree {
//!     fn focus_within(&self) -> bool {
//!         true
//!     }
//!     fn expanded_peer(&self) -> bool {
//!         false
//!     }
//!     fn focus_trigger(&mut self) {}
//! }
//!
//! let menubar = MenuLevel::horizontal();
//! let mut trigger = MenuTrigger::new(Some(&menubar), Some("bottom-start"));
//! let mut menu = Menu { open: false };
//! let mut tree = Tree;
//!
//! // Focusing a menubar item opens its submenu immediately.
//! let seq = trigger.on_focus(1_000);
//! dispatch(&seq, &mut menu, &mut tree);
//! assert!(menu.open);
//!
//! // The click that arrives as part of the same gesture shows rather than
//! // toggles, so the menu stays open.
//! let seq = trigger.on_activate(1_050);
//! dispatch(&seq, &mut menu, &mut tree);
//! assert!(menu.open);
//! ```

use hedgerow_event_state::dwell::DwellTimer;
use hedgerow_event_state::latch::TimedLatch;

use crate::context::TriggerContext;
use crate::keymap;
use crate::types::{KeyEvent, MenuLevel, MenuState, Transition, Transitions, TriggerHost};

/// Outcome of offering a key press to the trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyDispatch {
    /// The trigger consumed the key; execute the sequence and stop further
    /// handling of this event.
    Consumed(Transitions),
    /// The key is not the trigger's to handle; deliver the event unchanged
    /// to any externally supplied keydown handler.
    Forwarded,
}

/// Event dispatcher for one menu trigger instance.
///
/// Holds the resolved [`TriggerContext`] plus the trigger's only local state:
/// the shown-via-focus latch and the hover dwell timer. Everything
/// authoritative about the menu lives behind [`MenuState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTrigger {
    ctx: TriggerContext,
    /// A placement is configured, even one with an unrecognized direction
    /// prefix. Hover behavior keys on this, not on the parsed direction.
    has_placement: bool,
    latch: TimedLatch,
    dwell: DwellTimer,
}

impl MenuTrigger {
    /// Create a trigger nested under `parent` with the given placement.
    pub fn new(parent: Option<&MenuLevel>, placement: Option<&str>) -> Self {
        Self {
            ctx: TriggerContext::resolve(parent, placement),
            has_placement: placement.is_some(),
            latch: TimedLatch::new(),
            dwell: DwellTimer::new(),
        }
    }

    /// Re-resolve the ambient context after the surrounding tree changed.
    ///
    /// Timing state carries across re-renders; only the context is replaced.
    pub fn set_context(&mut self, parent: Option<&MenuLevel>, placement: Option<&str>) {
        self.ctx = TriggerContext::resolve(parent, placement);
        self.has_placement = placement.is_some();
    }

    /// The resolved ambient context.
    pub fn context(&self) -> &TriggerContext {
        &self.ctx
    }

    /// The trigger element received keyboard focus at `now`.
    ///
    /// Inside a horizontal parent this opens the submenu immediately, setting
    /// the latch first so the click delivered by the same gesture resolves to
    /// show. In any other context focus alone opens nothing, which keeps
    /// vertical menus from cascading open as focus travels.
    pub fn on_focus(&mut self, now: u64) -> Transitions {
        let mut out = Transitions::new();
        if self.ctx.parent_is_horizontal() {
            self.latch.set(now);
            out.push(Transition::Show);
        }
        out
    }

    /// The pointer moved onto the trigger element at `now`.
    ///
    /// Under a vertical parent this arms the hover dwell timer; the actual
    /// show happens in [`MenuTrigger::poll`] once the delay elapses with
    /// focus still inside the trigger. Under a horizontal parent with a
    /// sibling submenu already open, focus moves onto this trigger at once so
    /// the open submenu follows the pointer across the menubar. Without a
    /// parent or a configured placement, hovering does nothing.
    pub fn on_mouse_over(&mut self, now: u64, host: &impl TriggerHost) -> Transitions {
        let mut out = Transitions::new();
        if !self.ctx.has_parent || !self.has_placement {
            return out;
        }
        if !self.ctx.parent_is_horizontal() {
            self.dwell.arm(now);
        } else if host.expanded_peer() {
            out.push(Transition::FocusTrigger);
        }
        out
    }

    /// A key was pressed while the trigger had focus.
    ///
    /// Keys the dispatch table maps under the current context are consumed:
    /// the returned sequence opens the panel strictly before the mapped
    /// action so a highlight move always lands in an open menu, and at most
    /// one action fires per event. Everything else is forwarded.
    pub fn on_key_down(&self, event: &KeyEvent) -> KeyDispatch {
        match keymap::resolve(event.key, &self.ctx) {
            Some(action) => {
                let mut out = Transitions::new();
                out.push(Transition::Show);
                out.push(action.into());
                KeyDispatch::Consumed(out)
            }
            None => KeyDispatch::Forwarded,
        }
    }

    /// The trigger was activated (clicked) at `now`.
    ///
    /// Resolves the disclosure's toggle: nested and vertical-parent triggers
    /// always show (closing is reserved for Escape or outside interaction),
    /// and a horizontal-parent trigger whose latch is still holding shows as
    /// well. Only a top-level horizontal trigger under a normal click
    /// actually toggles.
    pub fn on_activate(&self, now: u64) -> Transitions {
        let mut out = Transitions::new();
        let show_only = self.ctx.has_parent
            && (!self.ctx.parent_is_horizontal() || self.latch.is_set(now));
        out.push(if show_only {
            Transition::Show
        } else {
            Transition::Toggle
        });
        out
    }

    /// Collect deferred work that has come due by `now`.
    ///
    /// Fires the hover dwell check at most once per arming: if the delay has
    /// elapsed and the trigger still contains focus, the submenu opens and
    /// focus moves onto the trigger. A fire whose focus check fails is a
    /// silent no-op. Also retires an expired latch deadline so
    /// [`MenuTrigger::next_deadline`] stops reporting it.
    pub fn poll(&mut self, now: u64, host: &impl TriggerHost) -> Transitions {
        if !self.latch.is_set(now) {
            self.latch.clear();
        }
        let mut out = Transitions::new();
        if self.dwell.fire(now) && host.focus_within() {
            out.push(Transition::Show);
            out.push(Transition::FocusTrigger);
        }
        out
    }

    /// Disarm a pending hover dwell check.
    ///
    /// Optional: the focus re-check in [`MenuTrigger::poll`] already makes a
    /// stale fire harmless. Hosts that track pointer leave can call this to
    /// skip the wakeup entirely.
    pub fn cancel_hover(&mut self) {
        self.dwell.cancel();
    }

    /// Whether a hover dwell check is pending.
    pub fn hover_pending(&self) -> bool {
        self.dwell.is_armed()
    }

    /// Whether the shown-via-focus latch is holding at `now`.
    pub fn shown_via_focus(&self, now: u64) -> bool {
        self.latch.is_set(now)
    }

    /// The earliest instant at which [`MenuTrigger::poll`] has work to do,
    /// if any. Hosts arm their timer from this.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.latch.deadline(), self.dwell.deadline()) {
            (Some(latch), Some(dwell)) => Some(latch.min(dwell)),
            (latch, dwell) => latch.or(dwell),
        }
    }
}

impl Default for MenuTrigger {
    /// A top-level trigger: no parent menu, no placement.
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Execute a transition sequence against the collaborators, in order.
///
/// Menu-state transitions go to `machine`; [`Transition::FocusTrigger`] goes
/// to `host`. Sequence order is preserved exactly, which callers rely on for
/// side-effect sequencing (show before a highlight move, for example).
pub fn dispatch<M, H>(transitions: &[Transition], machine: &mut M, host: &mut H)
where
    M: MenuState + ?Sized,
    H: TriggerHost + ?Sized,
{
    for transition in transitions {
        match transition {
            Transition::Show => machine.show(),
            Transition::Hide => machine.hide(),
            Transition::Toggle => machine.toggle(),
            Transition::First => machine.first(),
            Transition::Last => machine.last(),
            Transition::FocusTrigger => host.focus_trigger(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Key, Modifiers};
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Call {
        Show,
        Hide,
        Toggle,
        First,
        Last,
        FocusTrigger,
    }

    #[derive(Default)]
    struct RecordingMenu {
        calls: Vec<Call>,
    }

    impl MenuState for RecordingMenu {
        fn show(&mut self) {
            self.calls.push(Call::Show);
        }
        fn hide(&mut self) {
            self.calls.push(Call::Hide);
        }
        fn toggle(&mut self) {
            self.calls.push(Call::Toggle);
        }
        fn first(&mut self) {
            self.calls.push(Call::First);
        }
        fn last(&mut self) {
            self.calls.push(Call::Last);
        }
    }

    struct TestTree {
        focus_within: bool,
        expanded_peer: bool,
        focus_calls: usize,
    }

    impl TestTree {
        fn new() -> Self {
            Self {
                focus_within: false,
                expanded_peer: false,
                focus_calls: 0,
            }
        }
    }

    impl TriggerHost for TestTree {
        fn focus_within(&self) -> bool {
            self.focus_within
        }
        fn expanded_peer(&self) -> bool {
            self.expanded_peer
        }
        fn focus_trigger(&mut self) {
            self.focus_calls += 1;
        }
    }

    fn menubar_trigger() -> MenuTrigger {
        let parent = MenuLevel::horizontal();
        MenuTrigger::new(Some(&parent), Some("bottom-start"))
    }

    fn submenu_trigger() -> MenuTrigger {
        let parent = MenuLevel::vertical();
        MenuTrigger::new(Some(&parent), Some("right-start"))
    }

    // --- focus ---

    #[test]
    fn focus_in_horizontal_parent_latches_and_shows() {
        let mut trigger = menubar_trigger();
        let seq = trigger.on_focus(1_000);

        assert_eq!(seq.as_slice(), &[Transition::Show]);
        // The latch is set synchronously, before any dispatch happens.
        assert!(trigger.shown_via_focus(1_000));
    }

    #[test]
    fn focus_without_parent_does_nothing() {
        let mut trigger = MenuTrigger::new(None, Some("bottom-start"));
        let seq = trigger.on_focus(1_000);

        assert!(seq.is_empty());
        assert!(!trigger.shown_via_focus(1_000));
    }

    #[test]
    fn focus_in_vertical_parent_does_nothing() {
        let mut trigger = submenu_trigger();
        let seq = trigger.on_focus(1_000);

        assert!(seq.is_empty());
        assert!(!trigger.shown_via_focus(1_000));
    }

    #[test]
    fn latch_expires_after_hold_window() {
        let mut trigger = menubar_trigger();
        trigger.on_focus(1_000);

        assert!(trigger.shown_via_focus(1_199));
        assert!(!trigger.shown_via_focus(1_200));
    }

    #[test]
    fn repeat_focus_rearms_the_latch() {
        let mut trigger = menubar_trigger();
        trigger.on_focus(1_000);
        trigger.on_focus(1_150);

        assert!(trigger.shown_via_focus(1_349));
        assert!(!trigger.shown_via_focus(1_350));
    }

    // --- activate / toggle resolution ---

    #[test]
    fn activate_without_parent_toggles() {
        let trigger = MenuTrigger::new(None, None);
        assert_eq!(trigger.on_activate(1_000).as_slice(), &[Transition::Toggle]);
    }

    #[test]
    fn activate_in_vertical_parent_always_shows() {
        let trigger = submenu_trigger();
        // Latch state is irrelevant under a non-horizontal parent.
        assert_eq!(trigger.on_activate(1_000).as_slice(), &[Transition::Show]);
    }

    #[test]
    fn activate_in_unoriented_parent_shows() {
        let parent = MenuLevel::new(None);
        let trigger = MenuTrigger::new(Some(&parent), None);
        assert_eq!(trigger.on_activate(1_000).as_slice(), &[Transition::Show]);
    }

    #[test]
    fn activate_in_horizontal_parent_with_latch_shows() {
        let mut trigger = menubar_trigger();
        trigger.on_focus(1_000);

        // The click of the same gesture lands within the hold window.
        assert_eq!(trigger.on_activate(1_050).as_slice(), &[Transition::Show]);
    }

    #[test]
    fn activate_in_horizontal_parent_without_latch_toggles() {
        let trigger = menubar_trigger();
        assert_eq!(trigger.on_activate(1_000).as_slice(), &[Transition::Toggle]);
    }

    #[test]
    fn activate_after_latch_expiry_toggles_again() {
        let mut trigger = menubar_trigger();
        trigger.on_focus(1_000);

        assert_eq!(trigger.on_activate(1_300).as_slice(), &[Transition::Toggle]);
    }

    // --- keyboard ---

    #[test]
    fn unmapped_key_is_forwarded_untouched() {
        let trigger = menubar_trigger();
        for key in [Key::Tab, Key::Home, Key::Character('x')] {
            assert_eq!(
                trigger.on_key_down(&KeyEvent::new(key)),
                KeyDispatch::Forwarded,
                "{key:?}"
            );
        }
    }

    #[test]
    fn escape_hides_exactly_once_in_any_context() {
        for trigger in [MenuTrigger::new(None, None), menubar_trigger(), submenu_trigger()] {
            let KeyDispatch::Consumed(seq) = trigger.on_key_down(&KeyEvent::new(Key::Escape))
            else {
                panic!("escape must be consumed");
            };
            assert_eq!(seq.as_slice(), &[Transition::Show, Transition::Hide]);
            assert_eq!(
                seq.iter().filter(|t| **t == Transition::Hide).count(),
                1,
                "hide fires once"
            );
        }
    }

    #[test]
    fn enter_and_space_first_only_with_parent() {
        let nested = submenu_trigger();
        let top = MenuTrigger::new(None, Some("bottom"));
        for key in [Key::Enter, Key::Space] {
            assert_eq!(
                nested.on_key_down(&KeyEvent::new(key)),
                KeyDispatch::Consumed(Transitions::from_slice(&[
                    Transition::Show,
                    Transition::First
                ])),
                "{key:?}"
            );
            assert_eq!(top.on_key_down(&KeyEvent::new(key)), KeyDispatch::Forwarded);
        }
    }

    #[test]
    fn bottom_placement_arrow_up_shows_then_moves_last() {
        let trigger = MenuTrigger::new(None, Some("bottom-start"));
        let KeyDispatch::Consumed(seq) = trigger.on_key_down(&KeyEvent::new(Key::ArrowUp)) else {
            panic!("arrow up must be consumed for a bottom placement");
        };

        let mut menu = RecordingMenu::default();
        let mut tree = TestTree::new();
        dispatch(&seq, &mut menu, &mut tree);

        // Show strictly precedes the highlight move, and both fire once.
        assert_eq!(menu.calls, vec![Call::Show, Call::Last]);
    }

    #[test]
    fn consumed_keys_emit_at_most_one_action() {
        let trigger = submenu_trigger();
        for key in [Key::Escape, Key::Enter, Key::Space, Key::ArrowRight] {
            if let KeyDispatch::Consumed(seq) = trigger.on_key_down(&KeyEvent::new(key)) {
                assert_eq!(seq.len(), 2, "{key:?}: show plus exactly one action");
                assert_eq!(seq[0], Transition::Show, "{key:?}: show comes first");
            } else {
                panic!("{key:?} must be consumed here");
            }
        }
    }

    #[test]
    fn modifiers_do_not_gate_the_table() {
        let trigger = submenu_trigger();
        let event = KeyEvent::new(Key::Enter).with_modifiers(Modifiers::CONTROL);
        assert!(matches!(
            trigger.on_key_down(&event),
            KeyDispatch::Consumed(_)
        ));
    }

    // --- hover ---

    #[test]
    fn mouse_over_without_parent_arms_nothing() {
        let mut trigger = MenuTrigger::new(None, Some("bottom-start"));
        let tree = TestTree::new();
        let seq = trigger.on_mouse_over(1_000, &tree);

        assert!(seq.is_empty());
        assert!(!trigger.hover_pending());
        assert!(trigger.next_deadline().is_none());
    }

    #[test]
    fn mouse_over_without_placement_arms_nothing() {
        let parent = MenuLevel::vertical();
        let mut trigger = MenuTrigger::new(Some(&parent), None);
        let tree = TestTree::new();

        assert!(trigger.on_mouse_over(1_000, &tree).is_empty());
        assert!(!trigger.hover_pending());
    }

    #[test]
    fn mouse_over_in_vertical_parent_arms_dwell() {
        let mut trigger = submenu_trigger();
        let tree = TestTree::new();
        let seq = trigger.on_mouse_over(1_000, &tree);

        assert!(seq.is_empty());
        assert!(trigger.hover_pending());
        assert_eq!(trigger.next_deadline(), Some(1_200));
    }

    #[test]
    fn unrecognized_placement_still_arms_dwell() {
        // A configured placement with an unknown direction prefix is still a
        // configured placement.
        let parent = MenuLevel::vertical();
        let mut trigger = MenuTrigger::new(Some(&parent), Some("auto-start"));
        let tree = TestTree::new();

        trigger.on_mouse_over(1_000, &tree);
        assert!(trigger.hover_pending());
    }

    #[test]
    fn dwell_fires_show_and_focus_when_focus_stayed() {
        let mut trigger = submenu_trigger();
        let mut tree = TestTree::new();
        tree.focus_within = true;

        trigger.on_mouse_over(1_000, &tree);
        assert!(trigger.poll(1_100, &tree).is_empty());

        let seq = trigger.poll(1_200, &tree);
        assert_eq!(
            seq.as_slice(),
            &[Transition::Show, Transition::FocusTrigger]
        );

        let mut menu = RecordingMenu::default();
        dispatch(&seq, &mut menu, &mut tree);
        assert_eq!(menu.calls, vec![Call::Show]);
        assert_eq!(tree.focus_calls, 1);

        // One shot per arming.
        assert!(trigger.poll(1_300, &tree).is_empty());
    }

    #[test]
    fn stale_dwell_fire_is_silent() {
        let mut trigger = submenu_trigger();
        let mut tree = TestTree::new();
        tree.focus_within = true;
        trigger.on_mouse_over(1_000, &tree);

        // Focus moved away before the delay elapsed.
        tree.focus_within = false;
        assert!(trigger.poll(1_200, &tree).is_empty());
        assert!(!trigger.hover_pending());
    }

    #[test]
    fn cancel_hover_disarms_the_dwell() {
        let mut trigger = submenu_trigger();
        let mut tree = TestTree::new();
        tree.focus_within = true;

        trigger.on_mouse_over(1_000, &tree);
        trigger.cancel_hover();

        assert!(!trigger.hover_pending());
        assert!(trigger.poll(1_200, &tree).is_empty());
    }

    #[test]
    fn menubar_sweep_focuses_without_showing_when_peer_open() {
        let mut trigger = menubar_trigger();
        let mut tree = TestTree::new();
        tree.expanded_peer = true;

        let seq = trigger.on_mouse_over(1_000, &tree);
        assert_eq!(seq.as_slice(), &[Transition::FocusTrigger]);
        assert!(!trigger.hover_pending());

        let mut menu = RecordingMenu::default();
        dispatch(&seq, &mut menu, &mut tree);
        // No show call: the focus hand-off opens the submenu via on_focus.
        assert!(menu.calls.is_empty());
        assert_eq!(tree.focus_calls, 1);
    }

    #[test]
    fn menubar_hover_without_open_peer_does_nothing() {
        let mut trigger = menubar_trigger();
        let tree = TestTree::new();

        assert!(trigger.on_mouse_over(1_000, &tree).is_empty());
        assert!(!trigger.hover_pending());
    }

    // --- deadlines & context ---

    #[test]
    fn next_deadline_tracks_latch_and_poll_retires_it() {
        let mut trigger = menubar_trigger();
        let tree = TestTree::new();

        trigger.on_focus(1_000);
        assert_eq!(trigger.next_deadline(), Some(1_200));

        trigger.poll(1_250, &tree);
        assert!(trigger.next_deadline().is_none());
    }

    #[test]
    fn set_context_changes_behavior_without_resetting_timing() {
        let mut trigger = MenuTrigger::new(None, None);
        assert!(trigger.on_focus(1_000).is_empty());

        let parent = MenuLevel::horizontal();
        trigger.set_context(Some(&parent), Some("bottom-start"));
        assert_eq!(trigger.on_focus(1_100).as_slice(), &[Transition::Show]);
    }

    #[test]
    fn dispatch_routes_focus_to_host_and_rest_to_machine() {
        let mut menu = RecordingMenu::default();
        let mut tree = TestTree::new();
        let seq = [
            Transition::Show,
            Transition::First,
            Transition::FocusTrigger,
            Transition::Hide,
            Transition::Toggle,
            Transition::Last,
        ];
        dispatch(&seq, &mut menu, &mut tree);

        assert_eq!(
            menu.calls,
            vec![Call::Show, Call::First, Call::Hide, Call::Toggle, Call::Last]
        );
        assert_eq!(tree.focus_calls, 1);
    }
}
