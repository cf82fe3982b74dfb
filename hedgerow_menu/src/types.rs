// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared types and collaborator traits for the menu trigger.
//!
//! The trigger itself owns almost no state; it reconciles events against two
//! collaborators provided by the host:
//!
//! - [`MenuState`]: the menu's visibility state machine. The trigger only ever
//!   invokes its five one-way transitions and never reads anything back.
//! - [`TriggerHost`]: the trigger's view of the surrounding element tree:
//!   focus containment, whether a sibling submenu is already open, and the
//!   ability to move keyboard focus onto the trigger element.
//!
//! Everything else here is plain data: the parent-menu context handle, the
//! expansion direction parsed from a placement string, key events, and the
//! transition sequences the trigger emits.

use alloc::borrow::Cow;

use bitflags::bitflags;
use smallvec::SmallVec;

/// Layout orientation of a menu's items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items flow left to right, as in a menubar.
    Horizontal,
    /// Items stack top to bottom, as in a dropdown.
    Vertical,
}

/// The parent-menu context a trigger is nested in.
///
/// In the trigger's host framework this is typically one value provided at
/// the menu root and read by every nested trigger. Here it is an explicit,
/// read-only handle passed down by the host; a trigger with no `MenuLevel`
/// is a top-level trigger outside any menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLevel {
    /// Orientation of the parent menu, when it declares one.
    pub orientation: Option<Orientation>,
}

impl MenuLevel {
    /// A parent level with the given orientation.
    pub fn new(orientation: Option<Orientation>) -> Self {
        Self { orientation }
    }

    /// A horizontal parent level (menubar).
    pub fn horizontal() -> Self {
        Self::new(Some(Orientation::Horizontal))
    }

    /// A vertical parent level (dropdown / submenu list).
    pub fn vertical() -> Self {
        Self::new(Some(Orientation::Vertical))
    }
}

/// The side of the trigger a menu panel expands towards.
///
/// Derived from the configured placement string; stable for a given
/// placement value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The panel opens above the trigger.
    Top,
    /// The panel opens below the trigger.
    Bottom,
    /// The panel opens to the left of the trigger.
    Left,
    /// The panel opens to the right of the trigger.
    Right,
}

impl Direction {
    /// Parse the expansion direction from a placement string.
    ///
    /// The direction is the substring before the first `-` separator:
    /// `"bottom-start"` expands [`Direction::Bottom`], `"left"` expands
    /// [`Direction::Left`]. Unrecognized prefixes (for example `"auto-end"`)
    /// yield `None`, the same as an unconfigured placement.
    pub fn from_placement(placement: &str) -> Option<Self> {
        let prefix = placement.split('-').next().unwrap_or(placement);
        match prefix {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

bitflags! {
    /// Modifier keys held during a key event.
    ///
    /// Carried for the host and for forwarded events; the trigger's own
    /// dispatch table keys on the physical key alone.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CONTROL = 1 << 1;
        /// Alt / Option key.
        const ALT = 1 << 2;
        /// Meta / Command / Windows key.
        const META = 1 << 3;
    }
}

/// Physical key identity for trigger keyboard handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape.
    Escape,
    /// Enter / Return.
    Enter,
    /// Space bar.
    Space,
    /// Tab.
    Tab,
    /// Home.
    Home,
    /// End.
    End,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// A printable character key.
    Character(char),
}

/// A key press delivered to the trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The pressed key.
    pub key: Key,
    /// Modifiers held at press time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Attach held modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A single step the trigger asks its collaborators to perform.
///
/// Sequences are executed in order by [`dispatch`](crate::trigger::dispatch);
/// within one sequence the order is part of the contract (for example,
/// [`Transition::Show`] always precedes the highlight move it enables).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Open the menu panel.
    Show,
    /// Close the menu panel.
    Hide,
    /// Flip the menu panel's visibility.
    Toggle,
    /// Open if needed and move the highlight to the first item.
    First,
    /// Open if needed and move the highlight to the last item.
    Last,
    /// Move keyboard focus onto the trigger element itself.
    FocusTrigger,
}

/// A short transition sequence; two steps cover every path the trigger emits.
pub type Transitions = SmallVec<[Transition; 2]>;

/// The menu's external visibility state machine.
///
/// The trigger treats these as opaque one-way transitions: no return values
/// are consulted, and calling one that is already satisfied (for example
/// [`MenuState::show`] on an open menu) must be harmless. Ownership and
/// serialization of the actual state are entirely the implementor's concern.
pub trait MenuState {
    /// Open the menu panel.
    fn show(&mut self);
    /// Close the menu panel.
    fn hide(&mut self);
    /// Flip the menu panel's visibility.
    fn toggle(&mut self);
    /// Open if needed and move the highlight to the first item.
    fn first(&mut self);
    /// Open if needed and move the highlight to the last item.
    fn last(&mut self);
}

/// The trigger's view of the surrounding element tree.
///
/// Implementations answer two queries against current tree state and perform
/// one focus effect. All three correspond to things only the host can know
/// or do; the trigger never walks a tree itself.
pub trait TriggerHost {
    /// Whether the trigger element currently contains the focused element
    /// (including being focused itself).
    fn focus_within(&self) -> bool;

    /// Whether the nearest enclosing menu or menubar already has an open
    /// submenu panel under it.
    ///
    /// Used while sweeping the pointer across sibling items of a menubar: if
    /// some sibling's submenu is open, moving over this trigger switches to
    /// it without a hover delay.
    fn expanded_peer(&self) -> bool;

    /// Move keyboard focus onto the trigger element.
    fn focus_trigger(&mut self);
}

/// Identifier values usable as panel ids or placements.
///
/// Most callers use `'static` literals; owned strings are accepted for
/// generated ids.
pub type IdRef = Cow<'static, str>;
