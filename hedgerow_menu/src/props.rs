// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of the trigger's outward attribute/handler bundle.
//!
//! [`compose`] folds three contributions, later entries winning per key:
//!
//! 1. the disclosure base: visibility reflected into `aria-expanded`, and
//!    `aria-controls` when the panel has an id;
//! 2. the caller's passthrough bundle of arbitrary attributes and handlers;
//! 3. the menu trigger marker `aria-haspopup="menu"`, which is therefore
//!    always present and not overridable.
//!
//! Handler slots the trigger's own behavior covers are displaced from the
//! caller's bundle rather than merged: focus and mouse-over belong entirely
//! to the trigger, activation resolves through
//! [`MenuTrigger::on_activate`](crate::trigger::MenuTrigger::on_activate),
//! and a caller keydown handler is extracted into
//! [`TriggerProps::key_down_fallback`], to be invoked only when
//! [`MenuTrigger::on_key_down`](crate::trigger::MenuTrigger::on_key_down)
//! forwards. Handlers for unrelated events pass through untouched.

use bitflags::bitflags;
use hedgerow_props::{merge, AttrMap, EventKey, HandlerMap, Partial};

use crate::trigger::MenuTrigger;
use crate::types::{IdRef, MenuLevel};

/// The concrete interactive element the bundle attaches to.
///
/// The trigger renders as a real button unless the host says otherwise;
/// naming the element here replaces any polymorphic construction scheme.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum TriggerElement {
    /// A native button element.
    #[default]
    Button,
    /// A host-defined element named by tag or widget type.
    Custom(IdRef),
}

/// Configuration for one trigger instance.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TriggerOptions {
    /// Placement of the menu panel relative to the trigger, for example
    /// `"bottom-start"`. The prefix before the first `-` is the expansion
    /// direction the keyboard table keys on.
    pub placement: Option<IdRef>,
    /// Whether the menu panel is currently visible.
    pub visible: bool,
    /// Id of the panel this trigger controls, if it has one.
    pub panel_id: Option<IdRef>,
    /// The concrete element to attach the bundle to.
    pub element: TriggerElement,
}

bitflags! {
    /// Events the trigger's core behavior consumes.
    ///
    /// The host routes these to the corresponding
    /// [`MenuTrigger`](crate::trigger::MenuTrigger) methods instead of any
    /// caller handler.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct EventSet: u8 {
        /// Keyboard focus entering the trigger.
        const FOCUS = 1 << 0;
        /// Pointer moving onto the trigger.
        const MOUSE_OVER = 1 << 1;
        /// Key presses while the trigger has focus.
        const KEY_DOWN = 1 << 2;
        /// Click / activation of the trigger.
        const ACTIVATE = 1 << 3;
    }
}

/// The composed bundle for one trigger element.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerProps<H> {
    /// The element to attach to.
    pub element: TriggerElement,
    /// Composed attributes; `aria-haspopup="menu"` is always present.
    pub attrs: AttrMap,
    /// Events to route to the trigger's own methods.
    pub core_events: EventSet,
    /// Caller handlers that survived composition (events the trigger does
    /// not consume).
    pub handlers: HandlerMap<H>,
    /// The caller's keydown handler, invoked only on a forwarded key.
    pub key_down_fallback: Option<H>,
}

/// Compose the outward bundle for a trigger from its options and the
/// caller's passthrough contribution.
pub fn compose<H>(options: &TriggerOptions, mut external: Partial<H>) -> TriggerProps<H> {
    let key_down_fallback = external.handlers.remove(&EventKey::KeyDown);
    // Focus, hover, and activation are wholly the trigger's; caller handlers
    // for them are displaced, not chained.
    external.handlers.remove(&EventKey::Focus);
    external.handlers.remove(&EventKey::MouseOver);
    external.handlers.remove(&EventKey::Activate);

    let mut disclosure: Partial<H> = Partial::new().with_attr("aria-expanded", options.visible);
    if let Some(panel_id) = &options.panel_id {
        disclosure = disclosure.with_attr("aria-controls", panel_id.clone());
    }
    let marker: Partial<H> = Partial::new().with_attr("aria-haspopup", "menu");

    let merged = merge([disclosure, external, marker]);
    TriggerProps {
        element: options.element.clone(),
        attrs: merged.attrs,
        core_events: EventSet::FOCUS | EventSet::MOUSE_OVER | EventSet::KEY_DOWN | EventSet::ACTIVATE,
        handlers: merged.handlers,
        key_down_fallback,
    }
}

/// One-call entry point: resolve the trigger for its parent level and
/// options, and compose its outward bundle.
///
/// Equivalent to [`MenuTrigger::new`] with the options' placement followed
/// by [`compose`]; provided because hosts almost always want both together.
pub fn menu_trigger<H>(
    parent: Option<&MenuLevel>,
    options: &TriggerOptions,
    external: Partial<H>,
) -> (MenuTrigger, TriggerProps<H>) {
    let trigger = MenuTrigger::new(parent, options.placement.as_deref());
    (trigger, compose(options, external))
}
