// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard dispatch table for the menu trigger.
//!
//! The table varies with the trigger's context: activation keys require a
//! parent menu, and arrow keys are only live along the axis the panel
//! expands on. A key whose condition is unmet resolves to nothing at all, so
//! the caller can forward the event unchanged.
//!
//! | Key | Action | Condition |
//! |---|---|---|
//! | Escape | [`MenuAction::Hide`] | always |
//! | Enter, Space | [`MenuAction::First`] | parent menu exists |
//! | ArrowUp | [`MenuAction::Last`] | direction is top or bottom |
//! | ArrowDown | [`MenuAction::First`] | direction is top or bottom |
//! | ArrowLeft | [`MenuAction::First`] | direction is left |
//! | ArrowRight | [`MenuAction::First`] | direction is right |

use crate::context::TriggerContext;
use crate::types::{Direction, Key, Transition};

/// A menu-state action selected by the dispatch table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Close the panel.
    Hide,
    /// Move the highlight to the first item.
    First,
    /// Move the highlight to the last item.
    Last,
}

impl From<MenuAction> for Transition {
    fn from(action: MenuAction) -> Self {
        match action {
            MenuAction::Hide => Self::Hide,
            MenuAction::First => Self::First,
            MenuAction::Last => Self::Last,
        }
    }
}

/// Look up the action for `key` under `ctx`.
///
/// Total over its inputs: unmapped keys and unmet conditions both yield
/// `None`, which callers treat as "forward the event, touch nothing".
pub fn resolve(key: Key, ctx: &TriggerContext) -> Option<MenuAction> {
    let vertical_axis = matches!(ctx.direction, Some(Direction::Top | Direction::Bottom));
    match key {
        Key::Escape => Some(MenuAction::Hide),
        Key::Enter | Key::Space => ctx.has_parent.then_some(MenuAction::First),
        Key::ArrowUp => vertical_axis.then_some(MenuAction::Last),
        Key::ArrowDown => vertical_axis.then_some(MenuAction::First),
        Key::ArrowLeft => {
            (ctx.direction == Some(Direction::Left)).then_some(MenuAction::First)
        }
        Key::ArrowRight => {
            (ctx.direction == Some(Direction::Right)).then_some(MenuAction::First)
        }
        _ => None,
    }
}
