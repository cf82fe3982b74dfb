// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context resolver: derive a trigger's ambient context from its parent
//! level and configured placement.
//!
//! Resolution is a pure function with no failure modes: an absent parent
//! yields `has_parent = false` and every parent-dependent behavior downstream
//! is skipped. The host re-resolves whenever the surrounding tree re-renders;
//! the result is read-only to the rest of the crate.

use crate::types::{Direction, MenuLevel, Orientation};

/// Ambient context of one trigger instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriggerContext {
    /// Whether the trigger is nested inside a parent menu at all.
    pub has_parent: bool,
    /// Orientation of the parent menu, when present and declared.
    pub orientation: Option<Orientation>,
    /// Expansion direction parsed from the configured placement.
    pub direction: Option<Direction>,
}

impl TriggerContext {
    /// Resolve the context for a trigger nested under `parent` with the
    /// given placement configuration.
    pub fn resolve(parent: Option<&MenuLevel>, placement: Option<&str>) -> Self {
        Self {
            has_parent: parent.is_some(),
            orientation: parent.and_then(|level| level.orientation),
            direction: placement.and_then(Direction::from_placement),
        }
    }

    /// A context with no parent menu and no placement.
    pub fn top_level() -> Self {
        Self::resolve(None, None)
    }

    /// Whether the parent menu exists and is horizontal.
    ///
    /// The horizontal/non-horizontal split drives most trigger behavior: a
    /// horizontal parent means this is a menubar item (open on focus, toggle
    /// on click), any other parent means a nested submenu trigger (open on
    /// dwell, never toggle closed).
    pub fn parent_is_horizontal(&self) -> bool {
        self.has_parent && self.orientation == Some(Orientation::Horizontal)
    }
}
