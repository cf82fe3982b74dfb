// Copyright 2026 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hedgerow_props --heading-base-level=0

//! Hedgerow Props: partial attribute/handler bundles and their fold merge.
//!
//! Behavior layers for an interactive element each contribute a *partial*
//! view of what the element should carry: a few attributes here, a handler
//! there. This crate models such a contribution as a [`Partial`] (an
//! attribute map plus per-event handler slots) and composes an ordered list
//! of them with [`merge`], a plain left-to-right fold where later entries
//! override earlier ones per key. There is no handler chaining and no
//! reflection; a layer that wants to wrap another layer's handler does so
//! explicitly, outside this crate.
//!
//! The handler payload is a caller-chosen type parameter `H`: hosts with an
//! event loop typically use a callback type, while tests and headless layers
//! can use markers or plain strings.
//!
//! ## Minimal example
//!
//! ```rust
//! use hedgerow_props::{merge, AttrValue, EventKey, Partial};
//!
//! // A base layer and a caller layer; the caller wins where keys collide.
//! let base: Partial<&str> = Partial::new()
//!     .with_attr("tabindex", 0)
//!     .with_attr("data-kind", "trigger")
//!     .with_handler(EventKey::Activate, "base-activate");
//! let caller: Partial<&str> = Partial::new()
//!     .with_attr("data-kind", "custom")
//!     .with_handler(EventKey::KeyDown, "caller-keydown");
//!
//! let bundle = merge([base, caller]);
//!
//! assert_eq!(bundle.attrs.get("tabindex"), Some(&AttrValue::Int(0)));
//! assert_eq!(bundle.attrs.get("data-kind"), Some(&AttrValue::from("custom")));
//! assert_eq!(bundle.handlers.get(&EventKey::Activate), Some(&"base-activate"));
//! assert_eq!(bundle.handlers.get(&EventKey::KeyDown), Some(&"caller-keydown"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use core::fmt;

use hashbrown::HashMap;

/// Attribute keys are attribute names; most layers use `'static` literals,
/// hosts can pass owned strings.
pub type AttrKey = Cow<'static, str>;

/// Map of attributes carried by a bundle.
pub type AttrMap = HashMap<AttrKey, AttrValue>;

/// Map of handlers carried by a bundle, one per slot.
pub type HandlerMap<H> = HashMap<EventKey, H>;

/// An attribute value.
///
/// Mirrors the value shapes attribute-bearing hosts actually serialize:
/// booleans, small integers, and text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// A boolean attribute, serialized as `"true"`/`"false"` by [`fmt::Display`].
    Bool(bool),
    /// An integer attribute such as `tabindex`.
    Int(i64),
    /// A text attribute.
    Text(Cow<'static, str>),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&'static str> for AttrValue {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<Cow<'static, str>> for AttrValue {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Text(value)
    }
}

impl From<alloc::string::String> for AttrValue {
    fn from(value: alloc::string::String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

/// A handler slot on an interactive element.
///
/// One slot per event name; merging is per-slot override, exactly like
/// attribute keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKey {
    /// The element received keyboard focus.
    Focus,
    /// The element lost keyboard focus.
    Blur,
    /// The pointer moved onto the element.
    MouseOver,
    /// The pointer left the element.
    MouseOut,
    /// A key was pressed while the element had focus.
    KeyDown,
    /// A key was released while the element had focus.
    KeyUp,
    /// The element was activated (click, Enter on a button, tap).
    Activate,
}

/// A partial attribute/handler contribution from one behavior layer.
///
/// A `Partial` is plain data: public maps, no hidden composition rules.
/// Layers build one with [`Partial::with_attr`] / [`Partial::with_handler`]
/// (or by filling the fields directly) and hand it to [`merge`].
#[derive(Clone, Debug, PartialEq)]
pub struct Partial<H> {
    /// Attributes contributed by this layer.
    pub attrs: AttrMap,
    /// Handlers contributed by this layer, one per slot.
    pub handlers: HandlerMap<H>,
}

impl<H> Partial<H> {
    /// Create an empty contribution.
    pub fn new() -> Self {
        Self {
            attrs: AttrMap::new(),
            handlers: HandlerMap::new(),
        }
    }

    /// Add or replace an attribute, returning `self` for chaining.
    pub fn with_attr(mut self, key: impl Into<AttrKey>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Add or replace a handler slot, returning `self` for chaining.
    pub fn with_handler(mut self, key: EventKey, handler: H) -> Self {
        self.handlers.insert(key, handler);
        self
    }

    /// Whether this contribution carries nothing.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.handlers.is_empty()
    }

    /// Overlay `later` onto `self`, with `later` winning per key.
    ///
    /// This is one fold step of [`merge`]; it is exposed for callers that
    /// accumulate incrementally.
    pub fn overlay(&mut self, later: Self) {
        self.attrs.extend(later.attrs);
        self.handlers.extend(later.handlers);
    }
}

impl<H> Default for Partial<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold an ordered list of contributions into one bundle.
///
/// Entries are applied left to right; for each attribute key and each handler
/// slot, the last entry that sets it wins. Keys never collide across maps
/// (attributes and handlers are separate namespaces). An empty list yields an
/// empty bundle.
pub fn merge<H>(parts: impl IntoIterator<Item = Partial<H>>) -> Partial<H> {
    let mut merged = Partial::new();
    for part in parts {
        merged.overlay(part);
    }
    merged
}
