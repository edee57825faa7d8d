// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event model shared by the event-state helpers.
//!
//! A [`PointerEvent`] is what the host hands to listeners and trigger handlers.
//! It carries enough context for containment testing without tying this crate
//! to a particular scene representation:
//!
//! - `position` for geometric regions (for example a [`kurbo::Rect`]).
//! - `path` for tree regions: node keys from the root to the hit target,
//!   inclusive, in the same order as `understory_box_tree::Hit::path`.
//!
//! Hosts without a node tree can leave `path` empty.

use core::num::NonZeroU64;

use kurbo::Point;
use smallvec::SmallVec;

/// Pointer identifier for tracking multiple concurrent pointers.
pub type PointerId = NonZeroU64;

/// Mouse button identifier.
pub type Button = u8;

/// Root→target path storage. Most UI trees are shallow enough to stay inline.
pub type NodePath<K> = SmallVec<[K; 8]>;

/// Which pointer interaction an event describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A button was pressed. This is the class observed for outside dismissal.
    Down,
    /// A button was released.
    Up,
    /// A press and release recognized as an activation.
    Click,
    /// The pointer entered a node or one of its descendants.
    Over,
    /// The pointer left a node or one of its descendants.
    Out,
}

/// A pointer interaction delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// Interaction class.
    pub kind: PointerEventKind,
    /// Pointer position in world coordinates.
    pub position: Point,
    /// Node keys from root to the hit target (inclusive). Empty when unknown.
    pub path: NodePath<K>,
    /// Pointer that produced the event, if the host tracks several.
    pub pointer_id: Option<PointerId>,
    /// Button involved, if any.
    pub button: Option<Button>,
}

impl<K> PointerEvent<K> {
    /// Create an event of `kind` at `position` with no target path.
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            path: SmallVec::new(),
            pointer_id: None,
            button: None,
        }
    }

    /// Shorthand for a [`PointerEventKind::Down`] event.
    pub fn down(position: Point) -> Self {
        Self::new(PointerEventKind::Down, position)
    }

    /// Shorthand for a [`PointerEventKind::Click`] event.
    pub fn click(position: Point) -> Self {
        Self::new(PointerEventKind::Click, position)
    }

    /// Shorthand for a [`PointerEventKind::Over`] event.
    pub fn over(position: Point) -> Self {
        Self::new(PointerEventKind::Over, position)
    }

    /// Shorthand for a [`PointerEventKind::Out`] event.
    pub fn out(position: Point) -> Self {
        Self::new(PointerEventKind::Out, position)
    }

    /// Set the root→target path.
    pub fn with_path(mut self, path: impl IntoIterator<Item = K>) -> Self {
        self.path = path.into_iter().collect();
        self
    }

    /// Set the pointer identifier.
    pub fn with_pointer(mut self, pointer_id: PointerId) -> Self {
        self.pointer_id = Some(pointer_id);
        self
    }

    /// Set the button.
    pub fn with_button(mut self, button: Button) -> Self {
        self.button = Some(button);
        self
    }

    /// The hit target: the last entry of the path.
    pub fn target(&self) -> Option<&K> {
        self.path.last()
    }

    /// Returns `true` if `node` is the target or one of its ancestors.
    pub fn passes_through(&self, node: &K) -> bool
    where
        K: PartialEq,
    {
        self.path.iter().any(|k| k == node)
    }
}
