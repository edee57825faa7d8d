// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracked regions and the shared handle that points at them.
//!
//! A [`Region`] answers one question: does this pointer event land inside me?
//! Two implementations are provided:
//!
//! - [`NodeRegion`]: tree containment. The event is inside when the region's
//!   node is on the event's root→target path (the target itself or one of its
//!   ancestors).
//! - [`kurbo::Rect`]: geometric containment of the event position.
//!
//! A [`RegionRef`] is created once per component and handed to the render
//! function, which attaches whatever region it actually rendered. Readers
//! always see the region attached at the time they ask.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_event_state::pointer::PointerEvent;
//! use understory_event_state::region::{NodeRegion, RegionRef};
//!
//! let region: RegionRef<u32> = RegionRef::new();
//! let ev = PointerEvent::down(Point::new(5.0, 5.0)).with_path([1, 2]);
//!
//! // Nothing attached yet: everything is outside.
//! assert!(region.is_outside(&ev));
//!
//! region.attach(NodeRegion(2));
//! assert!(!region.is_outside(&ev));
//!
//! region.attach(Rect::new(10.0, 10.0, 20.0, 20.0));
//! assert!(region.is_outside(&ev));
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Rect;

use crate::pointer::PointerEvent;

/// Containment test for pointer events.
pub trait Region<K> {
    /// Returns `true` if `event` lands inside this region.
    fn contains(&self, event: &PointerEvent<K>) -> bool;
}

/// A region identified by a node in the host's tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRegion<K>(pub K);

impl<K: PartialEq> Region<K> for NodeRegion<K> {
    fn contains(&self, event: &PointerEvent<K>) -> bool {
        event.passes_through(&self.0)
    }
}

impl<K> Region<K> for Rect {
    fn contains(&self, event: &PointerEvent<K>) -> bool {
        Self::contains(self, event.position)
    }
}

/// Shared, stable handle to the region currently under control.
///
/// Clones share the same slot; identity never changes for the lifetime of the
/// handle, only the attached region does.
pub struct RegionRef<K> {
    slot: Rc<RefCell<Option<Box<dyn Region<K>>>>>,
}

impl<K> RegionRef<K> {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Attach `region`, replacing any previous one.
    pub fn attach(&self, region: impl Region<K> + 'static) {
        *self.slot.borrow_mut() = Some(Box::new(region));
    }

    /// Detach the current region, if any.
    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }

    /// Whether a region is attached.
    pub fn is_attached(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Returns `true` if a region is attached and contains `event`.
    pub fn contains(&self, event: &PointerEvent<K>) -> bool {
        self.slot
            .borrow()
            .as_ref()
            .is_some_and(|region| region.contains(event))
    }

    /// Returns `true` unless an attached region contains `event`.
    ///
    /// An unset handle treats every interaction as outside.
    pub fn is_outside(&self, event: &PointerEvent<K>) -> bool {
        !self.contains(event)
    }

    /// Returns `true` if both handles share the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<K> Clone for RegionRef<K> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<K> Default for RegionRef<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> core::fmt::Debug for RegionRef<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegionRef")
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}
