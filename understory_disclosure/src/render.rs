// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render contract handed to the host's render function.

use alloc::rc::Rc;

use understory_event_state::pointer::PointerEvent;

/// Hover handler the host attaches to the tracked region.
pub type HoverHandler<K> = Rc<dyn Fn(&PointerEvent<K>)>;

/// What the host needs to draw a disclosure.
///
/// `on_mouse_over` and `on_mouse_out` are `Some` exactly when
/// [`Triggers::MOUSEOVER`](crate::Triggers::MOUSEOVER) is wired. Hosts may use
/// their presence to decide whether to listen for hover at all.
pub struct RenderProps<K> {
    /// Effective open state.
    pub open: bool,
    /// Opens the disclosure when the pointer enters the region.
    pub on_mouse_over: Option<HoverHandler<K>>,
    /// Closes the disclosure when the pointer leaves the region.
    pub on_mouse_out: Option<HoverHandler<K>>,
}

impl<K> RenderProps<K> {
    /// Whether hover handlers are present.
    pub fn has_hover(&self) -> bool {
        self.on_mouse_over.is_some()
    }

    /// Returns `true` if both values carry the same state and handler identities.
    pub fn same_as(&self, other: &Self) -> bool {
        fn same<K>(a: Option<&HoverHandler<K>>, b: Option<&HoverHandler<K>>) -> bool {
            match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                _ => false,
            }
        }
        self.open == other.open
            && same(self.on_mouse_over.as_ref(), other.on_mouse_over.as_ref())
            && same(self.on_mouse_out.as_ref(), other.on_mouse_out.as_ref())
    }
}

impl<K> Clone for RenderProps<K> {
    fn clone(&self) -> Self {
        Self {
            open: self.open,
            on_mouse_over: self.on_mouse_over.clone(),
            on_mouse_out: self.on_mouse_out.clone(),
        }
    }
}

impl<K> core::fmt::Debug for RenderProps<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderProps")
            .field("open", &self.open)
            .field("on_mouse_over", &self.on_mouse_over.is_some())
            .field("on_mouse_out", &self.on_mouse_out.is_some())
            .finish()
    }
}
