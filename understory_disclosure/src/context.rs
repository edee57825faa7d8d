// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only bundle a disclosure hands to its parts.
//!
//! There is no ambient provider: the controller builds a [`DisclosureContext`]
//! and the host passes it to whichever parts it renders. A context grants read
//! access to the published state and configuration, and write access only
//! through [`DisclosureContext::dispatch`].
//!
//! The published value is rebuilt only when one of its constituents changes
//! (effective open, controlled override, trigger set, or toggle callback
//! identity). Parts can compare contexts with [`DisclosureContext::ptr_eq`] to
//! skip work when nothing changed.

use alloc::rc::Rc;

use understory_event_state::pointer::PointerEvent;

use crate::config::{OnToggle, Triggers, same_callback};
use crate::state::{DisclosureAction, DisclosureStore, effective_open};

struct Published<K> {
    open: bool,
    controlled: Option<bool>,
    store: DisclosureStore,
    on_toggle: Option<OnToggle<K>>,
    trigger: Triggers,
}

/// Shared, immutable view of a disclosure for its parts.
pub struct DisclosureContext<K> {
    inner: Rc<Published<K>>,
}

impl<K> DisclosureContext<K> {
    pub(crate) fn new(
        store: DisclosureStore,
        controlled: Option<bool>,
        on_toggle: Option<OnToggle<K>>,
        trigger: Triggers,
    ) -> Self {
        Self {
            inner: Rc::new(Published {
                open: effective_open(store.state(), controlled),
                controlled,
                store,
                on_toggle,
                trigger,
            }),
        }
    }

    /// Whether a context built from these inputs would differ from `self`.
    pub(crate) fn is_stale(
        &self,
        controlled: Option<bool>,
        on_toggle: Option<&OnToggle<K>>,
        trigger: Triggers,
    ) -> bool {
        let p = &*self.inner;
        p.open != effective_open(p.store.state(), controlled)
            || p.controlled != controlled
            || p.trigger != trigger
            || !same_callback(p.on_toggle.as_ref(), on_toggle)
    }

    /// Effective open state as of the last publish.
    ///
    /// All parts rendered from the same context agree on this value.
    pub fn open(&self) -> bool {
        self.inner.open
    }

    /// Effective open state right now, including dispatches since the last publish.
    pub fn current_open(&self) -> bool {
        effective_open(self.inner.store.state(), self.inner.controlled)
    }

    /// The controlled override in effect at the last publish.
    pub fn controlled(&self) -> Option<bool> {
        self.inner.controlled
    }

    /// Wired trigger channels.
    pub fn trigger(&self) -> Triggers {
        self.inner.trigger
    }

    /// Toggle notification, if configured.
    pub fn on_toggle(&self) -> Option<&OnToggle<K>> {
        self.inner.on_toggle.as_ref()
    }

    /// The store behind this context.
    pub fn store(&self) -> &DisclosureStore {
        &self.inner.store
    }

    /// Apply an action to the owning disclosure.
    pub fn dispatch(&self, action: DisclosureAction) {
        self.inner.store.dispatch(action);
    }

    /// Dispatch the action that moves to `open` and notify the toggle callback.
    pub fn toggle_to(&self, open: bool, event: &PointerEvent<K>) {
        self.dispatch(if open {
            DisclosureAction::Show
        } else {
            DisclosureAction::Hide
        });
        if let Some(on_toggle) = &self.inner.on_toggle {
            on_toggle(open, event);
        }
    }

    /// Returns `true` if both contexts are the same published value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<K> Clone for DisclosureContext<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K> core::fmt::Debug for DisclosureContext<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DisclosureContext")
            .field("open", &self.inner.open)
            .field("controlled", &self.inner.controlled)
            .field("trigger", &self.inner.trigger)
            .field("on_toggle", &self.inner.on_toggle.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DisclosureState;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Point;

    #[test]
    fn published_open_is_a_snapshot() {
        let store = DisclosureStore::new(DisclosureState::default());
        let ctx: DisclosureContext<u32> =
            DisclosureContext::new(store.clone(), None, None, Triggers::CLICK);
        store.dispatch(DisclosureAction::Show);
        assert!(!ctx.open());
        assert!(ctx.current_open());
        assert!(ctx.is_stale(None, None, Triggers::CLICK));
    }

    #[test]
    fn controlled_override_is_published() {
        let store = DisclosureStore::new(DisclosureState { open: true });
        let ctx: DisclosureContext<u32> =
            DisclosureContext::new(store, Some(false), None, Triggers::CLICK);
        assert!(!ctx.open());
        assert!(!ctx.current_open());
        assert!(!ctx.is_stale(Some(false), None, Triggers::CLICK));
        assert!(ctx.is_stale(None, None, Triggers::CLICK));
        assert!(ctx.is_stale(Some(false), None, Triggers::MOUSEOVER));
    }

    #[test]
    fn toggle_to_dispatches_then_notifies() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let store = DisclosureStore::new(DisclosureState::default());
        let on_toggle: OnToggle<u32> = {
            let calls = calls.clone();
            let store = store.clone();
            Rc::new(move |open: bool, _: &PointerEvent<u32>| {
                calls.borrow_mut().push((open, store.state().open));
            })
        };
        let ctx = DisclosureContext::new(store.clone(), None, Some(on_toggle), Triggers::CLICK);

        ctx.toggle_to(true, &PointerEvent::click(Point::ZERO));
        ctx.toggle_to(false, &PointerEvent::click(Point::ZERO));
        // The callback observes the already-applied state.
        assert_eq!(*calls.borrow(), [(true, true), (false, false)]);
        assert_eq!(store.revision(), 2);
    }
}
