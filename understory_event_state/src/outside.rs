// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-interaction detection.
//!
//! [`OutsideInteraction`] watches the document-wide pointer-down stream and
//! runs a handler when an interaction lands outside a tracked region. It is
//! the building block for "click outside to dismiss".
//!
//! ## Semantics
//!
//! - Disabled detectors hold no subscription at all.
//! - Enabled detectors hold exactly one subscription on their
//!   [`PointerDownSource`], acquired on enable and released on disable or drop.
//! - Pointer-down is observed rather than click so that dismissal is decided
//!   before any click handler on the same interaction runs.
//! - The outside predicate and handler are read when the event arrives, so
//!   reconfiguring an active detector never reattaches and never sees a stale
//!   region.
//! - For each delivered event the handler runs at most once.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::Point;
//! use understory_event_state::listeners::Document;
//! use understory_event_state::outside::OutsideInteraction;
//! use understory_event_state::pointer::PointerEvent;
//! use understory_event_state::region::{NodeRegion, RegionRef};
//!
//! let doc: Document<u32> = Document::new();
//! let region: RegionRef<u32> = RegionRef::new();
//! region.attach(NodeRegion(7));
//!
//! let dismissed = Rc::new(Cell::new(0));
//! let mut detector = OutsideInteraction::new(doc.clone());
//! {
//!     let dismissed = dismissed.clone();
//!     detector.track_region(true, &region, move || dismissed.set(dismissed.get() + 1));
//! }
//!
//! doc.pointer_down(&PointerEvent::down(Point::ZERO).with_path([1, 7]));
//! assert_eq!(dismissed.get(), 0);
//! doc.pointer_down(&PointerEvent::down(Point::ZERO).with_path([1, 8]));
//! assert_eq!(dismissed.get(), 1);
//!
//! drop(detector);
//! assert_eq!(doc.listener_count(), 0);
//! ```

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use crate::listeners::{PointerDownSource, Subscription};
use crate::pointer::PointerEvent;
use crate::region::RegionRef;

/// Predicate deciding whether an event lands outside the tracked region.
pub type IsOutside<K> = Rc<dyn Fn(&PointerEvent<K>) -> bool>;

/// Handler run for each qualifying outside interaction.
pub type OnOutside = Rc<dyn Fn()>;

struct Hooks<K> {
    is_outside: IsOutside<K>,
    handle: OnOutside,
}

/// Detector for pointer interactions outside a tracked region.
pub struct OutsideInteraction<K, S: PointerDownSource<K>> {
    source: S,
    hooks: Rc<RefCell<Hooks<K>>>,
    subscription: Option<Subscription<K, S>>,
}

impl<K: 'static, S: PointerDownSource<K> + Clone> OutsideInteraction<K, S> {
    /// Create an inert detector on `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            hooks: Rc::new(RefCell::new(Hooks {
                is_outside: Rc::new(|_: &PointerEvent<K>| false),
                handle: Rc::new(|| {}),
            })),
            subscription: None,
        }
    }

    /// Update the detector.
    ///
    /// When `enabled` is `false` any held subscription is released. When it is
    /// `true` a subscription is acquired if none is held; the new predicate and
    /// handler apply to the next event either way.
    pub fn configure(&mut self, enabled: bool, is_outside: IsOutside<K>, handle: OnOutside) {
        {
            let mut hooks = self.hooks.borrow_mut();
            hooks.is_outside = is_outside;
            hooks.handle = handle;
        }
        self.set_enabled(enabled);
    }

    /// Configure with a predicate bound to `region`.
    ///
    /// The region is consulted when each event arrives; an unset region counts
    /// every interaction as outside.
    pub fn track_region(
        &mut self,
        enabled: bool,
        region: &RegionRef<K>,
        handle: impl Fn() + 'static,
    ) {
        let region = region.clone();
        self.configure(
            enabled,
            Rc::new(move |event: &PointerEvent<K>| region.is_outside(event)),
            Rc::new(handle),
        );
    }

    /// Acquire or release the global subscription without touching the hooks.
    pub fn set_enabled(&mut self, enabled: bool) {
        match (enabled, self.subscription.is_some()) {
            (true, false) => {
                let hooks = Rc::downgrade(&self.hooks);
                let subscription = self
                    .source
                    .subscribe(Rc::new(move |event: &PointerEvent<K>| {
                        deliver(&hooks, event);
                    }));
                tracing::debug!(
                    listener = ?subscription.id(),
                    "outside-interaction detector attached"
                );
                self.subscription = Some(subscription);
            }
            (false, true) => {
                self.subscription = None;
                tracing::debug!("outside-interaction detector detached");
            }
            _ => {}
        }
    }
}

impl<K, S: PointerDownSource<K>> OutsideInteraction<K, S> {
    /// Whether a global subscription is currently held.
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }
}

fn deliver<K>(hooks: &Weak<RefCell<Hooks<K>>>, event: &PointerEvent<K>) {
    let Some(hooks) = hooks.upgrade() else {
        return;
    };
    // Clone out of the cell so the handler may reconfigure the detector.
    let (is_outside, handle) = {
        let hooks = hooks.borrow();
        (Rc::clone(&hooks.is_outside), Rc::clone(&hooks.handle))
    };
    if is_outside(event) {
        tracing::debug!(kind = ?event.kind, "pointer-down outside tracked region");
        handle();
    }
}

impl<K, S: PointerDownSource<K>> core::fmt::Debug for OutsideInteraction<K, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OutsideInteraction")
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
