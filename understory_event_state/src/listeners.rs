// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global pointer-down subscriptions.
//!
//! [`PointerDownSource`] is the seam between headless primitives and the host
//! event system: something that can attach and detach a document-wide
//! listener for the pointer-down class of events. [`Document`] is a small
//! single-threaded implementation suitable for hosts that route events
//! themselves, and for tests.
//!
//! Subscriptions are scoped. [`PointerDownSource::subscribe`] returns a
//! [`Subscription`] guard that detaches on drop, so a listener cannot outlive
//! the component that installed it.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::Point;
//! use understory_event_state::listeners::{Document, PointerDownSource};
//! use understory_event_state::pointer::PointerEvent;
//!
//! let doc: Document<u32> = Document::new();
//! let seen = Rc::new(Cell::new(0));
//! let sub = {
//!     let seen = seen.clone();
//!     doc.subscribe(Rc::new(move |_ev: &PointerEvent<u32>| seen.set(seen.get() + 1)))
//! };
//!
//! doc.pointer_down(&PointerEvent::down(Point::ZERO));
//! assert_eq!(seen.get(), 1);
//!
//! drop(sub);
//! doc.pointer_down(&PointerEvent::down(Point::ZERO));
//! assert_eq!(seen.get(), 1);
//! assert_eq!(doc.listener_count(), 0);
//! ```

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::marker::PhantomData;

use crate::pointer::{PointerEvent, PointerEventKind};

/// A listener for global pointer-down events.
pub type Listener<K> = Rc<dyn Fn(&PointerEvent<K>)>;

/// Handle for an attached listener, unique per source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// A host primitive that delivers document-wide pointer-down events.
pub trait PointerDownSource<K> {
    /// Attach `listener`; it is invoked for every pointer-down until detached.
    fn attach(&self, listener: Listener<K>) -> ListenerId;

    /// Detach a listener. Returns `false` if `id` was not attached.
    fn detach(&self, id: ListenerId) -> bool;

    /// Attach `listener` and return a guard that detaches it on drop.
    fn subscribe(&self, listener: Listener<K>) -> Subscription<K, Self>
    where
        Self: Clone + Sized,
    {
        let id = self.attach(listener);
        Subscription {
            source: self.clone(),
            id: Some(id),
            _phantom: PhantomData,
        }
    }
}

/// Scoped ownership of an attached listener.
///
/// Dropping the guard detaches the listener exactly once, on every exit path.
#[must_use = "dropping a subscription detaches its listener"]
pub struct Subscription<K, S: PointerDownSource<K>> {
    source: S,
    id: Option<ListenerId>,
    _phantom: PhantomData<fn(&PointerEvent<K>)>,
}

impl<K, S: PointerDownSource<K>> Subscription<K, S> {
    /// The attached listener's id.
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Detach now instead of at drop. Returns whether the source knew the listener.
    pub fn detach(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        match self.id.take() {
            Some(id) => self.source.detach(id),
            None => false,
        }
    }
}

impl<K, S: PointerDownSource<K>> Drop for Subscription<K, S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<K, S: PointerDownSource<K>> core::fmt::Debug for Subscription<K, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

struct Table<K> {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Listener<K>>,
}

/// Single-threaded document-wide listener table.
///
/// Cloning yields another handle to the same table.
pub struct Document<K> {
    table: Rc<RefCell<Table<K>>>,
}

impl<K> Document<K> {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            table: Rc::new(RefCell::new(Table {
                next_id: 0,
                listeners: BTreeMap::new(),
            })),
        }
    }

    /// Number of currently attached listeners.
    pub fn listener_count(&self) -> usize {
        self.table.borrow().listeners.len()
    }

    /// Deliver a pointer-down event to every attached listener, in attach order.
    ///
    /// Events of any other kind are ignored. Listeners attached during delivery
    /// are not invoked for this event; listeners detached during delivery are
    /// skipped if not yet reached. Returns the number of listeners invoked.
    pub fn pointer_down(&self, event: &PointerEvent<K>) -> usize {
        if event.kind != PointerEventKind::Down {
            return 0;
        }
        let ids: Vec<ListenerId> = self.table.borrow().listeners.keys().copied().collect();
        let mut invoked = 0;
        for id in ids {
            // Release the borrow before invoking so listeners may attach/detach.
            let listener = self.table.borrow().listeners.get(&id).cloned();
            if let Some(listener) = listener {
                listener(event);
                invoked += 1;
            }
        }
        invoked
    }
}

impl<K> PointerDownSource<K> for Document<K> {
    fn attach(&self, listener: Listener<K>) -> ListenerId {
        let mut table = self.table.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.listeners.insert(id, listener);
        tracing::trace!(listener = id.0, "attached pointer-down listener");
        id
    }

    fn detach(&self, id: ListenerId) -> bool {
        let removed = self.table.borrow_mut().listeners.remove(&id).is_some();
        if removed {
            tracing::trace!(listener = id.0, "detached pointer-down listener");
        }
        removed
    }
}

impl<K> Clone for Document<K> {
    fn clone(&self) -> Self {
        Self {
            table: Rc::clone(&self.table),
        }
    }
}

impl<K> Default for Document<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> core::fmt::Debug for Document<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;
    use kurbo::Point;

    fn counter(doc: &Document<u32>, hits: &Rc<Cell<u32>>) -> ListenerId {
        let hits = hits.clone();
        doc.attach(Rc::new(move |_: &PointerEvent<u32>| hits.set(hits.get() + 1)))
    }

    #[test]
    fn delivers_only_pointer_down() {
        let doc = Document::new();
        let hits = Rc::new(Cell::new(0));
        counter(&doc, &hits);

        assert_eq!(doc.pointer_down(&PointerEvent::click(Point::ZERO)), 0);
        assert_eq!(doc.pointer_down(&PointerEvent::over(Point::ZERO)), 0);
        assert_eq!(doc.pointer_down(&PointerEvent::down(Point::ZERO)), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn detach_unknown_id_is_false() {
        let doc: Document<u32> = Document::new();
        assert!(!doc.detach(ListenerId(7)));
        let hits = Rc::new(Cell::new(0));
        let id = counter(&doc, &hits);
        assert!(doc.detach(id));
        assert!(!doc.detach(id), "second detach must report nothing removed");
    }

    #[test]
    fn listeners_run_in_attach_order() {
        let doc: Document<u32> = Document::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3_u32 {
            let order = order.clone();
            doc.attach(Rc::new(move |_: &PointerEvent<u32>| order.borrow_mut().push(n)));
        }
        doc.pointer_down(&PointerEvent::down(Point::ZERO));
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn subscription_detaches_on_drop_and_explicitly() {
        let doc: Document<u32> = Document::new();
        let a = doc.subscribe(Rc::new(|_: &PointerEvent<u32>| {}));
        let b = doc.subscribe(Rc::new(|_: &PointerEvent<u32>| {}));
        assert_eq!(doc.listener_count(), 2);
        assert!(b.detach());
        assert_eq!(doc.listener_count(), 1);
        drop(a);
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn listener_may_detach_a_later_listener_during_delivery() {
        let doc: Document<u32> = Document::new();
        let hits = Rc::new(Cell::new(0));
        let victim = Rc::new(Cell::new(None::<ListenerId>));
        {
            let doc2 = doc.clone();
            let victim = victim.clone();
            doc.attach(Rc::new(move |_: &PointerEvent<u32>| {
                if let Some(id) = victim.get() {
                    doc2.detach(id);
                }
            }));
        }
        victim.set(Some(counter(&doc, &hits)));

        assert_eq!(doc.pointer_down(&PointerEvent::down(Point::ZERO)), 1);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn listener_attached_during_delivery_waits_for_next_event() {
        let doc: Document<u32> = Document::new();
        let hits = Rc::new(Cell::new(0));
        {
            let doc2 = doc.clone();
            let hits = hits.clone();
            let armed = Cell::new(false);
            doc.attach(Rc::new(move |_: &PointerEvent<u32>| {
                if !armed.replace(true) {
                    let hits = hits.clone();
                    doc2.attach(Rc::new(move |_: &PointerEvent<u32>| hits.set(hits.get() + 1)));
                }
            }));
        }
        doc.pointer_down(&PointerEvent::down(Point::ZERO));
        assert_eq!(hits.get(), 0);
        doc.pointer_down(&PointerEvent::down(Point::ZERO));
        assert_eq!(hits.get(), 1);
    }
}
