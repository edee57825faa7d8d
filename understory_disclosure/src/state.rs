// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/closed state, the actions that change it, and the store that holds it.
//!
//! The transition function [`reduce`] and the controlled-override merge
//! [`effective_open`] are pure. [`DisclosureStore`] is the only place the state
//! lives; every mutation goes through [`DisclosureStore::dispatch`].

use alloc::rc::Rc;
use core::cell::Cell;

/// State owned by a disclosure.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DisclosureState {
    /// Whether the disclosure is expanded.
    pub open: bool,
}

/// A requested transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DisclosureAction {
    /// Expand, whatever the current state.
    Show,
    /// Collapse, whatever the current state.
    Hide,
}

/// Apply `action` to `state`.
///
/// Total and idempotent: the result depends only on the action.
///
/// ```
/// use understory_disclosure::state::{reduce, DisclosureAction, DisclosureState};
///
/// let open = reduce(DisclosureState::default(), DisclosureAction::Show);
/// assert!(open.open);
/// assert_eq!(reduce(open, DisclosureAction::Show), open);
/// assert!(!reduce(open, DisclosureAction::Hide).open);
/// ```
#[must_use]
pub const fn reduce(_state: DisclosureState, action: DisclosureAction) -> DisclosureState {
    match action {
        DisclosureAction::Show => DisclosureState { open: true },
        DisclosureAction::Hide => DisclosureState { open: false },
    }
}

/// Merge a controlled override with internal state.
///
/// Returns `controlled` when present, else `state.open`.
#[must_use]
pub const fn effective_open(state: DisclosureState, controlled: Option<bool>) -> bool {
    match controlled {
        Some(open) => open,
        None => state.open,
    }
}

#[derive(Debug)]
struct StoreCell {
    state: Cell<DisclosureState>,
    revision: Cell<u64>,
}

/// Shared single-writer cell holding a [`DisclosureState`].
///
/// Cloning yields another handle to the same state. Dispatch is synchronous:
/// the new state is visible to every handle on its next read.
#[derive(Clone, Debug)]
pub struct DisclosureStore {
    cell: Rc<StoreCell>,
}

impl DisclosureStore {
    /// Create a store starting in `initial`.
    pub fn new(initial: DisclosureState) -> Self {
        Self {
            cell: Rc::new(StoreCell {
                state: Cell::new(initial),
                revision: Cell::new(0),
            }),
        }
    }

    /// Current internal state.
    pub fn state(&self) -> DisclosureState {
        self.cell.state.get()
    }

    /// Apply `action`.
    ///
    /// Never fails. Every dispatch bumps [`revision`](Self::revision), even when
    /// the state is unchanged.
    pub fn dispatch(&self, action: DisclosureAction) {
        let prev = self.cell.state.get();
        let next = reduce(prev, action);
        self.cell.state.set(next);
        self.cell.revision.set(self.cell.revision.get().wrapping_add(1));
        tracing::trace!(?action, prev = prev.open, next = next.open, "disclosure dispatch");
    }

    /// Number of dispatches applied so far.
    pub fn revision(&self) -> u64 {
        self.cell.revision.get()
    }

    /// Returns `true` if both handles share the same state.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}
