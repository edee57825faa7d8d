// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: pointer plumbing for headless interaction primitives.
//!
//! ## Overview
//!
//! Headless components (disclosures, menus, popovers) need a little help from
//! the host event system but should not depend on any particular toolkit.
//! This crate supplies that seam and the state built on top of it:
//!
//! - [`pointer`]: the [`PointerEvent`](pointer::PointerEvent) model handed to
//!   listeners and trigger handlers. Events carry a world-space position and an
//!   optional root→target node path.
//! - [`listeners`]: the [`PointerDownSource`](listeners::PointerDownSource)
//!   trait for document-wide pointer-down subscriptions, a reference
//!   [`Document`](listeners::Document) implementation, and the RAII
//!   [`Subscription`](listeners::Subscription) guard.
//! - [`region`]: the [`Region`](region::Region) containment trait and the
//!   shared [`RegionRef`](region::RegionRef) handle a component gives to its
//!   render function.
//! - [`outside`]: the [`OutsideInteraction`](outside::OutsideInteraction)
//!   detector that runs a handler for pointer-downs outside a region.
//!
//! ## Threading
//!
//! Everything here is single-threaded. Shared state uses `Rc` and `RefCell`,
//! and handlers are cloned out of their cells before they run so they may
//! re-enter (attach, detach, reconfigure) without a borrow conflict.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` floating-point support for `kurbo` via `libm`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod listeners;
pub mod outside;
pub mod pointer;
pub mod region;
