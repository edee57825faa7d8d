// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Disclosure: a headless show/hide primitive.
//!
//! ## Overview
//!
//! A disclosure is a trigger that reveals or hides associated content, as in
//! the ARIA disclosure pattern. This crate owns the interaction logic and
//! leaves every pixel to the host:
//!
//! - [`state`]: [`DisclosureState`], the [`DisclosureAction`] set, the pure
//!   transition [`reduce`](state::reduce), the pure controlled-override merge
//!   [`effective_open`](state::effective_open), and the [`DisclosureStore`]
//!   that holds the state.
//! - [`Disclosure`]: the controller. It composes the store, an outside
//!   interaction detector from `understory_event_state`, and hover handlers
//!   into one contract, and calls a host render function with
//!   [`RenderProps`], the tracked [`RegionRef`], and a [`DisclosureContext`].
//! - [`DisclosureButton`] and [`DisclosureContent`]: parts that read the
//!   context to wire click activation and conditional rendering.
//!
//! ## Data flow
//!
//! Trigger events (a click on the button part, the pointer entering or leaving
//! the tracked region, a pointer-down elsewhere) become actions on the store.
//! The next render publishes the new effective state through the context, and
//! parts re-render from it. All of this happens synchronously on one thread.
//!
//! ## Controlled and uncontrolled
//!
//! With the `open` field of [`DisclosureConfig`] unset the disclosure owns its state,
//! starting from `default_open`. With it set the host owns what is rendered;
//! triggers still update the internal state and report requests through the
//! toggle callback.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_disclosure::{
//!     Disclosure, DisclosureButton, DisclosureConfig, DisclosureContent,
//! };
//! use understory_event_state::listeners::Document;
//! use understory_event_state::pointer::PointerEvent;
//! use understory_event_state::region::NodeRegion;
//!
//! const ROOT: u32 = 1;
//! const PANEL: u32 = 2;
//!
//! let doc: Document<u32> = Document::new();
//! let mut disclosure = Disclosure::new(
//!     doc.clone(),
//!     DisclosureConfig::default().hide_on_click_outside(true),
//! );
//!
//! let render = |d: &mut Disclosure<u32, Document<u32>>| {
//!     d.render(|_props, region, ctx| {
//!         region.attach(NodeRegion(PANEL));
//!         let button = DisclosureButton::new(ctx).props();
//!         let content = DisclosureContent::new(ctx).render(|_| "details");
//!         (button, content)
//!     })
//! };
//!
//! let (button, content) = render(&mut disclosure);
//! assert_eq!(content, None);
//!
//! // Clicking the button opens the panel.
//! let on_click = button.on_click.expect("click is wired");
//! on_click(&PointerEvent::click(Point::ZERO).with_path([ROOT, PANEL]));
//! assert_eq!(render(&mut disclosure).1, Some("details"));
//!
//! // Pressing anywhere else closes it.
//! doc.pointer_down(&PointerEvent::down(Point::ZERO).with_path([ROOT]));
//! assert_eq!(render(&mut disclosure).1, None);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: enables `no_std` floating-point support via `libm`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod button;
mod config;
mod content;
mod context;
mod controller;
mod render;
pub mod state;

pub use button::{ButtonProps, ClickHandler, DisclosureButton};
pub use config::{DisclosureConfig, OnToggle, Triggers};
pub use content::{ContentPolicy, ContentProps, DisclosureContent};
pub use context::DisclosureContext;
pub use controller::Disclosure;
pub use render::{HoverHandler, RenderProps};
pub use state::{DisclosureAction, DisclosureState, DisclosureStore};
pub use understory_event_state::region::RegionRef;
