// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclosure demo: a hover menu and a click popover sharing one document.
//!
//! Run:
//! - `cargo run -p understory_demos --example disclosure_menu`
//! - `RUST_LOG=understory_event_state=debug,understory_disclosure=trace` for logs.
//!
//! The menu opens while the pointer is over its rectangle. The popover toggles
//! from its button and closes on any pointer-down outside its panel.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_disclosure::{
    ContentPolicy, Disclosure, DisclosureButton, DisclosureConfig, DisclosureContent,
    RenderProps, Triggers,
};
use understory_event_state::listeners::Document;
use understory_event_state::pointer::PointerEvent;

const MENU: Rect = Rect::new(0.0, 0.0, 120.0, 24.0);
const POPOVER: Rect = Rect::new(200.0, 0.0, 360.0, 160.0);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let doc: Document<u32> = Document::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let mut menu: Disclosure<u32, _> = Disclosure::new(
        doc.clone(),
        DisclosureConfig::default().trigger(Triggers::MOUSEOVER),
    );
    let mut popover: Disclosure<u32, _> = Disclosure::new(
        doc.clone(),
        DisclosureConfig::default()
            .hide_on_click_outside(true)
            .on_toggle({
                let log = log.clone();
                move |open, event: &PointerEvent<u32>| {
                    log.borrow_mut().push((open, event.position));
                }
            }),
    );

    let menu_props = draw_menu(&mut menu);
    let over = menu_props
        .on_mouse_over
        .clone()
        .unwrap_or_else(|| Rc::new(|_: &PointerEvent<u32>| {}));
    let out = menu_props
        .on_mouse_out
        .clone()
        .unwrap_or_else(|| Rc::new(|_: &PointerEvent<u32>| {}));

    println!("-- hover the menu");
    over(&PointerEvent::over(Point::new(10.0, 10.0)));
    draw_menu(&mut menu);
    out(&PointerEvent::out(Point::new(130.0, 10.0)));
    draw_menu(&mut menu);

    println!("-- open the popover from its button");
    let button = draw_popover(&mut popover);
    button.activate(&PointerEvent::click(Point::new(210.0, 10.0)));
    draw_popover(&mut popover);

    println!("-- pointer-down inside the panel keeps it open");
    doc.pointer_down(&PointerEvent::down(Point::new(250.0, 80.0)));
    draw_popover(&mut popover);

    println!("-- pointer-down elsewhere dismisses it");
    doc.pointer_down(&PointerEvent::down(Point::new(500.0, 300.0)));
    draw_popover(&mut popover);

    println!("toggle notifications: {:?}", log.borrow());
    println!("outside listeners still attached: {}", doc.listener_count());
}

fn draw_menu(menu: &mut Disclosure<u32, Document<u32>>) -> RenderProps<u32> {
    menu.render(|props, region, ctx| {
        region.attach(MENU);
        let items = DisclosureContent::new(ctx).render(|_| ["Open", "Save", "Quit"]);
        println!("menu: open={} items={:?}", props.open, items);
        props.clone()
    })
}

fn draw_popover(popover: &mut Disclosure<u32, Document<u32>>) -> DisclosureButton<u32> {
    popover.render(|_, region, ctx| {
        region.attach(POPOVER);
        let button = DisclosureButton::new(ctx);
        let aria = button.render(|props| props.aria_expanded);
        let panel = DisclosureContent::new(ctx)
            .policy(ContentPolicy::KeepMounted)
            .render(|props| props.hidden);
        println!("popover: aria-expanded={aria} panel hidden={panel:?}");
        button
    })
}
