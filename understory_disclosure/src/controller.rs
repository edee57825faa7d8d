// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The disclosure controller: state, outside dismissal, hover, and publishing.

use alloc::rc::Rc;

use understory_event_state::listeners::PointerDownSource;
use understory_event_state::outside::OutsideInteraction;
use understory_event_state::pointer::PointerEvent;
use understory_event_state::region::RegionRef;

use crate::config::{DisclosureConfig, Triggers};
use crate::context::DisclosureContext;
use crate::render::{HoverHandler, RenderProps};
use crate::state::{DisclosureAction, DisclosureState, DisclosureStore, effective_open};

/// A headless disclosure.
///
/// Owns the [`DisclosureStore`], the tracked [`RegionRef`], and the
/// outside-interaction subscription, and composes them into one open/closed
/// contract. It never draws anything: [`Disclosure::render`] hands the host a
/// [`RenderProps`], the region handle to attach to its root, and the
/// [`DisclosureContext`] to pass to parts.
///
/// ## Triggers
///
/// - Outside interaction (`hide_on_click_outside`): a pointer-down outside the
///   region dispatches [`DisclosureAction::Hide`]. The toggle callback is not
///   notified for this close; only trigger handlers notify.
/// - [`Triggers::MOUSEOVER`]: the render props carry hover handlers. Entering
///   opens and leaving closes, each dispatching and notifying only when the
///   effective state actually changes.
/// - [`Triggers::CLICK`]: handled by [`DisclosureButton`](crate::DisclosureButton).
///
/// ## Controlled use
///
/// When the config's `open` override is set it decides what is rendered. Actions
/// are still applied to the internal state, so releasing control later shows
/// whatever the triggers last asked for.
///
/// ## Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use kurbo::Point;
/// use understory_disclosure::{Disclosure, DisclosureConfig, Triggers};
/// use understory_event_state::listeners::Document;
/// use understory_event_state::pointer::PointerEvent;
/// use understory_event_state::region::NodeRegion;
///
/// let doc: Document<u32> = Document::new();
/// let toggles = Rc::new(RefCell::new(Vec::new()));
/// let config: DisclosureConfig<u32> = {
///     let toggles = toggles.clone();
///     DisclosureConfig::default()
///         .trigger(Triggers::MOUSEOVER)
///         .hide_on_click_outside(true)
///         .on_toggle(move |open, _| toggles.borrow_mut().push(open))
/// };
/// let mut menu: Disclosure<u32, _> = Disclosure::new(doc.clone(), config);
///
/// let props = menu.render(|props, region, _ctx| {
///     region.attach(NodeRegion(10));
///     props.clone()
/// });
/// assert!(!props.open);
///
/// let over = props.on_mouse_over.as_ref().expect("hover is wired");
/// over(&PointerEvent::over(Point::ZERO).with_path([1, 10]));
/// assert!(menu.render(|props, _, _| props.open));
///
/// doc.pointer_down(&PointerEvent::down(Point::ZERO).with_path([1, 20]));
/// assert!(!menu.render(|props, _, _| props.open));
///
/// // Only the hover open was notified.
/// assert_eq!(*toggles.borrow(), [true]);
/// ```
pub struct Disclosure<K, S: PointerDownSource<K>> {
    store: DisclosureStore,
    region: RegionRef<K>,
    config: DisclosureConfig<K>,
    outside: OutsideInteraction<K, S>,
    context: DisclosureContext<K>,
    props: RenderProps<K>,
}

impl<K: 'static, S: PointerDownSource<K> + Clone> Disclosure<K, S> {
    /// Create a disclosure whose outside detection listens on `source`.
    ///
    /// Internal state starts at `config.default_open`.
    pub fn new(source: S, config: DisclosureConfig<K>) -> Self {
        let store = DisclosureStore::new(DisclosureState {
            open: config.default_open,
        });
        let context = DisclosureContext::new(
            store.clone(),
            config.open,
            config.on_toggle.clone(),
            config.trigger,
        );
        let props = render_props(&context);
        let mut this = Self {
            store,
            region: RegionRef::new(),
            config,
            outside: OutsideInteraction::new(source),
            context,
            props,
        };
        this.wire_outside();
        this
    }

    /// Replace the configuration for the next render cycle.
    ///
    /// `default_open` is ignored after construction. The outside subscription is
    /// acquired or released to match `hide_on_click_outside`.
    pub fn update(&mut self, config: DisclosureConfig<K>) {
        self.config = config;
        self.wire_outside();
        self.refresh();
    }

    /// Republish context and render props if any constituent changed.
    ///
    /// Returns `true` if new values were published.
    pub fn refresh(&mut self) -> bool {
        let stale = self.context.is_stale(
            self.config.open,
            self.config.on_toggle.as_ref(),
            self.config.trigger,
        );
        if stale {
            self.context = DisclosureContext::new(
                self.store.clone(),
                self.config.open,
                self.config.on_toggle.clone(),
                self.config.trigger,
            );
            self.props = render_props(&self.context);
        }
        stale
    }

    /// Publish current values and call the host's render function.
    ///
    /// The host attaches its root to the region handle and passes the context
    /// to any parts it renders.
    pub fn render<T>(
        &mut self,
        render: impl FnOnce(&RenderProps<K>, &RegionRef<K>, &DisclosureContext<K>) -> T,
    ) -> T {
        self.refresh();
        render(&self.props, &self.region, &self.context)
    }

    fn wire_outside(&mut self) {
        let store = self.store.clone();
        self.outside
            .track_region(self.config.hide_on_click_outside, &self.region, move || {
                store.dispatch(DisclosureAction::Hide);
            });
    }
}

impl<K, S: PointerDownSource<K>> Disclosure<K, S> {
    /// Effective open state right now.
    pub fn is_open(&self) -> bool {
        effective_open(self.store.state(), self.config.open)
    }

    /// Internal state, ignoring any controlled override.
    pub fn state(&self) -> DisclosureState {
        self.store.state()
    }

    /// Apply an action directly.
    pub fn dispatch(&self, action: DisclosureAction) {
        self.store.dispatch(action);
    }

    /// The store behind this disclosure.
    pub fn store(&self) -> &DisclosureStore {
        &self.store
    }

    /// The tracked region handle. Its identity is fixed for this disclosure.
    pub fn region(&self) -> &RegionRef<K> {
        &self.region
    }

    /// Current configuration.
    pub fn config(&self) -> &DisclosureConfig<K> {
        &self.config
    }

    /// Context as of the last publish.
    pub fn context(&self) -> &DisclosureContext<K> {
        &self.context
    }

    /// Render props as of the last publish.
    pub fn render_props(&self) -> &RenderProps<K> {
        &self.props
    }

    /// Whether the outside-interaction subscription is held.
    pub fn is_listening_outside(&self) -> bool {
        self.outside.is_active()
    }
}

fn render_props<K: 'static>(context: &DisclosureContext<K>) -> RenderProps<K> {
    let (on_mouse_over, on_mouse_out) = if context.trigger().contains(Triggers::MOUSEOVER) {
        (
            Some(hover_handler(context, true)),
            Some(hover_handler(context, false)),
        )
    } else {
        (None, None)
    };
    RenderProps {
        open: context.open(),
        on_mouse_over,
        on_mouse_out,
    }
}

fn hover_handler<K: 'static>(context: &DisclosureContext<K>, open: bool) -> HoverHandler<K> {
    let context = context.clone();
    Rc::new(move |event: &PointerEvent<K>| {
        if context.current_open() != open {
            context.toggle_to(open, event);
        }
    })
}

impl<K, S: PointerDownSource<K>> core::fmt::Debug for Disclosure<K, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Disclosure")
            .field("state", &self.store.state())
            .field("config", &self.config)
            .field("region", &self.region)
            .field("outside", &self.outside)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Point;
    use understory_event_state::listeners::Document;
    use understory_event_state::region::NodeRegion;

    type Log = Rc<RefCell<Vec<(bool, Option<u32>)>>>;

    fn logging(log: &Log) -> impl Fn(bool, &PointerEvent<u32>) + 'static {
        let log = log.clone();
        move |open, event| log.borrow_mut().push((open, event.target().copied()))
    }

    fn at(path: &[u32]) -> Vec<u32> {
        path.to_vec()
    }

    fn over(path: &[u32]) -> PointerEvent<u32> {
        PointerEvent::over(Point::ZERO).with_path(at(path))
    }

    fn out(path: &[u32]) -> PointerEvent<u32> {
        PointerEvent::out(Point::ZERO).with_path(at(path))
    }

    fn down(path: &[u32]) -> PointerEvent<u32> {
        PointerEvent::down(Point::ZERO).with_path(at(path))
    }

    fn mounted(
        doc: &Document<u32>,
        config: DisclosureConfig<u32>,
    ) -> Disclosure<u32, Document<u32>> {
        let mut d: Disclosure<u32, _> = Disclosure::new(doc.clone(), config);
        d.render(|_, region, _| region.attach(NodeRegion(10)));
        d
    }

    #[test]
    fn default_open_seeds_internal_state() {
        let doc: Document<u32> = Document::new();
        let closed = mounted(&doc, DisclosureConfig::default());
        let open = mounted(&doc, DisclosureConfig::default().default_open(true));
        assert!(!closed.is_open());
        assert!(open.is_open());
        assert!(open.render_props().open);
    }

    #[test]
    fn click_only_omits_hover_handlers() {
        let doc: Document<u32> = Document::new();
        let mut d = mounted(&doc, DisclosureConfig::default().trigger(Triggers::CLICK));
        let props = d.render(|props, _, _| props.clone());
        assert!(props.on_mouse_over.is_none());
        assert!(props.on_mouse_out.is_none());
        assert!(!props.has_hover());
    }

    #[test]
    fn hover_opens_once_and_notifies_once() {
        let doc: Document<u32> = Document::new();
        let log: Log = Rc::default();
        let mut d = mounted(
            &doc,
            DisclosureConfig::default()
                .trigger(Triggers::MOUSEOVER)
                .on_toggle(logging(&log)),
        );
        let props = d.render(|props, _, _| props.clone());
        let on_over = props.on_mouse_over.clone().expect("hover handlers present");

        on_over(&over(&[1, 10]));
        assert!(d.is_open());
        assert_eq!(d.store().revision(), 1);

        // Delivered before any re-render: still deduplicated.
        on_over(&over(&[1, 10, 11]));
        assert_eq!(d.store().revision(), 1, "second mouseover must not dispatch");
        assert_eq!(*log.borrow(), [(true, Some(10))]);
    }

    #[test]
    fn hover_out_closes_and_notifies() {
        let doc: Document<u32> = Document::new();
        let log: Log = Rc::default();
        let mut d = mounted(
            &doc,
            DisclosureConfig::default()
                .trigger(Triggers::MOUSEOVER)
                .default_open(true)
                .on_toggle(logging(&log)),
        );
        let props = d.render(|props, _, _| props.clone());
        let on_out = props.on_mouse_out.clone().expect("hover handlers present");

        on_out(&out(&[1, 10]));
        on_out(&out(&[1, 10]));
        assert!(!d.is_open());
        assert_eq!(*log.borrow(), [(false, Some(10))]);
    }

    #[test]
    fn outside_interaction_hides_inside_does_not() {
        let doc: Document<u32> = Document::new();
        let d = mounted(
            &doc,
            DisclosureConfig::default()
                .default_open(true)
                .hide_on_click_outside(true),
        );
        assert!(d.is_listening_outside());

        doc.pointer_down(&down(&[1, 10, 12]));
        assert!(d.is_open());
        assert_eq!(d.store().revision(), 0);

        doc.pointer_down(&down(&[1, 20]));
        assert!(!d.is_open());
        assert_eq!(d.store().revision(), 1, "exactly one hide per outside event");
    }

    #[test]
    fn outside_disabled_holds_no_subscription() {
        let doc: Document<u32> = Document::new();
        let d = mounted(&doc, DisclosureConfig::default().default_open(true));
        assert!(!d.is_listening_outside());
        assert_eq!(doc.listener_count(), 0);
        doc.pointer_down(&down(&[1, 20]));
        assert!(d.is_open());
    }

    #[test]
    fn unattached_region_dismisses_everything() {
        let doc: Document<u32> = Document::new();
        let d: Disclosure<u32, _> = Disclosure::new(
            doc.clone(),
            DisclosureConfig::default()
                .default_open(true)
                .hide_on_click_outside(true),
        );
        doc.pointer_down(&down(&[1, 10]));
        assert!(!d.is_open());
    }

    #[test]
    fn toggling_outside_dismissal_attaches_and_detaches() {
        let doc: Document<u32> = Document::new();
        let mut d = mounted(&doc, DisclosureConfig::default());
        assert_eq!(doc.listener_count(), 0);

        d.update(DisclosureConfig::default().hide_on_click_outside(true));
        assert_eq!(doc.listener_count(), 1);
        d.update(DisclosureConfig::default().hide_on_click_outside(true));
        assert_eq!(doc.listener_count(), 1);
        d.update(DisclosureConfig::default());
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn drop_releases_outside_subscription() {
        let doc: Document<u32> = Document::new();
        let d = mounted(&doc, DisclosureConfig::default().hide_on_click_outside(true));
        assert_eq!(doc.listener_count(), 1);
        drop(d);
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn controlled_override_wins_but_reducer_still_runs() {
        let doc: Document<u32> = Document::new();
        let mut d = mounted(
            &doc,
            DisclosureConfig::default()
                .open(false)
                .trigger(Triggers::MOUSEOVER),
        );
        let props = d.render(|props, _, _| props.clone());
        (props.on_mouse_over.clone().expect("hover"))(&over(&[10]));

        assert!(d.state().open, "internal state follows the action");
        assert!(!d.is_open(), "controlled value is rendered");
        assert!(!d.render(|props, _, _| props.open));

        // Releasing control shows the internal state.
        d.update(DisclosureConfig::default().trigger(Triggers::MOUSEOVER));
        assert!(d.render(|props, _, _| props.open));
    }

    #[test]
    fn published_values_are_stable_without_change() {
        let doc: Document<u32> = Document::new();
        let on_toggle: crate::OnToggle<u32> = Rc::new(|_: bool, _: &PointerEvent<u32>| {});
        let config = DisclosureConfig::default()
            .trigger(Triggers::MOUSEOVER | Triggers::CLICK)
            .on_toggle_shared(Some(on_toggle));
        let mut d = mounted(&doc, config.clone());

        let (props1, ctx1) = d.render(|p, _, c| (p.clone(), c.clone()));
        d.update(config.clone());
        let (props2, ctx2) = d.render(|p, _, c| (p.clone(), c.clone()));
        assert!(ctx1.ptr_eq(&ctx2));
        assert!(props1.same_as(&props2));
        assert!(!d.refresh());

        d.dispatch(DisclosureAction::Show);
        let (props3, ctx3) = d.render(|p, _, c| (p.clone(), c.clone()));
        assert!(!ctx1.ptr_eq(&ctx3));
        assert!(!props1.same_as(&props3));
        assert!(props3.open);
    }

    #[test]
    fn fresh_callback_republishes() {
        let doc: Document<u32> = Document::new();
        let mut d = mounted(&doc, DisclosureConfig::default().on_toggle(|_, _| {}));
        let before = d.context().clone();
        d.update(DisclosureConfig::default().on_toggle(|_, _| {}));
        assert!(!before.ptr_eq(d.context()));
    }

    #[test]
    fn region_identity_is_fixed() {
        let doc: Document<u32> = Document::new();
        let mut d = mounted(&doc, DisclosureConfig::default());
        let first = d.region().clone();
        d.update(DisclosureConfig::default().hide_on_click_outside(true));
        let second = d.render(|_, region, _| region.clone());
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn hover_then_outside_scenario() {
        // Outside dismissal dispatches Hide without notifying on_toggle; only the
        // hover handlers notify.
        let doc: Document<u32> = Document::new();
        let log: Log = Rc::default();
        let mut d: Disclosure<u32, _> = Disclosure::new(
            doc.clone(),
            DisclosureConfig::default()
                .default_open(false)
                .hide_on_click_outside(true)
                .trigger(Triggers::MOUSEOVER)
                .on_toggle(logging(&log)),
        );

        let mut observed = Vec::new();
        let props = d.render(|props, region, _| {
            region.attach(NodeRegion(10));
            props.clone()
        });
        observed.push(props.open);

        (props.on_mouse_over.clone().expect("hover"))(&over(&[1, 10]));
        observed.push(d.render(|props, _, _| props.open));

        doc.pointer_down(&down(&[1, 30]));
        observed.push(d.render(|props, _, _| props.open));

        assert_eq!(observed, [false, true, false]);
        assert_eq!(*log.borrow(), [(true, Some(10))]);
        assert_eq!(d.store().revision(), 2, "one show from hover, one hide from outside");
    }
}
