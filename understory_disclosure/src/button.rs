// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The button part: click activation and ARIA state.

use alloc::rc::Rc;

use understory_event_state::pointer::PointerEvent;

use crate::config::Triggers;
use crate::context::DisclosureContext;

/// Click handler the host attaches to its button.
pub type ClickHandler<K> = Rc<dyn Fn(&PointerEvent<K>)>;

/// What the host needs to draw a disclosure button.
pub struct ButtonProps<K> {
    /// Effective open state.
    pub open: bool,
    /// Value for `aria-expanded`.
    pub aria_expanded: &'static str,
    /// Toggles the disclosure. Present only when [`Triggers::CLICK`] is wired.
    pub on_click: Option<ClickHandler<K>>,
}

impl<K> Clone for ButtonProps<K> {
    fn clone(&self) -> Self {
        Self {
            open: self.open,
            aria_expanded: self.aria_expanded,
            on_click: self.on_click.clone(),
        }
    }
}

impl<K> core::fmt::Debug for ButtonProps<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ButtonProps")
            .field("open", &self.open)
            .field("aria_expanded", &self.aria_expanded)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// The part that toggles a disclosure.
///
/// ```
/// use kurbo::Point;
/// use understory_disclosure::{Disclosure, DisclosureButton, DisclosureConfig};
/// use understory_event_state::listeners::Document;
/// use understory_event_state::pointer::PointerEvent;
///
/// let doc: Document<u32> = Document::new();
/// let mut disclosure: Disclosure<u32, _> = Disclosure::new(doc, DisclosureConfig::default());
///
/// let props = disclosure.render(|_, _, ctx| DisclosureButton::new(ctx).props());
/// assert_eq!(props.aria_expanded, "false");
///
/// let click = props.on_click.expect("click is the default trigger");
/// click(&PointerEvent::click(Point::ZERO));
/// assert!(disclosure.is_open());
/// ```
pub struct DisclosureButton<K> {
    context: DisclosureContext<K>,
}

impl<K: 'static> DisclosureButton<K> {
    /// Create a button part reading from `context`.
    pub fn new(context: &DisclosureContext<K>) -> Self {
        Self {
            context: context.clone(),
        }
    }

    /// Build the props for this render cycle.
    pub fn props(&self) -> ButtonProps<K> {
        let open = self.context.open();
        let on_click = self.context.trigger().contains(Triggers::CLICK).then(|| {
            let context = self.context.clone();
            Rc::new(move |event: &PointerEvent<K>| {
                toggle(&context, event);
            }) as ClickHandler<K>
        });
        ButtonProps {
            open,
            aria_expanded: if open { "true" } else { "false" },
            on_click,
        }
    }

    /// Build props and hand them to `render`.
    pub fn render<T>(&self, render: impl FnOnce(&ButtonProps<K>) -> T) -> T {
        render(&self.props())
    }

    /// Activate the button as a click would.
    ///
    /// Returns the new open state, or `None` if click is not a wired trigger.
    pub fn activate(&self, event: &PointerEvent<K>) -> Option<bool> {
        if !self.context.trigger().contains(Triggers::CLICK) {
            return None;
        }
        Some(toggle(&self.context, event))
    }
}

fn toggle<K>(context: &DisclosureContext<K>, event: &PointerEvent<K>) -> bool {
    let open = !context.current_open();
    context.toggle_to(open, event);
    open
}

impl<K> core::fmt::Debug for DisclosureButton<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DisclosureButton")
            .field("context", &self.context)
            .finish()
    }
}
