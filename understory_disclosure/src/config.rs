// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied configuration: triggers, controlled state, and callbacks.

use alloc::rc::Rc;

use understory_event_state::pointer::PointerEvent;

bitflags::bitflags! {
    /// Interaction channels that open and close a disclosure.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Triggers: u8 {
        /// Activating the button part toggles.
        const CLICK     = 0b0000_0001;
        /// Hovering the tracked region opens; leaving it closes.
        const MOUSEOVER = 0b0000_0010;
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Self::CLICK
    }
}

/// Notification that a trigger changed the open state.
///
/// Receives the new open value and the event that caused it.
pub type OnToggle<K> = Rc<dyn Fn(bool, &PointerEvent<K>)>;

/// Configuration for a [`Disclosure`](crate::Disclosure), supplied per update.
///
/// ```
/// use understory_disclosure::{DisclosureConfig, Triggers};
///
/// let config: DisclosureConfig<u32> = DisclosureConfig::default()
///     .trigger(Triggers::CLICK | Triggers::MOUSEOVER)
///     .hide_on_click_outside(true)
///     .on_toggle(|open, _event| {
///         let _ = open;
///     });
/// assert!(config.open.is_none());
/// assert!(!config.default_open);
/// ```
pub struct DisclosureConfig<K> {
    /// Called when a trigger handler changes the state. Not a state owner.
    pub on_toggle: Option<OnToggle<K>>,
    /// Wired interaction channels.
    pub trigger: Triggers,
    /// Whether pointer-downs outside the tracked region close the disclosure.
    pub hide_on_click_outside: bool,
    /// Controlled override. When present it wins over internal state.
    pub open: Option<bool>,
    /// Initial internal state. Only read at construction.
    pub default_open: bool,
}

impl<K> DisclosureConfig<K> {
    /// Set the trigger channels.
    pub fn trigger(mut self, trigger: Triggers) -> Self {
        self.trigger = trigger;
        self
    }

    /// Control the open state from the host.
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Release control; internal state is rendered again.
    pub fn uncontrolled(mut self) -> Self {
        self.open = None;
        self
    }

    /// Set the initial internal state.
    pub fn default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }

    /// Enable or disable dismissal by outside interaction.
    pub fn hide_on_click_outside(mut self, enabled: bool) -> Self {
        self.hide_on_click_outside = enabled;
        self
    }

    /// Set the toggle notification.
    pub fn on_toggle(mut self, on_toggle: impl Fn(bool, &PointerEvent<K>) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(on_toggle));
        self
    }

    /// Set a shared toggle notification, keeping its identity across updates.
    pub fn on_toggle_shared(mut self, on_toggle: Option<OnToggle<K>>) -> Self {
        self.on_toggle = on_toggle;
        self
    }
}

impl<K> Default for DisclosureConfig<K> {
    fn default() -> Self {
        Self {
            on_toggle: None,
            trigger: Triggers::default(),
            hide_on_click_outside: false,
            open: None,
            default_open: false,
        }
    }
}

impl<K> Clone for DisclosureConfig<K> {
    fn clone(&self) -> Self {
        Self {
            on_toggle: self.on_toggle.clone(),
            trigger: self.trigger,
            hide_on_click_outside: self.hide_on_click_outside,
            open: self.open,
            default_open: self.default_open,
        }
    }
}

impl<K> core::fmt::Debug for DisclosureConfig<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DisclosureConfig")
            .field("on_toggle", &self.on_toggle.is_some())
            .field("trigger", &self.trigger)
            .field("hide_on_click_outside", &self.hide_on_click_outside)
            .field("open", &self.open)
            .field("default_open", &self.default_open)
            .finish()
    }
}

/// Identity comparison for optional callbacks.
pub(crate) fn same_callback<K>(a: Option<&OnToggle<K>>, b: Option<&OnToggle<K>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}
