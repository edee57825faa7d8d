// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The content part: conditional rendering.

use crate::context::DisclosureContext;

/// How closed content is treated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentPolicy {
    /// Render only while open.
    #[default]
    MountOnOpen,
    /// Always render; mark hidden while closed.
    KeepMounted,
}

/// What the host needs to draw disclosure content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContentProps {
    /// Effective open state.
    pub open: bool,
    /// Whether the host should hide the rendered content.
    pub hidden: bool,
}

/// The part revealed by a disclosure.
///
/// ```
/// use understory_disclosure::{ContentPolicy, Disclosure, DisclosureConfig, DisclosureContent};
/// use understory_event_state::listeners::Document;
///
/// let doc: Document<u32> = Document::new();
/// let mut disclosure: Disclosure<u32, _> = Disclosure::new(doc, DisclosureConfig::default());
///
/// let mounted = disclosure.render(|_, _, ctx| {
///     DisclosureContent::new(ctx).render(|_| "panel")
/// });
/// assert_eq!(mounted, None);
///
/// let kept = disclosure.render(|_, _, ctx| {
///     DisclosureContent::new(ctx)
///         .policy(ContentPolicy::KeepMounted)
///         .render(|props| props.hidden)
/// });
/// assert_eq!(kept, Some(true));
/// ```
#[derive(Clone, Debug)]
pub struct DisclosureContent<K> {
    context: DisclosureContext<K>,
    policy: ContentPolicy,
}

impl<K> DisclosureContent<K> {
    /// Create a content part reading from `context`, mounting only while open.
    pub fn new(context: &DisclosureContext<K>) -> Self {
        Self {
            context: context.clone(),
            policy: ContentPolicy::default(),
        }
    }

    /// Set the closed-content policy.
    pub fn policy(mut self, policy: ContentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Props for this render cycle, or `None` if nothing should be rendered.
    pub fn props(&self) -> Option<ContentProps> {
        let open = self.context.open();
        match (open, self.policy) {
            (false, ContentPolicy::MountOnOpen) => None,
            _ => Some(ContentProps {
                open,
                hidden: !open,
            }),
        }
    }

    /// Call `render` if the content should be rendered.
    pub fn render<T>(&self, render: impl FnOnce(&ContentProps) -> T) -> Option<T> {
        self.props().as_ref().map(render)
    }
}
