// SPDX-License-Identifier: MPL-2.0
//! Host callback surface.
//!
//! Hosts hand over [`RawCallback`] values. Each one is validated once, when
//! the lightbox is opened, into a [`CallbackSlot`] that is either callable
//! or inert. Inert slots caused by a non-callable value report a
//! [`Diagnostic`] and are skipped afterwards.

use crate::diagnostics::{Diagnostic, Diagnostics, ValueKind};
use crate::domain::gallery::Item;
use std::fmt;

/// What triggered a slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    /// Direct selection (thumbnail click, programmatic selection).
    Selected,
    /// Forward navigation.
    Right,
    /// Backward navigation.
    Left,
}

impl SlideAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SlideAction::Selected => "selected",
            SlideAction::Right => "right",
            SlideAction::Left => "left",
        }
    }
}

/// Displayed item and its raw neighbours in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slides {
    pub previous: Option<Item>,
    pub current: Item,
    pub next: Option<Item>,
}

/// Payload of `onSlideChange`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideChange {
    pub action: SlideAction,
    pub slides: Slides,
    pub index: usize,
}

/// Payload of `onLightboxOpened` and `onLightboxClosed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxEvent {
    pub opened: bool,
    pub current_slide: Option<Item>,
}

/// Payload of `onCountSlides`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCount {
    pub total_slide: usize,
}

/// A value supplied by the host where a callback is expected.
pub enum RawCallback<A> {
    Callable(Box<dyn FnMut(&A)>),
    NotCallable(ValueKind),
}

impl<A> RawCallback<A> {
    #[must_use]
    pub fn new(callback: impl FnMut(&A) + 'static) -> Self {
        RawCallback::Callable(Box::new(callback))
    }

    #[must_use]
    pub fn not_callable(kind: ValueKind) -> Self {
        RawCallback::NotCallable(kind)
    }
}

impl<A> fmt::Debug for RawCallback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCallback::Callable(_) => f.write_str("Callable"),
            RawCallback::NotCallable(kind) => write!(f, "NotCallable({kind})"),
        }
    }
}

/// A validated callback: present-and-callable or absent.
pub struct CallbackSlot<A> {
    name: &'static str,
    callback: Option<Box<dyn FnMut(&A)>>,
}

impl<A> CallbackSlot<A> {
    /// Validates a host value. Non-callable values are reported once.
    #[must_use]
    pub fn validate(
        name: &'static str,
        raw: Option<RawCallback<A>>,
        diagnostics: &Diagnostics,
    ) -> Self {
        let callback = match raw {
            Some(RawCallback::Callable(callback)) => Some(callback),
            Some(RawCallback::NotCallable(received)) => {
                diagnostics.report(Diagnostic::CallbackNotCallable {
                    callback: name,
                    received,
                });
                None
            }
            None => None,
        };
        Self { name, callback }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn is_callable(&self) -> bool {
        self.callback.is_some()
    }

    /// Invokes the callback. Returns false when the slot is absent.
    pub fn invoke(&mut self, payload: &A) -> bool {
        match self.callback.as_mut() {
            Some(callback) => {
                callback(payload);
                true
            }
            None => {
                tracing::trace!(callback = self.name, "callback absent, skipped");
                false
            }
        }
    }
}

impl<A> fmt::Debug for CallbackSlot<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("name", &self.name)
            .field("callable", &self.is_callable())
            .finish()
    }
}

/// Callbacks as supplied by the host. Unset callbacks are simply absent.
#[derive(Debug, Default)]
pub struct RawCallbacks {
    pub on_slide_change: Option<RawCallback<SlideChange>>,
    pub on_lightbox_opened: Option<RawCallback<LightboxEvent>>,
    pub on_lightbox_closed: Option<RawCallback<LightboxEvent>>,
    pub on_count_slides: Option<RawCallback<SlideCount>>,
}

impl RawCallbacks {
    #[must_use]
    pub fn on_slide_change(mut self, raw: RawCallback<SlideChange>) -> Self {
        self.on_slide_change = Some(raw);
        self
    }

    #[must_use]
    pub fn on_lightbox_opened(mut self, raw: RawCallback<LightboxEvent>) -> Self {
        self.on_lightbox_opened = Some(raw);
        self
    }

    #[must_use]
    pub fn on_lightbox_closed(mut self, raw: RawCallback<LightboxEvent>) -> Self {
        self.on_lightbox_closed = Some(raw);
        self
    }

    #[must_use]
    pub fn on_count_slides(mut self, raw: RawCallback<SlideCount>) -> Self {
        self.on_count_slides = Some(raw);
        self
    }
}

/// The validated callback surface.
#[derive(Debug)]
pub(crate) struct Callbacks {
    pub slide_change: CallbackSlot<SlideChange>,
    pub opened: CallbackSlot<LightboxEvent>,
    pub closed: CallbackSlot<LightboxEvent>,
    pub count: CallbackSlot<SlideCount>,
}

impl Callbacks {
    pub fn validate(raw: RawCallbacks, diagnostics: &Diagnostics) -> Self {
        Self {
            slide_change: CallbackSlot::validate("onSlideChange", raw.on_slide_change, diagnostics),
            opened: CallbackSlot::validate("onLightboxOpened", raw.on_lightbox_opened, diagnostics),
            closed: CallbackSlot::validate("onLightboxClosed", raw.on_lightbox_closed, diagnostics),
            count: CallbackSlot::validate("onCountSlides", raw.on_count_slides, diagnostics),
        }
    }
}
