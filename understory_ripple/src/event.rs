// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outgoing gesture events and their delivery.
//!
//! A [`Publisher`] delivers [`RippleEvent`]s to the registered
//! [`RippleListener`], either immediately or when a scheduler timer fires.
//! Any `FnMut(&RippleEvent<K>)` closure is a listener.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect};

use crate::gesture::Gesture;
use crate::host::{Scheduler, TimerId};

/// A classified interaction, delivered to the external listener.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleEvent<K> {
    /// Identifier of the host the interaction happened on.
    pub target: K,
    /// Which gesture was recognised.
    pub kind: Gesture,
    /// Time the gesture was recognised, in milliseconds.
    pub timestamp: u64,
    /// Host centre in screen space.
    pub coordinate: Point,
    /// Host bounding box at the time of the interaction.
    pub client_rect: Rect,
    /// Value of the host's `navlink` attribute, if any.
    pub nav_link: Option<String>,
    /// Milliseconds the delivery was deferred by.
    pub delay: u64,
}

/// Receives [`RippleEvent`]s.
pub trait RippleListener<K> {
    /// Called once per emitted event.
    fn on_event(&mut self, event: &RippleEvent<K>);
}

impl<K, F> RippleListener<K> for F
where
    F: FnMut(&RippleEvent<K>),
{
    fn on_event(&mut self, event: &RippleEvent<K>) {
        self(event);
    }
}

/// Delivers events now or after a timer.
pub struct Publisher<K> {
    listener: Option<Box<dyn RippleListener<K>>>,
    pending: Vec<(TimerId, RippleEvent<K>)>,
}

impl<K> Default for Publisher<K> {
    fn default() -> Self {
        Self {
            listener: None,
            pending: Vec::new(),
        }
    }
}

impl<K> fmt::Debug for Publisher<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("has_listener", &self.listener.is_some())
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl<K> Publisher<K> {
    /// Creates a publisher with an optional listener.
    #[must_use]
    pub fn new(listener: Option<Box<dyn RippleListener<K>>>) -> Self {
        Self {
            listener,
            pending: Vec::new(),
        }
    }

    /// Replaces the listener. Pending events go to the new listener.
    pub fn set_listener(&mut self, listener: Option<Box<dyn RippleListener<K>>>) {
        self.listener = listener;
    }

    /// Returns `true` if a listener is registered.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Delivers `event` immediately.
    pub fn dispatch(&mut self, event: &RippleEvent<K>) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_event(event);
        }
    }

    /// Holds `event` until `timer` fires.
    pub fn defer(&mut self, timer: TimerId, event: RippleEvent<K>) {
        self.pending.push((timer, event));
    }

    /// Delivers the event waiting on `timer`. Returns `false` for unknown timers.
    pub fn fire(&mut self, timer: TimerId) -> bool {
        let Some(index) = self.pending.iter().position(|(id, _)| *id == timer) else {
            return false;
        };
        let (_, event) = self.pending.remove(index);
        self.dispatch(&event);
        true
    }

    /// Number of events waiting on a timer.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drops every pending event and cancels its timer.
    pub fn cancel_pending<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        for (timer, _) in self.pending.drain(..) {
            scheduler.clear_timeout(timer);
        }
    }
}
