// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces: the host element, the animation engine, and the timer primitive.
//!
//! The ripple engine never touches a real widget tree, animation system, or clock.
//! Embedders implement these three traits over whatever their platform offers
//! (DOM nodes, a retained scene graph, a test double) and forward the resulting
//! notifications back into [`Ripple`](crate::Ripple):
//!
//! - Timer expiry → [`Ripple::timer_fired`](crate::Ripple::timer_fired)
//! - Player start → [`Ripple::animation_started`](crate::Ripple::animation_started)
//! - Player done → [`Ripple::animation_done`](crate::Ripple::animation_done)

use alloc::string::String;
use core::fmt::Debug;

use kurbo::Rect;

use crate::animation::AnimationStep;

bitflags::bitflags! {
    /// Set of pointer listeners the engine asks the host to attach or detach.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PointerListeners: u8 {
        /// Pointer/mouse/touch down. Attached for the lifetime of the ripple.
        const DOWN  = 0b0000_0001;
        /// Pointer/mouse/touch move during a session.
        const MOVE  = 0b0000_0010;
        /// Pointer release (`mouseup` / `touchend`).
        const UP    = 0b0000_0100;
        /// Pointer leaving the host (`mouseleave`); only meaningful for mice.
        const LEAVE = 0b0000_1000;
    }
}

/// One of the two visual nodes the engine mounts inside its host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The circular ripple body.
    Core,
    /// The optional full-size overlay behind the ripple body.
    Background,
}

/// Placement and colour of a mounted [`Layer`], in host-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerFrame {
    /// Layer bounds relative to the host's top-left corner.
    pub bounds: Rect,
    /// Fill colour, as an opaque style string (for example `rgba(0, 0, 0, 0.1)`).
    pub color: String,
}

/// Opaque handle to a timer created by a [`Scheduler`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Opaque handle to an animation player created by an [`Animator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u64);

/// The element a ripple is displayed on.
pub trait HostElement {
    /// Identifier copied into every emitted [`RippleEvent`](crate::RippleEvent) as its target.
    type Id: Clone + Debug;

    /// Returns the identifier of this host.
    fn id(&self) -> Self::Id;

    /// Returns the host's bounding box in screen space.
    fn bounding_rect(&self) -> Rect;

    /// Returns the computed `border-radius` style of the host (for example `"50%"`).
    fn computed_border_radius(&self) -> String;

    /// Returns the current on-screen bounds of a mounted layer, if it is mounted.
    ///
    /// The engine reads the core layer's width mid-animation to derive its
    /// current scale.
    fn layer_rect(&self, layer: Layer) -> Option<Rect>;

    /// Returns an attribute value of the host, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Adds a style class to the host.
    fn add_class(&mut self, class: &str);

    /// Removes a style class from the host.
    fn remove_class(&mut self, class: &str);

    /// Starts delivering the given native listener kinds to the engine.
    fn add_listeners(&mut self, listeners: PointerListeners);

    /// Stops delivering the given native listener kinds to the engine.
    fn remove_listeners(&mut self, listeners: PointerListeners);

    /// Inserts a layer node as a child of the host.
    fn mount_layer(&mut self, layer: Layer);

    /// Removes a layer node from the host.
    fn unmount_layer(&mut self, layer: Layer);

    /// Applies size, offset, and colour to a layer node.
    fn style_layer(&mut self, layer: Layer, frame: &LayerFrame);
}

/// Builds and drives keyframe animation players.
///
/// Start and completion notifications are delivered asynchronously by the
/// embedder through [`Ripple::animation_started`](crate::Ripple::animation_started)
/// and [`Ripple::animation_done`](crate::Ripple::animation_done).
pub trait Animator {
    /// Creates a (not yet playing) player for `layer` from an ordered list of steps.
    fn build(&mut self, layer: Layer, steps: &[AnimationStep]) -> PlayerId;

    /// Starts playing a player.
    fn play(&mut self, player: PlayerId);

    /// Stops and releases a player. No notifications may follow for it.
    fn destroy(&mut self, player: PlayerId);
}

/// Delay-based callback primitive with timeout semantics.
pub trait Scheduler {
    /// Arms a timer that should fire once after `delay_ms` milliseconds.
    fn set_timeout(&mut self, delay_ms: u64) -> TimerId;

    /// Cancels a timer. Cancelling an unknown or already fired timer is a no-op.
    fn clear_timeout(&mut self, timer: TimerId);
}
