// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ripple --heading-base-level=0

//! Understory Ripple: ripple feedback and gesture recognition for pointer interactions.
//!
//! A [`Ripple`] is attached to one host element. On pointer down it measures
//! the host, mounts a circular body (and an optional background overlay), and
//! grows the body from the contact point to cover the host. While the pointer
//! moves the body follows it; on release it splashes or fades out and the
//! interaction is classified as one of four gestures:
//!
//! - `tap`: short touch contact
//! - `click`: short mouse contact
//! - `press`: contact held past the tap limit, reported while still held
//! - `pressup`: release after a press
//!
//! The crate is sans-IO. It never touches a real element, animation engine or
//! clock; embedders implement [`HostElement`], [`Animator`] and [`Scheduler`]
//! and forward native events and notifications into the [`Ripple`].
//!
//! ## Modules
//!
//! - [`geometry`]: host shape, diameter, centre and body margin
//! - [`containment`]: boundary-exclusive point-in-host predicates
//! - [`config`]: defaults, layered options, and attribute parsing
//! - [`gesture`]: gesture classification and duplicate suppression
//! - [`motion`]: down/move/up samples, duration and velocity
//! - [`strategy`]: mouse and touch pointer handling
//! - [`animation`]: keyframes and player ownership for fill, translate, splash and fadeout
//! - [`event`]: outgoing events and delayed delivery
//! - [`host`]: collaborator traits
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use understory_ripple::{
//!     AnimationStep, Animator, Gesture, HostElement, InputKind, Layer, LayerFrame, PlayerId,
//!     PointerInput, PointerListeners, Ripple, RippleConfig, RippleEvent, Scheduler, TimerId,
//! };
//!
//! struct Button;
//!
//! impl HostElement for Button {
//!     type Id = &'static str;
//!     fn id(&self) -> Self::Id { "ok-button" }
//!     fn bounding_rect(&self) -> Rect { Rect::new(0.0, 0.0, 120.0, 40.0) }
//!     fn computed_border_radius(&self) -> String { "4px".into() }
//!     fn layer_rect(&self, _: Layer) -> Option<Rect> { None }
//!     fn attribute(&self, _: &str) -> Option<String> { None }
//!     fn add_class(&mut self, _: &str) {}
//!     fn remove_class(&mut self, _: &str) {}
//!     fn add_listeners(&mut self, _: PointerListeners) {}
//!     fn remove_listeners(&mut self, _: PointerListeners) {}
//!     fn mount_layer(&mut self, _: Layer) {}
//!     fn unmount_layer(&mut self, _: Layer) {}
//!     fn style_layer(&mut self, _: Layer, _: &LayerFrame) {}
//! }
//!
//! #[derive(Default)]
//! struct Players(u64);
//!
//! impl Animator for Players {
//!     fn build(&mut self, _: Layer, _: &[AnimationStep]) -> PlayerId {
//!         self.0 += 1;
//!         PlayerId(self.0)
//!     }
//!     fn play(&mut self, _: PlayerId) {}
//!     fn destroy(&mut self, _: PlayerId) {}
//! }
//!
//! #[derive(Default)]
//! struct Timers(u64);
//!
//! impl Scheduler for Timers {
//!     fn set_timeout(&mut self, _: u64) -> TimerId {
//!         self.0 += 1;
//!         TimerId(self.0)
//!     }
//!     fn clear_timeout(&mut self, _: TimerId) {}
//! }
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut ripple = Ripple::builder()
//!     .host(Button)
//!     .animator(Players::default())
//!     .scheduler(Timers::default())
//!     .config(RippleConfig { delay_event: false, ..RippleConfig::default() })
//!     .listener(move |e: &RippleEvent<&'static str>| sink.borrow_mut().push(e.kind))
//!     .build()
//!     .unwrap();
//!
//! ripple.pointer_down(PointerInput::new(Point::new(30.0, 20.0), InputKind::Touch, 1_000));
//! ripple.pointer_up(PointerInput::new(Point::new(30.0, 20.0), InputKind::Touch, 1_120));
//! assert_eq!(*seen.borrow(), [Gesture::Tap]);
//! ```

#![no_std]

extern crate alloc;

pub mod animation;
pub mod config;
pub mod containment;
pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod motion;
pub mod ripple;
pub mod strategy;

pub use animation::{AnimationPhase, AnimationStep, LayerStyle};
pub use config::{
    ConfigCascade, ConfigCascadeBuilder, ConfigOrigin, RippleConfig, RippleOptions, Transition,
};
pub use error::RippleError;
pub use event::{RippleEvent, RippleListener};
pub use geometry::{BorderRadius, HostGeometry};
pub use gesture::{Gesture, InputKind};
pub use host::{
    Animator, HostElement, Layer, LayerFrame, PlayerId, PointerListeners, Scheduler, TimerId,
};
pub use ripple::{PointerSession, Ripple, RippleBuilder};
pub use strategy::{PointerInput, PointerStrategy};
