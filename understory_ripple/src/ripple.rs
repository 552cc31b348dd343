// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ripple orchestrator.
//!
//! [`Ripple`] owns one host's visual layers, its live [`PointerSession`], and
//! the timers and players it created. The embedder forwards native input and
//! collaborator notifications:
//!
//! | Native event | Entry point |
//! |---|---|
//! | pointer / mouse / touch down | [`Ripple::pointer_down`] |
//! | move | [`Ripple::pointer_move`] |
//! | up / touch end | [`Ripple::pointer_up`] |
//! | mouse leave | [`Ripple::pointer_leave`] |
//! | timer expiry | [`Ripple::timer_fired`] |
//! | player start / done | [`Ripple::animation_started`] / [`Ripple::animation_done`] |
//!
//! Exactly one session is live at a time. A down while a session is live
//! silently ends that session and starts a fresh one, so a lost release never
//! leaks into the next interaction. A down during the dismount grace period
//! cancels the dismount and reuses the mounted layers.

use alloc::boxed::Box;
use core::fmt;

use log::{debug, trace};

use crate::animation::{AnimationPhase, DoneOutcome, RippleAnimation};
use crate::config::RippleConfig;
use crate::error::RippleError;
use crate::event::{Publisher, RippleEvent, RippleListener};
use crate::geometry::{BorderRadius, HostGeometry};
use crate::gesture::{Contact, Debouncer, Gesture};
use crate::host::{
    Animator, HostElement, Layer, LayerFrame, PlayerId, PointerListeners, Scheduler, TimerId,
};
use crate::motion::MotionTracker;
use crate::strategy::{EndKind, MoveAction, PointerInput, PointerStrategy};

/// Attribute copied into [`RippleEvent::nav_link`].
pub const NAV_LINK_ATTRIBUTE: &str = "navlink";

/// State of one interaction, from pointer down to end.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSession {
    /// Where and how the session started.
    pub contact: Contact,
    /// Strategy selected at pointer down.
    pub strategy: PointerStrategy,
    /// Timestamp of the pointer down.
    pub started_at: u64,
    /// Whether the press timer has fired.
    pub pressing: bool,
    /// Samples of this session.
    pub motion: MotionTracker,
    press_timer: Option<TimerId>,
}

impl PointerSession {
    /// Pending press timer, if it has not fired or been cancelled.
    #[must_use]
    pub fn press_timer(&self) -> Option<TimerId> {
        self.press_timer
    }
}

/// Ripple effect and gesture recognizer for one host element.
pub struct Ripple<H: HostElement, A: Animator, S: Scheduler> {
    host: H,
    animator: A,
    scheduler: S,
    config: RippleConfig,
    geometry: HostGeometry,
    animation: RippleAnimation,
    publisher: Publisher<H::Id>,
    debouncer: Debouncer,
    session: Option<PointerSession>,
    dismount_timer: Option<TimerId>,
    mounted: bool,
    active: bool,
    destroyed: bool,
}

impl<H: HostElement, A: Animator, S: Scheduler> fmt::Debug for Ripple<H, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ripple")
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("animation", &self.animation)
            .field("publisher", &self.publisher)
            .field("session", &self.session)
            .field("dismount_timer", &self.dismount_timer)
            .field("mounted", &self.mounted)
            .field("active", &self.active)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl<H: HostElement, A: Animator, S: Scheduler> Ripple<H, A, S> {
    /// Starts building a ripple.
    #[must_use]
    pub fn builder() -> RippleBuilder<H, A, S> {
        RippleBuilder::new()
    }

    /// Returns the host element.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host element mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the animator.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Returns the animator mutably.
    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Returns the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the scheduler mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Effective configuration.
    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Geometry measured at the last pointer down.
    pub fn geometry(&self) -> &HostGeometry {
        &self.geometry
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    /// Current animation phase of the ripple body.
    pub fn phase(&self) -> AnimationPhase {
        self.animation.phase()
    }

    /// Returns `true` while the layers are mounted in the host.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns `true` while the active class is applied.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` after [`destroy`](Self::destroy).
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Pending dismount timer, if any.
    pub fn dismount_timer(&self) -> Option<TimerId> {
        self.dismount_timer
    }

    /// Replaces the event listener.
    pub fn set_listener(&mut self, listener: impl RippleListener<H::Id> + 'static) {
        self.publisher.set_listener(Some(Box::new(listener)));
    }

    /// Handles a native pointer down.
    ///
    /// A live session is ended silently first; the new down always wins.
    pub fn pointer_down(&mut self, input: PointerInput) {
        if self.destroyed {
            return;
        }
        if self.session.is_some() {
            debug!("pointer down supersedes the live session");
            self.end_session(EndKind::Superseded, input);
        }
        let border_radius = BorderRadius::parse(&self.host.computed_border_radius());
        let rect = self.host.bounding_rect();
        self.geometry.recalculate(rect, &border_radius);
        if self.geometry.is_degenerate() {
            debug!(
                "ignoring pointer down on a degenerate host {:?}",
                self.geometry.rect
            );
            return;
        }

        self.cancel_dismount();
        self.mount_element();
        self.style_layers();
        self.activate();

        let strategy = PointerStrategy::for_input(input.input);
        strategy.attach(&mut self.host);
        let press_timer = self.scheduler.set_timeout(self.config.tap_limit);
        let mut motion = MotionTracker::default();
        motion.start(input.position, input.timestamp);
        self.session = Some(PointerSession {
            contact: Contact {
                point: input.position,
                input: input.input,
            },
            strategy,
            started_at: input.timestamp,
            pressing: false,
            motion,
            press_timer: Some(press_timer),
        });

        let offset = self.geometry.offset_from_center(input.position);
        self.animation.fill(&mut self.animator, &self.config, offset);
        debug!(
            "ripple session started by {:?} at {:?}",
            input.input, input.position
        );
    }

    /// Handles a native pointer move.
    pub fn pointer_move(&mut self, input: PointerInput) {
        if self.destroyed {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.motion.update(input.position, input.timestamp);
        let strategy = session.strategy;
        let fixed = self.config.fixed;
        let threshold = self.config.move_velocity_threshold;
        if !fixed
            && threshold > 0.0
            && session
                .motion
                .average_velocity()
                .is_some_and(|v| v < threshold)
        {
            trace!("ignoring slow move to {:?}", input.position);
            return;
        }

        let width = self.core_width();
        let outer = width.unwrap_or(0.0);
        match strategy.on_move(&self.geometry, fixed, input.position, outer) {
            MoveAction::End => self.end_session(EndKind::Moved, input),
            MoveAction::Translate => {
                let offset = self.geometry.offset_from_center(input.position);
                // An unmeasured body keeps full scale.
                let scale = width.map_or(1.0, |w| self.geometry.scale_for_width(w));
                self.animation
                    .translate(&mut self.animator, &self.config, offset, scale);
            }
            MoveAction::Freeze => trace!("freezing ripple at {:?}", input.position),
        }
    }

    /// Handles a native pointer up or touch end.
    pub fn pointer_up(&mut self, input: PointerInput) {
        if !self.destroyed {
            self.end_session(EndKind::Release, input);
        }
    }

    /// Handles a native mouse leave. The session ends without an event.
    pub fn pointer_leave(&mut self, input: PointerInput) {
        if self.destroyed {
            return;
        }
        if self
            .session
            .as_ref()
            .is_some_and(|s| s.strategy.ends_on(EndKind::Leave))
        {
            self.end_session(EndKind::Leave, input);
        }
    }

    /// Handles a scheduler timer expiry. Returns `false` for unknown or stale timers.
    pub fn timer_fired(&mut self, timer: TimerId) -> bool {
        if self.destroyed {
            return false;
        }
        if self.dismount_timer == Some(timer) {
            self.dismount_timer = None;
            self.dismount_element();
            return true;
        }
        if let Some(session) = self.session.as_mut()
            && session.press_timer == Some(timer)
        {
            session.press_timer = None;
            session.pressing = true;
            let at = session.started_at.saturating_add(self.config.tap_limit);
            self.emit(Gesture::Press, at);
            return true;
        }
        self.publisher.fire(timer)
    }

    /// Handles an animation player start notification.
    pub fn animation_started(&mut self, player: PlayerId) {
        if !self.destroyed {
            self.animation.started(&mut self.animator, player);
        }
    }

    /// Handles an animation player completion notification.
    ///
    /// When the end animation completes the layers are scheduled for removal
    /// after [`RippleConfig::dismount_timeout`].
    pub fn animation_done(&mut self, player: PlayerId) {
        if self.destroyed {
            return;
        }
        let outcome = self
            .animation
            .done(&mut self.animator, &self.config, player);
        if outcome == DoneOutcome::EndFinished {
            self.cancel_dismount();
            let timeout = self.config.dismount_timeout();
            trace!("ripple dismount in {timeout}ms");
            self.dismount_timer = Some(self.scheduler.set_timeout(timeout));
        }
    }

    /// Inserts the layers into the host. Does nothing if they are mounted.
    pub fn mount_element(&mut self) {
        if self.mounted {
            return;
        }
        self.cancel_dismount();
        self.host.mount_layer(Layer::Core);
        if self.config.background_included {
            self.host.mount_layer(Layer::Background);
        }
        self.mounted = true;
    }

    /// Removes the layers from the host. Does nothing if they are not mounted.
    pub fn dismount_element(&mut self) {
        self.cancel_dismount();
        if !self.mounted {
            return;
        }
        self.animation.reset(&mut self.animator);
        self.host.unmount_layer(Layer::Core);
        if self.config.background_included {
            self.host.unmount_layer(Layer::Background);
        }
        self.mounted = false;
        trace!("ripple layers dismounted");
    }

    /// Applies the active class to the host.
    pub fn activate(&mut self) {
        if !self.active {
            self.host.add_class(&self.config.active_class);
            self.active = true;
        }
    }

    /// Removes the active class from the host.
    pub fn deactivate(&mut self) {
        if self.active {
            self.host.remove_class(&self.config.active_class);
            self.active = false;
        }
    }

    /// Tears the ripple down: cancels every timer, destroys every player,
    /// detaches every listener, and removes the layers.
    ///
    /// Safe to call at any time, including mid-animation, and more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(session) = self.session.take() {
            if let Some(timer) = session.press_timer {
                self.scheduler.clear_timeout(timer);
            }
            session.strategy.detach(&mut self.host);
        }
        self.publisher.cancel_pending(&mut self.scheduler);
        self.host.remove_listeners(PointerListeners::DOWN);
        self.deactivate();
        self.dismount_element();
        self.animation.reset(&mut self.animator);
        self.debouncer.clear();
        self.destroyed = true;
        debug!("ripple destroyed");
    }

    fn end_session(&mut self, kind: EndKind, input: PointerInput) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if let Some(timer) = session.press_timer.take() {
            self.scheduler.clear_timeout(timer);
        }
        session.strategy.detach(&mut self.host);
        session.motion.end(input.position, input.timestamp);
        let elapsed = session.motion.duration().unwrap_or_default();
        let gesture = session.strategy.on_end(
            kind,
            session.pressing,
            elapsed,
            self.config.tap_limit,
        );

        self.deactivate();
        let by = self.animation.end(&mut self.animator, &self.config);
        debug!(
            "ripple session ended by {kind:?} after {elapsed}ms: {gesture:?}, {by:?}"
        );

        if let Some(gesture) = gesture {
            self.emit(gesture, input.timestamp);
        }
    }

    fn emit(&mut self, gesture: Gesture, timestamp: u64) {
        if !self.debouncer.admit(gesture, timestamp) {
            trace!("suppressing repeated {gesture}");
            return;
        }
        let delay = if gesture.is_delayed() {
            self.config.emit_delay()
        } else {
            0
        };
        let event = RippleEvent {
            target: self.host.id(),
            kind: gesture,
            timestamp,
            coordinate: self.geometry.center,
            client_rect: self.geometry.rect,
            nav_link: self.host.attribute(NAV_LINK_ATTRIBUTE),
            delay,
        };
        if delay > 0 {
            let timer = self.scheduler.set_timeout(delay);
            self.publisher.defer(timer, event);
        } else {
            self.publisher.dispatch(&event);
        }
    }

    fn cancel_dismount(&mut self) {
        if let Some(timer) = self.dismount_timer.take() {
            self.scheduler.clear_timeout(timer);
        }
    }

    fn core_width(&self) -> Option<f64> {
        self.host.layer_rect(Layer::Core).map(|rect| rect.width())
    }

    fn style_layers(&mut self) {
        let core = LayerFrame {
            bounds: self.geometry.core_frame(),
            color: self.config.core().color,
        };
        self.host.style_layer(Layer::Core, &core);
        if self.config.background_included {
            let background = LayerFrame {
                bounds: self.geometry.background_frame(),
                color: self.config.background().color,
            };
            self.host.style_layer(Layer::Background, &background);
        }
    }
}

/// Builder for [`Ripple`].
///
/// The host, animator and scheduler are required; the configuration defaults
/// to [`RippleConfig::default`] and the listener is optional.
pub struct RippleBuilder<H: HostElement, A: Animator, S: Scheduler> {
    host: Option<H>,
    animator: Option<A>,
    scheduler: Option<S>,
    config: RippleConfig,
    listener: Option<Box<dyn RippleListener<H::Id>>>,
}

impl<H: HostElement, A: Animator, S: Scheduler> fmt::Debug for RippleBuilder<H, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RippleBuilder")
            .field("has_host", &self.host.is_some())
            .field("has_animator", &self.animator.is_some())
            .field("has_scheduler", &self.scheduler.is_some())
            .field("config", &self.config)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl<H: HostElement, A: Animator, S: Scheduler> Default for RippleBuilder<H, A, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HostElement, A: Animator, S: Scheduler> RippleBuilder<H, A, S> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: None,
            animator: None,
            scheduler: None,
            config: RippleConfig::default(),
            listener: None,
        }
    }

    /// Sets the host element.
    #[must_use]
    pub fn host(mut self, host: H) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the animator.
    #[must_use]
    pub fn animator(mut self, animator: A) -> Self {
        self.animator = Some(animator);
        self
    }

    /// Sets the scheduler.
    #[must_use]
    pub fn scheduler(mut self, scheduler: S) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Sets the effective configuration, usually resolved from a
    /// [`ConfigCascade`](crate::config::ConfigCascade).
    #[must_use]
    pub fn config(mut self, config: RippleConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the event listener.
    #[must_use]
    pub fn listener(mut self, listener: impl RippleListener<H::Id> + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Builds the ripple and starts listening for pointer down on the host.
    pub fn build(self) -> Result<Ripple<H, A, S>, RippleError> {
        let mut host = self.host.ok_or(RippleError::MissingHost)?;
        let animator = self.animator.ok_or(RippleError::MissingAnimator)?;
        let scheduler = self.scheduler.ok_or(RippleError::MissingScheduler)?;
        host.add_listeners(PointerListeners::DOWN);
        let geometry = HostGeometry::measure(
            host.bounding_rect(),
            &BorderRadius::parse(&host.computed_border_radius()),
        );
        debug!("ripple initialized on {:?}", host.id());
        Ok(Ripple {
            host,
            animator,
            scheduler,
            debouncer: Debouncer::new(self.config.repeat_window),
            config: self.config,
            geometry,
            animation: RippleAnimation::new(),
            publisher: Publisher::new(self.listener),
            session: None,
            dismount_timer: None,
            mounted: false,
            active: false,
            destroyed: false,
        })
    }
}
