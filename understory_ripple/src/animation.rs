// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation lifecycle of the ripple body and its background overlay.
//!
//! The controller describes animations as keyframe [`AnimationStep`] lists and
//! hands them to an [`Animator`]. It owns every player it creates: at most one
//! fill/translate player and one end player are alive at a time, and a
//! superseded player is destroyed before its replacement is built.
//!
//! ```text
//! Idle → Filling → Translating* → (Splashing | FadingOut) → Idle
//! ```
//!
//! Transforms are expressed relative to the host centre: a body at
//! `TranslateScale::new(offset, s)` is drawn `offset` away from the centre at
//! scale `s`. The resting state is the identity transform at full opacity.

use alloc::string::String;

use kurbo::{TranslateScale, Vec2};
use log::trace;
use smallvec::{SmallVec, smallvec};

use crate::config::{RippleConfig, Transition};
use crate::host::{Animator, Layer, PlayerId};

/// Target style of one keyframe. `None` fields keep their current value.
#[derive(Copy, Clone, Debug, Default)]
pub struct LayerStyle {
    /// Layer opacity in `0.0..=1.0`.
    pub opacity: Option<f64>,
    /// Offset from the host centre and scale of the layer.
    pub transform: Option<TranslateScale>,
}

impl LayerStyle {
    /// A style that only sets opacity.
    #[must_use]
    pub const fn opacity(opacity: f64) -> Self {
        Self {
            opacity: Some(opacity),
            transform: None,
        }
    }

    /// Offset from the host centre and scale, if the style sets a transform.
    #[must_use]
    pub fn offset_and_scale(&self) -> Option<(Vec2, f64)> {
        self.transform.map(|t| (t.translation, t.scale))
    }
}

// `TranslateScale` has no `PartialEq`.
impl PartialEq for LayerStyle {
    fn eq(&self, other: &Self) -> bool {
        self.opacity == other.opacity && self.offset_and_scale() == other.offset_and_scale()
    }
}

/// One keyframe: animate to `style` over `duration_ms` with `easing`.
///
/// A zero duration applies the style immediately.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationStep {
    /// Style reached at the end of the step.
    pub style: LayerStyle,
    /// Step duration in milliseconds.
    pub duration_ms: u64,
    /// Easing function name, passed through verbatim.
    pub easing: String,
}

impl AnimationStep {
    /// Applies `style` immediately.
    #[must_use]
    pub fn set(style: LayerStyle) -> Self {
        Self {
            style,
            duration_ms: 0,
            easing: String::new(),
        }
    }

    /// Animates to `style` using `transition`.
    #[must_use]
    pub fn animate(style: LayerStyle, transition: &Transition) -> Self {
        Self {
            style,
            duration_ms: transition.duration_ms,
            easing: transition.easing.clone(),
        }
    }
}

/// Keyframe list handed to an [`Animator`].
pub type Steps = SmallVec<[AnimationStep; 2]>;

/// Current phase of the ripple body.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    /// Nothing is playing.
    #[default]
    Idle,
    /// Growing from the contact point towards the host centre.
    Filling,
    /// Following the pointer back towards the host centre.
    Translating,
    /// Snapping to the centre and fading out.
    Splashing,
    /// Fading out in place.
    FadingOut,
}

/// End animation variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EndBy {
    /// Snap to centre, then fade. Used while the body is still moving.
    Splash,
    /// Fade in place. Used once the body rests at the centre.
    Fadeout,
}

/// What a player completion meant to the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DoneOutcome {
    /// The player is not (or no longer) tracked.
    Ignored,
    /// The fill or translate player reached the resting state.
    Rested,
    /// The end animation finished; the background is fading out.
    EndFinished,
}

/// Identity transform at the host centre.
fn centered() -> TranslateScale {
    TranslateScale::new(Vec2::ZERO, 1.0)
}

/// Keyframes for the fill animation: appear at `offset` with zero scale, grow to rest.
#[must_use]
pub fn fill_steps(config: &RippleConfig, offset: Vec2) -> Steps {
    smallvec![
        AnimationStep::set(LayerStyle {
            opacity: Some(1.0),
            transform: Some(TranslateScale::new(offset, 0.0)),
        }),
        AnimationStep::animate(
            LayerStyle {
                opacity: Some(1.0),
                transform: Some(centered()),
            },
            &config.fill_transition,
        ),
    ]
}

/// Keyframes for a translate: jump to `offset` at `scale`, then drift back to rest.
#[must_use]
pub fn translate_steps(config: &RippleConfig, offset: Vec2, scale: f64) -> Steps {
    smallvec![
        AnimationStep::set(LayerStyle {
            opacity: None,
            transform: Some(TranslateScale::new(offset, scale)),
        }),
        AnimationStep::animate(
            LayerStyle {
                opacity: None,
                transform: Some(centered()),
            },
            &config.fill_transition,
        ),
    ]
}

/// Keyframes for an end animation.
#[must_use]
pub fn end_steps(config: &RippleConfig, by: EndBy) -> Steps {
    let fade = AnimationStep::animate(LayerStyle::opacity(0.0), &config.fade_transition);
    match by {
        EndBy::Splash => smallvec![
            AnimationStep::animate(
                LayerStyle {
                    opacity: Some(config.splash_opacity),
                    transform: Some(centered()),
                },
                &config.splash_transition,
            ),
            fade,
        ],
        EndBy::Fadeout => smallvec![fade],
    }
}

/// Keyframes for the background overlay fading in.
#[must_use]
pub fn background_fade_in_steps(config: &RippleConfig) -> Steps {
    smallvec![
        AnimationStep::set(LayerStyle::opacity(0.0)),
        AnimationStep::animate(LayerStyle::opacity(1.0), &config.bg_fade_transition),
    ]
}

/// Keyframes for the background overlay fading out.
#[must_use]
pub fn background_fade_out_steps(config: &RippleConfig) -> Steps {
    smallvec![AnimationStep::animate(
        LayerStyle::opacity(0.0),
        &config.bg_fade_transition
    )]
}

/// Owns the players of one ripple and sequences them.
#[derive(Clone, Debug, Default)]
pub struct RippleAnimation {
    phase: AnimationPhase,
    motion: Option<PlayerId>,
    end: Option<(PlayerId, EndBy)>,
    background: Option<PlayerId>,
    at_rest: bool,
}

impl RippleAnimation {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Returns `true` once the fill or latest translate has completed.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// The end animation the body needs right now.
    #[must_use]
    pub fn end_by(&self) -> EndBy {
        if self.at_rest {
            EndBy::Fadeout
        } else {
            EndBy::Splash
        }
    }

    /// Live fill/translate player, if any.
    #[must_use]
    pub fn motion_player(&self) -> Option<PlayerId> {
        self.motion
    }

    /// Live end player, if any.
    #[must_use]
    pub fn end_player(&self) -> Option<PlayerId> {
        self.end.map(|(id, _)| id)
    }

    /// Live background player, if any.
    #[must_use]
    pub fn background_player(&self) -> Option<PlayerId> {
        self.background
    }

    /// Starts the fill animation at `offset` from the host centre.
    ///
    /// Any player left over from a previous session is destroyed first. The
    /// offset is ignored for centred ripples.
    pub fn fill<A: Animator + ?Sized>(
        &mut self,
        animator: &mut A,
        config: &RippleConfig,
        offset: Vec2,
    ) {
        self.reset(animator);
        if config.background_included {
            let player = animator.build(Layer::Background, &background_fade_in_steps(config));
            animator.play(player);
            self.background = Some(player);
        }
        let offset = if config.centered { Vec2::ZERO } else { offset };
        trace!("ripple fill from {offset:?}");
        let player = animator.build(Layer::Core, &fill_steps(config, offset));
        animator.play(player);
        self.motion = Some(player);
        self.phase = AnimationPhase::Filling;
    }

    /// Moves the body to `offset` at its current `scale`, superseding the
    /// previous fill or translate. Returns `false` for centred ripples.
    pub fn translate<A: Animator + ?Sized>(
        &mut self,
        animator: &mut A,
        config: &RippleConfig,
        offset: Vec2,
        scale: f64,
    ) -> bool {
        if config.centered || self.end.is_some() {
            return false;
        }
        if let Some(previous) = self.motion.take() {
            animator.destroy(previous);
        }
        trace!("ripple translate to {offset:?} at scale {scale}");
        let player = animator.build(Layer::Core, &translate_steps(config, offset, scale));
        animator.play(player);
        self.motion = Some(player);
        self.at_rest = false;
        self.phase = AnimationPhase::Translating;
        true
    }

    /// Starts the end animation chosen by [`end_by`](Self::end_by).
    pub fn end<A: Animator + ?Sized>(&mut self, animator: &mut A, config: &RippleConfig) -> EndBy {
        let by = self.end_by();
        if let Some((previous, _)) = self.end.take() {
            animator.destroy(previous);
        }
        trace!("ripple end by {by:?}");
        let player = animator.build(Layer::Core, &end_steps(config, by));
        animator.play(player);
        self.end = Some((player, by));
        self.phase = match by {
            EndBy::Splash => AnimationPhase::Splashing,
            EndBy::Fadeout => AnimationPhase::FadingOut,
        };
        by
    }

    /// Handles a player start notification.
    ///
    /// Once the end animation runs, the fill/translate player is released.
    pub fn started<A: Animator + ?Sized>(&mut self, animator: &mut A, player: PlayerId) {
        if self.end_player() == Some(player)
            && let Some(motion) = self.motion.take()
        {
            animator.destroy(motion);
        }
    }

    /// Handles a player completion notification.
    pub fn done<A: Animator + ?Sized>(
        &mut self,
        animator: &mut A,
        config: &RippleConfig,
        player: PlayerId,
    ) -> DoneOutcome {
        if self.motion == Some(player) {
            self.at_rest = true;
            return DoneOutcome::Rested;
        }
        if self.end_player() != Some(player) {
            return DoneOutcome::Ignored;
        }
        self.end = None;
        animator.destroy(player);
        if let Some(motion) = self.motion.take() {
            animator.destroy(motion);
        }
        self.at_rest = false;
        self.phase = AnimationPhase::Idle;
        if let Some(fade_in) = self.background.take() {
            animator.destroy(fade_in);
            let fade_out = animator.build(Layer::Background, &background_fade_out_steps(config));
            animator.play(fade_out);
            self.background = Some(fade_out);
        }
        DoneOutcome::EndFinished
    }

    /// Destroys every live player and returns to idle.
    pub fn reset<A: Animator + ?Sized>(&mut self, animator: &mut A) {
        let players = [
            self.motion.take(),
            self.end.take().map(|(id, _)| id),
            self.background.take(),
        ];
        for player in players.into_iter().flatten() {
            animator.destroy(player);
        }
        self.at_rest = false;
        self.phase = AnimationPhase::Idle;
    }
}
