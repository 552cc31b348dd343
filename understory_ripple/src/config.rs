// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration: layered options resolved into one immutable [`RippleConfig`].
//!
//! Options come from up to four places, merged field by field with the
//! following precedence (lowest first):
//!
//! **Default → Global → Custom → Instance**
//!
//! - *Default*: the [`RippleConfig`] handed to [`ConfigCascadeBuilder::new`],
//!   usually [`RippleConfig::default`].
//! - *Global*: app-wide options.
//! - *Custom*: options injected for one kind of usage (a button style, say).
//! - *Instance*: per-host overrides, typically parsed from attributes with
//!   [`RippleOptions::from_attributes`].
//!
//! Invalid values (a negative opacity, an unparsable transition) are ignored
//! with a warning, so the next lower layer supplies the field instead.
//!
//! ```
//! use understory_ripple::config::{
//!     ConfigCascadeBuilder, ConfigOrigin, RippleConfig, RippleOptions,
//! };
//!
//! let global = RippleOptions { tap_limit: Some(500), ..RippleOptions::default() };
//! let instance = RippleOptions::from_attributes([("tapLimit", "650"), ("light", "")]);
//!
//! let config = ConfigCascadeBuilder::new(RippleConfig::default())
//!     .push(ConfigOrigin::Global, global)
//!     .push(ConfigOrigin::Instance, instance)
//!     .build()
//!     .resolve();
//!
//! assert_eq!(config.tap_limit, 650);
//! assert!(config.light);
//! assert_eq!(config.core().color, config.ripple_light_bg_color);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use log::warn;

/// A CSS-like transition: a duration plus an easing function.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Easing function, passed through to the animator verbatim.
    pub easing: String,
}

impl Transition {
    /// Creates a transition.
    #[must_use]
    pub fn new(duration_ms: u64, easing: impl Into<String>) -> Self {
        Self {
            duration_ms,
            easing: easing.into(),
        }
    }

    /// Parses `"<duration> [easing]"`, e.g. `"450ms cubic-bezier(0.4, 0, 0.2, 1)"`
    /// or `"0.3s linear"`. The easing defaults to `ease`.
    ///
    /// Returns `None` if the duration is missing, negative, or not a number.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let (duration, easing) = match value.split_once(char::is_whitespace) {
            Some((d, e)) => (d, e.trim()),
            None => (value, ""),
        };
        let duration_ms = parse_duration_ms(duration)?;
        let easing = if easing.is_empty() { "ease" } else { easing };
        Some(Self::new(duration_ms, easing))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms {}", self.duration_ms, self.easing)
    }
}

fn parse_duration_ms(token: &str) -> Option<u64> {
    let (number, scale) = if let Some(ms) = token.strip_suffix("ms") {
        (ms, 1.0)
    } else if let Some(s) = token.strip_suffix('s') {
        (s, 1000.0)
    } else {
        return None;
    };
    let value = number.parse::<f64>().ok()? * scale;
    if !value.is_finite() || value < 0.0 || value > u64::MAX as f64 {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is finite, non-negative, and range-checked above"
    )]
    let millis = (value + 0.5) as u64;
    Some(millis)
}

/// Fully resolved ripple configuration.
///
/// The [`Default`] impl holds the built-in defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    /// End the ripple as soon as the pointer moves instead of following it.
    pub fixed: bool,
    /// Grow from the host centre instead of the contact point.
    pub centered: bool,
    /// Use the light colour variants.
    pub light: bool,
    /// Ripple body colour (default variant).
    pub ripple_default_bg_color: String,
    /// Background overlay colour (default variant).
    pub active_default_bg_color: String,
    /// Ripple body colour (light variant).
    pub ripple_light_bg_color: String,
    /// Background overlay colour (light variant).
    pub active_light_bg_color: String,
    /// Growth from contact point to full coverage.
    pub fill_transition: Transition,
    /// Snap-to-centre phase of the splash end animation.
    pub splash_transition: Transition,
    /// Opacity fade used by both end animations.
    pub fade_transition: Transition,
    /// Background overlay fade in and out.
    pub bg_fade_transition: Transition,
    /// Body opacity reached at the end of the splash phase, in `0.0..=1.0`.
    pub splash_opacity: f64,
    /// Longest hold, in milliseconds, still classified as a tap or click.
    pub tap_limit: u64,
    /// Class toggled on the host while a session is live.
    pub active_class: String,
    /// Whether the background overlay layer is mounted.
    pub background_included: bool,
    /// Whether tap/click emission waits for [`delay_value`](Self::delay_value).
    pub delay_event: bool,
    /// Tap/click emission delay in milliseconds.
    pub delay_value: u64,
    /// Grace period before the layers are removed after an interaction ends.
    ///
    /// `None` derives it from the end animation (see [`RippleConfig::dismount_timeout`]).
    pub dismounting_timeout: Option<u64>,
    /// Identical gestures closer together than this many milliseconds are emitted once.
    pub repeat_window: u64,
    /// Minimum average move velocity (pixels per 100 ms) for a move to be
    /// processed on non-fixed ripples. `0.0` processes every move.
    pub move_velocity_threshold: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            fixed: false,
            centered: false,
            light: false,
            ripple_default_bg_color: "rgba(0, 0, 0, 0.1)".to_string(),
            active_default_bg_color: "rgba(0, 0, 0, 0.05)".to_string(),
            ripple_light_bg_color: "rgba(255, 255, 255, 0.2)".to_string(),
            active_light_bg_color: "rgba(255, 255, 255, 0.1)".to_string(),
            fill_transition: Transition::new(700, "cubic-bezier(0.4, 0, 0.2, 1)"),
            splash_transition: Transition::new(250, "cubic-bezier(0.4, 0, 0.2, 1)"),
            fade_transition: Transition::new(300, "linear"),
            bg_fade_transition: Transition::new(300, "linear"),
            splash_opacity: 1.0,
            tap_limit: 600,
            active_class: "activated".to_string(),
            background_included: true,
            delay_event: true,
            delay_value: 250,
            dismounting_timeout: None,
            repeat_window: 40,
            move_velocity_threshold: 0.0,
        }
    }
}

impl RippleConfig {
    /// Settings for the ripple body.
    #[must_use]
    pub fn core(&self) -> RippleCoreConfig {
        RippleCoreConfig {
            centered: self.centered,
            fixed: self.fixed,
            color: if self.light {
                self.ripple_light_bg_color.clone()
            } else {
                self.ripple_default_bg_color.clone()
            },
            fill_transition: self.fill_transition.clone(),
            splash_transition: self.splash_transition.clone(),
            fade_transition: self.fade_transition.clone(),
            splash_opacity: self.splash_opacity,
            tap_limit: self.tap_limit,
            active_class: self.active_class.clone(),
            background_included: self.background_included,
        }
    }

    /// Settings for the background overlay.
    #[must_use]
    pub fn background(&self) -> RippleBackgroundConfig {
        RippleBackgroundConfig {
            color: if self.light {
                self.active_light_bg_color.clone()
            } else {
                self.active_default_bg_color.clone()
            },
            fade_transition: self.bg_fade_transition.clone(),
        }
    }

    /// Grace period before dismount: the configured value, or 1.5 × (splash + fade).
    #[must_use]
    pub fn dismount_timeout(&self) -> u64 {
        self.dismounting_timeout.unwrap_or_else(|| {
            let end = self
                .splash_transition
                .duration_ms
                .saturating_add(self.fade_transition.duration_ms);
            end.saturating_mul(3) / 2
        })
    }

    /// Delay applied to tap and click emission.
    #[must_use]
    pub fn emit_delay(&self) -> u64 {
        if self.delay_event {
            self.delay_value
        } else {
            0
        }
    }
}

/// Settings that drive the ripple body.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleCoreConfig {
    /// Grow from the host centre.
    pub centered: bool,
    /// Do not follow the pointer.
    pub fixed: bool,
    /// Body colour, already resolved from the light/default variant.
    pub color: String,
    /// Fill and translate transition.
    pub fill_transition: Transition,
    /// Splash transition.
    pub splash_transition: Transition,
    /// Fade transition.
    pub fade_transition: Transition,
    /// Opacity at the end of the splash phase.
    pub splash_opacity: f64,
    /// Tap/press threshold in milliseconds.
    pub tap_limit: u64,
    /// Class toggled on the host while active.
    pub active_class: String,
    /// Whether a background overlay exists.
    pub background_included: bool,
}

/// Settings that drive the background overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleBackgroundConfig {
    /// Overlay colour, already resolved from the light/default variant.
    pub color: String,
    /// Fade in/out transition.
    pub fade_transition: Transition,
}

/// One layer of partial configuration. `None` fields defer to lower layers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleOptions {
    /// See [`RippleConfig::fixed`].
    pub fixed: Option<bool>,
    /// See [`RippleConfig::centered`].
    pub centered: Option<bool>,
    /// See [`RippleConfig::light`].
    pub light: Option<bool>,
    /// See [`RippleConfig::ripple_default_bg_color`].
    pub ripple_default_bg_color: Option<String>,
    /// See [`RippleConfig::active_default_bg_color`].
    pub active_default_bg_color: Option<String>,
    /// See [`RippleConfig::ripple_light_bg_color`].
    pub ripple_light_bg_color: Option<String>,
    /// See [`RippleConfig::active_light_bg_color`].
    pub active_light_bg_color: Option<String>,
    /// See [`RippleConfig::fill_transition`]; parsed with [`Transition::parse`].
    pub fill_transition: Option<String>,
    /// See [`RippleConfig::splash_transition`].
    pub splash_transition: Option<String>,
    /// See [`RippleConfig::fade_transition`].
    pub fade_transition: Option<String>,
    /// See [`RippleConfig::bg_fade_transition`].
    pub bg_fade_transition: Option<String>,
    /// See [`RippleConfig::splash_opacity`].
    pub splash_opacity: Option<f64>,
    /// See [`RippleConfig::tap_limit`].
    pub tap_limit: Option<u64>,
    /// See [`RippleConfig::active_class`].
    pub active_class: Option<String>,
    /// See [`RippleConfig::background_included`].
    pub background_included: Option<bool>,
    /// See [`RippleConfig::delay_event`].
    pub delay_event: Option<bool>,
    /// See [`RippleConfig::delay_value`].
    pub delay_value: Option<u64>,
    /// See [`RippleConfig::dismounting_timeout`].
    pub dismounting_timeout: Option<u64>,
    /// See [`RippleConfig::repeat_window`].
    pub repeat_window: Option<u64>,
    /// See [`RippleConfig::move_velocity_threshold`].
    pub move_velocity_threshold: Option<f64>,
}

impl RippleOptions {
    /// Builds instance options from host attributes.
    ///
    /// Presence flags: `light`, `centered-ripple` (or `centered`), `fixed-ripple`
    /// (or `fixed`), and `immediate-event` (disables the emission delay).
    /// Value attributes use the option names, matched case-insensitively
    /// (`tapLimit`, `splashOpacity`, `fillTransition`, ...), plus the short forms
    /// `rippleBgColor` and `activeBgColor` for the default colour variants.
    /// Unknown attributes are ignored; malformed numbers are dropped.
    #[must_use]
    pub fn from_attributes<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut options = Self::default();
        for (name, value) in attributes {
            options.set_attribute(name, value);
        }
        options
    }

    /// Applies a single attribute. Returns `false` if the name is not recognised.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        let is = |candidate: &str| name.eq_ignore_ascii_case(candidate);
        let text = || Some(value.trim().to_string());
        if is("light") {
            self.light = Some(true);
        } else if is("centered-ripple") || is("centered") {
            self.centered = Some(true);
        } else if is("fixed-ripple") || is("fixed") {
            self.fixed = Some(true);
        } else if is("immediate-event") {
            self.delay_event = Some(false);
        } else if is("rippleBgColor") || is("rippleDefaultBgColor") {
            self.ripple_default_bg_color = text();
        } else if is("activeBgColor") || is("activeDefaultBgColor") {
            self.active_default_bg_color = text();
        } else if is("rippleLightBgColor") {
            self.ripple_light_bg_color = text();
        } else if is("activeLightBgColor") {
            self.active_light_bg_color = text();
        } else if is("fillTransition") {
            self.fill_transition = text();
        } else if is("splashTransition") {
            self.splash_transition = text();
        } else if is("fadeTransition") {
            self.fade_transition = text();
        } else if is("bgFadeTransition") {
            self.bg_fade_transition = text();
        } else if is("activeClass") {
            self.active_class = text();
        } else if is("splashOpacity") {
            self.splash_opacity = parse_number(name, value);
        } else if is("moveVelocityThreshold") {
            self.move_velocity_threshold = parse_number(name, value);
        } else if is("tapLimit") {
            self.tap_limit = parse_millis(name, value);
        } else if is("delayValue") {
            self.delay_value = parse_millis(name, value);
        } else if is("dismountingTimeout") {
            self.dismounting_timeout = parse_millis(name, value);
        } else if is("repeatWindow") {
            self.repeat_window = parse_millis(name, value);
        } else {
            return false;
        }
        true
    }

    /// Overwrites fields of `config` with every valid value set in this layer.
    pub fn apply_to(&self, config: &mut RippleConfig) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }
        set(&mut config.fixed, &self.fixed);
        set(&mut config.centered, &self.centered);
        set(&mut config.light, &self.light);
        set(&mut config.background_included, &self.background_included);
        set(&mut config.delay_event, &self.delay_event);
        set(&mut config.tap_limit, &self.tap_limit);
        set(&mut config.delay_value, &self.delay_value);
        set(&mut config.repeat_window, &self.repeat_window);
        if self.dismounting_timeout.is_some() {
            config.dismounting_timeout = self.dismounting_timeout;
        }

        apply_text(
            &mut config.ripple_default_bg_color,
            &self.ripple_default_bg_color,
            "rippleDefaultBgColor",
        );
        apply_text(
            &mut config.active_default_bg_color,
            &self.active_default_bg_color,
            "activeDefaultBgColor",
        );
        apply_text(
            &mut config.ripple_light_bg_color,
            &self.ripple_light_bg_color,
            "rippleLightBgColor",
        );
        apply_text(
            &mut config.active_light_bg_color,
            &self.active_light_bg_color,
            "activeLightBgColor",
        );
        if let Some(class) = &self.active_class {
            if class.is_empty() || class.contains(char::is_whitespace) {
                warn!("ignoring invalid activeClass {class:?}");
            } else {
                config.active_class = class.clone();
            }
        }

        apply_transition(
            &mut config.fill_transition,
            &self.fill_transition,
            "fillTransition",
        );
        apply_transition(
            &mut config.splash_transition,
            &self.splash_transition,
            "splashTransition",
        );
        apply_transition(
            &mut config.fade_transition,
            &self.fade_transition,
            "fadeTransition",
        );
        apply_transition(
            &mut config.bg_fade_transition,
            &self.bg_fade_transition,
            "bgFadeTransition",
        );

        if let Some(opacity) = self.splash_opacity {
            if (0.0..=1.0).contains(&opacity) {
                config.splash_opacity = opacity;
            } else {
                warn!("ignoring out-of-range splashOpacity {opacity}");
            }
        }
        if let Some(threshold) = self.move_velocity_threshold {
            if threshold.is_finite() && threshold >= 0.0 {
                config.move_velocity_threshold = threshold;
            } else {
                warn!("ignoring invalid moveVelocityThreshold {threshold}");
            }
        }
    }
}

fn apply_text(target: &mut String, value: &Option<String>, name: &str) {
    match value.as_deref().map(str::trim) {
        Some("") => warn!("ignoring empty {name}"),
        Some(v) => *target = v.to_string(),
        None => {}
    }
}

fn apply_transition(target: &mut Transition, value: &Option<String>, name: &str) {
    if let Some(raw) = value {
        match Transition::parse(raw) {
            Some(t) => *target = t,
            None => warn!("ignoring unparsable {name} {raw:?}"),
        }
    }
}

fn parse_number(name: &str, value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            warn!("ignoring non-numeric {name} {value:?}");
            None
        }
    }
}

fn parse_millis(name: &str, value: &str) -> Option<u64> {
    let value = value.trim();
    let number = value.strip_suffix("ms").unwrap_or(value).trim();
    if let Ok(v) = number.parse::<u64>() {
        return Some(v);
    }
    warn!("ignoring non-numeric {name} {value:?}");
    None
}

/// Where a layer of [`RippleOptions`] came from.
///
/// Higher origins win over lower ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigOrigin {
    /// Adjustments to the built-in defaults.
    Default = 0,
    /// App-wide options.
    Global = 1,
    /// Options injected for a particular usage.
    Custom = 2,
    /// Per-host attribute or input overrides.
    Instance = 3,
}

/// An ordered set of option layers on top of a defaults value.
#[derive(Clone, Debug)]
pub struct ConfigCascade {
    defaults: RippleConfig,
    layers: Vec<(ConfigOrigin, RippleOptions)>,
}

impl ConfigCascade {
    /// Returns the defaults this cascade starts from.
    #[must_use]
    pub fn defaults(&self) -> &RippleConfig {
        &self.defaults
    }

    /// Returns the number of option layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if the cascade has no option layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Merges every layer, lowest origin first, into an effective configuration.
    ///
    /// Layers pushed with the same origin apply in insertion order.
    #[must_use]
    pub fn resolve(&self) -> RippleConfig {
        let mut config = self.defaults.clone();
        for (_, options) in &self.layers {
            options.apply_to(&mut config);
        }
        config
    }
}

/// Builder for [`ConfigCascade`].
#[derive(Clone, Debug)]
pub struct ConfigCascadeBuilder {
    defaults: RippleConfig,
    layers: Vec<(ConfigOrigin, RippleOptions)>,
}

impl ConfigCascadeBuilder {
    /// Starts a cascade from an explicit defaults value.
    #[must_use]
    pub fn new(defaults: RippleConfig) -> Self {
        Self {
            defaults,
            layers: Vec::new(),
        }
    }

    /// Adds an options layer.
    #[must_use]
    pub fn push(mut self, origin: ConfigOrigin, options: RippleOptions) -> Self {
        self.layers.push((origin, options));
        self
    }

    /// Adds an options layer if one is present.
    #[must_use]
    pub fn push_opt(self, origin: ConfigOrigin, options: Option<RippleOptions>) -> Self {
        match options {
            Some(options) => self.push(origin, options),
            None => self,
        }
    }

    /// Builds the cascade.
    #[must_use]
    pub fn build(mut self) -> ConfigCascade {
        // Stable: equal origins keep insertion order.
        self.layers.sort_by_key(|(origin, _)| *origin);
        ConfigCascade {
            defaults: self.defaults,
            layers: self.layers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_parses_ms_and_seconds() {
        assert_eq!(
            Transition::parse("450ms cubic-bezier(0.4, 0, 0.2, 1)"),
            Some(Transition::new(450, "cubic-bezier(0.4, 0, 0.2, 1)"))
        );
        assert_eq!(
            Transition::parse("0.3s linear"),
            Some(Transition::new(300, "linear"))
        );
        assert_eq!(Transition::parse("0ms"), Some(Transition::new(0, "ease")));
        assert_eq!(
            Transition::parse(" 120ms   ease-out "),
            Some(Transition::new(120, "ease-out"))
        );
    }

    #[test]
    fn transition_rejects_garbage() {
        assert_eq!(Transition::parse(""), None);
        assert_eq!(Transition::parse("fast"), None);
        assert_eq!(Transition::parse("-5ms linear"), None);
        assert_eq!(Transition::parse("NaNms"), None);
        assert_eq!(Transition::parse("100 linear"), None);
    }

    #[test]
    fn transition_display_round_trips() {
        let t = Transition::new(200, "linear");
        assert_eq!(Transition::parse(&t.to_string()), Some(t));
    }

    #[test]
    fn dismount_timeout_is_derived_unless_configured() {
        let mut config = RippleConfig {
            splash_transition: Transition::new(200, "linear"),
            fade_transition: Transition::new(100, "linear"),
            ..RippleConfig::default()
        };
        assert_eq!(config.dismount_timeout(), 450);
        config.dismounting_timeout = Some(300);
        assert_eq!(config.dismount_timeout(), 300);
    }

    #[test]
    fn emit_delay_respects_delay_event() {
        let mut config = RippleConfig {
            delay_value: 120,
            ..RippleConfig::default()
        };
        assert_eq!(config.emit_delay(), 120);
        config.delay_event = false;
        assert_eq!(config.emit_delay(), 0);
    }

    #[test]
    fn light_flag_selects_colour_variants() {
        let config = RippleConfig {
            light: true,
            ..RippleConfig::default()
        };
        assert_eq!(config.core().color, config.ripple_light_bg_color);
        assert_eq!(config.background().color, config.active_light_bg_color);

        let config = RippleConfig::default();
        assert_eq!(config.core().color, config.ripple_default_bg_color);
        assert_eq!(config.background().color, config.active_default_bg_color);
        assert_eq!(
            config.background().fade_transition,
            config.bg_fade_transition
        );
    }

    #[test]
    fn instance_wins_over_custom_and_global() {
        let global = RippleOptions {
            tap_limit: Some(400),
            splash_opacity: Some(0.2),
            fixed: Some(true),
            ..RippleOptions::default()
        };
        let custom = RippleOptions {
            tap_limit: Some(500),
            splash_opacity: Some(0.4),
            ..RippleOptions::default()
        };
        let instance = RippleOptions {
            tap_limit: Some(650),
            ..RippleOptions::default()
        };
        // Pushed out of order on purpose.
        let config = ConfigCascadeBuilder::new(RippleConfig::default())
            .push(ConfigOrigin::Instance, instance)
            .push(ConfigOrigin::Global, global)
            .push(ConfigOrigin::Custom, custom)
            .build()
            .resolve();
        assert_eq!(config.tap_limit, 650);
        assert_eq!(config.splash_opacity, 0.4);
        assert!(config.fixed);
    }

    #[test]
    fn invalid_values_fall_through_to_lower_layers() {
        let global = RippleOptions {
            fill_transition: Some("900ms linear".into()),
            ..RippleOptions::default()
        };
        let instance = RippleOptions {
            fill_transition: Some("slow".into()),
            splash_opacity: Some(f64::NAN),
            active_class: Some("two words".into()),
            ripple_default_bg_color: Some("   ".into()),
            ..RippleOptions::default()
        };
        let defaults = RippleConfig::default();
        let config = ConfigCascadeBuilder::new(defaults.clone())
            .push(ConfigOrigin::Global, global)
            .push(ConfigOrigin::Instance, instance)
            .build()
            .resolve();
        assert_eq!(config.fill_transition, Transition::new(900, "linear"));
        assert_eq!(config.splash_opacity, defaults.splash_opacity);
        assert_eq!(config.active_class, defaults.active_class);
        assert_eq!(
            config.ripple_default_bg_color,
            defaults.ripple_default_bg_color
        );
    }

    #[test]
    fn attributes_map_flags_and_values() {
        let options = RippleOptions::from_attributes([
            ("light", ""),
            ("centered-ripple", ""),
            ("fixed-ripple", ""),
            ("immediate-event", ""),
            ("tapLimit", "700"),
            ("splashopacity", "0.5"),
            ("rippleBgColor", "red"),
            ("activebgcolor", "blue"),
            ("fillTransition", "900ms linear"),
            ("activeClass", "is-pressed"),
            ("dismountingTimeout", "300ms"),
            ("href", "#"),
        ]);
        assert_eq!(options.light, Some(true));
        assert_eq!(options.centered, Some(true));
        assert_eq!(options.fixed, Some(true));
        assert_eq!(options.delay_event, Some(false));
        assert_eq!(options.tap_limit, Some(700));
        assert_eq!(options.splash_opacity, Some(0.5));
        assert_eq!(options.ripple_default_bg_color.as_deref(), Some("red"));
        assert_eq!(options.active_default_bg_color.as_deref(), Some("blue"));
        assert_eq!(options.fill_transition.as_deref(), Some("900ms linear"));
        assert_eq!(options.active_class.as_deref(), Some("is-pressed"));
        assert_eq!(options.dismounting_timeout, Some(300));
    }

    #[test]
    fn malformed_numeric_attributes_are_dropped() {
        let mut options = RippleOptions::default();
        assert!(options.set_attribute("tapLimit", "soon"));
        assert!(options.set_attribute("splashOpacity", "lots"));
        assert!(!options.set_attribute("tabindex", "0"));
        assert_eq!(options.tap_limit, None);
        assert_eq!(options.splash_opacity, None);

        let config = ConfigCascadeBuilder::new(RippleConfig::default())
            .push(ConfigOrigin::Instance, options)
            .build()
            .resolve();
        assert_eq!(config, RippleConfig::default());
    }

    #[test]
    fn push_opt_skips_missing_layers() {
        let cascade = ConfigCascadeBuilder::new(RippleConfig::default())
            .push_opt(ConfigOrigin::Global, None)
            .push_opt(ConfigOrigin::Custom, Some(RippleOptions::default()))
            .build();
        assert_eq!(cascade.len(), 1);
        assert!(!cascade.is_empty());
        assert_eq!(cascade.defaults(), &RippleConfig::default());
    }
}
