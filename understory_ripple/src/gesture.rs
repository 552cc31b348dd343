// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture vocabulary, classification, and duplicate suppression.
//!
//! ## Classification
//!
//! Given the configured tap limit `T`:
//!
//! - If the press timer already fired, the release is a [`Gesture::PressUp`].
//! - Else a release at `elapsed <= T` is a [`Gesture::Tap`] (touch) or
//!   [`Gesture::Click`] (mouse).
//! - Else it is a [`Gesture::PressUp`].
//!
//! ```
//! use understory_ripple::gesture::{classify, Gesture, InputKind};
//!
//! assert_eq!(classify(false, 600, 600, InputKind::Touch), Gesture::Tap);
//! assert_eq!(classify(false, 120, 600, InputKind::Mouse), Gesture::Click);
//! assert_eq!(classify(false, 601, 600, InputKind::Touch), Gesture::PressUp);
//! assert_eq!(classify(true, 10, 600, InputKind::Mouse), Gesture::PressUp);
//! ```

use core::fmt;

use kurbo::Point;

/// Physical input device behind a pointer sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Mouse (or any pointer that can hover and leave).
    Mouse,
    /// Touch or pen contact.
    Touch,
}

impl InputKind {
    /// Detects the input kind from a native event or pointer type name.
    ///
    /// `touchstart`, `touch`, `pen` and friends map to [`InputKind::Touch`];
    /// everything else is a mouse.
    #[must_use]
    pub fn from_event_type(name: &str) -> Self {
        let name = name.trim();
        let starts = |prefix: &str| {
            name.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        };
        if starts("touch") || starts("pen") {
            Self::Touch
        } else {
            Self::Mouse
        }
    }
}

/// A classified interaction, as observed by the external listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Short touch contact.
    Tap,
    /// Contact held past the tap limit; fired while still held.
    Press,
    /// Release after a press (or any release past the tap limit).
    PressUp,
    /// Short mouse contact.
    Click,
}

impl Gesture {
    /// Event name: `tap`, `press`, `pressup` or `click`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tap => "tap",
            Self::Press => "press",
            Self::PressUp => "pressup",
            Self::Click => "click",
        }
    }

    /// Returns `true` for the gestures whose emission waits for the configured delay.
    #[must_use]
    pub const fn is_delayed(self) -> bool {
        matches!(self, Self::Tap | Self::Click)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a release. See the [module docs](self).
#[must_use]
pub fn classify(pressing: bool, elapsed_ms: u64, tap_limit: u64, input: InputKind) -> Gesture {
    if pressing || elapsed_ms > tap_limit {
        Gesture::PressUp
    } else {
        match input {
            InputKind::Touch => Gesture::Tap,
            InputKind::Mouse => Gesture::Click,
        }
    }
}

/// Where and how a session started.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Screen-space contact point.
    pub point: Point,
    /// Device that produced the contact.
    pub input: InputKind,
}

/// Collapses identical gestures emitted within a short window.
///
/// Duplicate native sources (touch plus the synthesized mouse events of the
/// same physical tap) would otherwise report one interaction twice.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    last: Option<(Gesture, u64)>,
    window_ms: u64,
}

impl Debouncer {
    /// Creates a debouncer with the given repeat window.
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            last: None,
            window_ms,
        }
    }

    /// Returns `true` if `gesture` at `now` should be emitted, and records it.
    ///
    /// Rejected gestures are not recorded, so a stream of duplicates cannot
    /// keep extending the window.
    pub fn admit(&mut self, gesture: Gesture, now: u64) -> bool {
        if let Some((last, at)) = self.last
            && last == gesture
            && now.saturating_sub(at) < self.window_ms
        {
            return false;
        }
        self.last = Some((gesture, now));
        true
    }

    /// Last emitted gesture and its timestamp.
    #[must_use]
    pub fn last(&self) -> Option<(Gesture, u64)> {
        self.last
    }

    /// Forgets the last emitted gesture.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
