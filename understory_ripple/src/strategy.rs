// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-device pointer handling, selected once at pointer down.
//!
//! A [`PointerStrategy`] decides which native listeners a session needs, what
//! a move should do to the ripple, and how a session end is classified.
//! Mice listen for move, up and leave; touch contacts cannot leave a host, so
//! they listen for move and up only.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_ripple::geometry::{BorderRadius, HostGeometry};
//! use understory_ripple::gesture::{Gesture, InputKind};
//! use understory_ripple::strategy::{EndKind, MoveAction, PointerStrategy};
//!
//! let host = HostGeometry::measure(
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     &BorderRadius::parse("50%"),
//! );
//! let mouse = PointerStrategy::for_input(InputKind::Mouse);
//!
//! let centre = Point::new(50.0, 50.0);
//! assert_eq!(mouse.on_move(&host, false, centre, 20.0), MoveAction::Translate);
//! assert_eq!(mouse.on_move(&host, false, Point::new(0.0, 50.0), 20.0), MoveAction::End);
//! assert_eq!(mouse.on_end(EndKind::Release, false, 120, 600), Some(Gesture::Click));
//! assert_eq!(mouse.on_end(EndKind::Leave, false, 120, 600), None);
//! assert_eq!(mouse.on_end(EndKind::Moved, false, 120, 600), None);
//! ```

use kurbo::Point;

use crate::containment::{center_still_in_host_area, outer_point_still_in_host_radius};
use crate::geometry::HostGeometry;
use crate::gesture::{Gesture, InputKind, classify};
use crate::host::{HostElement, PointerListeners};

/// A native pointer notification forwarded by the embedder.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Screen-space pointer position.
    pub position: Point,
    /// Device that produced the event.
    pub input: InputKind,
    /// Event timestamp in milliseconds, on the same clock as the scheduler.
    pub timestamp: u64,
}

impl PointerInput {
    /// Creates a pointer input.
    #[must_use]
    pub fn new(position: impl Into<Point>, input: InputKind, timestamp: u64) -> Self {
        Self {
            position: position.into(),
            input,
            timestamp,
        }
    }
}

/// What a pointer move means for the live session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveAction {
    /// The pointer left the host area, or the ripple is fixed: end the session.
    End,
    /// Follow the pointer.
    Translate,
    /// Keep the ripple where it is; following would overflow the host.
    Freeze,
}

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EndKind {
    /// Native pointer up or touch end.
    Release,
    /// Native mouse leave. Always silent.
    Leave,
    /// A move left the host area, or any move on a fixed ripple. The drag
    /// is cancelled, so this is silent too.
    Moved,
    /// A new pointer down arrived before this session was released. Silent.
    Superseded,
}

/// Device-specific pointer handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerStrategy {
    /// Mouse and hover-capable pointers.
    Mouse,
    /// Touch and pen contacts.
    Touch,
}

impl PointerStrategy {
    /// Selects the strategy for an input kind.
    #[must_use]
    pub const fn for_input(input: InputKind) -> Self {
        match input {
            InputKind::Mouse => Self::Mouse,
            InputKind::Touch => Self::Touch,
        }
    }

    /// The input kind this strategy serves.
    #[must_use]
    pub const fn input(self) -> InputKind {
        match self {
            Self::Mouse => InputKind::Mouse,
            Self::Touch => InputKind::Touch,
        }
    }

    /// Listeners required while a session is live.
    #[must_use]
    pub const fn listeners(self) -> PointerListeners {
        match self {
            Self::Mouse => PointerListeners::MOVE
                .union(PointerListeners::UP)
                .union(PointerListeners::LEAVE),
            Self::Touch => PointerListeners::MOVE.union(PointerListeners::UP),
        }
    }

    /// Asks the host to start delivering session events.
    pub fn attach<H: HostElement + ?Sized>(self, host: &mut H) {
        host.add_listeners(self.listeners());
    }

    /// Asks the host to stop delivering session events.
    pub fn detach<H: HostElement + ?Sized>(self, host: &mut H) {
        host.remove_listeners(self.listeners());
    }

    /// Returns `true` if this strategy ends a session on `kind`.
    ///
    /// Touch strategies ignore [`EndKind::Leave`].
    #[must_use]
    pub const fn ends_on(self, kind: EndKind) -> bool {
        !matches!((self, kind), (Self::Touch, EndKind::Leave))
    }

    /// Decides what a move to `point` does, given the ripple body's current width.
    #[must_use]
    pub fn on_move(
        self,
        host: &HostGeometry,
        fixed: bool,
        point: Point,
        current_width: f64,
    ) -> MoveAction {
        if fixed || !center_still_in_host_area(host, point) {
            MoveAction::End
        } else if outer_point_still_in_host_radius(host, point, current_width) {
            MoveAction::Translate
        } else {
            MoveAction::Freeze
        }
    }

    /// Classifies a session end. Silent ends return `None`.
    ///
    /// Only releases are classified.
    #[must_use]
    pub fn on_end(
        self,
        kind: EndKind,
        pressing: bool,
        elapsed_ms: u64,
        tap_limit: u64,
    ) -> Option<Gesture> {
        match kind {
            EndKind::Release => Some(classify(pressing, elapsed_ms, tap_limit, self.input())),
            EndKind::Leave | EndKind::Moved | EndKind::Superseded => None,
        }
    }
}
