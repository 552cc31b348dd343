// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion tracker: timestamps and positions of one pointer session.
//!
//! ## Usage
//!
//! 1) Call [`MotionTracker::start`] on pointer down.
//! 2) Call [`MotionTracker::update`] on each move; it returns the delta since the last sample.
//! 3) Call [`MotionTracker::end`] on release, then read [`MotionTracker::duration`].
//! 4) [`MotionTracker::reset`] before the next session.
//!
//! Velocities are in pixels per 100 ms, measured from the down sample to the
//! latest move sample.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_ripple::motion::MotionTracker;
//!
//! let mut motion = MotionTracker::default();
//! motion.start(Point::new(10.0, 20.0), 1_000);
//! assert_eq!(motion.update(Point::new(30.0, 20.0), 1_100), Some(Vec2::new(20.0, 0.0)));
//! assert_eq!(motion.velocity(), Some(Vec2::new(20.0, 0.0)));
//! assert_eq!(motion.average_velocity(), Some(10.0));
//! motion.end(Point::new(30.0, 20.0), 1_250);
//! assert_eq!(motion.duration(), Some(250));
//! ```

use kurbo::{Point, Vec2};

/// A position at a point in time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionSample {
    /// Screen-space position.
    pub position: Point,
    /// Timestamp in milliseconds.
    pub timestamp: u64,
}

/// Tracks the down, latest move, and up samples of a pointer session.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MotionTracker {
    /// Sample recorded at pointer down.
    pub down: Option<MotionSample>,
    /// Most recent move sample.
    pub last_move: Option<MotionSample>,
    /// Sample recorded at release.
    pub up: Option<MotionSample>,
}

impl MotionTracker {
    /// Starts tracking a new session, discarding any previous samples.
    pub fn start(&mut self, position: Point, timestamp: u64) {
        *self = Self {
            down: Some(MotionSample {
                position,
                timestamp,
            }),
            last_move: None,
            up: None,
        };
    }

    /// Records a move and returns the delta since the previous sample.
    ///
    /// Returns `None` when no session is being tracked.
    pub fn update(&mut self, position: Point, timestamp: u64) -> Option<Vec2> {
        let previous = self.last_move.or(self.down)?;
        self.last_move = Some(MotionSample {
            position,
            timestamp,
        });
        Some(position - previous.position)
    }

    /// Records the release sample.
    pub fn end(&mut self, position: Point, timestamp: u64) {
        if self.down.is_some() {
            self.up = Some(MotionSample {
                position,
                timestamp,
            });
        }
    }

    /// Clears all samples.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` between [`start`](Self::start) and [`reset`](Self::reset).
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.down.is_some()
    }

    /// Time from down to release, once released.
    #[must_use]
    pub fn duration(&self) -> Option<u64> {
        let (down, up) = (self.down?, self.up?);
        Some(up.timestamp.saturating_sub(down.timestamp))
    }

    /// Time from down to `now`.
    #[must_use]
    pub fn elapsed(&self, now: u64) -> Option<u64> {
        self.down.map(|down| now.saturating_sub(down.timestamp))
    }

    /// Per-axis speed from down to the latest move, in pixels per 100 ms.
    ///
    /// `None` without a move sample or when no time has passed.
    #[must_use]
    pub fn velocity(&self) -> Option<Vec2> {
        let (down, last) = (self.down?, self.last_move?);
        let dt = last.timestamp.checked_sub(down.timestamp)?;
        if dt == 0 {
            return None;
        }
        let dt = dt as f64;
        let d = last.position - down.position;
        Some(Vec2::new(
            magnitude(d.x) / dt * 100.0,
            magnitude(d.y) / dt * 100.0,
        ))
    }

    /// Mean of the two per-axis speeds.
    #[must_use]
    pub fn average_velocity(&self) -> Option<f64> {
        self.velocity().map(|v| 0.5 * (v.x + v.y))
    }
}

fn magnitude(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_tracking() {
        let motion = MotionTracker::default();
        assert!(!motion.is_tracking());
        assert_eq!(motion.duration(), None);
        assert_eq!(motion.velocity(), None);
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut motion = MotionTracker::default();
        assert_eq!(motion.update(Point::new(1.0, 1.0), 5), None);
        assert!(motion.last_move.is_none());
        motion.end(Point::ZERO, 10);
        assert!(motion.up.is_none());
    }

    #[test]
    fn deltas_are_incremental() {
        let mut motion = MotionTracker::default();
        motion.start(Point::new(0.0, 0.0), 0);
        assert_eq!(
            motion.update(Point::new(3.0, 4.0), 10),
            Some(Vec2::new(3.0, 4.0))
        );
        assert_eq!(
            motion.update(Point::new(5.0, 4.0), 20),
            Some(Vec2::new(2.0, 0.0))
        );
    }

    #[test]
    fn velocity_is_absolute_per_axis() {
        let mut motion = MotionTracker::default();
        motion.start(Point::new(100.0, 100.0), 0);
        motion.update(Point::new(80.0, 130.0), 200);
        assert_eq!(motion.velocity(), Some(Vec2::new(10.0, 15.0)));
        assert_eq!(motion.average_velocity(), Some(12.5));
    }

    #[test]
    fn zero_elapsed_has_no_velocity() {
        let mut motion = MotionTracker::default();
        motion.start(Point::ZERO, 50);
        motion.update(Point::new(10.0, 0.0), 50);
        assert_eq!(motion.velocity(), None);
    }

    #[test]
    fn start_discards_previous_session() {
        let mut motion = MotionTracker::default();
        motion.start(Point::ZERO, 0);
        motion.update(Point::new(1.0, 0.0), 10);
        motion.end(Point::new(1.0, 0.0), 20);
        motion.start(Point::new(5.0, 5.0), 100);
        assert!(motion.last_move.is_none());
        assert!(motion.up.is_none());
        assert_eq!(motion.elapsed(130), Some(30));
        motion.reset();
        assert_eq!(motion.elapsed(130), None);
    }
}
