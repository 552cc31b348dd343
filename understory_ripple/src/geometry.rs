// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host geometry: shape, size, and centre facts derived from a host's bounding box.
//!
//! ## Usage
//!
//! 1) On every pointer down, read the host's bounding box and computed
//!    `border-radius` and call [`HostGeometry::measure`] (or
//!    [`HostGeometry::recalculate`] to reuse an existing value).
//! 2) Size the ripple body with [`HostGeometry::core_frame`] so that a circle
//!    growing from the contact point covers the whole host.
//! 3) Feed the geometry to the [`containment`](crate::containment) predicates
//!    while the pointer moves.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_ripple::geometry::{BorderRadius, HostGeometry};
//!
//! let round = HostGeometry::measure(
//!     Rect::new(100.0, 100.0, 200.0, 200.0),
//!     &BorderRadius::parse("50%"),
//! );
//! assert!(round.is_round);
//! assert_eq!(round.diameter, 100.0);
//! assert_eq!(round.center, Point::new(150.0, 150.0));
//!
//! let card = HostGeometry::measure(Rect::new(0.0, 0.0, 30.0, 40.0), &BorderRadius::parse("4px"));
//! assert!(!card.is_round);
//! assert_eq!(card.diameter, 50.0);
//! assert_eq!(card.margin.top, -5.0);
//! ```

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

/// One component of a computed `border-radius` value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RadiusValue {
    /// A percentage of the corresponding box dimension.
    Percent(f64),
    /// An absolute length in pixels.
    Length(f64),
}

impl RadiusValue {
    fn parse(token: &str) -> Self {
        let token = token.trim();
        if let Some(pct) = token.strip_suffix('%') {
            return match pct.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Self::Percent(v),
                _ => Self::Length(0.0),
            };
        }
        let length = token.strip_suffix("px").unwrap_or(token).trim();
        match length.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Length(v),
            _ => Self::Length(0.0),
        }
    }

    fn is_full_circle(self, width: f64, height: f64) -> bool {
        match self {
            Self::Percent(pct) => pct >= 50.0,
            Self::Length(len) => len > 0.0 && len >= 0.5 * width.min(height),
        }
    }
}

/// A parsed computed `border-radius` style.
///
/// Shorthand forms (`"50% 50%"`, `"8px / 4px"`) keep every component; the
/// host only counts as a circle when all of them are.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderRadius {
    values: SmallVec<[RadiusValue; 4]>,
}

impl BorderRadius {
    /// Parses a computed style string. Unparsable components count as `0px`.
    #[must_use]
    pub fn parse(style: &str) -> Self {
        let values = style
            .split(|c: char| c.is_whitespace() || c == '/')
            .filter(|t| !t.is_empty())
            .map(RadiusValue::parse)
            .collect();
        Self { values }
    }

    /// Returns the parsed components.
    #[must_use]
    pub fn values(&self) -> &[RadiusValue] {
        &self.values
    }

    /// Returns `true` if this radius rounds a `width × height` box into a full ellipse.
    #[must_use]
    pub fn is_full_circle(&self, width: f64, height: f64) -> bool {
        !self.values.is_empty() && self.values.iter().all(|v| v.is_full_circle(width, height))
    }
}

/// Offset of the ripple body relative to the host's top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Margin {
    /// Vertical offset.
    pub top: f64,
    /// Horizontal offset.
    pub left: f64,
}

/// Measured facts about a host element.
///
/// A host is **round** when its border radius is a full circle *and* its width
/// equals its height. Fully-rounded non-square hosts (pills, ellipses) are
/// treated as rectangles.
#[derive(Clone, Debug, PartialEq)]
pub struct HostGeometry {
    /// Bounding box in screen space.
    pub rect: Rect,
    /// Computed border radius.
    pub border_radius: BorderRadius,
    /// Whether the host is a circle.
    pub is_round: bool,
    /// Diameter of a circle that covers the whole host when centred on it.
    pub diameter: f64,
    /// Half of the host width.
    pub radius: f64,
    /// `radius * radius`.
    pub radius_squared: f64,
    /// Centre of the bounding box.
    pub center: Point,
    /// Offset that centres a `diameter`-sized square on the host.
    pub margin: Margin,
}

impl HostGeometry {
    /// Measures a host from its bounding box and computed border radius.
    #[must_use]
    pub fn measure(rect: Rect, border_radius: &BorderRadius) -> Self {
        let rect = rect.abs();
        let (width, height) = (rect.width(), rect.height());
        let is_round =
            width > 0.0 && width == height && border_radius.is_full_circle(width, height);
        let diameter = if is_round {
            width
        } else {
            Vec2::new(width, height).hypot()
        };
        let radius = 0.5 * width;
        let margin = if is_round {
            Margin::default()
        } else {
            Margin {
                top: 0.5 * (height - diameter),
                left: 0.5 * (width - diameter),
            }
        };
        Self {
            rect,
            border_radius: border_radius.clone(),
            is_round,
            diameter,
            radius,
            radius_squared: radius * radius,
            center: rect.center(),
            margin,
        }
    }

    /// Re-measures in place. Returns `true` if anything changed.
    pub fn recalculate(&mut self, rect: Rect, border_radius: &BorderRadius) -> bool {
        let rect = rect.abs();
        if rect == self.rect && *border_radius == self.border_radius {
            return false;
        }
        *self = Self::measure(rect, border_radius);
        true
    }

    /// Returns `true` for hosts with no usable area (zero, negative, or non-finite size).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = (self.rect.width(), self.rect.height());
        !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0
    }

    /// Host width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Host height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Vector from the host centre to `point`.
    #[must_use]
    pub fn offset_from_center(&self, point: Point) -> Vec2 {
        point - self.center
    }

    /// Bounds of the ripple body in host-local coordinates.
    #[must_use]
    pub fn core_frame(&self) -> Rect {
        Rect::from_origin_size(
            (self.margin.left, self.margin.top),
            (self.diameter, self.diameter),
        )
    }

    /// Bounds of the background overlay in host-local coordinates.
    #[must_use]
    pub fn background_frame(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.rect.size())
    }

    /// Scale of a ripple body whose current on-screen width is `core_width`.
    ///
    /// A host with a zero diameter reports full scale.
    #[must_use]
    pub fn scale_for_width(&self, core_width: f64) -> f64 {
        if self.diameter > 0.0 && core_width.is_finite() {
            core_width / self.diameter
        } else {
            1.0
        }
    }
}

impl Default for HostGeometry {
    fn default() -> Self {
        Self::measure(Rect::ZERO, &BorderRadius::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_host() -> HostGeometry {
        HostGeometry::measure(
            Rect::new(100.0, 100.0, 200.0, 200.0),
            &BorderRadius::parse("50%"),
        )
    }

    #[test]
    fn round_host_uses_width_as_diameter() {
        let g = round_host();
        assert!(g.is_round);
        assert_eq!(g.diameter, g.width());
        assert_eq!(g.radius, 50.0);
        assert_eq!(g.radius_squared, 2500.0);
        assert_eq!(g.center, Point::new(150.0, 150.0));
        assert_eq!(g.margin, Margin::default());
    }

    #[test]
    fn rectangle_uses_diagonal_and_centres_body() {
        let g = HostGeometry::measure(Rect::new(0.0, 0.0, 60.0, 80.0), &BorderRadius::parse("0px"));
        assert!(!g.is_round);
        assert_eq!(g.diameter, 100.0);
        assert_eq!(g.margin.top, 0.5 * (80.0 - 100.0));
        assert_eq!(g.margin.left, 0.5 * (60.0 - 100.0));
        assert_eq!(g.core_frame(), Rect::new(-20.0, -10.0, 80.0, 90.0));
    }

    #[test]
    fn fully_rounded_pill_is_not_round() {
        let g = HostGeometry::measure(
            Rect::new(0.0, 0.0, 120.0, 40.0),
            &BorderRadius::parse("50%"),
        );
        assert!(!g.is_round);
        assert_eq!(g.diameter, Vec2::new(120.0, 40.0).hypot());
        assert!(g.margin.top != 0.0);
    }

    #[test]
    fn pixel_radius_can_make_a_circle() {
        let g = HostGeometry::measure(
            Rect::new(0.0, 0.0, 48.0, 48.0),
            &BorderRadius::parse("24px"),
        );
        assert!(g.is_round);
        let g = HostGeometry::measure(
            Rect::new(0.0, 0.0, 48.0, 48.0),
            &BorderRadius::parse("23px"),
        );
        assert!(!g.is_round);
    }

    #[test]
    fn shorthand_requires_every_component_to_be_full() {
        assert!(BorderRadius::parse("50% 50%").is_full_circle(10.0, 10.0));
        assert!(!BorderRadius::parse("50% 2px").is_full_circle(10.0, 10.0));
        assert!(!BorderRadius::parse("").is_full_circle(10.0, 10.0));
        assert_eq!(BorderRadius::parse("8px / 4px").values().len(), 2);
    }

    #[test]
    fn garbage_radius_counts_as_square() {
        let r = BorderRadius::parse("banana");
        assert_eq!(r.values(), &[RadiusValue::Length(0.0)]);
        assert!(!r.is_full_circle(10.0, 10.0));
    }

    #[test]
    fn zero_size_host_is_degenerate_and_safe() {
        let g = HostGeometry::measure(Rect::new(5.0, 5.0, 5.0, 30.0), &BorderRadius::parse("50%"));
        assert!(g.is_degenerate());
        assert!(!g.is_round);
        assert_eq!(g.scale_for_width(10.0), 0.4);
        let empty = HostGeometry::default();
        assert!(empty.is_degenerate());
        assert_eq!(empty.diameter, 0.0);
        assert_eq!(empty.scale_for_width(12.0), 1.0);
    }

    #[test]
    fn recalculate_reports_changes_only() {
        let mut g = round_host();
        let radius = BorderRadius::parse("50%");
        assert!(!g.recalculate(
            Rect::new(100.0, 100.0, 200.0, 200.0),
            &radius,
        ));
        assert!(g.recalculate(
            Rect::new(110.0, 100.0, 210.0, 200.0),
            &radius,
        ));
        assert_eq!(g.center, Point::new(160.0, 150.0));
    }

    #[test]
    fn unnormalized_rect_is_measured_by_extent() {
        let g = HostGeometry::measure(
            Rect::new(200.0, 200.0, 100.0, 100.0),
            &BorderRadius::parse("50%"),
        );
        assert!(g.is_round);
        assert_eq!(g.rect, Rect::new(100.0, 100.0, 200.0, 200.0));
    }
}
