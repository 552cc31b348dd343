// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment predicates over a [`HostGeometry`] and a screen-space point.
//!
//! Both predicates are boundary-exclusive: a point lying exactly on the host's
//! circle or rectangle edge is outside.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_ripple::containment::center_still_in_host_area;
//! use understory_ripple::geometry::{BorderRadius, HostGeometry};
//!
//! let host = HostGeometry::measure(
//!     Rect::new(100.0, 100.0, 200.0, 200.0),
//!     &BorderRadius::parse("50%"),
//! );
//! assert!(center_still_in_host_area(&host, Point::new(150.0, 150.0)));
//! assert!(center_still_in_host_area(&host, Point::new(199.0, 150.0)));
//! assert!(!center_still_in_host_area(&host, Point::new(200.0, 150.0)));
//! ```

use kurbo::Point;

use crate::geometry::HostGeometry;

/// Squared distance from the host centre to `point`.
#[must_use]
pub fn squared_distance_from_center(host: &HostGeometry, point: Point) -> f64 {
    (point - host.center).hypot2()
}

/// Returns `true` while `point` is strictly inside the host's area.
///
/// Round hosts test against the inscribed circle, other hosts against the
/// open bounding rectangle.
#[must_use]
pub fn center_still_in_host_area(host: &HostGeometry, point: Point) -> bool {
    if host.is_round {
        squared_distance_from_center(host, point) < host.radius_squared
    } else {
        let r = host.rect;
        r.x0 < point.x && point.x < r.x1 && r.y0 < point.y && point.y < r.y1
    }
}

/// Returns `true` if a ripple body of width `current_width` centred on `point`
/// would still fit inside the host radius.
///
/// This is `|point - center|² < (radius - current_width / 2)²`.
#[must_use]
pub fn outer_point_still_in_host_radius(
    host: &HostGeometry,
    point: Point,
    current_width: f64,
) -> bool {
    let max = host.radius - 0.5 * current_width;
    squared_distance_from_center(host, point) < max * max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BorderRadius;
    use kurbo::Rect;

    fn round() -> HostGeometry {
        HostGeometry::measure(
            Rect::new(100.0, 100.0, 200.0, 200.0),
            &BorderRadius::parse("50%"),
        )
    }

    fn rectangle() -> HostGeometry {
        HostGeometry::measure(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            &BorderRadius::parse("4px"),
        )
    }

    #[test]
    fn round_host_centre_is_inside() {
        assert!(center_still_in_host_area(
            &round(),
            Point::new(150.0, 150.0),
        ));
    }

    #[test]
    fn round_host_boundary_is_outside() {
        let host = round();
        assert!(!center_still_in_host_area(&host, Point::new(200.0, 150.0)));
        assert!(!center_still_in_host_area(&host, Point::new(150.0, 100.0)));
        assert!(center_still_in_host_area(&host, Point::new(199.0, 150.0)));
    }

    #[test]
    fn round_host_corner_of_bounding_box_is_outside() {
        // Inside the rectangle but outside the circle.
        assert!(!center_still_in_host_area(
            &round(),
            Point::new(105.0, 105.0),
        ));
    }

    #[test]
    fn rectangle_edges_are_outside() {
        let host = rectangle();
        assert!(center_still_in_host_area(&host, Point::new(100.0, 50.0)));
        assert!(!center_still_in_host_area(&host, Point::new(0.0, 50.0)));
        assert!(!center_still_in_host_area(&host, Point::new(200.0, 50.0)));
        assert!(!center_still_in_host_area(&host, Point::new(100.0, 0.0)));
        assert!(!center_still_in_host_area(&host, Point::new(100.0, 100.0)));
        assert!(center_still_in_host_area(&host, Point::new(199.5, 99.5)));
    }

    #[test]
    fn outer_point_shrinks_with_body_width() {
        let host = round();
        let p = Point::new(170.0, 150.0);
        // Limit is (50 - 0)^2 = 2500 vs 400.
        assert!(outer_point_still_in_host_radius(&host, p, 0.0));
        // Limit is (50 - 30)^2 = 400; equality is outside.
        assert!(!outer_point_still_in_host_radius(&host, p, 60.0));
        assert!(outer_point_still_in_host_radius(&host, p, 59.0));
    }

    #[test]
    fn outer_point_matches_closed_form() {
        let host = rectangle();
        for (x, y, w) in [(100.0, 50.0, 10.0), (150.0, 80.0, 40.0), (20.0, 10.0, 5.0)] {
            let p = Point::new(x, y);
            let (dx, dy) = (x - host.center.x, y - host.center.y);
            let m = host.radius - 0.5 * w;
            let (d2, lim) = (dx * dx + dy * dy, m * m);
            assert_eq!(outer_point_still_in_host_radius(&host, p, w), d2 < lim);
        }
    }

    #[test]
    fn squared_distance_is_zero_at_centre() {
        let host = round();
        assert_eq!(squared_distance_from_center(&host, host.center), 0.0);
        assert_eq!(
            squared_distance_from_center(&host, Point::new(153.0, 154.0)),
            25.0
        );
    }
}
