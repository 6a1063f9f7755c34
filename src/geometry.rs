//! Derived geometry: bounds, rectangle to circle fitting, circle overlap.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::config::GeometryConfig;
use crate::shape::{Circle, Point, Rect, Shape};

/// How a rectangle is approximated by a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircleFit {
    /// Radius is half the shorter side; the circle fits inside the box.
    #[default]
    Inscribed,
    /// Radius is half the diagonal; the circle covers the box.
    Circumscribed,
}

impl std::fmt::Display for CircleFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inscribed => write!(f, "inscribed"),
            Self::Circumscribed => write!(f, "circumscribed"),
        }
    }
}

/// Error returned when parsing an unknown [`CircleFit`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown circle fit: {0}")]
pub struct UnknownCircleFit(pub String);

impl std::str::FromStr for CircleFit {
    type Err = UnknownCircleFit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inscribed" => Ok(Self::Inscribed),
            "circumscribed" => Ok(Self::Circumscribed),
            _ => Err(UnknownCircleFit(s.to_owned())),
        }
    }
}

/// Smallest axis-aligned box covering every point.
///
/// An empty slice yields a zero-sized box at the origin.
#[must_use]
pub fn polygon_bounds(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::default();
    };

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Approximate `rect` by a circle centered on its centroid.
#[must_use]
pub fn rect_to_circle(rect: &Rect, fit: CircleFit) -> Circle {
    let center = rect.center();
    let radius = match fit {
        CircleFit::Inscribed => rect.width.min(rect.height) / 2.0,
        CircleFit::Circumscribed => rect.width.hypot(rect.height) / 2.0,
    };
    Circle::new(center.x, center.y, radius)
}

/// Whether two circles overlap. Tangent circles do not.
#[must_use]
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    let dx = a.center_x - b.center_x;
    let dy = a.center_y - b.center_y;
    let reach = a.radius + b.radius;
    dx * dx + dy * dy < reach * reach
}

impl Rect {
    /// Circle approximation using the configured migration fit.
    #[must_use]
    pub fn to_circle_with(&self, config: &GeometryConfig) -> Circle {
        rect_to_circle(self, config.circle_fit)
    }
}

impl Shape {
    /// Axis-aligned bounding box of the shape.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rectangle(r) => *r,
            Self::Circle(c) => Rect::new(
                c.center_x - c.radius,
                c.center_y - c.radius,
                c.radius * 2.0,
                c.radius * 2.0,
            ),
            Self::Ellipse(e) => Rect::new(
                e.center_x - e.radius_x,
                e.center_y - e.radius_y,
                e.radius_x * 2.0,
                e.radius_y * 2.0,
            ),
            Self::Polygon(poly) => polygon_bounds(&poly.points),
        }
    }
}
