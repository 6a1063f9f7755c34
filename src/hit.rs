//! Hit-testing: is a normalized point inside a shape?
//!
//! Every predicate is pure and edge-inclusive where it has edges to include.
//! Degenerate input (fewer than three polygon points, zero ellipse radii)
//! answers `false` instead of failing, since annotations pass through such
//! states while they are being drawn.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::shape::{Circle, Ellipse, Point, Polygon, Rect, Shape};

/// Whether `p` lies in the closed box `[x, x + width] × [y, y + height]`.
#[must_use]
pub fn point_in_rectangle(p: Point, rect: &Rect) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.width && p.y >= rect.y && p.y <= rect.y + rect.height
}

/// Whether `p` lies within or on the circle. Compares squared distances.
#[must_use]
pub fn point_in_circle(p: Point, circle: &Circle) -> bool {
    let dx = p.x - circle.center_x;
    let dy = p.y - circle.center_y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

/// Whether `p` lies within or on the ellipse.
#[must_use]
pub fn point_in_ellipse(p: Point, ellipse: &Ellipse) -> bool {
    if ellipse.radius_x == 0.0 || ellipse.radius_y == 0.0 {
        return false;
    }
    let nx = (p.x - ellipse.center_x) / ellipse.radius_x;
    let ny = (p.y - ellipse.center_y) / ellipse.radius_y;
    nx * nx + ny * ny <= 1.0
}

/// Odd-even ray casting toward +x.
///
/// Each edge that straddles `p.y` and crosses the ray to the right of `p`
/// flips the result. Winding direction and starting vertex do not matter;
/// self-intersecting polygons follow the odd-even rule.
#[must_use]
pub fn point_in_polygon(p: Point, polygon: &Polygon) -> bool {
    if polygon.is_degenerate() {
        return false;
    }

    let pts = &polygon.points;
    let mut inside = false;
    let mut j = pts.len() - 1;
    for (i, vi) in pts.iter().enumerate() {
        let vj = &pts[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            // Orient the edge bottom-up so both windings compute the same crossing.
            let (lo, hi) = if vi.y < vj.y { (vi, vj) } else { (vj, vi) };
            // lo.y < hi.y here, so the division is safe.
            let cross_x = (hi.x - lo.x) * (p.y - lo.y) / (hi.y - lo.y) + lo.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

impl Shape {
    /// Whether `p` is inside this shape.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Rectangle(r) => point_in_rectangle(p, r),
            Self::Circle(c) => point_in_circle(p, c),
            Self::Ellipse(e) => point_in_ellipse(p, e),
            Self::Polygon(poly) => point_in_polygon(p, poly),
        }
    }
}

/// Indices of every shape containing `p`, in input order.
///
/// Overlaps are reported as-is; choosing among them is the caller's call.
pub fn hits(p: Point, shapes: &[Shape]) -> impl Iterator<Item = usize> + '_ {
    shapes
        .iter()
        .enumerate()
        .filter(move |(_, s)| s.contains(p))
        .map(|(i, _)| i)
}
