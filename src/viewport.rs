//! Pixel canvas size and the mapping between normalized and pixel space.
//!
//! x-axis quantities scale by the canvas width and y-axis quantities by its
//! height. Circle radii scale by the smaller of the two so circles stay round
//! on non-square canvases; the same normalized radius therefore covers a
//! different fraction of each axis depending on aspect ratio.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::shape::{Point, Polygon, Shape};

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Normalized point to pixel coordinates.
    #[must_use]
    pub fn to_pixels(&self, p: Point) -> Point {
        Point::new(p.x * self.width, p.y * self.height)
    }

    /// Pixel coordinates (e.g. a pointer position) to a normalized point.
    ///
    /// A zero-length axis maps to `0` instead of dividing by zero.
    #[must_use]
    pub fn to_normalized(&self, x_px: f64, y_px: f64) -> Point {
        Point::new(ratio(x_px, self.width), ratio(y_px, self.height))
    }

    /// Scale factor applied to circle radii.
    #[must_use]
    pub fn radius_scale(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Project a normalized shape into pixel space.
    ///
    /// Returns `None` for a polygon with fewer than three points.
    #[must_use]
    pub fn project(&self, shape: &Shape) -> Option<Primitive> {
        let primitive = match shape {
            Shape::Rectangle(r) => Primitive::Rect {
                x: r.x * self.width,
                y: r.y * self.height,
                width: r.width * self.width,
                height: r.height * self.height,
            },
            Shape::Circle(c) => Primitive::Circle {
                center: self.to_pixels(c.center()),
                radius: c.radius * self.radius_scale(),
            },
            Shape::Ellipse(e) => Primitive::Ellipse {
                center: self.to_pixels(e.center()),
                radius_x: e.radius_x * self.width,
                radius_y: e.radius_y * self.height,
            },
            Shape::Polygon(poly) => return self.project_polygon(poly),
        };
        Some(primitive)
    }

    /// Project a polygon's vertices; `None` when it has fewer than three.
    #[must_use]
    pub fn project_polygon(&self, polygon: &Polygon) -> Option<Primitive> {
        if polygon.is_degenerate() {
            return None;
        }
        Some(Primitive::Polygon(polygon.points.iter().map(|p| self.to_pixels(*p)).collect()))
    }
}

fn ratio(px: f64, extent: f64) -> f64 {
    if extent == 0.0 { 0.0 } else { px / extent }
}

/// A shape in pixel space, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { center: Point, radius: f64 },
    Ellipse { center: Point, radius_x: f64, radius_y: f64 },
    /// At least three vertices; closed back to the first when drawn.
    Polygon(Vec<Point>),
}
