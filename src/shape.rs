//! Shape model: the hotspot shape variants and the two legacy box encodings.
//!
//! Every type here is plain data. Coordinates are normalized to the image
//! (`[0, 1]` of width for `x`, of height for `y`), origin top-left. Nothing is
//! validated on construction; out-of-range values are geometrically valid and
//! simply describe a region outside the visible image.
//!
//! Serialized field names follow the producers that write them (`centerX`,
//! `topLeft`, ...), so these types read straight from stored annotation JSON.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A normalized 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box with `(x, y)` at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// Centroid of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A circle. `radius` is expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self { center_x, center_y, radius }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// An axis-aligned ellipse with independent horizontal and vertical radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ellipse {
    pub center_x: f64,
    pub center_y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    #[must_use]
    pub fn new(center_x: f64, center_y: f64, radius_x: f64, radius_y: f64) -> Self {
        Self { center_x, center_y, radius_x, radius_y }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

impl From<Circle> for Ellipse {
    fn from(c: Circle) -> Self {
        Self::new(c.center_x, c.center_y, c.radius, c.radius)
    }
}

/// An implicitly closed polygon; the last point connects back to the first.
///
/// Fewer than three points is a valid in-progress value (an annotation still
/// being authored) and is treated as enclosing nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Whether the polygon has too few vertices to enclose any area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < crate::consts::MIN_POLYGON_POINTS
    }
}

/// The closed set of hotspot shapes.
///
/// Serialized internally tagged: `{"type": "circle", "centerX": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rect),
    Circle(Circle),
    /// Draw-oriented extension of `Circle`.
    Ellipse(Ellipse),
    Polygon(Polygon),
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Self::Rectangle(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Self {
        Self::Ellipse(e)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}

// =============================================================
// Legacy box encodings
// =============================================================

/// Legacy flat box `{x, y, width, height}`, as written by the data layer.
///
/// Structurally identical to [`Rect`]; kept as its own type so the two box
/// encodings never mix silently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlatBox {
    pub x: f64,
    pub y: f64,
    #[serde(default, deserialize_with = "size_or_zero")]
    pub width: f64,
    #[serde(default, deserialize_with = "size_or_zero")]
    pub height: f64,
}

/// Stored size where a missing key and `null` both read as `0`.
pub(crate) fn size_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(0.0))
}

impl FlatBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

impl From<FlatBox> for Rect {
    fn from(b: FlatBox) -> Self {
        Self::new(b.x, b.y, b.width, b.height)
    }
}

impl From<Rect> for FlatBox {
    fn from(r: Rect) -> Self {
        Self::new(r.x, r.y, r.width, r.height)
    }
}

/// Legacy nested box `{topLeft, bottomRight, width, height}`, as written by
/// the annotation editor.
///
/// `width` and `height` are stored, not derived; they are expected to match
/// `bottom_right - top_left` but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedBox {
    pub top_left: Point,
    pub bottom_right: Point,
    pub width: f64,
    pub height: f64,
}

impl NestedBox {
    #[must_use]
    pub fn new(top_left: Point, bottom_right: Point, width: f64, height: f64) -> Self {
        Self { top_left, bottom_right, width, height }
    }

    /// Whether the corners agree with the stored size within `tolerance`.
    #[must_use]
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        let dw = (self.bottom_right.x - self.top_left.x) - self.width;
        let dh = (self.bottom_right.y - self.top_left.y) - self.height;
        dw.abs() <= tolerance && dh.abs() <= tolerance
    }
}

/// Either legacy box encoding.
///
/// Serializes as whichever encoding it holds. Deserialization goes through
/// [`normalize_for_boundary`](crate::bbox::normalize_for_boundary): a `topLeft`
/// key means nested, otherwise both `x` and `y` mean flat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LegacyBox {
    Nested(NestedBox),
    Flat(FlatBox),
}

impl<'de> Deserialize<'de> for LegacyBox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        crate::bbox::normalize_for_boundary(&value).map_err(D::Error::custom)
    }
}

impl From<FlatBox> for LegacyBox {
    fn from(b: FlatBox) -> Self {
        Self::Flat(b)
    }
}

impl From<NestedBox> for LegacyBox {
    fn from(b: NestedBox) -> Self {
        Self::Nested(b)
    }
}
