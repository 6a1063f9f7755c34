//! Annotation geometry core for photo hotspots.
//!
//! The vocabulary app overlays clickable regions on bird photographs. This
//! crate owns the geometry behind those regions: the shape model, point-in-shape
//! hit-testing, reconciliation of the two legacy bounding-box encodings, and the
//! projection of normalized shapes onto a pixel drawing surface. Everything is a
//! pure function over immutable values; the host owns input events, persistence,
//! and the canvas itself.
//!
//! All coordinates are normalized to the image: `x` and `y` in `[0, 1]` as a
//! fraction of width and height, origin top-left, `y` growing downward.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`shape`] | Shape variants and the flat/nested legacy box encodings |
//! | [`bbox`] | Conversion between box encodings and boundary normalization |
//! | [`hit`] | Point-in-shape predicates |
//! | [`geometry`] | Bounds, rectangle to circle fitting, circle overlap |
//! | [`viewport`] | Pixel canvas size and normalized/pixel conversions |
//! | [`render`] | Drawing-surface trait and per-shape render functions |
//! | [`config`] | Environment-driven settings |
//! | [`error`] | Boundary input errors |
//! | [`consts`] | Shared numeric constants and env keys |
//!
//! With the `web` feature, [`render::DrawingSurface`] is implemented for
//! `web_sys::CanvasRenderingContext2d`.

pub mod bbox;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod render;
pub mod shape;
pub mod viewport;
#[cfg(feature = "web")]
pub mod web;

pub use bbox::{normalize_for_boundary, to_canonical, to_flat_format, to_nested_format};
pub use config::GeometryConfig;
pub use error::InvalidShapeError;
pub use geometry::{CircleFit, circles_overlap, polygon_bounds, rect_to_circle};
pub use hit::{point_in_circle, point_in_ellipse, point_in_polygon, point_in_rectangle};
pub use render::{DrawingSurface, RenderStyle, render_shape};
pub use shape::{Circle, Ellipse, FlatBox, LegacyBox, NestedBox, Point, Polygon, Rect, Shape};
pub use viewport::{PixelSize, Primitive};
