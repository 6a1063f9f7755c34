//! Rendering: paints normalized shapes onto a caller-owned drawing surface.
//!
//! [`DrawingSurface`] is the only seam that touches pixels. It mirrors the
//! subset of the Canvas 2D API this module issues; with the `web` feature it is
//! implemented for `web_sys::CanvasRenderingContext2d`.
//!
//! Each render call applies only the style options that are set, leaving the
//! rest of the surface state as the caller left it. The dash pattern and global
//! alpha are reset to solid and opaque after every shape so they never leak
//! into the next one drawn on the same surface.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{FULL_TURN, OPAQUE};
use crate::shape::{Circle, Ellipse, Polygon, Rect, Shape};
use crate::viewport::{PixelSize, Primitive};

/// The drawing operations rendering needs from a 2D surface.
///
/// Calls that a browser canvas can reject return `Result`.
pub trait DrawingSurface {
    type Error;

    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    /// An empty slice means a solid line.
    ///
    /// # Errors
    ///
    /// Surface-specific.
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), Self::Error>;
    fn set_fill_style(&mut self, style: &str);
    fn set_global_alpha(&mut self, alpha: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// # Errors
    ///
    /// Surface-specific (a browser canvas rejects negative radii).
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;
    /// # Errors
    ///
    /// Surface-specific (a browser canvas rejects negative radii).
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
    ) -> Result<(), Self::Error>;

    fn fill(&mut self);
    fn stroke(&mut self);
}

/// Style options for a single render call. `None` leaves the surface as is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderStyle {
    /// Outline color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_style: Option<String>,
    /// Outline thickness in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    /// Alternating dash/gap lengths in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_dash: Option<Vec<f64>>,
    /// Fill color. The shape is filled only when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_style: Option<String>,
    /// Opacity in `[0, 1]` applied to fill and stroke.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_alpha: Option<f64>,
}

impl RenderStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stroke(mut self, color: impl Into<String>) -> Self {
        self.stroke_style = Some(color.into());
        self
    }

    #[must_use]
    pub fn line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    #[must_use]
    pub fn dashed(mut self, segments: Vec<f64>) -> Self {
        self.line_dash = Some(segments);
        self
    }

    #[must_use]
    pub fn fill(mut self, color: impl Into<String>) -> Self {
        self.fill_style = Some(color.into());
        self
    }

    #[must_use]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.global_alpha = Some(alpha);
        self
    }
}

// =============================================================
// Per-shape entry points
// =============================================================

/// Draw a rectangle.
///
/// # Errors
///
/// Propagates any error from the surface.
pub fn render_rectangle<S: DrawingSurface>(
    surface: &mut S,
    rect: &Rect,
    size: PixelSize,
    style: &RenderStyle,
) -> Result<(), S::Error> {
    render_shape(surface, &Shape::Rectangle(*rect), size, style)
}

/// Draw a circle; the radius scales by the smaller canvas side.
///
/// # Errors
///
/// Propagates any error from the surface.
pub fn render_circle<S: DrawingSurface>(
    surface: &mut S,
    circle: &Circle,
    size: PixelSize,
    style: &RenderStyle,
) -> Result<(), S::Error> {
    render_shape(surface, &Shape::Circle(*circle), size, style)
}

/// Draw an ellipse; each radius scales by its own axis.
///
/// # Errors
///
/// Propagates any error from the surface.
pub fn render_ellipse<S: DrawingSurface>(
    surface: &mut S,
    ellipse: &Ellipse,
    size: PixelSize,
    style: &RenderStyle,
) -> Result<(), S::Error> {
    render_shape(surface, &Shape::Ellipse(*ellipse), size, style)
}

/// Draw a closed polygon. Fewer than three points draws nothing.
///
/// # Errors
///
/// Propagates any error from the surface.
pub fn render_polygon<S: DrawingSurface>(
    surface: &mut S,
    polygon: &Polygon,
    size: PixelSize,
    style: &RenderStyle,
) -> Result<(), S::Error> {
    let Some(primitive) = size.project_polygon(polygon) else {
        debug!(points = polygon.points.len(), "skipping degenerate polygon");
        return Ok(());
    };
    draw_primitive(surface, &primitive, style)
}

/// Draw any shape.
///
/// # Errors
///
/// Propagates any error from the surface.
pub fn render_shape<S: DrawingSurface>(
    surface: &mut S,
    shape: &Shape,
    size: PixelSize,
    style: &RenderStyle,
) -> Result<(), S::Error> {
    match shape {
        Shape::Polygon(poly) => render_polygon(surface, poly, size, style),
        _ => match size.project(shape) {
            Some(primitive) => draw_primitive(surface, &primitive, style),
            None => Ok(()),
        },
    }
}

// =============================================================
// Primitive drawing
// =============================================================

/// Apply `style`, trace and paint `primitive`, then reset dash and alpha.
///
/// The reset runs even when tracing fails, so surface state never leaks.
///
/// # Errors
///
/// Returns the first error raised by the surface.
pub fn draw_primitive<S: DrawingSurface>(
    surface: &mut S,
    primitive: &Primitive,
    style: &RenderStyle,
) -> Result<(), S::Error> {
    let painted = apply_style(surface, style).and_then(|()| paint(surface, primitive, style));
    let reset = reset_transient_state(surface);
    painted.and(reset)
}

fn apply_style<S: DrawingSurface>(surface: &mut S, style: &RenderStyle) -> Result<(), S::Error> {
    if let Some(stroke) = &style.stroke_style {
        surface.set_stroke_style(stroke);
    }
    if let Some(width) = style.line_width {
        surface.set_line_width(width);
    }
    if let Some(dash) = &style.line_dash {
        surface.set_line_dash(dash)?;
    }
    if let Some(fill) = &style.fill_style {
        surface.set_fill_style(fill);
    }
    if let Some(alpha) = style.global_alpha {
        surface.set_global_alpha(alpha);
    }
    Ok(())
}

fn paint<S: DrawingSurface>(surface: &mut S, primitive: &Primitive, style: &RenderStyle) -> Result<(), S::Error> {
    surface.begin_path();
    match primitive {
        Primitive::Rect { x, y, width, height } => surface.rect(*x, *y, *width, *height),
        Primitive::Circle { center, radius } => surface.arc(center.x, center.y, *radius, 0.0, FULL_TURN)?,
        Primitive::Ellipse { center, radius_x, radius_y } => {
            surface.ellipse(center.x, center.y, *radius_x, *radius_y, 0.0, 0.0, FULL_TURN)?;
        }
        Primitive::Polygon(points) => {
            let mut iter = points.iter();
            if let Some(first) = iter.next() {
                surface.move_to(first.x, first.y);
            }
            for p in iter {
                surface.line_to(p.x, p.y);
            }
            surface.close_path();
        }
    }

    if style.fill_style.is_some() {
        surface.fill();
    }
    surface.stroke();
    Ok(())
}

fn reset_transient_state<S: DrawingSurface>(surface: &mut S) -> Result<(), S::Error> {
    surface.set_global_alpha(OPAQUE);
    surface.set_line_dash(&[])
}
