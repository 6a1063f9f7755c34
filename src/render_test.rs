#![allow(clippy::float_cmp)]

use super::*;
use crate::shape::Point;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
enum Op {
    StrokeStyle(String),
    LineWidth(f64),
    LineDash(Vec<f64>),
    FillStyle(String),
    GlobalAlpha(f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Rect(f64, f64, f64, f64),
    Arc(f64, f64, f64),
    Ellipse(f64, f64, f64, f64),
    Fill,
    Stroke,
}

/// Surface double that records calls and can be told to reject arcs.
#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
    fail_arcs: bool,
}

#[derive(Debug, PartialEq)]
struct Rejected;

impl DrawingSurface for Recorder {
    type Error = Rejected;

    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(Op::StrokeStyle(style.to_owned()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), Rejected> {
        self.ops.push(Op::LineDash(segments.to_vec()));
        Ok(())
    }
    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(Op::FillStyle(style.to_owned()));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::GlobalAlpha(alpha));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::Rect(x, y, width, height));
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Rejected> {
        assert_eq!(start, 0.0);
        assert_eq!(end, FULL_TURN);
        if self.fail_arcs {
            return Err(Rejected);
        }
        self.ops.push(Op::Arc(x, y, radius));
        Ok(())
    }
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
    ) -> Result<(), Rejected> {
        assert_eq!(rotation, 0.0);
        assert_eq!(start, 0.0);
        assert_eq!(end, FULL_TURN);
        self.ops.push(Op::Ellipse(x, y, radius_x, radius_y));
        Ok(())
    }
    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
}

fn canvas() -> PixelSize {
    PixelSize::new(400.0, 200.0)
}

fn reset_ops() -> [Op; 2] {
    [Op::GlobalAlpha(1.0), Op::LineDash(vec![])]
}

// =============================================================
// Shapes
// =============================================================

#[test]
fn rectangle_with_empty_style_only_strokes_and_resets() {
    let mut s = Recorder::default();
    render_rectangle(&mut s, &Rect::new(0.25, 0.5, 0.5, 0.25), canvas(), &RenderStyle::new()).unwrap();
    let mut expected = vec![Op::BeginPath, Op::Rect(100.0, 100.0, 200.0, 50.0), Op::Stroke];
    expected.extend(reset_ops());
    assert_eq!(s.ops, expected);
}

#[test]
fn circle_radius_uses_shorter_canvas_side() {
    let mut s = Recorder::default();
    render_circle(&mut s, &Circle::new(0.5, 0.5, 0.25), canvas(), &RenderStyle::new()).unwrap();
    assert!(s.ops.contains(&Op::Arc(200.0, 100.0, 50.0)));
}

#[test]
fn ellipse_radii_scale_per_axis() {
    let mut s = Recorder::default();
    render_ellipse(&mut s, &Ellipse::new(0.5, 0.5, 0.25, 0.25), canvas(), &RenderStyle::new()).unwrap();
    assert!(s.ops.contains(&Op::Ellipse(200.0, 100.0, 100.0, 50.0)));
}

#[test]
fn polygon_traces_closed_path() {
    let mut s = Recorder::default();
    let poly = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.5, 1.0)]);
    render_polygon(&mut s, &poly, canvas(), &RenderStyle::new()).unwrap();
    let mut expected = vec![
        Op::BeginPath,
        Op::MoveTo(0.0, 0.0),
        Op::LineTo(400.0, 0.0),
        Op::LineTo(200.0, 200.0),
        Op::ClosePath,
        Op::Stroke,
    ];
    expected.extend(reset_ops());
    assert_eq!(s.ops, expected);
}

#[test]
fn polygon_with_two_points_draws_nothing() {
    let mut s = Recorder::default();
    let poly = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    render_polygon(&mut s, &poly, canvas(), &RenderStyle::new().stroke("#f00").alpha(0.5)).unwrap();
    assert!(s.ops.is_empty());
}

#[test]
fn render_shape_dispatches_degenerate_polygon_to_noop() {
    let mut s = Recorder::default();
    render_shape(&mut s, &Shape::Polygon(Polygon::default()), canvas(), &RenderStyle::new()).unwrap();
    assert!(s.ops.is_empty());
}

// =============================================================
// Style
// =============================================================

#[test]
fn full_style_applied_before_path_then_reset() {
    let mut s = Recorder::default();
    let style = RenderStyle::new()
        .stroke("#2E7D32")
        .line_width(3.0)
        .dashed(vec![4.0, 2.0])
        .fill("rgba(46, 125, 50, 0.2)")
        .alpha(0.8);
    render_rectangle(&mut s, &Rect::new(0.0, 0.0, 1.0, 1.0), canvas(), &style).unwrap();
    let mut expected = vec![
        Op::StrokeStyle("#2E7D32".into()),
        Op::LineWidth(3.0),
        Op::LineDash(vec![4.0, 2.0]),
        Op::FillStyle("rgba(46, 125, 50, 0.2)".into()),
        Op::GlobalAlpha(0.8),
        Op::BeginPath,
        Op::Rect(0.0, 0.0, 400.0, 200.0),
        Op::Fill,
        Op::Stroke,
    ];
    expected.extend(reset_ops());
    assert_eq!(s.ops, expected);
}

#[test]
fn omitted_options_are_not_touched() {
    let mut s = Recorder::default();
    render_circle(&mut s, &Circle::new(0.5, 0.5, 0.1), canvas(), &RenderStyle::new().line_width(2.0)).unwrap();
    assert!(!s.ops.iter().any(|op| matches!(op, Op::StrokeStyle(_) | Op::FillStyle(_) | Op::Fill)));
    assert_eq!(s.ops[0], Op::LineWidth(2.0));
}

#[test]
fn dash_and_alpha_do_not_leak_into_next_shape() {
    let mut s = Recorder::default();
    let dashed = RenderStyle::new().dashed(vec![5.0, 5.0]).alpha(0.3);
    render_rectangle(&mut s, &Rect::new(0.0, 0.0, 0.5, 0.5), canvas(), &dashed).unwrap();
    let first_len = s.ops.len();
    render_rectangle(&mut s, &Rect::new(0.5, 0.5, 0.5, 0.5), canvas(), &RenderStyle::new()).unwrap();

    assert_eq!(s.ops[first_len - 2..first_len], reset_ops());
    let second = &s.ops[first_len..];
    assert!(!second.iter().any(|op| matches!(op, Op::LineDash(d) if !d.is_empty())));
    assert!(!second.iter().any(|op| matches!(op, Op::GlobalAlpha(a) if *a < 1.0)));
}

#[test]
fn repeated_render_is_identical() {
    let shape = Shape::from(Circle::new(0.3, 0.6, 0.2));
    let style = RenderStyle::new().stroke("#000").fill("#fff");
    let mut a = Recorder::default();
    let mut b = Recorder::default();
    render_shape(&mut a, &shape, canvas(), &style).unwrap();
    render_shape(&mut b, &shape, canvas(), &style).unwrap();
    assert_eq!(a.ops, b.ops);
}

#[test]
fn surface_error_propagates_and_state_still_resets() {
    let mut s = Recorder { fail_arcs: true, ..Recorder::default() };
    let style = RenderStyle::new().dashed(vec![1.0, 1.0]).alpha(0.5);
    let result = render_circle(&mut s, &Circle::new(0.5, 0.5, 0.1), canvas(), &style);
    assert_eq!(result, Err(Rejected));
    assert!(!s.ops.contains(&Op::Stroke));
    assert_eq!(s.ops[s.ops.len() - 2..], reset_ops());
}

#[test]
fn style_deserializes_canvas_option_names() {
    let style: RenderStyle = serde_json::from_value(serde_json::json!({
        "strokeStyle": "#123456",
        "lineWidth": 2.5,
        "lineDash": [6, 3],
        "globalAlpha": 0.4
    }))
    .unwrap();
    assert_eq!(style.stroke_style.as_deref(), Some("#123456"));
    assert_eq!(style.line_width, Some(2.5));
    assert_eq!(style.line_dash, Some(vec![6.0, 3.0]));
    assert_eq!(style.fill_style, None);
    assert_eq!(style.global_alpha, Some(0.4));
}
