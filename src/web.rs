//! Browser canvas backend for [`DrawingSurface`].
//!
//! Only compiled with the `web` feature. Fallible Canvas 2D calls surface
//! their `JsValue` error to the render caller.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::render::DrawingSurface;

impl DrawingSurface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn set_stroke_style(&mut self, style: &str) {
        self.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), JsValue> {
        let dash = js_sys::Array::new();
        for s in segments {
            dash.push(&JsValue::from_f64(*s));
        }
        CanvasRenderingContext2d::set_line_dash(self, &dash)
    }

    fn set_fill_style(&mut self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::rect(self, x, y, width, height);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end)
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
    ) -> Result<(), JsValue> {
        CanvasRenderingContext2d::ellipse(self, x, y, radius_x, radius_y, rotation, start, end)
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
}
