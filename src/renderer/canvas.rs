//! Canvas 2D surface (browser only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::Surface;

/// Draws straight into a `<canvas>` 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Size the canvas backing store and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, f64::from(size.x), f64::from(size.y));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(f64::from(from.x), f64::from(from.y));
        ctx.line_to(f64::from(to.x), f64::from(to.y));
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(f64::from(width));
        ctx.stroke();
        ctx.close_path();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        let ctx = &self.ctx;
        ctx.begin_path();
        if let Err(e) = ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Circle draw failed: {:?}", e);
            return;
        }
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.close_path();
    }
}
