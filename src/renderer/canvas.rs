//! `Surface` backed by a browser 2D canvas

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of a canvas element
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the canvas pixel size to its container. Returns the new (width, height).
    pub fn fit_to_container(&self) -> (f32, f32) {
        if let Some(container) = self.canvas.parent_element() {
            let rect = container.get_bounding_client_rect();
            self.canvas.set_width(rect.width() as u32);
            self.canvas.set_height(rect.height() as u32);
        } else {
            log::warn!("Canvas has no container; keeping {}x{}", self.canvas.width(), self.canvas.height());
        }
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_vertical_gradient(&mut self, x: f32, y: f32, w: f32, h: f32, stops: &[(f32, &str)]) {
        let gradient = self
            .ctx
            .create_linear_gradient(x as f64, y as f64, x as f64, (y + h) as f64);
        for (offset, color) in stops {
            if let Err(e) = gradient.add_color_stop(*offset, color) {
                log::warn!("Bad gradient stop {} {}: {:?}", offset, color, e);
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
