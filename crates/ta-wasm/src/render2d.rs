//! Canvas2D surface.
//!
//! Adapts `CanvasRenderingContext2d` to the renderer's `Surface` trait so
//! painting and hit testing run against the real browser font metrics.

use ta_render::{Surface, TextMeasure};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Element};

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for CanvasSurface<'_> {
    fn measure_text_width(&self, font: &str, text: &str) -> f32 {
        self.ctx.set_font(font);
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width() as f32,
            Err(err) => {
                log::warn!("measureText failed: {}", describe(&err));
                0.0
            }
        }
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(err) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {}", describe(&err));
        }
    }
}

/// Viewport → canvas coordinates via the canvas bounding rectangle.
pub fn to_canvas_space(ctx: &CanvasRenderingContext2d, client_x: f64, client_y: f64) -> (f32, f32) {
    let (left, top) = match ctx.canvas() {
        Some(canvas) => {
            let rect = canvas.get_bounding_client_rect();
            (rect.left() as f32, rect.top() as f32)
        }
        None => (0.0, 0.0),
    };
    ta_editor::input::canvas_point(client_x as f32, client_y as f32, left, top)
}

/// Replace a `<ul>`/`<ol>` body with one `<li>` per label.
pub fn render_list(el: &Element, labels: &[String]) {
    el.set_inner_html(&list_html(labels));
}

fn list_html(labels: &[String]) -> String {
    labels.iter().map(|label| format!("<li>{label}</li>")).collect()
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
