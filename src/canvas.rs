use crate::dom;
use anyhow::anyhow;
use field_core::{Rgba, Surface};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("2d context request failed: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context not available"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("context is not a CanvasRenderingContext2d"))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the viewport. Setting the size wipes the
    /// canvas immediately; the next rendered tick repaints it.
    pub fn fit_viewport(&self) -> Vec2 {
        let (w, h) = dom::viewport_size();
        let w_px = (w as u32).max(1);
        let h_px = (h as u32).max(1);
        if self.canvas.width() != w_px {
            self.canvas.set_width(w_px);
        }
        if self.canvas.height() != h_px {
            self.canvas.set_height(h_px);
        }
        Vec2::new(w_px as f32, h_px as f32)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
