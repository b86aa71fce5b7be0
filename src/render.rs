use crate::core::{DrawSurface, Rgb};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`DrawSurface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }

    #[inline]
    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        self.ctx.set_fill_style_str(&color.css_rgba(alpha));
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: f32) {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = match self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::debug!("[particles] radial gradient error: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &color.css_rgba(alpha));
        _ = gradient.add_color_stop(1.0, &color.css_rgba(0.0));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb, alpha: f32, width: f32) {
        self.ctx.set_stroke_style_str(&color.css_rgba(alpha));
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
