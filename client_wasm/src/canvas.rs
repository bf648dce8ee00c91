//! `Surface` backed by a browser 2D canvas context

use game_core::{Color, Surface};
use log::warn;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(cx as f64, cy as f64, r as f64, 0.0, std::f64::consts::TAU)
        {
            warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{}px Arial", font_size));
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            warn!("fill_text failed: {:?}", e);
        }
    }
}
