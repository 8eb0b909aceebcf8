//! Canvas2D implementation of the core [`Surface`] trait.
//!
//! Every primitive brackets its context mutations in `save`/`restore` so
//! alpha, shadow, and stroke state never leak between calls. The canvas is
//! never cleared here; the fade overlay issued by the frame controller is the
//! only thing that covers old frames.

use glam::Vec2;
use heart_core::{CirclePaint, GradientStop, SegmentPaint, Surface};
use std::f64::consts::TAU;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, paint: &SegmentPaint) {
        let ctx = &self.ctx;
        let (x0, y0) = (from.x as f64, from.y as f64);
        let (x1, y1) = (to.x as f64, to.y as f64);

        ctx.save();
        ctx.set_line_cap("round");
        ctx.set_line_join("round");

        let gradient = ctx.create_linear_gradient(x0, y0, x1, y1);
        let _ = gradient.add_color_stop(0.0, paint.start_color);
        let _ = gradient.add_color_stop(1.0, paint.end_color);
        ctx.set_stroke_style_canvas_gradient(&gradient);

        ctx.set_global_alpha(paint.alpha as f64);
        ctx.set_line_width(paint.width as f64);
        ctx.set_shadow_blur(paint.glow_blur as f64);
        ctx.set_shadow_color(paint.start_color);

        ctx.begin_path();
        ctx.move_to(x0, y0);
        ctx.line_to(x1, y1);
        ctx.stroke();
        ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &CirclePaint) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(paint.alpha.clamp(0.0, 1.0) as f64);
        ctx.set_fill_style_str(paint.color);
        if paint.glow_blur > 0.0 {
            ctx.set_shadow_blur(paint.glow_blur as f64);
            ctx.set_shadow_color(paint.glow_color);
        }
        ctx.begin_path();
        let _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }

    fn fill_gradient_circle(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        let ctx = &self.ctx;
        let (cx, cy, r) = (center.x as f64, center.y as f64, radius as f64);
        let Ok(gradient) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r) else {
            return;
        };
        for (offset, color) in stops {
            let _ = gradient.add_color_stop(*offset, color);
        }

        ctx.save();
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, r, 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }
}
