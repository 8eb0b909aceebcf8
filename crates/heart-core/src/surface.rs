//! Draw-primitive seam between the frame controller and a concrete surface.
//!
//! Implementations composite calls in order (later calls land on top) and
//! must never clear between frames: the frame controller paints a translucent
//! fade rect each tick and relies on prior frames showing through it.

use glam::Vec2;

/// Paint for one gradient-stroked trail segment.
#[derive(Clone, Copy, Debug)]
pub struct SegmentPaint<'a> {
    /// Gradient color at the segment start (also the glow color).
    pub start_color: &'a str,
    /// Gradient color at the segment end.
    pub end_color: &'a str,
    pub width: f32,
    pub alpha: f32,
    pub glow_blur: f32,
}

/// Paint for a flat-filled circle.
#[derive(Clone, Copy, Debug)]
pub struct CirclePaint<'a> {
    pub color: &'a str,
    pub alpha: f32,
    /// 0.0 disables the glow.
    pub glow_blur: f32,
    pub glow_color: &'a str,
}

/// Radial gradient color stop: (offset in [0, 1], CSS color).
pub type GradientStop<'a> = (f32, &'a str);

/// Minimal set of draw primitives the animation needs from a drawing surface.
pub trait Surface {
    /// Fill an axis-aligned rectangle with a flat (possibly translucent) color.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str);

    /// Stroke one line segment with a linear gradient along it, round caps
    /// and joins.
    fn stroke_segment(&mut self, from: Vec2, to: Vec2, paint: &SegmentPaint);

    /// Fill a circle with a flat color.
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &CirclePaint);

    /// Fill a circle with a radial gradient running from its center outward.
    fn fill_gradient_circle(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);
}
