// Shared test double: records every draw call so tests can assert on
// layering and paint parameters without a real surface.

#![allow(dead_code)]

use glam::Vec2;
use heart_core::{CirclePaint, GradientStop, SegmentPaint, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rect {
        origin: Vec2,
        size: Vec2,
        color: String,
    },
    Segment {
        from: Vec2,
        to: Vec2,
        start_color: String,
        end_color: String,
        width: f32,
        alpha: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
        alpha: f32,
    },
    GradientCircle {
        center: Vec2,
        radius: f32,
        stops: usize,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Segment { .. }))
            .collect()
    }

    pub fn circles(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
        self.calls.push(DrawCall::Rect {
            origin,
            size,
            color: color.to_owned(),
        });
    }

    fn stroke_segment(&mut self, from: Vec2, to: Vec2, paint: &SegmentPaint) {
        self.calls.push(DrawCall::Segment {
            from,
            to,
            start_color: paint.start_color.to_owned(),
            end_color: paint.end_color.to_owned(),
            width: paint.width,
            alpha: paint.alpha,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &CirclePaint) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color: paint.color.to_owned(),
            alpha: paint.alpha,
        });
    }

    fn fill_gradient_circle(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.calls.push(DrawCall::GradientCircle {
            center,
            radius,
            stops: stops.len(),
        });
    }
}
