//! Fixed-capacity position history rendered as a fading gradient tail.

use crate::constants::{
    LightPalette, TRAIL_BASE_WIDTH, TRAIL_GLOW_BLUR, TRAIL_MAX_ALPHA, TRAIL_WIDTH_SPAN,
};
use crate::surface::{SegmentPaint, Surface};
use glam::Vec2;
use std::collections::VecDeque;

/// Recent positions of one moving light, oldest first, newest last.
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append the newest position, evicting the oldest once over capacity.
    pub fn push(&mut self, point: Vec2) {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    /// Draw consecutive segments oldest to newest, ramping width and opacity
    /// up the buffer so the tail thins and fades away from the light.
    /// No-op with fewer than two points.
    pub fn render(&self, surface: &mut impl Surface, palette: &LightPalette) {
        if self.points.len() < 2 {
            return;
        }
        let len = self.points.len() as f32;
        for i in 1..self.points.len() {
            let ramp = i as f32 / len;
            surface.stroke_segment(
                self.points[i - 1],
                self.points[i],
                &SegmentPaint {
                    start_color: palette.head,
                    end_color: palette.tail,
                    width: ramp * TRAIL_WIDTH_SPAN + TRAIL_BASE_WIDTH,
                    alpha: ramp * TRAIL_MAX_ALPHA,
                    glow_blur: TRAIL_GLOW_BLUR,
                },
            );
        }
    }
}
