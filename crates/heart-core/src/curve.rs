//! Parametric heart curve evaluation.

use glam::Vec2;

/// Point on the classic parametric heart for parameter `t` (radians),
/// scaled by `scale`.
///
/// The y term is negated so the cusp points down in screen space, where y
/// grows toward the bottom of the surface. Dropping the negation renders the
/// heart upside down.
#[inline]
pub fn heart_path(t: f32, scale: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Vec2::new(x * scale, y * scale)
}
