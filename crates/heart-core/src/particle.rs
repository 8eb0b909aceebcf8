//! Short-lived glow particles sprinkled around the moving lights.

use crate::constants::{
    PARTICLE_DECAY, PARTICLE_GLOW_BLUR, PARTICLE_MIN_RADIUS, PARTICLE_RADIUS_SPAN,
    PARTICLE_SPEED_RANGE, VELOCITY_DAMPING,
};
use crate::surface::{CirclePaint, Surface};
use glam::Vec2;
use rand::Rng;

/// One decaying point sprite. Spawned at a light's current position, drifts
/// with a damped random velocity and fades out over roughly a hundred frames.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: f32,
    pub decay: f32,
    pub color: &'static str,
    pub radius: f32,
}

impl Particle {
    pub fn spawn(position: Vec2, color: &'static str, rng: &mut impl Rng) -> Self {
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_SPEED_RANGE,
            (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_SPEED_RANGE,
        );
        Self {
            position,
            velocity,
            life: 1.0,
            decay: PARTICLE_DECAY,
            color,
            radius: PARTICLE_MIN_RADIUS + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
        }
    }

    /// One Euler step: drift, decay, damp.
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.life -= self.decay;
        self.velocity *= VELOCITY_DAMPING;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_circle(
            self.position,
            self.radius,
            &CirclePaint {
                color: self.color,
                alpha: self.life,
                glow_blur: PARTICLE_GLOW_BLUR,
                glow_color: self.color,
            },
        );
    }
}

/// Advance every particle one step and drop the expired, in a single
/// compaction pass. Survivors are updated exactly once and keep their
/// relative order; nothing is skipped or double-processed.
pub fn update_and_cull(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| {
        p.update();
        p.is_alive()
    });
}
