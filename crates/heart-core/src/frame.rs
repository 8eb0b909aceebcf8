//! Per-frame orchestration: advance the curve, feed the trails, manage the
//! particle population, and issue draw calls in back-to-front order.

use crate::constants::{
    ANGULAR_STEP, CURVE_SCALE, CYAN_LIGHT, FADE_FILL, LIGHT_CORE_COLOR, LIGHT_CORE_FACTOR,
    LIGHT_GLOW_BLUR, LIGHT_HALO_FACTOR, LIGHT_HALO_MID_STOP, LIGHT_RADIUS, LIGHT_RING_ALPHA,
    LIGHT_RING_FACTOR, LightPalette, MAGENTA_LIGHT, PHASE_OFFSET, REFERENCE_SIZE,
    SPAWN_PROBABILITY, TRAIL_CAPACITY,
};
use crate::curve::heart_path;
use crate::particle::{Particle, update_and_cull};
use crate::surface::{CirclePaint, Surface};
use crate::trail::Trail;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Viewport dimensions in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Responsive multiplier keeping the shape a constant fraction of the
    /// smaller viewport axis across devices.
    #[inline]
    pub fn responsive_scale(&self) -> f32 {
        self.width.min(self.height) / REFERENCE_SIZE
    }

    /// A zero-sized viewport makes the whole frame a no-op.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Per-instance tunables. [`Default`] matches the shipped look; tests bend
/// `spawn_probability` to force or suppress particle births.
#[derive(Clone, Copy, Debug)]
pub struct AnimationParams {
    pub angular_step: f32,
    pub spawn_probability: f32,
    pub trail_capacity: usize,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            angular_step: ANGULAR_STEP,
            spawn_probability: SPAWN_PROBABILITY,
            trail_capacity: TRAIL_CAPACITY,
        }
    }
}

/// All mutable animation state. There is exactly one mutator, [`Self::tick`],
/// which runs to completion within each scheduled frame.
pub struct HeartAnimation {
    params: AnimationParams,
    angle_a: f32,
    angle_b: f32,
    trail_a: Trail,
    trail_b: Trail,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl HeartAnimation {
    /// Entropy-seeded instance; the sprinkle differs run to run.
    pub fn new(params: AnimationParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    /// Deterministic instance for tests.
    pub fn with_seed(params: AnimationParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: AnimationParams, rng: StdRng) -> Self {
        log::debug!(
            "animation init: step={} rad/tick, spawn p={}, trail cap={}",
            params.angular_step,
            params.spawn_probability,
            params.trail_capacity
        );
        Self {
            params,
            angle_a: 0.0,
            angle_b: PHASE_OFFSET,
            trail_a: Trail::new(params.trail_capacity),
            trail_b: Trail::new(params.trail_capacity),
            particles: Vec::new(),
            rng,
        }
    }

    pub fn set_spawn_probability(&mut self, probability: f32) {
        self.params.spawn_probability = probability;
    }

    #[inline]
    pub fn angles(&self) -> (f32, f32) {
        (self.angle_a, self.angle_b)
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn trails(&self) -> (&Trail, &Trail) {
        (&self.trail_a, &self.trail_b)
    }

    /// Where the two leading lights sit for the current angles, in absolute
    /// surface pixels.
    pub fn head_positions(&self, viewport: Viewport) -> (Vec2, Vec2) {
        let center = viewport.center();
        let scale = viewport.responsive_scale() * CURVE_SCALE;
        (
            center + heart_path(self.angle_a, scale),
            center + heart_path(self.angle_b, scale),
        )
    }

    /// Advance one frame and draw it. Call order is the layering order:
    /// fade overlay, particles, trails, leading lights.
    pub fn tick(&mut self, viewport: Viewport, surface: &mut impl Surface) {
        if viewport.is_degenerate() {
            return;
        }

        // Translucent fade instead of a clear; ghosts of prior frames showing
        // through it are what produce the long-exposure look.
        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(viewport.width, viewport.height),
            FADE_FILL,
        );

        self.angle_a += self.params.angular_step;
        self.angle_b += self.params.angular_step;

        let (head_a, head_b) = self.head_positions(viewport);

        self.trail_a.push(head_a);
        self.trail_b.push(head_b);

        // Two independent coin flips: zero, one, or both lights may shed a
        // particle on any given frame.
        if self.rng.gen::<f32>() < self.params.spawn_probability {
            self.particles
                .push(Particle::spawn(head_a, CYAN_LIGHT.head, &mut self.rng));
        }
        if self.rng.gen::<f32>() < self.params.spawn_probability {
            self.particles
                .push(Particle::spawn(head_b, MAGENTA_LIGHT.head, &mut self.rng));
        }

        update_and_cull(&mut self.particles);
        for particle in &self.particles {
            particle.draw(surface);
        }

        self.trail_a.render(surface, &CYAN_LIGHT);
        self.trail_b.render(surface, &MAGENTA_LIGHT);

        draw_light(surface, head_a, &CYAN_LIGHT);
        draw_light(surface, head_b, &MAGENTA_LIGHT);
    }
}

/// Three-layer glow marker: soft radial halo, bright white core, colored
/// ring on top.
fn draw_light(surface: &mut impl Surface, center: Vec2, palette: &LightPalette) {
    surface.fill_gradient_circle(
        center,
        LIGHT_RADIUS * LIGHT_HALO_FACTOR,
        &[
            (0.0, palette.head),
            (LIGHT_HALO_MID_STOP, palette.halo),
            (1.0, "transparent"),
        ],
    );
    surface.fill_circle(
        center,
        LIGHT_RADIUS * LIGHT_CORE_FACTOR,
        &CirclePaint {
            color: LIGHT_CORE_COLOR,
            alpha: 1.0,
            glow_blur: LIGHT_GLOW_BLUR,
            glow_color: palette.head,
        },
    );
    surface.fill_circle(
        center,
        LIGHT_RADIUS * LIGHT_RING_FACTOR,
        &CirclePaint {
            color: palette.head,
            alpha: LIGHT_RING_ALPHA,
            glow_blur: LIGHT_GLOW_BLUR,
            glow_color: palette.head,
        },
    );
}
