// Tests for particle lifecycle, spawn ranges, and set compaction.

mod common;

use common::{DrawCall, RecordingSurface};
use glam::Vec2;
use heart_core::{
    CYAN_LIGHT, PARTICLE_DECAY, PARTICLE_MIN_RADIUS, PARTICLE_RADIUS_SPAN, PARTICLE_SPEED_RANGE,
    Particle, VELOCITY_DAMPING, update_and_cull,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn spawn_ranges_are_bounded() {
    let mut rng = rng();
    for _ in 0..200 {
        let p = Particle::spawn(Vec2::new(3.0, 4.0), CYAN_LIGHT.head, &mut rng);
        assert_eq!(p.position, Vec2::new(3.0, 4.0));
        assert_eq!(p.life, 1.0);
        assert_eq!(p.color, CYAN_LIGHT.head);
        assert!(
            p.velocity.x.abs() <= PARTICLE_SPEED_RANGE && p.velocity.y.abs() <= PARTICLE_SPEED_RANGE,
            "velocity {:?} outside the symmetric range",
            p.velocity
        );
        assert!(
            p.radius >= PARTICLE_MIN_RADIUS && p.radius < PARTICLE_MIN_RADIUS + PARTICLE_RADIUS_SPAN,
            "radius {} outside [1, 4)",
            p.radius
        );
    }
}

#[test]
fn life_decreases_by_exactly_decay_per_update() {
    let mut rng = rng();
    let mut p = Particle::spawn(Vec2::ZERO, CYAN_LIGHT.head, &mut rng);
    for step in 1..=50 {
        p.update();
        let expected = 1.0 - step as f32 * PARTICLE_DECAY;
        assert!(
            (p.life - expected).abs() < 1e-5,
            "life {} != {expected} after {step} updates",
            p.life
        );
    }
}

#[test]
fn position_follows_velocity_and_velocity_is_damped() {
    let mut rng = rng();
    let mut p = Particle::spawn(Vec2::ZERO, CYAN_LIGHT.head, &mut rng);
    let v0 = p.velocity;
    p.update();
    assert_eq!(p.position, v0, "one Euler step should move by the velocity");
    assert!(
        (p.velocity - v0 * VELOCITY_DAMPING).length() < 1e-6,
        "velocity should shrink by the damping factor"
    );

    let mut speed = p.velocity.length();
    for _ in 0..100 {
        p.update();
        let next = p.velocity.length();
        assert!(next <= speed, "damping must never speed a particle up");
        speed = next;
    }
}

#[test]
fn natural_lifetime_is_about_a_hundred_frames() {
    let mut rng = rng();
    let mut p = Particle::spawn(Vec2::ZERO, CYAN_LIGHT.head, &mut rng);
    for _ in 0..50 {
        p.update();
    }
    assert!(p.is_alive(), "should survive well past 50 frames");
    for _ in 0..70 {
        p.update();
    }
    assert!(!p.is_alive(), "should be gone by 120 frames at 0.01 decay");
}

#[test]
fn cull_removes_exactly_the_expired() {
    let mut rng = rng();
    let mut particles: Vec<Particle> = (0..6)
        .map(|i| {
            let mut p = Particle::spawn(Vec2::new(i as f32, 0.0), CYAN_LIGHT.head, &mut rng);
            // Expire every other particle on the next update.
            if i % 2 == 1 {
                p.life = PARTICLE_DECAY * 0.5;
            }
            p
        })
        .collect();
    let healthy: Vec<Vec2> = particles
        .iter()
        .filter(|p| p.life == 1.0)
        .map(|p| p.position + p.velocity)
        .collect();

    update_and_cull(&mut particles);

    assert_eq!(particles.len(), 3, "exactly the expired half is removed");
    for (p, expected) in particles.iter().zip(&healthy) {
        assert_eq!(
            p.position, *expected,
            "survivor updated exactly once, order preserved"
        );
        assert!(
            (p.life - (1.0 - PARTICLE_DECAY)).abs() < 1e-6,
            "survivor decayed exactly once"
        );
    }
}

#[test]
fn draw_uses_life_as_alpha_and_its_own_color() {
    let mut rng = rng();
    let mut p = Particle::spawn(Vec2::new(5.0, 6.0), CYAN_LIGHT.head, &mut rng);
    for _ in 0..30 {
        p.update();
    }
    let mut surface = RecordingSurface::new();
    p.draw(&mut surface);

    assert_eq!(surface.calls.len(), 1);
    let DrawCall::Circle {
        radius,
        color,
        alpha,
        ..
    } = &surface.calls[0]
    else {
        panic!("expected a circle");
    };
    assert_eq!(*radius, p.radius);
    assert_eq!(color, CYAN_LIGHT.head);
    assert!((alpha - p.life).abs() < 1e-6, "fill alpha tracks life");
}
