//! Explosion particle bursts

use glam::Vec3;
use rand::Rng;

use super::state::Particle;
use crate::consts::*;
use crate::settings::BurstShape;

/// Random unit direction for a burst particle
fn burst_direction<R: Rng>(rng: &mut R, shape: BurstShape) -> Vec3 {
    let theta = rng.random_range(0.0..std::f32::consts::TAU);
    match shape {
        BurstShape::Planar => Vec3::new(theta.cos(), theta.sin(), 0.0),
        BurstShape::Spherical => {
            let phi = rng.random_range(0.0..=std::f32::consts::PI);
            Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
        }
    }
}

/// Generate `count` particles exploding out of `center`
///
/// Speeds are uniform in `[BURST_MIN_SPEED, BURST_MAX_SPEED)` and lifetimes in
/// `[BURST_MIN_LIFE, BURST_MAX_LIFE)`.
pub fn spawn_burst<'a, R: Rng>(
    rng: &'a mut R,
    center: Vec3,
    color: [f32; 3],
    count: usize,
    shape: BurstShape,
) -> impl Iterator<Item = Particle> + 'a {
    (0..count).map(move |_| {
        let dir = burst_direction(&mut *rng, shape);
        let speed = rng.random_range(BURST_MIN_SPEED..BURST_MAX_SPEED);
        Particle {
            pos: center,
            vel: dir * speed,
            color,
            life: rng.random_range(BURST_MIN_LIFE..BURST_MAX_LIFE),
            size: PARTICLE_SIZE,
        }
    })
}
