//! Collision detection and wall response
//!
//! Every entity is a sphere, so one overlap rule covers player-vs-target and
//! player-vs-hazard. Walls are the faces of a cube centered on the origin.

use glam::Vec3;

use crate::settings::BoundaryPolicy;

/// True when two spheres overlap (strictly closer than the sum of radii)
#[inline]
pub fn spheres_overlap(a: Vec3, ra: f32, b: Vec3, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Which walls the ball touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.x || self.y || self.z
    }
}

/// Keep a ball of `radius` inside the cube of half-extent `bounds`
///
/// Clamped axes have their velocity component replaced by the policy response.
pub fn clamp_to_bounds(
    pos: &mut Vec3,
    vel: &mut Vec3,
    radius: f32,
    bounds: f32,
    policy: BoundaryPolicy,
) -> WallHits {
    let limit = bounds - radius;
    let mut hits = [false; 3];
    for (axis, hit) in hits.iter_mut().enumerate() {
        let p = pos[axis];
        if p > limit || p < -limit {
            pos[axis] = p.clamp(-limit, limit);
            vel[axis] = policy.respond(vel[axis]);
            *hit = true;
        }
    }
    WallHits {
        x: hits[0],
        y: hits[1],
        z: hits[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BOUNDS, PLAYER_RADIUS};

    #[test]
    fn test_overlap_is_strict() {
        assert!(spheres_overlap(Vec3::ZERO, 0.05, Vec3::new(0.05, 0.0, 0.0), 0.02));
        assert!(!spheres_overlap(Vec3::ZERO, 0.05, Vec3::new(0.5, 0.0, 0.0), 0.02));
        // Touching exactly is not an overlap
        assert!(!spheres_overlap(Vec3::ZERO, 0.25, Vec3::new(0.5, 0.0, 0.0), 0.25));
    }

    #[test]
    fn test_clamp_stop() {
        let limit = BOUNDS - PLAYER_RADIUS;
        let mut pos = Vec3::new(limit + 0.01, 0.0, 0.0);
        let mut vel = Vec3::new(0.5, 0.2, 0.0);
        let hits = clamp_to_bounds(&mut pos, &mut vel, PLAYER_RADIUS, BOUNDS, BoundaryPolicy::Stop);
        assert!(hits.x && !hits.y && !hits.z);
        assert_eq!(pos.x, limit);
        assert_eq!(vel.x, 0.0);
        assert_eq!(vel.y, 0.2);
    }

    #[test]
    fn test_clamp_bounce_negative_side() {
        let limit = BOUNDS - PLAYER_RADIUS;
        let mut pos = Vec3::new(0.0, 0.0, -limit - 0.02);
        let mut vel = Vec3::new(0.0, 0.0, -1.0);
        let policy = BoundaryPolicy::Bounce { restitution: 0.8 };
        let hits = clamp_to_bounds(&mut pos, &mut vel, PLAYER_RADIUS, BOUNDS, policy);
        assert!(hits.z && hits.any());
        assert_eq!(pos.z, -limit);
        assert!((vel.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_inside_untouched() {
        let mut pos = Vec3::new(0.1, -0.2, 0.3);
        let mut vel = Vec3::ONE;
        let hits = clamp_to_bounds(&mut pos, &mut vel, PLAYER_RADIUS, BOUNDS, BoundaryPolicy::Stop);
        assert!(!hits.any());
        assert_eq!(vel, Vec3::ONE);
    }
}
