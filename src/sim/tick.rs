//! Per-frame world update
//!
//! Advances the world by one rendered frame: commands, steering, gravity
//! integration, wall response, collisions, round progression, particles.

use super::collision::{clamp_to_bounds, spheres_overlap};
use super::state::World;
use crate::consts::*;
use crate::settings::{MovementMode, TimeScale};

/// Input commands for a single frame
///
/// `flip_gravity` and `reset` are one-shot: the caller sets them only on the
/// frame the key goes down.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement direction per axis (-1, 0, +1)
    pub move_x: i8,
    pub move_y: i8,
    pub move_z: i8,
    /// Negate gravity
    pub flip_gravity: bool,
    /// Restart from level 1
    pub reset: bool,
    /// Change simulation speed (ignored unless the config allows it)
    pub time_scale: Option<TimeScale>,
}

impl TickInput {
    fn axis(&self, axis: usize) -> f32 {
        let dir = match axis {
            0 => self.move_x,
            1 => self.move_y,
            _ => self.move_z,
        };
        dir.signum() as f32
    }
}

/// Advance the world by `dt` seconds
pub fn update(world: &mut World, input: &TickInput, dt: f32) {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    if input.reset {
        world.restart();
        return;
    }

    if input.flip_gravity {
        world.gravity = -world.gravity;
        world.player.vel.y = world.gravity.y * FLIP_KICK;
        let count = world.config.flip_burst;
        world.explode(world.player.pos, FLIP_COLOR, count);
        log::debug!("Gravity flipped: {:?}", world.gravity);
    }

    if world.config.time_scaling {
        if let Some(scale) = input.time_scale {
            world.time_scale = scale;
        }
    }
    let step = if world.config.time_scaling {
        dt * world.time_scale.factor()
    } else {
        dt
    };

    // Steering
    let steer = world.config.steer;
    let steerable = [steer.x, steer.y, steer.z];
    for (axis, enabled) in steerable.into_iter().enumerate() {
        if !enabled {
            continue;
        }
        let dir = input.axis(axis);
        match world.config.movement {
            MovementMode::SetVelocity { speed } => world.player.vel[axis] = dir * speed,
            MovementMode::Thrust { accel } => world.player.vel[axis] += dir * accel * step,
        }
    }

    // Semi-implicit Euler
    let player = &mut world.player;
    player.vel += world.gravity * step;
    player.pos += player.vel * step;
    if world.config.planar {
        player.pos.z = 0.0;
    }

    world.wall_hits = clamp_to_bounds(
        &mut player.pos,
        &mut player.vel,
        player.radius,
        BOUNDS,
        world.config.boundary,
    );
    if world.wall_hits.any() {
        log::trace!("Wall contact {:?}, vel {:?}", world.wall_hits, player.vel);
    }
    player.trail.push(player.pos);

    // Hazards: contact resets the round and ends this frame
    let (ppos, pradius) = (world.player.pos, world.player.radius);
    for hazard in &mut world.hazards {
        hazard.pulse += step;
    }
    let hit_hazard = world
        .hazards
        .iter()
        .any(|h| spheres_overlap(ppos, pradius, h.pos, h.radius));
    if hit_hazard {
        log::info!("Hazard hit at level {}", world.level);
        let color = world.player.color;
        let count = world.config.hazard_burst;
        world.reset_round();
        world.explode(ppos, color, count);
        world.frame += 1;
        return;
    }

    // Targets
    let mut collected = Vec::new();
    for target in world.targets.iter_mut().filter(|t| !t.collected) {
        target.pulse += step;
        if spheres_overlap(ppos, pradius, target.pos, target.radius) {
            target.collected = true;
            collected.push((target.pos, target.color));
        }
    }
    for (pos, color) in collected {
        world.score += world.config.points_per_target;
        let count = world.config.target_burst;
        world.explode(pos, color, count);
        log::debug!("Target collected (score {})", world.score);
    }

    if !world.targets.is_empty() && world.targets.iter().all(|t| t.collected) {
        log::info!("Level {} complete", world.level);
        world.complete_level();
    }

    // Particles
    let particle_gravity = world.gravity * world.config.particle_gravity;
    for particle in world.particles.iter_mut() {
        particle.vel += particle_gravity * step;
        particle.pos += particle.vel * step;
        particle.life -= step;
        particle.size *= PARTICLE_DECAY;
    }
    world.particles.retain(|p| p.life > 0.0);

    world.frame += 1;
}
