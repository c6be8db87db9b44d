//! Demo autopilot
//!
//! Plays the game by chasing the nearest uncollected target. Used by the
//! headless binary; produces the same [`TickInput`] a keyboard would.

use glam::Vec3;

use super::state::World;
use super::tick::TickInput;
use crate::consts::{BOUNDS, HAZARD_RADIUS, HAZARD_WALL_INSET};

/// Ignore offsets smaller than this when steering
const DEADZONE: f32 = 0.02;
/// Flip gravity this far before the ball would touch a floor/ceiling hazard
const WALL_MARGIN: f32 = 0.05;
/// Frames between flips made to chase a target
const FLIP_COOLDOWN: u64 = 20;

fn steer(delta: f32) -> i8 {
    if delta > DEADZONE {
        1
    } else if delta < -DEADZONE {
        -1
    } else {
        0
    }
}

/// Target-chasing input source
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// World frame of the last gravity flip
    last_flip: Option<u64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the next frame's input
    pub fn steer(&mut self, world: &World) -> TickInput {
        let player = &world.player;
        let mut input = TickInput::default();

        let target = world
            .targets
            .iter()
            .filter(|t| !t.collected)
            .min_by(|a, b| {
                a.pos
                    .distance_squared(player.pos)
                    .partial_cmp(&b.pos.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let delta = target.map(|t| t.pos - player.pos).unwrap_or(Vec3::ZERO);
        input.move_x = steer(delta.x);
        input.move_y = steer(delta.y);
        input.move_z = steer(delta.z);

        // Height at which the ball would touch a hazard row
        let hazard_line = BOUNDS - HAZARD_WALL_INSET - HAZARD_RADIUS - player.radius;
        let in_danger = world.config.hazards && player.pos.y.abs() > hazard_line - WALL_MARGIN;

        // Gravity and motion both carry the ball into a hazard row
        let near_wall = in_danger
            && player.pos.y * world.gravity.y > 0.0
            && player.pos.y * player.vel.y >= 0.0;

        // Gravity pulls away from the target and the ball is not already heading there
        let cooling = self
            .last_flip
            .is_some_and(|frame| world.frame.saturating_sub(frame) < FLIP_COOLDOWN);
        let wrong_way = !in_danger
            && !cooling
            && delta.y * world.gravity.y < 0.0
            && delta.y.abs() > DEADZONE
            && player.vel.y * delta.y <= 0.0;

        input.flip_gravity = near_wall || wrong_way;
        if input.flip_gravity {
            self.last_flip = Some(world.frame);
        }

        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;
    use crate::sim::state::Target;
    use crate::sim::tick::update;

    fn world_with_target(config: SimConfig, pos: Vec3) -> World {
        let mut world = World::new(config, 1);
        world.targets.clear();
        world.targets.push(Target::new(pos));
        world
    }

    #[test]
    fn test_steers_toward_target() {
        let world = world_with_target(SimConfig::freeroam(), Vec3::new(0.4, -0.3, -0.5));
        let input = Autopilot::new().steer(&world);
        assert_eq!(input.move_x, 1);
        assert_eq!(input.move_z, -1);
        // Gravity already points down toward the target
        assert!(!input.flip_gravity);
    }

    #[test]
    fn test_flips_when_target_above() {
        let world = world_with_target(SimConfig::freeroam(), Vec3::new(0.0, 0.5, 0.0));
        assert!(Autopilot::new().steer(&world).flip_gravity);
    }

    #[test]
    fn test_flips_before_floor_hazards() {
        let mut world = world_with_target(SimConfig::flatland(), Vec3::new(0.0, -0.7, 0.0));
        world.player.pos.y = -0.63;
        world.player.vel.y = -0.1;
        assert!(Autopilot::new().steer(&world).flip_gravity);
    }

    #[test]
    fn test_no_flip_back_toward_floor_hazards() {
        // Just flipped away from the floor; the target below must not pull it back
        let mut world = world_with_target(SimConfig::flatland(), Vec3::new(0.0, -0.7, 0.0));
        world.gravity = -world.gravity;
        world.player.pos.y = -0.63;
        world.player.vel.y = 0.06;
        assert!(!Autopilot::new().steer(&world).flip_gravity);
    }

    #[test]
    fn test_chase_flips_respect_cooldown() {
        let mut world = world_with_target(SimConfig::freeroam(), Vec3::new(0.0, 0.5, 0.0));
        let mut pilot = Autopilot::new();
        assert!(pilot.steer(&world).flip_gravity);
        world.frame += FLIP_COOLDOWN - 1;
        assert!(!pilot.steer(&world).flip_gravity);
        world.frame += 1;
        assert!(pilot.steer(&world).flip_gravity);
    }

    #[test]
    fn test_ignores_collected_targets() {
        let mut world = world_with_target(SimConfig::flatland(), Vec3::new(0.5, 0.0, 0.0));
        world.targets[0].collected = true;
        world.targets.push(Target::new(Vec3::new(-0.5, 0.0, 0.0)));
        assert_eq!(Autopilot::new().steer(&world).move_x, -1);
    }

    #[test]
    fn test_low_target_collected_without_flip_storm() {
        let mut world = world_with_target(SimConfig::flatland(), Vec3::new(0.0, -0.6, 0.0));
        world.targets.push(Target::new(Vec3::new(0.5, 0.0, 0.0)));
        world.player.pos.y = -0.45;
        let mut pilot = Autopilot::new();

        let mut flips = 0;
        let mut first_collected = false;
        for _ in 0..120 {
            let input = pilot.steer(&world);
            if input.flip_gravity {
                flips += 1;
            }
            update(&mut world, &input, 1.0 / 60.0);
            first_collected |= world.level == 1 && world.targets[0].collected;
        }

        assert!(first_collected);
        assert!(flips <= 6, "flips in 120 frames: {flips}");
        // A hazard reset would have dropped the score back to the level start
        assert!(world.score >= world.config.points_per_target);
    }
}
