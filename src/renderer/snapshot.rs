//! Read-only draw list built from the world after each update

use super::vertex::Instance;
use crate::sim::World;

/// Instances for one frame, grouped by draw order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub trail: Vec<Instance>,
    pub player: Vec<Instance>,
    pub targets: Vec<Instance>,
    pub hazards: Vec<Instance>,
    /// Alpha-blended, drawn last
    pub particles: Vec<Instance>,
}

impl DrawList {
    pub fn len(&self) -> usize {
        self.trail.len()
            + self.player.len()
            + self.targets.len()
            + self.hazards.len()
            + self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Everything in draw order
    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.trail
            .iter()
            .chain(&self.player)
            .chain(&self.targets)
            .chain(&self.hazards)
            .chain(&self.particles)
    }
}

/// Target radius with its pulse applied
pub fn target_pulse_radius(radius: f32, pulse: f32) -> f32 {
    radius * (1.0 + (pulse * 5.0).sin() * 0.2)
}

/// Hazard radius with its (slower, smaller) pulse applied
pub fn hazard_pulse_radius(radius: f32, pulse: f32) -> f32 {
    radius * (1.0 + (pulse * 3.0).cos() * 0.15)
}

/// Build the draw list for the current world state
pub fn snapshot(world: &World) -> DrawList {
    let player = &world.player;

    // Trail fades and shrinks with age (newest first)
    let trail_len = player.trail.capacity().max(1) as f32;
    let trail = player
        .trail
        .iter()
        .enumerate()
        .map(|(age, pos)| {
            let t = age as f32 / trail_len;
            Instance::new(pos, player.radius * (1.0 - t * 0.7), player.color, (1.0 - t) * 0.5)
        })
        .collect();

    let targets = world
        .targets
        .iter()
        .filter(|t| !t.collected)
        .map(|t| Instance::new(t.pos, target_pulse_radius(t.radius, t.pulse), t.color, 1.0))
        .collect();

    let hazards = world
        .hazards
        .iter()
        .map(|h| Instance::new(h.pos, hazard_pulse_radius(h.radius, h.pulse), h.color, 1.0))
        .collect();

    let particles = world
        .particles
        .iter()
        .map(|p| Instance::new(p.pos, p.size, p.color, (p.life / 2.0).clamp(0.0, 1.0)))
        .collect();

    DrawList {
        trail,
        player: vec![Instance::new(player.pos, player.radius, player.color, 1.0)],
        targets,
        hazards,
        particles,
    }
}
