//! World state and entity types
//!
//! The [`World`] owns every entity; the updater mutates it in place and the
//! HUD and renderer only ever read it.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::burst::spawn_burst;
use super::collision::WallHits;
use crate::consts::*;
use crate::settings::{ResetScorePolicy, SimConfig, TimeScale};

/// Fixed-capacity ring of past player positions (render-only)
#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<Vec3>,
    capacity: usize,
    /// Next slot to overwrite once full
    head: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Record a position, overwriting the oldest once full
    pub fn push(&mut self, pos: Vec3) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() < self.capacity {
            self.points.push(pos);
        } else {
            self.points[self.head] = pos;
        }
        self.head = (self.head + 1) % self.capacity;
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.head = 0;
    }

    /// Positions from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        let len = self.points.len();
        (1..=len).map(move |age| {
            let idx = (self.head + self.capacity - age) % self.capacity;
            self.points[idx]
        })
    }
}

/// The player's ball
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    pub color: [f32; 3],
    pub trail: Trail,
}

impl Player {
    pub fn new(trail_capacity: usize) -> Self {
        Self {
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            radius: PLAYER_RADIUS,
            color: PLAYER_COLOR,
            trail: Trail::new(trail_capacity),
        }
    }
}

/// A collectible target
#[derive(Debug, Clone)]
pub struct Target {
    pub pos: Vec3,
    pub radius: f32,
    pub color: [f32; 3],
    pub collected: bool,
    /// Pulse animation phase (seconds)
    pub pulse: f32,
}

impl Target {
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            radius: TARGET_RADIUS,
            color: TARGET_COLOR,
            collected: false,
            pulse: 0.0,
        }
    }
}

/// A static hazard; touching one resets the round
#[derive(Debug, Clone)]
pub struct Hazard {
    pub pos: Vec3,
    pub radius: f32,
    pub color: [f32; 3],
    pub pulse: f32,
}

impl Hazard {
    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            radius: HAZARD_RADIUS,
            color: HAZARD_COLOR,
            pulse: 0.0,
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    pub color: [f32; 3],
    /// Seconds remaining; removed once <= 0
    pub life: f32,
    pub size: f32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub config: SimConfig,
    pub player: Player,
    pub targets: Vec<Target>,
    pub hazards: Vec<Hazard>,
    pub particles: Vec<Particle>,
    pub gravity: Vec3,
    pub score: u64,
    /// Current level (1-based)
    pub level: u32,
    /// Score banked when the current level started
    pub level_start_score: u64,
    pub time_scale: TimeScale,
    /// Update counter
    pub frame: u64,
    /// Walls the player touched on the last update
    pub wall_hits: WallHits,
    rng: Pcg32,
}

impl World {
    /// Create a world at level 1 with the first batch of targets
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut world = Self {
            player: Player::new(config.trail_capacity),
            targets: Vec::new(),
            hazards: Vec::new(),
            particles: Vec::new(),
            gravity: GRAVITY,
            score: 0,
            level: 1,
            level_start_score: 0,
            time_scale: TimeScale::Normal,
            frame: 0,
            wall_hits: WallHits::default(),
            rng: Pcg32::seed_from_u64(seed),
            config,
        };
        world.spawn_round();
        log::info!(
            "{} world created (seed {}, {} targets)",
            world.config.variant.as_str(),
            seed,
            world.targets.len()
        );
        world
    }

    /// Targets not yet collected
    pub fn targets_remaining(&self) -> usize {
        self.targets.iter().filter(|t| !t.collected).count()
    }

    /// Put the player back at the origin and restore canonical gravity
    pub fn reseat_player(&mut self) {
        self.player.pos = Vec3::ZERO;
        self.player.vel = Vec3::ZERO;
        self.player.trail.clear();
        self.gravity = GRAVITY;
    }

    /// Replace targets (and hazards) with a fresh batch for the current level
    pub fn spawn_round(&mut self) {
        let count = self.config.growth.count(self.level);
        let planar = self.config.planar;

        self.targets.clear();
        for _ in 0..count {
            let x = self.rng.random_range(-SAFE_ZONE..SAFE_ZONE);
            let y = self.rng.random_range(-SAFE_ZONE..SAFE_ZONE);
            let z = if planar {
                0.0
            } else {
                self.rng.random_range(-SAFE_ZONE..SAFE_ZONE)
            };
            let mut target = Target::new(Vec3::new(x, y, z));
            target.pulse = self.rng.random_range(0.0..TARGET_PULSE_SPREAD);
            self.targets.push(target);
        }

        self.hazards.clear();
        if self.config.hazards {
            let wall = BOUNDS - HAZARD_WALL_INSET;
            let rows = (2.0 * BOUNDS / HAZARD_SPACING).floor() as u32;
            for i in 0..=rows {
                let x = -BOUNDS + i as f32 * HAZARD_SPACING;
                self.hazards.push(Hazard::new(Vec3::new(x, wall, 0.0)));
                self.hazards.push(Hazard::new(Vec3::new(x, -wall, 0.0)));
            }
        }

        log::info!("Level {}: {} targets, {} hazards", self.level, count, self.hazards.len());
    }

    /// Reset after hazard contact; score follows the configured policy
    pub fn reset_round(&mut self) {
        match self.config.reset_score {
            ResetScorePolicy::PreserveLevelStart => {
                self.score = self.level_start_score;
            }
            ResetScorePolicy::Zero => {
                self.score = 0;
                self.level_start_score = 0;
                self.level = 1;
            }
        }
        self.particles.clear();
        self.reseat_player();
        self.spawn_round();
        log::info!("Round reset at level {} (score {})", self.level, self.score);
    }

    /// Full restart from level 1 with zero score
    pub fn restart(&mut self) {
        self.level = 1;
        self.score = 0;
        self.level_start_score = 0;
        self.particles.clear();
        self.reseat_player();
        self.spawn_round();
        log::info!("Game restarted");
    }

    /// Advance to the next level after the batch is cleared
    pub fn complete_level(&mut self) {
        self.level += 1;
        self.score += self.config.level_bonus;
        self.level_start_score = self.score;
        if self.config.recenter_on_round {
            self.reseat_player();
        }
        self.spawn_round();
    }

    /// Append an explosion burst to the live particles
    pub fn explode(&mut self, center: Vec3, color: [f32; 3], count: usize) {
        let shape = self.config.burst_shape;
        self.particles
            .extend(spawn_burst(&mut self.rng, center, color, count, shape));
    }
}
