//! Gravity Box - A gravity-flipping target collection arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, world state)
//! - `settings`: Variant configuration (2D flatland, 3D free-roam)
//! - `platform`: Input edge tracking
//! - `hud`: Status line for the window caption
//! - `renderer`: Read-only draw snapshot for a graphics front-end

pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{SimConfig, Variant};
pub use sim::{TickInput, World, update};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Largest frame delta the update loop will integrate
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Half-extent of the world cube
    pub const BOUNDS: f32 = 0.8;
    /// Targets spawn within this half-extent (away from walls)
    pub const SAFE_ZONE: f32 = 0.6;

    /// Canonical starting gravity
    pub const GRAVITY: Vec3 = Vec3::new(0.0, -0.6, 0.0);
    /// Fraction of gravity applied as an upward kick when gravity flips
    pub const FLIP_KICK: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 0.05;
    pub const PLAYER_COLOR: [f32; 3] = [0.0, 1.0, 1.0];

    /// Target defaults
    pub const TARGET_RADIUS: f32 = 0.04;
    pub const TARGET_COLOR: [f32; 3] = [0.2, 1.0, 0.2];
    /// Initial pulse phase is sampled from [0, TARGET_PULSE_SPREAD)
    pub const TARGET_PULSE_SPREAD: f32 = 5.0;

    /// Hazard rows along the top and bottom walls
    pub const HAZARD_RADIUS: f32 = 0.04;
    pub const HAZARD_COLOR: [f32; 3] = [1.0, 0.2, 0.2];
    pub const HAZARD_SPACING: f32 = 0.15;
    pub const HAZARD_WALL_INSET: f32 = 0.05;

    /// Explosion particles
    pub const BURST_MIN_SPEED: f32 = 0.2;
    pub const BURST_MAX_SPEED: f32 = 1.2;
    pub const BURST_MIN_LIFE: f32 = 1.0;
    pub const BURST_MAX_LIFE: f32 = 2.0;
    pub const PARTICLE_SIZE: f32 = 0.03;
    /// Multiplicative size decay per frame
    pub const PARTICLE_DECAY: f32 = 0.98;
    /// Gravity flip burst
    pub const FLIP_BURST: usize = 20;
    pub const FLIP_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
    /// Player death burst on hazard contact
    pub const HAZARD_BURST: usize = 50;

    /// Scoring
    pub const POINTS_PER_TARGET: u64 = 10;
    pub const LEVEL_BONUS: u64 = 100;
}
