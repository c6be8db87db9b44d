//! Simulation configuration
//!
//! Both game variants run through the same update loop; everything that
//! differs between them lives in [`SimConfig`]. A config file is overlaid on
//! the preset of the selected variant, so it only needs the fields it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game variant presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// 2D plane, hazard rows on floor and ceiling
    #[default]
    Flatland,
    /// Full 3D cube with bouncing walls
    Freeroam,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Flatland => "Flatland",
            Variant::Freeroam => "Freeroam",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flatland" | "flat" | "2d" => Some(Variant::Flatland),
            "freeroam" | "free" | "3d" => Some(Variant::Freeroam),
            _ => None,
        }
    }

    /// Preset configuration for this variant
    pub fn config(&self) -> SimConfig {
        match self {
            Variant::Flatland => SimConfig::flatland(),
            Variant::Freeroam => SimConfig::freeroam(),
        }
    }
}

/// What happens to the player's velocity at a wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Zero the velocity component on that axis
    Stop,
    /// Invert the velocity component and scale by restitution
    Bounce { restitution: f32 },
}

impl BoundaryPolicy {
    /// Velocity component after hitting a wall
    pub fn respond(&self, v: f32) -> f32 {
        match *self {
            BoundaryPolicy::Stop => 0.0,
            BoundaryPolicy::Bounce { restitution } => -v * restitution,
        }
    }
}

/// Number of targets spawned for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetGrowth {
    /// `base + per_level * level`
    Linear { base: u32, per_level: u32 },
}

impl TargetGrowth {
    pub fn count(&self, level: u32) -> usize {
        match *self {
            TargetGrowth::Linear { base, per_level } => {
                base.saturating_add(per_level.saturating_mul(level)) as usize
            }
        }
    }
}

/// Score handling when a round is reset by hazard contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetScorePolicy {
    /// Keep the score banked when the current level started
    PreserveLevelStart,
    /// Zero the score and restart from level 1
    Zero,
}

/// How movement flags steer the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MovementMode {
    /// Held direction sets the velocity outright; released stops immediately
    SetVelocity { speed: f32 },
    /// Held direction accelerates the player
    Thrust { accel: f32 },
}

/// Shape of explosion bursts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstShape {
    /// Directions in the xy-plane
    Planar,
    /// Directions over the whole sphere
    Spherical,
}

/// Simulation speed selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeScale {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl TimeScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeScale::Slow => "Slow",
            TimeScale::Normal => "Normal",
            TimeScale::Fast => "Fast",
        }
    }

    /// Integration step multiplier
    pub fn factor(&self) -> f32 {
        match self {
            TimeScale::Slow => 0.5,
            TimeScale::Normal => 1.0,
            TimeScale::Fast => 2.0,
        }
    }
}

/// Per-axis steering enable flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteerAxes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

/// Everything that distinguishes one game variant from another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub variant: Variant,

    // === Physics ===
    pub boundary: BoundaryPolicy,
    /// Constrain the player to the xy-plane
    pub planar: bool,
    pub movement: MovementMode,
    pub steer: SteerAxes,
    /// Allow the time-scale selector to change the integration step
    pub time_scaling: bool,

    // === Rounds ===
    pub hazards: bool,
    pub growth: TargetGrowth,
    pub reset_score: ResetScorePolicy,
    /// Re-seed player and gravity when a new batch spawns
    pub recenter_on_round: bool,
    pub points_per_target: u64,
    pub level_bonus: u64,

    // === Effects ===
    pub target_burst: usize,
    pub hazard_burst: usize,
    pub flip_burst: usize,
    pub burst_shape: BurstShape,
    /// Fraction of gravity felt by particles
    pub particle_gravity: f32,
    /// Player trail length (0 disables)
    pub trail_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::flatland()
    }
}

impl SimConfig {
    /// 2D variant: walls stop the ball, hazards line floor and ceiling
    pub fn flatland() -> Self {
        Self {
            variant: Variant::Flatland,
            boundary: BoundaryPolicy::Stop,
            planar: true,
            movement: MovementMode::SetVelocity { speed: 1.0 },
            steer: SteerAxes {
                x: true,
                y: false,
                z: false,
            },
            time_scaling: false,
            hazards: true,
            growth: TargetGrowth::Linear {
                base: 2,
                per_level: 1,
            },
            reset_score: ResetScorePolicy::PreserveLevelStart,
            recenter_on_round: true,
            points_per_target: POINTS_PER_TARGET,
            level_bonus: LEVEL_BONUS,
            target_burst: 30,
            hazard_burst: HAZARD_BURST,
            flip_burst: FLIP_BURST,
            burst_shape: BurstShape::Planar,
            particle_gravity: 0.3,
            trail_capacity: 0,
        }
    }

    /// 3D variant: bouncing walls, no hazards, selectable time scale
    pub fn freeroam() -> Self {
        Self {
            variant: Variant::Freeroam,
            boundary: BoundaryPolicy::Bounce { restitution: 0.8 },
            planar: false,
            movement: MovementMode::Thrust { accel: 1.5 },
            steer: SteerAxes {
                x: true,
                y: false,
                z: true,
            },
            time_scaling: true,
            hazards: false,
            growth: TargetGrowth::Linear {
                base: 3,
                per_level: 2,
            },
            reset_score: ResetScorePolicy::Zero,
            recenter_on_round: false,
            points_per_target: POINTS_PER_TARGET,
            level_bonus: LEVEL_BONUS,
            target_burst: 20,
            hazard_burst: HAZARD_BURST,
            flip_burst: FLIP_BURST,
            burst_shape: BurstShape::Spherical,
            particle_gravity: 0.5,
            trail_capacity: 20,
        }
    }

    /// Parse a config from JSON; missing fields come from the flatland preset
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply the top-level fields of a JSON object on top of this config
    ///
    /// Fields are replaced whole, so a nested value such as `steer` must be
    /// given in full.
    pub fn overlay_json(&self, json: &str) -> Result<Self, serde_json::Error> {
        let overrides: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(self)?;
        if let serde_json::Value::Object(fields) = &mut merged {
            fields.extend(overrides);
        }
        serde_json::from_value(merged)
    }

    /// Load a config file over the `variant` preset, falling back to the
    /// bare preset on any failure
    pub fn load(path: &Path, variant: Variant) -> Self {
        let preset = variant.config();
        match std::fs::read_to_string(path) {
            Ok(json) => match preset.overlay_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {} over {} preset", path.display(), variant.as_str());
                    config
                }
                Err(e) => {
                    log::warn!("Bad config {}: {}, using {} preset", path.display(), e, variant.as_str());
                    preset
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}, using {} preset", path.display(), e, variant.as_str());
                preset
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_response() {
        assert_eq!(BoundaryPolicy::Stop.respond(3.0), 0.0);
        let bounce = BoundaryPolicy::Bounce { restitution: 0.8 };
        assert!((bounce.respond(1.0) + 0.8).abs() < 1e-6);
        assert!((bounce.respond(-2.0) - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_growth_strictly_increasing() {
        for variant in [Variant::Flatland, Variant::Freeroam] {
            let growth = variant.config().growth;
            for level in 1..20 {
                assert!(growth.count(level + 1) > growth.count(level));
            }
        }
        assert_eq!(SimConfig::flatland().growth.count(1), 3);
        assert_eq!(SimConfig::freeroam().growth.count(1), 5);
    }

    #[test]
    fn test_partial_json_overlays_flatland() {
        let config = SimConfig::from_json(r#"{ "target_burst": 12, "planar": false }"#).unwrap();
        assert_eq!(config.target_burst, 12);
        assert!(!config.planar);
        assert_eq!(config.boundary, BoundaryPolicy::Stop);
        assert_eq!(config.reset_score, ResetScorePolicy::PreserveLevelStart);
    }

    #[test]
    fn test_json_round_trip_preset() {
        let json = serde_json::to_string(&SimConfig::freeroam()).unwrap();
        assert_eq!(SimConfig::from_json(&json).unwrap(), SimConfig::freeroam());
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(SimConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = SimConfig::load(Path::new("/nonexistent/gravity_box.json"), Variant::Freeroam);
        assert_eq!(config, SimConfig::freeroam());
    }

    #[test]
    fn test_overlay_keeps_base_variant() {
        let config = SimConfig::freeroam()
            .overlay_json(r#"{ "target_burst": 5, "boundary": "Stop" }"#)
            .unwrap();
        assert_eq!(config.target_burst, 5);
        assert_eq!(config.boundary, BoundaryPolicy::Stop);
        assert_eq!(config.variant, Variant::Freeroam);
        assert!(config.time_scaling);
        // Whole-field replacement lets an enum switch variant
        let thrust = SimConfig::flatland()
            .overlay_json(r#"{ "movement": { "Thrust": { "accel": 2.0 } } }"#)
            .unwrap();
        assert_eq!(thrust.movement, MovementMode::Thrust { accel: 2.0 });
        assert!(SimConfig::freeroam().overlay_json("[1, 2]").is_err());
    }

    #[test]
    fn test_load_partial_file_over_variant() {
        let path = std::env::temp_dir().join(format!("gravity_box_partial_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "target_burst": 5 }"#).unwrap();
        let config = SimConfig::load(&path, Variant::Freeroam);
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.target_burst, 5);
        assert_eq!(config.variant, Variant::Freeroam);
        assert_eq!(config.boundary, BoundaryPolicy::Bounce { restitution: 0.8 });
        assert!(!config.planar);
        assert!(!config.hazards);
        assert_eq!(config.trail_capacity, 20);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(Variant::from_str("3D"), Some(Variant::Freeroam));
        assert_eq!(Variant::from_str("flatland"), Some(Variant::Flatland));
        assert_eq!(Variant::from_str("bogus"), None);
    }
}
