//! Simulation module
//!
//! All gameplay logic lives here:
//! - One writer: `update` mutates the `World` once per frame
//! - RNG owned by the `World`, seeded at construction
//! - Stable iteration order (particles are filtered, never swapped)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod burst;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use burst::spawn_burst;
pub use collision::{WallHits, clamp_to_bounds, spheres_overlap};
pub use state::{Hazard, Particle, Player, Target, Trail, World};
pub use tick::{TickInput, update};
