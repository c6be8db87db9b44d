//! Gravity Box entry point
//!
//! Runs the frame loop headless: the autopilot plays, the HUD status line is
//! logged where a windowed front-end would set its caption.
//!
//! Usage: `gravity-box [flatland|freeroam] [config.json]`
//! (`GRAVITY_BOX_FRAMES` sets the number of frames, default 600)

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use gravity_box::consts::MAX_FRAME_DT;
use gravity_box::hud::status_line;
use gravity_box::renderer::snapshot;
use gravity_box::sim::{Autopilot, World, update};
use gravity_box::{SimConfig, Variant};

/// Nominal frame time of the headless loop
const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 600;

/// Game instance holding all state
struct Game {
    world: World,
    pilot: Autopilot,
    last_level: u32,
    last_status: String,
}

impl Game {
    fn new(config: SimConfig, seed: u64) -> Self {
        let world = World::new(config, seed);
        Self {
            last_level: world.level,
            last_status: String::new(),
            pilot: Autopilot::new(),
            world,
        }
    }

    /// One frame: input, update, then read-only consumers
    fn frame(&mut self, dt: f32) {
        let dt = dt.min(MAX_FRAME_DT);
        let input = self.pilot.steer(&self.world);
        update(&mut self.world, &input, dt);

        let draw = snapshot(&self.world);
        log::trace!("frame {}: {} instances", self.world.frame, draw.len());

        let status = status_line(&self.world);
        if self.world.level != self.last_level || self.world.frame % 60 == 0 {
            log::info!("{}", status);
            self.last_level = self.world.level;
        }
        self.last_status = status;
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Gravity Box (headless) starting...");

    let mut args = std::env::args().skip(1);
    let variant = match args.next() {
        Some(name) => Variant::from_str(&name).unwrap_or_else(|| {
            log::warn!("Unknown variant '{}', using Flatland", name);
            Variant::Flatland
        }),
        None => Variant::Flatland,
    };
    let config = match args.next() {
        Some(path) => SimConfig::load(Path::new(&path), variant),
        None => variant.config(),
    };

    let frames = std::env::var("GRAVITY_BOX_FRAMES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let seed = time_seed();
    let mut game = Game::new(config, seed);

    for _ in 0..frames {
        game.frame(FRAME_DT);
    }

    log::info!("Finished after {} frames: {}", game.world.frame, game.last_status);
}
