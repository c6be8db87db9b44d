//! Status line for the window caption / HUD overlay

use crate::sim::World;

/// Format the current score, level, and target progress
///
/// Speed is only shown when the variant allows time scaling.
pub fn status_line(world: &World) -> String {
    let mut line = format!(
        "GRAVITY BOX | Level: {} | Score: {} | Targets: {}/{}",
        world.level,
        world.score,
        world.targets_remaining(),
        world.targets.len()
    );
    if world.config.time_scaling {
        line.push_str(" | Speed: ");
        line.push_str(world.time_scale.as_str());
    }
    line
}
