//! Keyboard state to [`TickInput`] translation
//!
//! The updater has no memory of raw key state, so one-shot commands (gravity
//! flip, reset) are edge-detected here from the previous frame's keys.

use crate::settings::TimeScale;
use crate::sim::TickInput;

/// Rising-edge detector for a single key
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEdge {
    was_down: bool,
}

impl KeyEdge {
    /// Feed this frame's key state; true only on the frame it goes down
    pub fn press(&mut self, down: bool) -> bool {
        let fired = down && !self.was_down;
        self.was_down = down;
        fired
    }
}

/// Raw key state sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Keys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Depth axis (3D variant)
    pub forward: bool,
    pub back: bool,
    pub flip: bool,
    pub reset: bool,
    /// Number keys 1/2/3
    pub slow: bool,
    pub normal: bool,
    pub fast: bool,
}

fn axis(neg: bool, pos: bool) -> i8 {
    match (neg, pos) {
        (true, false) => -1,
        (false, true) => 1,
        _ => 0,
    }
}

/// Tracks key edges across frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    flip: KeyEdge,
    reset: KeyEdge,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this frame's commands from raw keys
    pub fn sample(&mut self, keys: &Keys) -> TickInput {
        // Left wins when both are held
        let move_x = if keys.left {
            -1
        } else if keys.right {
            1
        } else {
            0
        };

        let time_scale = if keys.slow {
            Some(TimeScale::Slow)
        } else if keys.fast {
            Some(TimeScale::Fast)
        } else if keys.normal {
            Some(TimeScale::Normal)
        } else {
            None
        };

        TickInput {
            move_x,
            move_y: axis(keys.down, keys.up),
            move_z: axis(keys.back, keys.forward),
            flip_gravity: self.flip.press(keys.flip),
            reset: self.reset.press(keys.reset),
            time_scale,
        }
    }
}
