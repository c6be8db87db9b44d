//! Platform abstraction layer
//!
//! Turns raw per-frame key state from whatever windowing front-end is in use
//! into simulation commands.

pub mod input;

pub use input::{InputState, KeyEdge, Keys};
