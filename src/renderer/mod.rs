//! Rendering support
//!
//! The graphics front-end owns the window and GPU; this module only turns a
//! `World` into plain-old-data it can upload. Nothing here mutates the world.

pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use snapshot::{DrawList, snapshot};
pub use vertex::{Instance, Vertex};
