//! Vertex and instance types for GPU upload

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Mesh vertex (position only; color comes per instance)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }
}

/// One sphere to draw: unit sphere mesh scaled by `radius` at `center`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub center: Vec3,
    pub radius: f32,
    pub color: [f32; 4],
}

impl Instance {
    pub fn new(center: Vec3, radius: f32, rgb: [f32; 3], alpha: f32) -> Self {
        Self {
            center,
            radius,
            color: [rgb[0], rgb[1], rgb[2], alpha],
        }
    }
}
