//! Mesh generation for the static scene geometry
//!
//! Both meshes are built once and uploaded by the front-end; everything that
//! moves is drawn as a scaled [`Instance`](super::Instance) of the sphere.

use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;

/// Point on the unit sphere at polar `theta`, azimuth `phi`
fn sphere_point(theta: f32, phi: f32) -> Vertex {
    Vertex::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin())
}

/// Triangle list for a unit sphere (`rings` x `segments` quads)
pub fn unit_sphere(rings: u32, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((rings * segments * 6) as usize);

    for i in 0..rings {
        let theta1 = i as f32 * PI / rings as f32;
        let theta2 = (i + 1) as f32 * PI / rings as f32;
        for j in 0..segments {
            let phi1 = j as f32 * TAU / segments as f32;
            let phi2 = (j + 1) as f32 * TAU / segments as f32;

            let a = sphere_point(theta1, phi1);
            let b = sphere_point(theta2, phi1);
            let c = sphere_point(theta2, phi2);
            let d = sphere_point(theta1, phi2);

            // Two triangles
            vertices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    vertices
}

/// Line list for the twelve edges of a cube with the given half-extent
pub fn cube_wireframe(half: f32) -> Vec<Vertex> {
    let corner = |i: u32| {
        let s = |bit: u32| if i & bit != 0 { half } else { -half };
        Vertex::new(s(1), s(2), s(4))
    };

    let mut vertices = Vec::with_capacity(24);
    for i in 0..8u32 {
        // Each edge joins corners differing in one bit; emit it from the lower corner
        for bit in [1, 2, 4] {
            if i & bit == 0 {
                vertices.push(corner(i));
                vertices.push(corner(i | bit));
            }
        }
    }
    vertices
}
