//! Cylinder meshes for the scales assembly.
//!
//! Every part of the assembly is a (possibly truncated) cone along the local Y
//! axis, centred on the origin. The renderer uploads one buffer pair per
//! [`GeometryId`].

use bytemuck::{Pod, Zeroable};
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderSpec {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryId {
    Pole,
    Beam,
    String,
    Plate,
    Base,
}

impl GeometryId {
    pub const ALL: [GeometryId; 5] = [
        GeometryId::Pole,
        GeometryId::Beam,
        GeometryId::String,
        GeometryId::Plate,
        GeometryId::Base,
    ];

    pub fn spec(self) -> CylinderSpec {
        let (radius_top, radius_bottom, height, radial_segments) = match self {
            GeometryId::Pole => (0.15, 0.25, 8.0, 32),
            GeometryId::Beam => (0.1, 0.1, 6.0, 32),
            GeometryId::String => (0.02, 0.02, 3.0, 16),
            GeometryId::Plate => (1.2, 0.1, 0.5, 32),
            GeometryId::Base => (1.5, 1.8, 0.5, 32),
        };
        CylinderSpec {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        }
    }

    pub fn mesh(self) -> MeshData {
        cylinder(self.spec())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Side wall plus top and bottom caps.
///
/// Side: two rings of `segments + 1` vertices (the seam is duplicated so
/// normals stay continuous). Caps: a centre vertex plus a ring each.
pub fn cylinder(spec: CylinderSpec) -> MeshData {
    let segments = spec.radial_segments.max(3);
    let half = spec.height * 0.5;
    let slope = (spec.radius_bottom - spec.radius_top) / spec.height.max(f32::EPSILON);
    let ring = segments + 1;

    let mut mesh = MeshData {
        vertices: Vec::with_capacity((ring * 4 + 2) as usize),
        indices: Vec::with_capacity((segments * 12) as usize),
    };

    for (radius, y) in [(spec.radius_top, half), (spec.radius_bottom, -half)] {
        for i in 0..ring {
            let theta = i as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let n = glam::Vec3::new(sin, slope, cos).normalize();
            mesh.vertices.push(Vertex {
                position: [radius * sin, y, radius * cos],
                normal: n.to_array(),
            });
        }
    }
    for i in 0..segments {
        let a = i;
        let b = ring + i;
        let c = ring + i + 1;
        let d = i + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    push_cap(&mut mesh, spec.radius_top, half, 1.0, segments);
    push_cap(&mut mesh, spec.radius_bottom, -half, -1.0, segments);
    mesh
}

fn push_cap(mesh: &mut MeshData, radius: f32, y: f32, facing: f32, segments: u32) {
    let centre = mesh.vertices.len() as u32;
    let normal = [0.0, facing, 0.0];
    mesh.vertices.push(Vertex {
        position: [0.0, y, 0.0],
        normal,
    });
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.vertices.push(Vertex {
            position: [radius * sin, y, radius * cos],
            normal,
        });
    }
    for i in 0..segments {
        let a = centre + 1 + i;
        let b = a + 1;
        if facing > 0.0 {
            mesh.indices.extend_from_slice(&[centre, a, b]);
        } else {
            mesh.indices.extend_from_slice(&[centre, b, a]);
        }
    }
}
