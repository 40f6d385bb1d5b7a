//! Scene graph and construction of the scales assembly.
//!
//! The hierarchy is fixed, so it is modelled as plain structs rather than a
//! generic node arena:
//!
//! ```text
//! ScalesAssembly (group)
//! ├── pole
//! ├── beam
//! ├── left_pan (group) ── string, plate
//! ├── right_pan (group) ── string, plate
//! └── base
//! ```

use crate::camera::Camera;
use crate::color::Rgb;
use crate::constants::*;
use crate::geometry::GeometryId;
use crate::material::{gold, MaterialId, Materials};
use crate::particles::ParticleField;
use crate::transform::Transform;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Debug)]
pub struct MeshNode {
    pub name: &'static str,
    pub transform: Transform,
    pub geometry: GeometryId,
    pub material: MaterialId,
}

impl MeshNode {
    fn new(name: &'static str, geometry: GeometryId, material: MaterialId) -> Self {
        Self {
            name,
            transform: Transform::new(),
            geometry,
            material,
        }
    }

    fn at(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// One weighing pan: a string hanging above a plate.
#[derive(Clone, Debug)]
pub struct PanNode {
    pub transform: Transform,
    pub string: MeshNode,
    pub plate: MeshNode,
}

impl PanNode {
    fn new(string_name: &'static str, plate_name: &'static str, x: f32) -> Self {
        Self {
            transform: Transform::new().with_position(Vec3::new(x, PAN_REST_Y, 0.0)),
            string: MeshNode::new(string_name, GeometryId::String, MaterialId::Silver)
                .at(Transform::new().with_position(Vec3::new(0.0, 1.5, 0.0))),
            plate: MeshNode::new(plate_name, GeometryId::Plate, MaterialId::Gold)
                .at(Transform::new().with_rotation(Vec3::new(PI, 0.0, 0.0))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScalesAssembly {
    pub transform: Transform,
    pub pole: MeshNode,
    pub beam: MeshNode,
    pub left_pan: PanNode,
    pub right_pan: PanNode,
    pub base: MeshNode,
}

impl ScalesAssembly {
    fn new() -> Self {
        Self {
            transform: Transform::new(),
            pole: MeshNode::new("pole", GeometryId::Pole, MaterialId::Base)
                .at(Transform::new().with_position(Vec3::new(0.0, -1.0, 0.0))),
            beam: MeshNode::new("beam", GeometryId::Beam, MaterialId::Gold).at(Transform::new()
                .with_position(Vec3::new(0.0, 3.0, 0.0))
                .with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2))),
            left_pan: PanNode::new("left_string", "left_plate", -2.8),
            right_pan: PanNode::new("right_string", "right_plate", 2.8),
            base: MeshNode::new("base", GeometryId::Base, MaterialId::Base)
                .at(Transform::new().with_position(Vec3::new(0.0, -5.0, 0.0))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector from the scene origin toward the light.
    pub fn direction_to_light(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: Rgb,
    pub intensity: f32,
    /// Half-angle of the cone in radians
    pub angle: f32,
}

impl SpotLight {
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

#[derive(Clone, Debug)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub key: DirectionalLight,
    pub rim: SpotLight,
}

impl Lights {
    fn standard() -> Self {
        Self {
            ambient: AmbientLight {
                color: Rgb::WHITE,
                intensity: AMBIENT_INTENSITY,
            },
            key: DirectionalLight {
                position: Vec3::from(KEY_LIGHT_POSITION),
                color: Rgb::WHITE,
                intensity: KEY_LIGHT_INTENSITY,
            },
            rim: SpotLight {
                position: Vec3::from(RIM_LIGHT_POSITION),
                target: Vec3::ZERO,
                color: gold(),
                intensity: RIM_LIGHT_INTENSITY,
                angle: RIM_LIGHT_ANGLE,
            },
        }
    }
}

/// Construction parameters for [`Scene::new`].
#[derive(Clone, Debug)]
pub struct SceneOptions {
    pub particle_count: usize,
    pub particle_spread: f32,
    pub seed: u64,
    /// Initial camera aspect; the first resize overwrites it
    pub aspect: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_spread: PARTICLE_SPREAD,
            seed: PARTICLE_SEED,
            aspect: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Lights,
    pub materials: Materials,
    pub assembly: ScalesAssembly,
    pub particles: ParticleField,
}

/// A mesh flattened to world space, ready for drawing.
#[derive(Clone, Copy, Debug)]
pub struct Drawable {
    pub name: &'static str,
    pub geometry: GeometryId,
    pub material: MaterialId,
    pub world: Mat4,
}

impl Scene {
    pub fn new(options: &SceneOptions) -> Self {
        Self {
            camera: Camera::perspective(options.aspect),
            lights: Lights::standard(),
            materials: Materials::standard(),
            assembly: ScalesAssembly::new(),
            particles: ParticleField::generate(
                options.particle_count,
                options.particle_spread,
                options.seed,
            ),
        }
    }

    /// Walk the hierarchy and compose world matrices group -> pan -> mesh.
    pub fn drawables(&self) -> SmallVec<[Drawable; 8]> {
        let a = &self.assembly;
        let group = a.transform.local_matrix();
        let mut out = SmallVec::new();
        let mut push = |node: &MeshNode, parent: Mat4| {
            out.push(Drawable {
                name: node.name,
                geometry: node.geometry,
                material: node.material,
                world: parent * node.transform.local_matrix(),
            });
        };
        push(&a.pole, group);
        push(&a.beam, group);
        for pan in [&a.left_pan, &a.right_pan] {
            let pan_world = group * pan.transform.local_matrix();
            push(&pan.string, pan_world);
            push(&pan.plate, pan_world);
        }
        push(&a.base, group);
        out
    }
}

/// Everything the per-frame and on-demand components need, bundled with the
/// host objects the scene was built for.
pub struct SceneHandles<C, S> {
    pub container: C,
    pub surface: S,
    pub scene: Scene,
}

/// Build the scene only when both the container and the drawing surface are
/// present. Otherwise nothing is constructed and the caller must not start
/// any of the dependent components.
pub fn build<C, S>(
    container: Option<C>,
    surface: Option<S>,
    options: &SceneOptions,
) -> Option<SceneHandles<C, S>> {
    let (Some(container), Some(surface)) = (container, surface) else {
        log::info!("[scene] container or surface missing; skipping 3D scene");
        return None;
    };
    let scene = Scene::new(options);
    log::info!(
        "[scene] built {} meshes, {} particles",
        scene.drawables().len(),
        scene.particles.len()
    );
    Some(SceneHandles {
        container,
        surface,
        scene,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembly_has_seven_meshes_in_hierarchy_order() {
        let scene = Scene::new(&SceneOptions::default());
        let names: Vec<_> = scene.drawables().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            [
                "pole",
                "beam",
                "left_string",
                "left_plate",
                "right_string",
                "right_plate",
                "base"
            ]
        );
    }

    #[test]
    fn pan_children_inherit_group_transform() {
        let mut scene = Scene::new(&SceneOptions::default());
        scene.assembly.transform.position = Vec3::new(10.0, 0.0, 0.0);
        let d = scene.drawables();
        let left_plate = d.iter().find(|d| d.name == "left_plate").map(|d| d.world);
        let origin = left_plate
            .map(|m| m.transform_point3(Vec3::ZERO))
            .unwrap_or(Vec3::NAN);
        assert!(origin.abs_diff_eq(Vec3::new(7.2, 1.5, 0.0), 1e-5), "{origin:?}");
    }

    #[test]
    fn material_references_are_shared() {
        let scene = Scene::new(&SceneOptions::default());
        let gold_users = scene
            .drawables()
            .iter()
            .filter(|d| d.material == MaterialId::Gold)
            .count();
        // beam + two plates
        assert_eq!(gold_users, 3);
    }
}
