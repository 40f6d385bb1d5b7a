use scales_core::constants::{PARTICLE_OPACITY, PARTICLE_SIZE};
use scales_core::material::gold;
use scales_core::{Drawable, Scene};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    key_dir: [f32; 4],
    key_color: [f32; 4],
    rim_pos: [f32; 4],
    rim_dir: [f32; 4],
    rim_color: [f32; 4],
    particle_model: [[f32; 4]; 4],
    particle_color: [f32; 4],
    particle_params: [f32; 4],
}

#[inline]
fn rgba(rgb: [f32; 3], w: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], w]
}

impl FrameUniforms {
    pub(crate) fn from_scene(scene: &Scene) -> Self {
        let cam = &scene.camera;
        let lights = &scene.lights;
        let ambient = lights.ambient.color.scaled(lights.ambient.intensity);
        Self {
            view: cam.view_matrix().to_cols_array_2d(),
            proj: cam.projection_matrix().to_cols_array_2d(),
            camera_pos: cam.eye.extend(1.0).to_array(),
            ambient: rgba(ambient.to_linear(), 1.0),
            key_dir: lights
                .key
                .direction_to_light()
                .extend(lights.key.intensity)
                .to_array(),
            key_color: rgba(lights.key.color.to_linear(), 1.0),
            rim_pos: lights.rim.position.extend(lights.rim.angle.cos()).to_array(),
            rim_dir: lights.rim.direction().extend(lights.rim.intensity).to_array(),
            rim_color: rgba(lights.rim.color.to_linear(), 1.0),
            particle_model: scene.particles.model_matrix().to_cols_array_2d(),
            particle_color: rgba(gold().to_linear(), PARTICLE_OPACITY),
            particle_params: [PARTICLE_SIZE, 0.0, 0.0, 0.0],
        }
    }
}

/// Per-mesh data fed through an instance-rate vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshInstance {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    material: [f32; 4],
}

impl MeshInstance {
    pub(crate) fn new(scene: &Scene, drawable: &Drawable) -> Self {
        let material = scene.materials.get(drawable.material);
        Self {
            model: drawable.world.to_cols_array_2d(),
            color: rgba(material.color.to_linear(), 1.0),
            material: [material.metalness, material.roughness, 0.0, 0.0],
        }
    }

    pub(crate) const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scales_core::SceneOptions;

    #[test]
    fn uniform_layout_is_vec4_aligned() {
        // WGSL uniform structs need 16-byte multiples
        assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 3 * 64 + 9 * 16);
        assert_eq!(std::mem::size_of::<MeshInstance>(), 96);
    }

    #[test]
    fn instance_picks_up_shared_material_color() {
        let mut scene = Scene::new(&SceneOptions::default());
        scene
            .materials
            .get_mut(scales_core::MaterialId::Gold)
            .color = scales_core::Rgb::new(1.0, 0.0, 0.0);
        let beam = scene.drawables()[1];
        let inst = MeshInstance::new(&scene, &beam);
        assert!((inst.color[0] - 1.0).abs() < 1e-5);
        assert_eq!(&inst.color[1..], &[0.0, 0.0, 1.0]);
    }
}
