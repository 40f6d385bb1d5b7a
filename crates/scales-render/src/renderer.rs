use crate::error::RenderError;
use fnv::FnvHashMap;
use glam::Vec3;
use scales_core::{GeometryId, Scene};

mod helpers;
mod meshes;
mod particles;
mod uniforms;

use meshes::GpuMesh;
use particles::ParticleResources;
use uniforms::{FrameUniforms, MeshInstance};

const MAX_MESH_INSTANCES: usize = 16;

pub struct Renderer<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,

    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    mesh_pipeline: wgpu::RenderPipeline,
    meshes: FnvHashMap<GeometryId, GpuMesh>,
    instance_buffer: wgpu::Buffer,
    particles: ParticleResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'w> Renderer<'w> {
    /// Configure `surface` and build every GPU resource the scene needs.
    ///
    /// Particle positions are uploaded once; the field only rotates as a whole.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'w>,
        width: u32,
        height: u32,
        particle_positions: &[Vec3],
    ) -> Result<Self, RenderError> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;
        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps.formats).ok_or(RenderError::NoSurfaceFormat)?;
        let view_format = helpers::render_view_format(format);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::pick_alpha_mode(&caps.alpha_modes),
            view_formats: helpers::surface_view_formats(format),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} {:?} (view {:?}) alpha={:?}",
            width,
            height,
            format,
            view_format,
            config.alpha_mode
        );

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let mesh_pipeline = meshes::create_mesh_pipeline(&device, &pipeline_layout, &shader, view_format);
        let meshes = meshes::upload_geometries(&device);
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh_instances"),
            size: (std::mem::size_of::<MeshInstance>() * MAX_MESH_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let particles = particles::create_particle_resources(
            &device,
            &pipeline_layout,
            &shader,
            view_format,
            particle_positions,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            depth_tex,
            depth_view,
            frame_buffer,
            frame_bind_group,
            mesh_pipeline,
            meshes,
            instance_buffer,
            particles,
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
        })
    }

    pub fn set_clear_color(&mut self, color: wgpu::Color) {
        self.clear_color = color;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Re-apply the current configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        (self.depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    /// Draw one frame of `scene` and present it.
    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.view_format),
                ..Default::default()
            });

        self.queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::bytes_of(&FrameUniforms::from_scene(scene)),
        );
        let drawables = scene.drawables();
        let instances: Vec<MeshInstance> = drawables
            .iter()
            .take(MAX_MESH_INSTANCES)
            .map(|d| MeshInstance::new(scene, d))
            .collect();
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for (i, d) in drawables.iter().take(instances.len()).enumerate() {
                let Some(mesh) = self.meshes.get(&d.geometry) else {
                    continue;
                };
                let i = i as u32;
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, i..i + 1);
            }

            if self.particles.count > 0 {
                rpass.set_pipeline(&self.particles.pipeline);
                rpass.set_vertex_buffer(0, self.particles.buffer.slice(..));
                rpass.draw(0..6, 0..self.particles.count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
