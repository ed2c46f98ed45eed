use bytemuck::Zeroable;
use glam::{EulerRot, Mat4, Vec3};
use rand::Rng;
use wgpu::util::DeviceExt;
use web_sys as web;

use crate::constants::*;
use crate::core::constants::{CLOUD_COUNT, CLOUD_EXTENT, STAR_COUNT, STAR_RADIUS_MAX, STAR_RADIUS_MIN};
use crate::core::effects;
use crate::core::{Camera, GuidePose, PartTransform};

mod helpers;
mod mesh;
mod particles;
mod scene;

use helpers::DEPTH_FORMAT;
use mesh::Vertex;
use particles::ParticleLayer;
use scene::{Layer, Pivot, SceneNode};

// ===================== Shader interface =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    // Light positions carry intensity in w; spot_dir carries the cosine
    // of the cone half-angle in w.
    key_pos: [f32; 4],
    key_color: [f32; 4],
    fill_pos: [f32; 4],
    fill_color: [f32; 4],
    spot_pos: [f32; 4],
    spot_dir: [f32; 4],
    spot_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct NodeInstance {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth_view: wgpu::TextureView,
    depth_texture: wgpu::Texture,

    opaque_pipeline: wgpu::RenderPipeline,
    glow_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,

    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    corner_buffer: wgpu::Buffer,

    nodes: Vec<SceneNode>,
    instances: Vec<NodeInstance>,

    cloud: ParticleLayer,
    stars: ParticleLayer,
    cloud_model: Mat4,
    stars_model: Mat4,

    camera: Camera,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        // The canvas composites over the page, so prefer an alpha mode
        // that keeps it transparent.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| matches!(m, wgpu::CompositeAlphaMode::PreMultiplied))
            .unwrap_or(caps.alpha_modes[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = helpers::create_depth_texture(&device, width, height);
        let depth_view = depth_texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Geometry and node table
        let built = scene::build();
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scene_vertices"),
            contents: bytemuck::cast_slice(&built.bank.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scene_indices"),
            contents: bytemuck::cast_slice(&built.bank.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let nodes = built.nodes;
        let instances = vec![NodeInstance::zeroed(); nodes.len()];
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_instances"),
            size: (std::mem::size_of::<NodeInstance>() * nodes.len()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Scene uniforms and mesh pipelines
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });
        let opaque_pipeline =
            make_scene_pipeline(&device, &scene_shader, &scene_pl, format, true, "scene_opaque");
        let glow_pipeline =
            make_scene_pipeline(&device, &scene_shader, &scene_pl, format, false, "scene_glow");
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        // Particle layers, scattered once
        let (points_pipeline, points_bgl) = particles::create_points_pipeline(&device, format);
        let corner_buffer = particles::create_corner_buffer(&device);
        let mut cloud_rng = effects::cloud_rng();
        let cloud_positions = effects::scatter_cloud(&mut cloud_rng, CLOUD_COUNT, CLOUD_EXTENT);
        let cloud = ParticleLayer::new(
            &device,
            &points_bgl,
            "cloud",
            &cloud_positions,
            &[1.0; CLOUD_COUNT],
            [GLOW_COLOR[0], GLOW_COLOR[1], GLOW_COLOR[2], CLOUD_POINT_ALPHA],
            CLOUD_POINT_SIZE,
            // No distance fade for the near cloud
            [1.0e6, 2.0e6],
        );
        let mut star_rng = effects::star_rng();
        let star_positions =
            effects::scatter_shell(&mut star_rng, STAR_COUNT, STAR_RADIUS_MIN, STAR_RADIUS_MAX);
        let star_scales: Vec<f32> = (0..STAR_COUNT)
            .map(|_| star_rng.gen_range(0.5..1.5))
            .collect();
        let stars = ParticleLayer::new(
            &device,
            &points_bgl,
            "stars",
            &star_positions,
            &star_scales,
            [1.0, 1.0, 1.0, STAR_POINT_ALPHA],
            STAR_POINT_SIZE,
            // Fade across the shell thickness for depth
            [STAR_RADIUS_MIN, STAR_RADIUS_MAX],
        );

        let camera = Camera {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: width.max(1) as f32 / height.max(1) as f32,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            depth_texture,
            opaque_pipeline,
            glow_pipeline,
            points_pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            vertex_buffer,
            index_buffer,
            instance_buffer,
            corner_buffer,
            nodes,
            instances,
            cloud,
            stars,
            cloud_model: Mat4::IDENTITY,
            stars_model: Mat4::IDENTITY,
            camera,
            width,
            height,
        })
    }

    /// Re-issue the surface configuration after a Lost or Outdated frame.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture = helpers::create_depth_texture(&self.device, width, height);
            self.depth_view = self
                .depth_texture
                .create_view(&wgpu::TextureViewDescriptor::default());
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Write the figure's per-part transforms: pivot matrices from the
    /// pose, then each part's fixed local under its pivot.
    pub fn apply_figure(&mut self, sway: &PartTransform, pose: &GuidePose) {
        let root_m = part_matrix(sway)
            * Mat4::from_translation(ROOT_OFFSET)
            * part_matrix(&pose.root)
            * Mat4::from_scale(Vec3::splat(ROOT_SCALE));
        let head_m = root_m * Mat4::from_translation(scene::HEAD_PIVOT) * part_matrix(&pose.head);
        let arm_right_m =
            root_m * Mat4::from_translation(scene::ARM_RIGHT_PIVOT) * part_matrix(&pose.arm_right);
        let arm_left_m =
            root_m * Mat4::from_translation(scene::ARM_LEFT_PIVOT) * part_matrix(&pose.arm_left);

        for (node, slot) in self.nodes.iter().zip(self.instances.iter_mut()) {
            let pivot_m = match node.pivot {
                Pivot::Root => root_m,
                Pivot::Head => head_m,
                Pivot::ArmRight => arm_right_m,
                Pivot::ArmLeft => arm_left_m,
                // Ring transforms belong to apply_effects
                Pivot::RingInner | Pivot::RingOuter => continue,
            };
            *slot = NodeInstance {
                model: (pivot_m * node.local).to_cols_array_2d(),
                color: node.color,
                emissive: node.emissive,
            };
        }
    }

    /// Write the time-only layers: ring orientations and the cloud and
    /// star models.
    pub fn apply_effects(&mut self, rings: &[Vec3; 2], cloud: Vec3, stars: Vec3) {
        for (node, slot) in self.nodes.iter().zip(self.instances.iter_mut()) {
            let rotation = match node.pivot {
                Pivot::RingInner => rings[0],
                Pivot::RingOuter => rings[1],
                _ => continue,
            };
            *slot = NodeInstance {
                model: euler_matrix(rotation).to_cols_array_2d(),
                color: node.color,
                emissive: node.emissive,
            };
        }
        self.cloud_model = euler_matrix(cloud);
        self.stars_model = euler_matrix(stars);
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let view_proj = self.camera.view_proj_matrix();
        let forward = (self.camera.target - self.camera.eye).normalize();
        let cam_right = forward.cross(self.camera.up).normalize();
        let cam_up = cam_right.cross(forward);

        let spot_dir = -SPOT_LIGHT_POS.normalize();
        let uniforms = SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: self.camera.eye.extend(1.0).to_array(),
            ambient: [AMBIENT_INTENSITY, AMBIENT_INTENSITY, AMBIENT_INTENSITY, 0.0],
            key_pos: KEY_LIGHT_POS.extend(KEY_LIGHT_INTENSITY).to_array(),
            key_color: [GLOW_COLOR[0], GLOW_COLOR[1], GLOW_COLOR[2], 0.0],
            fill_pos: FILL_LIGHT_POS.extend(FILL_LIGHT_INTENSITY).to_array(),
            fill_color: [ACCENT_COLOR[0], ACCENT_COLOR[1], ACCENT_COLOR[2], 0.0],
            spot_pos: SPOT_LIGHT_POS.extend(SPOT_LIGHT_INTENSITY).to_array(),
            spot_dir: spot_dir.extend(SPOT_CONE_ANGLE.cos()).to_array(),
            spot_color: [GLOW_COLOR[0], GLOW_COLOR[1], GLOW_COLOR[2], 0.0],
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
        self.cloud
            .write_frame(&self.queue, view_proj, self.cloud_model, cam_right, cam_up);
        self.stars
            .write_frame(&self.queue, view_proj, self.stars_model, cam_right, cam_up);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
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
                        // Transparent clear: the page shows through
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
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

            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

            rpass.set_pipeline(&self.opaque_pipeline);
            self.draw_layer(&mut rpass, Layer::Opaque);
            rpass.set_pipeline(&self.glow_pipeline);
            self.draw_layer(&mut rpass, Layer::Glow);

            // Stars first so the near cloud blends over them
            rpass.set_pipeline(&self.points_pipeline);
            rpass.set_vertex_buffer(0, self.corner_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.stars.instance_buffer.slice(..));
            rpass.set_bind_group(0, &self.stars.bind_group, &[]);
            rpass.draw(0..6, 0..self.stars.count);
            rpass.set_vertex_buffer(1, self.cloud.instance_buffer.slice(..));
            rpass.set_bind_group(0, &self.cloud.bind_group, &[]);
            rpass.draw(0..6, 0..self.cloud.count);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn draw_layer(&self, rpass: &mut wgpu::RenderPass<'_>, layer: Layer) {
        for (i, node) in self.nodes.iter().enumerate() {
            if node.layer != layer {
                continue;
            }
            let start = node.mesh.index_start;
            let end = start + node.mesh.index_count;
            rpass.draw_indexed(start..end, node.mesh.base_vertex, i as u32..i as u32 + 1);
        }
    }
}

fn part_matrix(t: &PartTransform) -> Mat4 {
    Mat4::from_translation(t.position) * euler_matrix(t.rotation)
}

fn euler_matrix(rotation: Vec3) -> Mat4 {
    Mat4::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

fn make_scene_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    depth_write: bool,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_mesh"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<NodeInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![
                        2 => Float32x4,
                        3 => Float32x4,
                        4 => Float32x4,
                        5 => Float32x4,
                        6 => Float32x4,
                        7 => Float32x4,
                    ],
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_mesh"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
