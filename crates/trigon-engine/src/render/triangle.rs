use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::math::Mat4;
use crate::render::{RenderCtx, RenderTarget};

/// Size of the transform uniform: one `mat4x4<f32>`.
const TRANSFORM_UBO_SIZE: u64 = std::mem::size_of::<Mat4>() as u64;

/// Clip-space positions (z = 0).
pub const TRIANGLE_POSITIONS: [Position; 3] = [
    Position { pos: [0.0, 1.0, 0.0] },
    Position { pos: [-1.0, -1.0, 0.0] },
    Position { pos: [1.0, -1.0, 0.0] },
];

/// Per-vertex RGB.
pub const TRIANGLE_COLORS: [VertexColor; 3] = [
    VertexColor { rgb: [0.98, 0.41, 0.46] },
    VertexColor { rgb: [0.96, 0.76, 0.42] },
    VertexColor { rgb: [0.97, 0.44, 0.75] },
];

pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// Draws the fixed triangle with a per-frame transform.
///
/// GPU objects are created once and cached; the pipeline is rebuilt only if the
/// surface format changes. Per frame, only the 64-byte transform is uploaded.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    transform_ubo: Option<wgpu::Buffer>,

    position_vbo: Option<wgpu::Buffer>,
    color_vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates all GPU objects up front so the first frame does no setup work.
    pub fn prepare(&mut self, device: &wgpu::Device, surface_format: wgpu::TextureFormat) {
        self.ensure_pipeline(device, surface_format);
        self.ensure_static_buffers(device);
        self.ensure_bindings(device);
    }

    /// Uploads `transform` and draws the triangle into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, transform: &Mat4) {
        self.prepare(ctx.device, ctx.surface_format);

        let Some(ubo) = self.transform_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::cast_slice(&transform[..]));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(position_vbo) = self.position_vbo.as_ref() else { return };
        let Some(color_vbo) = self.color_vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let (w, h) = ctx.target_size;
        rpass.set_viewport(0.0, 0.0, w.max(1) as f32, h.max(1) as f32, 0.0, 1.0);
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, position_vbo.slice(..));
        rpass.set_vertex_buffer(1, color_vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..TRIANGLE_INDICES.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, device: &wgpu::Device, surface_format: wgpu::TextureFormat) {
        if self.pipeline_format == Some(surface_format) && self.pipeline.is_some() {
            return;
        }

        log::debug!("building triangle pipeline for {surface_format:?}");

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("trigon triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("trigon transform bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(TRANSFORM_UBO_SIZE),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("trigon triangle pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("trigon triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Position::layout(), VertexColor::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Cw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bindings reference the old layout.
        self.bind_group = None;
        self.transform_ubo = None;
    }

    fn ensure_bindings(&mut self, device: &wgpu::Device) {
        if self.bind_group.is_some() && self.transform_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let transform_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("trigon transform ubo"),
            size: TRANSFORM_UBO_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("trigon transform bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_ubo.as_entire_binding(),
            }],
        });

        self.transform_ubo = Some(transform_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, device: &wgpu::Device) {
        if self.position_vbo.is_some() && self.color_vbo.is_some() && self.ibo.is_some() {
            return;
        }

        self.position_vbo = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trigon position vbo"),
            contents: bytemuck::cast_slice(&TRIANGLE_POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.color_vbo = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trigon color vbo"),
            contents: bytemuck::cast_slice(&TRIANGLE_COLORS),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.ibo = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trigon index buffer"),
            contents: bytemuck::cast_slice(&TRIANGLE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Position {
    pub pos: [f32; 3],
}

impl Position {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Position>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct VertexColor {
    pub rgb: [f32; 3],
}

impl VertexColor {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VertexColor>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
