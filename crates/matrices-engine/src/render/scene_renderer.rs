use bytemuck::{Pod, Zeroable};

use crate::coords::Vertex;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawInstruction, Scene, Topology};

/// Smallest vertex buffer allocation, in vertices.
const MIN_VERTEX_CAPACITY: usize = 64;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ScreenUniform {
    size: [f32; 2],
    _pad: [f32; 2], // 16-byte alignment
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

fn primitive_topology(topology: Topology) -> wgpu::PrimitiveTopology {
    match topology {
        Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
    }
}

/// Draws a [`Scene`] from its flattened vertex buffer.
///
/// Two pipelines share one layout and differ only in topology. The whole
/// vertex buffer and the screen-size uniform are re-uploaded every frame.
#[derive(Default)]
pub struct SceneRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    line_pipeline: Option<wgpu::RenderPipeline>,
    triangle_pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    screen_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `draws` (as produced by `DrawBatcher::produce(scene)`) into `target`.
    ///
    /// Issues nothing when `draws` is empty.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        scene: &Scene,
        draws: &[DrawInstruction],
    ) {
        if draws.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_bindings(ctx);
        self.ensure_vertex_capacity(ctx, scene.vertex_count());

        let Some(ubo) = self.screen_ubo.as_ref() else { return };
        let Some(vbo) = self.vertex_vbo.as_ref() else { return };

        let uniform = ScreenUniform {
            size: scene.screen_size().uniform(),
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));
        ctx.queue
            .write_buffer(vbo, 0, bytemuck::cast_slice(scene.vertices()));

        let Some(line_pipeline) = self.line_pipeline.as_ref() else { return };
        let Some(triangle_pipeline) = self.triangle_pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("matrices scene pass"),
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

        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));

        let mut bound = None;
        for draw in draws {
            if bound != Some(draw.topology) {
                rpass.set_pipeline(match draw.topology {
                    Topology::LineStrip => line_pipeline,
                    Topology::TriangleList => triangle_pipeline,
                });
                bound = Some(draw.topology);
            }
            rpass.draw(draw.vertex_range(), 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.line_pipeline.is_some()
            && self.triangle_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("matrices scene shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("matrices scene bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<ScreenUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("matrices scene pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let build = |topology: Topology, label: &str| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: primitive_topology(topology),
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    // Mirrored (negative-size) rectangles wind clockwise.
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        let line_pipeline = build(Topology::LineStrip, "matrices line strip pipeline");
        let triangle_pipeline = build(Topology::TriangleList, "matrices triangle list pipeline");

        log::debug!("scene pipelines built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.line_pipeline = Some(line_pipeline);
        self.triangle_pipeline = Some(triangle_pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.screen_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.screen_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let screen_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("matrices screen ubo"),
            size: std::mem::size_of::<ScreenUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("matrices scene bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_ubo.as_entire_binding(),
            }],
        });

        self.screen_ubo = Some(screen_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }

        let new_cap = required.next_power_of_two().max(MIN_VERTEX_CAPACITY);
        log::debug!("growing scene vertex buffer to {new_cap} vertices");

        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("matrices scene vbo"),
            size: (new_cap * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_maps_to_gpu_primitive() {
        assert_eq!(
            primitive_topology(Topology::LineStrip),
            wgpu::PrimitiveTopology::LineStrip
        );
        assert_eq!(
            primitive_topology(Topology::TriangleList),
            wgpu::PrimitiveTopology::TriangleList
        );
    }

    #[test]
    fn vertex_layout_matches_vertex_stride() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 8);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    fn screen_uniform_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<ScreenUniform>(), 16);
    }
}
