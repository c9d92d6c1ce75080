use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Mat4;
use crate::sprites::{quad_indices, SpriteVertex, VERTICES_PER_SPRITE};

use super::shader::compile_wgsl;
use super::{NoiseTexture, RenderCtx, RenderTarget};

/// Renderer for a fixed-size sprite field.
///
/// All GPU resources are created up front by [`SpriteRenderer::new`]:
/// - pipeline compiled from `shaders/sprite.wgsl`
/// - uniform buffer with projection + modelview
/// - bind group over the uniforms and the sprite texture
/// - vertex buffer sized for `4 × sprite_count` records, rewritten every frame
/// - static index buffer, two triangles per sprite
///
/// Each `render` call issues exactly one indexed draw.
pub struct SpriteRenderer {
    pipeline_format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_ubo: wgpu::Buffer,

    vertex_vbo: wgpu::Buffer,
    vertex_capacity: usize,

    index_ibo: wgpu::Buffer,
    index_count: u32,

    /// Half extent of the square arena kept in view vertically.
    arena_half_extent: f32,

    warned_mismatch: bool,
}

impl SpriteRenderer {
    /// Builds the pipeline and buffers for `sprite_count` sprites.
    ///
    /// Fails if the sprite shader does not compile.
    pub fn new(
        ctx: &RenderCtx<'_>,
        texture: &NoiseTexture,
        sprite_count: usize,
        arena_half_extent: f32,
    ) -> Result<Self> {
        // Also bounds every buffer size computed below.
        let indices = quad_indices(sprite_count.max(1))
            .context("sprite count exceeds the 32-bit index range")?;

        let shader = compile_wgsl(ctx.device, "spritefield sprite shader", include_str!("shaders/sprite.wgsl"))
            .context("building sprite pipeline")?;

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("spritefield sprite bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::VERTEX,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: wgpu::BufferSize::new(
                                    std::mem::size_of::<SpriteUniforms>() as u64,
                                ),
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 2,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("spritefield sprite pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("spritefield sprite pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[sprite_vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // Sprites are opaque and drawn in buffer order.
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
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

        let uniform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("spritefield sprite uniforms"),
            size: std::mem::size_of::<SpriteUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("spritefield sprite bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(texture.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(texture.sampler()),
                },
            ],
        });

        let vertex_capacity = sprite_count * VERTICES_PER_SPRITE;
        let vertex_vbo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("spritefield sprite vbo"),
            // wgpu rejects zero-sized vertex buffers at bind time.
            size: (vertex_capacity.max(VERTICES_PER_SPRITE) * std::mem::size_of::<SpriteVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index_ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("spritefield sprite ibo"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let index_count = if sprite_count == 0 { 0 } else { indices.len() as u32 };

        log::info!("sprite renderer ready: {sprite_count} sprites, {index_count} indices");

        Ok(Self {
            pipeline_format: ctx.surface_format,
            pipeline,
            bind_group,
            uniform_ubo,
            vertex_vbo,
            vertex_capacity,
            index_ibo,
            index_count,
            arena_half_extent,
            warned_mismatch: false,
        })
    }

    /// Uploads `vertices` and draws them with one indexed draw call.
    ///
    /// `vertices` is expected to hold exactly the sprite count given at
    /// construction; extra records are ignored.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        vertices: &[SpriteVertex],
    ) {
        debug_assert_eq!(self.pipeline_format, ctx.surface_format);

        if vertices.len() != self.vertex_capacity && !self.warned_mismatch {
            log::warn!(
                "SpriteRenderer: got {} vertices, built for {}; drawing the overlap",
                vertices.len(),
                self.vertex_capacity
            );
            self.warned_mismatch = true;
        }

        let uploaded = vertices.len().min(self.vertex_capacity);
        let sprite_count = uploaded / VERTICES_PER_SPRITE;
        if sprite_count == 0 {
            return;
        }
        let index_count = u32::try_from(quad_indices_len(sprite_count))
            .map_or(self.index_count, |n| n.min(self.index_count));

        self.write_uniforms(ctx);
        ctx.queue.write_buffer(
            &self.vertex_vbo,
            0,
            bytemuck::cast_slice(&vertices[..sprite_count * VERTICES_PER_SPRITE]),
        );

        let mut rpass = target.begin_pass("spritefield sprite pass", None);
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_vbo.slice(..));
        rpass.set_index_buffer(self.index_ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..index_count, 0, 0..1);
    }

    fn write_uniforms(&self, ctx: &RenderCtx<'_>) {
        let u = SpriteUniforms {
            projection: Mat4::arena_projection(self.arena_half_extent, ctx.viewport).cols,
            modelview: Mat4::IDENTITY.cols,
        };
        ctx.queue.write_buffer(&self.uniform_ubo, 0, bytemuck::bytes_of(&u));
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SpriteUniforms {
    projection: [[f32; 4]; 4],
    modelview: [[f32; 4]; 4],
}

const SPRITE_VERTEX_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    0 => Float32x2, // position
    1 => Float32x2, // size
    2 => Float32,   // rotation
    3 => Uint32,    // corner
    4 => Unorm8x4   // color
];

fn sprite_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SpriteVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &SPRITE_VERTEX_ATTRS,
    }
}

fn quad_indices_len(sprite_count: usize) -> usize {
    sprite_count * crate::sprites::INDICES_PER_SPRITE
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    #[test]
    fn attribute_offsets_match_vertex_fields() {
        let offsets: Vec<u64> = SPRITE_VERTEX_ATTRS.iter().map(|a| a.offset).collect();
        assert_eq!(
            offsets,
            vec![
                offset_of!(SpriteVertex, position) as u64,
                offset_of!(SpriteVertex, size) as u64,
                offset_of!(SpriteVertex, rotation) as u64,
                offset_of!(SpriteVertex, corner) as u64,
                offset_of!(SpriteVertex, color) as u64,
            ]
        );
    }

    #[test]
    fn layout_stride_is_vertex_size() {
        let layout = sprite_vertex_layout();
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn uniforms_are_two_matrices() {
        assert_eq!(std::mem::size_of::<SpriteUniforms>(), 128);
    }

    #[test]
    fn index_count_is_six_per_sprite() {
        assert_eq!(quad_indices_len(100), 600);
        assert_eq!(quad_indices(100).map(|i| i.len()), Some(quad_indices_len(100)));
    }
}
