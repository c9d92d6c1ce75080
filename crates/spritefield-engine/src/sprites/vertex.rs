use bytemuck::{Pod, Zeroable};

use crate::paint::Rgba8;

use super::{Corner, Sprite};

/// Vertex records per sprite (one per quad corner).
pub const VERTICES_PER_SPRITE: usize = 4;

/// Indices per sprite (two triangles).
pub const INDICES_PER_SPRITE: usize = 6;

/// One corner of one sprite, as uploaded to the GPU.
///
/// Position, size, rotation and color are shared by the sprite's four records;
/// `corner` tells the vertex shader which offset and texture coordinate to use.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub rotation: f32,
    pub corner: u32,
    pub color: [u8; 4],
}

impl SpriteVertex {
    #[inline]
    pub fn new(sprite: &Sprite, corner: Corner) -> Self {
        Self {
            position: sprite.position.to_array(),
            size: sprite.size.to_array(),
            rotation: sprite.rotation,
            corner: corner.index(),
            color: sprite.color.to_array(),
        }
    }

    /// Decoded corner. Records built by the store always decode.
    #[inline]
    pub fn corner(&self) -> Option<Corner> {
        Corner::from_index(self.corner)
    }

    #[inline]
    pub fn color(&self) -> Rgba8 {
        Rgba8::from(self.color)
    }
}

/// Index list drawing `sprite_count` quads as two triangles each.
///
/// For sprite `i` with base vertex `b = 4i` the triangles are `(b, b+1, b+2)`
/// and `(b, b+2, b+3)`: bottom-left → bottom-right → top-right, then
/// bottom-left → top-right → top-left.
///
/// Returns `None` when the index count does not fit in `u32`.
pub fn quad_indices(sprite_count: usize) -> Option<Vec<u32>> {
    let index_count = sprite_count.checked_mul(INDICES_PER_SPRITE)?;
    // The draw range is `u32` too, so the count bounds every index.
    u32::try_from(index_count).ok()?;

    let mut indices = Vec::with_capacity(index_count);
    for i in 0..sprite_count as u32 {
        let b = i * VERTICES_PER_SPRITE as u32;
        indices.extend_from_slice(&[b, b + 1, b + 2, b, b + 2, b + 3]);
    }
    Some(indices)
}
