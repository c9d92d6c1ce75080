use rand::Rng;

use super::RenderCtx;

/// Square texture of uniformly random RGB noise, used as the sprite texture.
///
/// wgpu has no 3-channel 8-bit format, so texels are stored as RGBA8 with an
/// opaque alpha channel. Sampling repeats and filters linearly.
pub struct NoiseTexture {
    size: u32,
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl NoiseTexture {
    pub fn new<R: Rng + ?Sized>(ctx: &RenderCtx<'_>, size: u32, rng: &mut R) -> Self {
        let texels = noise_texels(size, rng);
        let extent = wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("spritefield noise texture"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &texels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(size * 4),
                rows_per_image: Some(size),
            },
            extent,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("spritefield noise sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        log::debug!("noise texture {size}x{size} uploaded");

        Self {
            size,
            _texture: texture,
            view,
            sampler,
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    #[inline]
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}

/// Generates `size × size` RGBA8 texels with random RGB and opaque alpha.
pub fn noise_texels<R: Rng + ?Sized>(size: u32, rng: &mut R) -> Vec<u8> {
    let texel_count = (size as usize) * (size as usize);
    let mut texels = vec![0u8; texel_count * 4];
    rng.fill(texels.as_mut_slice());
    for texel in texels.chunks_exact_mut(4) {
        texel[3] = u8::MAX;
    }
    texels
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn texel_buffer_is_rgba_sized() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(noise_texels(32, &mut rng).len(), 32 * 32 * 4);
        assert!(noise_texels(0, &mut rng).is_empty());
    }

    #[test]
    fn alpha_is_opaque() {
        let mut rng = StdRng::seed_from_u64(2);
        let texels = noise_texels(16, &mut rng);
        assert!(texels.chunks_exact(4).all(|t| t[3] == 255));
    }

    #[test]
    fn rgb_is_not_constant() {
        let mut rng = StdRng::seed_from_u64(3);
        let texels = noise_texels(32, &mut rng);
        let first = &texels[..3];
        assert!(texels.chunks_exact(4).any(|t| &t[..3] != first));
    }
}
