use anyhow::Result;
use spritefield_engine::core::{App, AppControl, FrameCtx};
use spritefield_engine::paint::Color;
use spritefield_engine::render::{NoiseTexture, RenderCtx, SpriteRenderer};
use spritefield_engine::sprites::SpriteStore;

use crate::config::DemoConfig;

/// Application state: built once when the GPU is ready, then advanced and
/// drawn on every frame.
pub struct SpriteField {
    store: SpriteStore,
    renderer: SpriteRenderer,
    // Bound by the renderer's bind group; kept alive alongside it.
    _texture: NoiseTexture,
    clear: Color,
}

impl SpriteField {
    pub fn new(ctx: &RenderCtx<'_>, config: &DemoConfig) -> Result<Self> {
        let mut rng = rand::thread_rng();

        let texture = NoiseTexture::new(ctx, config.texture_size, &mut rng);
        let store = SpriteStore::with_rng(config.sprite_count, &config.spawn, &mut rng);
        let renderer = SpriteRenderer::new(
            ctx,
            &texture,
            store.len(),
            store.arena().half_extent(),
        )?;

        log::info!(
            "spawned {} sprites in a {}-unit arena",
            store.len(),
            store.arena().half_extent() * 2.0
        );

        Ok(Self {
            store,
            renderer,
            _texture: texture,
            clear: config.clear,
        })
    }
}

impl App for SpriteField {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.store.update(ctx.time.dt);

        if ctx.time.frame_index % 600 == 0 {
            log::debug!("frame {} dt {:.4}s", ctx.time.frame_index, ctx.time.dt);
        }

        let (store, renderer) = (&self.store, &mut self.renderer);
        ctx.render(self.clear, |rctx, target| {
            renderer.render(rctx, target, store.vertices());
        })
    }
}
