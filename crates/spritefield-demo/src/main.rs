mod app;
mod config;

use anyhow::Result;
use spritefield_engine::logging::{init_logging, LoggingConfig};
use spritefield_engine::render::RenderCtx;
use spritefield_engine::window::Runtime;

use app::SpriteField;
use config::DemoConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    let runtime = config.runtime.clone();
    let gpu = config.gpu.clone();

    log::info!(
        "starting {:?}: {} sprites, {}x{} window",
        runtime.title,
        config.sprite_count,
        runtime.initial_size.width,
        runtime.initial_size.height
    );

    Runtime::run(runtime, gpu, move |ctx: &RenderCtx<'_>| SpriteField::new(ctx, &config))
}
