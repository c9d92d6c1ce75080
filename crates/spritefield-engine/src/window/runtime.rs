use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::core::logical_viewport;
use crate::device::{Gpu, GpuInit};
use crate::render::RenderCtx;
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Interval of the redraw timer.
    pub frame_interval: Duration,

    /// Clamp frame deltas to `[100 µs, 250 ms]`. When `false` the app sees
    /// the measured elapsed time between redraws.
    pub clamp_dt: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "spritefield".to_string(),
            initial_size: LogicalSize::new(600.0, 600.0),
            frame_interval: Duration::from_millis(16),
            clamp_dt: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `App` frames until it closes.
    ///
    /// `setup` runs exactly once, after the GPU is initialized and before the
    /// first frame, and returns the application state. An error from window or
    /// GPU creation, or from `setup`, stops the loop and is returned.
    pub fn run<A, F>(config: RuntimeConfig, gpu_init: GpuInit, setup: F) -> Result<()>
    where
        A: App + 'static,
        F: FnOnce(&RenderCtx<'_>) -> Result<A>,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, setup);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A, F> {
    config: RuntimeConfig,
    gpu_init: GpuInit,

    setup: Option<F>,
    app: Option<A>,

    window: Option<WindowEntry>,
    next_redraw: Instant,

    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A, F> AppState<A, F>
where
    A: App + 'static,
    F: FnOnce(&RenderCtx<'_>) -> Result<A>,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, setup: F) -> Self {
        Self {
            config,
            gpu_init,
            setup: Some(setup),
            app: None,
            window: None,
            next_redraw: Instant::now(),
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        self.request_exit(event_loop);
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let clock = if self.config.clamp_dt {
            FrameClock::new()
        } else {
            FrameClock::unclamped()
        };
        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            clock,
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()
    }

    /// Builds the window, the GPU context and the app state, in that order.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let Some(setup) = self.setup.take() else {
            return Ok(());
        };

        let mut entry = self.create_window_entry(event_loop)?;

        let viewport = entry.with_window(|w| logical_viewport(w));
        let app = entry.with_gpu(|gpu| {
            let rctx = RenderCtx::new(gpu, viewport);
            setup(&rctx)
        })?;

        // First frame measures from here, not from window creation.
        entry.with_clock_mut(|clock| clock.reset());
        entry.with_window(|w| w.request_redraw());

        self.app = Some(app);
        self.window = Some(entry);
        self.next_redraw = Instant::now() + self.config.frame_interval;
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let (Some(app), Some(entry)) = (self.app.as_mut(), self.window.as_mut()) else {
            return;
        };

        let mut control = AppControl::Continue;
        entry.with_mut(|fields| {
            let time: FrameTime = fields.clock.tick();
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu: fields.gpu,
                time,
            };
            control = app.on_frame(&mut ctx);
        });

        if control == AppControl::Exit {
            self.request_exit(event_loop);
        }
    }
}

impl<A, F> ApplicationHandler for AppState<A, F>
where
    A: App + 'static,
    F: FnOnce(&RenderCtx<'_>) -> Result<A>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        if let Err(err) = self.start(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Fixed-interval redraw timer.
        let now = Instant::now();
        if now >= self.next_redraw {
            if let Some(entry) = self.window.as_ref() {
                entry.with_window(|w| w.request_redraw());
            }
            self.next_redraw = now + self.config.frame_interval;
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_redraw));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_ref() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        if let Some(app) = self.app.as_mut() {
            if app.on_window_event(&event) == AppControl::Exit {
                self.request_exit(event_loop);
                return;
            }
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.window = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),

            _ => {}
        }
    }
}
