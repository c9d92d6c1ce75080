//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop)
//! and the application: the `App` trait and the per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};

pub(crate) use ctx::logical_viewport;
