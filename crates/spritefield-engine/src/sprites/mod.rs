//! Sprite store: the animated state behind the sprite field.
//!
//! Each sprite is stored as four `SpriteVertex` records (one per quad corner)
//! that share position, size, rotation and color and differ only in their
//! `Corner`. The records are laid out so they can be uploaded to the GPU
//! verbatim; the vertex shader expands each corner from the shared attributes.
//!
//! Motion state (`SpriteMotion`) is kept in a parallel array and never leaves
//! the CPU.

mod config;
mod corner;
mod store;
mod vertex;
mod wrap;

pub use config::{Arena, SpawnConfig};
pub use corner::Corner;
pub use store::{Sprite, SpriteMotion, SpriteStore};
pub use vertex::{quad_indices, SpriteVertex, INDICES_PER_SPRITE, VERTICES_PER_SPRITE};
pub use wrap::{wrap, wrap_angle};
