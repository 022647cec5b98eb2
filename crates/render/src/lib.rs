#![deny(unsafe_code)]
//! Rasterization of gradient comparison images.
//!
//! Sits between `lchcolor-core` (colors, gradients, specs) and the CLI.
//! [`pixel`] produces RGBA8 buffers; [`snapshot`] writes them as PNG.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{render_rgba, strip_to_rgba};
