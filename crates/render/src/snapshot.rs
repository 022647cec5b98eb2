//! PNG output of a rendered [`GradientSpec`].
//!
//! This module is feature-gated behind `png` (default on). The pixel buffer
//! itself comes from [`crate::pixel`].

use lchcolor_core::config::GradientSpec;
use lchcolor_core::error::ColorError;
use std::path::Path;
use tracing::info;

use crate::pixel::render_rgba;

/// Renders the spec's gradient strips and writes them as a PNG image.
///
/// Returns the spec's validation error, `ColorError::InvalidDimensions` if
/// the dimensions overflow `u32`, or `ColorError::Io` on write failure.
pub fn write_png(spec: &GradientSpec, path: &Path) -> Result<(), ColorError> {
    let rgba = render_rgba(spec)?;
    let w = u32::try_from(spec.width).map_err(|_| ColorError::InvalidDimensions)?;
    let h = u32::try_from(spec.height).map_err(|_| ColorError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| ColorError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| ColorError::Io(e.to_string()))?;
    info!(path = %path.display(), width = w, height = h, "wrote gradient snapshot");
    Ok(())
}
