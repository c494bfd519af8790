use std::path::Path;

use anyhow::{Context, Result, ensure};
use image::{Rgba, RgbaImage};
use ramp_engine::gradient::Gradient;

/// Rasterizes the gradient into a horizontal `width` x `height` strip.
pub fn strip(gradient: &Gradient, width: u32, height: u32) -> Result<RgbaImage> {
    ensure!(width > 0 && height > 0, "preview size must be non-zero, got {width}x{height}");
    let row = gradient.render(width as usize);
    Ok(RgbaImage::from_fn(width, height, |x, _| Rgba(row[x as usize].to_srgb_u8())))
}

pub fn write_png(gradient: &Gradient, path: &Path, width: u32, height: u32) -> Result<()> {
    let img = strip(gradient, width, height)?;
    img.save(path)
        .with_context(|| format!("failed to write preview '{}'", path.display()))?;
    log::info!("wrote {width}x{height} preview to {}", path.display());
    Ok(())
}
