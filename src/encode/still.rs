use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::foundation::error::CloudResult;
use crate::render::frame::FrameRGBA;

pub(crate) fn ensure_parent_dir(path: &Path) -> CloudResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `frame` as an RGBA PNG, creating parent directories as needed.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> CloudResult<()> {
    frame.validate()?;
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::info!(path = %path.display(), width = frame.width, height = frame.height, "wrote png");
    Ok(())
}

/// Write `frame` as an RGBA PNG with the slowest, smallest compression settings.
pub fn write_png_best(path: &Path, frame: &FrameRGBA) -> CloudResult<()> {
    frame.validate()?;
    ensure_parent_dir(path)?;
    let f = File::create(path).with_context(|| format!("create png '{}'", path.display()))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(f),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    encoder
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("encode png '{}'", path.display()))?;
    tracing::info!(path = %path.display(), width = frame.width, height = frame.height, "wrote png");
    Ok(())
}
