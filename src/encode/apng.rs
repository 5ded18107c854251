use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig, SinkGuard};
use crate::encode::still::ensure_parent_dir;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{CloudError, CloudResult};
use crate::render::frame::FrameRGBA;

/// Options for [`ApngSink`] output.
#[derive(Clone, Debug)]
pub struct ApngSinkOpts {
    /// Output `.png` path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Number of plays; `0` loops forever.
    pub plays: u32,
}

impl ApngSinkOpts {
    /// Infinitely looping APNG at `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            plays: 0,
        }
    }
}

/// Sink that streams frames into an animated PNG.
///
/// Every frame is displayed for `floor(1000 / fps)` milliseconds.
pub struct ApngSink {
    opts: ApngSinkOpts,
    guard: SinkGuard,
    writer: Option<png::Writer<BufWriter<File>>>,
}

impl ApngSink {
    /// Create a sink writing to `opts.out_path`. The file is created in `begin`.
    pub fn new(opts: ApngSinkOpts) -> Self {
        Self {
            opts,
            guard: SinkGuard::default(),
            writer: None,
        }
    }
}

impl FrameSink for ApngSink {
    fn begin(&mut self, cfg: SinkConfig) -> CloudResult<()> {
        self.guard.begin(&cfg)?;
        let frame_count = u32::try_from(cfg.frame_count)
            .map_err(|_| CloudError::validation("apng frame count exceeds u32"))?;
        if frame_count == 0 {
            return Err(CloudError::validation("apng needs at least one frame"));
        }
        let delay_ms = u16::try_from(cfg.fps.frame_delay_ms()).map_err(|_| {
            CloudError::validation("apng frame delay exceeds 65535 ms (fps too low)")
        })?;

        let path = &self.opts.out_path;
        ensure_parent_dir(path)?;
        if !self.opts.overwrite && path.exists() {
            return Err(CloudError::validation(format!(
                "output file '{}' already exists",
                path.display()
            )));
        }

        let f = File::create(path).with_context(|| format!("create apng '{}'", path.display()))?;
        let mut encoder = png::Encoder::new(BufWriter::new(f), cfg.width, cfg.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .set_animated(frame_count, self.opts.plays)
            .map_err(|e| CloudError::encode(format!("apng animation control: {e}")))?;
        encoder
            .set_frame_delay(delay_ms, 1000)
            .map_err(|e| CloudError::encode(format!("apng frame delay: {e}")))?;
        let writer = encoder
            .write_header()
            .map_err(|e| CloudError::encode(format!("apng header: {e}")))?;

        tracing::debug!(
            path = %path.display(),
            frame_count,
            delay_ms,
            "apng sink started"
        );
        self.writer = Some(writer);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> CloudResult<()> {
        self.guard.accept(idx, frame)?;
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| CloudError::encode("apng writer is not open"))?;
        writer
            .write_image_data(&frame.data)
            .map_err(|e| CloudError::encode(format!("apng frame {}: {e}", idx.0)))
    }

    fn end(&mut self) -> CloudResult<()> {
        let cfg = self.guard.finish()?;
        let writer = self
            .writer
            .take()
            .ok_or_else(|| CloudError::encode("apng writer is not open"))?;
        writer
            .finish()
            .map_err(|e| CloudError::encode(format!("apng finish: {e}")))?;
        tracing::info!(
            path = %self.opts.out_path.display(),
            frames = cfg.frame_count,
            "wrote apng"
        );
        Ok(())
    }
}
