use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig, SinkGuard};
use crate::encode::still::{ensure_parent_dir, write_png_best};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{CloudError, CloudResult};
use crate::render::frame::FrameRGBA;
use crate::sheet::assemble::place_tile;
use crate::sheet::layout::{SheetLayout, SheetMeta};

/// Options for [`SheetSink`] output.
#[derive(Clone, Debug)]
pub struct SheetSinkOpts {
    /// Output sheet `.png` path. Metadata goes next to it with a `.json` extension.
    pub out_path: PathBuf,
    /// Tiles per sheet row, must be >= 1.
    pub columns: u32,
    /// Loop length recorded in the metadata, if frames were rendered loop-exact.
    pub loop_seconds: Option<f64>,
    /// Write the JSON metadata sidecar.
    pub write_meta: bool,
}

impl SheetSinkOpts {
    /// Sheet at `out_path` with `columns` tiles per row and a metadata sidecar.
    pub fn new(out_path: impl Into<PathBuf>, columns: u32) -> Self {
        Self {
            out_path: out_path.into(),
            columns,
            loop_seconds: None,
            write_meta: true,
        }
    }

    /// Path of the metadata sidecar.
    pub fn meta_path(&self) -> PathBuf {
        self.out_path.with_extension("json")
    }

    /// Reject sheet paths whose metadata sidecar would land on the sheet itself.
    pub fn validate(&self) -> CloudResult<()> {
        if self.write_meta && self.meta_path() == self.out_path {
            return Err(CloudError::validation(format!(
                "sheet output '{}' collides with its .json metadata sidecar",
                self.out_path.display()
            )));
        }
        Ok(())
    }
}

/// Sink that packs every pushed frame into one sprite sheet and writes it on `end`.
pub struct SheetSink {
    opts: SheetSinkOpts,
    guard: SinkGuard,
    layout: Option<SheetLayout>,
    sheet: Option<FrameRGBA>,
    meta: Option<SheetMeta>,
}

impl SheetSink {
    /// Create a sink writing to `opts.out_path`. Files are written in `end`.
    pub fn new(opts: SheetSinkOpts) -> Self {
        Self {
            opts,
            guard: SinkGuard::default(),
            layout: None,
            sheet: None,
            meta: None,
        }
    }

    /// Metadata of the last written sheet.
    pub fn meta(&self) -> Option<&SheetMeta> {
        self.meta.as_ref()
    }
}

impl FrameSink for SheetSink {
    fn begin(&mut self, cfg: SinkConfig) -> CloudResult<()> {
        self.opts.validate()?;
        self.guard.begin(&cfg)?;
        let frame_count = u32::try_from(cfg.frame_count)
            .map_err(|_| CloudError::validation("sheet frame count exceeds u32"))?;
        let layout = SheetLayout::new(
            frame_count,
            self.opts.columns,
            Canvas {
                width: cfg.width,
                height: cfg.height,
            },
        )?;
        let size = layout.sheet_canvas();
        tracing::debug!(
            columns = layout.columns(),
            rows = layout.rows(),
            width = size.width,
            height = size.height,
            "sheet sink started"
        );
        self.sheet = Some(FrameRGBA::transparent(size.width, size.height));
        self.layout = Some(layout);
        self.meta = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> CloudResult<()> {
        let pos = self.guard.accept(idx, frame)?;
        let (Some(layout), Some(sheet)) = (self.layout.as_ref(), self.sheet.as_mut()) else {
            return Err(CloudError::validation("push_frame called before begin"));
        };
        place_tile(layout, sheet, pos as u32, frame)
    }

    fn end(&mut self) -> CloudResult<()> {
        let cfg = self.guard.finish()?;
        let (Some(layout), Some(sheet)) = (self.layout.take(), self.sheet.take()) else {
            return Err(CloudError::validation("end called before begin"));
        };

        write_png_best(&self.opts.out_path, &sheet)?;
        let meta = layout.meta(cfg.fps, self.opts.loop_seconds);
        if self.opts.write_meta {
            write_meta(&self.opts.meta_path(), &meta)?;
        }
        tracing::info!(
            path = %self.opts.out_path.display(),
            columns = meta.columns,
            rows = meta.rows,
            frames = meta.frame_count,
            "wrote sprite sheet"
        );
        self.meta = Some(meta);
        Ok(())
    }
}

/// Write sheet metadata as pretty JSON.
pub fn write_meta(path: &Path, meta: &SheetMeta) -> CloudResult<()> {
    ensure_parent_dir(path)?;
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, meta)
        .map_err(|e| CloudError::serde(format!("write sheet metadata: {e}")))?;
    w.flush()
        .with_context(|| format!("flush '{}'", path.display()))?;
    Ok(())
}
