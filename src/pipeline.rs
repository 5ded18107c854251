use std::path::Path;

use crate::encode::apng::{ApngSink, ApngSinkOpts};
use crate::encode::sheet::{SheetSink, SheetSinkOpts};
use crate::encode::still::write_png;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{CloudError, CloudResult};
use crate::job::config::CloudJob;
use crate::session::render_session::{RenderSessionOpts, RenderStats};
use crate::sheet::layout::SheetMeta;

/// Render every frame of `job` into an infinitely looping APNG at `out`.
#[tracing::instrument(skip(job, out, opts), fields(out = %out.display()))]
pub fn export_apng(
    job: &CloudJob,
    out: &Path,
    opts: RenderSessionOpts,
) -> CloudResult<RenderStats> {
    let session = job.session(opts)?;
    let mut sink = ApngSink::new(ApngSinkOpts::new(out));
    session.render_range(session.full_range(), &mut sink)
}

/// Render every frame of `job` into a sprite sheet at `out` plus a `.json` metadata sidecar.
#[tracing::instrument(skip(job, out, opts), fields(out = %out.display()))]
pub fn export_sheet(
    job: &CloudJob,
    out: &Path,
    opts: RenderSessionOpts,
) -> CloudResult<SheetMeta> {
    let session = job.session(opts)?;
    let mut sink = SheetSink::new(SheetSinkOpts {
        loop_seconds: job.synth.phase.loop_seconds(),
        ..SheetSinkOpts::new(out, job.columns)
    });
    session.render_range(session.full_range(), &mut sink)?;
    sink.meta()
        .cloned()
        .ok_or_else(|| CloudError::encode("sheet sink finished without metadata"))
}

/// Render one still frame of `job` to `out`. `None` picks the frame a quarter of the way in.
#[tracing::instrument(skip(job, out), fields(out = %out.display()))]
pub fn export_preview(
    job: &CloudJob,
    out: &Path,
    frame: Option<FrameIndex>,
) -> CloudResult<FrameIndex> {
    let session = job.session(RenderSessionOpts::default())?;
    let idx = frame.unwrap_or_else(|| session.preview_index());
    let still = session.render_frame(idx)?;
    write_png(out, &still)?;
    Ok(idx)
}
