use rayon::prelude::*;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{CloudError, CloudResult};
use crate::render::frame::FrameRGBA;
use crate::synth::synthesizer::FrameSynthesizer;

const PROGRESS_EVERY: u64 = 60;

/// Options controlling `RenderSession` range rendering behavior.
#[derive(Clone, Debug)]
pub struct RenderSessionOpts {
    /// Enable frame-level parallelism (rayon), using a dedicated thread pool.
    pub parallel: bool,
    /// Frames rendered per parallel batch before they are handed to the sink.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 32,
            threads: None,
        }
    }
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Total frames in the requested range.
    pub frames_total: u64,
    /// Parallel batches used (1 per frame in sequential mode).
    pub chunks: u64,
}

/// Renders frames `[0, frame_count)` of one animation.
pub struct RenderSession {
    synth: FrameSynthesizer,
    frame_count: u64,
    opts: RenderSessionOpts,
}

impl RenderSession {
    /// Construct a session over `frame_count` frames.
    pub fn new(
        synth: FrameSynthesizer,
        frame_count: u64,
        opts: RenderSessionOpts,
    ) -> CloudResult<Self> {
        if frame_count == 0 {
            return Err(CloudError::validation("animation must have at least one frame"));
        }
        Ok(Self {
            synth,
            frame_count,
            opts,
        })
    }

    /// Total frames in the animation.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Borrow the synthesizer.
    pub fn synthesizer(&self) -> &FrameSynthesizer {
        &self.synth
    }

    /// The full animation range.
    pub fn full_range(&self) -> FrameRange {
        FrameRange::first(self.frame_count)
    }

    /// Render a single frame.
    pub fn render_frame(&self, frame: FrameIndex) -> CloudResult<FrameRGBA> {
        if frame.0 >= self.frame_count {
            return Err(CloudError::validation(format!(
                "frame {} is outside the animation (0..{})",
                frame.0, self.frame_count
            )));
        }
        Ok(self.synth.render_frame(frame))
    }

    /// The frame shown as a still preview: one quarter through the sequence.
    pub fn preview_index(&self) -> FrameIndex {
        FrameIndex(self.frame_count / 4)
    }

    /// Render a frame range and stream frames into a sink.
    ///
    /// The sink receives frames in strictly increasing frame index order whether or not
    /// `parallel` is enabled.
    #[tracing::instrument(skip(self, sink), fields(parallel = self.opts.parallel))]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> CloudResult<RenderStats> {
        if range.is_empty() {
            return Err(CloudError::validation("render_range range must be non-empty"));
        }
        if range.end.0 > self.frame_count {
            return Err(CloudError::validation(
                "render_range range must be within the animation",
            ));
        }

        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };

        let canvas = self.synth.canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.synth.fps(),
            frame_count: range.len_frames(),
        })?;

        let total = range.len_frames();
        let mut stats = RenderStats {
            frames_total: total,
            chunks: 0,
        };
        let mut done = 0u64;
        let report = |done: u64| {
            if done % PROGRESS_EVERY == 0 || done == total {
                tracing::info!(done, total, "rendered frames");
            }
        };

        if let Some(pool) = pool.as_ref() {
            let chunk_size = normalized_chunk_size(self.opts.chunk_size);
            let mut chunk_start = range.start.0;
            while chunk_start < range.end.0 {
                let chunk_end = (chunk_start + chunk_size).min(range.end.0);
                tracing::debug!(chunk_start, chunk_end, "rendering chunk");
                let len = (chunk_end - chunk_start) as usize;
                let frames: Vec<FrameRGBA> = pool.install(|| {
                    (0..len)
                        .into_par_iter()
                        .map(|i| self.synth.render_frame(FrameIndex(chunk_start + i as u64)))
                        .collect()
                });
                for (f, frame) in (chunk_start..chunk_end).zip(frames.iter()) {
                    sink.push_frame(FrameIndex(f), frame)?;
                    done += 1;
                    report(done);
                }
                stats.chunks += 1;
                chunk_start = chunk_end;
            }
        } else {
            for f in range.start.0..range.end.0 {
                let frame = self.synth.render_frame(FrameIndex(f));
                sink.push_frame(FrameIndex(f), &frame)?;
                done += 1;
                report(done);
                stats.chunks += 1;
            }
        }

        sink.end()?;
        Ok(stats)
    }
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

fn build_thread_pool(threads: Option<usize>) -> CloudResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CloudError::validation(
            "render_range 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CloudError::validation(format!("failed to build rayon thread pool: {e}")))
}
