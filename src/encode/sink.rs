use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{CloudError, CloudResult};
use crate::render::frame::FrameRGBA;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames-per-second of the sequence.
    pub fps: Fps,
    /// Number of frames that will be pushed.
    pub frame_count: u64,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, exactly
/// `frame_count` times.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> CloudResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> CloudResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> CloudResult<()>;
}

/// Shared ordering/size checks for sinks.
#[derive(Debug, Default)]
pub(crate) struct SinkGuard {
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    pushed: u64,
}

impl SinkGuard {
    pub(crate) fn begin(&mut self, cfg: &SinkConfig) -> CloudResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(CloudError::validation("sink width/height must be non-zero"));
        }
        cfg.fps.validate()?;
        self.cfg = Some(cfg.clone());
        self.last_idx = None;
        self.pushed = 0;
        Ok(())
    }

    /// Validate a push and return its 0-based position in the sequence.
    pub(crate) fn accept(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> CloudResult<u64> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| CloudError::validation("push_frame called before begin"))?;
        if let Some(prev) = self.last_idx
            && idx <= prev
        {
            return Err(CloudError::validation(format!(
                "frames must be pushed in increasing order (got {} after {})",
                idx.0, prev.0
            )));
        }
        if self.pushed >= cfg.frame_count {
            return Err(CloudError::validation(format!(
                "sink expected {} frames, got more",
                cfg.frame_count
            )));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(CloudError::validation(format!(
                "frame {} is {}x{}, sink expects {}x{}",
                idx.0, frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        frame.validate()?;

        let pos = self.pushed;
        self.last_idx = Some(idx);
        self.pushed += 1;
        Ok(pos)
    }

    pub(crate) fn finish(&mut self) -> CloudResult<SinkConfig> {
        let cfg = self
            .cfg
            .take()
            .ok_or_else(|| CloudError::validation("end called before begin"))?;
        if self.pushed != cfg.frame_count {
            return Err(CloudError::validation(format!(
                "sink expected {} frames, got {}",
                cfg.frame_count, self.pushed
            )));
        }
        Ok(cfg)
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    /// Frames in timeline order.
    pub(crate) frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` has been called.
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Take ownership of the captured frames, dropping their indices.
    pub fn into_frames(self) -> Vec<FrameRGBA> {
        self.frames.into_iter().map(|(_, f)| f).collect()
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> CloudResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> CloudResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> CloudResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
