use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{CloudError, CloudResult};
use crate::session::render_session::{RenderSession, RenderSessionOpts};
use crate::sheet::layout::SheetLayout;
use crate::synth::mask::AlphaFalloff;
use crate::synth::synthesizer::{FrameSynthesizer, PhasePolicy, SynthConfig, VerticalOrigin};

/// Built-in job settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Time-stamped APNG: 512x512, 20 fps, 5 s, free-running phase, linear edge.
    Animated,
    /// Seamless sprite sheet: 512x512, 12 fps, 10 s, loop-exact phase, bottom-left origin,
    /// smoothstep edge, 12 columns.
    Sheet,
}

/// One color-cloud export: geometry, timing and synthesis settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudJob {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frame rate.
    pub fps: Fps,
    /// Animation length; frame count is `floor(duration_secs * fps)`.
    pub duration_secs: f64,
    /// Sprite-sheet columns.
    #[serde(default = "default_columns")]
    pub columns: u32,
    /// Phase, origin and falloff.
    pub synth: SynthConfig,
}

fn default_columns() -> u32 {
    8
}

impl CloudJob {
    /// Settings for `preset`.
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Animated => Self {
                width: 512,
                height: 512,
                fps: Fps { num: 20, den: 1 },
                duration_secs: 5.0,
                columns: 10,
                synth: SynthConfig {
                    phase: PhasePolicy::Unbounded { speed: 0.3 },
                    origin: VerticalOrigin::TopLeft,
                    falloff: AlphaFalloff::Linear,
                },
            },
            Preset::Sheet => Self {
                width: 512,
                height: 512,
                fps: Fps { num: 12, den: 1 },
                duration_secs: 10.0,
                columns: 12,
                synth: SynthConfig {
                    phase: PhasePolicy::LoopExact {
                        speed: 0.1,
                        loop_seconds: 10.0,
                    },
                    origin: VerticalOrigin::BottomLeft,
                    falloff: AlphaFalloff::Smoothstep,
                },
            },
        }
    }

    /// Parse a job from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CloudResult<Self> {
        serde_json::from_reader(r).map_err(|e| CloudError::serde(format!("parse job JSON: {e}")))
    }

    /// Parse a job from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CloudResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open job JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Frame size.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Number of frames rendered.
    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames_floor(self.duration_secs)
    }

    /// Check every precondition without rendering.
    pub fn validate(&self) -> CloudResult<()> {
        if !(self.duration_secs.is_finite() && self.duration_secs > 0.0) {
            return Err(CloudError::validation("job duration_secs must be > 0"));
        }
        if self.columns == 0 {
            return Err(CloudError::validation("job columns must be >= 1"));
        }
        self.synthesizer()?;
        if self.frame_count() == 0 {
            return Err(CloudError::validation(
                "job duration is shorter than one frame",
            ));
        }
        Ok(())
    }

    /// Build the frame synthesizer.
    pub fn synthesizer(&self) -> CloudResult<FrameSynthesizer> {
        FrameSynthesizer::new(self.canvas(), self.fps, self.synth)
    }

    /// Build a render session over the whole animation.
    pub fn session(&self, opts: RenderSessionOpts) -> CloudResult<RenderSession> {
        self.validate()?;
        RenderSession::new(self.synthesizer()?, self.frame_count(), opts)
    }

    /// Sheet geometry for the whole animation.
    pub fn sheet_layout(&self) -> CloudResult<SheetLayout> {
        let frame_count = u32::try_from(self.frame_count())
            .map_err(|_| CloudError::validation("too many frames for one sheet"))?;
        SheetLayout::new(frame_count, self.columns, self.canvas())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/job/config.rs"]
mod tests;
