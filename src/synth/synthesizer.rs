use std::f64::consts::TAU;

use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{CloudError, CloudResult};
use crate::foundation::math::quantize_unit;
use crate::render::frame::FrameRGBA;
use crate::synth::mask::{AlphaFalloff, radial_dist};
use crate::synth::palette::{ColorSample, Palette};

const WHOLE_CYCLE_EPS: f64 = 1e-9;

/// How elapsed seconds map to the noise phase `time`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhasePolicy {
    /// `time = t * speed`. No periodicity guarantee.
    Unbounded {
        /// Phase units per second.
        speed: f64,
    },
    /// `time = (t / loop_seconds) * (2π / speed)`: `t = 0` and `t = loop_seconds` render the
    /// same frame.
    LoopExact {
        /// Controls how many noise cycles fit in one loop. The loop is seamless only when every
        /// phase rate divided by `speed` is a whole number, see [`PhasePolicy::seamless`].
        speed: f64,
        /// Loop length in seconds, must be > 0.
        loop_seconds: f64,
    },
}

impl PhasePolicy {
    /// Noise phase at `t_secs`.
    pub fn phase(self, t_secs: f64) -> f64 {
        match self {
            Self::Unbounded { speed } => t_secs * speed,
            Self::LoopExact {
                speed,
                loop_seconds,
            } => (t_secs / loop_seconds) * (TAU / speed),
        }
    }

    /// Loop length, for loop-exact phase.
    pub fn loop_seconds(self) -> Option<f64> {
        match self {
            Self::Unbounded { .. } => None,
            Self::LoopExact { loop_seconds, .. } => Some(loop_seconds),
        }
    }

    /// Whether `t = 0` and `t = loop_seconds` sample identical noise under `palette`.
    ///
    /// Always `false` for unbounded phase.
    pub fn seamless(self, palette: &Palette) -> bool {
        match self {
            Self::Unbounded { .. } => false,
            Self::LoopExact { speed, .. } => palette.phase_rates().iter().all(|rate| {
                let cycles = rate / speed;
                (cycles - cycles.round()).abs() <= WHOLE_CYCLE_EPS
            }),
        }
    }

    /// Check preconditions: finite speed, and for loop-exact phase a non-zero speed and
    /// `loop_seconds > 0`.
    pub fn validate(self) -> CloudResult<()> {
        match self {
            Self::Unbounded { speed } => {
                if !speed.is_finite() {
                    return Err(CloudError::validation("phase speed must be finite"));
                }
            }
            Self::LoopExact {
                speed,
                loop_seconds,
            } => {
                if !speed.is_finite() || speed == 0.0 {
                    return Err(CloudError::validation(
                        "loop-exact phase speed must be finite and non-zero",
                    ));
                }
                if !(loop_seconds.is_finite() && loop_seconds > 0.0) {
                    return Err(CloudError::validation(
                        "loop-exact phase loop_seconds must be > 0",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Which edge `uv_y = 0` sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalOrigin {
    /// `uv_y = y / H`, image convention.
    TopLeft,
    /// `uv_y = 1 - y / H`, shader convention.
    BottomLeft,
}

impl VerticalOrigin {
    /// Normalized vertical coordinate of pixel row `y`.
    pub fn uv_y(self, y: u32, height: u32) -> f64 {
        let v = f64::from(y) / f64::from(height);
        match self {
            Self::TopLeft => v,
            Self::BottomLeft => 1.0 - v,
        }
    }
}

/// Everything that varies between exports of the same cloud.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SynthConfig {
    /// Seconds to noise phase mapping.
    pub phase: PhasePolicy,
    /// Vertical coordinate convention.
    pub origin: VerticalOrigin,
    /// Alpha edge shape.
    pub falloff: AlphaFalloff,
}

/// The three scalar noise fields at one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseSample {
    /// Drives the pink to blue blend.
    pub n1: f64,
    /// Drives the blend toward cyan-green.
    pub n2: f64,
    /// Drives the blend toward yellow.
    pub n3: f64,
}

/// Unquantized color and alpha of one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelSample {
    /// Blended color, not yet clamped.
    pub color: ColorSample,
    /// Mask alpha in [0,1].
    pub alpha: f64,
}

impl PixelSample {
    /// Clamp, scale and truncate to RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize_unit(self.color.r),
            quantize_unit(self.color.g),
            quantize_unit(self.color.b),
            quantize_unit(self.alpha),
        ]
    }
}

/// Evaluate the noise fields at `(uv_x, uv_y)` and phase `time`.
pub fn noise_fields(palette: &Palette, uv_x: f64, uv_y: f64, time: f64) -> NoiseSample {
    NoiseSample {
        n1: n1_x(palette, uv_x, time) * n1_y(palette, uv_y, time),
        n2: n2_x(palette, uv_x, time) * n2_y(palette, uv_y, time),
        n3: n3(palette, uv_x, uv_y, time),
    }
}

/// Three sequential unclamped blends toward `c2`, `c3`, `c4`.
pub fn blend(palette: &Palette, noise: NoiseSample) -> ColorSample {
    let mix1 = noise.n1 * palette.mix1.0 + palette.mix1.1;
    let color = palette.c1.lerp(palette.c2, mix1);
    let mix2 = noise.n2 * palette.mix2.0 + palette.mix2.1;
    let color = color.lerp(palette.c3, mix2);
    let mix3 = noise.n3 * palette.mix3.0 + palette.mix3.1;
    color.lerp(palette.c4, mix3)
}

/// Color and alpha of the point `(uv_x, uv_y)` at phase `time`.
pub fn sample_pixel(
    palette: &Palette,
    falloff: AlphaFalloff,
    uv_x: f64,
    uv_y: f64,
    time: f64,
) -> PixelSample {
    let noise = noise_fields(palette, uv_x, uv_y, time);
    PixelSample {
        color: blend(palette, noise),
        alpha: falloff.alpha(radial_dist(uv_x, uv_y)),
    }
}

// The separable factors are split out so rows and columns can share them within a frame.
fn n1_x(p: &Palette, uv_x: f64, time: f64) -> f64 {
    (uv_x * p.n1_freq_x + time).sin()
}

fn n1_y(p: &Palette, uv_y: f64, time: f64) -> f64 {
    (uv_y * p.n1_freq_y - time * p.n1_rate_y).cos()
}

fn n2_x(p: &Palette, uv_x: f64, time: f64) -> f64 {
    (uv_x * p.n2_freq_x - time * p.n2_rate_x).cos()
}

fn n2_y(p: &Palette, uv_y: f64, time: f64) -> f64 {
    (uv_y * p.n2_freq_y + time).sin()
}

fn n3(p: &Palette, uv_x: f64, uv_y: f64, time: f64) -> f64 {
    ((uv_x + uv_y) * p.n3_freq + time * p.n3_rate).sin()
}

/// Renders color-cloud frames of a fixed size and frame rate.
#[derive(Clone, Debug)]
pub struct FrameSynthesizer {
    canvas: Canvas,
    fps: Fps,
    cfg: SynthConfig,
    palette: Palette,
}

impl FrameSynthesizer {
    /// Validate geometry and config, then build a synthesizer using [`Palette::CLOUD`].
    pub fn new(canvas: Canvas, fps: Fps, cfg: SynthConfig) -> CloudResult<Self> {
        canvas.validate()?;
        fps.validate()?;
        let palette = Palette::CLOUD;
        cfg.phase.validate()?;
        if let PhasePolicy::LoopExact { speed, .. } = cfg.phase
            && !cfg.phase.seamless(&palette)
        {
            let rates = palette.phase_rates().map(|rate| rate / speed);
            tracing::warn!(
                speed,
                cycles_per_loop = ?rates,
                "loop-exact phase leaves a seam: not every phase rate completes whole cycles"
            );
        }
        Ok(Self {
            canvas,
            fps,
            cfg,
            palette,
        })
    }

    /// Output frame size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Frame rate used to turn indices into seconds.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Synthesis configuration.
    pub fn config(&self) -> SynthConfig {
        self.cfg
    }

    /// Normalized coordinates of pixel `(x, y)`.
    pub fn uv(&self, x: u32, y: u32) -> (f64, f64) {
        (
            f64::from(x) / f64::from(self.canvas.width),
            self.cfg.origin.uv_y(y, self.canvas.height),
        )
    }

    /// Noise fields at pixel `(x, y)` and time `t_secs`.
    pub fn noise_at(&self, x: u32, y: u32, t_secs: f64) -> NoiseSample {
        let (uv_x, uv_y) = self.uv(x, y);
        noise_fields(&self.palette, uv_x, uv_y, self.cfg.phase.phase(t_secs))
    }

    /// Render frame `idx` (at `t = idx / fps`).
    pub fn render_frame(&self, idx: FrameIndex) -> FrameRGBA {
        self.render_at(self.fps.frame_to_secs(idx))
    }

    /// Render the frame seen at `t_secs`.
    pub fn render_at(&self, t_secs: f64) -> FrameRGBA {
        let Canvas { width, height } = self.canvas;
        let p = &self.palette;
        let time = self.cfg.phase.phase(t_secs);

        let uv_xs: Vec<f64> = (0..width).map(|x| self.uv(x, 0).0).collect();
        let col_n1: Vec<f64> = uv_xs.iter().map(|&u| n1_x(p, u, time)).collect();
        let col_n2: Vec<f64> = uv_xs.iter().map(|&u| n2_x(p, u, time)).collect();

        let mut frame = FrameRGBA::transparent(width, height);
        for (y, row) in frame.data.chunks_exact_mut(width as usize * 4).enumerate() {
            let uv_y = self.cfg.origin.uv_y(y as u32, height);
            let row_n1 = n1_y(p, uv_y, time);
            let row_n2 = n2_y(p, uv_y, time);

            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let uv_x = uv_xs[x];
                let noise = NoiseSample {
                    n1: col_n1[x] * row_n1,
                    n2: col_n2[x] * row_n2,
                    n3: n3(p, uv_x, uv_y, time),
                };
                let sample = PixelSample {
                    color: blend(p, noise),
                    alpha: self.cfg.falloff.alpha(radial_dist(uv_x, uv_y)),
                };
                px.copy_from_slice(&sample.to_rgba8());
            }
        }
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/synthesizer.rs"]
mod tests;
