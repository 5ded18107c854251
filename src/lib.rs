//! Colorcloud renders a looping, noise-driven color gradient masked into a soft disc.
//!
//! Frames come from a pure [`FrameSynthesizer`]; a [`RenderSession`] streams them in order into a
//! [`FrameSink`] that writes an animated PNG, a sprite sheet with playback metadata, or collects
//! them in memory. The [`pipeline`] functions wire a [`CloudJob`] to each artifact.
#![forbid(unsafe_code)]

mod foundation;

/// Encoding sinks.
pub mod encode;
/// Export job configuration.
pub mod job;
/// One-call exporters for each artifact.
pub mod pipeline;
/// Rendered frame buffers.
pub mod render;
/// Range rendering.
pub mod session;
/// Sprite-sheet packing.
pub mod sheet;
/// Per-frame synthesis.
pub mod synth;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use crate::foundation::error::{CloudError, CloudResult};

pub use crate::encode::apng::{ApngSink, ApngSinkOpts};
pub use crate::encode::sheet::{SheetSink, SheetSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::still::{write_png, write_png_best};
pub use crate::job::config::{CloudJob, Preset};
pub use crate::pipeline::{export_apng, export_preview, export_sheet};
pub use crate::render::frame::FrameRGBA;
pub use crate::session::render_session::{RenderSession, RenderSessionOpts, RenderStats};
pub use crate::sheet::assemble::{assemble_sheet, place_tile};
pub use crate::sheet::layout::{SheetLayout, SheetMeta, TileSlot};
pub use crate::synth::mask::{AlphaFalloff, radial_dist};
pub use crate::synth::palette::{ColorSample, Palette};
pub use crate::synth::synthesizer::{
    FrameSynthesizer, NoiseSample, PhasePolicy, PixelSample, SynthConfig, VerticalOrigin, blend,
    noise_fields, sample_pixel,
};
