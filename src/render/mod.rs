//! Rendered frame buffers.

/// RGBA8 frame buffer type shared by the synthesizer, assembler and sinks.
pub mod frame;
