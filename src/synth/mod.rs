//! Per-frame color-cloud synthesis.
//!
//! A frame is a pure function of `(time, geometry, config)`: three trigonometric noise fields
//! drive a four-color blend, and a radial falloff masks the result into a soft disc.

/// Radial alpha falloff policies.
pub mod mask;
/// Fixed noise/blend constants and base colors.
pub mod palette;
/// Frame synthesizer and its configuration.
pub mod synthesizer;
