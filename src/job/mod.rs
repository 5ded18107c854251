//! Export job configuration.

/// JSON-loadable job description and built-in presets.
pub mod config;
