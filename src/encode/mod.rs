//! Encoding sinks.
//!
//! Sinks consume rendered frames in timeline order and are driven by
//! [`crate::session::render_session::RenderSession::render_range`].

/// Animated PNG output.
pub mod apng;
/// Sprite-sheet PNG output with a JSON metadata sidecar.
pub mod sheet;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
/// Single still PNG output.
pub mod still;
