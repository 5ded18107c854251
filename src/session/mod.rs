//! Frame-range rendering into sinks.

/// Session-oriented rendering API.
pub mod render_session;
