//! Shared primitives: timeline types, error taxonomy and scalar math.

pub mod core;
pub mod error;
pub(crate) mod math;
