use crate::foundation::math::{clamp01, smoothstep};

const LINEAR_INNER: f64 = 0.3;
const LINEAR_SPAN: f64 = 0.7;
const SMOOTH_EDGE: f64 = 0.85;

/// Shape of the soft circular alpha edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaFalloff {
    /// Opaque core out to `dist = 0.3`, then a linear ramp reaching zero at `dist = 1`.
    Linear,
    /// `1 - smoothstep(0, 0.85, dist)`, smoothed a second time for a softer edge.
    Smoothstep,
}

impl AlphaFalloff {
    /// Alpha in [0,1] at normalized radial distance `dist` (0 at center, 1 at the inscribed edge).
    pub fn alpha(self, dist: f64) -> f64 {
        match self {
            Self::Linear => 1.0 - clamp01((dist - LINEAR_INNER) / LINEAR_SPAN),
            Self::Smoothstep => {
                let a = 1.0 - smoothstep(0.0, SMOOTH_EDGE, dist);
                a * a * (3.0 - 2.0 * a)
            }
        }
    }
}

/// Distance from the frame center in uv space, scaled so the inscribed circle has radius 1.
pub fn radial_dist(uv_x: f64, uv_y: f64) -> f64 {
    let cx = uv_x - 0.5;
    let cy = uv_y - 0.5;
    (cx * cx + cy * cy).sqrt() * 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/synth/mask.rs"]
mod tests;
