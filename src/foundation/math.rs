pub(crate) fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Linear blend `a*(1-m) + b*m`. `m` is not clamped.
pub(crate) fn lerp(a: f64, b: f64, m: f64) -> f64 {
    a * (1.0 - m) + b * m
}

/// Cubic Hermite step between `e0` and `e1`.
pub(crate) fn smoothstep(e0: f64, e1: f64, x: f64) -> f64 {
    let u = clamp01((x - e0) / (e1 - e0));
    u * u * (3.0 - 2.0 * u)
}

/// Clamp to [0,1], scale to [0,255] and truncate.
pub(crate) fn quantize_unit(x: f64) -> u8 {
    // NaN clamps to NaN and `as` saturates it to 0.
    (clamp01(x) * 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
