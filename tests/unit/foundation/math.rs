use super::*;

#[test]
fn smoothstep_endpoints_and_midpoint() {
    assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    assert_eq!(smoothstep(0.0, 0.85, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 0.85, 3.0), 1.0);
}

#[test]
fn lerp_does_not_clamp_the_mix() {
    assert!((lerp(0.2, 0.8, 1.5) - 1.1).abs() < 1e-12);
    assert!((lerp(0.2, 0.8, -0.5) - (-0.1)).abs() < 1e-12);
}

#[test]
fn quantize_clamps_then_truncates() {
    assert_eq!(quantize_unit(0.0), 0);
    assert_eq!(quantize_unit(1.0), 255);
    assert_eq!(quantize_unit(0.999), 254);
    assert_eq!(quantize_unit(0.5), 127);
    assert_eq!(quantize_unit(-0.2), 0);
    assert_eq!(quantize_unit(1.3), 255);
    assert_eq!(quantize_unit(f64::NAN), 0);
}
