use super::*;

fn assert_non_increasing(falloff: AlphaFalloff) {
    let mut prev = falloff.alpha(0.0);
    for i in 1..=1500 {
        let d = f64::from(i) / 1000.0;
        let a = falloff.alpha(d);
        assert!(
            a <= prev + 1e-12,
            "{falloff:?} alpha rose from {prev} to {a} at dist {d}"
        );
        prev = a;
    }
}

#[test]
fn radial_dist_is_scaled_to_inscribed_circle() {
    assert_eq!(radial_dist(0.5, 0.5), 0.0);
    assert!((radial_dist(0.5, 0.0) - 1.0).abs() < 1e-12);
    assert!((radial_dist(1.0, 0.5) - 1.0).abs() < 1e-12);
    assert!((radial_dist(0.0, 0.0) - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn linear_falloff_core_and_edge() {
    let f = AlphaFalloff::Linear;
    assert_eq!(f.alpha(0.0), 1.0);
    assert_eq!(f.alpha(0.3), 1.0);
    assert!((f.alpha(0.65) - 0.5).abs() < 1e-12);
    assert!(f.alpha(1.0).abs() < 1e-12);
    assert_eq!(f.alpha(1.2), 0.0);
    assert_eq!(f.alpha(2.0), 0.0);
}

#[test]
fn smoothstep_falloff_core_and_edge() {
    let f = AlphaFalloff::Smoothstep;
    assert_eq!(f.alpha(0.0), 1.0);
    assert_eq!(f.alpha(0.85), 0.0);
    assert_eq!(f.alpha(1.0), 0.0);
    // Symmetric curve: halfway to the edge is half alpha.
    assert!((f.alpha(0.425) - 0.5).abs() < 1e-12);
}

#[test]
fn second_smoothing_pass_softens_the_shoulder() {
    let d = 0.2;
    let single = 1.0 - crate::foundation::math::smoothstep(0.0, 0.85, d);
    let double = AlphaFalloff::Smoothstep.alpha(d);
    assert!(single > 0.5);
    assert!(double > single);
}

#[test]
fn falloffs_are_monotone() {
    assert_non_increasing(AlphaFalloff::Linear);
    assert_non_increasing(AlphaFalloff::Smoothstep);
}

#[test]
fn falloff_serde_names() {
    assert_eq!(
        serde_json::to_string(&AlphaFalloff::Smoothstep).unwrap(),
        "\"smoothstep\""
    );
    let f: AlphaFalloff = serde_json::from_str("\"linear\"").unwrap();
    assert_eq!(f, AlphaFalloff::Linear);
}
