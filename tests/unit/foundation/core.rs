use super::*;

#[test]
fn frame_range_bounds() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::first(0).is_empty());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(12, 0).is_err());
    assert!(Fps { num: 0, den: 1 }.validate().is_err());
}

#[test]
fn fps_frame_timing() {
    let fps = Fps::new(12, 1).unwrap();
    assert_eq!(fps.frame_to_secs(FrameIndex(6)), 0.5);
    assert_eq!(fps.secs_to_frames_floor(10.0), 120);
    assert_eq!(Fps::new(20, 1).unwrap().secs_to_frames_floor(5.0), 100);
}

#[test]
fn frame_delay_truncates_to_whole_ms() {
    assert_eq!(Fps::new(20, 1).unwrap().frame_delay_ms(), 50);
    assert_eq!(Fps::new(12, 1).unwrap().frame_delay_ms(), 83);
    assert_eq!(Fps::new(30000, 1001).unwrap().frame_delay_ms(), 33);
}

#[test]
fn frame_delay_does_not_wrap_for_huge_denominators() {
    let fps = Fps::new(1, 4_294_968).unwrap();
    assert_eq!(fps.frame_delay_ms(), 4_294_968_000);
    assert!(u16::try_from(fps.frame_delay_ms()).is_err());
}

#[test]
fn canvas_validation_and_len() {
    assert!(
        Canvas {
            width: 0,
            height: 4
        }
        .validate()
        .is_err()
    );
    let c = Canvas {
        width: 3,
        height: 2,
    };
    assert!(c.validate().is_ok());
    assert_eq!(c.rgba_len(), 24);
}
