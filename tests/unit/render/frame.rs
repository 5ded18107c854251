use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
    }
}

#[test]
fn transparent_is_all_zero() {
    let f = FrameRGBA::transparent(3, 2);
    assert_eq!(f.data.len(), 24);
    assert!(f.data.iter().all(|&b| b == 0));
    assert!(f.validate().is_ok());
}

#[test]
fn validate_rejects_short_buffer() {
    let f = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 15],
    };
    assert!(f.validate().is_err());
}

#[test]
fn blit_places_source_at_offset() {
    let mut dst = FrameRGBA::transparent(4, 3);
    let src = solid(2, 2, [9, 8, 7, 255]);
    dst.blit(&src, 1, 1).unwrap();

    assert_eq!(dst.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(dst.pixel(1, 1), [9, 8, 7, 255]);
    assert_eq!(dst.pixel(2, 2), [9, 8, 7, 255]);
    assert_eq!(dst.pixel(3, 2), [0, 0, 0, 0]);
    assert_eq!(dst.pixel(1, 0), [0, 0, 0, 0]);
    assert_eq!(&dst.row(1)[4..12], &[9, 8, 7, 255, 9, 8, 7, 255]);
}

#[test]
fn blit_out_of_bounds_is_rejected() {
    let mut dst = FrameRGBA::transparent(4, 4);
    let src = solid(2, 2, [1, 1, 1, 1]);
    assert!(dst.blit(&src, 3, 0).is_err());
    assert!(dst.blit(&src, 0, 3).is_err());
    assert!(dst.blit(&src, 2, 2).is_ok());
}
