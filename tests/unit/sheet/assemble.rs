use super::*;
use crate::foundation::core::Canvas;

fn coded_frame(i: usize, w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: [i as u8 + 1, 0, 0, 255].repeat((w * h) as usize),
    }
}

#[test]
fn frames_land_in_sequence_order() {
    let (w, h) = (3, 2);
    let frames: Vec<_> = (0..26).map(|i| coded_frame(i, w, h)).collect();
    let (layout, sheet) = assemble_sheet(&frames, 8).unwrap();

    assert_eq!(layout.rows(), 4);
    assert_eq!((sheet.width, sheet.height), (24, 8));

    for i in 0..26u32 {
        let slot = layout.slot(i).unwrap();
        for dy in 0..h {
            for dx in 0..w {
                assert_eq!(
                    sheet.pixel(slot.x + dx, slot.y + dy),
                    [i as u8 + 1, 0, 0, 255],
                    "tile {i}"
                );
            }
        }
    }

    let last = layout.slot(25).unwrap();
    assert_eq!((last.row, last.col), (3, 1));
}

#[test]
fn trailing_slots_stay_transparent() {
    let (w, h) = (3, 2);
    let frames: Vec<_> = (0..26).map(|i| coded_frame(i, w, h)).collect();
    let (layout, sheet) = assemble_sheet(&frames, 8).unwrap();

    for i in 26..32u32 {
        let slot = layout.slot(i).unwrap();
        for dy in 0..h {
            for dx in 0..w {
                assert_eq!(sheet.pixel(slot.x + dx, slot.y + dy), [0, 0, 0, 0]);
            }
        }
    }
}

#[test]
fn single_column_stacks_vertically() {
    let frames: Vec<_> = (0..3).map(|i| coded_frame(i, 2, 2)).collect();
    let (_, sheet) = assemble_sheet(&frames, 1).unwrap();
    assert_eq!((sheet.width, sheet.height), (2, 6));
    assert_eq!(sheet.pixel(1, 5)[0], 3);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(assemble_sheet(&[], 4).is_err());

    let frames: Vec<_> = (0..3).map(|i| coded_frame(i, 2, 2)).collect();
    assert!(assemble_sheet(&frames, 0).is_err());

    let mixed = vec![coded_frame(0, 2, 2), coded_frame(1, 3, 2)];
    assert!(assemble_sheet(&mixed, 2).is_err());

    let short = vec![FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 4],
    }];
    assert!(assemble_sheet(&short, 1).is_err());
}

#[test]
fn place_tile_rejects_unfilled_slot_index() {
    let tile = Canvas {
        width: 2,
        height: 2,
    };
    let layout = SheetLayout::new(3, 2, tile).unwrap();
    let size = layout.sheet_canvas();
    let mut sheet = FrameRGBA::transparent(size.width, size.height);
    assert!(place_tile(&layout, &mut sheet, 3, &coded_frame(3, 2, 2)).is_err());
    assert!(place_tile(&layout, &mut sheet, 2, &coded_frame(2, 2, 2)).is_ok());
}
