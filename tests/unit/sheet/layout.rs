use super::*;

fn tile(w: u32, h: u32) -> Canvas {
    Canvas {
        width: w,
        height: h,
    }
}

#[test]
fn rows_round_up() {
    let l = SheetLayout::new(26, 8, tile(16, 16)).unwrap();
    assert_eq!(l.rows(), 4);
    assert_eq!(l.slot_count(), 32);
    assert_eq!(SheetLayout::new(24, 8, tile(16, 16)).unwrap().rows(), 3);
    assert_eq!(SheetLayout::new(1, 8, tile(16, 16)).unwrap().rows(), 1);
}

#[test]
fn slot_positions_are_row_major() {
    let l = SheetLayout::new(26, 8, tile(10, 20)).unwrap();
    assert_eq!(
        l.slot(25),
        Some(TileSlot {
            row: 3,
            col: 1,
            x: 10,
            y: 60
        })
    );
    assert_eq!(l.slot(7).map(|s| (s.row, s.col)), Some((0, 7)));
    assert_eq!(l.slot(8).map(|s| (s.row, s.col)), Some((1, 0)));
    assert!(l.slot(31).is_some());
    assert_eq!(l.slot(32), None);
}

#[test]
fn full_size_sheet_dimensions() {
    let l = SheetLayout::new(120, 12, tile(512, 512)).unwrap();
    assert_eq!(l.rows(), 10);
    assert_eq!(
        l.sheet_canvas(),
        Canvas {
            width: 6144,
            height: 5120
        }
    );
}

#[test]
fn invalid_layouts_are_rejected() {
    assert!(SheetLayout::new(10, 0, tile(8, 8)).is_err());
    assert!(SheetLayout::new(0, 4, tile(8, 8)).is_err());
    assert!(SheetLayout::new(10, 4, tile(0, 8)).is_err());
    assert!(SheetLayout::new(4, 4, tile(u32::MAX, 8)).is_err());
}

#[test]
fn meta_carries_playback_fields() {
    let l = SheetLayout::new(26, 8, tile(32, 24)).unwrap();
    let fps = Fps::new(12, 1).unwrap();
    let m = l.meta(fps, Some(10.0));
    assert_eq!(m.columns, 8);
    assert_eq!(m.rows, 4);
    assert_eq!(m.frame_count, 26);
    assert_eq!(m.fps, fps);
    assert_eq!((m.frame_width, m.frame_height), (32, 24));
    assert_eq!((m.sheet_width, m.sheet_height), (256, 96));

    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["columns"], 8);
    assert_eq!(json["loop_seconds"], 10.0);
    assert!(serde_json::to_value(l.meta(fps, None)).unwrap().get("loop_seconds").is_none());
}
