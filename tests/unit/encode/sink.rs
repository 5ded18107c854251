use super::*;

fn cfg(frame_count: u64) -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::new(12, 1).unwrap(),
        frame_count,
    }
}

#[test]
fn guard_accepts_increasing_indices() {
    let mut g = SinkGuard::default();
    g.begin(&cfg(3)).unwrap();
    let f = FrameRGBA::transparent(2, 2);
    assert_eq!(g.accept(FrameIndex(4), &f).unwrap(), 0);
    assert_eq!(g.accept(FrameIndex(5), &f).unwrap(), 1);
    assert_eq!(g.accept(FrameIndex(9), &f).unwrap(), 2);
    assert_eq!(g.finish().unwrap(), cfg(3));
}

#[test]
fn guard_rejects_out_of_order_and_wrong_size() {
    let mut g = SinkGuard::default();
    g.begin(&cfg(3)).unwrap();
    let f = FrameRGBA::transparent(2, 2);
    g.accept(FrameIndex(1), &f).unwrap();
    assert!(g.accept(FrameIndex(1), &f).is_err());
    assert!(g.accept(FrameIndex(0), &f).is_err());
    assert!(g.accept(FrameIndex(2), &FrameRGBA::transparent(3, 2)).is_err());
}

#[test]
fn guard_counts_frames() {
    let mut g = SinkGuard::default();
    g.begin(&cfg(1)).unwrap();
    let f = FrameRGBA::transparent(2, 2);
    g.accept(FrameIndex(0), &f).unwrap();
    assert!(g.accept(FrameIndex(1), &f).is_err());

    let mut g = SinkGuard::default();
    g.begin(&cfg(2)).unwrap();
    g.accept(FrameIndex(0), &f).unwrap();
    assert!(g.finish().is_err());
}

#[test]
fn guard_requires_begin() {
    let mut g = SinkGuard::default();
    assert!(
        g.accept(FrameIndex(0), &FrameRGBA::transparent(2, 2))
            .is_err()
    );
    assert!(g.finish().is_err());
    assert!(g.begin(&SinkConfig { width: 0, ..cfg(1) }).is_err());
}

#[test]
fn in_memory_sink_captures_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2)).unwrap();
    let f = FrameRGBA::transparent(2, 2);
    sink.push_frame(FrameIndex(0), &f).unwrap();
    sink.push_frame(FrameIndex(1), &f).unwrap();
    sink.end().unwrap();

    assert!(sink.ended());
    assert_eq!(sink.config(), Some(cfg(2)));
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.frames()[1].0, FrameIndex(1));
    assert_eq!(sink.into_frames().len(), 2);
}
