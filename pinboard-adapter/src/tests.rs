use crate::*;

use alloc::vec::Vec;
use pinboard::{
    ContainerRect, Key, PageStatus, PinboardOptions, PointerInput, TilePlacement, Vec2,
    WheelInput,
};

#[derive(Clone, Debug)]
struct FakeContainer {
    rect: Option<ContainerRect>,
    offset: Vec2,
    max: Vec2,
    writes: usize,
}

impl FakeContainer {
    fn new(options: &PinboardOptions, width: f64, height: f64) -> Self {
        Self {
            rect: Some(ContainerRect::new(0.0, 0.0, width, height)),
            offset: Vec2::ZERO,
            max: Vec2::new(options.plane_width - width, options.plane_height - height),
            writes: 0,
        }
    }
}

impl ScrollContainer for FakeContainer {
    fn rect(&self) -> Option<ContainerRect> {
        self.rect
    }

    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        // Browsers clamp scroll offsets to the scrollable range.
        self.offset = Vec2::new(offset.x.clamp(0.0, self.max.x), offset.y.clamp(0.0, self.max.y));
        self.writes += 1;
    }
}

#[derive(Clone, Debug)]
struct FakeSource {
    len: usize,
    has_more: bool,
    is_loading: bool,
    requests: usize,
}

impl FakeSource {
    fn new(len: usize) -> Self {
        Self {
            len,
            has_more: true,
            is_loading: false,
            requests: 0,
        }
    }
}

impl TileSource for FakeSource {
    fn len(&self) -> usize {
        self.len
    }

    fn status(&self) -> PageStatus {
        PageStatus {
            has_more: self.has_more,
            is_loading: self.is_loading,
        }
    }

    fn request_more(&mut self) {
        self.requests += 1;
    }
}

fn mounted(options: PinboardOptions) -> Pinboard<FakeContainer> {
    let mut board = Pinboard::new(options);
    assert!(board.mount(FakeContainer::new(&options, 1200.0, 800.0), 0).is_none());
    board
}

fn run_frames(
    board: &mut Pinboard<FakeContainer>,
    source: &mut FakeSource,
    now_ms: &mut u64,
) -> Vec<FrameReport> {
    let mut reports = Vec::new();
    for _ in 0..500 {
        if !board.needs_frame() {
            break;
        }
        *now_ms += 16;
        reports.push(board.on_animation_frame(*now_ms, source));
    }
    assert!(!board.needs_frame(), "pipeline never settled");
    reports
}

#[test]
fn mount_centers_container_at_virtual_origin() {
    let options = PinboardOptions::default();
    let board = mounted(options);

    let container = board.container().unwrap();
    assert_eq!(container.offset, Vec2::new(4_999_400.0, 4_999_600.0));
    assert_eq!(board.virtual_position(), Vec2::ZERO);
    assert_eq!(board.target(), container.offset);
    assert!(board.needs_frame());
}

#[test]
fn unmounted_board_ignores_input() {
    let mut board: Pinboard<FakeContainer> = Pinboard::new(PinboardOptions::default());
    assert!(!board.is_mounted());
    assert!(!board.on_wheel(WheelInput::pixels(0.0, 10.0)));
    assert!(!board.on_scroll_event());
    assert!(!board.on_key(Key::ArrowDown));
    assert!(!board.on_pointer_down(PointerInput::primary_mouse(0.0, 0.0), 0));
    assert!(!board.on_touch_start(&[Vec2::ZERO]));
    assert!(!board.on_resize(0));
    assert!(!board.needs_frame());
    assert_eq!(board.next_timer_ms(), None);

    let mut source = FakeSource::new(10);
    assert_eq!(board.on_animation_frame(16, &mut source), FrameReport::default());
    assert_eq!(source.requests, 0);
}

#[test]
fn unmount_cancels_pending_work() {
    let mut board = mounted(PinboardOptions::default());
    board.on_wheel(WheelInput::pixels(0.0, 50.0));
    board.on_pointer_down(PointerInput::primary_mouse(10.0, 10.0), 0);
    assert!(board.next_timer_ms().is_some());

    let container = board.unmount().unwrap();
    assert_eq!(container.writes, 1);
    assert!(!board.is_mounted());
    assert!(!board.needs_frame());
    assert_eq!(board.next_timer_ms(), None);
    assert!(!board.input().is_dragging());
    assert!(board.unmount().is_none());
}

#[test]
fn wheel_eases_container_to_target() {
    let mut board = mounted(PinboardOptions::default());
    let mut source = FakeSource::new(30);
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);

    assert!(board.on_wheel(WheelInput::pixels(0.0, 5000.0)));
    let reports = run_frames(&mut board, &mut source, &mut now);
    assert!(reports.iter().any(|r| r.scrolled));

    assert_eq!(board.container().unwrap().offset.y, 4_999_600.0 + 90.0);
    assert_eq!(board.virtual_position(), Vec2::new(0.0, 90.0));
}

#[test]
fn drag_through_recenter_keeps_virtual_position_continuous() {
    let options = PinboardOptions::default()
        .with_plane_size(100_000.0, 100_000.0)
        .with_edge_guard(20_000.0)
        .with_drag_speed(1.0);
    let mut board = mounted(options);
    let mut source = FakeSource::new(30);
    source.has_more = false;
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);

    assert!(board.on_pointer_down(PointerInput::primary_mouse(0.0, 0.0), now));
    assert!(board.on_pointer_move(Vec2::new(0.0, -40_000.0)));

    let mut last_y = board.virtual_position().y;
    let mut recentered = 0;
    for _ in 0..200 {
        if !board.needs_frame() {
            break;
        }
        now += 16;
        let report = board.on_animation_frame(now, &mut source);
        let y = board.virtual_position().y;
        assert!(y >= last_y, "virtual y went backwards: {last_y} -> {y}");
        last_y = y;
        if report.recentered {
            recentered += 1;
        }
    }
    assert_eq!(recentered, 1);
    assert!(board.plane().origin().y > -49_600.0);

    // The absolute drag mapping survives the recenter.
    assert!(board.on_pointer_move(Vec2::new(0.0, -40_001.0)));
    assert!((board.plane().virtual_position(board.target()).y - 40_001.0).abs() < 1e-6);
    assert!(board.on_pointer_up());
    run_frames(&mut board, &mut source, &mut now);
    assert!((board.virtual_position().y - 40_001.0).abs() < 0.1);
}

#[test]
fn hold_auto_scrolls_until_release() {
    let mut board = mounted(PinboardOptions::default());
    let mut source = FakeSource::new(30);
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);

    assert!(board.on_pointer_down(PointerInput::primary_mouse(600.0, 100.0), now));
    let deadline = now + 120;
    assert_eq!(board.next_timer_ms(), Some(deadline));
    assert!(board.on_timer(deadline));
    assert!(board.input().is_auto_scrolling());

    now = deadline;
    for _ in 0..30 {
        now += 16;
        board.on_animation_frame(now, &mut source);
    }
    assert!(board.virtual_position().y < 0.0);

    assert!(board.on_pointer_up());
    run_frames(&mut board, &mut source, &mut now);
    assert!(!board.input().is_auto_scrolling());
    assert!(board.virtual_position().y < 0.0);
}

#[test]
fn measured_columns_are_adopted_after_the_transition_delay() {
    let options = PinboardOptions::default();
    let mut board = mounted(options);
    let mut source = FakeSource::new(50);
    source.has_more = false;
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);
    // 1200px fits 4 columns of 270 + 25.
    assert_eq!(board.layout().column_count(), 4);

    assert_eq!(board.next_timer_ms(), Some(1000));
    board.on_timer(1000);
    now = 1000;
    run_frames(&mut board, &mut source, &mut now);
    assert_eq!(board.layout().column_count(), 4);

    board.container_mut().unwrap().rect = Some(ContainerRect::new(0.0, 0.0, 2400.0, 800.0));
    assert!(board.on_resize(2000));
    assert!(!board.on_resize(2000));
    now = 2000;
    run_frames(&mut board, &mut source, &mut now);
    assert_eq!(board.layout().column_count(), 4);

    assert_eq!(board.next_timer_ms(), Some(3000));
    now = 3000;
    let report = board.on_animation_frame(now, &mut source);
    assert!(report.columns_changed);
    assert!(report.layout_rebuilt);
    assert_eq!(board.layout().column_count(), 8);
}

#[test]
fn few_tiles_never_leave_empty_columns() {
    let mut board = mounted(PinboardOptions::default());
    let mut source = FakeSource::new(2);
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);
    assert_eq!(board.layout().column_count(), 2);
    assert!(board.layout().columns().iter().all(|c| !c.is_empty()));
    // Two tiles tighten the horizontal gap.
    assert_eq!(board.layout().metrics().gap_x, 10.0);

    source.len = 0;
    board.on_animation_frame(now + 16, &mut source);
    assert_eq!(board.layout().tile_count(), 0);
    let mut out = Vec::new();
    board.collect_placements(&mut out);
    assert!(out.is_empty());
}

#[test]
fn scrolling_past_threshold_requests_one_page() {
    let mut board = mounted(PinboardOptions::default());
    let mut source = FakeSource::new(40);
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);

    for _ in 0..9 {
        assert!(board.on_key(Key::PageDown));
    }
    let reports = run_frames(&mut board, &mut source, &mut now);
    assert!(board.virtual_position().y > 4400.0);
    assert_eq!(source.requests, 1);
    assert_eq!(reports.iter().filter(|r| r.requested_more).count(), 1);

    // While loading, nothing more is requested.
    source.is_loading = true;
    board.on_key(Key::PageDown);
    now += 1000;
    run_frames(&mut board, &mut source, &mut now);
    assert_eq!(source.requests, 1);
}

#[test]
fn idle_board_reacts_to_finished_page_load() {
    let mut board = mounted(PinboardOptions::default());
    let mut source = FakeSource::new(40);
    source.is_loading = true;
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);

    for _ in 0..9 {
        board.on_key(Key::PageDown);
    }
    run_frames(&mut board, &mut source, &mut now);
    assert!(board.virtual_position().y > 4400.0);
    assert_eq!(source.requests, 0);

    // The page lands while the user is idle.
    source.is_loading = false;
    source.len = 80;
    assert!(!board.needs_frame());
    assert!(board.on_source_changed());
    assert!(board.needs_frame());

    let reports = run_frames(&mut board, &mut source, &mut now);
    assert_eq!(reports.iter().filter(|r| r.layout_rebuilt).count(), 1);
    assert_eq!(reports.iter().filter(|r| r.requested_more).count(), 1);
    assert_eq!(board.layout().tile_count(), 80);
    assert_eq!(source.requests, 1);
}

#[test]
fn source_changes_are_ignored_while_unmounted() {
    let mut board: Pinboard<FakeContainer> = Pinboard::new(PinboardOptions::default());
    assert!(!board.on_source_changed());
    assert!(!board.needs_frame());
}

#[test]
fn column_fit_uses_the_tightened_gap() {
    let options = PinboardOptions::default();
    let mut board = Pinboard::new(options);
    board.mount(FakeContainer::new(&options, 1440.0, 800.0), 0);
    let mut source = FakeSource::new(8);
    source.has_more = false;
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);

    // 8 tiles fit with a 15px gap: (1440 + 15) / 285 -> 5 columns, where the base 25px gap
    // only fits 4.
    assert_eq!(board.layout().column_count(), 5);
    // More tiles than laid-out columns keeps the full gap.
    assert_eq!(board.layout().metrics().gap_x, 25.0);
}

#[test]
fn spacing_follows_laid_out_columns() {
    let mut board = mounted(PinboardOptions::default());
    let mut source = FakeSource::new(6);
    source.has_more = false;
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);

    assert_eq!(board.layout().column_count(), 4);
    assert_eq!(board.layout().metrics().gap_x, 25.0);
}

#[test]
fn exhausted_source_is_never_asked_again() {
    let mut board = mounted(PinboardOptions::default());
    let mut source = FakeSource::new(40);
    source.has_more = false;
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);
    for _ in 0..20 {
        board.on_key(Key::PageDown);
        now += 900;
        run_frames(&mut board, &mut source, &mut now);
    }
    assert!(board.virtual_position().y > 4400.0);
    assert_eq!(source.requests, 0);
}

#[test]
fn placements_start_at_the_mounted_window() {
    let mut board = mounted(PinboardOptions::default());
    let mut source = FakeSource::new(12);
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);

    let mut out: Vec<TilePlacement> = Vec::new();
    board.collect_placements(&mut out);
    assert!(!out.is_empty());

    let first = out
        .iter()
        .find(|p| p.column == 0 && p.repetition == 0 && p.tile_index == 0)
        .unwrap();
    let scroll = board.container().unwrap().offset;
    assert_eq!(first.x, scroll.x);
    assert_eq!(first.y, scroll.y);
    assert!(out.iter().any(|p| p.column < 0));
    assert!(out.iter().any(|p| p.repetition < 0));
}

#[test]
fn masonry_heights_switch_layout() {
    let mut board = mounted(PinboardOptions::default().with_column_range(2, 2));
    let mut source = FakeSource::new(4);
    let mut now = 0;
    run_frames(&mut board, &mut source, &mut now);
    assert_eq!(board.layout().columns()[0].tiles(), &[0, 2]);
    assert_eq!(board.layout().columns()[0].heights(), &[220.0, 220.0]);

    board.set_tile_heights(alloc::vec![300.0, 100.0, 100.0, 300.0]);
    assert!(board.needs_frame());
    run_frames(&mut board, &mut source, &mut now);
    let layout = board.layout();
    assert_eq!(layout.columns()[0].tiles(), &[0]);
    assert_eq!(layout.columns()[1].tiles(), &[1, 2, 3]);
    assert_eq!(layout.columns()[1].cumulative_y(), &[0.0, 125.0, 250.0]);

    // Stale heights fall back to the uniform layout.
    source.len = 5;
    run_frames(&mut board, &mut source, &mut now);
    board.invalidate_layout();
    run_frames(&mut board, &mut source, &mut now);
    assert!(
        board
            .layout()
            .columns()
            .iter()
            .flat_map(|c| c.heights())
            .all(|&h| h == 220.0)
    );

    board.clear_tile_heights();
    assert!(board.needs_frame());
}

#[test]
fn snapshot_reports_consistent_state() {
    let mut board = mounted(PinboardOptions::default());
    let mut source = FakeSource::new(30);
    let mut now = 0;
    board.on_key(Key::ArrowDown);
    run_frames(&mut board, &mut source, &mut now);

    let s = board.snapshot();
    assert_eq!(s.viewport, board.viewport());
    assert_eq!(s.virtual_position, s.origin + s.scroll);
    assert_eq!(s.target, s.scroll);
    assert_eq!(s.columns, 4);
    assert!((s.virtual_position.y - 120.0).abs() < 1e-9);
}

#[test]
fn tile_feed_keeps_last_non_empty_pattern() {
    let mut feed = TileFeed::new();
    assert!(feed.is_empty());
    assert_eq!(feed.observe(alloc::vec!["a", "b"]), &["a", "b"]);
    assert_eq!(feed.observe(Vec::new()), &["a", "b"]);
    assert_eq!(feed.observe(alloc::vec!["c"]), &["c"]);
    assert_eq!(feed.len(), 1);
    feed.clear();
    assert!(feed.pattern().is_empty());
}
