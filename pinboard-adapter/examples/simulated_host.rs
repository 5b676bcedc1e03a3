use pinboard::{ContainerRect, Key, PageStatus, PinboardOptions, Vec2, WheelInput};
use pinboard_adapter::{Pinboard, ScrollContainer, TileSource};

struct Element {
    offset: Vec2,
}

impl ScrollContainer for Element {
    fn rect(&self) -> Option<ContainerRect> {
        Some(ContainerRect::new(0.0, 0.0, 1280.0, 720.0))
    }

    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}

struct Pages {
    loaded: usize,
}

impl TileSource for Pages {
    fn len(&self) -> usize {
        self.loaded
    }

    fn status(&self) -> PageStatus {
        PageStatus {
            has_more: self.loaded < 200,
            is_loading: false,
        }
    }

    fn request_more(&mut self) {
        // A real data layer would fetch asynchronously.
        self.loaded += 40;
    }
}

fn main() {
    // Example: a host frame loop driving the pinboard without any UI objects.
    //
    // A real adapter would:
    // - forward wheel/touch/pointer/key events
    // - schedule an animation frame while `needs_frame()` is true
    // - arm a timer for `next_timer_ms()`
    // - render `for_each_placement` inside a plane of `plane()` size
    let mut board = Pinboard::new(PinboardOptions::default());
    let mut pages = Pages { loaded: 40 };
    let mut now_ms = 0u64;
    board.mount(Element { offset: Vec2::ZERO }, now_ms);

    for step in 0..400 {
        if step % 10 == 0 {
            board.on_wheel(WheelInput::pixels(0.0, 400.0));
        }
        if step == 200 {
            board.on_key(Key::End);
        }
        if board.next_timer_ms().is_some_and(|t| t <= now_ms) {
            board.on_timer(now_ms);
        }
        now_ms += 16;
        if board.needs_frame() {
            let loaded = pages.loaded;
            let report = board.on_animation_frame(now_ms, &mut pages);
            if pages.loaded != loaded {
                // The page arrived; let the board re-layout even if the user stops scrolling.
                board.on_source_changed();
            }
            if report.recentered || report.requested_more || report.columns_changed {
                println!("t={now_ms} {report:?} virtual={:?}", board.virtual_position());
            }
        }
    }

    let mut count = 0;
    board.for_each_placement(|_| count += 1);
    println!("done: {:?} tiles_loaded={} placements={count}", board.snapshot(), pages.loaded);
}
