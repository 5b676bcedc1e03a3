use alloc::vec::Vec;

use pinboard::{
    ColumnTransition, ContainerRect, InfinitePlane, InputController, Key, PaginationTrigger,
    PatternLayout, PinboardOptions, PinboardState, PointerInput, ScrollStateReader,
    TileMetrics, TilePlacement, Vec2, Viewport, ViewportTracker, WheelInput,
    column_count_for_width, layout_columns,
};

use crate::TileSource;

/// The native scroll container a pinboard is mounted on.
///
/// Implemented by the host for whatever element actually scrolls (a DOM node, a scroll
/// area widget, a test double).
pub trait ScrollContainer {
    /// The container's rect in page coordinates, or `None` while it is not laid out.
    fn rect(&self) -> Option<ContainerRect>;

    fn scroll_offset(&self) -> Vec2;

    fn set_scroll_offset(&mut self, offset: Vec2);
}

/// What one [`Pinboard::on_animation_frame`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameReport {
    /// The committed native offset changed.
    pub scrolled: bool,
    pub recentered: bool,
    /// The column transition adopted the measured count.
    pub columns_changed: bool,
    pub layout_rebuilt: bool,
    pub requested_more: bool,
}

/// A framework-neutral driver that owns every pinboard component and the mounted container.
///
/// This type holds no UI objects besides the container handle. Adapters drive it by calling:
/// - the `on_*` input methods when UI events occur
/// - `on_animation_frame(now_ms, source)` whenever [`Pinboard::needs_frame`] is `true`
/// - `on_timer(now_ms)` at [`Pinboard::next_timer_ms`]
///
/// and then render [`Pinboard::for_each_placement`] inside a plane of
/// [`Pinboard::plane`] size.
#[derive(Clone, Debug)]
pub struct Pinboard<C> {
    options: PinboardOptions,
    viewport: ViewportTracker,
    scroll: ScrollStateReader,
    input: InputController,
    plane: InfinitePlane,
    columns: ColumnTransition,
    pagination: PaginationTrigger,
    layout: PatternLayout,
    heights: Option<Vec<f64>>,
    /// Tile count the measured column count was fitted for.
    measured_tiles: usize,
    layout_dirty: bool,
    container: Option<C>,
}

impl<C: ScrollContainer> Pinboard<C> {
    pub fn new(options: PinboardOptions) -> Self {
        let metrics = TileMetrics::from_options(&options);
        Self {
            options,
            viewport: ViewportTracker::new(options.fallback_viewport),
            scroll: ScrollStateReader::default(),
            input: InputController::new(options),
            plane: InfinitePlane::new(&options),
            columns: ColumnTransition::new(options.placeholder_columns, options.column_transition_ms),
            pagination: PaginationTrigger::from_options(&options),
            layout: PatternLayout::uniform(0, 1, metrics, options.stagger_count),
            heights: None,
            measured_tiles: 0,
            layout_dirty: true,
            container: None,
        }
    }

    pub fn options(&self) -> &PinboardOptions {
        &self.options
    }

    pub fn is_mounted(&self) -> bool {
        self.container.is_some()
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    pub fn container_mut(&mut self) -> Option<&mut C> {
        self.container.as_mut()
    }

    /// Attaches the container: measures it, centers the plane and resets every component.
    ///
    /// A previously mounted container is replaced and returned.
    pub fn mount(&mut self, mut container: C, now_ms: u64) -> Option<C> {
        let previous = self.unmount();

        self.viewport = ViewportTracker::new(self.options.fallback_viewport);
        self.viewport.on_resize(container.rect());
        let viewport = self.viewport.viewport();

        let center = self.plane.mount(viewport, &mut self.input);
        container.set_scroll_offset(center);
        self.scroll = ScrollStateReader::new(center);

        self.columns =
            ColumnTransition::new(self.options.placeholder_columns, self.options.column_transition_ms);
        self.measure_columns(viewport, self.layout.tile_count(), now_ms);
        self.pagination = PaginationTrigger::from_options(&self.options);
        self.layout_dirty = true;

        adebug!(
            width = viewport.width,
            height = viewport.height,
            "pinboard mounted"
        );
        self.container = Some(container);
        previous
    }

    /// Detaches the container and cancels every pending frame, timer and gesture.
    pub fn unmount(&mut self) -> Option<C> {
        self.input.cancel_all();
        self.scroll.cancel();
        self.columns.cancel();
        let container = self.container.take();
        if container.is_some() {
            adebug!("pinboard unmounted");
        }
        container
    }

    fn spacing(&self, tile_count: usize, max_columns: usize) -> TileMetrics {
        let metrics = TileMetrics::from_options(&self.options);
        if self.options.adaptive_spacing {
            metrics.adapted_for(tile_count, max_columns)
        } else {
            metrics
        }
    }

    /// Fits the column count with the spacing `tile_count` tiles would get.
    fn measure_columns(&mut self, viewport: Viewport, tile_count: usize, now_ms: u64) {
        self.measured_tiles = tile_count;
        let metrics = self.spacing(tile_count, self.options.max_columns);
        if let Some(count) = column_count_for_width(
            viewport.width,
            &metrics,
            self.options.min_columns,
            self.options.max_columns,
        ) {
            self.columns.set_measured(count, now_ms);
        }
    }

    fn current_scroll(&self) -> Option<Vec2> {
        let offset = self.container.as_ref()?.scroll_offset();
        if offset.is_finite() {
            Some(offset)
        } else {
            Some(self.scroll.offset())
        }
    }

    /// Re-measures the container. Returns `true` when its rect changed.
    pub fn on_resize(&mut self, now_ms: u64) -> bool {
        let Some(container) = &self.container else {
            return false;
        };
        if !self.viewport.on_resize(container.rect()) {
            return false;
        }
        self.measure_columns(self.viewport.viewport(), self.measured_tiles, now_ms);
        self.layout_dirty = true;
        true
    }

    /// Notes a native scroll event. Returns `true` when the host must schedule a frame.
    pub fn on_scroll_event(&mut self) -> bool {
        if self.container.is_none() {
            return false;
        }
        self.scroll.on_scroll_event()
    }

    pub fn on_wheel(&mut self, wheel: WheelInput) -> bool {
        if self.container.is_none() {
            return false;
        }
        self.input.on_wheel(wheel, self.viewport.viewport())
    }

    /// Returns `true` when a single-finger drag started.
    pub fn on_touch_start(&mut self, touches: &[Vec2]) -> bool {
        let Some(scroll) = self.current_scroll() else {
            return false;
        };
        self.input.on_touch_start(touches, scroll);
        self.input.is_touching()
    }

    pub fn on_touch_move(&mut self, touches: &[Vec2]) -> bool {
        if self.container.is_none() {
            return false;
        }
        self.input.on_touch_move(touches)
    }

    /// Returns `true` when a touch drag was active.
    pub fn on_touch_end(&mut self) -> bool {
        if self.container.is_none() {
            return false;
        }
        let was_touching = self.input.is_touching();
        self.input.on_touch_end();
        was_touching
    }

    pub fn on_pointer_down(&mut self, pointer: PointerInput, now_ms: u64) -> bool {
        let Some(scroll) = self.current_scroll() else {
            return false;
        };
        self.input.on_pointer_down(pointer, scroll, now_ms)
    }

    pub fn on_pointer_move(&mut self, position: Vec2) -> bool {
        if self.container.is_none() {
            return false;
        }
        self.input.on_pointer_move(position)
    }

    /// Pointer up, pointer cancel and mouse-leave all end the drag.
    pub fn on_pointer_up(&mut self) -> bool {
        if self.container.is_none() {
            return false;
        }
        self.input.on_pointer_up()
    }

    pub fn on_key(&mut self, key: Key) -> bool {
        if self.container.is_none() {
            return false;
        }
        self.input.on_key(key, self.viewport.viewport())
    }

    /// Switches to the masonry layout with per-tile heights (see
    /// [`pinboard::resolve_heights`]). The layout is rebuilt on the next frame.
    pub fn set_tile_heights(&mut self, heights: Vec<f64>) {
        self.heights = Some(heights);
        self.layout_dirty = true;
    }

    /// Returns to the uniform layout.
    pub fn clear_tile_heights(&mut self) {
        if self.heights.take().is_some() {
            self.layout_dirty = true;
        }
    }

    /// Notes that the data layer changed (tiles appended or replaced, `is_loading` or
    /// `has_more` flipped). The layout and the pagination check run again on the next frame.
    ///
    /// Returns `true` when the host must schedule a frame.
    pub fn on_source_changed(&mut self) -> bool {
        if self.container.is_none() {
            return false;
        }
        self.layout_dirty = true;
        true
    }

    /// Forces a layout rebuild on the next frame (e.g. the tile list was replaced with one of
    /// the same length).
    pub fn invalidate_layout(&mut self) {
        self.layout_dirty = true;
    }

    pub fn needs_frame(&self) -> bool {
        self.container.is_some()
            && (self.input.needs_frame()
                || self.scroll.is_frame_pending()
                || self.plane.is_recentering()
                || self.layout_dirty)
    }

    /// Earliest pending timer deadline (press-and-hold or column transition).
    pub fn next_timer_ms(&self) -> Option<u64> {
        if self.container.is_none() {
            return None;
        }
        match (self.input.next_timer_ms(), self.columns.next_timer_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fires due timers. Returns `true` when the host must schedule a frame.
    pub fn on_timer(&mut self, now_ms: u64) -> bool {
        if self.container.is_none() {
            return false;
        }
        self.input.fire_timers(now_ms, self.viewport.rect());
        if self.columns.fire_timers(now_ms) {
            self.layout_dirty = true;
        }
        self.needs_frame()
    }

    /// Runs the per-frame pipeline.
    ///
    /// Order: clear the recenter guard, fire due timers, auto-scroll and ease (writes the
    /// container), commit the scroll state, recenter (writes the container), rebuild the
    /// layout if the tile or column count changed (or the source reported a change), then
    /// check pagination.
    pub fn on_animation_frame(
        &mut self,
        now_ms: u64,
        source: &mut impl TileSource,
    ) -> FrameReport {
        let mut report = FrameReport::default();
        let Some(container) = self.container.as_mut() else {
            return report;
        };
        let viewport = self.viewport.viewport();

        self.plane.end_frame();
        self.input.fire_timers(now_ms, self.viewport.rect());
        if self.columns.fire_timers(now_ms) {
            report.columns_changed = true;
            self.layout_dirty = true;
        }

        let sampled = container.scroll_offset();
        if let Some(next) = self.input.tick(now_ms, sampled) {
            container.set_scroll_offset(next);
        }

        let offset = container.scroll_offset();
        let committed = if self.scroll.is_frame_pending() {
            self.scroll.on_frame(offset)
        } else {
            self.scroll.commit(offset)
        };
        report.scrolled = committed.is_some();

        if let Some(recenter) = self.plane.maintain(self.scroll.offset(), viewport, &mut self.input) {
            container.set_scroll_offset(recenter.scroll_to);
            self.scroll.commit(recenter.scroll_to);
            report.recentered = true;
        }

        let tile_count = source.len();
        if tile_count != self.measured_tiles {
            self.measure_columns(viewport, tile_count, now_ms);
        }
        let current = self.columns.current();
        let columns = layout_columns(
            current,
            self.columns.measured().unwrap_or(current),
            tile_count,
        );
        if self.layout_dirty
            || tile_count != self.layout.tile_count()
            || columns != self.layout.column_count()
        {
            self.rebuild_layout(tile_count, columns);
            report.layout_rebuilt = true;
        }

        let virtual_y = self.plane.virtual_position(self.scroll.offset()).y;
        let status = source.status();
        report.requested_more =
            self.pagination
                .evaluate(virtual_y, status, now_ms, || source.request_more());
        report
    }

    fn rebuild_layout(&mut self, tile_count: usize, columns: usize) {
        let metrics = self.spacing(tile_count, columns);
        let stagger = self.options.stagger_count;
        self.layout = match &self.heights {
            Some(heights) if heights.len() == tile_count => {
                PatternLayout::masonry(heights, columns, metrics, stagger)
            }
            Some(heights) => {
                awarn!(
                    heights = heights.len(),
                    tile_count,
                    "tile heights out of date; using uniform layout"
                );
                PatternLayout::uniform(tile_count, columns, metrics, stagger)
            }
            None => PatternLayout::uniform(tile_count, columns, metrics, stagger),
        };
        self.layout_dirty = false;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    /// Committed native scroll offset.
    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll.offset()
    }

    pub fn target(&self) -> Vec2 {
        self.input.target()
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// The native plane; the host sizes the scrollable content to its width and height.
    pub fn plane(&self) -> &InfinitePlane {
        &self.plane
    }

    pub fn virtual_position(&self) -> Vec2 {
        self.plane.virtual_position(self.scroll.offset())
    }

    pub fn origin(&self) -> Vec2 {
        self.plane.origin()
    }

    pub fn layout(&self) -> &PatternLayout {
        &self.layout
    }

    /// Visits every tile instance to draw, in native plane coordinates.
    pub fn for_each_placement(&self, f: impl FnMut(TilePlacement)) {
        if self.container.is_none() {
            return;
        }
        self.layout.for_each_placement(
            self.virtual_position(),
            self.plane.origin(),
            self.viewport.viewport(),
            self.options.col_buffer,
            self.options.row_buffer,
            f,
        );
    }

    /// Collects placements into `out` (clears `out` first). Reuse `out` across frames.
    pub fn collect_placements(&self, out: &mut Vec<TilePlacement>) {
        out.clear();
        self.for_each_placement(|p| out.push(p));
    }

    pub fn snapshot(&self) -> PinboardState {
        PinboardState {
            viewport: self.viewport.viewport(),
            scroll: self.scroll.offset(),
            origin: self.plane.origin(),
            target: self.input.target(),
            virtual_position: self.virtual_position(),
            columns: self.layout.column_count(),
        }
    }
}
