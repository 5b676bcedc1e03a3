use crate::{OptionsError, Viewport};

/// Configuration shared by every pinboard component.
///
/// All fields are plain data, so the type is `Copy` and each component keeps its own copy.
/// Defaults follow values tuned for a fast, smooth pinboard; treat them as a starting point.
///
/// Construction never fails. Call [`PinboardOptions::validate`] to check a configuration
/// loaded from outside the program.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinboardOptions {
    /// Width of the native scrollable plane.
    pub plane_width: f64,
    /// Height of the native scrollable plane.
    pub plane_height: f64,
    /// Distance from a plane edge at which a recenter is triggered.
    pub edge_guard: f64,
    /// Viewport assumed before the container is measured.
    pub fallback_viewport: Viewport,

    pub tile_width: f64,
    pub tile_height: f64,
    pub gap_x: f64,
    pub gap_y: f64,

    pub min_columns: usize,
    pub max_columns: usize,
    /// Dense column count shown right after mount, before the measured count is adopted.
    pub placeholder_columns: usize,
    /// Delay before the measured column count replaces the current one.
    pub column_transition_ms: u64,
    /// Number of distinct vertical phases across columns.
    pub stagger_count: usize,
    /// Shrink the horizontal gap when only a few tiles are loaded.
    pub adaptive_spacing: bool,

    /// Extra columns rendered on each side of the viewport.
    pub col_buffer: usize,
    /// Extra pattern repetitions rendered above and below the viewport.
    pub row_buffer: usize,

    pub wheel_speed: f64,
    pub touch_speed: f64,
    /// Per-event cap applied to wheel and touch deltas.
    pub clamp_max_delta: f64,
    /// Pixels per line for `DeltaMode::Line` wheel events.
    pub line_height: f64,

    /// Fraction of the remaining distance covered per animation frame.
    pub ease_k: f64,
    /// Below this distance an axis snaps onto its target.
    pub stop_eps: f64,

    pub drag_speed: f64,
    pub hold_delay_ms: u64,
    pub hold_speed_px_s: f64,

    pub arrow_step_fraction: f64,
    pub page_step_fraction: f64,

    /// Pagination threshold, in tile heights of virtual Y.
    pub pagination_threshold_rows: f64,
    pub pagination_debounce_ms: u64,
}

impl Default for PinboardOptions {
    fn default() -> Self {
        Self {
            plane_width: 10_000_000.0,
            plane_height: 10_000_000.0,
            edge_guard: 2_000_000.0,
            fallback_viewport: Viewport::FALLBACK,
            tile_width: 270.0,
            tile_height: 220.0,
            gap_x: 25.0,
            gap_y: 25.0,
            min_columns: 2,
            max_columns: 8,
            placeholder_columns: 20,
            column_transition_ms: 1000,
            stagger_count: 3,
            adaptive_spacing: true,
            col_buffer: 2,
            row_buffer: 2,
            wheel_speed: 0.6,
            touch_speed: 0.9,
            clamp_max_delta: 90.0,
            line_height: 16.0,
            ease_k: 0.26,
            stop_eps: 0.1,
            drag_speed: 1.3,
            hold_delay_ms: 120,
            hold_speed_px_s: 1400.0,
            arrow_step_fraction: 0.15,
            page_step_fraction: 0.7,
            pagination_threshold_rows: 20.0,
            pagination_debounce_ms: 800,
        }
    }
}

impl PinboardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical distance between consecutive tiles of one column.
    pub fn row_step(&self) -> f64 {
        self.tile_height + self.gap_y
    }

    /// Horizontal distance between consecutive columns.
    pub fn stride_x(&self) -> f64 {
        self.tile_width + self.gap_x
    }

    /// Virtual Y beyond which the next page is requested.
    pub fn pagination_threshold(&self) -> f64 {
        self.tile_height * self.pagination_threshold_rows
    }

    pub fn with_plane_size(mut self, width: f64, height: f64) -> Self {
        self.plane_width = width;
        self.plane_height = height;
        self
    }

    pub fn with_edge_guard(mut self, edge_guard: f64) -> Self {
        self.edge_guard = edge_guard;
        self
    }

    pub fn with_fallback_viewport(mut self, viewport: Viewport) -> Self {
        self.fallback_viewport = viewport;
        self
    }

    pub fn with_tile_size(mut self, width: f64, height: f64) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    pub fn with_gaps(mut self, gap_x: f64, gap_y: f64) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    pub fn with_column_range(mut self, min_columns: usize, max_columns: usize) -> Self {
        self.min_columns = min_columns;
        self.max_columns = max_columns;
        self
    }

    pub fn with_placeholder_columns(mut self, placeholder_columns: usize) -> Self {
        self.placeholder_columns = placeholder_columns;
        self
    }

    pub fn with_column_transition_ms(mut self, delay_ms: u64) -> Self {
        self.column_transition_ms = delay_ms;
        self
    }

    pub fn with_stagger_count(mut self, stagger_count: usize) -> Self {
        self.stagger_count = stagger_count;
        self
    }

    pub fn with_adaptive_spacing(mut self, adaptive_spacing: bool) -> Self {
        self.adaptive_spacing = adaptive_spacing;
        self
    }

    pub fn with_buffers(mut self, col_buffer: usize, row_buffer: usize) -> Self {
        self.col_buffer = col_buffer;
        self.row_buffer = row_buffer;
        self
    }

    pub fn with_wheel(mut self, wheel_speed: f64, clamp_max_delta: f64) -> Self {
        self.wheel_speed = wheel_speed;
        self.clamp_max_delta = clamp_max_delta;
        self
    }

    pub fn with_touch_speed(mut self, touch_speed: f64) -> Self {
        self.touch_speed = touch_speed;
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_easing(mut self, ease_k: f64, stop_eps: f64) -> Self {
        self.ease_k = ease_k;
        self.stop_eps = stop_eps;
        self
    }

    pub fn with_drag_speed(mut self, drag_speed: f64) -> Self {
        self.drag_speed = drag_speed;
        self
    }

    pub fn with_hold(mut self, hold_delay_ms: u64, hold_speed_px_s: f64) -> Self {
        self.hold_delay_ms = hold_delay_ms;
        self.hold_speed_px_s = hold_speed_px_s;
        self
    }

    pub fn with_key_steps(mut self, arrow_step_fraction: f64, page_step_fraction: f64) -> Self {
        self.arrow_step_fraction = arrow_step_fraction;
        self.page_step_fraction = page_step_fraction;
        self
    }

    pub fn with_pagination(mut self, threshold_rows: f64, debounce_ms: u64) -> Self {
        self.pagination_threshold_rows = threshold_rows;
        self.pagination_debounce_ms = debounce_ms;
        self
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let finite = [
            ("plane_width", self.plane_width),
            ("plane_height", self.plane_height),
            ("edge_guard", self.edge_guard),
            ("fallback_viewport.width", self.fallback_viewport.width),
            ("fallback_viewport.height", self.fallback_viewport.height),
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("gap_x", self.gap_x),
            ("gap_y", self.gap_y),
            ("wheel_speed", self.wheel_speed),
            ("touch_speed", self.touch_speed),
            ("clamp_max_delta", self.clamp_max_delta),
            ("line_height", self.line_height),
            ("ease_k", self.ease_k),
            ("stop_eps", self.stop_eps),
            ("drag_speed", self.drag_speed),
            ("hold_speed_px_s", self.hold_speed_px_s),
            ("arrow_step_fraction", self.arrow_step_fraction),
            ("page_step_fraction", self.page_step_fraction),
            ("pagination_threshold_rows", self.pagination_threshold_rows),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(OptionsError::NotFinite { field, value });
            }
        }

        let positive = [
            ("plane_width", self.plane_width),
            ("plane_height", self.plane_height),
            ("fallback_viewport.width", self.fallback_viewport.width),
            ("fallback_viewport.height", self.fallback_viewport.height),
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("clamp_max_delta", self.clamp_max_delta),
            ("line_height", self.line_height),
            ("stop_eps", self.stop_eps),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(OptionsError::NotPositive { field, value });
            }
        }

        if !(self.ease_k > 0.0 && self.ease_k < 1.0) {
            return Err(OptionsError::EaseOutOfRange(self.ease_k));
        }

        for (plane, view) in [
            (self.plane_width, self.fallback_viewport.width),
            (self.plane_height, self.fallback_viewport.height),
        ] {
            // The centered scroll offset must sit strictly inside both guards.
            if self.edge_guard < 0.0 || self.edge_guard * 2.0 >= plane - view {
                return Err(OptionsError::GuardTooLarge {
                    guard: self.edge_guard,
                    plane,
                });
            }
        }

        if self.min_columns == 0 {
            return Err(OptionsError::ZeroMinColumns);
        }
        if self.min_columns > self.max_columns {
            return Err(OptionsError::ColumnRange {
                min: self.min_columns,
                max: self.max_columns,
            });
        }
        if self.stagger_count == 0 {
            return Err(OptionsError::ZeroStagger);
        }
        Ok(())
    }
}
