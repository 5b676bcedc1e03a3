use alloc::vec::Vec;
use core::ops::Range;

use crate::key::{HeightMap, TileKey};
use crate::math::{ceil_i64, floor, floor_i64};
use crate::{PinboardOptions, TilePlacement, Vec2, Viewport};

/// Tile and gap dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMetrics {
    pub tile_width: f64,
    pub tile_height: f64,
    pub gap_x: f64,
    pub gap_y: f64,
}

impl TileMetrics {
    pub fn from_options(options: &PinboardOptions) -> Self {
        Self {
            tile_width: options.tile_width,
            tile_height: options.tile_height,
            gap_x: options.gap_x,
            gap_y: options.gap_y,
        }
    }

    pub fn row_step(&self) -> f64 {
        self.tile_height + self.gap_y
    }

    pub fn stride_x(&self) -> f64 {
        self.tile_width + self.gap_x
    }

    /// Tightens the horizontal gap when only a few tiles are loaded, so a sparse board does
    /// not look scattered.
    pub fn adapted_for(self, tile_count: usize, max_columns: usize) -> Self {
        let gap_x = if tile_count == 0 {
            self.gap_x
        } else if tile_count <= 3 {
            (self.gap_x / 3.0).max(10.0)
        } else if tile_count <= max_columns {
            (self.gap_x / 2.0).max(15.0)
        } else {
            self.gap_x
        };
        Self { gap_x, ..self }
    }
}

/// Assigns tile `i` to bucket `i % columns`, preserving order inside each bucket.
///
/// Buckets hold indexes into the tile list. `columns == 0` is treated as one column.
pub fn bucketize(tile_count: usize, columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let mut buckets: Vec<Vec<usize>> = (0..columns)
        .map(|c| Vec::with_capacity(tile_count / columns + usize::from(c < tile_count % columns)))
        .collect();
    for i in 0..tile_count {
        buckets[i % columns].push(i);
    }
    buckets
}

/// Number of columns that fit `width`, clamped to `[min_columns, max_columns]`.
///
/// Returns `None` for an unmeasurable width so callers keep their previous count.
pub fn column_count_for_width(
    width: f64,
    metrics: &TileMetrics,
    min_columns: usize,
    max_columns: usize,
) -> Option<usize> {
    let stride = metrics.stride_x();
    if !width.is_finite() || width <= 0.0 || !stride.is_finite() || stride <= 0.0 {
        return None;
    }
    let fit = floor((width + metrics.gap_x) / stride);
    let fit = if fit < 0.0 { 0 } else { fit as usize };
    let min = min_columns.max(1);
    Some(fit.clamp(min, max_columns.max(min)))
}

/// Column count actually laid out: never more columns than tiles, never zero.
pub fn layout_columns(current: usize, measured: usize, tile_count: usize) -> usize {
    current.min(measured).min(tile_count.max(1)).max(1)
}

/// Vertical phase of a column: `(column % stagger_count) * tile_height / stagger_count`.
pub fn column_stagger(column: usize, stagger_count: usize, tile_height: f64) -> f64 {
    let stagger_count = stagger_count.max(1);
    (column % stagger_count) as f64 * (tile_height / stagger_count as f64)
}

/// Resolves per-tile heights for the masonry layout: a measured height wins, otherwise
/// `estimate`.
pub fn resolve_heights<T, K: TileKey>(
    tiles: &[T],
    key: impl Fn(&T) -> K,
    measured: &HeightMap<K>,
    estimate: f64,
) -> Vec<f64> {
    tiles
        .iter()
        .map(|tile| match measured.get(&key(tile)) {
            Some(&h) if h.is_finite() && h > 0.0 => h,
            _ => estimate,
        })
        .collect()
}

/// One column's repeating pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnLayout {
    tiles: Vec<usize>,
    cumulative_y: Vec<f64>,
    heights: Vec<f64>,
    pattern_height: f64,
    vertical_offset: f64,
}

impl ColumnLayout {
    /// Tile list indexes in this column, in order.
    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    /// Offset of each tile inside one repetition.
    pub fn cumulative_y(&self) -> &[f64] {
        &self.cumulative_y
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Height of one repetition. Never below one row step.
    pub fn pattern_height(&self) -> f64 {
        self.pattern_height
    }

    pub fn vertical_offset(&self) -> f64 {
        self.vertical_offset
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// First repetition that must be rendered for `virtual_y`, including `row_buffer`.
    pub fn first_repetition(&self, virtual_y: f64, row_buffer: usize) -> i64 {
        floor_i64((virtual_y - self.vertical_offset) / self.pattern_height)
            .saturating_sub(row_buffer as i64)
    }

    /// Repetitions needed to cover `viewport_height` plus the buffer on both ends.
    pub fn repetition_count(&self, viewport_height: f64, row_buffer: usize) -> usize {
        let cover = ceil_i64(viewport_height / self.pattern_height).max(0) as usize;
        cover
            .saturating_add(row_buffer.saturating_mul(2))
            .saturating_add(2)
    }
}

/// A finite tile list folded into repeating columns that tile the plane in both directions.
///
/// Layouts are rebuilt, never patched: construct a new one whenever the tile count, column
/// count or metrics change. Buckets depend only on tile indexes, so tile identity survives
/// a rebuild.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternLayout {
    columns: Vec<ColumnLayout>,
    metrics: TileMetrics,
    tile_count: usize,
}

impl PatternLayout {
    /// Uniform rows: `cumulative_y[j] = j * row_step`, pattern height
    /// `max(row_step, len * row_step)`.
    pub fn uniform(
        tile_count: usize,
        columns: usize,
        metrics: TileMetrics,
        stagger_count: usize,
    ) -> Self {
        let row_step = metrics.row_step();
        let columns = bucketize(tile_count, columns)
            .into_iter()
            .enumerate()
            .map(|(c, tiles)| {
                let cumulative_y = (0..tiles.len()).map(|j| j as f64 * row_step).collect();
                let heights = alloc::vec![metrics.tile_height; tiles.len()];
                let pattern_height = (tiles.len() as f64 * row_step).max(row_step);
                ColumnLayout {
                    tiles,
                    cumulative_y,
                    heights,
                    pattern_height,
                    vertical_offset: column_stagger(c, stagger_count, metrics.tile_height),
                }
            })
            .collect();
        pdebug!(tile_count, "uniform layout rebuilt");
        Self {
            columns,
            metrics,
            tile_count,
        }
    }

    /// Variable heights: each tile goes to the currently shortest column (ties to the
    /// leftmost).
    pub fn masonry(
        heights: &[f64],
        columns: usize,
        metrics: TileMetrics,
        stagger_count: usize,
    ) -> Self {
        let columns = columns.max(1);
        let row_step = metrics.row_step();
        let mut out: Vec<ColumnLayout> = (0..columns)
            .map(|c| ColumnLayout {
                tiles: Vec::new(),
                cumulative_y: Vec::new(),
                heights: Vec::new(),
                pattern_height: 0.0,
                vertical_offset: column_stagger(c, stagger_count, metrics.tile_height),
            })
            .collect();

        for (i, &h) in heights.iter().enumerate() {
            let h = if h.is_finite() && h > 0.0 {
                h
            } else {
                metrics.tile_height
            };
            let mut k = 0;
            for c in 1..columns {
                if out[c].pattern_height < out[k].pattern_height {
                    k = c;
                }
            }
            let col = &mut out[k];
            col.tiles.push(i);
            col.cumulative_y.push(col.pattern_height);
            col.heights.push(h);
            col.pattern_height += h + metrics.gap_y;
        }
        for col in &mut out {
            col.pattern_height = col.pattern_height.max(row_step);
        }
        pdebug!(tile_count = heights.len(), "masonry layout rebuilt");
        Self {
            columns: out,
            metrics,
            tile_count: heights.len(),
        }
    }

    pub fn metrics(&self) -> &TileMetrics {
        &self.metrics
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[ColumnLayout] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&ColumnLayout> {
        self.columns.get(index)
    }

    /// Bucket repeated by an unbounded column index.
    pub fn base_column(&self, column: i64) -> usize {
        column.rem_euclid(self.columns.len().max(1) as i64) as usize
    }

    /// Unbounded column indexes to render for `virtual_x`, including `col_buffer` on both
    /// sides.
    pub fn visible_columns(
        &self,
        virtual_x: f64,
        viewport_width: f64,
        col_buffer: usize,
    ) -> Range<i64> {
        let stride = self.metrics.stride_x();
        if !stride.is_finite() || stride <= 0.0 || !virtual_x.is_finite() || !viewport_width.is_finite()
        {
            return 0..0;
        }
        let buffer = col_buffer as i64;
        let first = floor_i64(virtual_x / stride).saturating_sub(buffer);
        let count = ceil_i64(viewport_width / stride)
            .max(0)
            .saturating_add(buffer.saturating_mul(2));
        first..first.saturating_add(count)
    }

    /// Visits every tile instance the renderer must draw for the given window.
    ///
    /// Positions are native plane coordinates:
    /// `x = column * stride_x - origin.x`,
    /// `y = repetition * pattern_height + vertical_offset + cumulative_y[j] - origin.y`.
    pub fn for_each_placement(
        &self,
        virtual_position: Vec2,
        origin: Vec2,
        viewport: Viewport,
        col_buffer: usize,
        row_buffer: usize,
        mut f: impl FnMut(TilePlacement),
    ) {
        if self.tile_count == 0 || !virtual_position.is_finite() || !origin.is_finite() {
            return;
        }
        let stride = self.metrics.stride_x();
        for column in self.visible_columns(virtual_position.x, viewport.width, col_buffer) {
            let base_column = self.base_column(column);
            let col = &self.columns[base_column];
            if col.is_empty() {
                continue;
            }
            let x = column as f64 * stride - origin.x;
            let first = col.first_repetition(virtual_position.y, row_buffer);
            let count = col.repetition_count(viewport.height, row_buffer) as i64;
            for repetition in first..first.saturating_add(count) {
                let base_y = repetition as f64 * col.pattern_height + col.vertical_offset;
                for (j, &tile_index) in col.tiles.iter().enumerate() {
                    f(TilePlacement {
                        tile_index,
                        column,
                        base_column,
                        repetition,
                        x,
                        y: base_y + col.cumulative_y[j] - origin.y,
                        width: self.metrics.tile_width,
                        height: col.heights[j],
                    });
                }
            }
        }
    }

    /// Collects placements into `out` (clears `out` first).
    ///
    /// Convenience wrapper around [`Self::for_each_placement`]; reuse `out` across frames.
    pub fn collect_placements(
        &self,
        virtual_position: Vec2,
        origin: Vec2,
        viewport: Viewport,
        col_buffer: usize,
        row_buffer: usize,
        out: &mut Vec<TilePlacement>,
    ) {
        out.clear();
        self.for_each_placement(virtual_position, origin, viewport, col_buffer, row_buffer, |p| {
            out.push(p)
        });
    }
}
