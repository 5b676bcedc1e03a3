// Example: fold a tile list into repeating columns and list what a renderer would draw.
use pinboard::{PatternLayout, PinboardOptions, TileMetrics, Vec2, Viewport, column_count_for_width};

fn main() {
    let options = PinboardOptions::default();
    let viewport = Viewport::new(1200.0, 800.0);
    let metrics = TileMetrics::from_options(&options);

    let columns = column_count_for_width(viewport.width, &metrics, options.min_columns, options.max_columns)
        .unwrap_or(options.min_columns);
    let layout = PatternLayout::uniform(10, columns, metrics, options.stagger_count);
    for (c, col) in layout.columns().iter().enumerate() {
        println!(
            "column {c}: tiles={:?} pattern_height={} offset={:.1}",
            col.tiles(),
            col.pattern_height(),
            col.vertical_offset()
        );
    }

    // Far away from the start, in negative space: the pattern still covers the window.
    let virtual_position = Vec2::new(-123_456.0, 987_654.0);
    let origin = Vec2::new(-4_999_400.0, -4_999_600.0);
    let mut placements = Vec::new();
    layout.collect_placements(
        virtual_position,
        origin,
        viewport,
        options.col_buffer,
        options.row_buffer,
        &mut placements,
    );
    println!(
        "visible_columns={:?} placements={}",
        layout.visible_columns(virtual_position.x, viewport.width, options.col_buffer),
        placements.len()
    );
    println!("first={:?}", placements.first());
}
