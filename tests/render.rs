//! Rendering checks for colored and symbol charts

use image::{DynamicImage, Rgb, RgbImage};
use stitchgrid::io::configuration::{DEFAULT_CELL_PX, LEGEND_WIDTH_PX};
use stitchgrid::palette::store::PaletteStore;
use stitchgrid::pipeline::builder::{Pattern, build_pattern};
use stitchgrid::render::chart::{render_colored_chart, render_symbol_chart};
use stitchgrid::render::glyphs::GlyphRenderer;

fn checker_pattern() -> Pattern {
    let palette = PaletteStore::from_table(&[
        (201, "Ink", [0, 0, 0]),
        (202, "Paper", [255, 255, 255]),
    ]);
    let mut src = RgbImage::new(4, 4);
    for (x, y, pixel) in src.enumerate_pixels_mut() {
        let rgb = if (x + y) % 2 == 0 { [0, 0, 0] } else { [255, 255, 255] };
        *pixel = Rgb(rgb);
    }
    build_pattern(&DynamicImage::ImageRgb8(src), &palette, "4x4", 14, 0).unwrap()
}

#[test]
fn test_colored_chart_dimensions() {
    let pattern = checker_pattern();
    let chart = render_colored_chart(&pattern, DEFAULT_CELL_PX);
    assert_eq!(chart.width(), 4 * DEFAULT_CELL_PX);
    assert_eq!(chart.height(), 4 * DEFAULT_CELL_PX);
}

#[test]
fn test_colored_chart_paints_cell_interiors() {
    let pattern = checker_pattern();
    let cell = DEFAULT_CELL_PX;
    let chart = render_colored_chart(&pattern, cell);

    // Sample at cell centers, away from grid lines.
    let center = cell / 2;
    assert_eq!(chart.get_pixel(center, center).0, pattern.cells[0][0].rgb);
    assert_eq!(
        chart.get_pixel(cell + center, center).0,
        pattern.cells[0][1].rgb
    );
}

#[test]
fn test_colored_chart_draws_boundary_lines() {
    let pattern = checker_pattern();
    let cell = DEFAULT_CELL_PX;
    let chart = render_colored_chart(&pattern, cell);

    let mid = cell / 2;
    // Boundary 1 is a hairline sitting exactly on the cell edge.
    assert_eq!(chart.get_pixel(cell, mid).0, [0, 0, 0]);
    // Boundary 0 is heavy and hugs the left edge.
    assert_eq!(chart.get_pixel(0, mid).0, [0, 0, 0]);
    assert_eq!(chart.get_pixel(1, mid).0, [0, 0, 0]);
}

#[test]
fn test_symbol_chart_reserves_legend_panel() {
    let pattern = checker_pattern();
    let mut glyphs = GlyphRenderer::new();
    let chart = render_symbol_chart(&pattern, &mut glyphs, DEFAULT_CELL_PX, LEGEND_WIDTH_PX);
    assert_eq!(chart.width(), 4 * DEFAULT_CELL_PX + LEGEND_WIDTH_PX);
    assert_eq!(chart.height(), 4 * DEFAULT_CELL_PX);
}

#[test]
fn test_symbol_chart_cells_carry_ink() {
    let pattern = checker_pattern();
    let mut glyphs = GlyphRenderer::new();
    let cell = DEFAULT_CELL_PX;
    let chart = render_symbol_chart(&pattern, &mut glyphs, cell, LEGEND_WIDTH_PX);

    // Somewhere inside the first cell a symbol glyph left non-white
    // pixels, regardless of which font backend was used.
    let mut ink = false;
    for y in 2..cell - 2 {
        for x in 2..cell - 2 {
            if chart.get_pixel(x, y).0 != [255, 255, 255] {
                ink = true;
            }
        }
    }
    assert!(ink, "expected symbol ink inside the first cell");
}

#[test]
fn test_symbol_chart_draws_legend_separator() {
    let pattern = checker_pattern();
    let mut glyphs = GlyphRenderer::new();
    let cell = DEFAULT_CELL_PX;
    let chart = render_symbol_chart(&pattern, &mut glyphs, cell, LEGEND_WIDTH_PX);

    let chart_w = 4 * cell;
    assert_eq!(chart.get_pixel(chart_w, cell).0, [0, 0, 0]);
}

#[test]
fn test_rendering_is_deterministic() {
    let pattern = checker_pattern();
    let colored_a = render_colored_chart(&pattern, 12);
    let colored_b = render_colored_chart(&pattern, 12);
    assert_eq!(colored_a.as_raw(), colored_b.as_raw());

    let mut glyphs = GlyphRenderer::new();
    let symbols_a = render_symbol_chart(&pattern, &mut glyphs, 12, 200);
    let symbols_b = render_symbol_chart(&pattern, &mut glyphs, 12, 200);
    assert_eq!(symbols_a.as_raw(), symbols_b.as_raw());
}
