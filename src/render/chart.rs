//! Chart rasterization: colored charts and symbol charts with grid lines

use crate::io::configuration::{
    HEAVY_GRID_EVERY, MEDIUM_GRID_EVERY, SYMBOL_SCALE, TEXT_LUMINANCE_THRESHOLD,
};
use crate::pipeline::builder::Pattern;
use crate::render::glyphs::{GlyphRenderer, draw_char_centered};
use crate::render::legend::draw_legend;
use image::{Rgb, RgbImage};

/// Line weight at grid boundary position `p`
///
/// Every 10th boundary is heaviest, every 5th is medium, the rest are
/// hairlines, matching the conventional stitch-counting grid.
pub const fn grid_line_weight(boundary: usize) -> u32 {
    if boundary % HEAVY_GRID_EVERY == 0 {
        3
    } else if boundary % MEDIUM_GRID_EVERY == 0 {
        2
    } else {
        1
    }
}

/// Perceived luminance of an RGB color (Rec. 709 weights)
pub fn luminance(rgb: [u8; 3]) -> f32 {
    0.2126 * f32::from(rgb[0]) + 0.7152 * f32::from(rgb[1]) + 0.0722 * f32::from(rgb[2])
}

/// Text color giving readable contrast against the given background
pub fn symbol_text_color(background: [u8; 3]) -> [u8; 3] {
    if luminance(background) > TEXT_LUMINANCE_THRESHOLD {
        [0, 0, 0]
    } else {
        [255, 255, 255]
    }
}

/// Render the pattern as a flat colored-cell chart with grid lines
///
/// Output is `width·cell_px × height·cell_px` pixels, one filled square
/// per stitch in its palette color.
pub fn render_colored_chart(pattern: &Pattern, cell_px: u32) -> RgbImage {
    let chart_w = pattern.width as u32 * cell_px;
    let chart_h = pattern.height as u32 * cell_px;
    let mut img = RgbImage::from_pixel(chart_w, chart_h, Rgb([255, 255, 255]));

    for (y, row) in pattern.cells.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            fill_rect(
                &mut img,
                x as u32 * cell_px,
                y as u32 * cell_px,
                cell_px,
                cell_px,
                cell.rgb,
            );
        }
    }

    draw_grid_lines(&mut img, pattern.width, pattern.height, cell_px);
    img
}

/// Render the pattern as a symbol chart with an adjoining legend panel
///
/// Cells are white with the assigned symbol centered in each; the legend
/// occupies `legend_width` extra pixels to the right of the chart. Text
/// uses a located monospace font, or the built-in face when none exists.
pub fn render_symbol_chart(
    pattern: &Pattern,
    renderer: &mut GlyphRenderer,
    cell_px: u32,
    legend_width: u32,
) -> RgbImage {
    let chart_w = pattern.width as u32 * cell_px;
    let chart_h = pattern.height as u32 * cell_px;
    let mut img = RgbImage::from_pixel(chart_w + legend_width, chart_h, Rgb([255, 255, 255]));

    let symbol_px = ((cell_px as f32) * SYMBOL_SCALE).round().max(1.0) as u32;
    for (y, row) in pattern.cells.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            // Cells are white, so this always resolves to black; the
            // luminance rule is shared with the legend swatch overlays.
            let color = symbol_text_color([255, 255, 255]);
            draw_char_centered(
                &mut img,
                renderer,
                cell.symbol,
                x as u32 * cell_px,
                y as u32 * cell_px,
                cell_px,
                symbol_px,
                color,
            );
        }
    }

    draw_grid_lines(&mut img, pattern.width, pattern.height, cell_px);
    draw_legend(&mut img, pattern, renderer, chart_w, chart_h, cell_px);
    img
}

/// Paint a filled rectangle, clipped to the image bounds
pub fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, rgb: [u8; 3]) {
    let x1 = (x0 + w).min(img.width());
    let y1 = (y0 + h).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Rgb(rgb));
        }
    }
}

/// Paint a 1-pixel rectangle outline, clipped to the image bounds
pub fn outline_rect(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, rgb: [u8; 3]) {
    if w == 0 || h == 0 {
        return;
    }
    fill_rect(img, x0, y0, w, 1, rgb);
    fill_rect(img, x0, y0 + h - 1, w, 1, rgb);
    fill_rect(img, x0, y0, 1, h, rgb);
    fill_rect(img, x0 + w - 1, y0, 1, h, rgb);
}

/// Draw a vertical line of the given weight centered on `x`
pub fn vertical_line(img: &mut RgbImage, x: u32, y0: u32, y1: u32, weight: u32, rgb: [u8; 3]) {
    let start = x.saturating_sub(weight / 2);
    fill_rect(img, start, y0, weight, y1.saturating_sub(y0), rgb);
}

/// Draw a horizontal line of the given weight centered on `y`
pub fn horizontal_line(img: &mut RgbImage, y: u32, x0: u32, x1: u32, weight: u32, rgb: [u8; 3]) {
    let start = y.saturating_sub(weight / 2);
    fill_rect(img, x0, start, x1.saturating_sub(x0), weight, rgb);
}

// Shared by both chart variants: lines at every cell boundary on both
// axes, weight escalating at the 5- and 10-stitch marks.
fn draw_grid_lines(img: &mut RgbImage, width: usize, height: usize, cell_px: u32) {
    let chart_w = width as u32 * cell_px;
    let chart_h = height as u32 * cell_px;
    let black = [0, 0, 0];

    for x in 0..=width {
        let weight = grid_line_weight(x);
        vertical_line(img, x as u32 * cell_px, 0, chart_h, weight, black);
    }
    for y in 0..=height {
        let weight = grid_line_weight(y);
        horizontal_line(img, y as u32 * cell_px, 0, chart_w, weight, black);
    }
}
