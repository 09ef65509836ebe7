//! Legend panel layout and drawing for symbol charts

use crate::io::configuration::{
    LEGEND_COLUMN_ADVANCE, LEGEND_MARGIN, LEGEND_OVERLAY_PX, LEGEND_ROW_STEP,
    LEGEND_SEPARATOR_WEIGHT, LEGEND_SWATCH_HEIGHT, LEGEND_SWATCH_WIDTH, LEGEND_TEXT_INDENT,
    SYMBOL_SCALE,
};
use crate::pipeline::builder::Pattern;
use crate::render::chart::{fill_rect, outline_rect, symbol_text_color, vertical_line};
use crate::render::glyphs::{GlyphRenderer, draw_text};
use image::RgbImage;
use std::collections::HashMap;

/// Explicit layout cursor for legend rows
///
/// Rows advance downward; when the next row would run past the bottom of
/// the chart the cursor wraps to the top of a new column. Wrapping is a
/// deterministic function of the row count, never of rendered text size.
#[derive(Debug, Clone, Copy)]
pub struct LegendCursor {
    /// Current column origin in pixels
    pub x: u32,
    /// Current row top in pixels
    pub y: u32,
    top: u32,
    bottom: u32,
    column_advance: u32,
    row_step: u32,
}

impl LegendCursor {
    /// Create a cursor starting at `(x, top)` wrapping at `bottom`
    pub const fn new(x: u32, top: u32, bottom: u32, column_advance: u32, row_step: u32) -> Self {
        Self {
            x,
            y: top,
            top,
            bottom,
            column_advance,
            row_step,
        }
    }

    /// Move down one row, wrapping into a fresh column when out of space
    pub const fn advance(&mut self) {
        self.y += self.row_step;
        if self.y > self.bottom.saturating_sub(self.row_step) {
            self.x += self.column_advance;
            self.y = self.top;
        }
    }
}

struct LegendRow {
    dmc: u32,
    name: String,
    rgb: [u8; 3],
    symbol: char,
    count: usize,
}

// One row per distinct color, most used first, ties by ascending thread
// number.
fn collect_rows(pattern: &Pattern) -> Vec<LegendRow> {
    let mut rows: HashMap<u32, LegendRow> = HashMap::new();
    for cell in pattern.cells.iter().flatten() {
        rows.entry(cell.dmc)
            .and_modify(|row| row.count += 1)
            .or_insert_with(|| LegendRow {
                dmc: cell.dmc,
                name: cell.name.clone(),
                rgb: cell.rgb,
                symbol: cell.symbol,
                count: 1,
            });
    }

    let mut rows: Vec<LegendRow> = rows.into_values().collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then(a.dmc.cmp(&b.dmc)));
    rows
}

/// Draw the legend panel to the right of an already-rendered chart
pub fn draw_legend(
    img: &mut RgbImage,
    pattern: &Pattern,
    renderer: &mut GlyphRenderer,
    chart_w: u32,
    chart_h: u32,
    cell_px: u32,
) {
    let black = [0, 0, 0];
    let text_px = ((cell_px as f32) * SYMBOL_SCALE).round().max(1.0) as u32;
    let rows = collect_rows(pattern);

    vertical_line(img, chart_w, 0, chart_h, LEGEND_SEPARATOR_WEIGHT, black);

    let lx = chart_w + LEGEND_MARGIN;
    let mut ly = LEGEND_MARGIN;
    draw_text(img, renderer, "DMC Key", lx, ly, text_px, black);
    ly += LEGEND_ROW_STEP + 4;
    let total = format!("Total colors: {}", rows.len());
    draw_text(img, renderer, &total, lx, ly, text_px, black);
    ly += LEGEND_ROW_STEP;

    let mut cursor = LegendCursor::new(
        lx,
        ly,
        chart_h.saturating_sub(LEGEND_ROW_STEP),
        LEGEND_COLUMN_ADVANCE,
        LEGEND_ROW_STEP,
    );

    for row in &rows {
        let swatch_y = cursor.y + 4;
        fill_rect(
            img,
            cursor.x,
            swatch_y,
            LEGEND_SWATCH_WIDTH,
            LEGEND_SWATCH_HEIGHT,
            row.rgb,
        );
        outline_rect(
            img,
            cursor.x,
            swatch_y,
            LEGEND_SWATCH_WIDTH,
            LEGEND_SWATCH_HEIGHT,
            black,
        );
        draw_char_on_swatch(img, renderer, row, cursor.x, swatch_y);

        let text = format!("{}  {}  (stitches: {})", row.dmc, row.name, row.count);
        draw_text(
            img,
            renderer,
            &text,
            cursor.x + LEGEND_TEXT_INDENT,
            cursor.y,
            text_px,
            black,
        );
        cursor.advance();
    }
}

fn draw_char_on_swatch(
    img: &mut RgbImage,
    renderer: &mut GlyphRenderer,
    row: &LegendRow,
    swatch_x: u32,
    swatch_y: u32,
) {
    let color = symbol_text_color(row.rgb);
    let text = row.symbol.to_string();
    draw_text(
        img,
        renderer,
        &text,
        swatch_x + 6,
        swatch_y + 2,
        LEGEND_OVERLAY_PX,
        color,
    );
}
