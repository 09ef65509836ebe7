//! Software glyph rasterization for symbol charts and legends
//!
//! Prefers a system monospace font rendered through `ab_glyph`, with a
//! per-character alpha-buffer cache so repeated symbols cost one
//! rasterization each. When no font file can be located the renderer
//! degrades to a built-in 5×7 bitmap face; rendering never fails on
//! missing fonts.

use crate::io::configuration::MONOSPACE_FONT_PATHS;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use image::RgbImage;
use std::collections::HashMap;

/// A rasterized glyph: a tightly bounded alpha buffer plus pen advance
#[derive(Debug, Clone)]
pub struct GlyphRaster {
    /// Width of the alpha buffer in pixels
    pub width: u32,
    /// Height of the alpha buffer in pixels
    pub height: u32,
    /// Horizontal pen advance to the next glyph
    pub advance: u32,
    /// Row-major coverage values, 0 = transparent, 255 = opaque
    pub alpha: Vec<u8>,
}

impl GlyphRaster {
    const fn empty(advance: u32) -> Self {
        Self {
            width: 0,
            height: 0,
            advance,
            alpha: Vec::new(),
        }
    }
}

/// Caching glyph rasterizer backed by a system monospace font when available
pub struct GlyphRenderer {
    font: Option<FontVec>,
    cache: HashMap<(char, u32), GlyphRaster>,
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphRenderer {
    /// Create a renderer, probing the known monospace font locations
    ///
    /// Falls back to the built-in bitmap face when no font file parses;
    /// construction itself cannot fail.
    pub fn new() -> Self {
        let font = MONOSPACE_FONT_PATHS
            .iter()
            .find_map(|path| std::fs::read(path).ok())
            .and_then(|data| FontVec::try_from_vec(data).ok());

        Self {
            font,
            cache: HashMap::new(),
        }
    }

    /// Check whether a real font was located (as opposed to the fallback)
    pub const fn has_system_font(&self) -> bool {
        self.font.is_some()
    }

    /// Rasterize one character at the given pixel height
    pub fn rasterize(&mut self, ch: char, px_height: u32) -> GlyphRaster {
        if let Some(raster) = self.cache.get(&(ch, px_height)) {
            return raster.clone();
        }

        let raster = self
            .font
            .as_ref()
            .and_then(|font| outline_raster(font, ch, px_height))
            .unwrap_or_else(|| builtin_raster(ch, px_height));

        self.cache.insert((ch, px_height), raster.clone());
        raster
    }

    /// Pixel width of a string at the given height
    pub fn text_width(&mut self, text: &str, px_height: u32) -> u32 {
        text.chars()
            .map(|ch| self.rasterize(ch, px_height).advance)
            .sum()
    }
}

// Rasterizes through ab_glyph; None for characters the font lacks so the
// caller can fall through to the builtin face.
fn outline_raster(font: &FontVec, ch: char, px_height: u32) -> Option<GlyphRaster> {
    let glyph_id = font.glyph_id(ch);
    // Glyph id 0 is .notdef; let the builtin face handle it instead of
    // stamping placeholder boxes.
    if glyph_id.0 == 0 {
        return None;
    }

    let scale = PxScale::from(px_height as f32);
    let scaled = font.as_scaled(scale);
    let advance = scaled.h_advance(glyph_id).ceil().max(1.0) as u32;

    let glyph = glyph_id.with_scale_and_position(scale, point(0.0, scaled.ascent()));
    let Some(outline) = font.outline_glyph(glyph) else {
        // Whitespace and other empty glyphs still advance the pen.
        return Some(GlyphRaster::empty(advance));
    };

    let bounds = outline.px_bounds();
    let width = bounds.width().ceil().max(1.0) as u32;
    let height = bounds.height().ceil().max(1.0) as u32;
    let mut alpha = vec![0u8; (width * height) as usize];

    outline.draw(|x, y, coverage| {
        if x < width && y < height {
            let index = (y * width + x) as usize;
            if let Some(value) = alpha.get_mut(index) {
                *value = (coverage * 255.0).round().clamp(0.0, 255.0) as u8;
            }
        }
    });

    Some(GlyphRaster {
        width,
        height,
        advance,
        alpha,
    })
}

// Integer-scaled rendition of the 5×7 bitmap face.
fn builtin_raster(ch: char, px_height: u32) -> GlyphRaster {
    let scale = (px_height / 8).max(1);
    let advance = 6 * scale;

    let Some(columns) = builtin_glyph(ch) else {
        return GlyphRaster::empty(advance);
    };

    let width = 5 * scale;
    let height = 7 * scale;
    let mut alpha = vec![0u8; (width * height) as usize];

    for (col, bits) in columns.iter().enumerate() {
        for row in 0..7u32 {
            if bits & (1 << row) == 0 {
                continue;
            }
            for dy in 0..scale {
                for dx in 0..scale {
                    let x = col as u32 * scale + dx;
                    let y = row * scale + dy;
                    let index = (y * width + x) as usize;
                    if let Some(value) = alpha.get_mut(index) {
                        *value = 255;
                    }
                }
            }
        }
    }

    GlyphRaster {
        width,
        height,
        advance,
        alpha,
    }
}

/// Draw a string with its top-left corner at `(x, y)`
pub fn draw_text(
    img: &mut RgbImage,
    renderer: &mut GlyphRenderer,
    text: &str,
    x: u32,
    y: u32,
    px_height: u32,
    color: [u8; 3],
) {
    let mut pen_x = x;
    for ch in text.chars() {
        let raster = renderer.rasterize(ch, px_height);
        blit_alpha(img, &raster, pen_x, y, color);
        pen_x = pen_x.saturating_add(raster.advance);
    }
}

/// Draw one character centered in the pixel box at `(x0, y0)`
pub fn draw_char_centered(
    img: &mut RgbImage,
    renderer: &mut GlyphRenderer,
    ch: char,
    x0: u32,
    y0: u32,
    box_size: u32,
    px_height: u32,
    color: [u8; 3],
) {
    let raster = renderer.rasterize(ch, px_height);
    let x = x0 + box_size.saturating_sub(raster.width) / 2;
    let y = y0 + box_size.saturating_sub(raster.height) / 2;
    blit_alpha(img, &raster, x, y, color);
}

// Alpha-blends a glyph buffer onto the image, clipping at the edges.
fn blit_alpha(img: &mut RgbImage, raster: &GlyphRaster, x0: u32, y0: u32, color: [u8; 3]) {
    for row in 0..raster.height {
        for col in 0..raster.width {
            let index = (row * raster.width + col) as usize;
            let coverage = raster.alpha.get(index).copied().unwrap_or(0);
            if coverage == 0 {
                continue;
            }
            let x = x0 + col;
            let y = y0 + row;
            if x >= img.width() || y >= img.height() {
                continue;
            }
            let pixel = img.get_pixel_mut(x, y);
            let a = u32::from(coverage);
            for (channel, &target) in pixel.0.iter_mut().zip(color.iter()) {
                let blended = (u32::from(*channel) * (255 - a) + u32::from(target) * a) / 255;
                *channel = blended as u8;
            }
        }
    }
}

// Classic 5×7 face, column-major, bit 0 = top row. Covers printable
// ASCII, which is a superset of the symbol alphabet.
fn builtin_glyph(ch: char) -> Option<[u8; 5]> {
    let index = (ch as usize).checked_sub(0x20)?;
    BUILTIN_FACE.get(index).copied()
}

#[rustfmt::skip]
const BUILTIN_FACE: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x14, 0x08, 0x3E, 0x08, 0x14], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x10, 0x08, 0x08, 0x10, 0x08], // ~
];
