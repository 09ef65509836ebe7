//! Pattern assembly: the pipeline entry point callers invoke

use crate::io::configuration::{MAX_GRID_DIMENSION, QUANTIZE_CHUNK_SIZE};
use crate::io::error::{Result, invalid_dimensions, invalid_parameter};
use crate::palette::store::PaletteStore;
use crate::pipeline::quantize::quantize;
use crate::pipeline::reduce::{distinct_indices, reduce_to_top_colors};
use crate::pipeline::resample::resample_to_grid;
use crate::pipeline::symbols::assign_symbols;
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One annotated stitch cell of the finished pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Thread catalog number of the assigned color
    pub dmc: u32,
    /// Display name of the assigned color
    pub name: String,
    /// Exact sRGB bytes of the assigned color
    pub rgb: [u8; 3],
    /// Printable chart symbol for the assigned color
    pub symbol: char,
}

/// A complete needlepoint pattern, the only artifact that leaves the pipeline
///
/// Immutable once built; serializes losslessly (exact RGB bytes, exact
/// symbol code points) so it can round-trip through persistence layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Grid width in stitches
    pub width: usize,
    /// Grid height in stitches
    pub height: usize,
    /// Physical stitches-per-inch metadata, carried through unchanged
    pub mesh_count: u32,
    /// Row-major grid of annotated cells (`cells[y][x]`)
    pub cells: Vec<Vec<Cell>>,
    /// Thread catalog numbers in first-occurrence row-major order
    pub colors_used: Vec<u32>,
    /// Palette index to chart symbol mapping
    pub symbol_map: BTreeMap<usize, char>,
}

/// Parse a `"<width>x<height>"` canvas-size string
///
/// # Errors
///
/// Returns `InvalidDimensions` if the string is malformed, either value
/// is not a positive integer, or a value exceeds the maximum grid
/// dimension.
pub fn parse_canvas_size(canvas_size: &str) -> Result<(usize, usize)> {
    let (w, h) = canvas_size.split_once('x').ok_or_else(|| {
        invalid_dimensions(&canvas_size, &"expected the form '<width>x<height>'")
    })?;

    let width = parse_dimension(canvas_size, w.trim(), "width")?;
    let height = parse_dimension(canvas_size, h.trim(), "height")?;
    Ok((width, height))
}

fn parse_dimension(original: &str, text: &str, axis: &str) -> Result<usize> {
    let value: usize = text
        .parse()
        .map_err(|_| invalid_dimensions(&original, &format!("{axis} is not a positive integer")))?;
    if value == 0 {
        return Err(invalid_dimensions(
            &original,
            &format!("{axis} must be positive"),
        ));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_dimensions(
            &original,
            &format!("{axis} exceeds the maximum of {MAX_GRID_DIMENSION} stitches"),
        ));
    }
    Ok(value)
}

/// Convert an image into a complete needlepoint pattern
///
/// Runs resampling, quantization, optional color reduction
/// (`max_colors == 0` means no limit) and symbol assignment, then
/// assembles the cell grid, the first-occurrence-ordered list of thread
/// numbers, and the symbol map. `mesh_count` is stored verbatim; it never
/// enters the pixel math.
///
/// # Errors
///
/// Returns `InvalidDimensions` for a malformed canvas size,
/// `TooManyColors` if the surviving colors exceed the symbol alphabet,
/// or any error surfaced by the pipeline stages, unwrapped.
pub fn build_pattern(
    image: &DynamicImage,
    palette: &PaletteStore,
    canvas_size: &str,
    mesh_count: u32,
    max_colors: usize,
) -> Result<Pattern> {
    let (width, height) = parse_canvas_size(canvas_size)?;

    let samples = resample_to_grid(image, width, height)?;
    let mut index_map = quantize(&samples, palette, QUANTIZE_CHUNK_SIZE)?;
    drop(samples);

    reduce_to_top_colors(&mut index_map, max_colors);

    let used = distinct_indices(&index_map);
    let symbol_map = assign_symbols(&used)?;

    let mut cells = Vec::with_capacity(height);
    let mut colors_used = Vec::new();

    for row in index_map.rows() {
        let mut cell_row = Vec::with_capacity(width);
        for &index in row {
            let entry = palette.entry_at(index).ok_or_else(|| {
                invalid_parameter("palette index", &index, &"index out of palette range")
            })?;
            let symbol = symbol_map.get(&index).copied().ok_or_else(|| {
                invalid_parameter("palette index", &index, &"index missing from symbol map")
            })?;
            cell_row.push(Cell {
                dmc: entry.id,
                name: entry.name.clone(),
                rgb: entry.rgb,
                symbol,
            });
            if !colors_used.contains(&entry.id) {
                colors_used.push(entry.id);
            }
        }
        cells.push(cell_row);
    }

    Ok(Pattern {
        width,
        height,
        mesh_count,
        cells,
        colors_used,
        symbol_map,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::error::PatternError;

    #[test]
    fn test_parse_canvas_size_accepts_well_formed_input() {
        assert_eq!(parse_canvas_size("80x120").unwrap(), (80, 120));
        assert_eq!(parse_canvas_size("1x1").unwrap(), (1, 1));
        assert_eq!(parse_canvas_size(" 10 x 20 ").unwrap(), (10, 20));
    }

    #[test]
    fn test_parse_canvas_size_rejects_malformed_input() {
        for bad in ["", "80", "80x", "x80", "0x10", "10x0", "-5x10", "axb", "10x10x10"] {
            let err = parse_canvas_size(bad).unwrap_err();
            assert!(
                matches!(err, PatternError::InvalidDimensions { .. }),
                "expected InvalidDimensions for {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_canvas_size_enforces_maximum() {
        let oversized = format!("{}x10", MAX_GRID_DIMENSION + 1);
        assert!(parse_canvas_size(&oversized).is_err());
    }
}
