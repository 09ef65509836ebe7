//! Nearest-palette-color quantization of the sampled grid

use crate::io::error::{Result, invalid_parameter};
use crate::palette::store::{PaletteStore, distance_squared};
use ndarray::Array2;

/// Map every grid sample to the index of its nearest palette entry
///
/// Nearest means minimal squared RGB distance; exact ties resolve to the
/// lowest palette index, so the result is reproducible across runs and
/// independent of batching. The grid is read in place in batches of at
/// most `chunk_size` cells, never copied, so transient memory stays
/// bounded on large grids; the batch size never affects the output.
///
/// # Errors
///
/// Returns `InvalidParameter` if the palette is empty or `chunk_size` is
/// zero.
pub fn quantize(
    samples: &Array2<[u8; 3]>,
    palette: &PaletteStore,
    chunk_size: usize,
) -> Result<Array2<usize>> {
    if palette.is_empty() {
        return Err(invalid_parameter(
            "palette",
            &"(empty)",
            &"at least one palette entry is required",
        ));
    }
    if chunk_size == 0 {
        return Err(invalid_parameter(
            "chunk_size",
            &chunk_size,
            &"batch size must be positive",
        ));
    }

    let mut indices = Vec::with_capacity(samples.len());
    if let Some(cells) = samples.as_slice() {
        for batch in cells.chunks(chunk_size) {
            indices.extend(batch.iter().map(|&rgb| nearest_index(palette, rgb)));
        }
    } else {
        // Non-contiguous layouts are walked cell by cell in logical order.
        indices.extend(samples.iter().map(|&rgb| nearest_index(palette, rgb)));
    }

    Array2::from_shape_vec(samples.raw_dim(), indices)
        .map_err(|e| invalid_parameter("samples", &"grid", &e))
}

/// Index of the palette entry nearest to `rgb`
///
/// Scans entries in palette order with a strict improvement test, so the
/// lowest index wins exact distance ties.
pub fn nearest_index(palette: &PaletteStore, rgb: [u8; 3]) -> usize {
    let mut best_index = 0;
    let mut best_dist = u32::MAX;
    for (index, entry) in palette.entries().enumerate() {
        let dist = distance_squared(rgb, entry.rgb);
        if dist < best_dist {
            best_dist = dist;
            best_index = index;
        }
    }
    best_index
}
