//! Image-to-grid resampling with anti-aliasing filtering

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_dimensions};
use image::DynamicImage;
use image::imageops::FilterType;
use ndarray::Array2;

/// Resample an image to an exact `width × height` grid of RGB samples
///
/// The image is converted to RGB first (any alpha channel is dropped
/// outright rather than composited) and then shrunk or grown with a
/// Lanczos3 windowed-sinc filter, which keeps aliasing low for the usual
/// case of a source image much larger than the stitch grid. One sample is
/// produced per target stitch cell, addressed as `grid[[y, x]]`.
///
/// # Errors
///
/// Returns `InvalidDimensions` if either dimension is zero or exceeds the
/// maximum grid dimension.
pub fn resample_to_grid(
    image: &DynamicImage,
    width: usize,
    height: usize,
) -> Result<Array2<[u8; 3]>> {
    validate_dimension(width, "width")?;
    validate_dimension(height, "height")?;

    // RGB conversion happens before filtering so resampling never mixes
    // color channels with alpha.
    let rgb = image.to_rgb8();
    let resized = image::imageops::resize(&rgb, width as u32, height as u32, FilterType::Lanczos3);

    let samples: Vec<[u8; 3]> = resized.pixels().map(|p| p.0).collect();
    Array2::from_shape_vec((height, width), samples)
        .map_err(|e| invalid_dimensions(&format!("{width}x{height}"), &e))
}

fn validate_dimension(value: usize, axis: &str) -> Result<()> {
    if value == 0 {
        return Err(invalid_dimensions(
            &value,
            &format!("{axis} must be a positive number of stitches"),
        ));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_dimensions(
            &value,
            &format!("{axis} exceeds the maximum of {MAX_GRID_DIMENSION} stitches"),
        ));
    }
    Ok(())
}
