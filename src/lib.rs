//! Raster image to needlepoint chart conversion
//!
//! The pipeline resamples an image onto a stitch grid, quantizes each
//! cell to its nearest thread color, optionally reduces the distinct
//! color count, assigns printable symbols, and renders colored or
//! symbol-plus-legend charts. The palette is a fixed list built once at
//! startup and shared read-only across conversions.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Thread-color palette storage and distance computation
pub mod palette;
/// Image-to-pattern conversion pipeline
pub mod pipeline;
/// Chart rasterization and legends
pub mod render;

pub use io::error::{PatternError, Result};
pub use pipeline::builder::{Cell, Pattern, build_pattern};
