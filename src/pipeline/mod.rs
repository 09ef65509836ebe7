//! Image-to-pattern conversion pipeline
//!
//! Stages run in dependency order: resampling to the stitch grid,
//! nearest-palette quantization, optional frequency-based color
//! reduction, symbol assignment, and final pattern assembly. Each stage
//! is a pure function of its inputs; the builder is the only entry point
//! callers need.

/// Pattern assembly and canvas-size validation
pub mod builder;
/// Nearest-palette-color quantization
pub mod quantize;
/// Frequency-based color-count reduction
pub mod reduce;
/// Image-to-grid resampling
pub mod resample;
/// Printable symbol assignment
pub mod symbols;

pub use builder::{Cell, Pattern, build_pattern, parse_canvas_size};
pub use symbols::SYMBOL_ALPHABET;
