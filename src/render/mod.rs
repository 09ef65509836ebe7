//! Chart rasterization: colored charts, symbol charts, and legends

/// Colored and symbol chart rendering with grid lines
pub mod chart;
/// Software glyph rasterization with a built-in fallback face
pub mod glyphs;
/// Legend panel layout and drawing
pub mod legend;

pub use chart::{grid_line_weight, render_colored_chart, render_symbol_chart};
pub use glyphs::GlyphRenderer;
