//! Chart geometry constants and runtime configuration defaults

// Chart rendering geometry
/// Default pixel size of one rendered stitch cell
pub const DEFAULT_CELL_PX: u32 = 28;
/// Grid boundary spacing that receives the heaviest line weight
pub const HEAVY_GRID_EVERY: usize = 10;
/// Grid boundary spacing that receives the medium line weight
pub const MEDIUM_GRID_EVERY: usize = 5;
/// Width of the legend panel appended to symbol charts
pub const LEGEND_WIDTH_PX: u32 = 520;
/// Symbol glyph height relative to the cell size
pub const SYMBOL_SCALE: f32 = 0.6;
/// Luminance threshold above which symbol text is drawn in black
pub const TEXT_LUMINANCE_THRESHOLD: f32 = 140.0;

// Legend layout metrics
/// Margin between the chart edge and legend content
pub const LEGEND_MARGIN: u32 = 20;
/// Vertical step between legend rows
pub const LEGEND_ROW_STEP: u32 = 24;
/// Horizontal advance when legend rows overflow into a new column
pub const LEGEND_COLUMN_ADVANCE: u32 = 240;
/// Width of the legend color swatch
pub const LEGEND_SWATCH_WIDTH: u32 = 24;
/// Height of the legend color swatch
pub const LEGEND_SWATCH_HEIGHT: u32 = 16;
/// Horizontal offset from the swatch to the legend row text
pub const LEGEND_TEXT_INDENT: u32 = 32;
/// Glyph height for the symbol overlaid on legend swatches
pub const LEGEND_OVERLAY_PX: u32 = 12;
/// Weight of the separator line between chart and legend
pub const LEGEND_SEPARATOR_WEIGHT: u32 = 2;

// Quantization settings
/// Number of grid cells quantized per batch to bound transient memory
pub const QUANTIZE_CHUNK_SIZE: usize = 50_000;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed stitches along either canvas axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Default maximum distinct colors in a pattern (0 disables reduction)
pub const DEFAULT_MAX_COLORS: usize = 30;
/// Default physical stitches-per-inch metadata
pub const DEFAULT_MESH_COUNT: u32 = 14;
/// Default canvas size in stitches
pub const DEFAULT_CANVAS_SIZE: &str = "80x80";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

// Output settings
/// Suffix added to colored chart filenames
pub const COLORED_CHART_SUFFIX: &str = "_chart";
/// Suffix added to symbol chart filenames
pub const SYMBOL_CHART_SUFFIX: &str = "_symbols";
/// Suffix added to exported pattern data filenames
pub const PATTERN_DATA_SUFFIX: &str = "_pattern";

/// Image file extensions accepted as conversion input
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "webp", "ico", "ppm", "pgm", "pbm", "pnm",
];

/// Monospace font files probed for symbol chart text, in preference order
///
/// When none of these exist the renderer falls back to the built-in
/// bitmap font instead of failing.
pub const MONOSPACE_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/ubuntu/UbuntuMono-R.ttf",
    "/System/Library/Fonts/Monaco.ttf",
];
