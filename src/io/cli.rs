//! Command-line interface for batch-converting images into charts

use crate::io::configuration::{
    COLORED_CHART_SUFFIX, DEFAULT_CANVAS_SIZE, DEFAULT_CELL_PX, DEFAULT_MAX_COLORS,
    DEFAULT_MESH_COUNT, LEGEND_WIDTH_PX, PATTERN_DATA_SUFFIX, SUPPORTED_EXTENSIONS,
    SYMBOL_CHART_SUFFIX,
};
use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::palette::dmc::dmc_palette;
use crate::palette::store::PaletteStore;
use crate::pipeline::builder::build_pattern;
use crate::render::chart::{render_colored_chart, render_symbol_chart};
use crate::render::glyphs::GlyphRenderer;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stitchgrid")]
#[command(
    author,
    version,
    about = "Convert raster images into stitchable needlepoint charts"
)]
/// Command-line arguments for the chart conversion tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Canvas size in stitches, e.g. 80x120
    #[arg(short, long, default_value = DEFAULT_CANVAS_SIZE)]
    pub size: String,

    /// Mesh count metadata (stitches per inch)
    #[arg(short, long, default_value_t = DEFAULT_MESH_COUNT)]
    pub mesh: u32,

    /// Maximum distinct thread colors (0 disables reduction)
    #[arg(short = 'c', long, default_value_t = DEFAULT_MAX_COLORS)]
    pub max_colors: usize,

    /// Pixel size of one rendered stitch cell
    #[arg(long, default_value_t = DEFAULT_CELL_PX)]
    pub cell_px: u32,

    /// Also render a symbol chart with a thread legend
    #[arg(long)]
    pub symbols: bool,

    /// Also export the pattern data structure as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch conversion of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    palette: PaletteStore,
    glyphs: GlyphRenderer,
    progress: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    ///
    /// The bundled DMC palette is built once here and shared across every
    /// conversion; font probing for symbol charts also happens once.
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::default);

        Self {
            cli,
            palette: dmc_palette(),
            glyphs: GlyphRenderer::new(),
            progress,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, conversion, or export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        // Allow print for user feedback about degraded symbol rendering
        #[allow(clippy::print_stderr)]
        if self.cli.symbols && !self.cli.quiet && !self.glyphs.has_system_font() {
            eprintln!("No monospace font found; symbol charts use the built-in bitmap face");
        }

        if let Some(ref mut pm) = self.progress {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref pm) = self.progress {
                pm.start_file(file);
            }
            self.convert_file(file)?;
            if let Some(ref pm) = self.progress {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a supported image format",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_supported(&path) && !is_generated_output(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = output_path(input_path, COLORED_CHART_SUFFIX, "png");
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn convert_file(&mut self, input_path: &Path) -> Result<()> {
        let img = image::open(input_path).map_err(|e| PatternError::Decode {
            path: input_path.to_path_buf(),
            source: e,
        })?;

        let pattern = build_pattern(
            &img,
            &self.palette,
            &self.cli.size,
            self.cli.mesh,
            self.cli.max_colors,
        )?;

        let chart = render_colored_chart(&pattern, self.cli.cell_px);
        let chart_path = output_path(input_path, COLORED_CHART_SUFFIX, "png");
        chart
            .save(&chart_path)
            .map_err(|e| PatternError::ImageExport {
                path: chart_path,
                source: e,
            })?;

        if self.cli.symbols {
            let symbol_chart =
                render_symbol_chart(&pattern, &mut self.glyphs, self.cli.cell_px, LEGEND_WIDTH_PX);
            let symbol_path = output_path(input_path, SYMBOL_CHART_SUFFIX, "png");
            symbol_chart
                .save(&symbol_path)
                .map_err(|e| PatternError::ImageExport {
                    path: symbol_path,
                    source: e,
                })?;
        }

        if self.cli.json {
            let data_path = output_path(input_path, PATTERN_DATA_SUFFIX, "json");
            let data = serde_json::to_string_pretty(&pattern).map_err(|e| {
                PatternError::PatternExport {
                    path: data_path.clone(),
                    source: e,
                }
            })?;
            std::fs::write(&data_path, data).map_err(|e| PatternError::FileSystem {
                path: data_path,
                operation: "write pattern data",
                source: e,
            })?;
        }

        Ok(())
    }
}

// Charts written by an earlier run are valid PNG inputs; directory scans
// must not reconvert them.
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| {
            stem.ends_with(COLORED_CHART_SUFFIX) || stem.ends_with(SYMBOL_CHART_SUFFIX)
        })
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
}

fn output_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{}.{}", stem.to_string_lossy(), suffix, extension);

    input_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extension_detection() {
        assert!(is_supported(Path::new("photo.png")));
        assert!(is_supported(Path::new("photo.JPG")));
        assert!(is_supported(Path::new("scan.tiff")));
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("archive")));
    }

    #[test]
    fn test_generated_outputs_are_not_reconverted() {
        assert!(is_generated_output(Path::new("photo_chart.png")));
        assert!(is_generated_output(Path::new("photo_symbols.png")));
        assert!(!is_generated_output(Path::new("photo.png")));
    }

    #[test]
    fn test_output_path_keeps_directory() {
        let out = output_path(Path::new("/tmp/in/photo.png"), "_chart", "png");
        assert_eq!(out, PathBuf::from("/tmp/in/photo_chart.png"));

        let json = output_path(Path::new("photo.jpeg"), "_pattern", "json");
        assert_eq!(json, PathBuf::from("photo_pattern.json"));
    }
}
