//! Batch file processing round-trips through the CLI driver

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use stitchgrid::io::cli::{Cli, FileProcessor};
use stitchgrid::pipeline::builder::Pattern;

fn write_source_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mut img = RgbImage::new(16, 16);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 16) as u8, (y * 16) as u8, 128]);
    }
    img.save(&path).unwrap();
    path
}

fn cli_for(target: PathBuf) -> Cli {
    Cli {
        target,
        size: "8x8".to_string(),
        mesh: 14,
        max_colors: 10,
        cell_px: 12,
        symbols: false,
        json: false,
        quiet: true,
        no_skip: false,
    }
}

#[test]
fn test_single_file_produces_colored_chart() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source_image(dir.path(), "photo.png");

    let mut processor = FileProcessor::new(cli_for(input));
    processor.process().unwrap();

    let chart = dir.path().join("photo_chart.png");
    assert!(chart.exists());
    let rendered = image::open(&chart).unwrap().to_rgb8();
    assert_eq!(rendered.width(), 8 * 12);
    assert_eq!(rendered.height(), 8 * 12);
}

#[test]
fn test_symbol_and_json_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_source_image(dir.path(), "photo.png");

    let mut cli = cli_for(input);
    cli.symbols = true;
    cli.json = true;
    let mut processor = FileProcessor::new(cli);
    processor.process().unwrap();

    assert!(dir.path().join("photo_symbols.png").exists());

    let json = std::fs::read_to_string(dir.path().join("photo_pattern.json")).unwrap();
    let pattern: Pattern = serde_json::from_str(&json).unwrap();
    assert_eq!(pattern.width, 8);
    assert_eq!(pattern.height, 8);
    assert!(pattern.colors_used.len() <= 10);
}

#[test]
fn test_directory_processing_skips_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    write_source_image(dir.path(), "a.png");
    write_source_image(dir.path(), "b.png");
    std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

    let mut processor = FileProcessor::new(cli_for(dir.path().to_path_buf()));
    processor.process().unwrap();
    assert!(dir.path().join("a_chart.png").exists());
    assert!(dir.path().join("b_chart.png").exists());
    assert!(!dir.path().join("notes_chart.png").exists());

    // A second pass skips everything and succeeds without rework.
    let before = std::fs::metadata(dir.path().join("a_chart.png"))
        .unwrap()
        .modified()
        .unwrap();
    let mut second = FileProcessor::new(cli_for(dir.path().to_path_buf()));
    second.process().unwrap();
    let after = std::fs::metadata(dir.path().join("a_chart.png"))
        .unwrap()
        .modified()
        .unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_unsupported_target_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not an image").unwrap();

    let mut processor = FileProcessor::new(cli_for(path));
    assert!(processor.process().is_err());
}
