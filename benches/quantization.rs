//! Performance measurement for nearest-palette quantization at varying grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ndarray::Array2;
use stitchgrid::io::configuration::QUANTIZE_CHUNK_SIZE;
use stitchgrid::palette::dmc::dmc_palette;
use stitchgrid::pipeline::quantize::quantize;
use std::hint::black_box;

fn sample_grid(side: usize) -> Array2<[u8; 3]> {
    Array2::from_shape_fn((side, side), |(y, x)| {
        [
            (x * 255 / side.max(1)) as u8,
            (y * 255 / side.max(1)) as u8,
            ((x + y) * 127 / side.max(1)) as u8,
        ]
    })
}

/// Measures quantization cost as the stitch grid grows
fn bench_quantize_grid_sizes(c: &mut Criterion) {
    let palette = dmc_palette();
    let mut group = c.benchmark_group("quantize");

    for side in &[32usize, 64, 128, 256] {
        let samples = sample_grid(*side);
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let indices =
                    quantize(black_box(&samples), &palette, QUANTIZE_CHUNK_SIZE);
                black_box(indices)
            });
        });
    }

    group.finish();
}

/// Measures the effect of batch size on a fixed grid
fn bench_quantize_chunk_sizes(c: &mut Criterion) {
    let palette = dmc_palette();
    let samples = sample_grid(128);
    let mut group = c.benchmark_group("quantize_chunks");

    for chunk in &[512usize, 4096, 50_000] {
        group.bench_with_input(BenchmarkId::from_parameter(chunk), chunk, |b, &chunk| {
            b.iter(|| {
                let indices = quantize(black_box(&samples), &palette, chunk);
                black_box(indices)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_quantize_grid_sizes,
    bench_quantize_chunk_sizes
);
criterion_main!(benches);
